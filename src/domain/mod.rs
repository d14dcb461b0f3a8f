// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing the control problem
// and the model capability the bootstrap needs.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO clap types, NO printing
//   - Only plain Rust structs and traits
//
// The concrete LSTM lives in Layer 5 (ml) and plugs in by
// implementing the traits declared in traits.rs.

// Fixed input/output sizes of the controller approximator
pub mod problem;

// Model factory and summary capabilities
pub mod traits;
