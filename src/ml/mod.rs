// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn framework code lives here. The other layers only see
// the domain traits (ModelFactory, ModelSummary) and the report.
//
//   model.rs   — LstmController: stacked LSTM, optional batch
//                norm, linear output head
//   factory.rs — BurnModelFactory: builds LstmController on a
//                given device, validating sizes first
//   backend.rs — picks CPU or accelerator backend from the
//                training config and runs the bootstrap on it
//
// Reference: Burn Book §3 (Building Blocks)

/// LSTM controller architecture
pub mod model;

/// ModelFactory implementation for Burn backends
pub mod factory;

/// Backend and device selection
pub mod backend;
