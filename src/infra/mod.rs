// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that belong to no single layer.
//
//   logging.rs — tracing subscriber setup (stderr, env filter,
//                level driven by --verbose)

/// Process-wide tracing subscriber
pub mod logging;
