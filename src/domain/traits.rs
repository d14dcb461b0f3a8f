// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The bootstrap never names a concrete network type. It asks a
// ModelFactory for a model and asks that model for a summary.
//
// Implementations:
//   - BurnModelFactory (ml::factory) → LstmController on a Burn backend
//   - test fakes that record the arguments they were called with

use anyhow::Result;

// ─── ModelSummary ─────────────────────────────────────────────────────────────
/// A constructed model that can describe itself for diagnostics.
pub trait ModelSummary {
    /// Human-readable, multi-line description of the model structure.
    fn summary(&self) -> String;
}

// ─── ModelFactory ─────────────────────────────────────────────────────────────
/// Anything that can build a model from the problem shape.
pub trait ModelFactory {
    /// The model type this factory produces.
    type Model: ModelSummary;

    /// Build a fresh model.
    ///
    /// Returns an error when the arguments describe a model that
    /// cannot exist (e.g. zero inputs); callers treat it as fatal.
    fn build(
        &self,
        n_features: usize,
        n_classes:  usize,
        batch_norm: bool,
    ) -> Result<Self::Model>;
}
