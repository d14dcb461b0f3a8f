// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only:
//   - No Burn code here (that's Layer 5)
//   - No printing here (that's Layer 1)
//
// The bootstrap is generic over the domain ModelFactory, so it
// runs the same against the real Burn model and test fakes.

// Training configuration record and the configure → construct → report flow
pub mod bootstrap_use_case;
