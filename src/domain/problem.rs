// ============================================================
// Layer 3 — Problem Shape
// ============================================================
// The network maps the measured head state plus reference
// signals onto the actuator commands of the soft-robot rig.
//
//   inputs  (6): the features fed to the network at each step
//   outputs (3): z, pitch and yaw predictions
//
// These sizes are properties of the rig, not of the run, so
// they are constants. Only the batch-norm toggle comes from
// the training configuration.

use crate::application::bootstrap_use_case::TrainConfig;

/// Number of input features per time step.
pub const N_FEATURES: usize = 6;

/// Number of predicted outputs per time step.
pub const N_CLASSES: usize = 3;

/// Everything the model factory needs to know about the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemShape {
    pub n_features: usize,
    pub n_classes:  usize,
    pub batch_norm: bool,
}

impl ProblemShape {
    /// Derive the shape for a run.
    ///
    /// `n_features` and `n_classes` ignore the configuration entirely
    /// (`--noutputs` included); `batch_norm` is copied from `--bn`.
    pub fn from_config(cfg: &TrainConfig) -> Self {
        Self {
            n_features: N_FEATURES,
            n_classes:  N_CLASSES,
            batch_norm: cfg.bn,
        }
    }
}
