// ============================================================
// Layer 5 — Burn Model Factory
// ============================================================
// Implements the domain ModelFactory trait for LstmController
// on any Burn backend. The backend and device are chosen once
// by ml::backend; the factory only holds the device handle.

use anyhow::{bail, Result};
use burn::prelude::*;

use crate::domain::traits::ModelFactory;
use crate::ml::model::{LstmController, LstmControllerConfig, DEFAULT_HIDDEN_WIDTHS};

pub struct BurnModelFactory<B: Backend> {
    device:       B::Device,
    hidden_sizes: Vec<usize>,
}

impl<B: Backend> BurnModelFactory<B> {
    /// Factory for the default [9, 6, 6] LSTM stack on `device`.
    pub fn new(device: B::Device) -> Self {
        Self {
            device,
            hidden_sizes: DEFAULT_HIDDEN_WIDTHS.to_vec(),
        }
    }
}

impl<B: Backend> ModelFactory for BurnModelFactory<B> {
    type Model = LstmController<B>;

    fn build(
        &self,
        n_features: usize,
        n_classes:  usize,
        batch_norm: bool,
    ) -> Result<LstmController<B>> {
        // Burn asserts on zero-sized layers; turn that into an error.
        if n_features == 0 || n_classes == 0 {
            bail!("model needs at least one feature and one class (got {n_features} features, {n_classes} classes)");
        }

        let config = LstmControllerConfig::new(
            n_features,
            n_classes,
            self.hidden_sizes.clone(),
            batch_norm,
        );
        let model = config.init::<B>(&self.device);

        // One zero step through the network must come out with n_classes values.
        let sample = Tensor::<B, 3>::zeros([1, 1, n_features], &self.device);
        let [_, _, d_out] = model.forward(sample).dims();
        if d_out != n_classes {
            bail!("model produced {d_out} outputs per step, expected {n_classes}");
        }

        tracing::info!(
            "Model ready: {} LSTM layers {:?}, {} parameters on {:?}",
            model.layers.len(), model.hidden_widths(), model.num_params(), self.device,
        );
        Ok(model)
    }
}
