// ============================================================
// Layer 5 — LSTM Controller Model
// ============================================================
// Stacked LSTM that approximates the real-time controller.
//
//   input  [batch, seq, d_input]
//     │
//     ▼
//   Lstm(d_input → 9) → Lstm(9 → 6) → Lstm(6 → 6)
//     │
//     ▼
//   BatchNorm over the hidden channels   (only with --bn)
//     │
//     ▼
//   Linear(6 → d_output)
//     │
//     ▼
//   output [batch, seq, d_output]
//
// Reference: Burn Book §3 (Building Blocks), burn `Lstm` example

use burn::{
    nn::{BatchNorm, BatchNormConfig, Linear, LinearConfig, Lstm, LstmConfig},
    prelude::*,
};

use crate::domain::traits::ModelSummary;

/// Widths of the stacked LSTM layers, first to last.
pub const DEFAULT_HIDDEN_WIDTHS: [usize; 3] = [9, 6, 6];

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize.
#[derive(Config, Debug)]
pub struct LstmControllerConfig {
    pub d_input:      usize,
    pub d_output:     usize,
    pub hidden_sizes: Vec<usize>,
    pub batch_norm:   bool,
}

impl LstmControllerConfig {
    /// Burn panics on zero-sized layers; `BurnModelFactory` checks the
    /// feature and class counts before calling.
    pub fn init<B: Backend>(&self, device: &B::Device) -> LstmController<B> {
        let mut d_in = self.d_input;
        let layers: Vec<Lstm<B>> = self
            .hidden_sizes
            .iter()
            .map(|&d_hidden| {
                let layer = LstmConfig::new(d_in, d_hidden, true).init(device);
                d_in = d_hidden;
                layer
            })
            .collect();

        // d_in now holds the width of the last LSTM layer
        let norm = self
            .batch_norm
            .then(|| BatchNormConfig::new(d_in).init(device));
        let head = LinearConfig::new(d_in, self.d_output).init(device);

        LstmController {
            layers,
            norm,
            head,
            d_input:  self.d_input,
            d_output: self.d_output,
        }
    }
}

#[derive(Module, Debug)]
pub struct LstmController<B: Backend> {
    pub layers:   Vec<Lstm<B>>,
    pub norm:     Option<BatchNorm<B>>,
    pub head:     Linear<B>,
    pub d_input:  usize,
    pub d_output: usize,
}

impl<B: Backend> LstmController<B> {
    /// input: [batch, seq, d_input] → [batch, seq, d_output]
    pub fn forward(&self, input: Tensor<B, 3>) -> Tensor<B, 3> {
        let mut x = input;
        for layer in &self.layers {
            let (output, _state) = layer.forward(x, None);
            x = output;
        }

        // BatchNorm normalises dim 1, so move hidden channels there and back.
        if let Some(norm) = &self.norm {
            x = norm.forward(x.swap_dims(1, 2)).swap_dims(1, 2);
        }

        self.head.forward(x)
    }

    pub fn uses_batch_norm(&self) -> bool {
        self.norm.is_some()
    }

    /// Hidden width of each LSTM layer, first to last.
    pub fn hidden_widths(&self) -> Vec<usize> {
        self.layers.iter().map(|layer| layer.d_hidden).collect()
    }
}

impl<B: Backend> ModelSummary for LstmController<B> {
    fn summary(&self) -> String {
        format!(
            "LstmController(features={}, classes={}, hidden={:?}, batch_norm={}, params={})\n{}",
            self.d_input,
            self.d_output,
            self.hidden_widths(),
            self.uses_batch_norm(),
            self.num_params(),
            self,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray<f32>;

    fn build(batch_norm: bool) -> LstmController<TestBackend> {
        let device = Default::default();
        LstmControllerConfig::new(6, 3, DEFAULT_HIDDEN_WIDTHS.to_vec(), batch_norm)
            .init::<TestBackend>(&device)
    }

    #[test]
    fn test_forward_shape() {
        let model = build(false);
        let input = Tensor::<TestBackend, 3>::zeros([2, 5, 6], &Default::default());
        assert_eq!(model.forward(input).dims(), [2, 5, 3]);
    }

    #[test]
    fn test_forward_shape_with_batch_norm() {
        let model = build(true);
        let input = Tensor::<TestBackend, 3>::ones([4, 7, 6], &Default::default());
        assert_eq!(model.forward(input).dims(), [4, 7, 3]);
    }

    #[test]
    fn test_layer_stack_follows_hidden_widths() {
        let model = build(false);
        assert_eq!(model.hidden_widths(), vec![9, 6, 6]);
        assert!(!model.uses_batch_norm());
        assert!(build(true).uses_batch_norm());
    }

    #[test]
    fn test_custom_hidden_widths() {
        let model = LstmControllerConfig::new(6, 3, vec![12, 8], false)
            .init::<TestBackend>(&Default::default());
        assert_eq!(model.hidden_widths(), vec![12, 8]);
        let input = Tensor::<TestBackend, 3>::zeros([1, 4, 6], &Default::default());
        assert_eq!(model.forward(input).dims(), [1, 4, 3]);
    }

    #[test]
    fn test_batch_norm_adds_parameters() {
        assert!(build(true).num_params() > build(false).num_params());
    }

    #[test]
    fn test_summary_header() {
        let summary = build(true).summary();
        let header = summary.lines().next().unwrap();
        assert!(header.starts_with(
            "LstmController(features=6, classes=3, hidden=[9, 6, 6], batch_norm=true, params="
        ));
        assert!(summary.lines().count() > 1);
    }
}
