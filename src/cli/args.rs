// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Every training option, with the exact spelling the research
// scripts already use (camelCase and snake_case kept as-is,
// which is why each field names its `long` explicitly).
//
// Plain flags (--no-cuda, --bn) take no value. The boolean
// options that default to true take an explicit value instead,
// e.g. `--verbose false`; clap's boolish parser accepts
// true/false, yes/no, on/off and 1/0.
//
// Numeric options take values that start with '-' (`--display -1`,
// `--eps -0.5`). `--gpu` and `--seed` are unsigned, so a negative
// value there reaches the parser and fails as an invalid value
// instead of being mistaken for a flag.

use clap::{builder::BoolishValueParser, ArgAction, Args};

use crate::application::bootstrap_use_case::TrainConfig;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// Disable the accelerator and run on the CPU
    #[arg(long = "no-cuda")]
    pub no_cuda: bool,

    /// Batch size used by the sequence trainer
    #[arg(long = "batchSz", default_value_t = 150)]
    pub batch_sz: usize,

    /// Add batch normalisation to the model
    #[arg(long = "bn")]
    pub bn: bool,

    /// Numerical stability epsilon
    #[arg(long = "eps", default_value_t = 1e-4, allow_negative_numbers = true)]
    pub eps: f64,

    /// Batch size used by the real-time predictor
    #[arg(long = "batchSize", default_value_t = 1)]
    pub batch_size: usize,

    /// Directory holding the training data
    #[arg(long = "data", default_value = "data")]
    pub data: String,

    /// Accelerator device index
    #[arg(long = "gpu", default_value_t = 0, allow_negative_numbers = true)]
    pub gpu: usize,

    /// Number of network outputs
    #[arg(long = "noutputs", default_value_t = 3)]
    pub noutputs: usize,

    /// Plot/display cadence
    #[arg(long = "display", default_value_t = 1, allow_negative_numbers = true)]
    pub display: i64,

    /// Verbose logging
    #[arg(
        long = "verbose",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
    )]
    pub verbose: bool,

    /// Maximum training iterations
    #[arg(long = "maxIter", default_value_t = 20)]
    pub max_iter: usize,

    /// Suppress training output
    #[arg(
        long = "silent",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
    )]
    pub silent: bool,

    /// Read poses from the Vicon motion-capture system
    #[arg(
        long = "useVicon",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
    )]
    pub use_vicon: bool,

    /// Squash the network outputs
    #[arg(
        long = "squash",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
    )]
    pub squash: bool,

    /// Network architecture variant
    #[arg(long = "model", default_value = "lstm")]
    pub model: String,

    /// Use the real-time network approximator
    #[arg(
        long = "real_time_net",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
    )]
    pub real_time_net: bool,

    /// Random seed
    #[arg(long = "seed", default_value_t = 123, allow_negative_numbers = true)]
    pub seed: u64,

    /// Hidden layer widths, kept as raw tokens (default is the single token "9 6 6")
    #[arg(long = "hiddenSize", num_args = 1.., default_value = "9 6 6")]
    pub hidden_size: Vec<String>,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            no_cuda:       a.no_cuda,
            batch_sz:      a.batch_sz,
            bn:            a.bn,
            eps:           a.eps,
            batch_size:    a.batch_size,
            data:          a.data,
            gpu:           a.gpu,
            noutputs:      a.noutputs,
            display:       a.display,
            verbose:       a.verbose,
            max_iter:      a.max_iter,
            silent:        a.silent,
            use_vicon:     a.use_vicon,
            squash:        a.squash,
            model:         a.model,
            real_time_net: a.real_time_net,
            seed:          a.seed,
            hidden_size:   a.hidden_size,
        }
    }
}
