// ============================================================
// Layer 2 — BootstrapUseCase
// ============================================================
// Orchestrates the single action of this program, in order:
//
//   Step 1: Log the configuration        (Layer 6 - infra/tracing)
//   Step 2: Derive the problem shape     (Layer 3 - domain)
//   Step 3: Build the model              (Layer 5 - ml, via ModelFactory)
//   Step 4: Hand a report back to the CLI (Layer 1 prints it)
//
// The training loop, data loading and optimiser that will later
// consume most of TrainConfig are not wired in yet. Those fields
// are carried through unchanged so the command line stays stable.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{
    problem::ProblemShape,
    traits::{ModelFactory, ModelSummary},
};

// ─── Training Configuration ──────────────────────────────────────────────────
// One field per command-line option. Built once from the parsed
// arguments and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub no_cuda:       bool,
    pub batch_sz:      usize,
    pub bn:            bool,
    pub eps:           f64,
    pub batch_size:    usize,
    pub data:          String,
    pub gpu:           usize,
    pub noutputs:      usize,
    pub display:       i64,
    pub verbose:       bool,
    pub max_iter:      usize,
    pub silent:        bool,
    pub use_vicon:     bool,
    pub squash:        bool,
    pub model:         String,
    pub real_time_net: bool,
    pub seed:          u64,
    /// Raw `--hiddenSize` tokens, exactly as given on the command line.
    /// The default is ONE token, "9 6 6", not three widths.
    pub hidden_size:   Vec<String>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            no_cuda:       false,
            batch_sz:      150,
            bn:            false,
            eps:           1e-4,
            batch_size:    1,
            data:          "data".to_string(),
            gpu:           0,
            noutputs:      3,
            display:       1,
            verbose:       true,
            max_iter:      20,
            silent:        true,
            use_vicon:     true,
            squash:        true,
            model:         "lstm".to_string(),
            real_time_net: true,
            seed:          123,
            hidden_size:   vec!["9 6 6".to_string()],
        }
    }
}

impl TrainConfig {
    /// Whether the run asks for an accelerator device.
    pub fn wants_accelerator(&self) -> bool {
        !self.no_cuda
    }

    /// Interpret the raw `hidden_size` tokens as layer widths.
    ///
    /// Every token is split on whitespace, so both `"9 6 6"` and
    /// `["9", "6", "6"]` give `[9, 6, 6]`. The stored field is left
    /// untouched; nothing downstream consumes these widths yet.
    pub fn declared_hidden_widths(&self) -> Result<Vec<usize>> {
        let widths = self
            .hidden_size
            .iter()
            .flat_map(|token| token.split_whitespace())
            .map(|w| {
                w.parse::<usize>()
                    .with_context(|| format!("hidden width '{w}' is not a non-negative integer"))
            })
            .collect::<Result<Vec<usize>>>()?;

        if widths.is_empty() {
            bail!("hiddenSize holds no widths");
        }
        Ok(widths)
    }
}

// ─── BootstrapReport ─────────────────────────────────────────────────────────
/// What the CLI layer prints once the model exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub batch_norm: bool,
    pub summary:    String,
}

// ─── BootstrapUseCase ────────────────────────────────────────────────────────
pub struct BootstrapUseCase<F: ModelFactory> {
    config:  TrainConfig,
    factory: F,
}

impl<F: ModelFactory> BootstrapUseCase<F> {
    pub fn new(config: TrainConfig, factory: F) -> Self {
        Self { config, factory }
    }

    /// Configure, construct, report. Any factory failure is fatal.
    pub fn execute(&self) -> Result<BootstrapReport> {
        let cfg = &self.config;

        // ── Step 1: Log the configuration ─────────────────────────────────────
        tracing::debug!("Training config: {}", serde_json::to_string(cfg)?);
        match cfg.declared_hidden_widths() {
            // hiddenSize is kept as raw tokens on purpose; only report what
            // the tokens would mean as widths.
            Ok(widths) => tracing::debug!(
                "hiddenSize tokens {:?} declare widths {:?} (not applied)",
                cfg.hidden_size, widths,
            ),
            Err(e) => tracing::warn!(
                "hiddenSize tokens {:?} do not describe layer widths: {e:#}",
                cfg.hidden_size,
            ),
        }

        // ── Step 2: Derive the problem shape ──────────────────────────────────
        let shape = ProblemShape::from_config(cfg);
        tracing::info!(
            "Building '{}' model: {} features, {} classes, batch_norm={}",
            cfg.model, shape.n_features, shape.n_classes, shape.batch_norm,
        );

        // ── Step 3: Build the model ───────────────────────────────────────────
        let model = self
            .factory
            .build(shape.n_features, shape.n_classes, shape.batch_norm)
            .context("failed to construct model")?;

        // ── Step 4: Report ────────────────────────────────────────────────────
        Ok(BootstrapReport {
            batch_norm: shape.batch_norm,
            summary:    model.summary(),
        })
    }
}
