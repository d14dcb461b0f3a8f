// ============================================================
// Layer 6 — Logging Setup
// ============================================================
// Installs the process-wide tracing subscriber, once, at the
// start of main. Logs go to stderr: stdout carries the report.
//
// Filter:
//   RUST_LOG set    → used as-is (e.g. lstm_controller=debug)
//   otherwise       → lstm_controller=info with --verbose true,
//                     lstm_controller=warn with --verbose false

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Log directive for this crate's own targets.
pub fn crate_directive(verbose: bool) -> &'static str {
    if verbose {
        "lstm_controller=info"
    } else {
        "lstm_controller=warn"
    }
}

/// Pick the filter: a usable `rust_log` wins, else the `--verbose` default.
pub fn env_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(crate_directive(verbose)))
}

pub fn init(verbose: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}
