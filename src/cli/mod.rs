// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap, hands the configuration
// to the bootstrap (Layers 2 and 5) and prints the result.
//
// This is the only layer that writes to stdout:
//
//   bn:  false
//   LstmController(features=6, classes=3, ...)
//   ...module tree...

pub mod args;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use crate::application::bootstrap_use_case::{BootstrapReport, TrainConfig};
use args::TrainArgs;

/// Build the LSTM controller approximator and print its structure.
#[derive(Parser, Debug)]
#[command(
    name = "lstm-controller",
    version,
    about = "Bootstrap an LSTM approximator of a real-time controller and print the model."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: TrainArgs,
}

impl Cli {
    /// The immutable configuration record for this run.
    pub fn config(&self) -> TrainConfig {
        self.args.clone().into()
    }

    /// Build the model and print the report to stdout.
    pub fn run(self) -> Result<()> {
        let cfg = self.config();
        tracing::info!("Starting bootstrap (data dir: '{}', seed: {})", cfg.data, cfg.seed);

        let report = crate::ml::backend::run_bootstrap(cfg)?;

        let stdout = io::stdout();
        write_report(&mut stdout.lock(), &report)?;
        Ok(())
    }
}

/// Print the batch-norm line followed by the model summary.
pub fn write_report(out: &mut impl Write, report: &BootstrapReport) -> io::Result<()> {
    writeln!(out, "bn:  {}", report.batch_norm)?;
    writeln!(out, "{}", report.summary)?;
    out.flush()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(extra: &[&str]) -> Result<TrainConfig, clap::Error> {
        let argv = std::iter::once("lstm-controller").chain(extra.iter().copied());
        Cli::try_parse_from(argv).map(|cli| cli.config())
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        assert_eq!(parse(&[]).unwrap(), TrainConfig::default());
    }

    #[test]
    fn test_every_option_alone() {
        let d = TrainConfig::default;
        let cases: Vec<(Vec<&str>, TrainConfig)> = vec![
            (vec!["--no-cuda"],             TrainConfig { no_cuda: true, ..d() }),
            (vec!["--batchSz", "64"],       TrainConfig { batch_sz: 64, ..d() }),
            (vec!["--bn"],                  TrainConfig { bn: true, ..d() }),
            (vec!["--eps", "0.01"],         TrainConfig { eps: 0.01, ..d() }),
            (vec!["--batchSize", "4"],      TrainConfig { batch_size: 4, ..d() }),
            (vec!["--data", "/tmp/rig"],    TrainConfig { data: "/tmp/rig".into(), ..d() }),
            (vec!["--gpu", "2"],            TrainConfig { gpu: 2, ..d() }),
            (vec!["--noutputs", "6"],       TrainConfig { noutputs: 6, ..d() }),
            (vec!["--eps", "-0.5"],         TrainConfig { eps: -0.5, ..d() }),
            (vec!["--display", "0"],        TrainConfig { display: 0, ..d() }),
            (vec!["--display", "-1"],       TrainConfig { display: -1, ..d() }),
            (vec!["--verbose", "false"],    TrainConfig { verbose: false, ..d() }),
            (vec!["--maxIter", "500"],      TrainConfig { max_iter: 500, ..d() }),
            (vec!["--silent", "false"],     TrainConfig { silent: false, ..d() }),
            (vec!["--useVicon", "no"],      TrainConfig { use_vicon: false, ..d() }),
            (vec!["--squash", "0"],         TrainConfig { squash: false, ..d() }),
            (vec!["--model", "gru"],        TrainConfig { model: "gru".into(), ..d() }),
            (vec!["--real_time_net", "off"], TrainConfig { real_time_net: false, ..d() }),
            (vec!["--seed", "7"],           TrainConfig { seed: 7, ..d() }),
            (vec!["--hiddenSize", "3"],     TrainConfig { hidden_size: vec!["3".into()], ..d() }),
        ];

        for (argv, expected) in cases {
            assert_eq!(parse(&argv).unwrap(), expected, "argv: {argv:?}");
        }
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let err = parse(&["--learningRate", "0.1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_positional_argument_is_rejected() {
        assert!(parse(&["extra"]).is_err());
    }

    #[test]
    fn test_non_integer_batch_sz() {
        let err = parse(&["--batchSz", "abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("batchSz"));
    }

    #[test]
    fn test_negative_unsigned_values_fail_by_name() {
        for name in ["--gpu", "--seed"] {
            let err = parse(&[name, "-1"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "{name}");
            assert!(err.to_string().contains(name), "{name}: {err}");
        }
    }

    #[test]
    fn test_non_boolean_verbose() {
        let err = parse(&["--verbose", "maybe"]).unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_flag_rejects_value() {
        assert!(parse(&["--bn=true"]).is_err());
    }

    #[test]
    fn test_hidden_size_quoted_is_one_token() {
        let cfg = parse(&["--hiddenSize", "12 8 4"]).unwrap();
        assert_eq!(cfg.hidden_size, vec!["12 8 4".to_string()]);
    }

    #[test]
    fn test_hidden_size_accepts_several_tokens() {
        let cfg = parse(&["--hiddenSize", "12", "8", "4"]).unwrap();
        assert_eq!(cfg.hidden_size, vec!["12", "8", "4"]);
        assert_eq!(cfg.declared_hidden_widths().unwrap(), vec![12, 8, 4]);
    }

    #[test]
    fn test_write_report() {
        let report = BootstrapReport { batch_norm: false, summary: "Model {\n}".into() };
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "bn:  false\nModel {\n}\n");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
