#![recursion_limit = "256"]

mod cli;
mod application;
mod domain;
mod ml;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Parse first: usage errors exit with status 2 before anything else runs,
    // and --verbose decides the log level.
    let cli = Cli::parse();
    infra::logging::init(cli.args.verbose)?;
    cli.run()
}
