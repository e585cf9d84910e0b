//! Single-threaded baseline: `pi-serial <n>`

use anyhow::Result;
use clap::Parser;

use leibniz::cli::{self, GlobalArgs};
use leibniz::config::RunConfig;
use leibniz::report::{self, Mode};
use leibniz::runner::SerialRunner;

/// Estimate pi with a single-threaded Leibniz series partial sum
#[derive(Parser)]
#[command(name = "pi-serial", version)]
struct Cli {
    /// Number of series terms
    n: u64,

    #[command(flatten)]
    global: GlobalArgs,
}

fn main() -> Result<()> {
    let cli: Cli = cli::parse_or_usage();
    cli::setup_logging(&cli.global);

    let config = RunConfig::serial(cli.n);
    let outcome = SerialRunner::run(config.terms);
    println!("{}", report::render(Mode::Serial, &config, &outcome));

    Ok(())
}
