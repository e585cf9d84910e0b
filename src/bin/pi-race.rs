//! Unsynchronized parallel reduction: `pi-race <threads> <n>`
//!
//! The merge step deliberately runs without exclusion, so with two or more
//! threads the printed estimate can lose updates and varies across runs.

use anyhow::Result;
use clap::Parser;

use leibniz::cli::{self, GlobalArgs};
use leibniz::config::RunConfig;
use leibniz::merge::MergePolicy;
use leibniz::report::{self, Mode};
use leibniz::runner::PartitionedRunner;

/// Estimate pi in parallel with an unsynchronized (racy) merge
#[derive(Parser)]
#[command(name = "pi-race", version)]
struct Cli {
    /// Number of worker threads
    threads: u32,

    /// Number of series terms
    n: u64,

    #[command(flatten)]
    global: GlobalArgs,
}

fn main() -> Result<()> {
    let cli: Cli = cli::parse_or_usage();
    cli::setup_logging(&cli.global);

    let config = RunConfig::new(cli.threads, cli.n)?;
    let policy = MergePolicy::Unsynchronized;
    let outcome = PartitionedRunner::run(config, policy)?;
    println!("{}", report::render(Mode::Partitioned(policy), &config, &outcome));

    Ok(())
}
