//! Mutex-guarded parallel reduction: `pi-mutex <threads> <n>`

use anyhow::Result;
use clap::Parser;

use leibniz::cli::{self, GlobalArgs};
use leibniz::config::RunConfig;
use leibniz::merge::MergePolicy;
use leibniz::report::{self, Mode};
use leibniz::runner::PartitionedRunner;

/// Estimate pi in parallel with a mutex-guarded merge
#[derive(Parser)]
#[command(name = "pi-mutex", version)]
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
    let policy = MergePolicy::MutexGuarded;
    let outcome = PartitionedRunner::run(config, policy)?;
    println!("{}", report::render(Mode::Partitioned(policy), &config, &outcome));

    Ok(())
}
