//! Benchmark sweep across strategies, thread counts, and term counts
//!
//! Reproduces the original project's benchmark harness: every strategy is
//! timed over each `(threads, terms)` pair for a number of trials, and the
//! rows come out as an aligned table, CSV, or JSON.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use serde::Serialize;

use leibniz::cli::{self, GlobalArgs};
use leibniz::config::RunConfig;
use leibniz::merge::MergePolicy;
use leibniz::runner::{PartitionedRunner, RunOutcome, SerialRunner};

/// Benchmark pi estimation strategies across thread and term counts
#[derive(Parser)]
#[command(name = "pi-bench", version)]
struct Cli {
    /// Thread counts to sweep (defaults to a doubling ladder up to the CPU count)
    #[arg(long, value_delimiter = ',')]
    threads: Vec<u32>,

    /// Term counts to sweep
    #[arg(long, value_delimiter = ',', default_value = "1000000")]
    terms: Vec<u64>,

    /// Trials per configuration
    #[arg(long, default_value = "3")]
    trials: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: Format,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

/// One timed run. The CSV column order mirrors the original project's
/// benchmark file.
#[derive(Serialize)]
struct BenchRecord {
    strategy: &'static str,
    threads: u32,
    terms: u64,
    trial: u32,
    seconds: f64,
    estimate: f64,
}

impl BenchRecord {
    fn new(strategy: &'static str, threads: u32, terms: u64, trial: u32, outcome: RunOutcome) -> Self {
        Self {
            strategy,
            threads,
            terms,
            trial,
            seconds: outcome.elapsed.as_secs_f64(),
            estimate: outcome.estimate,
        }
    }
}

/// 1, 2, 4, ... up to the detected CPU count.
fn default_thread_ladder() -> Vec<u32> {
    let cpus = num_cpus::get().max(1) as u32;
    let mut ladder = Vec::new();
    let mut threads = 1;
    while threads <= cpus {
        ladder.push(threads);
        threads *= 2;
    }
    ladder
}

fn sweep(thread_counts: &[u32], term_counts: &[u64], trials: u32) -> Result<Vec<BenchRecord>> {
    const POLICIES: [MergePolicy; 3] = [
        MergePolicy::Unsynchronized,
        MergePolicy::MutexGuarded,
        MergePolicy::RankOrdered,
    ];

    let mut records = Vec::new();

    for &terms in term_counts {
        for trial in 0..trials {
            let outcome = SerialRunner::run(terms);
            records.push(BenchRecord::new("serial", 1, terms, trial, outcome));
        }

        for &threads in thread_counts {
            let config = RunConfig::new(threads, terms)?;
            for policy in POLICIES {
                for trial in 0..trials {
                    tracing::debug!(
                        policy = policy.label(),
                        threads,
                        terms,
                        trial,
                        "benchmark run"
                    );
                    let outcome = PartitionedRunner::run(config, policy)?;
                    records.push(BenchRecord::new(policy.label(), threads, terms, trial, outcome));
                }
            }
        }
    }

    Ok(records)
}

fn print_table(records: &[BenchRecord]) {
    println!(
        "{}",
        style(format!(
            "{:<15} {:>7} {:>12} {:>6} {:>12} {:>20}",
            "strategy", "threads", "terms", "trial", "seconds", "estimate"
        ))
        .bold()
    );

    for record in records {
        println!(
            "{:<15} {:>7} {:>12} {:>6} {:>12.6} {:>20.15}",
            record.strategy, record.threads, record.terms, record.trial, record.seconds, record.estimate
        );
    }
}

fn print_csv(records: &[BenchRecord]) {
    println!("strategy,threads,terms,trial,seconds,estimate");
    for record in records {
        println!(
            "{},{},{},{},{:.6},{:.15}",
            record.strategy, record.threads, record.terms, record.trial, record.seconds, record.estimate
        );
    }
}

fn main() -> Result<()> {
    let cli: Cli = cli::parse_or_usage();
    cli::setup_logging(&cli.global);

    let thread_counts = if cli.threads.is_empty() {
        default_thread_ladder()
    } else {
        cli.threads.clone()
    };

    let records = sweep(&thread_counts, &cli.terms, cli.trials)?;

    match cli.format {
        Format::Table => print_table(&records),
        Format::Csv => print_csv(&records),
        Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }

    Ok(())
}
