//! Shared CLI plumbing for the pi binaries
//!
//! Each binary owns its own positional surface; what they share lives here:
//! the verbosity flags, the tracing subscriber setup, and argument parsing
//! with the usage-error contract (message to stderr, exit code 1, no
//! computation attempted).

use clap::{Args, Parser};

/// Flags common to every binary.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse arguments, exiting 1 with a usage message on stderr when they are
/// malformed. Wrong argument count never reaches the computation.
pub fn parse_or_usage<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders --help/--version as "errors" too; those keep
            // their success exit code.
            if err.use_stderr() {
                eprint!("{err}");
                std::process::exit(1);
            }
            print!("{err}");
            std::process::exit(0);
        }
    }
}

/// Set up logging based on verbosity. Everything goes to stderr so the
/// report lines on stdout stay clean; `RUST_LOG` takes precedence when set.
pub fn setup_logging(global: &GlobalArgs) {
    if global.quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match global.verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
