//! Report formatting
//!
//! The two-line report every binary prints. Formatting is kept apart from
//! the runners so the computation surface stays pure and the stdout contract
//! stays byte-stable: estimate to 15 decimal places, elapsed seconds to 6.

use crate::config::RunConfig;
use crate::merge::MergePolicy;
use crate::runner::RunOutcome;

/// Which strategy produced the outcome being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Serial,
    Partitioned(MergePolicy),
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Serial => "serial",
            Mode::Partitioned(policy) => policy.label(),
        }
    }
}

/// Render the two-line report for one run.
pub fn render(mode: Mode, config: &RunConfig, outcome: &RunOutcome) -> String {
    let headline = match mode {
        Mode::Serial => format!(
            "pi estimate ({}, n={}) = {:.15}",
            mode.label(),
            config.terms,
            outcome.estimate
        ),
        Mode::Partitioned(_) => format!(
            "pi estimate ({}, n={}, threads={}) = {:.15}",
            mode.label(),
            config.terms,
            config.threads,
            outcome.estimate
        ),
    };

    format!(
        "{headline}\nelapsed time: {:.6} seconds",
        outcome.elapsed.as_secs_f64()
    )
}
