//! Run configuration
//!
//! The classic versions of this exercise keep `thread_count` and `n` as
//! process-wide globals; here they are an explicit value constructed once at
//! startup, validated before any worker is spawned, and immutable for the
//! duration of a run.

use anyhow::Result;

/// Immutable configuration for one reduction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of worker threads (≥ 1).
    pub threads: u32,
    /// Number of series terms. Negative counts are unrepresentable by type.
    pub terms: u64,
}

impl RunConfig {
    /// Build a validated configuration. Fails fast on a zero thread count so
    /// an invalid run never spawns a worker.
    pub fn new(threads: u32, terms: u64) -> Result<Self> {
        anyhow::ensure!(threads >= 1, "thread count must be at least 1, got {threads}");
        Ok(Self { threads, terms })
    }

    /// Configuration for a single-threaded run over the whole range.
    pub fn serial(terms: u64) -> Self {
        Self { threads: 1, terms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_thread_count() {
        let config = RunConfig::new(4, 1000).unwrap();
        assert_eq!(config.threads, 4);
        assert_eq!(config.terms, 1000);
    }

    #[test]
    fn test_rejects_zero_threads() {
        assert!(RunConfig::new(0, 1000).is_err());
    }

    #[test]
    fn test_zero_terms_is_valid() {
        assert!(RunConfig::new(1, 0).is_ok());
    }
}
