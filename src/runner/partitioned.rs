//! Partitioned multi-threaded runner

use std::time::Instant;

use anyhow::Result;

use crate::config::RunConfig;
use crate::merge::{MergePolicy, PartialResult, SharedAccumulator, WorkerIndex};
use crate::partition;
use crate::runner::RunOutcome;
use crate::series;

/// Fans the index range out to exactly `config.threads` OS threads, one per
/// contiguous block, and merges their partials through the chosen policy.
///
/// A single fixed batch of workers is spawned and joined once per run — no
/// pool reuse, no work queue. The scope exit below is the mandatory barrier
/// join: the accumulator is read strictly after every worker has terminated,
/// in both policies. Under [`MergePolicy::Unsynchronized`] the merge itself
/// has no ordering guarantee; that defect is the configuration under study.
pub struct PartitionedRunner;

impl PartitionedRunner {
    pub fn run(config: RunConfig, policy: MergePolicy) -> Result<RunOutcome> {
        let ranges = partition::partition(&config);
        let acc = SharedAccumulator::new();

        tracing::debug!(
            threads = config.threads,
            terms = config.terms,
            policy = policy.label(),
            "starting partitioned run"
        );

        let started = Instant::now();

        crossbeam::thread::scope(|s| {
            for (rank, range) in ranges.iter().copied().enumerate() {
                let acc = &acc;
                s.spawn(move |_| {
                    let partial = PartialResult {
                        value: series::sum_terms(range.start, range.count),
                    };
                    policy.combine(acc, WorkerIndex(rank as u32), partial);
                });
            }
            // scope exit joins every worker before the total is read
        })
        .map_err(|_| anyhow::anyhow!("worker thread panicked during partitioned run"))?;

        let elapsed = started.elapsed();

        Ok(RunOutcome {
            estimate: 4.0 * acc.total(),
            elapsed,
        })
    }
}
