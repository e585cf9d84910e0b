//! Computation runners
//!
//! Two drivers over the same kernel, differing only in execution and
//! reduction discipline: [`serial`] walks the full range on the calling
//! thread, [`partitioned`] fans the range out to a fixed batch of worker
//! threads and merges their partials under a caller-chosen
//! [`MergePolicy`](crate::merge::MergePolicy). Both time the computation
//! only, never argument parsing or printing.

use std::time::Duration;

pub mod partitioned;
pub mod serial;

pub use partitioned::PartitionedRunner;
pub use serial::SerialRunner;

/// What a runner hands back to the reporter: the π estimate and the
/// wall-clock duration of the computation itself.
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub estimate: f64,
    pub elapsed: Duration,
}
