//! Merge policies for the shared accumulator
//!
//! The interesting part of this crate lives here: how per-worker partial sums
//! are combined into one shared total. The combination step is the only
//! concurrency hazard in the system — the kernel itself is pure — so the
//! hazard is modeled as a selectable strategy rather than an accident of
//! missing locking:
//!
//! - [`MergePolicy::Unsynchronized`] reproduces the textbook data race: a
//!   plain read-modify-write with no exclusion, where concurrent workers can
//!   overwrite each other's updates. Lost updates are the *point*; the
//!   variant exists to be observed, not fixed.
//! - [`MergePolicy::MutexGuarded`] brackets the same read-modify-write with
//!   a scoped lock guard and always produces the exact sum of all partials.
//! - [`MergePolicy::RankOrdered`] serializes merges in worker-rank order by
//!   spinning on a turn counter, which pins the summation order and makes
//!   the total bit-reproducible.
//!
//! Policy values are plain `Copy` descriptors. All per-run merge state (the
//! total, the lock, the turn counter) lives in [`SharedAccumulator`], which
//! is created fresh for every run and discarded after its single post-join
//! read, so no state can leak between runs.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// The partial sum produced by one worker, moved into `combine` exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialResult {
    pub value: f64,
}

/// Typed worker rank, passed directly into the worker entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerIndex(pub u32);

/// The single shared mutable resource of a run.
///
/// The running total is stored as `f64` bits in an `AtomicU64`: individual
/// loads and stores are tear-free, but the load→add→store sequence is not
/// atomic, which is exactly the window the unsynchronized policy exposes.
/// The lock serializes that sequence under `MutexGuarded`; the turn counter
/// orders it under `RankOrdered`. Each field is used only by its policy.
#[derive(Debug, Default)]
pub struct SharedAccumulator {
    bits: AtomicU64,
    lock: Mutex<()>,
    turn: AtomicU32,
}

impl SharedAccumulator {
    /// Fresh accumulator with the total initialized to 0.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current total. Only meaningful to callers after all workers have been
    /// joined; the runner enforces that ordering.
    pub fn total(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    fn read(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    fn write(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }
}

/// Strategy governing how concurrently produced partials are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Read-modify-write with no exclusion. With two or more workers the
    /// interleaving can drop updates, so the total is non-deterministic
    /// across runs. Preserved deliberately to demonstrate the race.
    Unsynchronized,
    /// Read-modify-write under an exclusive lock; at most one worker is in
    /// the critical section at a time and no update is ever lost. Merge
    /// order across workers stays unordered, so totals may differ across
    /// runs by float reassociation only.
    MutexGuarded,
    /// Each worker waits for its turn by rank before merging, fixing the
    /// summation order and making the total bit-reproducible.
    RankOrdered,
}

impl MergePolicy {
    /// Fold one worker's partial into the shared total.
    ///
    /// Called exactly once per worker; the runner guarantees `worker` ranks
    /// are dense in `0..threads`, which `RankOrdered` relies on to make
    /// progress.
    pub fn combine(&self, acc: &SharedAccumulator, worker: WorkerIndex, partial: PartialResult) {
        match self {
            MergePolicy::Unsynchronized => {
                // RACE: another worker can read the same stale total between
                // this read and the write below.
                acc.write(acc.read() + partial.value);
            }
            MergePolicy::MutexGuarded => {
                let _held = acc.lock.lock().expect("accumulator lock poisoned");
                acc.write(acc.read() + partial.value);
                // guard drops here, releasing on every exit path
            }
            MergePolicy::RankOrdered => {
                while acc.turn.load(Ordering::Acquire) != worker.0 {
                    std::hint::spin_loop();
                }
                acc.write(acc.read() + partial.value);
                acc.turn.store(worker.0 + 1, Ordering::Release);
            }
        }
    }

    /// Short name used in reports and benchmark records.
    pub fn label(&self) -> &'static str {
        match self {
            MergePolicy::Unsynchronized => "unsynchronized",
            MergePolicy::MutexGuarded => "mutex",
            MergePolicy::RankOrdered => "rank-ordered",
        }
    }
}
