//! # Leibniz - Parallel π estimation with selectable merge policies
//!
//! A teaching-grade parallel reduction: the Leibniz series partial sum
//! `Σ (-1)^i / (2i+1) → π/4`, computed serially and by a fixed batch of
//! worker threads over disjoint index blocks. The variable piece is how the
//! per-worker partials are folded into one shared total:
//!
//! - **Unsynchronized** — the textbook lost-update race, preserved on purpose
//! - **MutexGuarded** — the same merge under a scoped exclusive lock
//! - **RankOrdered** — merges serialized by worker rank for bit-reproducible
//!   totals
//!
//! ## Quick Start
//!
//! ```bash
//! # Serial baseline
//! pi-serial 100000000
//!
//! # Watch the race lose updates
//! pi-race 4 100000000
//!
//! # Correct parallel reduction
//! pi-mutex 4 100000000
//!
//! # Sweep all strategies across thread counts
//! pi-bench --terms 10000000 --trials 3
//! ```
//!
//! ## Library Usage
//!
//! ```rust
//! use leibniz::config::RunConfig;
//! use leibniz::merge::MergePolicy;
//! use leibniz::runner::{PartitionedRunner, SerialRunner};
//!
//! let serial = SerialRunner::run(1_000_000);
//!
//! let config = RunConfig::new(4, 1_000_000)?;
//! let parallel = PartitionedRunner::run(config, MergePolicy::MutexGuarded)?;
//!
//! let relative = ((parallel.estimate - serial.estimate) / serial.estimate).abs();
//! assert!(relative < 1e-6);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod merge;
pub mod partition;
pub mod report;
pub mod runner;
pub mod series;
