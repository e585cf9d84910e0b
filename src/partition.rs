//! Range partitioning for worker threads
//!
//! Splits the term index space `[0, n)` into contiguous, equal-sized blocks,
//! one per worker. The split mirrors the classic textbook decomposition:
//! `block = n / threads`, and when `n` does not divide evenly the trailing
//! `n mod threads` terms are silently dropped rather than redistributed.
//! That truncation is a documented, deliberate simplification — callers that
//! need exact coverage must pick a thread count that divides `n`.

use crate::config::RunConfig;

/// A contiguous block of series term indices assigned to one worker.
///
/// Ranges produced by [`partition`] are pairwise disjoint and ascending;
/// their union covers `[0, n)` minus at most `n mod threads` trailing terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRange {
    /// First term index in the block.
    pub start: u64,
    /// Number of terms in the block.
    pub count: u64,
}

impl SeriesRange {
    /// One-past-the-end term index.
    pub fn end(&self) -> u64 {
        self.start + self.count
    }
}

/// Assign each worker its block of the index space.
///
/// Worker `r` (0-indexed) receives `[r * block, (r + 1) * block)` with
/// `block = terms / threads`. With `terms < threads` every block is empty.
pub fn partition(config: &RunConfig) -> Vec<SeriesRange> {
    let block = config.terms / u64::from(config.threads);

    (0..u64::from(config.threads))
        .map(|rank| SeriesRange {
            start: rank * block,
            count: block,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(threads: u32, terms: u64) -> Vec<SeriesRange> {
        partition(&RunConfig::new(threads, terms).unwrap())
    }

    #[test]
    fn test_even_split() {
        let blocks = ranges(4, 100);
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0], SeriesRange { start: 0, count: 25 });
        assert_eq!(blocks[3], SeriesRange { start: 75, count: 25 });
    }

    #[test]
    fn test_single_worker_gets_whole_range() {
        let blocks = ranges(1, 99);
        assert_eq!(blocks, vec![SeriesRange { start: 0, count: 99 }]);
    }

    #[test]
    fn test_remainder_is_truncated() {
        // 100 terms over 3 workers: block = 33, terms 99 covered, 1 dropped.
        let blocks = ranges(3, 100);
        let covered: u64 = blocks.iter().map(|r| r.count).sum();
        assert_eq!(covered, 99);
        assert_eq!(blocks.last().unwrap().end(), 99);
    }

    #[test]
    fn test_coverage_is_contiguous_and_disjoint() {
        for (threads, terms) in [(1u32, 0u64), (2, 10), (3, 10), (4, 100), (8, 1000), (7, 13)] {
            let blocks = ranges(threads, terms);
            assert_eq!(blocks.len(), threads as usize);

            let mut next = 0;
            for block in &blocks {
                assert_eq!(block.start, next);
                next = block.end();
            }
            assert_eq!(next, terms - terms % u64::from(threads));
        }
    }

    #[test]
    fn test_more_workers_than_terms_yields_empty_blocks() {
        let blocks = ranges(8, 3);
        assert!(blocks.iter().all(|r| r.count == 0));
    }
}
