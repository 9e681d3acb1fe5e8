//! LRU (Least Recently Used) replacement policy.
//!
//! Recency is the slot order itself: front = least recent, back = most
//! recent. Hits rotate the matched entry to the back; misses drop the front.

use crate::buffer::replacer::{AccessOutcome, Replacer};
use crate::buffer::FrameTable;
use crate::common::PageNumber;

/// LRU over a fixed frame table.
///
/// Until the table has been filled once, each reference goes into the next
/// empty slot without a residency check, so a page referenced twice during
/// warm-up occupies two slots. After that, every reference scans the full
/// table. When duplicates are resident the last matching slot is the hit.
#[derive(Debug, Clone)]
pub struct LruReplacer {
    table: FrameTable,
}

impl LruReplacer {
    /// Create an LRU replacer with `wss` frames.
    ///
    /// # Panics
    /// Panics if `wss` is 0.
    pub fn new(wss: usize) -> Self {
        Self {
            table: FrameTable::new(wss),
        }
    }

    /// True once every slot has been filled. Slots never empty again.
    #[inline]
    pub fn is_warm(&self) -> bool {
        self.table.first_empty().is_none()
    }
}

impl Replacer for LruReplacer {
    fn access(&mut self, page: PageNumber) -> AccessOutcome {
        if let Some(frame_id) = self.table.first_empty() {
            self.table.replace(frame_id, page);
            return AccessOutcome::Filled;
        }

        match self.table.rposition(page) {
            Some(frame_id) => {
                self.table.move_to_back(frame_id);
                AccessOutcome::Hit
            }
            None => {
                let victim = self
                    .table
                    .push_back_evicting_front(page)
                    .expect("warm LRU table has no empty slots");
                AccessOutcome::Fault { victim }
            }
        }
    }

    fn capacity(&self) -> usize {
        self.table.capacity()
    }

    fn resident(&self) -> Vec<PageNumber> {
        self.table.resident()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: i64) -> PageNumber {
        PageNumber::new(n)
    }

    #[test]
    fn test_lru_warm_up_fills_without_fault() {
        let mut lru = LruReplacer::new(3);
        assert_eq!(lru.access(p(1)), AccessOutcome::Filled);
        assert_eq!(lru.access(p(2)), AccessOutcome::Filled);
        assert!(!lru.is_warm());
        assert_eq!(lru.access(p(3)), AccessOutcome::Filled);
        assert!(lru.is_warm());
        assert_eq!(lru.resident(), vec![p(1), p(2), p(3)]);
    }

    #[test]
    fn test_lru_warm_up_ignores_residency() {
        let mut lru = LruReplacer::new(2);
        assert_eq!(lru.access(p(4)), AccessOutcome::Filled);
        assert_eq!(lru.access(p(4)), AccessOutcome::Filled);
        assert_eq!(lru.resident(), vec![p(4), p(4)]);
        assert!(lru.is_warm());
        assert_eq!(lru.access(p(4)), AccessOutcome::Hit);
    }

    #[test]
    fn test_lru_hit_moves_to_back() {
        let mut lru = LruReplacer::new(3);
        for n in [1, 2, 3] {
            lru.access(p(n));
        }
        assert_eq!(lru.access(p(1)), AccessOutcome::Hit);
        assert_eq!(lru.resident(), vec![p(2), p(3), p(1)]);
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut lru = LruReplacer::new(3);
        for n in [1, 2, 3] {
            lru.access(p(n));
        }
        lru.access(p(1)); // order: 2 3 1
        assert_eq!(lru.access(p(4)), AccessOutcome::Fault { victim: p(2) });
        assert_eq!(lru.resident(), vec![p(3), p(1), p(4)]);
    }

    #[test]
    fn test_lru_duplicate_hit_uses_last_slot() {
        let mut lru = LruReplacer::new(3);
        for n in [5, 6, 5] {
            lru.access(p(n));
        }
        // Last 5 is already at the back, order unchanged
        assert_eq!(lru.access(p(5)), AccessOutcome::Hit);
        assert_eq!(lru.resident(), vec![p(5), p(6), p(5)]);
    }

    #[test]
    fn test_lru_never_exceeds_capacity() {
        let mut lru = LruReplacer::new(4);
        for n in 0..100 {
            lru.access(p(n % 7));
            assert!(lru.resident().len() <= 4);
        }
    }
}
