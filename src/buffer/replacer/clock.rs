//! CLOCK (second chance) replacement policy.

use crate::buffer::replacer::{AccessOutcome, Replacer};
use crate::buffer::FrameTable;
use crate::common::{FrameId, PageNumber};

/// Walking-pointer CLOCK with one use bit per slot.
///
/// Each reference inspects slots starting at the cursor:
/// - empty slot: install, set use bit, advance, done
/// - same page: set use bit, done (cursor stays)
/// - other page, use bit set: clear it, advance, keep scanning
/// - other page, use bit clear: evict, install, set use bit, advance, fault
///
/// After one full circuit every use bit passed has been cleared, so the
/// slot the scan started from is evicted. Every reference therefore ends
/// with the page resident, after at most `capacity + 1` inspections.
#[derive(Debug, Clone)]
pub struct ClockReplacer {
    table: FrameTable,
    use_bits: Box<[bool]>,
    cursor: FrameId,
}

impl ClockReplacer {
    /// Create a CLOCK replacer with `wss` frames.
    ///
    /// # Panics
    /// Panics if `wss` is 0.
    pub fn new(wss: usize) -> Self {
        Self {
            table: FrameTable::new(wss),
            use_bits: vec![false; wss].into_boxed_slice(),
            cursor: FrameId::new(0),
        }
    }

    pub fn cursor(&self) -> FrameId {
        self.cursor
    }

    /// Use bit of `frame_id`.
    pub fn use_bit(&self, frame_id: FrameId) -> bool {
        self.use_bits[frame_id.0]
    }

    fn advance(&mut self) {
        self.cursor = self.cursor.next(self.table.capacity());
    }

    fn install(&mut self, page: PageNumber) -> Option<PageNumber> {
        let previous = self.table.replace(self.cursor, page);
        self.use_bits[self.cursor.0] = true;
        self.advance();
        previous
    }
}

impl Replacer for ClockReplacer {
    fn access(&mut self, page: PageNumber) -> AccessOutcome {
        let capacity = self.table.capacity();

        for _ in 0..=capacity {
            match self.table.get(self.cursor) {
                None => {
                    self.install(page);
                    return AccessOutcome::Filled;
                }
                Some(current) if current == page => {
                    self.use_bits[self.cursor.0] = true;
                    return AccessOutcome::Hit;
                }
                Some(_) if self.use_bits[self.cursor.0] => {
                    self.use_bits[self.cursor.0] = false;
                    self.advance();
                }
                Some(victim) => {
                    self.install(page);
                    return AccessOutcome::Fault { victim };
                }
            }
        }

        unreachable!("clock scan cleared a full circuit without finding a victim")
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
    fn test_clock_fill_sets_use_bits() {
        let mut clock = ClockReplacer::new(3);
        assert_eq!(clock.access(p(1)), AccessOutcome::Filled);
        assert_eq!(clock.access(p(2)), AccessOutcome::Filled);

        assert!(clock.use_bit(FrameId::new(0)));
        assert!(clock.use_bit(FrameId::new(1)));
        assert!(!clock.use_bit(FrameId::new(2)));
        assert_eq!(clock.cursor(), FrameId::new(2));
    }

    #[test]
    fn test_clock_hit_keeps_cursor() {
        let mut clock = ClockReplacer::new(2);
        clock.access(p(5));
        clock.access(p(6));
        assert_eq!(clock.cursor(), FrameId::new(0));

        assert_eq!(clock.access(p(5)), AccessOutcome::Hit);
        assert_eq!(clock.cursor(), FrameId::new(0));
    }

    #[test]
    fn test_clock_hit_found_after_clearing() {
        let mut clock = ClockReplacer::new(3);
        for n in [1, 2, 3] {
            clock.access(p(n));
        }

        // Cursor at slot 0: clears 1, clears 2, then finds 3
        assert_eq!(clock.access(p(3)), AccessOutcome::Hit);
        assert!(!clock.use_bit(FrameId::new(0)));
        assert!(!clock.use_bit(FrameId::new(1)));
        assert!(clock.use_bit(FrameId::new(2)));
        assert_eq!(clock.cursor(), FrameId::new(2));
    }

    #[test]
    fn test_clock_second_chance() {
        let mut clock = ClockReplacer::new(3);
        for n in [1, 2, 3] {
            clock.access(p(n));
        }
        // Full circuit clears all bits, then slot 0 goes
        assert_eq!(clock.access(p(4)), AccessOutcome::Fault { victim: p(1) });
        assert_eq!(clock.cursor(), FrameId::new(1));

        // Give 2 its use bit back; 3 is the next victim after 2 is spared
        assert_eq!(clock.access(p(2)), AccessOutcome::Hit);
        assert_eq!(clock.access(p(5)), AccessOutcome::Fault { victim: p(3) });
        assert_eq!(clock.resident(), vec![p(4), p(2), p(5)]);
    }

    #[test]
    fn test_clock_single_frame() {
        let mut clock = ClockReplacer::new(1);
        assert_eq!(clock.access(p(1)), AccessOutcome::Filled);
        assert_eq!(clock.access(p(1)), AccessOutcome::Hit);
        assert_eq!(clock.access(p(2)), AccessOutcome::Fault { victim: p(1) });
        assert_eq!(clock.resident(), vec![p(2)]);
    }
}
