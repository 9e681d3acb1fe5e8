//! FrameTable - the fixed set of resident page slots.
//!
//! A [`FrameTable`] holds exactly `capacity` slots, each either empty or
//! holding one [`PageNumber`]. The capacity is fixed at construction and the
//! slot vector never reallocates.

use crate::common::{FrameId, PageNumber};

/// Fixed-capacity slot storage shared by every replacer.
///
/// Replacers attach their own auxiliary state (recency order, cursor,
/// use bits) on top; the table itself only knows slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    slots: Box<[Option<PageNumber>]>,
}

impl FrameTable {
    /// Create a table of `capacity` empty slots.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "working-set size must be > 0");
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
        }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Page held in `frame_id`, or None if the slot is empty.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<PageNumber> {
        self.slots[frame_id.0]
    }

    /// Put `page` into `frame_id`, returning what was there.
    #[inline]
    pub fn replace(&mut self, frame_id: FrameId, page: PageNumber) -> Option<PageNumber> {
        self.slots[frame_id.0].replace(page)
    }

    /// Last slot holding `page`, scanning the whole table.
    pub fn rposition(&self, page: PageNumber) -> Option<FrameId> {
        self.slots
            .iter()
            .rposition(|slot| *slot == Some(page))
            .map(FrameId::new)
    }

    /// First empty slot in table order.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Resident pages in slot order, skipping empty slots.
    pub fn resident(&self) -> Vec<PageNumber> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Move the entry at `frame_id` to the back, shifting later entries
    /// one slot toward the front.
    pub fn move_to_back(&mut self, frame_id: FrameId) {
        self.slots[frame_id.0..].rotate_left(1);
    }

    /// Drop the front entry, shift everything toward the front and append
    /// `page` at the back. Returns the dropped entry.
    pub fn push_back_evicting_front(&mut self, page: PageNumber) -> Option<PageNumber> {
        self.slots.rotate_left(1);
        let last = FrameId::new(self.capacity() - 1);
        self.replace(last, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: i64) -> PageNumber {
        PageNumber::new(n)
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = FrameTable::new(4);
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.first_empty(), Some(FrameId::new(0)));
        assert!(table.resident().is_empty());
    }

    #[test]
    #[should_panic(expected = "working-set size must be > 0")]
    fn test_zero_capacity_panics() {
        FrameTable::new(0);
    }

    #[test]
    fn test_replace_and_get() {
        let mut table = FrameTable::new(2);
        assert_eq!(table.replace(FrameId::new(1), p(7)), None);
        assert_eq!(table.get(FrameId::new(1)), Some(p(7)));
        assert_eq!(table.replace(FrameId::new(1), p(8)), Some(p(7)));
        assert_eq!(table.get(FrameId::new(1)), Some(p(8)));
        assert_eq!(table.first_empty(), Some(FrameId::new(0)));
    }

    #[test]
    fn test_rposition_finds_last_duplicate() {
        let mut table = FrameTable::new(3);
        for (i, n) in [1, 2, 1].into_iter().enumerate() {
            table.replace(FrameId::new(i), p(n));
        }
        assert_eq!(table.rposition(p(1)), Some(FrameId::new(2)));
        assert_eq!(table.rposition(p(3)), None);
    }

    #[test]
    fn test_move_to_back() {
        let mut table = FrameTable::new(4);
        for (i, n) in [1, 2, 3, 4].into_iter().enumerate() {
            table.replace(FrameId::new(i), p(n));
        }
        table.move_to_back(FrameId::new(1));
        assert_eq!(table.resident(), vec![p(1), p(3), p(4), p(2)]);

        // Moving the back entry is a no-op
        table.move_to_back(FrameId::new(3));
        assert_eq!(table.resident(), vec![p(1), p(3), p(4), p(2)]);
    }

    #[test]
    fn test_push_back_evicting_front() {
        let mut table = FrameTable::new(3);
        for (i, n) in [1, 2, 3].into_iter().enumerate() {
            table.replace(FrameId::new(i), p(n));
        }
        assert_eq!(table.push_back_evicting_front(p(9)), Some(p(1)));
        assert_eq!(table.resident(), vec![p(2), p(3), p(9)]);
        assert_eq!(table.first_empty(), None);
    }
}
