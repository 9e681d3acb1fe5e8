//! FIFO (First-In-First-Out) replacement policy.
//!
//! Slots are overwritten in circular order by a single replacement cursor.
//! The policy never searches the table: a reference is a hit only if it
//! equals the page in the cursor's slot. A page resident elsewhere is
//! charged as a fault once the cursor reaches an unrelated slot.

use crate::buffer::replacer::{AccessOutcome, Replacer};
use crate::buffer::FrameTable;
use crate::common::{FrameId, PageNumber};

/// Cursor-only FIFO.
///
/// Insertion order is the cursor order, so the slot under the cursor is
/// always the oldest resident page once the table is full.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    table: FrameTable,

    /// Next slot to overwrite.
    cursor: FrameId,
}

impl FifoReplacer {
    /// Create a FIFO replacer with `wss` frames.
    ///
    /// # Panics
    /// Panics if `wss` is 0.
    pub fn new(wss: usize) -> Self {
        Self {
            table: FrameTable::new(wss),
            cursor: FrameId::new(0),
        }
    }

    pub fn cursor(&self) -> FrameId {
        self.cursor
    }

    fn advance(&mut self) {
        self.cursor = self.cursor.next(self.table.capacity());
    }
}

impl Replacer for FifoReplacer {
    fn access(&mut self, page: PageNumber) -> AccessOutcome {
        match self.table.get(self.cursor) {
            None => {
                self.table.replace(self.cursor, page);
                self.advance();
                AccessOutcome::Filled
            }
            Some(current) if current == page => AccessOutcome::Hit,
            Some(victim) => {
                self.table.replace(self.cursor, page);
                self.advance();
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
