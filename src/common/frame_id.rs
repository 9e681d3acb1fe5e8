//! Frame identifier type.

use std::fmt;

/// Identifies a slot in a frame table.
///
/// Using `usize` so it indexes the slot vector directly:
/// `slots[frame_id.0]`. Replacement cursors are `FrameId`s too.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(3);
/// assert_eq!(frame_id.next(4), FrameId::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The next slot in a circular table of `capacity` slots.
    #[inline]
    pub fn next(self, capacity: usize) -> Self {
        FrameId((self.0 + 1) % capacity)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
