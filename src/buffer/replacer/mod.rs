//! Page replacement policies (replacers).
//!
//! Implements:
//! - [`LruReplacer`] - Least Recently Used, recency order kept in slot order
//! - [`FifoReplacer`] - Circular cursor, compares only the cursor's slot
//! - [`ClockReplacer`] - Second chance with one use bit per slot
//!
//! All three sit behind the [`Replacer`] trait so the simulator and the
//! experiment harness treat them uniformly. [`Policy`] names them.

mod clock;
mod fifo;
mod lru;

use std::fmt;

pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

use crate::common::PageNumber;
use crate::trace::ReferenceTrace;

/// What one reference did to the frame table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The policy recognised the page as resident.
    Hit,
    /// Installed into an empty slot. Not a fault.
    Filled,
    /// Installed by evicting `victim`. Counts as a page fault.
    Fault { victim: PageNumber },
}

impl AccessOutcome {
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessOutcome::Fault { .. })
    }
}

/// A fixed-capacity replacement policy.
///
/// Implementations own their frame table and any auxiliary state. A fresh
/// replacer is built for every simulation run and dropped at the end.
pub trait Replacer {
    /// Reference `page`.
    fn access(&mut self, page: PageNumber) -> AccessOutcome;

    /// Working-set size (number of frames).
    fn capacity(&self) -> usize;

    /// Resident pages in slot order.
    fn resident(&self) -> Vec<PageNumber>;
}

/// Identifies one of the replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    Lru,
    Fifo,
    Clock,
}

impl Policy {
    /// Every policy, in report order.
    pub const ALL: [Policy; 3] = [Policy::Lru, Policy::Fifo, Policy::Clock];

    /// Position in [`Policy::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Policy::Lru => "LRU",
            Policy::Fifo => "FIFO",
            Policy::Clock => "Clock",
        }
    }

    /// Build an empty replacer with `wss` frames.
    ///
    /// # Panics
    /// Panics if `wss` is 0.
    pub fn build(self, wss: usize) -> Box<dyn Replacer> {
        match self {
            Policy::Lru => Box::new(LruReplacer::new(wss)),
            Policy::Fifo => Box::new(FifoReplacer::new(wss)),
            Policy::Clock => Box::new(ClockReplacer::new(wss)),
        }
    }

    /// Run this policy with `wss` frames over `trace` and return the number
    /// of page faults.
    pub fn run(self, wss: usize, trace: &ReferenceTrace) -> u64 {
        let mut replacer = self.build(wss);
        crate::buffer::simulate(replacer.as_mut(), trace).faults
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
