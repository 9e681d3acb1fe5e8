//! Drives one replacer over one trace.

use log::trace;

use crate::buffer::replacer::{AccessOutcome, Replacer};
use crate::trace::ReferenceTrace;

/// Outcome counts for one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// References that evicted a resident page.
    pub faults: u64,
    /// References recognised as resident.
    pub hits: u64,
    /// References installed into an empty slot.
    pub fills: u64,
}

impl RunStats {
    /// Total references seen.
    pub fn references(&self) -> u64 {
        self.faults + self.hits + self.fills
    }

    fn record(&mut self, outcome: AccessOutcome) {
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Filled => self.fills += 1,
            AccessOutcome::Fault { .. } => self.faults += 1,
        }
    }
}

/// Feed every reference of `trace` to `replacer`.
///
/// The replacer should be fresh; its state after the call is whatever the
/// trace left behind.
pub fn simulate(replacer: &mut dyn Replacer, trace: &ReferenceTrace) -> RunStats {
    let mut stats = RunStats::default();
    for &page in trace.iter() {
        stats.record(replacer.access(page));
    }
    debug_assert!(replacer.resident().len() <= replacer.capacity());

    trace!(
        "wss={} refs={} faults={} hits={} fills={}",
        replacer.capacity(),
        stats.references(),
        stats.faults,
        stats.hits,
        stats.fills
    );
    stats
}
