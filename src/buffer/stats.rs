//! Experiment-wide statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::buffer::RunStats;

/// Counters accumulated across every simulation run of an experiment.
///
/// All fields are atomic so parallel trials can update them without locks.
///
/// # Memory Ordering
/// We use `Ordering::Relaxed` for all operations because:
/// - We only need atomicity (no partial updates)
/// - Counters are independent of each other
/// - They are read once, after every trial has finished
///
/// # Example
/// ```
/// use pagesim::ExperimentStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = ExperimentStats::new();
/// stats.faults.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.faults.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct ExperimentStats {
    /// Trials whose traces have been run through every policy and size.
    pub trials_completed: AtomicU64,

    /// References fed to any replacer.
    pub references: AtomicU64,

    /// References that caused a page fault.
    pub faults: AtomicU64,

    /// References recognised as resident.
    pub hits: AtomicU64,

    /// References installed into an empty slot.
    pub fills: AtomicU64,
}

impl ExperimentStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            trials_completed: AtomicU64::new(0),
            references: AtomicU64::new(0),
            faults: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            fills: AtomicU64::new(0),
        }
    }

    /// Add one simulation run.
    pub fn record_run(&self, run: &RunStats) {
        self.references.fetch_add(run.references(), Ordering::Relaxed);
        self.faults.fetch_add(run.faults, Ordering::Relaxed);
        self.hits.fetch_add(run.hits, Ordering::Relaxed);
        self.fills.fetch_add(run.fills, Ordering::Relaxed);
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            trials_completed: self.trials_completed.load(Ordering::Relaxed),
            references: self.references.load(Ordering::Relaxed),
            faults: self.faults.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            fills: self.fills.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.trials_completed.store(0, Ordering::Relaxed);
        self.references.store(0, Ordering::Relaxed);
        self.faults.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.fills.store(0, Ordering::Relaxed);
    }
}

impl Default for ExperimentStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of experiment statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub trials_completed: u64,
    pub references: u64,
    pub faults: u64,
    pub hits: u64,
    pub fills: u64,
}

impl StatsSnapshot {
    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ trials: {}, refs: {}, faults: {}, hits: {}, fills: {}, fault_rate: {:.2}% }}",
            self.trials_completed,
            self.references,
            self.faults,
            self.hits,
            self.fills,
            self.fault_rate() * 100.0
        )
    }
}
