//! Experiment configuration.

use std::ops::RangeInclusive;

use crate::common::config::{DEFAULT_SEED, DEFAULT_TRIALS, MAX_WSS, MIN_WSS};
use crate::common::{Error, Result};
use crate::trace::TraceConfig;

/// Parameters of one Monte Carlo experiment.
///
/// `Default` is the reference configuration: 1000 trials of 1000-reference
/// traces, working-set sizes 4 through 20, sequential execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Independent trials; each gets its own trace.
    pub trials: usize,
    /// Smallest working-set size.
    pub wss_min: usize,
    /// Largest working-set size (inclusive).
    pub wss_max: usize,
    /// Seed for every trial's random stream.
    pub seed: u64,
    /// Run trials on the rayon pool.
    pub parallel: bool,
    pub trace: TraceConfig,
}

impl ExperimentConfig {
    /// Reject configurations that cannot produce a result table.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::InvalidConfig("trials must be > 0".into()));
        }
        if self.wss_min == 0 || self.wss_min > self.wss_max {
            return Err(Error::InvalidWorkingSetRange {
                min: self.wss_min,
                max: self.wss_max,
            });
        }
        self.trace.validate()
    }

    pub fn wss_range(&self) -> RangeInclusive<usize> {
        self.wss_min..=self.wss_max
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            wss_min: MIN_WSS,
            wss_max: MAX_WSS,
            seed: DEFAULT_SEED,
            parallel: false,
            trace: TraceConfig::default(),
        }
    }
}
