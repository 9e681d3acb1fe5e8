//! Synthetic reference traces with shifting locality.

use std::ops::Deref;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::common::config::{
    JITTER_MEAN, JITTER_STD_DEV, REGION_LENGTH, REGION_STRIDE, TRACE_LENGTH,
};
use crate::common::{Error, PageNumber, Result};
use crate::trace::NormalSampler;

/// Shape of a generated trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceConfig {
    /// References per trace.
    pub length: usize,
    /// References per locality region.
    pub region_len: usize,
    /// Base page increase between consecutive regions.
    pub region_stride: i64,
    /// Mean of the per-reference jitter.
    pub mean: f64,
    /// Standard deviation of the per-reference jitter.
    pub std_dev: f64,
}

impl TraceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidConfig("trace length must be > 0".into()));
        }
        if self.region_len == 0 {
            return Err(Error::InvalidConfig("region length must be > 0".into()));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "jitter std_dev must be finite and > 0, got {}",
                self.std_dev
            )));
        }
        if !self.mean.is_finite() {
            return Err(Error::InvalidConfig("jitter mean must be finite".into()));
        }
        Ok(())
    }

    /// Base page of the region containing `position`.
    #[inline]
    pub fn region_base(&self, position: usize) -> i64 {
        self.region_stride * (position / self.region_len) as i64
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            length: TRACE_LENGTH,
            region_len: REGION_LENGTH,
            region_stride: REGION_STRIDE,
            mean: JITTER_MEAN,
            std_dev: JITTER_STD_DEV,
        }
    }
}

/// An immutable sequence of page references.
///
/// Derefs to `[PageNumber]` so simulators can iterate it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTrace {
    pages: Box<[PageNumber]>,
}

impl Deref for ReferenceTrace {
    type Target = [PageNumber];

    fn deref(&self) -> &[PageNumber] {
        &self.pages
    }
}

impl From<Vec<PageNumber>> for ReferenceTrace {
    fn from(pages: Vec<PageNumber>) -> Self {
        Self {
            pages: pages.into_boxed_slice(),
        }
    }
}

impl FromIterator<i64> for ReferenceTrace {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        iter.into_iter().map(PageNumber::new).collect::<Vec<_>>().into()
    }
}

/// Builds traces whose locus of reference shifts every region.
///
/// Reference `i` is `region_stride * (i / region_len) + N(mean, std_dev)`
/// truncated to an integer.
#[derive(Debug, Clone)]
pub struct TraceGenerator {
    config: TraceConfig,
    seed: u64,
}

impl TraceGenerator {
    pub fn new(config: TraceConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// The random stream for one trial.
    ///
    /// Same seed and trial always give the same stream; different trials get
    /// disjoint ChaCha streams.
    pub fn trial_rng(&self, trial: usize) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(trial as u64);
        rng
    }

    /// Generate the trace for `trial`.
    pub fn generate_for_trial(&self, trial: usize) -> ReferenceTrace {
        self.generate_with(self.trial_rng(trial))
    }

    /// Generate a trace with jitter drawn from `rng`, shaped by the
    /// configured mean and std_dev.
    pub fn generate_with<R: Rng>(&self, rng: R) -> ReferenceTrace {
        let mut sampler = NormalSampler::new(rng, self.config.mean, self.config.std_dev);
        (0..self.config.length)
            .map(|pos| self.config.region_base(pos) + sampler.sample_truncated())
            .collect()
    }
}

impl Default for TraceGenerator {
    fn default() -> Self {
        Self::new(TraceConfig::default(), crate::common::config::DEFAULT_SEED)
    }
}
