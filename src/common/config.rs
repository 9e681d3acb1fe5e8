//! Reference configuration constants.
//!
//! These are the values the experiment uses when nothing is overridden.
//! See [`ExperimentConfig`](crate::experiment::ExperimentConfig) for the
//! runtime counterpart.

/// Number of independent trials in one experiment.
pub const DEFAULT_TRIALS: usize = 1000;

/// Number of references in one trace.
pub const TRACE_LENGTH: usize = 1000;

/// References per locality region.
///
/// The trace is split into `TRACE_LENGTH / REGION_LENGTH` regions, each with
/// its own base page.
pub const REGION_LENGTH: usize = 100;

/// Base page increase from one locality region to the next.
pub const REGION_STRIDE: i64 = 10;

/// Mean of the Gaussian jitter added to a region's base page.
pub const JITTER_MEAN: f64 = 10.0;

/// Standard deviation of the Gaussian jitter.
pub const JITTER_STD_DEV: f64 = 2.0;

/// Smallest working-set size evaluated.
pub const MIN_WSS: usize = 4;

/// Largest working-set size evaluated (inclusive).
pub const MAX_WSS: usize = 20;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 0x5EED_2021;
