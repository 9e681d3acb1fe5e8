//! Synthetic workload generation.
//!
//! # Components
//! - [`NormalSampler`] - Box–Muller Gaussian sampler with a cached deviate
//! - [`TraceGenerator`] - Builds locality-biased [`ReferenceTrace`]s
//! - [`TraceConfig`] - Length, region shape and jitter parameters

mod generator;
mod normal;

pub use generator::{ReferenceTrace, TraceConfig, TraceGenerator};
pub use normal::NormalSampler;
