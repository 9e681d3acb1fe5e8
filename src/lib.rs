//! pagesim - Monte Carlo comparison of page replacement policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Reporting (report, bin/pagesim)              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Harness (experiment/)                      │   │
//! │  │   Experiment → FaultTable (totals) → ResultTable (avg)   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Replacement policies (buffer/)                │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │          Replacer: LRU | FIFO | CLOCK            │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        FrameTable + simulate() + ExperimentStats         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Workload (trace/)                           │   │
//! │  │        NormalSampler → TraceGenerator → ReferenceTrace   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageNumber, FrameId, Error, config)
//! - [`trace`] - Gaussian sampler and locality-biased trace generation
//! - [`buffer`] - Frame tables and the replacement policies
//! - [`experiment`] - Trial loop and fault aggregation
//! - [`report`] - Text output of averaged results
//!
//! # Quick Start
//! ```
//! use pagesim::{Policy, TraceGenerator};
//!
//! let trace = TraceGenerator::default().generate_for_trial(0);
//! let faults = Policy::Clock.run(8, &trace);
//! assert!(faults <= trace.len() as u64);
//! ```

pub mod buffer;
pub mod common;
pub mod experiment;
pub mod report;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageNumber, Result};

pub use buffer::replacer::{ClockReplacer, FifoReplacer, LruReplacer};
pub use buffer::{
    simulate, AccessOutcome, ExperimentStats, FrameTable, Policy, Replacer, RunStats,
    StatsSnapshot,
};
pub use experiment::{Experiment, ExperimentConfig, ResultTable};
pub use report::write_report;
pub use trace::{NormalSampler, ReferenceTrace, TraceConfig, TraceGenerator};
