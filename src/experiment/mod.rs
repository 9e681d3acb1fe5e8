//! Monte Carlo experiment harness.
//!
//! # Components
//! - [`ExperimentConfig`] - Trials, wss range, seed, execution mode
//! - [`Experiment`] - Runs trials and aggregates fault counts
//! - [`FaultTable`] - Exact fault totals per (policy, wss)
//! - [`ResultTable`] - Integer averages handed to reporters

mod config;
mod harness;
mod results;

pub use config::ExperimentConfig;
pub use harness::Experiment;
pub use results::{FaultTable, ResultRow, ResultTable};
