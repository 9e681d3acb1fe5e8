//! Frame tables and replacement-policy simulation.
//!
//! # Components
//! - [`FrameTable`] - Fixed-capacity slots, each empty or holding a page
//! - [`replacer`] - The LRU, FIFO and CLOCK policies behind [`Replacer`]
//! - [`simulate`] - Runs one replacer over one trace
//! - [`ExperimentStats`] - Atomic counters shared by parallel trials

mod frame_table;
pub mod replacer;
mod simulator;
mod stats;

pub use frame_table::FrameTable;
pub use replacer::{AccessOutcome, Policy, Replacer};
pub use simulator::{simulate, RunStats};
pub use stats::{ExperimentStats, StatsSnapshot};
