//! Experiment - the Monte Carlo harness.
//!
//! The [`Experiment`] provides:
//! - One generated trace per trial
//! - Every policy at every working-set size on that trace
//! - Exact fault totals, merged across trials
//! - Integer averages once every trial is done

use std::sync::atomic::Ordering;
use std::time::Instant;

use log::{debug, info};
use parking_lot::Mutex;
use rayon::prelude::*;

use crate::buffer::{simulate, ExperimentStats, Policy};
use crate::common::Result;
use crate::experiment::{ExperimentConfig, FaultTable, ResultTable};
use crate::trace::{ReferenceTrace, TraceGenerator};

/// Runs trials and aggregates fault counts.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                       Experiment                         │
/// │  trial i ──▶ TraceGenerator ──▶ ReferenceTrace           │
/// │                                      │                   │
/// │             ┌────────────────────────┼─────────────┐     │
/// │             ▼ for wss in range       ▼             ▼     │
/// │        LruReplacer             FifoReplacer  ClockReplacer│
/// │             └──────────── fault counts ────────────┘     │
/// │                              ▼                           │
/// │                  trial-local FaultTable                  │
/// │                              ▼ merge                     │
/// │                 Mutex<FaultTable> totals                 │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// # Determinism
/// Each trial draws from its own seeded stream, so the result table is the
/// same for a given config whether trials run sequentially or in parallel.
///
/// # Usage
/// ```
/// use pagesim::experiment::{Experiment, ExperimentConfig};
/// use pagesim::Policy;
///
/// let config = ExperimentConfig { trials: 5, ..Default::default() };
/// let results = Experiment::new(config).unwrap().run();
/// assert!(results.get(Policy::Lru, 4).is_some());
/// ```
pub struct Experiment {
    config: ExperimentConfig,
    generator: TraceGenerator,
    stats: ExperimentStats,
}

impl Experiment {
    /// Create an experiment.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` for zero trials or a bad trace shape
    /// - `Error::InvalidWorkingSetRange` for an empty or zero-based range
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let generator = TraceGenerator::new(config.trace, config.seed);
        Ok(Self {
            config,
            generator,
            stats: ExperimentStats::new(),
        })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn stats(&self) -> &ExperimentStats {
        &self.stats
    }

    /// Run every trial and return averaged fault counts.
    ///
    /// Statistics are cleared first, so `stats()` describes the latest run.
    pub fn run(&self) -> ResultTable {
        self.stats.reset();
        let started = Instant::now();
        info!(
            "Running {} trials, wss {}..={}, seed {:#x}{}",
            self.config.trials,
            self.config.wss_min,
            self.config.wss_max,
            self.config.seed,
            if self.config.parallel { " (parallel)" } else { "" }
        );

        let totals = if self.config.parallel {
            self.run_parallel()
        } else {
            self.run_sequential()
        };

        info!(
            "Finished in {:.2?}: {}",
            started.elapsed(),
            self.stats.snapshot()
        );
        totals.averages()
    }

    fn run_sequential(&self) -> FaultTable {
        let mut totals = FaultTable::new(self.config.wss_range());
        for trial in 0..self.config.trials {
            totals.merge(&self.run_trial(trial));
        }
        totals
    }

    fn run_parallel(&self) -> FaultTable {
        let totals = Mutex::new(FaultTable::new(self.config.wss_range()));
        (0..self.config.trials).into_par_iter().for_each(|trial| {
            let local = self.run_trial(trial);
            totals.lock().merge(&local);
        });
        totals.into_inner()
    }

    /// Generate the trace for `trial` and run every policy and size on it.
    pub fn run_trial(&self, trial: usize) -> FaultTable {
        let trace = self.generator.generate_for_trial(trial);
        let table = self.evaluate_trace(&trace);
        self.stats.trials_completed.fetch_add(1, Ordering::Relaxed);
        debug!("trial {} done", trial);
        table
    }

    /// Run every policy at every configured wss on `trace`.
    ///
    /// Returns a one-trial table.
    pub fn evaluate_trace(&self, trace: &ReferenceTrace) -> FaultTable {
        let mut table = FaultTable::new(self.config.wss_range());
        for wss in self.config.wss_range() {
            for policy in Policy::ALL {
                let mut replacer = policy.build(wss);
                let run = simulate(replacer.as_mut(), trace);
                self.stats.record_run(&run);
                table.add(policy, wss, run.faults);
            }
        }
        table.finish_trial();
        table
    }
}
