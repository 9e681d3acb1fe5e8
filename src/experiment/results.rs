//! Fault totals and averaged results per (policy, working-set size).

use std::ops::RangeInclusive;

use crate::buffer::Policy;

/// Running fault totals, one cell per (policy, wss).
///
/// Trial-local tables are merged into the experiment total; merging is an
/// integer sum, so the result does not depend on merge order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultTable {
    wss_min: usize,
    /// Indexed by `wss - wss_min`, then by `Policy::index()`.
    totals: Vec<[u64; Policy::ALL.len()]>,
    /// Trials merged into this table.
    trials: u64,
}

impl FaultTable {
    /// Create an all-zero table covering `wss_range`.
    ///
    /// # Panics
    /// Panics if the range is empty.
    pub fn new(wss_range: RangeInclusive<usize>) -> Self {
        assert!(!wss_range.is_empty(), "wss range must not be empty");
        let (min, max) = wss_range.into_inner();
        Self {
            wss_min: min,
            totals: vec![[0; Policy::ALL.len()]; max - min + 1],
            trials: 0,
        }
    }

    pub fn wss_range(&self) -> RangeInclusive<usize> {
        self.wss_min..=self.wss_min + self.totals.len() - 1
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    fn row(&self, wss: usize) -> Option<&[u64; Policy::ALL.len()]> {
        wss.checked_sub(self.wss_min).and_then(|i| self.totals.get(i))
    }

    /// Add `faults` to the (policy, wss) total.
    ///
    /// # Panics
    /// Panics if `wss` is outside the table's range.
    pub fn add(&mut self, policy: Policy, wss: usize, faults: u64) {
        assert!(
            self.wss_range().contains(&wss),
            "wss {} outside {:?}",
            wss,
            self.wss_range()
        );
        self.totals[wss - self.wss_min][policy.index()] += faults;
    }

    /// Count one finished trial.
    pub fn finish_trial(&mut self) {
        self.trials += 1;
    }

    /// Total faults for (policy, wss), or None if wss is out of range.
    pub fn total(&self, policy: Policy, wss: usize) -> Option<u64> {
        self.row(wss).map(|row| row[policy.index()])
    }

    /// Fold `other` into this table.
    ///
    /// # Panics
    /// Panics if the tables cover different wss ranges.
    pub fn merge(&mut self, other: &FaultTable) {
        assert_eq!(self.wss_range(), other.wss_range(), "wss ranges differ");
        for (mine, theirs) in self.totals.iter_mut().zip(&other.totals) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += *b;
            }
        }
        self.trials += other.trials;
    }

    /// Integer-divide every total by the trial count.
    ///
    /// # Panics
    /// Panics if no trial has been recorded.
    pub fn averages(&self) -> ResultTable {
        assert!(self.trials > 0, "no trials recorded");
        ResultTable {
            wss_min: self.wss_min,
            averages: self
                .totals
                .iter()
                .map(|row| row.map(|total| total / self.trials))
                .collect(),
            trials: self.trials,
        }
    }
}

/// One reported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow {
    pub wss: usize,
    pub policy: Policy,
    pub avg_faults: u64,
}

/// Average faults per trial for every (policy, wss).
///
/// This is what reporters consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    wss_min: usize,
    averages: Vec<[u64; Policy::ALL.len()]>,
    trials: u64,
}

impl ResultTable {
    pub fn wss_range(&self) -> RangeInclusive<usize> {
        self.wss_min..=self.wss_min + self.averages.len() - 1
    }

    /// Trials the averages were taken over.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Average faults for (policy, wss), or None if wss is out of range.
    pub fn get(&self, policy: Policy, wss: usize) -> Option<u64> {
        wss.checked_sub(self.wss_min)
            .and_then(|i| self.averages.get(i))
            .map(|row| row[policy.index()])
    }

    /// Every value, ordered by wss then by [`Policy::ALL`].
    pub fn rows(&self) -> impl Iterator<Item = ResultRow> + '_ {
        self.averages.iter().enumerate().flat_map(move |(i, row)| {
            Policy::ALL.into_iter().map(move |policy| ResultRow {
                wss: self.wss_min + i,
                policy,
                avg_faults: row[policy.index()],
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_zero() {
        let table = FaultTable::new(4..=20);
        assert_eq!(table.wss_range(), 4..=20);
        assert_eq!(table.trials(), 0);
        for wss in 4..=20 {
            for policy in Policy::ALL {
                assert_eq!(table.total(policy, wss), Some(0));
            }
        }
        assert_eq!(table.total(Policy::Lru, 3), None);
        assert_eq!(table.total(Policy::Lru, 21), None);
    }

    #[test]
    fn test_add_and_average() {
        let mut table = FaultTable::new(4..=5);
        table.add(Policy::Fifo, 5, 7);
        table.finish_trial();
        table.add(Policy::Fifo, 5, 8);
        table.finish_trial();

        assert_eq!(table.total(Policy::Fifo, 5), Some(15));

        let results = table.averages();
        // 15 / 2 truncates
        assert_eq!(results.get(Policy::Fifo, 5), Some(7));
        assert_eq!(results.get(Policy::Lru, 4), Some(0));
        assert_eq!(results.trials(), 2);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let mut a = FaultTable::new(4..=6);
        a.add(Policy::Lru, 4, 10);
        a.finish_trial();
        let mut b = FaultTable::new(4..=6);
        b.add(Policy::Clock, 6, 3);
        b.add(Policy::Lru, 4, 1);
        b.finish_trial();

        let mut ab = FaultTable::new(4..=6);
        ab.merge(&a);
        ab.merge(&b);
        let mut ba = FaultTable::new(4..=6);
        ba.merge(&b);
        ba.merge(&a);

        assert_eq!(ab, ba);
        assert_eq!(ab.total(Policy::Lru, 4), Some(11));
        assert_eq!(ab.trials(), 2);
    }

    #[test]
    #[should_panic(expected = "wss ranges differ")]
    fn test_merge_mismatched_ranges_panics() {
        let mut a = FaultTable::new(4..=6);
        a.merge(&FaultTable::new(4..=7));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_add_out_of_range_panics() {
        FaultTable::new(4..=6).add(Policy::Lru, 7, 1);
    }

    #[test]
    fn test_rows_order() {
        let mut table = FaultTable::new(4..=5);
        table.add(Policy::Clock, 4, 2);
        table.finish_trial();

        let rows: Vec<ResultRow> = table.averages().rows().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(
            rows[2],
            ResultRow {
                wss: 4,
                policy: Policy::Clock,
                avg_faults: 2
            }
        );
        assert_eq!(rows[3].wss, 5);
        assert_eq!(rows[3].policy, Policy::Lru);
    }
}
