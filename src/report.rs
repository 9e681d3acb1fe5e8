//! Plain-text report of averaged fault counts.

use std::io::Write;

use crate::buffer::Policy;
use crate::common::Result;
use crate::experiment::ResultTable;

/// Write one line per (wss, policy) and a blank line after each wss.
///
/// ```text
/// 4 LRU: 512
/// 4 FIFO: 840
/// 4 Clock: 530
///
/// 5 LRU: ...
/// ```
pub fn write_report<W: Write>(results: &ResultTable, mut out: W) -> Result<()> {
    for row in results.rows() {
        writeln!(out, "{} {}: {}", row.wss, row.policy, row.avg_faults)?;
        if row.policy == Policy::Clock {
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::FaultTable;

    #[test]
    fn test_report_format() {
        let mut totals = FaultTable::new(4..=5);
        totals.add(Policy::Lru, 4, 10);
        totals.add(Policy::Fifo, 4, 20);
        totals.add(Policy::Clock, 4, 30);
        totals.add(Policy::Lru, 5, 4);
        totals.finish_trial();
        totals.finish_trial();

        let mut out = Vec::new();
        write_report(&totals.averages(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "4 LRU: 5\n4 FIFO: 10\n4 Clock: 15\n\n5 LRU: 2\n5 FIFO: 0\n5 Clock: 0\n\n"
        );
    }

    #[test]
    fn test_report_propagates_io_error() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut totals = FaultTable::new(4..=4);
        totals.finish_trial();
        let err = write_report(&totals.averages(), Broken).unwrap_err();
        assert!(matches!(err, crate::common::Error::Io(_)));
    }
}
