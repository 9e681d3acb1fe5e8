//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable errors.
///
/// Only configuration supplied from outside and report output can fail.
/// The simulators themselves have no error paths: a zero working-set size
/// reaching a replacer is a programming error and panics.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Working-set range is empty or starts at zero.
    #[error("Invalid working-set range: {min}..={max}")]
    InvalidWorkingSetRange { min: usize, max: usize },

    /// Any other rejected configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
