//! Page number type.

use std::fmt;

/// Identifies a page in a reference trace.
///
/// Signed because trace values come from truncating a shifted Gaussian
/// sample, which can in principle fall below zero. Empty frame-table slots
/// are `None`, so no page value is reserved as a sentinel.
///
/// # Example
/// ```
/// use pagesim::PageNumber;
///
/// let page = PageNumber::new(42);
/// assert_eq!(page.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(pub i64);

impl PageNumber {
    /// Create a new PageNumber.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageNumber(id)
    }
}

impl From<i64> for PageNumber {
    fn from(id: i64) -> Self {
        PageNumber(id)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number_new() {
        let page = PageNumber::new(42);
        assert_eq!(page.0, 42);
        assert_eq!(PageNumber::from(-3), PageNumber(-3));
    }

    #[test]
    fn test_page_number_ordering() {
        assert!(PageNumber::new(1) < PageNumber::new(2));
        assert!(PageNumber::new(-1) < PageNumber::new(0));
    }

    #[test]
    fn test_page_number_display() {
        assert_eq!(format!("{}", PageNumber::new(42)), "Page(42)");
    }
}
