use std::fmt;
use std::ops::Range;

/// A rectangle of an output matrix, half-open on both end bounds.
///
/// Covers rows `start_row..end_row` and columns `start_col..end_col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl Region {
    pub fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        debug_assert!(start_row <= end_row && start_col <= end_col);
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// The whole of an `n × n` matrix.
    pub fn full(n: usize) -> Self {
        Self::new(0, 0, n, n)
    }

    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.end_row
    }

    pub fn cols(&self) -> Range<usize> {
        self.start_col..self.end_col
    }

    pub fn height(&self) -> usize {
        self.end_row - self.start_row
    }

    pub fn width(&self) -> usize {
        self.end_col - self.start_col
    }

    pub fn area(&self) -> usize {
        self.height() * self.width()
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows().contains(&row) && self.cols().contains(&col)
    }

    pub fn overlaps(&self, other: &Region) -> bool {
        self.start_row < other.end_row
            && other.start_row < self.end_row
            && self.start_col < other.end_col
            && other.start_col < self.end_col
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}) x [{}..{})",
            self.start_row, self.end_row, self.start_col, self.end_col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        let r = Region::new(2, 4, 5, 10);
        assert_eq!(r.height(), 3);
        assert_eq!(r.width(), 6);
        assert_eq!(r.area(), 18);
        assert!(r.contains(2, 4));
        assert!(!r.contains(5, 4));
        assert!(!r.contains(2, 10));
        assert_eq!(r.to_string(), "[2..5) x [4..10)");
    }

    #[test]
    fn test_overlap_is_half_open() {
        let a = Region::new(0, 0, 5, 5);
        let right = Region::new(0, 5, 5, 10);
        let below = Region::new(5, 0, 10, 5);
        let inside = Region::new(4, 4, 6, 6);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_empty_region() {
        assert!(Region::new(3, 3, 3, 7).is_empty());
        assert!(!Region::full(1).is_empty());
    }
}
