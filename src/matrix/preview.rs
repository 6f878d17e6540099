use super::Matrix;
use std::fmt;

/// Top-left corner of a matrix, for printing.
///
/// Formats `extent × extent` elements (clamped to the matrix size), each
/// followed by a tab, one row per line, then a blank line.
pub struct Preview<'a, T> {
    matrix: &'a Matrix<T>,
    extent: usize,
}

impl<'a, T> Preview<'a, T> {
    pub const DEFAULT_EXTENT: usize = 5;

    pub fn new(matrix: &'a Matrix<T>) -> Self {
        Self::with_extent(matrix, Self::DEFAULT_EXTENT)
    }

    pub fn with_extent(matrix: &'a Matrix<T>, extent: usize) -> Self {
        Self { matrix, extent }
    }
}

impl<T: fmt::Display> fmt::Display for Preview<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let k = self.extent.min(self.matrix.size());
        for row in self.matrix.rows().take(k) {
            for value in &row[..k] {
                write!(f, "{}\t", value)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::init::Fill;

    #[test]
    fn test_preview_clamps_to_size() {
        let m = Matrix::<i32>::filled(2, Fill::IndexSum);
        assert_eq!(Preview::new(&m).to_string(), "0\t1\t\n1\t2\t\n\n");
    }

    #[test]
    fn test_preview_shows_corner_only() {
        let m = Matrix::<i32>::filled(10, Fill::IndexSum);
        let text = Preview::with_extent(&m, 3).to_string();
        assert_eq!(text, "0\t1\t2\t\n1\t2\t3\t\n2\t3\t4\t\n\n");
        assert_eq!(Preview::new(&m).to_string().lines().count(), 6);
    }
}
