//! Exclusive mutable views of output-matrix regions.
//!
//! A `RegionMut` holds one mutable slice per row of its region, so several
//! views carved out of the same matrix can be handed to different threads
//! without any shared mutable state: the borrow checker sees disjoint
//! slices, not aliasing pointers.

use super::Matrix;
use super::region::Region;
use std::ops::{Index, IndexMut};

/// Mutable access to one rectangle of an output matrix.
///
/// Indexing uses absolute `(row, col)` coordinates of the parent matrix.
#[derive(Debug)]
pub struct RegionMut<'a, T> {
    region: Region,
    rows: Vec<&'a mut [T]>,
}

impl<'a, T> RegionMut<'a, T> {
    /// A view of the whole matrix.
    pub fn full(matrix: &'a mut Matrix<T>) -> Self {
        let n = matrix.size();
        let rows = if n == 0 {
            Vec::new()
        } else {
            matrix.as_mut_slice().chunks_exact_mut(n).collect()
        };
        Self {
            region: Region::full(n),
            rows,
        }
    }

    /// Splits `matrix` into one view per region, in the order given.
    ///
    /// # Panics
    ///
    /// Panics if a region reaches past the matrix edge or two regions
    /// overlap.
    pub fn split(matrix: &'a mut Matrix<T>, regions: &[Region]) -> Vec<Self> {
        let n = matrix.size();
        for region in regions {
            assert!(
                region.end_row <= n && region.end_col <= n,
                "region {} exceeds {}x{} matrix",
                region,
                n,
                n
            );
        }
        for (i, a) in regions.iter().enumerate() {
            for b in &regions[i + 1..] {
                assert!(!a.overlaps(b), "regions {} and {} overlap", a, b);
            }
        }

        let mut views: Vec<Self> = regions
            .iter()
            .map(|&region| Self {
                region,
                rows: Vec::with_capacity(region.height()),
            })
            .collect();
        if n == 0 {
            return views;
        }

        for (i, row) in matrix.as_mut_slice().chunks_exact_mut(n).enumerate() {
            // Regions crossing this row, left to right.
            let mut order = Vec::new();
            for (idx, region) in regions.iter().enumerate() {
                if !region.rows().contains(&i) {
                    continue;
                }
                if region.is_empty() {
                    // Zero-width: owns no cells, so it takes no part of the row.
                    views[idx].rows.push(<&mut [T]>::default());
                } else {
                    order.push(idx);
                }
            }
            order.sort_by_key(|&idx| regions[idx].start_col);

            let mut rest: &'a mut [T] = row;
            let mut offset = 0;
            for idx in order {
                let region = regions[idx];
                let (_, tail) = std::mem::take(&mut rest).split_at_mut(region.start_col - offset);
                let (segment, tail) = tail.split_at_mut(region.width());
                views[idx].rows.push(segment);
                rest = tail;
                offset = region.end_col;
            }
        }
        views
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// The part of absolute row `row` that lies inside this region.
    ///
    /// Position 0 of the returned slice is column `region().start_col`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(
            self.region.rows().contains(&row),
            "row {} outside region {}",
            row,
            self.region
        );
        &mut *self.rows[row - self.region.start_row]
    }

    fn locate(&self, row: usize, col: usize) -> (usize, usize) {
        assert!(
            self.region.contains(row, col),
            "({}, {}) outside region {}",
            row,
            col,
            self.region
        );
        (row - self.region.start_row, col - self.region.start_col)
    }
}

impl<T> Index<(usize, usize)> for RegionMut<'_, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        let (r, c) = self.locate(row, col);
        &self.rows[r][c]
    }
}

impl<T> IndexMut<(usize, usize)> for RegionMut<'_, T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let (r, c) = self.locate(row, col);
        &mut self.rows[r][c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_view_writes_through() {
        let mut m = Matrix::<i32>::zeros(3);
        {
            let mut view = RegionMut::full(&mut m);
            view[(1, 2)] = 7;
            view.row_mut(2)[0] = 9;
        }
        assert_eq!(m[(1, 2)], 7);
        assert_eq!(m[(2, 0)], 9);
    }

    #[test]
    fn test_split_quadrants() {
        let mut m = Matrix::<i32>::zeros(4);
        let regions = [
            Region::new(0, 0, 2, 2),
            Region::new(0, 2, 2, 4),
            Region::new(2, 0, 4, 2),
            Region::new(2, 2, 4, 4),
        ];
        {
            let mut views = RegionMut::split(&mut m, &regions);
            for (tag, view) in views.iter_mut().enumerate() {
                let region = view.region();
                for i in region.rows() {
                    for j in region.cols() {
                        view[(i, j)] = tag as i32 + 1;
                    }
                }
            }
        }
        assert_eq!(
            m.as_slice(),
            &[1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
    }

    #[test]
    fn test_split_leaves_gaps_untouched() {
        let mut m = Matrix::<i32>::zeros(3);
        let regions = [Region::new(0, 1, 2, 3)];
        {
            let mut views = RegionMut::split(&mut m, &regions);
            views[0][(1, 1)] = 5;
            assert_eq!(views[0].row_mut(0).len(), 2);
        }
        assert_eq!(m.as_slice(), &[0, 0, 0, 0, 5, 0, 0, 0, 0]);
    }

    #[test]
    fn test_split_zero_width_region_inside_another() {
        let mut m = Matrix::<i32>::zeros(4);
        let regions = [Region::new(0, 0, 4, 4), Region::new(1, 2, 3, 2)];
        {
            let mut views = RegionMut::split(&mut m, &regions);
            assert_eq!(views[1].row_mut(1).len(), 0);
            assert_eq!(views[1].row_mut(2).len(), 0);
            views[0][(1, 2)] = 3;
        }
        assert_eq!(m[(1, 2)], 3);
    }

    #[test]
    #[should_panic(expected = "overlap")]
    fn test_split_rejects_overlap() {
        let mut m = Matrix::<i32>::zeros(4);
        let regions = [Region::new(0, 0, 3, 3), Region::new(2, 2, 4, 4)];
        let _ = RegionMut::split(&mut m, &regions);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_split_rejects_out_of_bounds() {
        let mut m = Matrix::<i32>::zeros(4);
        let _ = RegionMut::split(&mut m, &[Region::new(0, 0, 5, 4)]);
    }

    #[test]
    #[should_panic(expected = "outside region")]
    fn test_index_outside_region_panics() {
        let mut m = Matrix::<i32>::zeros(4);
        let mut views = RegionMut::split(&mut m, &[Region::new(0, 0, 2, 2)]);
        views[0][(2, 0)] = 1;
    }
}
