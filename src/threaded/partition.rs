//! Grid partition of the output matrix into one region per worker.

use crate::error::{MatmulError, Result};
use crate::matrix::region::Region;

/// The rectangles a parallel multiply hands to its workers.
///
/// Built by a fixed grid walk, not a general partition solver: cells are
/// `stride × stride` with `stride = ⌊N / √T⌋`, visited row-major, and at
/// most `T` of them are assigned. When that walk doesn't land on exactly
/// `T` cells the union of the regions misses part of the matrix (a
/// coverage gap) or some of the `T` threads get no region at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    size: usize,
    threads: usize,
    stride: usize,
    regions: Vec<Region>,
}

impl Partition {
    /// Walks an `size × size` matrix in `stride`-sized cells for `threads`
    /// workers.
    ///
    /// The stride is computed in floating point and truncated, then kept at
    /// least 1 so a matrix smaller than `√threads` still gets a cell.
    ///
    /// # Panics
    ///
    /// Panics if `threads` is zero.
    pub fn grid(size: usize, threads: usize) -> Self {
        assert!(threads > 0, "threads must be at least 1");

        let stride = ((size as f64 / (threads as f64).sqrt()) as usize).max(1);
        // `threads` is caller-controlled; a walk never yields more cells than N².
        let mut regions = Vec::with_capacity(threads.min(size.saturating_mul(size).max(1)));

        'walk: for i in (0..size).step_by(stride) {
            for j in (0..size).step_by(stride) {
                if regions.len() == threads {
                    break 'walk;
                }
                regions.push(Region::new(
                    i,
                    j,
                    (i + stride).min(size),
                    (j + stride).min(size),
                ));
            }
        }

        Self {
            size,
            threads,
            stride,
            regions,
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Threads that were asked for but got no region.
    pub fn idle_threads(&self) -> usize {
        self.threads - self.regions.len()
    }

    pub fn is_disjoint(&self) -> bool {
        self.regions
            .iter()
            .enumerate()
            .all(|(i, a)| self.regions[i + 1..].iter().all(|b| !a.overlaps(b)))
    }

    /// Output cells assigned to some worker.
    pub fn covered_cells(&self) -> usize {
        self.regions.iter().map(Region::area).sum()
    }

    /// Output cells no worker will compute.
    pub fn uncovered_cells(&self) -> usize {
        (self.size * self.size).saturating_sub(self.covered_cells())
    }

    /// Whether every output cell belongs to exactly one region.
    pub fn is_complete(&self) -> bool {
        self.is_disjoint() && self.uncovered_cells() == 0
    }

    pub fn check_coverage(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(MatmulError::CoverageGap {
                size: self.size,
                threads: self.threads,
                uncovered: self.uncovered_cells(),
            })
        }
    }
}
