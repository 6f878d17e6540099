//! Multi-threaded blocked GEMM over a grid partition of C.

use super::partition::Partition;
use crate::blocked::tiled::matmul_blocked_region;
use crate::config::{Config, CoveragePolicy};
use crate::element::Element;
use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use crate::matrix::region::Region;
use crate::matrix::view::RegionMut;
use tracing::{debug, trace, warn};
use std::thread;
use std::time::Instant;

/// Everything one worker needs: its region of C and read access to A and B.
pub struct Task<'a, T> {
    a: &'a [T],
    b: &'a [T],
    c: RegionMut<'a, T>,
    n: usize,
    block_size: usize,
}

impl<'a, T: Element> Task<'a, T> {
    pub fn region(&self) -> Region {
        self.c.region()
    }

    /// Runs the blocked walk over this task's region.
    pub fn run(mut self) {
        matmul_blocked_region(self.a, self.b, &mut self.c, self.n, self.block_size);
    }
}

/// Builds one task per region of `partition`, splitting `c` between them.
pub fn build_tasks<'a, T: Element>(
    a: &'a Matrix<T>,
    b: &'a Matrix<T>,
    c: &'a mut Matrix<T>,
    partition: &Partition,
    block_size: usize,
) -> Vec<Task<'a, T>> {
    let n = a.size();
    RegionMut::split(c, partition.regions())
        .into_iter()
        .map(|view| Task {
            a: a.as_slice(),
            b: b.as_slice(),
            c: view,
            n,
            block_size,
        })
        .collect()
}

/// Multi-threaded blocked matrix multiplication: C += A × B
///
/// Partitions C with [`Partition::grid`] for `config.threads` workers,
/// starts one scoped thread per region and joins all of them before
/// returning. Each worker runs the same block walk as the single-threaded
/// path, restricted to its rectangle. A and B are shared read-only; the
/// regions are disjoint, so no locking is involved.
///
/// Returns the partition that was used. With `CoveragePolicy::Reference`
/// an incomplete partition still runs (cells outside every region are left
/// as they were); with `CoveragePolicy::Strict` it is rejected before any
/// thread starts.
///
/// # Errors
///
/// - `InvalidConfig` if `config` fails validation
/// - `CoverageGap` under `CoveragePolicy::Strict`
/// - `Spawn` if the OS refuses to start a worker; workers already running
///   are joined before this returns
///
/// # Panics
///
/// Panics if the matrices don't all have dimension `config.size`, or
/// re-raises a worker's panic.
pub fn matmul_grid_mt<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    config: &Config,
) -> Result<Partition> {
    config.validate()?;
    let n = config.size;
    assert_eq!(a.size(), n, "A: expected {}x{}, got {}x{}", n, n, a.size(), a.size());
    assert_eq!(b.size(), n, "B: expected {}x{}, got {}x{}", n, n, b.size(), b.size());
    assert_eq!(c.size(), n, "C: expected {}x{}, got {}x{}", n, n, c.size(), c.size());

    let partition = Partition::grid(n, config.threads);
    debug!(
        "partition {}x{} over {} threads: stride {}, {} regions",
        n,
        n,
        config.threads,
        partition.stride(),
        partition.len()
    );

    if let Err(err) = partition.check_coverage() {
        match config.coverage {
            CoveragePolicy::Strict => return Err(err),
            CoveragePolicy::Reference => warn!("{}", err),
        }
    }
    if partition.idle_threads() > 0 {
        debug!("{} threads have no region", partition.idle_threads());
    }

    let start = Instant::now();
    let tasks = build_tasks(a, b, c, &partition, config.block_size);
    run_tasks(tasks)?;
    debug!("parallel multiply finished in {:?}", start.elapsed());

    Ok(partition)
}

/// Runs every task on its own scoped thread and waits for all of them.
fn run_tasks<T: Element>(tasks: Vec<Task<'_, T>>) -> Result<()> {
    thread::scope(|s| {
        let mut handles = Vec::with_capacity(tasks.len());
        for (id, task) in tasks.into_iter().enumerate() {
            let handle = thread::Builder::new()
                .name(format!("bmm-worker-{}", id))
                .spawn_scoped(s, move || {
                    let region = task.region();
                    trace!("worker {} started on {}", id, region);
                    task.run();
                    trace!("worker {} finished {}", id, region);
                })
                .map_err(MatmulError::Spawn)?;
            handles.push(handle);
        }

        for handle in handles {
            if let Err(payload) = handle.join() {
                std::panic::resume_unwind(payload);
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocked::tiled::matmul_blocked;
    use crate::matrix::init::Fill;

    #[test]
    fn test_grid_mt_matches_blocked() {
        for (n, block, threads) in [(8, 2, 4), (12, 5, 9), (16, 3, 16), (7, 7, 1), (30, 4, 4)] {
            let a = Matrix::<i32>::filled(n, Fill::Random { seed: 1 });
            let b = Matrix::<i32>::filled(n, Fill::Random { seed: 2 });

            let mut expected = Matrix::zeros(n);
            matmul_blocked(&a, &b, &mut expected, block);

            let mut c = Matrix::zeros(n);
            let config = Config::new(n).with_block_size(block).with_threads(threads);
            let partition = matmul_grid_mt(&a, &b, &mut c, &config).unwrap();
            assert!(partition.is_complete());
            assert_eq!(c, expected, "n={} block={} threads={}", n, block, threads);
        }
    }

    #[test]
    fn test_tasks_cover_their_regions() {
        let a = Matrix::<i32>::zeros(6);
        let b = Matrix::<i32>::zeros(6);
        let mut c = Matrix::<i32>::zeros(6);
        let partition = Partition::grid(6, 4);
        let tasks = build_tasks(&a, &b, &mut c, &partition, 2);
        let regions: Vec<_> = tasks.iter().map(Task::region).collect();
        assert_eq!(regions, partition.regions());
    }

    #[test]
    fn test_reference_policy_leaves_gap_untouched() {
        let n = 10;
        let a = Matrix::<i64>::filled(n, Fill::IndexSum);
        let b = Matrix::<i64>::filled(n, Fill::IndexSum);
        let mut expected = Matrix::zeros(n);
        matmul_blocked(&a, &b, &mut expected, 3);

        let mut c = Matrix::zeros(n);
        let config = Config::new(n).with_block_size(3).with_threads(2);
        let partition = matmul_grid_mt(&a, &b, &mut c, &config).unwrap();
        assert_eq!(partition.uncovered_cells(), 30);

        for i in 0..n {
            for j in 0..n {
                let covered = partition.regions().iter().any(|r| r.contains(i, j));
                let want = if covered { expected[(i, j)] } else { 0 };
                assert_eq!(c[(i, j)], want, "cell ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_strict_policy_refuses_gap() {
        let a = Matrix::<i32>::filled(10, Fill::IndexSum);
        let b = Matrix::<i32>::filled(10, Fill::IndexSum);
        let mut c = Matrix::<i32>::zeros(10);
        let config = Config::new(10)
            .with_block_size(2)
            .with_threads(3)
            .with_coverage(CoveragePolicy::Strict);
        let err = matmul_grid_mt(&a, &b, &mut c, &config).unwrap_err();
        assert!(matches!(err, MatmulError::CoverageGap { uncovered: 25, .. }));
        assert!(c.as_slice().iter().all(|&v| v == 0), "no worker should have run");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let a = Matrix::<i32>::zeros(4);
        let b = Matrix::<i32>::zeros(4);
        let mut c = Matrix::<i32>::zeros(4);
        let config = Config::new(4).with_threads(0);
        assert!(matches!(
            matmul_grid_mt(&a, &b, &mut c, &config),
            Err(MatmulError::InvalidConfig { field: "threads", .. })
        ));
    }
}
