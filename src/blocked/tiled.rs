//! Three-level tiled GEMM.

use crate::element::Element;
use crate::kernels::scalar::kernel_block;
use crate::matrix::Matrix;
use crate::matrix::view::RegionMut;

/// Cache-blocked matrix multiplication: C += A × B
///
/// Walks (row-block, col-block, depth-block) in strides of `block_size`
/// and runs the micro-kernel on each block triple. C is accumulated into,
/// never overwritten, so callers normally pass a zeroed matrix.
///
/// # Panics
///
/// Panics if the matrices differ in size or `block_size` is zero.
pub fn matmul_blocked<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    block_size: usize,
) {
    let n = a.size();
    assert_eq!(b.size(), n, "B: expected {}x{}, got {}x{}", n, n, b.size(), b.size());
    assert_eq!(c.size(), n, "C: expected {}x{}, got {}x{}", n, n, c.size(), c.size());

    let mut view = RegionMut::full(c);
    matmul_blocked_region(a.as_slice(), b.as_slice(), &mut view, n, block_size);
}

/// The same block walk restricted to the rows and columns of `c`'s region.
///
/// Row and column blocks start at the region's top-left corner and are
/// clamped to its end; the depth walk always spans the full `0..n`. This is
/// what every parallel worker runs on its own rectangle.
///
/// # Arguments
///
/// * `a`, `b` - Flat row-major N×N inputs
/// * `c` - View of the output region to accumulate into
/// * `n` - Matrix dimension
/// * `block_size` - Tile edge B, `0 < B`
pub fn matmul_blocked_region<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut RegionMut<'_, T>,
    n: usize,
    block_size: usize,
) {
    assert!(block_size > 0, "block_size must be at least 1");
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);

    let region = c.region();
    for i in region.rows().step_by(block_size) {
        let i_end = (i + block_size).min(region.end_row);
        for j in region.cols().step_by(block_size) {
            let j_end = (j + block_size).min(region.end_col);
            for k in (0..n).step_by(block_size) {
                let k_end = (k + block_size).min(n);
                kernel_block(a, b, n, c, i..i_end, j..j_end, k..k_end);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::init::Fill;
    use crate::matrix::naive::matmul_naive;
    use crate::matrix::region::Region;

    #[test]
    fn test_blocked_matches_naive_uneven_blocks() {
        for (n, block) in [(5, 2), (7, 3), (9, 4), (10, 10), (6, 1)] {
            let a = Matrix::<i32>::filled(n, Fill::Random { seed: n as u64 });
            let b = Matrix::<i32>::filled(n, Fill::IndexSum);

            let mut expected = Matrix::zeros(n);
            matmul_naive(&a, &b, &mut expected);

            let mut c = Matrix::zeros(n);
            matmul_blocked(&a, &b, &mut c, block);
            assert_eq!(c, expected, "n={} block={}", n, block);
        }
    }

    #[test]
    fn test_region_walk_only_touches_region() {
        let n = 6;
        let a = Matrix::<i64>::filled(n, Fill::IndexSum);
        let b = Matrix::<i64>::filled(n, Fill::IndexSum);
        let mut expected = Matrix::zeros(n);
        matmul_naive(&a, &b, &mut expected);

        let region = Region::new(1, 2, 5, 6);
        let mut c = Matrix::<i64>::zeros(n);
        {
            let mut views = RegionMut::split(&mut c, &[region]);
            matmul_blocked_region(a.as_slice(), b.as_slice(), &mut views[0], n, 4);
        }

        for i in 0..n {
            for j in 0..n {
                let want = if region.contains(i, j) { expected[(i, j)] } else { 0 };
                assert_eq!(c[(i, j)], want, "cell ({}, {})", i, j);
            }
        }
    }

    #[test]
    #[should_panic(expected = "block_size must be at least 1")]
    fn test_zero_block_panics() {
        let a = Matrix::<i32>::zeros(2);
        let b = Matrix::<i32>::zeros(2);
        let mut c = Matrix::<i32>::zeros(2);
        matmul_blocked(&a, &b, &mut c, 0);
    }
}
