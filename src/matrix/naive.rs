use super::Matrix;
use crate::element::Element;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop with no blocking at all. It is the
/// correctness baseline: the blocked and parallel multipliers must match
/// it bit for bit, wraparound included.
///
/// Accumulates into `c` (C += A * B).
///
/// # Panics
///
/// Panics if the three matrices don't share one dimension.
pub fn matmul_naive<T: Element>(a: &Matrix<T>, b: &Matrix<T>, c: &mut Matrix<T>) {
    let n = a.size();
    assert_eq!(b.size(), n, "B: expected {}x{}, got {}x{}", n, n, b.size(), b.size());
    assert_eq!(c.size(), n, "C: expected {}x{}, got {}x{}", n, n, c.size(), c.size());

    let (a, b) = (a.as_slice(), b.as_slice());
    let c = c.as_mut_slice();
    for i in 0..n {
        for j in 0..n {
            for p in 0..n {
                c[i * n + j] = T::mul_add(c[i * n + j], a[i * n + p], b[p * n + j]);
            }
        }
    }
}
