//! Scalar i-j-k micro-kernel.

use crate::element::Element;
use crate::matrix::view::RegionMut;
use std::ops::Range;

/// Computes one block: C[rows, cols] += A[rows, depth] × B[depth, cols]
///
/// Each output element is loaded once, accumulated over the whole depth
/// range in a register, and stored back. Integer wraparound makes the
/// result identical to adding every product straight into C.
///
/// # Arguments
///
/// * `a`, `b` - Flat row-major N×N inputs
/// * `n` - Matrix dimension (row stride of `a` and `b`)
/// * `c` - Output view; `rows` × `cols` must lie inside its region
/// * `rows`, `cols`, `depth` - Block bounds, already clamped by the caller
pub fn kernel_block<T: Element>(
    a: &[T],
    b: &[T],
    n: usize,
    c: &mut RegionMut<'_, T>,
    rows: Range<usize>,
    cols: Range<usize>,
    depth: Range<usize>,
) {
    let region = c.region();
    debug_assert!(rows.start >= region.start_row && rows.end <= region.end_row);
    debug_assert!(cols.start >= region.start_col && cols.end <= region.end_col);
    debug_assert!(depth.end <= n);

    for i in rows {
        let a_row = &a[i * n..(i + 1) * n];
        let c_row = c.row_mut(i);
        for j in cols.clone() {
            let slot = &mut c_row[j - region.start_col];
            let mut acc = *slot;
            for p in depth.clone() {
                acc = T::mul_add(acc, a_row[p], b[p * n + j]);
            }
            *slot = acc;
        }
    }
}
