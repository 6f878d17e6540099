//! Cache-blocked matrix multiplication.
//!
//! These functions break the multiply into B×B tiles over rows, columns and
//! depth so that one block of A, B and C stays resident in cache while the
//! micro-kernel runs over it. The last tile in any dimension is clamped to
//! the matrix (or region) edge, so N doesn't have to be a multiple of B.
//!
//! Available implementations:
//! - `tiled`: i-j-k block walk over the scalar micro-kernel

pub mod tiled;
