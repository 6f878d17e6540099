//! Cache-blocked integer matrix multiplication, single- and multi-threaded.
//!
//! Both paths compute C += A × B for square N×N matrices of fixed-width
//! integers, with wraparound on overflow. The blocked walk tiles rows,
//! columns and depth in B×B blocks so the working set stays in cache; the
//! parallel path cuts C into a grid of rectangles and runs the same walk on
//! each rectangle in its own thread.
//!
//! ## Usage
//!
//! ```
//! use bmm::{Fill, Matrix, multiply};
//!
//! let a = Matrix::<i32>::filled(256, Fill::IndexSum);
//! let b = Matrix::<i32>::filled(256, Fill::IndexSum);
//! let mut c = Matrix::zeros(256);
//!
//! multiply(&a, &b, &mut c, 32);
//! ```
//!
//! For large matrices, use the multi-threaded version:
//!
//! ```
//! use bmm::{Config, Fill, Matrix, multiply_parallel};
//!
//! let a = Matrix::<i32>::filled(256, Fill::IndexSum);
//! let b = Matrix::<i32>::filled(256, Fill::IndexSum);
//! let mut c = Matrix::zeros(256);
//!
//! let config = Config::new(256).with_block_size(32).with_threads(4);
//! let partition = multiply_parallel(&a, &b, &mut c, &config).unwrap();
//! assert!(partition.is_complete());
//! ```
//!
//! ## Coverage
//!
//! The partition is a fixed grid with stride ⌊N / √T⌋. It covers C exactly
//! only when that walk yields exactly T cells (e.g. T = 4 with even N).
//! Otherwise part of C is never computed; see [`CoveragePolicy`].

pub mod blocked;
pub mod config;
pub mod element;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod threaded;

pub use config::{Config, CoveragePolicy};
pub use element::Element;
pub use error::{MatmulError, Result};
pub use matrix::Matrix;
pub use matrix::init::Fill;
pub use matrix::naive::matmul_naive;
pub use matrix::preview::Preview;
pub use matrix::region::Region;
pub use threaded::partition::Partition;

/// Matrix multiply: C += A * B
///
/// Single-threaded, tiled in `block_size` blocks. `block_size` need not
/// divide N.
///
/// # Panics
///
/// Panics if the matrices differ in size or `block_size` is zero.
pub fn multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>, c: &mut Matrix<T>, block_size: usize) {
    blocked::tiled::matmul_blocked(a, b, c, block_size);
}

/// Same as [`multiply`] but split across `config.threads` worker threads.
///
/// Blocks until every worker has finished. Returns the partition that was
/// run so callers can inspect its coverage.
pub fn multiply_parallel<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    config: &Config,
) -> Result<Partition> {
    threaded::grid_mt::matmul_grid_mt(a, b, c, config)
}
