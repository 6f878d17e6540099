//! Multi-threaded GEMM.
//!
//! The output matrix is cut into a grid of rectangles, one per worker, and
//! every worker runs the blocked GEMM on its own rectangle. The thread
//! count is fixed by the caller; there is no work stealing or rebalancing.
//!
//! - `partition`: grid geometry and coverage checks
//! - `grid_mt`: scoped worker fan-out over a partition

pub mod grid_mt;
pub mod partition;
