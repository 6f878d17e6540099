//! Micro-kernel for the inner loop of blocked matrix multiplication.
//!
//! The kernel computes one block triple of C += A × B with plain wrapping
//! integer arithmetic. It's called by the blocked multiplier for every
//! (row-block, col-block, depth-block) combination, on the full matrix or
//! on one worker's region.

pub mod scalar;
