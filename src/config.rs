//! Multiply configuration, built once by the caller and passed down.

use crate::error::{MatmulError, Result};

/// What the parallel multiplier does when its partition doesn't cover the
/// whole output matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoveragePolicy {
    /// Run the partition exactly as walked. Uncovered cells keep whatever C
    /// held on entry; a warning is logged.
    #[default]
    Reference,
    /// Refuse to start any worker and return `CoverageGap`.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dimension N of every matrix in the call.
    pub size: usize,
    /// Tile edge B.
    pub block_size: usize,
    /// Worker count T for the parallel path.
    pub threads: usize,
    pub coverage: CoveragePolicy,
}

impl Config {
    pub const DEFAULT_BLOCK_SIZE: usize = 32;
    pub const DEFAULT_THREADS: usize = 4;

    pub fn new(size: usize) -> Self {
        Self {
            size,
            block_size: Self::DEFAULT_BLOCK_SIZE.min(size.max(1)),
            threads: Self::DEFAULT_THREADS,
            coverage: CoveragePolicy::default(),
        }
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_coverage(mut self, coverage: CoveragePolicy) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(MatmulError::InvalidConfig {
                field: "size",
                value: self.size,
                reason: "must be at least 1",
            });
        }
        if self.block_size == 0 || self.block_size > self.size {
            return Err(MatmulError::InvalidConfig {
                field: "block_size",
                value: self.block_size,
                reason: "must be in 1..=size",
            });
        }
        if self.threads == 0 {
            return Err(MatmulError::InvalidConfig {
                field: "threads",
                value: self.threads,
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
