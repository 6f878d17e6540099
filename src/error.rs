use thiserror::Error;

/// Everything that can go wrong around a multiply call.
///
/// The kernels themselves never fail: a well-formed call is pure
/// arithmetic. These are the configuration, construction and thread
/// start-up failures at the edges.
#[derive(Error, Debug)]
pub enum MatmulError {
    #[error("invalid {field} = {value}: {reason}")]
    InvalidConfig {
        field: &'static str,
        value: usize,
        reason: &'static str,
    },
    #[error("matrix data has {got} elements, expected {size}x{size}={expected}")]
    DimensionMismatch {
        size: usize,
        expected: usize,
        got: usize,
    },
    #[error("partition of {size}x{size} over {threads} threads leaves {uncovered} output cells uncomputed")]
    CoverageGap {
        size: usize,
        threads: usize,
        uncovered: usize,
    },
    #[error("failed to start worker thread")]
    Spawn(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatmulError>;
