//! Square matrix storage, regions, and the naive reference multiply.
//!
//! Everything else in the crate is checked against `naive::matmul_naive`.

pub mod init;
pub mod naive;
pub mod preview;
pub mod region;
pub mod view;

use crate::element::Element;
use crate::error::{MatmulError, Result};
use std::ops::{Index, IndexMut};

/// An owned `size × size` matrix stored row-major in one flat buffer.
///
/// Element `(i, j)` lives at `data[i * size + j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// A matrix of zeros, ready to be accumulated into.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            data: vec![T::zero(); size * size],
        }
    }

    /// Wraps an existing row-major buffer.
    pub fn from_vec(size: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != size * size {
            return Err(MatmulError::DimensionMismatch {
                size,
                expected: size * size,
                got: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// Builds a matrix from `f(row, col)`.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                data.push(f(i, j));
            }
        }
        Self { size, data }
    }
}

impl<T> Matrix<T> {
    /// Dimension N of this N×N matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.data.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Row `i` as a contiguous slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics; a 0×0 matrix simply has no rows.
        self.data.chunks_exact(self.size.max(1))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.size && col < self.size,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.size,
            self.size
        );
        &self.data[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.size && col < self.size,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.size,
            self.size
        );
        &mut self.data[row * self.size + col]
    }
}
