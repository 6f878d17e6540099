//! Fill strategies for input matrices.

use super::Matrix;
use crate::element::Element;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How to populate an input matrix before a multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Every element zero.
    Zero,
    /// `m[i][j] = i + j`, truncated to the element width.
    IndexSum,
    /// Uniform values in `0..16` from a seeded generator, so runs repeat.
    Random { seed: u64 },
}

impl Fill {
    pub fn apply<T: Element>(&self, matrix: &mut Matrix<T>) {
        let n = matrix.size();
        match *self {
            Fill::Zero => matrix.as_mut_slice().fill(T::zero()),
            Fill::IndexSum => {
                for (idx, value) in matrix.as_mut_slice().iter_mut().enumerate() {
                    *value = T::from_index(idx / n + idx % n);
                }
            }
            Fill::Random { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                for value in matrix.as_mut_slice() {
                    *value = T::from_index(rng.random_range(0..16usize));
                }
            }
        }
    }
}

impl<T: Element> Matrix<T> {
    /// Allocates an `size × size` matrix populated by `fill`.
    pub fn filled(size: usize, fill: Fill) -> Self {
        let mut matrix = Matrix::zeros(size);
        fill.apply(&mut matrix);
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_sum() {
        let m = Matrix::<i32>::filled(4, Fill::IndexSum);
        assert_eq!(m.row(0), &[0, 1, 2, 3]);
        assert_eq!(m.row(3), &[3, 4, 5, 6]);
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Matrix::<i64>::filled(8, Fill::Random { seed: 7 });
        let b = Matrix::<i64>::filled(8, Fill::Random { seed: 7 });
        let c = Matrix::<i64>::filled(8, Fill::Random { seed: 8 });
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.as_slice().iter().all(|&v| (0..16).contains(&v)));
    }

    #[test]
    fn test_zero_resets() {
        let mut m = Matrix::<u16>::filled(3, Fill::IndexSum);
        Fill::Zero.apply(&mut m);
        assert!(m.as_slice().iter().all(|&v| v == 0));
    }
}
