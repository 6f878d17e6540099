//! Integer element types the multipliers accept.

use num::Zero;
use num::traits::{WrappingAdd, WrappingMul};
use std::fmt::{Debug, Display};

/// A fixed-width integer that can be multiplied with wraparound.
///
/// Overflow is never detected: `mul_add` wraps exactly like the
/// unchecked `C += A * B` of a two's-complement machine, so every path
/// (naive, blocked, parallel) produces bit-identical output.
pub trait Element:
    Copy + Send + Sync + Debug + Display + PartialEq + Zero + WrappingAdd + WrappingMul
{
    /// `acc + a * b`, wrapping on overflow.
    #[inline(always)]
    fn mul_add(acc: Self, a: Self, b: Self) -> Self {
        acc.wrapping_add(&a.wrapping_mul(&b))
    }

    /// Truncating conversion from an index, used by the index-sum fill.
    fn from_index(value: usize) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn from_index(value: usize) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64, u8, u16, u32, u64);
