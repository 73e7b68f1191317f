//! Numeric weight abstraction.
//!
//! Every weighted algorithm is generic over [`Weight`], so integer and floating
//! point costs work the same way. A weight type needs ordering, addition,
//! subtraction, a zero and bounds. Its largest value doubles as the
//! "unreached" distance.

use core::fmt::Debug;
use core::ops::{Add, Sub};

use num_traits::{Bounded, Zero};

/// Edge cost, distance, or capacity.
///
/// Implemented for every type that provides the required `num-traits`
/// capabilities (`i32`, `u64`, `f64`, ...).
pub trait Weight:
    Copy + PartialOrd + Debug + Zero + Bounded + Add<Output = Self> + Sub<Output = Self>
{
    /// The "unreached" distance: the type's largest value.
    #[inline]
    fn unreached() -> Self {
        Self::max_value()
    }

    /// Returns `true` if this value is at or beyond [`Weight::unreached`].
    #[inline]
    fn is_unreached(&self) -> bool {
        *self >= Self::unreached()
    }

    /// Sum that never overflows.
    ///
    /// An unreached operand makes the sum unreached, as does a sum past the
    /// largest value. A sum below the smallest value clamps to it.
    #[inline]
    fn combine(self, other: Self) -> Self {
        if self.is_unreached() || other.is_unreached() {
            return Self::unreached();
        }
        let zero = Self::zero();
        if other > zero && self > Self::max_value() - other {
            Self::unreached()
        } else if other < zero && self < Self::min_value() - other {
            Self::min_value()
        } else {
            self + other
        }
    }

    /// The smaller of two weights (the first on ties or incomparable values).
    #[inline]
    fn min_weight(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl<T> Weight for T where
    T: Copy + PartialOrd + Debug + Zero + Bounded + Add<Output = T> + Sub<Output = T>
{
}

/// Sums the weights of an edge sequence.
pub fn path_weight<E, W, F>(path: &[E], mut weight: F) -> W
where
    E: Copy,
    W: Weight,
    F: FnMut(E) -> W,
{
    path.iter().fold(W::zero(), |acc, &e| acc.combine(weight(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreached_is_absorbing() {
        assert_eq!(i32::unreached().combine(-5), i32::unreached());
        assert_eq!(3i32.combine(4), 7);
        assert!(f64::unreached().is_unreached());
        assert!(Weight::is_unreached(&f64::MAX));
        assert!(!1.5f64.is_unreached());
    }

    #[test]
    fn combine_saturates_instead_of_overflowing() {
        assert_eq!(200u8.combine(100), u8::unreached());
        assert_eq!(200u8.combine(55), 255);
        assert_eq!(u32::MAX.combine(0), u32::MAX);
        assert_eq!(i8::MIN.combine(-1), i8::MIN);
        assert_eq!((-100i8).combine(-100), i8::MIN);
        assert_eq!(100i8.combine(-100), 0);
        assert_eq!(f64::MAX.combine(-1.0), f64::MAX);
        assert_eq!(1.5f64.combine(2.0), 3.5);
    }

    #[test]
    fn path_weight_sums_edges() {
        let edges = [1u32, 2, 3];
        assert_eq!(path_weight(&edges, |e| e * 10), 60u32);
        assert_eq!(path_weight::<u32, u32, _>(&[], |e| e), 0);
    }
}
