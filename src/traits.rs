//! Traits provided by this crate

use crate::Result;
use core::fmt::Debug;
use num_traits::{PrimInt, Signed, Unsigned};

/// Primitive unsigned integer which the doubling divider operates on.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait Word: PrimInt + Unsigned + From<u8> + Debug + sealed::Sealed {
    /// Size of this integer in bits.
    const BITS: u32;

    /// The value `0`.
    const ZERO: Self;

    /// The value `1`.
    const ONE: Self;

    /// Maximum value this integer can express.
    const MAX: Self;

    /// Computes `self << 1`, returning `None` if the most significant bit is set.
    #[inline]
    fn checked_double(self) -> Option<Self> {
        if self.leading_zeros() == 0 {
            None
        } else {
            Some(self << 1)
        }
    }

    /// Computes `self >> 1`.
    #[inline]
    fn halve(self) -> Self {
        self >> 1
    }

    /// Is this value odd?
    #[inline]
    fn is_odd(self) -> bool {
        self & Self::ONE == Self::ONE
    }
}

/// Primitive signed integer accepted at the API boundary.
///
/// Negative values are rejected; non-negative values are handed to the
/// unsigned algorithm of the same width.
pub trait SignedWord: PrimInt + Signed + Debug + sealed::Sealed {
    /// Unsigned counterpart of the same width.
    type Unsigned: Word;

    /// Reinterpret a non-negative value as [`Self::Unsigned`].
    ///
    /// Returns [`Error::NegativeOperand`][crate::Error::NegativeOperand] for negative values.
    fn to_unsigned(self) -> Result<Self::Unsigned>;

    /// Convert an unsigned value back into this type.
    ///
    /// Returns [`Error::Overflow`][crate::Error::Overflow] if `n` exceeds `Self::MAX`.
    fn from_unsigned(n: Self::Unsigned) -> Result<Self>;
}

/// Division by repeated doubling.
pub trait ShiftDiv: Sized {
    /// Computes `self / rhs`, truncated towards zero.
    fn shift_div(self, rhs: Self) -> Result<Self>;

    /// Computes `self / rhs` and `self % rhs` in a single pass.
    fn shift_div_rem(self, rhs: Self) -> Result<(Self, Self)>;

    /// Computes `self % rhs`.
    fn shift_rem(self, rhs: Self) -> Result<Self> {
        self.shift_div_rem(rhs).map(|(_, rem)| rem)
    }
}

/// Multiplication by repeated doubling and halving.
pub trait ShiftMul: Sized {
    /// Computes `self * rhs`, failing if the product does not fit in `Self`.
    fn shift_mul(self, rhs: Self) -> Result<Self>;
}

/// Decoding from decimal strings.
pub trait FromDecimal: Sized {
    /// Parse an instance of this type from a decimal string.
    fn from_decimal(value: &str) -> Result<Self> {
        Self::from_decimal_bytes(value.as_bytes())
    }

    /// Parse an instance of this type from a string of UTF-8 bytes.
    fn from_decimal_bytes(value: &[u8]) -> Result<Self>;
}

pub(crate) mod sealed {
    pub trait Sealed {}
}
