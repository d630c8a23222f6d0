//! Shift-and-add ("Russian peasant") multiplication.
//!
//! The left operand is doubled while the right one is halved; whenever the right
//! operand is odd, the current left operand is added to the product.

use crate::{Error, Result, ShiftMul, SignedWord, Word};

/// Computes `lhs * rhs`.
///
/// Returns [`Error::Overflow`] if the product does not fit in `T`, and
/// [`Error::NegativeOperand`] if either operand of a signed type is negative.
#[inline]
pub fn multiply<T: ShiftMul>(lhs: T, rhs: T) -> Result<T> {
    lhs.shift_mul(rhs)
}

pub(crate) fn mul_unsigned<T: Word>(lhs: T, rhs: T) -> Result<T> {
    let mut product = T::ZERO;
    let mut addend = lhs;
    let mut multiplier = rhs;

    while multiplier != T::ZERO {
        if multiplier.is_odd() {
            product = product.checked_add(&addend).ok_or(Error::Overflow)?;
        }

        multiplier = multiplier.halve();

        // Any remaining bit of the multiplier adds at least the doubled addend.
        if multiplier != T::ZERO {
            addend = addend.checked_double().ok_or(Error::Overflow)?;
        }
    }

    Ok(product)
}

pub(crate) fn mul_signed<T: SignedWord>(lhs: T, rhs: T) -> Result<T> {
    let lhs = lhs.to_unsigned()?;
    let rhs = rhs.to_unsigned()?;
    T::from_unsigned(mul_unsigned(lhs, rhs)?)
}

#[cfg(test)]
mod tests {
    use super::multiply;
    use crate::Error;

    #[test]
    fn mul_ok() {
        assert_eq!(multiply(0u32, 0), Ok(0));
        assert_eq!(multiply(0u32, u32::MAX), Ok(0));
        assert_eq!(multiply(u32::MAX, 1), Ok(u32::MAX));
        assert_eq!(multiply(13u32, 238), Ok(3094));
        assert_eq!(multiply(3u8, 85), Ok(255));
        assert_eq!(multiply(u64::MAX / 3, 3), Ok(u64::MAX));
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(multiply(16u8, 16), Err(Error::Overflow));
        assert_eq!(multiply(128u8, 2), Err(Error::Overflow));
        assert_eq!(multiply(u128::MAX, 2), Err(Error::Overflow));
        assert_eq!(multiply(u32::MAX, u32::MAX), Err(Error::Overflow));
    }

    #[test]
    fn mul_signed() {
        assert_eq!(multiply(12i16, 12), Ok(144));
        assert_eq!(multiply(64i8, 2), Err(Error::Overflow));
        assert_eq!(multiply(-3i32, 4), Err(Error::NegativeOperand));
        assert_eq!(multiply(3i32, -4), Err(Error::NegativeOperand));
    }

    #[test]
    fn mul_u8_exhaustive() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                let expected = a.checked_mul(b).ok_or(Error::Overflow);
                assert_eq!(multiply(a, b), expected, "{a} * {b}");
            }
        }
    }
}
