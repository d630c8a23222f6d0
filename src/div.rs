//! Binary long division by repeated doubling.
//!
//! Each reduction step doubles a working copy of the divisor, together with a
//! power-of-two quotient chunk, for as long as the doubled divisor still fits
//! under the residual numerator. The chunk is then accumulated and its multiple
//! of the divisor subtracted from the residual. The residual shrinks by more than
//! half on every step, so the quotient bits are found from the most significant
//! one downwards, in the manner of a hardware restoring divider.
//!
//! These functions are variable-time.

use crate::{NonZero, Result, ShiftDiv, SignedWord, Word};
use core::iter::FusedIterator;

/// Computes `numerator / denominator`, truncated towards zero.
///
/// Returns [`Error::InvalidDivisor`][crate::Error::InvalidDivisor] if `denominator` is zero, and
/// [`Error::NegativeOperand`][crate::Error::NegativeOperand] if either operand of a signed type is
/// negative.
#[inline]
pub fn divide<T: ShiftDiv>(numerator: T, denominator: T) -> Result<T> {
    numerator.shift_div(denominator)
}

/// Computes `numerator / denominator` and `numerator % denominator`.
///
/// Fails under the same conditions as [`divide`].
#[inline]
pub fn div_rem<T: ShiftDiv>(numerator: T, denominator: T) -> Result<(T, T)> {
    numerator.shift_div_rem(denominator)
}

/// Computes `numerator % denominator`.
///
/// Fails under the same conditions as [`divide`].
#[inline]
pub fn rem<T: ShiftDiv>(numerator: T, denominator: T) -> Result<T> {
    numerator.shift_rem(denominator)
}

/// Computes `numerator / denominator` for a divisor known to be non-zero.
#[inline]
pub fn divide_nonzero<T: Word>(numerator: T, denominator: NonZero<T>) -> T {
    div_rem_nonzero(numerator, denominator).0
}

/// Computes `numerator / denominator` and `numerator % denominator` for a divisor
/// known to be non-zero.
///
/// The remainder is the residual left over once it drops below the divisor.
pub fn div_rem_nonzero<T: Word>(numerator: T, denominator: NonZero<T>) -> (T, T) {
    let mut steps = Steps::new(numerator, denominator);

    // Chunks are strictly decreasing powers of two, so OR-ing them is the same as adding.
    let quotient = steps.by_ref().fold(T::ZERO, |quo, step| quo | step.chunk);

    (quotient, steps.residual())
}

pub(crate) fn div_rem_unsigned<T: Word>(numerator: T, denominator: T) -> Result<(T, T)> {
    let denominator = NonZero::try_new(denominator)?;
    Ok(div_rem_nonzero(numerator, denominator))
}

pub(crate) fn div_rem_signed<T: SignedWord>(numerator: T, denominator: T) -> Result<(T, T)> {
    // Negative operands are reported ahead of a zero divisor.
    let numerator = numerator.to_unsigned()?;
    let denominator = denominator.to_unsigned()?;
    let (quo, rem) = div_rem_unsigned(numerator, denominator)?;
    Ok((T::from_unsigned(quo)?, T::from_unsigned(rem)?))
}

/// A single reduction step of the doubling divider.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Step<T> {
    /// Power of two added to the quotient by this step.
    pub chunk: T,

    /// `chunk * divisor`, the amount subtracted from the residual.
    pub multiple: T,

    /// Residual numerator after this step.
    pub residual: T,
}

/// Iterator over the reduction steps of `numerator / divisor`.
///
/// Yields one [`Step`] per quotient chunk, most significant first, and stops once
/// the residual is smaller than the divisor. The divisor stays fixed throughout.
///
/// ```
/// use shift_divide::{NonZero, Steps};
///
/// let divisor = NonZero::try_new(3u32)?;
/// let chunks: Vec<u32> = Steps::new(10, divisor).map(|step| step.chunk).collect();
/// assert_eq!(chunks, [2, 1]);
/// # Ok::<(), shift_divide::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Steps<T> {
    residual: T,
    divisor: NonZero<T>,
}

impl<T: Word> Steps<T> {
    /// Start dividing `numerator` by `divisor`.
    pub fn new(numerator: T, divisor: NonZero<T>) -> Self {
        Self {
            residual: numerator,
            divisor,
        }
    }

    /// Residual numerator: the remainder once the iterator is exhausted.
    pub fn residual(&self) -> T {
        self.residual
    }
}

impl<T: Word> Iterator for Steps<T> {
    type Item = Step<T>;

    fn next(&mut self) -> Option<Step<T>> {
        let divisor = self.divisor.get();
        if self.residual < divisor {
            return None;
        }

        let (chunk, multiple) = largest_doubling(self.residual, divisor);
        self.residual = self.residual - multiple;

        Some(Step {
            chunk,
            multiple,
            residual: self.residual,
        })
    }
}

impl<T: Word> FusedIterator for Steps<T> {}

/// Finds the largest power of two `chunk` such that `chunk * divisor <= residual`,
/// returning `(chunk, chunk * divisor)`.
///
/// Requires `divisor <= residual`.
#[inline]
fn largest_doubling<T: Word>(residual: T, divisor: T) -> (T, T) {
    debug_assert!(divisor <= residual);

    let mut chunk = T::ONE;
    let mut multiple = divisor;

    loop {
        match multiple.checked_double() {
            Some(doubled) if doubled <= residual => {
                multiple = doubled;
                chunk = chunk << 1;
            }
            // A doubling that doesn't fit in `T` exceeds every residual, same as an overshoot.
            _ => return (chunk, multiple),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Step, Steps, div_rem, div_rem_nonzero, divide, largest_doubling, rem};
    use crate::{Error, NonZero};

    #[test]
    fn div_concrete() {
        assert_eq!(divide(10u32, 3), Ok(3));
        assert_eq!(divide(1u32, 1), Ok(1));
        assert_eq!(divide(0u32, 7), Ok(0));
        assert_eq!(divide(1024u32, 2), Ok(512));
        assert_eq!(divide(7u32, 10), Ok(0));
    }

    #[test]
    fn div_rem_concrete() {
        assert_eq!(div_rem(10u64, 3), Ok((3, 1)));
        assert_eq!(div_rem(7u64, 10), Ok((0, 7)));
        assert_eq!(rem(1023u16, 2), Ok(1));
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(divide(5u32, 0), Err(Error::InvalidDivisor));
        assert_eq!(divide(0u32, 0), Err(Error::InvalidDivisor));
        assert_eq!(div_rem(u128::MAX, 0), Err(Error::InvalidDivisor));
    }

    #[test]
    fn div_signed() {
        assert_eq!(divide(10i32, 3), Ok(3));
        assert_eq!(div_rem(i64::MAX, 2), Ok((i64::MAX / 2, 1)));
        assert_eq!(divide(-1i32, 5), Err(Error::NegativeOperand));
        assert_eq!(divide(5i32, -1), Err(Error::NegativeOperand));
        assert_eq!(divide(-5i8, 0), Err(Error::NegativeOperand));
        assert_eq!(divide(5isize, 0), Err(Error::InvalidDivisor));
    }

    #[test]
    fn div_top_bit_set() {
        // The divisor can't be doubled at all without overflowing.
        assert_eq!(div_rem(200u8, 150), Ok((1, 50)));
        assert_eq!(div_rem(255u8, 128), Ok((1, 127)));
        assert_eq!(div_rem(u64::MAX, u64::MAX), Ok((1, 0)));
        assert_eq!(div_rem(u128::MAX, 1), Ok((u128::MAX, 0)));
        assert_eq!(divide(u128::MAX, 3), Ok(u128::MAX / 3));
    }

    #[test]
    fn div_u8_exhaustive() {
        for n in 0..=u8::MAX {
            for d in 1..=u8::MAX {
                assert_eq!(div_rem(n, d), Ok((n / d, n % d)), "{n} / {d}");
            }
        }
    }

    #[test]
    fn div_rem_nonzero_ok() {
        let d = NonZero::try_new(0xfffeu32).expect("ensured non-zero");
        assert_eq!(div_rem_nonzero(0xffff_ffff, d), (0x10002, 0x3));
    }

    #[test]
    fn steps() {
        let d = NonZero::try_new(3u32).expect("ensured non-zero");
        let mut steps = Steps::new(10, d);
        assert_eq!(
            steps.next(),
            Some(Step {
                chunk: 2,
                multiple: 6,
                residual: 4
            })
        );
        assert_eq!(
            steps.next(),
            Some(Step {
                chunk: 1,
                multiple: 3,
                residual: 1
            })
        );
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next(), None);
        assert_eq!(steps.residual(), 1);
    }

    #[test]
    fn steps_divisor_one() {
        // One step per set bit of the numerator.
        let d = NonZero::<u64>::ONE;
        assert_eq!(Steps::new(0b1011_0110, d).count(), 5);
        assert_eq!(Steps::new(u64::MAX, d).count(), 64);
    }

    #[test]
    fn largest_doubling_ok() {
        assert_eq!(largest_doubling(10u32, 3), (2, 6));
        assert_eq!(largest_doubling(12u32, 3), (4, 12));
        assert_eq!(largest_doubling(3u32, 3), (1, 3));
        assert_eq!(largest_doubling(u8::MAX, 1), (128, 128));
    }
}
