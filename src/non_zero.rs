//! Wrapper type for non-zero divisors.

use crate::{Error, Result, Word};
use core::ops::Deref;

/// Wrapper type for non-zero integers.
///
/// Dividing by a [`NonZero`] divisor cannot fail, so the checks for a zero
/// divisor happen once, when the wrapper is constructed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NonZero<T>(pub(crate) T);

impl<T: Word> NonZero<T> {
    /// The value `1`.
    pub const ONE: Self = Self(T::ONE);

    /// Create a new non-zero integer, returning [`Error::InvalidDivisor`] if `n` is zero.
    pub fn try_new(n: T) -> Result<Self> {
        if n == T::ZERO {
            Err(Error::InvalidDivisor)
        } else {
            Ok(Self(n))
        }
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl<T: Word> Default for NonZero<T> {
    fn default() -> Self {
        Self::ONE
    }
}

impl<T> Deref for NonZero<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::NonZero;
    use crate::Error;

    #[test]
    fn try_new() {
        assert_eq!(NonZero::try_new(0u32), Err(Error::InvalidDivisor));
        assert_eq!(NonZero::try_new(0u128), Err(Error::InvalidDivisor));
        assert_eq!(NonZero::try_new(7u32).map(NonZero::get), Ok(7));
        assert_eq!(NonZero::try_new(u128::MAX).map(NonZero::get), Ok(u128::MAX));
    }

    #[test]
    fn try_from() {
        assert_eq!(NonZero::<u8>::try_from(0u8), Err(Error::InvalidDivisor));
        assert_eq!(NonZero::<u8>::try_from(255u8).map(NonZero::get), Ok(255));
    }

    #[test]
    fn default_is_one() {
        assert_eq!(NonZero::<u64>::default(), NonZero::<u64>::ONE);
        assert_eq!(*NonZero::<u64>::default(), 1);
    }
}
