//! Macros used to implement the crate's traits on primitive integers.

/// Impl [`Word`][crate::Word] and the arithmetic traits for primitive unsigned integers.
macro_rules! impl_unsigned {
    ($($int:ty),+ $(,)?) => {
        $(
            impl $crate::traits::sealed::Sealed for $int {}

            impl $crate::Word for $int {
                const BITS: u32 = <$int>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$int>::MAX;
            }

            impl $crate::ShiftDiv for $int {
                #[inline]
                fn shift_div(self, rhs: Self) -> $crate::Result<Self> {
                    $crate::div::div_rem_unsigned(self, rhs).map(|(quo, _)| quo)
                }

                #[inline]
                fn shift_div_rem(self, rhs: Self) -> $crate::Result<(Self, Self)> {
                    $crate::div::div_rem_unsigned(self, rhs)
                }
            }

            impl $crate::ShiftMul for $int {
                #[inline]
                fn shift_mul(self, rhs: Self) -> $crate::Result<Self> {
                    $crate::mul::mul_unsigned(self, rhs)
                }
            }

            impl $crate::FromDecimal for $int {
                fn from_decimal_bytes(value: &[u8]) -> $crate::Result<Self> {
                    $crate::decimal::parse_unsigned(value)
                }
            }

            impl TryFrom<$int> for $crate::NonZero<$int> {
                type Error = $crate::Error;

                fn try_from(n: $int) -> $crate::Result<Self> {
                    Self::try_new(n)
                }
            }
        )+
    };
}

/// Impl [`SignedWord`][crate::SignedWord] and the arithmetic traits for primitive signed
/// integers, given the unsigned integer of the same width.
macro_rules! impl_signed {
    ($($int:ty => $uint:ty),+ $(,)?) => {
        $(
            impl $crate::traits::sealed::Sealed for $int {}

            impl $crate::SignedWord for $int {
                type Unsigned = $uint;

                #[inline]
                fn to_unsigned(self) -> $crate::Result<$uint> {
                    if self < 0 {
                        Err($crate::Error::NegativeOperand)
                    } else {
                        Ok(self as $uint)
                    }
                }

                #[inline]
                fn from_unsigned(n: $uint) -> $crate::Result<Self> {
                    Self::try_from(n).map_err(|_| $crate::Error::Overflow)
                }
            }

            impl $crate::ShiftDiv for $int {
                #[inline]
                fn shift_div(self, rhs: Self) -> $crate::Result<Self> {
                    $crate::div::div_rem_signed(self, rhs).map(|(quo, _)| quo)
                }

                #[inline]
                fn shift_div_rem(self, rhs: Self) -> $crate::Result<(Self, Self)> {
                    $crate::div::div_rem_signed(self, rhs)
                }
            }

            impl $crate::ShiftMul for $int {
                #[inline]
                fn shift_mul(self, rhs: Self) -> $crate::Result<Self> {
                    $crate::mul::mul_signed(self, rhs)
                }
            }

            impl $crate::FromDecimal for $int {
                fn from_decimal_bytes(value: &[u8]) -> $crate::Result<Self> {
                    $crate::decimal::parse_signed(value)
                }
            }
        )+
    };
}
