//! Error types.

use core::fmt;

/// Result type with the `shift-divide` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The divisor is zero.
    InvalidDivisor,

    /// An operand is negative.
    NegativeOperand,

    /// The result does not fit in the integer width of the operands.
    Overflow,

    /// Input string is empty.
    Empty,

    /// Input string contains a character which is not an ASCII decimal digit.
    InvalidDigit,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDivisor => write!(f, "division by zero"),
            Self::NegativeOperand => write!(f, "negative operand"),
            Self::Overflow => write!(f, "integer overflow"),
            Self::Empty => write!(f, "empty input"),
            Self::InvalidDigit => write!(f, "invalid digit in decimal input"),
        }
    }
}

impl core::error::Error for Error {}
