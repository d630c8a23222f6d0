//! Support for base-10 parsing of operands.
//!
//! Digits are accumulated with shifts and additions only: `10 * x` is computed
//! as `(x << 3) + (x << 1)`.

use crate::{Error, FromDecimal, Result, SignedWord, Word};

/// Parse an operand from a decimal string.
///
/// Accepts an optional leading `+` or `-`, followed by ASCII digits which may be
/// separated by underscores. A minus sign is only accepted in front of zero.
///
/// ```
/// use shift_divide::{Error, parse_operand};
///
/// assert_eq!(parse_operand::<u32>("1_024"), Ok(1024));
/// assert_eq!(parse_operand::<u8>("256"), Err(Error::Overflow));
/// assert_eq!(parse_operand::<i64>("-1"), Err(Error::NegativeOperand));
/// ```
pub fn parse_operand<T: FromDecimal>(value: &str) -> Result<T> {
    T::from_decimal(value)
}

pub(crate) fn parse_unsigned<T: Word>(value: &[u8]) -> Result<T> {
    let (negative, digits) = match value {
        [] => return Err(Error::Empty),
        [b'+', rest @ ..] => (false, rest),
        [b'-', rest @ ..] => (true, rest),
        _ => (false, value),
    };

    match (negative, parse_digits::<T>(digits)) {
        (true, Ok(n)) if n == T::ZERO => Ok(n),
        // The sign is reported even when the magnitude is out of range.
        (true, Ok(_) | Err(Error::Overflow)) => Err(Error::NegativeOperand),
        (_, res) => res,
    }
}

pub(crate) fn parse_signed<T: SignedWord>(value: &[u8]) -> Result<T> {
    T::from_unsigned(parse_unsigned::<T::Unsigned>(value)?)
}

fn parse_digits<T: Word>(digits: &[u8]) -> Result<T> {
    let Some((&first, _)) = digits.split_first() else {
        return Err(Error::InvalidDigit);
    };
    if !first.is_ascii_digit() {
        return Err(Error::InvalidDigit);
    }

    let mut res = T::ZERO;
    for &byte in digits {
        match byte {
            b'0'..=b'9' => {
                let digit: T = (byte - b'0').into();
                res = times_ten(res)?
                    .checked_add(&digit)
                    .ok_or(Error::Overflow)?;
            }
            b'_' => continue,
            _ => return Err(Error::InvalidDigit),
        }
    }

    Ok(res)
}

#[inline]
fn times_ten<T: Word>(n: T) -> Result<T> {
    let twice = n.checked_double().ok_or(Error::Overflow)?;
    let eight = twice
        .checked_double()
        .and_then(Word::checked_double)
        .ok_or(Error::Overflow)?;
    eight.checked_add(&twice).ok_or(Error::Overflow)
}
