//! Pure Rust implementation of binary long division by repeated doubling.
//!
//! # About
//! Quotients of non-negative integers are computed with shifts, comparisons and
//! subtractions only, never with a native division instruction. Each reduction
//! step doubles the divisor until it would exceed the remaining numerator,
//! which finds a whole power-of-two chunk of the quotient at once, so the
//! number of steps is bounded by the bit length of the quotient.
//!
//! # Goals
//! - No heap allocations i.e. `no_std`-friendly.
//! - Generic over every primitive unsigned width, from `u8` to `u128`.
//! - No silent wrap-around: a zero divisor, a negative operand and a result
//!   which doesn't fit the operand width are all reported as an [`Error`].
//!
//! # Usage
//! ```
//! use shift_divide::{Error, div_rem, divide, multiply};
//!
//! assert_eq!(divide(10u32, 3), Ok(3));
//! assert_eq!(div_rem(1024u64, 3), Ok((341, 1)));
//! assert_eq!(divide(7u8, 0), Err(Error::InvalidDivisor));
//! assert_eq!(divide(-1i64, 5), Err(Error::NegativeOperand));
//! assert_eq!(multiply(16u8, 16), Err(Error::Overflow));
//! ```
//!
//! Divisors validated up front can be wrapped in [`NonZero`], which makes
//! division infallible:
//!
//! ```
//! use shift_divide::{NonZero, divide_nonzero};
//!
//! let divisor = NonZero::try_new(10u16)?;
//! assert_eq!(divide_nonzero(65535, divisor), 6553);
//! # Ok::<(), shift_divide::Error>(())
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[macro_use]
mod macros;

mod decimal;
mod div;
mod error;
mod mul;
mod non_zero;
mod primitives;
mod traits;

pub use crate::{
    decimal::parse_operand,
    div::{Step, Steps, div_rem, div_rem_nonzero, divide, divide_nonzero, rem},
    error::{Error, Result},
    mul::multiply,
    non_zero::NonZero,
    traits::*,
};
