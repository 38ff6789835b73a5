//! Exact fixed-point decimal arithmetic for financial workloads.
//!
//! A [`Decimal`] is a sign, an unsigned coefficient and a fractional
//! scale (0-19), interpreted as `±coef * 10^-scale`. Arithmetic is
//! never performed in binary floating-point: coefficients live in a
//! `u128` while they fit 19 integer + 19 fractional digits and promote
//! to arbitrary precision transparently, so results are exact and
//! operations never wrap.
//!
//! Division, parsing and the power family cap their result scale at a
//! process-wide default precision (see [`set_default_precision`]);
//! every other fallible operation reports a [`DecimalError`].
//!
//! ```
//! use findec::{Decimal, RoundMode};
//!
//! let fee: Decimal = "0.015".parse().unwrap();
//! let amount = Decimal::from(1_250u64);
//! let charged = amount.mul(&fee).round(2, RoundMode::HalfEven);
//! assert_eq!(charged.to_string(), "18.75");
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod coef;
mod config;
mod decimal;
mod error;
mod round_mode;
mod u256;
mod util;

pub use config::{
    default_parse_mode, default_precision, set_default_parse_mode, set_default_precision,
    ParseMode, MAX_SCALE,
};
pub use decimal::Decimal;
pub use error::DecimalError;
pub use round_mode::RoundMode;
