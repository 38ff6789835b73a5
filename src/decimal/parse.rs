use super::Decimal;
use crate::coef::Coef;
use crate::config::{default_parse_mode, default_precision, ParseMode};
use crate::error::DecimalError;
use crate::util::pow10_128;
use alloc::string::String;
use alloc::vec::Vec;
use num_bigint::BigUint;

/// Defensive bound on parse input length.
pub(crate) const MAX_STR_LEN: usize = 200;
/// Inputs at most this long take the single-pass u128 accumulator.
const FAST_PATH_LEN: usize = 40;

enum FastError {
    /// Accumulator spilled 128 bits; retry on the slow path.
    Overflow,
    /// Final failure, reported unchanged.
    Fail(DecimalError),
}

impl Decimal {
    /// Parses a decimal literal: `[+-]? (digits (. digits)? | . digits)`,
    /// at most 200 bytes, no exponent.
    ///
    /// Fractional digits beyond the default precision are rejected or
    /// truncated according to the configured [`ParseMode`].
    pub fn parse(s: &str) -> Result<Self, DecimalError> {
        Self::parse_bytes(s.as_bytes())
    }

    /// Byte-level variant of [`Decimal::parse`].
    pub fn parse_bytes(b: &[u8]) -> Result<Self, DecimalError> {
        if b.is_empty() {
            return Err(DecimalError::EmptyString);
        }
        if b.len() > MAX_STR_LEN {
            return Err(DecimalError::MaxStrLen);
        }
        if b.len() <= FAST_PATH_LEN {
            match Self::parse_fast(b) {
                Ok(d) => return Ok(d),
                Err(FastError::Overflow) => {}
                Err(FastError::Fail(e)) => return Err(e),
            }
        }
        Self::parse_slow(b)
    }

    /// Parses a literal the caller asserts is valid.
    ///
    /// # Panics
    /// Panics if the input does not parse.
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(d) => d,
            Err(e) => panic!("must_parse: {}", e),
        }
    }

    /// Single pass over at most 40 bytes, accumulating the coefficient
    /// in a u128. Overflow falls back to the slow path; syntax errors
    /// are final.
    fn parse_fast(b: &[u8]) -> Result<Self, FastError> {
        let len = b.len();
        let mut i = 0;

        let neg = match b[0] {
            b'-' => {
                i = 1;
                true
            }
            b'+' => {
                i = 1;
                false
            }
            _ => false,
        };

        if i >= len {
            return Err(FastError::Fail(invalid(b)));
        }

        let mut coef: u128 = 0;
        let mut frac_digits: Option<u8> = None;
        let mut seen_digit = false;

        while i < len {
            let c = b[i];
            if c == b'.' {
                // one point, and it must be followed by a digit
                if frac_digits.is_some() || i + 1 >= len {
                    return Err(FastError::Fail(invalid(b)));
                }
                frac_digits = Some(0);
            } else {
                let d = c.wrapping_sub(b'0');
                if d > 9 {
                    return Err(FastError::Fail(invalid(b)));
                }
                coef = coef
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(d as u128))
                    .ok_or(FastError::Overflow)?;
                seen_digit = true;
                if let Some(fd) = frac_digits {
                    frac_digits = Some(fd + 1);
                }
            }
            i += 1;
        }

        if !seen_digit {
            return Err(FastError::Fail(invalid(b)));
        }

        let mut scale = frac_digits.unwrap_or(0);
        let precision = default_precision();
        if scale > precision {
            match default_parse_mode() {
                ParseMode::Error => {
                    return Err(FastError::Fail(DecimalError::PrecisionOutOfRange))
                }
                ParseMode::Trunc => {
                    coef /= pow10_128(scale - precision);
                    scale = precision;
                }
            }
        }

        if coef == 0 {
            return Ok(Self::ZERO);
        }
        Ok(Self::from_parts(neg, Coef::from_u128(coef), scale))
    }

    /// Validates the full grammar and feeds the concatenated digit runs
    /// to the arbitrary-precision parser.
    fn parse_slow(b: &[u8]) -> Result<Self, DecimalError> {
        let mut i = 0;

        let neg = match b[0] {
            b'-' => {
                i = 1;
                true
            }
            b'+' => {
                i = 1;
                false
            }
            _ => false,
        };

        let rest = &b[i..];
        let (int_part, frac_part) = match rest.iter().position(|&c| c == b'.') {
            Some(dot) => (&rest[..dot], &rest[dot + 1..]),
            None => (rest, &rest[rest.len()..]),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid(b));
        }
        // a point with nothing after it is not a literal
        if rest.len() != int_part.len() && frac_part.is_empty() {
            return Err(invalid(b));
        }
        if !int_part.iter().chain(frac_part).all(u8::is_ascii_digit) {
            return Err(invalid(b));
        }

        let precision = default_precision() as usize;
        let frac_kept = if frac_part.len() > precision {
            match default_parse_mode() {
                ParseMode::Error => return Err(DecimalError::PrecisionOutOfRange),
                ParseMode::Trunc => &frac_part[..precision],
            }
        } else {
            frac_part
        };

        let mut digits = Vec::with_capacity(int_part.len() + frac_kept.len());
        digits.extend_from_slice(int_part);
        digits.extend_from_slice(frac_kept);
        let coef = BigUint::parse_bytes(&digits, 10).ok_or_else(|| invalid(b))?;

        if coef.bits() == 0 {
            return Ok(Self::ZERO);
        }
        Ok(Self::from_parts(
            neg,
            Coef::from_biguint(coef),
            frac_kept.len() as u8,
        ))
    }
}

#[inline]
fn invalid(b: &[u8]) -> DecimalError {
    DecimalError::InvalidFormat(String::from_utf8_lossy(b).into_owned())
}
