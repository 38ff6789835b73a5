mod arithmetic;
mod cmp;
mod codec;
mod convert;
mod fmt_impl;
mod ops;
mod parse;
mod power;
mod rounding;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(feature = "sqlx")]
mod sqlx_impl;

use crate::coef::Coef;
use crate::config::MAX_SCALE;
use crate::error::DecimalError;
use crate::util::pow10_128;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Exact fixed-point decimal: sign, unsigned coefficient and fractional
/// scale, interpreted as `(neg ? -1 : +1) * coef * 10^-scale`.
///
/// Coefficients live in a `u128` as long as they fit 19 integer +
/// 19 fractional digits and promote to arbitrary precision
/// transparently, so arithmetic never wraps and never loses integer
/// digits. Values are immutable; every operation returns a fresh value.
///
/// # Example
/// ```
/// use findec::Decimal;
/// let price: Decimal = "123.456".parse().unwrap();
/// let qty = Decimal::from(3u64);
/// assert_eq!((price.mul(&qty)).to_string(), "370.368");
/// ```
#[derive(Clone, Debug)]
pub struct Decimal {
    pub(crate) neg: bool,
    pub(crate) coef: Coef,
    pub(crate) scale: u8,
}

// ============ Constants ============
impl Decimal {
    /// The value `0`.
    pub const ZERO: Decimal = Decimal {
        neg: false,
        coef: Coef::Small(0),
        scale: 0,
    };
    /// The value `1`.
    pub const ONE: Decimal = Decimal {
        neg: false,
        coef: Coef::Small(1),
        scale: 0,
    };
    /// The value `2`.
    pub const TWO: Decimal = Decimal {
        neg: false,
        coef: Coef::Small(2),
        scale: 0,
    };
    /// The value `10`.
    pub const TEN: Decimal = Decimal {
        neg: false,
        coef: Coef::Small(10),
        scale: 0,
    };
}

// ============ Canonical Construction ============
impl Decimal {
    /// Builds a decimal upholding the representation invariants: zero is
    /// positive, and a fast-path coefficient keeps its integer part
    /// within 19 digits (`coef < 10^(scale+19)`), promoting otherwise.
    pub(crate) fn from_parts(neg: bool, coef: Coef, scale: u8) -> Self {
        debug_assert!(scale <= MAX_SCALE);
        if coef.is_zero() {
            return Decimal {
                neg: false,
                coef: Coef::Small(0),
                scale,
            };
        }
        let bound = pow10_128(scale + MAX_SCALE);
        let coef = match coef {
            Coef::Small(c) if c >= bound => Coef::Big(BigUint::from(c)),
            Coef::Big(b) => match b.to_u128() {
                Some(c) if c < bound => Coef::Small(c),
                _ => Coef::Big(b),
            },
            small => small,
        };
        Decimal { neg, coef, scale }
    }
}

// ============ Constructors ============
impl Decimal {
    /// Creates a decimal from a sign, the two 64-bit halves of the
    /// coefficient and a scale.
    ///
    /// Fails with `PrecisionOutOfRange` if `scale > 19`.
    pub fn from_hi_lo(neg: bool, hi: u64, lo: u64, scale: u8) -> Result<Self, DecimalError> {
        if scale > MAX_SCALE {
            return Err(DecimalError::PrecisionOutOfRange);
        }
        let coef = ((hi as u128) << 64) | lo as u128;
        Ok(Self::from_parts(neg, Coef::from_u128(coef), scale))
    }

    /// Creates a decimal `value * 10^-scale` from a signed integer.
    ///
    /// Fails with `PrecisionOutOfRange` if `scale > 19`.
    pub fn from_i64(value: i64, scale: u8) -> Result<Self, DecimalError> {
        if scale > MAX_SCALE {
            return Err(DecimalError::PrecisionOutOfRange);
        }
        Ok(Self::from_parts(
            value < 0,
            Coef::from_u128(value.unsigned_abs() as u128),
            scale,
        ))
    }

    /// Creates a decimal `value * 10^-scale` from an unsigned integer.
    ///
    /// Fails with `PrecisionOutOfRange` if `scale > 19`.
    pub fn from_u64(value: u64, scale: u8) -> Result<Self, DecimalError> {
        if scale > MAX_SCALE {
            return Err(DecimalError::PrecisionOutOfRange);
        }
        Ok(Self::from_parts(false, Coef::from_u128(value as u128), scale))
    }
}

// ============ Accessors / Basic Predicates ============
impl Decimal {
    /// Number of fractional digits (0-19).
    #[inline(always)]
    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Whether the sign flag is set.
    #[inline(always)]
    pub fn is_neg(&self) -> bool {
        self.neg
    }

    /// Whether the value is exactly zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.coef.is_zero()
    }

    /// Whether the value is greater than zero.
    #[inline(always)]
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.neg
    }

    /// Whether the value is less than zero.
    #[inline(always)]
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.neg
    }

    /// Returns the absolute value.
    #[inline(always)]
    pub fn abs(&self) -> Self {
        Self {
            neg: false,
            ..self.clone()
        }
    }

    /// Returns the sign: `1` for positive, `-1` for negative, `0` for zero.
    #[inline]
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::ZERO
        } else if self.neg {
            Self {
                neg: true,
                ..Self::ONE
            }
        } else {
            Self::ONE
        }
    }
}
