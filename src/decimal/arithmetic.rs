use super::Decimal;
use crate::coef::{big_from_u256, Coef};
use crate::config::{default_precision, MAX_SCALE};
use crate::error::DecimalError;
use crate::u256::U256;
use crate::util::pow10_128;
use core::cmp::Ordering;
use num_bigint::BigUint;

impl Decimal {
    /// Widens both coefficients to the common scale `max(a.scale, b.scale)`.
    /// The fast path cannot wrap: a Small coefficient keeps 19 digits of
    /// integer headroom, so widening stays within 10^38.
    #[inline]
    pub(crate) fn align(&self, other: &Self) -> (Coef, Coef, u8) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.coef.clone(), other.coef.clone(), self.scale),
            Ordering::Greater => (
                self.coef.clone(),
                other.coef.scaled(self.scale - other.scale),
                self.scale,
            ),
            Ordering::Less => (
                self.coef.scaled(other.scale - self.scale),
                other.coef.clone(),
                other.scale,
            ),
        }
    }

    /// Adds two decimals. The scale of the result is the larger of the
    /// two scales; the coefficient promotes to arbitrary precision
    /// instead of overflowing.
    pub fn add(&self, other: &Self) -> Self {
        let (a, b, scale) = self.align(other);
        if self.neg == other.neg {
            Self::from_parts(self.neg, a.add(&b), scale)
        } else {
            Self::sub_magnitudes(a, self.neg, b, other.neg, scale)
        }
    }

    /// Subtracts `other` from `self`.
    pub fn sub(&self, other: &Self) -> Self {
        let (a, b, scale) = self.align(other);
        let other_neg = !other.neg;
        if self.neg == other_neg {
            Self::from_parts(self.neg, a.add(&b), scale)
        } else {
            Self::sub_magnitudes(a, self.neg, b, other_neg, scale)
        }
    }

    /// Subtracts the smaller magnitude from the larger and keeps the
    /// larger side's sign; the exact-zero case is canonicalized.
    fn sub_magnitudes(a: Coef, a_neg: bool, b: Coef, b_neg: bool, scale: u8) -> Self {
        match a.cmp(&b) {
            Ordering::Equal => Self::from_parts(false, Coef::Small(0), scale),
            Ordering::Greater => Self::from_parts(a_neg, a.sub(&b), scale),
            Ordering::Less => Self::from_parts(b_neg, b.sub(&a), scale),
        }
    }

    /// Multiplies two decimals. The result scale is the sum of the
    /// scales; past 19 fractional digits the product is truncated back
    /// to the default precision (low digits dropped toward zero).
    pub fn mul(&self, other: &Self) -> Self {
        let neg = self.neg ^ other.neg;
        let total_scale = self.scale + other.scale;
        let precision = default_precision();

        if let (Coef::Small(a), Coef::Small(b)) = (&self.coef, &other.coef) {
            let wide = U256::widening_mul(*a, *b);
            if total_scale <= MAX_SCALE {
                let coef = if wide.fits_u128() {
                    Coef::from_u128(wide.lo)
                } else {
                    Coef::Big(big_from_u256(wide))
                };
                return Self::from_parts(neg, coef, total_scale);
            }
            let cut = total_scale - precision;
            if let Ok(q) = wide.quo(pow10_128(cut)) {
                return Self::from_parts(neg, Coef::from_u128(q), precision);
            }
            let q = big_from_u256(wide) / BigUint::from(pow10_128(cut));
            return Self::from_parts(neg, Coef::from_biguint(q), precision);
        }

        let prod = self.coef.mul(&other.coef);
        if total_scale > MAX_SCALE {
            let q = prod.to_biguint() / BigUint::from(pow10_128(total_scale - precision));
            Self::from_parts(neg, Coef::from_biguint(q), precision)
        } else {
            Self::from_parts(neg, prod, total_scale)
        }
    }

    /// Divides `self` by `other` at the default precision, trimming
    /// trailing zeros from the quotient.
    pub fn div(&self, other: &Self) -> Result<Self, DecimalError> {
        if other.is_zero() {
            return Err(DecimalError::DivideByZero);
        }
        if self.is_zero() {
            return Ok(Self::ZERO);
        }
        let neg = self.neg ^ other.neg;
        let precision = default_precision();
        // coef = a.coef * 10^factor / b.coef gives the quotient at the
        // target scale; a negative factor widens the divisor instead
        let factor = precision as i16 - self.scale as i16 + other.scale as i16;

        if let (Coef::Small(a), Coef::Small(b)) = (&self.coef, &other.coef) {
            if factor >= 0 {
                let dividend = U256::mul_pow10(*a, factor as u8);
                // a quotient needing more than 128 bits falls through to
                // the arbitrary-precision path
                if let Ok(q) = dividend.quo(*b) {
                    let (q, scale) = trim_zeros_u128(q, precision);
                    return Ok(Self::from_parts(neg, Coef::from_u128(q), scale));
                }
            } else if let Some(divisor) = b.checked_mul(pow10_128(factor.unsigned_abs() as u8)) {
                let (q, scale) = trim_zeros_u128(a / divisor, precision);
                return Ok(Self::from_parts(neg, Coef::from_u128(q), scale));
            }
        }

        let mut a = self.coef.to_biguint();
        let mut b = other.coef.to_biguint();
        if factor >= 0 {
            a *= BigUint::from(pow10_128(factor as u8));
        } else {
            b *= BigUint::from(pow10_128(factor.unsigned_abs() as u8));
        }
        let (q, scale) = trim_zeros_big(a / b, precision);
        Ok(Self::from_parts(neg, Coef::from_biguint(q), scale))
    }

    /// Returns the truncated-toward-zero integer quotient and the
    /// remainder `r = self - q * other`; `r` carries the sign of `self`.
    pub fn quo_rem(&self, other: &Self) -> Result<(Self, Self), DecimalError> {
        if other.is_zero() {
            return Err(DecimalError::DivideByZero);
        }
        let (a, b, scale) = self.align(other);
        let neg = self.neg ^ other.neg;

        if let (Coef::Small(a), Coef::Small(b)) = (&a, &b) {
            return Ok((
                Self::from_parts(neg, Coef::from_u128(a / b), 0),
                Self::from_parts(self.neg, Coef::from_u128(a % b), scale),
            ));
        }

        let a = a.to_biguint();
        let b = b.to_biguint();
        let q = &a / &b;
        let r = a % b;
        Ok((
            Self::from_parts(neg, Coef::from_biguint(q), 0),
            Self::from_parts(self.neg, Coef::from_biguint(r), scale),
        ))
    }

    /// Computes the remainder (`self % other`).
    pub fn rem(&self, other: &Self) -> Result<Self, DecimalError> {
        Ok(self.quo_rem(other)?.1)
    }
}

// ============ u64 Specializations ============
impl Decimal {
    /// Adds an unsigned integer.
    #[inline(always)]
    pub fn add64(&self, v: u64) -> Self {
        self.add(&Decimal::from(v))
    }

    /// Subtracts an unsigned integer.
    #[inline(always)]
    pub fn sub64(&self, v: u64) -> Self {
        self.sub(&Decimal::from(v))
    }

    /// Multiplies by an unsigned integer.
    #[inline(always)]
    pub fn mul64(&self, v: u64) -> Self {
        self.mul(&Decimal::from(v))
    }

    /// Divides by an unsigned integer.
    #[inline(always)]
    pub fn div64(&self, v: u64) -> Result<Self, DecimalError> {
        self.div(&Decimal::from(v))
    }
}

/// Strips factors of ten from a quotient, lowering the scale with each.
pub(crate) fn trim_zeros_u128(mut c: u128, mut scale: u8) -> (u128, u8) {
    while scale > 0 && c % 10 == 0 {
        c /= 10;
        scale -= 1;
    }
    (c, scale)
}

pub(crate) fn trim_zeros_big(mut b: BigUint, mut scale: u8) -> (BigUint, u8) {
    let ten = BigUint::from(10u32);
    while scale > 0 && (&b % &ten).bits() == 0 {
        b = &b / &ten;
        scale -= 1;
    }
    (b, scale)
}
