use super::arithmetic::{trim_zeros_big, trim_zeros_u128};
use super::Decimal;
use crate::coef::Coef;
use crate::config::default_precision;
use crate::error::DecimalError;
use crate::u256::{floor_sqrt_u128, floor_sqrt_u256, U256};
use crate::util::pow10_128;
use alloc::string::ToString;
use num_bigint::BigUint;

/// ln(10) scaled by 10^29.
const LN10_SCALED: u128 = 230_258_509_299_404_568_401_799_145_468;
/// Internal fractional digits for the logarithm (10 guard digits past
/// the maximum scale).
const GUARD_SCALE: u8 = 29;

impl Decimal {
    /// Raises to an integer power by binary exponentiation. `n == 0`
    /// yields `1`; a negative exponent takes the reciprocal of the
    /// exact power, failing with `ZeroPowNegative` on a zero base.
    pub fn pow_int(&self, n: i64) -> Result<Self, DecimalError> {
        if n == 0 {
            return Ok(Self::ONE);
        }
        if n < 0 {
            if self.is_zero() {
                return Err(DecimalError::ZeroPowNegative);
            }
            let p = self.pow_magnitude(n.unsigned_abs());
            return Self::ONE.div(&p);
        }
        Ok(self.pow_magnitude(n as u64))
    }

    /// [`Decimal::pow_int`] with a 32-bit exponent.
    #[inline(always)]
    pub fn pow_int32(&self, n: i32) -> Result<Self, DecimalError> {
        self.pow_int(n as i64)
    }

    /// Raises to the truncated-toward-zero integer part of `exponent`.
    ///
    /// Fails with `ExponentTooLarge` when that integer part exceeds
    /// `i32::MAX` in magnitude.
    pub fn pow_to_int_part(&self, exponent: &Self) -> Result<Self, DecimalError> {
        let mag: u128 = match &exponent.coef {
            Coef::Small(c) => c / pow10_128(exponent.scale),
            // an arbitrary-precision coefficient means at least 20
            // integer digits
            Coef::Big(_) => return Err(DecimalError::ExponentTooLarge),
        };
        if mag > i32::MAX as u128 {
            return Err(DecimalError::ExponentTooLarge);
        }
        let n = if exponent.neg {
            -(mag as i64)
        } else {
            mag as i64
        };
        self.pow_int(n)
    }

    /// Binary exponentiation, `e >= 1`. Scale growth past 19 digits is
    /// absorbed by the multiply truncation rule.
    fn pow_magnitude(&self, mut e: u64) -> Self {
        let mut base = self.clone();
        let mut result = Self::ONE;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            e >>= 1;
        }
        result
    }

    /// Square root at the default precision, truncated.
    ///
    /// Fails with `SqrtNegative` for negative values.
    pub fn sqrt(&self) -> Result<Self, DecimalError> {
        if self.neg {
            return Err(DecimalError::SqrtNegative);
        }
        if self.is_zero() {
            return Ok(Self::ZERO);
        }
        let precision = default_precision();
        // isqrt(coef * 10^(2p - scale)) is the result coefficient at
        // scale p
        let shift = 2 * precision as i16 - self.scale as i16;

        match &self.coef {
            Coef::Small(c) => {
                let r = if shift >= 0 {
                    floor_sqrt_u256(U256::mul_pow10(*c, shift as u8))
                } else {
                    floor_sqrt_u128(c / pow10_128(shift.unsigned_abs() as u8))
                };
                let (r, scale) = trim_zeros_u128(r, precision);
                Ok(Self::from_parts(false, Coef::from_u128(r), scale))
            }
            Coef::Big(b) => {
                let n = if shift >= 0 {
                    b * BigUint::from(pow10_128(shift as u8))
                } else {
                    b / BigUint::from(pow10_128(shift.unsigned_abs() as u8))
                };
                let (r, scale) = trim_zeros_big(n.sqrt(), precision);
                Ok(Self::from_parts(false, Coef::from_biguint(r), scale))
            }
        }
    }

    /// Natural logarithm, within one unit in the last place at the
    /// default precision.
    ///
    /// Fails with `LnNonPositive` for zero or negative values.
    pub fn ln(&self) -> Result<Self, DecimalError> {
        if self.neg || self.is_zero() {
            return Err(DecimalError::LnNonPositive);
        }
        let precision = default_precision();
        let one = BigUint::from(pow10_128(GUARD_SCALE));

        // x at the guard scale
        let xi = self.coef.to_biguint() * BigUint::from(pow10_128(GUARD_SCALE - self.scale));
        if xi == one {
            return Ok(Self::ZERO);
        }

        // reduce x = y * 10^m with y in [sqrt(10)/10, sqrt(10)), so the
        // series argument stays below 0.52
        let mut m = xi.to_string().len() as i64 - 1 - GUARD_SCALE as i64;
        let mut y = if m >= 0 {
            &xi / big_pow10(m as u32)
        } else {
            &xi * big_pow10(m.unsigned_abs() as u32)
        };
        if &y * &y >= BigUint::from(10u32) * &one * &one {
            y = &y / BigUint::from(10u32);
            m += 1;
        }

        // ln y = 2 atanh(z), z = (y - 1) / (y + 1)
        let (y_diff, y_lt_one) = if y >= one {
            (&y - &one, false)
        } else {
            (&one - &y, true)
        };
        let z = y_diff * &one / (&y + &one);
        let z_sq = &z * &z / &one;
        let mut sum = z.clone();
        let mut term = z;
        let mut k = 3u32;
        loop {
            term = term * &z_sq / &one;
            let contribution = &term / BigUint::from(k);
            if contribution.bits() == 0 {
                break;
            }
            sum += contribution;
            k += 2;
        }
        let series = sum * 2u32;

        // combine m * ln(10) with the series term, sign-magnitude
        let reduction = BigUint::from(LN10_SCALED) * BigUint::from(m.unsigned_abs());
        let (total, neg) = signed_sum(reduction, m < 0, series, y_lt_one);

        let coef = total / big_pow10((GUARD_SCALE - precision) as u32);
        let (coef, scale) = trim_zeros_big(coef, precision);
        Ok(Self::from_parts(neg, Coef::from_biguint(coef), scale))
    }
}

fn big_pow10(exp: u32) -> BigUint {
    let mut v = BigUint::from(1u32);
    let mut remaining = exp;
    while remaining >= 38 {
        v *= BigUint::from(pow10_128(38));
        remaining -= 38;
    }
    v * BigUint::from(pow10_128(remaining as u8))
}

/// Adds two sign-magnitude values.
fn signed_sum(a: BigUint, a_neg: bool, b: BigUint, b_neg: bool) -> (BigUint, bool) {
    if a_neg == b_neg {
        (a + b, a_neg)
    } else if a >= b {
        (&a - &b, a_neg)
    } else {
        (&b - &a, b_neg)
    }
}
