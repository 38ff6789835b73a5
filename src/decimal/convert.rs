use super::Decimal;
use crate::coef::Coef;
use crate::error::DecimalError;
use crate::util::pow10_128;
use alloc::string::ToString;
use core::convert::TryFrom;
use core::str::FromStr;

impl Decimal {
    /// Returns the integer part as an `i64`, truncating the fraction.
    ///
    /// Fails with `IntPartOverflow` when the integer part does not fit.
    pub fn to_i64(&self) -> Result<i64, DecimalError> {
        let mag: u128 = match &self.coef {
            Coef::Small(c) => c / pow10_128(self.scale),
            // an arbitrary-precision coefficient means at least 20
            // integer digits
            Coef::Big(_) => return Err(DecimalError::IntPartOverflow),
        };
        if self.neg {
            if mag > i64::MAX as u128 + 1 {
                return Err(DecimalError::IntPartOverflow);
            }
            Ok((mag as i128).wrapping_neg() as i64)
        } else {
            if mag > i64::MAX as u128 {
                return Err(DecimalError::IntPartOverflow);
            }
            Ok(mag as i64)
        }
    }

    /// Converts to `f64` (may lose precision).
    pub fn to_f64(&self) -> f64 {
        match &self.coef {
            Coef::Small(c) => {
                let v = *c as f64 / pow10_128(self.scale) as f64;
                if self.neg {
                    -v
                } else {
                    v
                }
            }
            // out of u128 range: go through the decimal text
            Coef::Big(_) => self.to_string().parse().unwrap_or(f64::NAN),
        }
    }
}

/// FromStr trait: enables `"123.45".parse::<Decimal>()`
impl FromStr for Decimal {
    type Err = DecimalError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = DecimalError;
    #[inline(always)]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<f32> for Decimal {
    type Error = DecimalError;
    #[inline(always)]
    fn try_from(n: f32) -> Result<Self, Self::Error> {
        Decimal::try_from(n as f64)
    }
}

/// Round-trips through the shortest decimal rendering of the float.
impl TryFrom<f64> for Decimal {
    type Error = DecimalError;
    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if n.is_nan() || n.is_infinite() {
            return Err(DecimalError::InvalidFormat(n.to_string()));
        }
        Self::parse(&n.to_string())
    }
}

// ============ From Integer ============
/// From<signed>: negative values set the sign flag
macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            #[inline(always)]
            fn from(n: $t) -> Self {
                Self::from_parts(n < 0, Coef::from_u128(n.unsigned_abs() as u128), 0)
            }
        }
    )*};
}

/// From<unsigned>: always non-negative
macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            #[inline(always)]
            fn from(n: $t) -> Self {
                Self::from_parts(false, Coef::from_u128(n as u128), 0)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
