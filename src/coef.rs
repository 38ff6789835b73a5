// Decimal coefficient: u128 fast representation with transparent
// promotion to arbitrary precision on overflow.

use crate::u256::U256;
use crate::util::pow10_128;
use alloc::string::ToString;
use core::cmp::Ordering;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Largest coefficient kept in the fast representation: 10^38 - 1.
/// Leaves headroom for the worst-case widening inside the decimal
/// routines (19 integer digits + 19 fractional digits).
pub(crate) const MAX_SMALL: u128 = 99_999_999_999_999_999_999_999_999_999_999_999_999;

/// Non-negative decimal coefficient.
///
/// `Small` is preferred; `Big` is used when, and only when, a value does
/// not fit the fast representation. Constructors and arithmetic always
/// canonicalize, so a `Big` never holds a value within the `Small` cap.
#[derive(Clone, Debug)]
pub(crate) enum Coef {
    Small(u128),
    Big(BigUint),
}

impl Coef {
    #[inline(always)]
    pub(crate) fn from_u128(v: u128) -> Self {
        if v <= MAX_SMALL {
            Self::Small(v)
        } else {
            Self::Big(BigUint::from(v))
        }
    }

    #[inline]
    pub(crate) fn from_biguint(v: BigUint) -> Self {
        match v.to_u128() {
            Some(small) if small <= MAX_SMALL => Self::Small(small),
            _ => Self::Big(v),
        }
    }

    #[inline(always)]
    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Self::Small(v) => *v == 0,
            Self::Big(v) => v.bits() == 0,
        }
    }

    /// Materializes the arbitrary-precision view (allocates in the Small case).
    #[inline]
    pub(crate) fn to_biguint(&self) -> BigUint {
        match self {
            Self::Small(v) => BigUint::from(*v),
            Self::Big(v) => v.clone(),
        }
    }

    pub(crate) fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Small(a), Self::Small(b)) => a.cmp(b),
            (Self::Big(a), Self::Big(b)) => a.cmp(b),
            // canonical Big always exceeds the Small cap
            (Self::Small(_), Self::Big(_)) => Ordering::Less,
            (Self::Big(_), Self::Small(_)) => Ordering::Greater,
        }
    }

    /// Magnitude addition.
    pub(crate) fn add(&self, other: &Self) -> Self {
        if let (Self::Small(a), Self::Small(b)) = (self, other) {
            // both <= MAX_SMALL < 2^127, so the u128 sum cannot wrap
            return Self::from_u128(a + b);
        }
        Self::from_biguint(self.to_biguint() + other.to_biguint())
    }

    /// Magnitude subtraction. Requires `self >= other`.
    pub(crate) fn sub(&self, other: &Self) -> Self {
        debug_assert!(self.cmp(other) != Ordering::Less);
        if let (Self::Small(a), Self::Small(b)) = (self, other) {
            return Self::from_u128(a - b);
        }
        Self::from_biguint(self.to_biguint() - other.to_biguint())
    }

    /// Magnitude multiplication.
    pub(crate) fn mul(&self, other: &Self) -> Self {
        if let (Self::Small(a), Self::Small(b)) = (self, other) {
            let wide = U256::widening_mul(*a, *b);
            if wide.fits_u128() && wide.lo <= MAX_SMALL {
                return Self::Small(wide.lo);
            }
            return Self::Big(big_from_u256(wide));
        }
        Self::from_biguint(self.to_biguint() * other.to_biguint())
    }

    /// Multiplies by 10^exp (exp 0-38); used for scale alignment.
    pub(crate) fn scaled(&self, exp: u8) -> Self {
        if exp == 0 {
            return self.clone();
        }
        match self {
            Self::Small(v) => {
                let wide = U256::mul_pow10(*v, exp);
                if wide.fits_u128() && wide.lo <= MAX_SMALL {
                    Self::Small(wide.lo)
                } else {
                    Self::Big(big_from_u256(wide))
                }
            }
            Self::Big(v) => Self::Big(v * BigUint::from(pow10_128(exp))),
        }
    }

    /// Decimal digit string of the coefficient (no sign, no point).
    pub(crate) fn to_digits(&self) -> alloc::string::String {
        match self {
            Self::Small(v) => v.to_string(),
            Self::Big(v) => v.to_string(),
        }
    }
}

#[inline]
pub(crate) fn big_from_u256(v: U256) -> BigUint {
    (BigUint::from(v.hi) << 128u32) | BigUint::from(v.lo)
}
