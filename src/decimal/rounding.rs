use super::Decimal;
use crate::coef::Coef;
use crate::round_mode::RoundMode;
use crate::util::pow10_128;
use core::cmp::Ordering;
use num_bigint::BigUint;

impl Decimal {
    /// Rounds to `decimal_places` fractional digits using the given
    /// mode. Digits at or above the target position are untouched; if
    /// the value already fits the target scale it is returned
    /// unchanged. Never fails; the coefficient may promote when the
    /// integer part grows (e.g. 9.5 rounded to 0 places).
    pub fn round(&self, decimal_places: u8, mode: RoundMode) -> Self {
        if self.scale <= decimal_places {
            return self.clone();
        }
        let cut = self.scale - decimal_places;
        let divisor = pow10_128(cut);
        let half = divisor / 2;

        match &self.coef {
            Coef::Small(c) => {
                let mut q = c / divisor;
                let r = c % divisor;
                if r != 0 && should_round_up(self.neg, mode, r.cmp(&half), q & 1 == 1) {
                    q += 1;
                }
                Self::from_parts(self.neg, Coef::from_u128(q), decimal_places)
            }
            Coef::Big(b) => {
                let divisor = BigUint::from(divisor);
                let mut q = b / &divisor;
                let r = b % &divisor;
                if r.bits() != 0
                    && should_round_up(self.neg, mode, r.cmp(&BigUint::from(half)), q.bit(0))
                {
                    q += 1u32;
                }
                Self::from_parts(self.neg, Coef::from_biguint(q), decimal_places)
            }
        }
    }

    /// Drops fractional digits past `decimal_places`, toward zero.
    #[inline(always)]
    pub fn trunc(&self, decimal_places: u8) -> Self {
        self.round(decimal_places, RoundMode::Truncate)
    }

    /// Rounds down to the nearest integer (toward negative infinity).
    #[inline(always)]
    pub fn floor(&self) -> Self {
        self.round(0, RoundMode::Floor)
    }

    /// Rounds up to the nearest integer (toward positive infinity).
    #[inline(always)]
    pub fn ceil(&self) -> Self {
        self.round(0, RoundMode::Ceil)
    }

    /// Returns the fractional part, keeping the sign.
    pub fn fract(&self) -> Self {
        let limit = pow10_128(self.scale);
        match &self.coef {
            Coef::Small(c) => Self::from_parts(self.neg, Coef::Small(c % limit), self.scale),
            Coef::Big(b) => {
                Self::from_parts(self.neg, Coef::from_biguint(b % BigUint::from(limit)), self.scale)
            }
        }
    }
}

/// Decision table over the dropped tail. `half_cmp` orders the dropped
/// remainder against half the cut modulus; callers guarantee the
/// remainder is non-zero.
fn should_round_up(neg: bool, mode: RoundMode, half_cmp: Ordering, trunc_is_odd: bool) -> bool {
    match mode {
        RoundMode::Floor => neg,
        RoundMode::Ceil => !neg,
        RoundMode::Truncate => false,
        RoundMode::HalfUp => half_cmp != Ordering::Less,
        RoundMode::HalfDown => half_cmp == Ordering::Greater,
        RoundMode::HalfEven => {
            half_cmp == Ordering::Greater || (half_cmp == Ordering::Equal && trunc_is_odd)
        }
        RoundMode::AwayFromZero => true,
    }
}
