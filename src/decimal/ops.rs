use super::arithmetic::{trim_zeros_big, trim_zeros_u128};
use super::Decimal;
use crate::coef::Coef;
use core::hash::{Hash, Hasher};
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

// ============ Operator Traits ============
impl Add for Decimal {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Decimal::add(&self, &rhs)
    }
}

impl Sub for Decimal {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Decimal::sub(&self, &rhs)
    }
}

impl Mul for Decimal {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Decimal::mul(&self, &rhs)
    }
}

/// Div trait: enables `a / b`. Panics on division by zero; use
/// [`Decimal::div`] for the checked form.
impl Div for Decimal {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Decimal::div(&self, &rhs).expect("division by zero")
    }
}

/// Rem trait: enables `a % b`. Panics on division by zero; use
/// [`Decimal::rem`] for the checked form.
impl Rem for Decimal {
    type Output = Self;
    #[inline(always)]
    fn rem(self, rhs: Self) -> Self {
        Decimal::rem(&self, &rhs).expect("division by zero")
    }
}

impl Neg for Decimal {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        if self.is_zero() {
            self
        } else {
            Self {
                neg: !self.neg,
                ..self
            }
        }
    }
}

impl Neg for &Decimal {
    type Output = Decimal;
    #[inline]
    fn neg(self) -> Decimal {
        self.clone().neg()
    }
}

// ============ Assign Ops ============
impl AddAssign for Decimal {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = Decimal::add(self, &rhs);
    }
}

impl SubAssign for Decimal {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Decimal::sub(self, &rhs);
    }
}

impl MulAssign for Decimal {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = Decimal::mul(self, &rhs);
    }
}

impl DivAssign for Decimal {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = Decimal::div(self, &rhs).expect("division by zero");
    }
}

impl RemAssign for Decimal {
    #[inline(always)]
    fn rem_assign(&mut self, rhs: Self) {
        *self = Decimal::rem(self, &rhs).expect("division by zero");
    }
}

// ============ Reference Ops ============
impl<'b> Add<&'b Decimal> for &Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn add(self, rhs: &'b Decimal) -> Decimal {
        Decimal::add(self, rhs)
    }
}
impl<'a> Add<&'a Decimal> for Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn add(self, rhs: &'a Decimal) -> Decimal {
        Decimal::add(&self, rhs)
    }
}
impl Add<Decimal> for &Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn add(self, rhs: Decimal) -> Decimal {
        Decimal::add(self, &rhs)
    }
}

impl<'b> Sub<&'b Decimal> for &Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn sub(self, rhs: &'b Decimal) -> Decimal {
        Decimal::sub(self, rhs)
    }
}
impl<'a> Sub<&'a Decimal> for Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn sub(self, rhs: &'a Decimal) -> Decimal {
        Decimal::sub(&self, rhs)
    }
}
impl Sub<Decimal> for &Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn sub(self, rhs: Decimal) -> Decimal {
        Decimal::sub(self, &rhs)
    }
}

impl<'b> Mul<&'b Decimal> for &Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn mul(self, rhs: &'b Decimal) -> Decimal {
        Decimal::mul(self, rhs)
    }
}
impl<'a> Mul<&'a Decimal> for Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn mul(self, rhs: &'a Decimal) -> Decimal {
        Decimal::mul(&self, rhs)
    }
}
impl Mul<Decimal> for &Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn mul(self, rhs: Decimal) -> Decimal {
        Decimal::mul(self, &rhs)
    }
}

impl<'b> Div<&'b Decimal> for &Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn div(self, rhs: &'b Decimal) -> Decimal {
        Decimal::div(self, rhs).expect("division by zero")
    }
}
impl<'a> Div<&'a Decimal> for Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn div(self, rhs: &'a Decimal) -> Decimal {
        Decimal::div(&self, rhs).expect("division by zero")
    }
}
impl Div<Decimal> for &Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn div(self, rhs: Decimal) -> Decimal {
        Decimal::div(self, &rhs).expect("division by zero")
    }
}

impl<'b> Rem<&'b Decimal> for &Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn rem(self, rhs: &'b Decimal) -> Decimal {
        Decimal::rem(self, rhs).expect("division by zero")
    }
}
impl<'a> Rem<&'a Decimal> for Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn rem(self, rhs: &'a Decimal) -> Decimal {
        Decimal::rem(&self, rhs).expect("division by zero")
    }
}
impl Rem<Decimal> for &Decimal {
    type Output = Decimal;
    #[inline(always)]
    fn rem(self, rhs: Decimal) -> Decimal {
        Decimal::rem(self, &rhs).expect("division by zero")
    }
}

// ============ Default ============
/// Default trait: `Decimal::default()` returns ZERO
impl Default for Decimal {
    #[inline(always)]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============ Hash ============
/// Hash trait: consistent with `Eq`. Trailing fractional zeros are
/// normalized away so 1.5 and 1.500 hash alike, and zero ignores the
/// sign flag.
impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_zero() {
            0u128.hash(state);
            return;
        }
        match &self.coef {
            Coef::Small(c) => {
                let (c, scale) = trim_zeros_u128(*c, self.scale);
                c.hash(state);
                scale.hash(state);
            }
            Coef::Big(b) => {
                let (b, scale) = trim_zeros_big(b.clone(), self.scale);
                b.to_bytes_be().hash(state);
                scale.hash(state);
            }
        }
        self.neg.hash(state);
    }
}

// ============ Iterator Traits ============
/// Sum trait: enables `iter.sum::<Decimal>()`
impl Sum for Decimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| Decimal::add(&acc, &x))
    }
}
impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| Decimal::add(&acc, x))
    }
}

/// Product trait: enables `iter.product::<Decimal>()`
impl Product for Decimal {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| Decimal::mul(&acc, &x))
    }
}
impl<'a> Product<&'a Decimal> for Decimal {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| Decimal::mul(&acc, x))
    }
}
