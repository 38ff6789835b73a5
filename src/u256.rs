// 256-bit helper arithmetic: widening multiplies, the checked quotient
// used by division, and integer square roots.

use crate::error::Overflow;
use crate::util::pow10_128;
use core::cmp::Ordering;

/// Unsigned 256-bit value `hi * 2^128 + lo`.
///
/// Field order gives the derived `Ord` the numeric ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct U256 {
    pub(crate) hi: u128,
    pub(crate) lo: u128,
}

impl U256 {
    /// u128 * u128 -> U256: four word products, with each cross
    /// product folded into the halves one at a time.
    #[inline]
    pub(crate) fn widening_mul(a: u128, b: u128) -> Self {
        let (a1, a0) = ((a >> 64) as u64, a as u64);
        let (b1, b0) = ((b >> 64) as u64, b as u64);

        let mut lo = a0 as u128 * b0 as u128;
        let mut hi = a1 as u128 * b1 as u128;

        for cross in [a1 as u128 * b0 as u128, a0 as u128 * b1 as u128] {
            let (sum, carry) = lo.overflowing_add(cross << 64);
            lo = sum;
            hi += (cross >> 64) + carry as u128;
        }

        Self { hi, lo }
    }

    /// Widening multiply by a power of ten (exp 0-38).
    #[inline(always)]
    pub(crate) fn mul_pow10(a: u128, exp: u8) -> Self {
        Self::widening_mul(a, pow10_128(exp))
    }

    #[inline(always)]
    pub(crate) fn fits_u128(self) -> bool {
        self.hi == 0
    }

    #[inline(always)]
    pub(crate) fn cmp_u128(self, v: u128) -> Ordering {
        if self.hi != 0 {
            Ordering::Greater
        } else {
            self.lo.cmp(&v)
        }
    }

    /// U256 / u128 -> u128 by schoolbook long division over 64-bit
    /// words: two word steps, each estimating a quotient word from the
    /// numerator's head and walking the estimate down until the full
    /// product fits under the numerator.
    ///
    /// Fails when the divisor is zero or the quotient needs more than
    /// 128 bits; callers resolve the failure by promoting to arbitrary
    /// precision.
    #[inline]
    pub(crate) fn quo(self, divisor: u128) -> Result<u128, Overflow> {
        if divisor == 0 {
            return Err(Overflow);
        }

        if self.hi == 0 {
            return Ok(self.lo / divisor);
        }

        // quotient would need >= 2^128
        if self.hi >= divisor {
            return Err(Overflow);
        }

        if divisor <= u64::MAX as u128 {
            return Ok(self.quo_u64(divisor as u64));
        }

        // normalize so the divisor's top word has its high bit set,
        // which bounds each estimate walk at two corrections
        let shift = divisor.leading_zeros();
        let d = divisor << shift;
        let (d1, d0) = ((d >> 64) as u64, d as u64);
        let (n_hi, n_lo) = if shift == 0 {
            (self.hi, self.lo)
        } else {
            (
                (self.hi << shift) | (self.lo >> (128 - shift)),
                self.lo << shift,
            )
        };

        let (q1, r1, r0) = quo_word((n_hi >> 64) as u64, n_hi as u64, (n_lo >> 64) as u64, d1, d0);
        let (q0, _, _) = quo_word(r1, r0, n_lo as u64, d1, d0);
        Ok(((q1 as u128) << 64) | q0 as u128)
    }

    /// U256 / u64 -> u128 quotient, one word of short division at a
    /// time. Requires `self.hi < divisor` (checked by `quo`).
    #[inline]
    fn quo_u64(self, divisor: u64) -> u128 {
        let d = divisor as u128;
        let words = [
            (self.hi >> 64) as u64,
            self.hi as u64,
            (self.lo >> 64) as u64,
            self.lo as u64,
        ];

        let mut quotient = [0u64; 4];
        let mut rem: u128 = 0;
        for (word, out) in words.into_iter().zip(quotient.iter_mut()) {
            let chunk = (rem << 64) | word as u128;
            *out = (chunk / d) as u64;
            rem = chunk % d;
        }

        debug_assert!(quotient[0] == 0 && quotient[1] == 0);
        ((quotient[2] as u128) << 64) | quotient[3] as u128
    }
}

/// One long-division step: (n2 n1 n0) / (d1 d0) -> quotient word plus
/// the two-word remainder. The head estimate `n / d1` can only
/// overshoot, so the loop subtracts the divisor from the trial product
/// until it no longer exceeds the numerator.
fn quo_word(n2: u64, n1: u64, n0: u64, d1: u64, d0: u64) -> (u64, u64, u64) {
    let head = ((n2 as u128) << 64) | n1 as u128;
    let mut q = if n2 >= d1 {
        u64::MAX
    } else {
        (head / d1 as u128) as u64
    };

    let mut product = word_mul(d1, d0, q);
    while product > (n2, n1, n0) {
        q -= 1;
        product = sub3(product, (0, d1, d0));
    }

    let (_, r1, r0) = sub3((n2, n1, n0), product);
    (q, r1, r0)
}

/// (d1 d0) * q as three words
#[inline]
fn word_mul(d1: u64, d0: u64, q: u64) -> (u64, u64, u64) {
    let low = d0 as u128 * q as u128;
    let high = d1 as u128 * q as u128 + (low >> 64);
    ((high >> 64) as u64, high as u64, low as u64)
}

/// Three-word subtraction. Requires `a >= b`.
#[inline]
fn sub3(a: (u64, u64, u64), b: (u64, u64, u64)) -> (u64, u64, u64) {
    let (r0, borrow_low) = a.2.overflowing_sub(b.2);
    let (mid, borrow_mid) = a.1.overflowing_sub(b.1);
    let (r1, borrow_carry) = mid.overflowing_sub(borrow_low as u64);
    let r2 = a.0 - b.0 - (borrow_mid || borrow_carry) as u64;
    (r2, r1, r0)
}

/// floor(sqrt(n)) by the binary digit-by-digit method: tries one bit
/// of the root per step, from the top pair of bits down.
pub(crate) fn floor_sqrt_u128(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    let mut remainder = n;
    let mut root: u128 = 0;
    // largest power of four not above n
    let mut probe = 1u128 << ((127 - n.leading_zeros()) & !1);

    while probe != 0 {
        let candidate = root + probe;
        root >>= 1;
        if remainder >= candidate {
            remainder -= candidate;
            root += probe;
        }
        probe >>= 2;
    }
    root
}

/// floor(sqrt(n)) for a 256-bit radicand; the result always fits u128.
///
/// Seeds Newton's method from the root of the top half. The seed
/// overshoots the true root, and the integer iteration stays at or
/// above it, so the first non-decreasing step lands exactly.
pub(crate) fn floor_sqrt_u256(n: U256) -> u128 {
    if n.hi == 0 {
        return floor_sqrt_u128(n.lo);
    }

    // (s + 1) * 2^64 > sqrt(hi * 2^128 + lo) for s = floor(sqrt(hi))
    let s = floor_sqrt_u128(n.hi);
    let mut x = if s >= u64::MAX as u128 {
        u128::MAX
    } else {
        (s + 1) << 64
    };

    loop {
        // every iterate exceeds n.hi, so the quotient fits u128
        let q = match n.quo(x) {
            Ok(q) => q,
            Err(Overflow) => u128::MAX,
        };
        if q >= x {
            return x;
        }
        // floor((x + q) / 2), kept overflow-free since q < x
        x -= (x - q + 1) / 2;
    }
}
