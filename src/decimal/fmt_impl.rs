use super::Decimal;
use crate::coef::Coef;
use crate::util::pow10_128;
use alloc::string::{String, ToString};
use core::fmt;

/// Display trait: canonical text form. Trailing fractional zeros are
/// trimmed; zero renders as `"0"`. An explicit formatter precision
/// truncates or zero-pads the fractional part (never rounds).
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coef {
            Coef::Small(c) => fmt_small(self.neg, *c, self.scale, f),
            Coef::Big(_) => fmt_big(self.neg, &self.coef.to_digits(), self.scale, f),
        }
    }
}

impl Decimal {
    /// Returns the value with exactly `decimal_places` fractional digits,
    /// zero-padded as needed. Never rounds; assumes the value is
    /// representable at that scale (excess digits are truncated).
    pub fn string_fixed(&self, decimal_places: u8) -> String {
        alloc::format!("{:.*}", decimal_places as usize, self)
    }
}

fn fmt_small(neg: bool, c: u128, scale: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if neg && c != 0 { "-" } else { "" };
    let unit = pow10_128(scale);
    let (int, frac) = (c / unit, c % unit);

    let Some(prec) = f.precision() else {
        if frac == 0 {
            return write!(f, "{}{}", sign, int);
        }
        // trim trailing zeros from the fractional part
        let mut frac = frac;
        let mut width = scale as usize;
        while frac % 10 == 0 {
            frac /= 10;
            width -= 1;
        }
        return write!(f, "{}{}.{:0>w$}", sign, int, frac, w = width);
    };

    // explicit precision: truncate or zero-fill, never round
    write!(f, "{}{}", sign, int)?;
    if prec == 0 {
        return Ok(());
    }
    f.write_str(".")?;
    if prec <= scale as usize {
        let kept = frac / pow10_128(scale - prec as u8);
        return write!(f, "{:0>w$}", kept, w = prec);
    }
    if scale > 0 {
        write!(f, "{:0>w$}", frac, w = scale as usize)?;
    }
    write!(f, "{:0>w$}", "", w = prec - scale as usize)
}

/// Arbitrary-precision path: renders the coefficient digits and inserts
/// the point by slicing.
fn fmt_big(neg: bool, digits: &str, scale: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if neg { "-" } else { "" };
    let s = scale as usize;

    let (int_str, frac_owned): (&str, String) = if digits.len() > s {
        let (i, r) = digits.split_at(digits.len() - s);
        (i, r.to_string())
    } else {
        let mut padded = String::with_capacity(s);
        for _ in 0..s - digits.len() {
            padded.push('0');
        }
        padded.push_str(digits);
        ("0", padded)
    };
    let frac_str = frac_owned.as_str();

    if let Some(prec) = f.precision() {
        if prec == 0 {
            write!(f, "{}{}", sign, int_str)
        } else if prec <= s {
            write!(f, "{}{}.{}", sign, int_str, &frac_str[..prec])
        } else {
            write!(f, "{}{}.{}{:0>p$}", sign, int_str, frac_str, "", p = prec - s)
        }
    } else {
        let trimmed = frac_str.trim_end_matches('0');
        if trimmed.is_empty() {
            write!(f, "{}{}", sign, int_str)
        } else {
            write!(f, "{}{}.{}", sign, int_str, trimmed)
        }
    }
}
