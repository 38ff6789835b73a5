use super::Decimal;
use crate::error::DecimalError;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueFormat, PgValueRef},
    Decode, Encode, Postgres, Type, TypeInfo,
};

// PostgreSQL NUMERIC signs
const NUMERIC_POS: u16 = 0x0000;
const NUMERIC_NEG: u16 = 0x4000;

impl Type<Postgres> for Decimal {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("NUMERIC")
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        *ty == Self::type_info() || ty.name() == "NUMERIC" || ty.name() == "DECIMAL"
    }
}

impl PgHasArrayType for Decimal {
    fn array_type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("_NUMERIC")
    }
}

impl Encode<'_, Postgres> for Decimal {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        buf.extend_from_slice(&numeric_wire_bytes(self));
        Ok(IsNull::No)
    }

    fn size_hint(&self) -> usize {
        8 + 2 * (self.coef.to_digits().len() / 4 + 2)
    }
}

impl Decode<'_, Postgres> for Decimal {
    fn decode(value: PgValueRef<'_>) -> Result<Self, BoxDynError> {
        match value.format() {
            PgValueFormat::Text => {
                let s = <&str as Decode<Postgres>>::decode(value)?;
                s.parse::<Decimal>().map_err(|e| Box::new(e) as BoxDynError)
            }
            PgValueFormat::Binary => decimal_from_numeric_wire(value.as_bytes()?),
        }
    }
}

/// Packs a decimal into the binary NUMERIC wire form:
/// `[ndigits, weight, sign, dscale, base-10000 digit groups...]`,
/// all big-endian u16/i16.
fn numeric_wire_bytes(dec: &Decimal) -> Vec<u8> {
    if dec.is_zero() {
        // ndigits 0, weight 0, positive sign, dscale 0
        return [0u8; 8].to_vec();
    }

    // Split the coefficient digits at the decimal point
    let ds = dec.coef.to_digits();
    let scale = dec.scale as usize;
    let (int_str, frac_owned): (&str, String) = if ds.len() > scale {
        let (i, r) = ds.split_at(ds.len() - scale);
        (i, String::from(r))
    } else {
        let mut padded = String::with_capacity(scale);
        for _ in 0..scale - ds.len() {
            padded.push('0');
        }
        padded.push_str(&ds);
        ("", padded)
    };

    // Align both sides to base-10000 groups
    let mut grouped = String::new();
    for _ in 0..(4 - int_str.len() % 4) % 4 {
        grouped.push('0');
    }
    grouped.push_str(int_str);
    let mut weight = (grouped.len() / 4) as i16 - 1;
    grouped.push_str(&frac_owned);
    for _ in 0..(4 - frac_owned.len() % 4) % 4 {
        grouped.push('0');
    }

    let mut digits: Vec<i16> = grouped
        .as_bytes()
        .chunks(4)
        .map(|g| g.iter().fold(0i16, |acc, &c| acc * 10 + (c - b'0') as i16))
        .collect();

    while digits.last() == Some(&0) {
        digits.pop();
    }
    while digits.first() == Some(&0) {
        digits.remove(0);
        weight -= 1;
    }

    let sign = if dec.neg { NUMERIC_NEG } else { NUMERIC_POS };

    let mut out = Vec::with_capacity(8 + 2 * digits.len());
    out.extend_from_slice(&(digits.len() as u16).to_be_bytes());
    out.extend_from_slice(&weight.to_be_bytes());
    out.extend_from_slice(&sign.to_be_bytes());
    out.extend_from_slice(&(dec.scale as u16).to_be_bytes());
    for d in &digits {
        out.extend_from_slice(&d.to_be_bytes());
    }
    out
}

/// Unpacks the binary NUMERIC wire form by rebuilding the decimal
/// string and running it through the parser.
fn decimal_from_numeric_wire(bytes: &[u8]) -> Result<Decimal, BoxDynError> {
    if bytes.len() < 8 {
        return Err("malformed NUMERIC value".into());
    }
    let (header, body) = bytes.split_at(8);
    let word = |i: usize| u16::from_be_bytes([header[2 * i], header[2 * i + 1]]);
    let ndigits = word(0) as usize;
    let weight = word(1) as i16;
    let sign = word(2);
    let dscale = word(3) as usize;

    if ndigits == 0 {
        return Ok(Decimal::ZERO);
    }
    if body.len() < ndigits * 2 {
        return Err("malformed NUMERIC value".into());
    }
    let groups: Vec<u16> = body
        .chunks_exact(2)
        .take(ndigits)
        .map(|g| u16::from_be_bytes([g[0], g[1]]))
        .collect();

    let mut text = String::new();
    if sign == NUMERIC_NEG {
        text.push('-');
    }

    // integer part: groups 0..=weight, zero-filled past the stored ones
    let int_groups = (weight + 1).max(0) as usize;
    if int_groups == 0 {
        text.push('0');
    } else {
        let stored = groups.iter().copied().chain(core::iter::repeat(0));
        for (i, g) in stored.take(int_groups).enumerate() {
            if i == 0 {
                text.push_str(&format!("{}", g));
            } else {
                text.push_str(&format!("{:04}", g));
            }
        }
    }

    // fractional part: zero groups for the gap below the point, then
    // the remaining stored groups, cut to the declared scale
    if dscale > 0 {
        let gap = (-(i32::from(weight) + 1)).max(0) as usize;
        let mut frac = "0000".repeat(gap);
        for g in groups.iter().skip(int_groups) {
            frac.push_str(&format!("{:04}", g));
        }
        frac.truncate(dscale);
        if !frac.is_empty() {
            text.push('.');
            text.push_str(&frac);
        }
    }

    text.parse::<Decimal>().map_err(|e| Box::new(e) as BoxDynError)
}

impl std::error::Error for DecimalError {}

// The wire codec is pure byte work, so it is tested here without a
// database; run with `cargo test --features sqlx`.
#[cfg(test)]
mod tests {
    use super::{decimal_from_numeric_wire, numeric_wire_bytes};
    use crate::Decimal;

    #[test]
    fn test_numeric_wire_layout() {
        // 1.23: one integer group (1), one fraction group (2300)
        let bytes = numeric_wire_bytes(&Decimal::must_parse("1.23"));
        assert_eq!(
            bytes,
            [
                0x00, 0x02, // ndigits
                0x00, 0x00, // weight
                0x00, 0x00, // sign
                0x00, 0x02, // dscale
                0x00, 0x01, // 1
                0x08, 0xFC, // 2300
            ]
        );
    }

    #[test]
    fn test_numeric_wire_zero() {
        let bytes = numeric_wire_bytes(&Decimal::ZERO);
        assert_eq!(bytes, [0u8; 8]);
        assert_eq!(decimal_from_numeric_wire(&bytes).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_numeric_wire_negative_sign() {
        let bytes = numeric_wire_bytes(&Decimal::must_parse("-7.5"));
        assert_eq!(&bytes[4..6], &0x4000u16.to_be_bytes());
    }

    #[test]
    fn test_numeric_wire_round_trip() {
        for s in [
            "1.23",
            "-12345.6789",
            "0.001",
            "0.00000001",
            "1000",
            "0.1",
            "-0.9999",
            "9999999999999999999.9999999999999999999",
            "12345678901234567890123456789.5",
        ] {
            let d = Decimal::must_parse(s);
            let wire = numeric_wire_bytes(&d);
            assert_eq!(decimal_from_numeric_wire(&wire).unwrap(), d, "{}", s);
        }
    }

    #[test]
    fn test_numeric_wire_short_input() {
        assert!(decimal_from_numeric_wire(&[0, 1, 0, 0, 0, 0]).is_err());
    }
}
