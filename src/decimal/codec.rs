use super::Decimal;
use crate::coef::Coef;
use crate::config::{default_precision, MAX_SCALE};
use crate::error::DecimalError;
use alloc::vec::Vec;
use num_bigint::BigUint;

const KIND_SMALL: u8 = 0x0;
const KIND_BIG: u8 = 0x1;
const SIGN_BIT: u8 = 0x80;
const HEADER_LEN: usize = 3;

impl Decimal {
    /// Encodes the value as `[header, scale, payload-len, payload...]`:
    /// the header's low nibble is the coefficient kind (0 = 128-bit,
    /// 1 = arbitrary precision) and its high bit the sign; the payload
    /// is the coefficient in big-endian with no leading zero bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DecimalError> {
        let (kind, payload): (u8, Vec<u8>) = match &self.coef {
            Coef::Small(c) => {
                let be = c.to_be_bytes();
                let start = be.iter().position(|&b| b != 0).unwrap_or(be.len());
                (KIND_SMALL, be[start..].to_vec())
            }
            Coef::Big(b) => (KIND_BIG, b.to_bytes_be()),
        };
        // single length byte caps the coefficient at 255 bytes
        if payload.len() > u8::MAX as usize {
            return Err(DecimalError::InvalidBinaryData);
        }

        let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
        out.push(if self.neg { SIGN_BIT | kind } else { kind });
        out.push(self.scale);
        out.push(payload.len() as u8);
        out.extend_from_slice(&payload);
        Ok(out)
    }

    /// Decodes a value produced by [`Decimal::to_bytes`], rejecting any
    /// structural defect with `InvalidBinaryData` and out-of-limit
    /// scales with `PrecisionOutOfRange`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecimalError> {
        if data.len() < HEADER_LEN {
            return Err(DecimalError::InvalidBinaryData);
        }
        let header = data[0];
        if header & 0x70 != 0 {
            return Err(DecimalError::InvalidBinaryData);
        }
        let neg = header & SIGN_BIT != 0;
        let scale = data[1];
        let payload = &data[HEADER_LEN..];
        if payload.len() != data[2] as usize {
            return Err(DecimalError::InvalidBinaryData);
        }
        // minimal-length encoding only
        if payload.first() == Some(&0) {
            return Err(DecimalError::InvalidBinaryData);
        }

        let coef = match header & 0x0F {
            KIND_SMALL => {
                if payload.len() > 16 {
                    return Err(DecimalError::InvalidBinaryData);
                }
                if scale > MAX_SCALE {
                    return Err(DecimalError::PrecisionOutOfRange);
                }
                let mut be = [0u8; 16];
                be[16 - payload.len()..].copy_from_slice(payload);
                Coef::from_u128(u128::from_be_bytes(be))
            }
            KIND_BIG => {
                if scale > default_precision() {
                    return Err(DecimalError::PrecisionOutOfRange);
                }
                Coef::from_biguint(BigUint::from_bytes_be(payload))
            }
            _ => return Err(DecimalError::InvalidBinaryData),
        };
        Ok(Self::from_parts(neg, coef, scale))
    }
}
