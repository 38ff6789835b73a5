use findec::{Decimal, DecimalError};

fn dec(s: &str) -> Decimal {
    Decimal::must_parse(s)
}

// ============ Encoding ============
#[test]
fn test_encode_layout() {
    // header (sign | kind), scale, payload length, big-endian payload
    assert_eq!(dec("1.23").to_bytes().unwrap(), vec![0x00, 0x02, 0x01, 0x7B]);
    assert_eq!(dec("255").to_bytes().unwrap(), vec![0x00, 0x00, 0x01, 0xFF]);
    assert_eq!(dec("256").to_bytes().unwrap(), vec![0x00, 0x00, 0x02, 0x01, 0x00]);
}

#[test]
fn test_encode_sign_bit() {
    let bytes = dec("-1.2345").to_bytes().unwrap();
    assert_ne!(bytes[0] & 0x80, 0);
    let bytes = dec("1.2345").to_bytes().unwrap();
    assert_eq!(bytes[0] & 0x80, 0);
}

#[test]
fn test_encode_zero() {
    assert_eq!(Decimal::ZERO.to_bytes().unwrap(), vec![0x00, 0x00, 0x00]);
}

#[test]
fn test_encode_big_kind() {
    let bytes = dec("1234567890123456789012345678901234567890").to_bytes().unwrap();
    assert_eq!(bytes[0] & 0x0F, 0x1);
    assert_eq!(bytes[2] as usize, bytes.len() - 3);
}

// ============ Round-trip ============
#[test]
fn test_binary_round_trip() {
    for s in [
        "0",
        "1",
        "-1",
        "1.23",
        "-1.2345",
        "0.0000000000000000001",
        "18446744073709551616",
        "9999999999999999999.9999999999999999999",
        "1234567890123456789012345678901234567890",
        "-1234567890123456789012345678901234567890.5",
    ] {
        let d = dec(s);
        let bytes = d.to_bytes().unwrap();
        assert_eq!(Decimal::from_bytes(&bytes).unwrap(), d, "{}", s);
    }
}

// ============ Decoding Errors ============
#[test]
fn test_decode_short_input() {
    assert_eq!(Decimal::from_bytes(&[]), Err(DecimalError::InvalidBinaryData));
    assert_eq!(Decimal::from_bytes(&[0x00, 0x02]), Err(DecimalError::InvalidBinaryData));
}

#[test]
fn test_decode_length_mismatch() {
    // declares 5 payload bytes, provides 1
    assert_eq!(
        Decimal::from_bytes(&[0x00, 0x02, 0x05, 0x7B]),
        Err(DecimalError::InvalidBinaryData)
    );
    // declares 0, provides 1
    assert_eq!(
        Decimal::from_bytes(&[0x00, 0x02, 0x00, 0x7B]),
        Err(DecimalError::InvalidBinaryData)
    );
}

#[test]
fn test_decode_unknown_kind() {
    assert_eq!(
        Decimal::from_bytes(&[0x02, 0x00, 0x01, 0x7B]),
        Err(DecimalError::InvalidBinaryData)
    );
    // reserved header bits must be clear
    assert_eq!(
        Decimal::from_bytes(&[0x40, 0x00, 0x00]),
        Err(DecimalError::InvalidBinaryData)
    );
}

#[test]
fn test_decode_non_minimal_payload() {
    assert_eq!(
        Decimal::from_bytes(&[0x00, 0x02, 0x02, 0x00, 0x7B]),
        Err(DecimalError::InvalidBinaryData)
    );
}

#[test]
fn test_decode_scale_out_of_range() {
    assert_eq!(
        Decimal::from_bytes(&[0x00, 20, 0x01, 0x7B]),
        Err(DecimalError::PrecisionOutOfRange)
    );
    assert_eq!(
        Decimal::from_bytes(&[0x01, 20, 0x01, 0x7B]),
        Err(DecimalError::PrecisionOutOfRange)
    );
}

#[test]
fn test_decode_oversized_small_payload() {
    // 17 bytes cannot be a 128-bit coefficient
    let mut data = vec![0x00, 0x00, 17];
    data.push(0x01);
    data.extend_from_slice(&[0xFF; 16]);
    assert_eq!(Decimal::from_bytes(&data), Err(DecimalError::InvalidBinaryData));
}
