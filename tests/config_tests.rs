// Process-global configuration lives in this dedicated binary so the
// default-precision changes cannot race the other test suites.

use findec::{set_default_parse_mode, set_default_precision, Decimal, DecimalError, ParseMode};

#[test]
fn test_configuration_flow() {
    // startup defaults
    assert_eq!(findec::default_precision(), 19);
    assert_eq!(findec::default_parse_mode(), ParseMode::Error);

    let third = Decimal::must_parse("1").div(&Decimal::must_parse("3")).unwrap();
    assert_eq!(third.to_string(), "0.3333333333333333333");

    // lower the division/parse precision
    set_default_precision(10);
    let third = Decimal::must_parse("1").div(&Decimal::must_parse("3")).unwrap();
    assert_eq!(third.to_string(), "0.3333333333");

    // an 11-digit literal now overflows the precision
    assert_eq!(
        Decimal::parse("0.12345678912"),
        Err(DecimalError::PrecisionOutOfRange)
    );

    // truncating mode drops the excess digits toward zero
    set_default_parse_mode(ParseMode::Trunc);
    assert_eq!(Decimal::parse("0.12345678912").unwrap().to_string(), "0.1234567891");
    assert_eq!(Decimal::parse("-0.99999999999").unwrap().to_string(), "-0.9999999999");

    // restore startup defaults
    set_default_parse_mode(ParseMode::Error);
    set_default_precision(19);
    assert_eq!(findec::default_precision(), 19);
}

#[test]
#[should_panic(expected = "default precision must be in 1..=19")]
fn test_zero_precision_panics() {
    set_default_precision(0);
}

#[test]
#[should_panic(expected = "default precision must be in 1..=19")]
fn test_oversized_precision_panics() {
    set_default_precision(20);
}
