use alloc::string::String;
use core::fmt;

/// Error returned by fallible decimal operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// Parse input is empty.
    EmptyString,
    /// Parse input is not a valid decimal literal (carries the input).
    InvalidFormat(String),
    /// Parse input is longer than the 200-byte limit.
    MaxStrLen,
    /// Scale exceeds the configured default precision (or a constructor
    /// was given a scale above 19).
    PrecisionOutOfRange,
    /// Division or remainder by zero.
    DivideByZero,
    /// Square root of a negative value.
    SqrtNegative,
    /// Zero raised to a negative power.
    ZeroPowNegative,
    /// Exponent's integer part exceeds `i32::MAX` in magnitude.
    ExponentTooLarge,
    /// Integer part does not fit a signed 64-bit integer.
    IntPartOverflow,
    /// Natural logarithm of a non-positive value.
    LnNonPositive,
    /// Structurally invalid binary encoding.
    InvalidBinaryData,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyString => f.write_str("empty string"),
            Self::InvalidFormat(s) => write!(f, "invalid decimal format: {:?}", s),
            Self::MaxStrLen => f.write_str("input exceeds maximum length of 200 bytes"),
            Self::PrecisionOutOfRange => f.write_str("precision out of range"),
            Self::DivideByZero => f.write_str("division by zero"),
            Self::SqrtNegative => f.write_str("square root of negative number"),
            Self::ZeroPowNegative => f.write_str("zero raised to negative power"),
            Self::ExponentTooLarge => f.write_str("exponent exceeds i32 range"),
            Self::IntPartOverflow => f.write_str("integer part overflows i64"),
            Self::LnNonPositive => f.write_str("logarithm of non-positive number"),
            Self::InvalidBinaryData => f.write_str("invalid binary data"),
        }
    }
}

/// Internal signal: a 128-bit computation spilled. Always handled by
/// retrying in arbitrary precision, never returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Overflow;
