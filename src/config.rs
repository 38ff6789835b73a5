use core::sync::atomic::{AtomicU8, Ordering};

/// Hard upper bound on the fractional scale of any decimal.
pub const MAX_SCALE: u8 = 19;

static DEFAULT_PRECISION: AtomicU8 = AtomicU8::new(MAX_SCALE);
static DEFAULT_PARSE_MODE: AtomicU8 = AtomicU8::new(ParseMode::Error as u8);

/// Policy for literals carrying more fractional digits than the default
/// precision allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ParseMode {
    /// Reject the literal with `PrecisionOutOfRange`.
    Error = 0,
    /// Drop the excess digits toward zero.
    Trunc = 1,
}

/// Sets the process-wide result precision for division, parsing and
/// power operations.
///
/// Must be called during single-threaded startup, before any concurrent
/// use of the library.
///
/// # Panics
/// Panics if `precision` is outside `1..=19`.
pub fn set_default_precision(precision: u8) {
    assert!(
        (1..=MAX_SCALE).contains(&precision),
        "default precision must be in 1..=19"
    );
    DEFAULT_PRECISION.store(precision, Ordering::Relaxed);
}

/// Returns the process-wide result precision (fractional digits).
#[inline(always)]
pub fn default_precision() -> u8 {
    DEFAULT_PRECISION.load(Ordering::Relaxed)
}

/// Sets the process-wide policy for over-precise literals.
///
/// Must be called during single-threaded startup, before any concurrent
/// use of the library.
pub fn set_default_parse_mode(mode: ParseMode) {
    DEFAULT_PARSE_MODE.store(mode as u8, Ordering::Relaxed);
}

/// Returns the process-wide policy for over-precise literals.
#[inline(always)]
pub fn default_parse_mode() -> ParseMode {
    match DEFAULT_PARSE_MODE.load(Ordering::Relaxed) {
        0 => ParseMode::Error,
        1 => ParseMode::Trunc,
        _ => panic!("corrupted parse mode"),
    }
}
