//! Canonical text formatting and parsing.
//!
//! Every value type has exactly one text form:
//!
//! | type                  | form                  | example               |
//! |-----------------------|-----------------------|-----------------------|
//! | [`GameClockDate`]     | `[±]YYYY-MM-DD`       | `2015-09-18`          |
//! | [`GameClockTime`]     | `HH:MM:SS`            | `23:56:04`            |
//! | [`GameClockDateTime`] | `<date> <time>`       | `2015-09-18 23:56:04` |
//! | [`GameClockDuration`] | `[-][D:]HH:MM:SS`     | `-1:02:03:04`         |
//!
//! Years from 0 to 9999 are written with four digits and no sign, negative years down to
//! -9999 with a leading `-`. Years outside that range always carry an explicit sign and as
//! many digits as they need.
//!
//! The writers in [`formatting`] work on a caller-provided byte buffer. They compute the exact
//! length first and refuse to write anything when the buffer is too small. The `Display`
//! implementations use a stack buffer of the maximum length, so formatting never allocates.
//!
//! [`GameClockDate`]: crate::GameClockDate
//! [`GameClockTime`]: crate::GameClockTime
//! [`GameClockDateTime`]: crate::GameClockDateTime
//! [`GameClockDuration`]: crate::GameClockDuration

#[cfg(feature = "alloc")]
use alloc::string::String;
use core::fmt;

pub mod formatting;
pub(crate) mod parse;

/// Maximum length of a formatted date, reached by `-2147483648-12-31`.
pub const MAX_DATE_LEN: usize = 17;

/// Length of a formatted time.
pub const MAX_TIME_LEN: usize = 8;

/// Maximum length of a formatted date and time.
pub const MAX_DATETIME_LEN: usize = MAX_DATE_LEN + 1 + MAX_TIME_LEN;

/// Maximum length of a formatted duration, reached by `-1568704592609:23:59:59`.
pub const MAX_DURATION_LEN: usize = 23;

/// Values with a canonical text form that can be written into a byte buffer.
///
/// # Example
///
/// ```
/// use gameclock::{CanonicalFormat, GameClockDate};
///
/// let date = GameClockDate::from_ymd(-44, 3, 15)?;
/// let mut buf = [0u8; 16];
/// assert_eq!(date.formatted_len(), 11);
/// assert_eq!(date.write_canonical(&mut buf), Some(11));
/// assert_eq!(&buf[..11], b"-0044-03-15");
///
/// // a buffer that is too short is left untouched
/// let mut small = [0u8; 10];
/// assert_eq!(date.write_canonical(&mut small), None);
/// assert_eq!(small, [0u8; 10]);
/// # Ok::<_, gameclock::Error>(())
/// ```
pub trait CanonicalFormat {
    /// The exact number of bytes [`write_canonical`](CanonicalFormat::write_canonical) writes.
    fn formatted_len(&self) -> usize;

    /// Writes the canonical text form into the front of `buf`.
    ///
    /// Returns the number of bytes written, or `None` without touching `buf` when it is
    /// shorter than [`formatted_len`](CanonicalFormat::formatted_len).
    fn write_canonical(&self, buf: &mut [u8]) -> Option<usize>;

    /// Returns the canonical text form as a newly allocated `String`.
    #[cfg(feature = "alloc")]
    fn to_canonical_string(&self) -> String {
        let mut buf = alloc::vec![0u8; self.formatted_len()];
        let len = self.write_canonical(&mut buf).unwrap_or(0);
        buf.truncate(len);
        // the writers only ever produce ASCII
        String::from_utf8(buf).unwrap_or_default()
    }
}

/// Formats `value` through `buf` and hands the result to [`fmt::Formatter::pad`], so width,
/// fill and precision flags apply.
pub(crate) fn pad_canonical<T: CanonicalFormat>(
    value: &T,
    buf: &mut [u8],
    f: &mut fmt::Formatter,
) -> fmt::Result {
    let len = value.write_canonical(buf).ok_or(fmt::Error)?;
    let s = core::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
    f.pad(s)
}

/// An error from parsing the canonical text form of a value.
///
/// # Example
///
/// ```
/// use gameclock::{GameClockDate, ParseError};
///
/// let err: ParseError = "2015-13-01".parse::<GameClockDate>().unwrap_err();
/// assert_eq!(err.to_string(), "input is out of range");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
pub struct ParseError(pub(crate) ParseErrorKind);

impl ParseError {
    /// The category of parse error.
    pub const fn kind(&self) -> ParseErrorKind {
        self.0
    }
}

/// The category of parse error.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// A field is well-formed but its value is outside the valid range, including a day that
    /// does not exist in the given month.
    OutOfRange,

    /// The input contains a character that does not belong at that position.
    Invalid,

    /// The input ended before the value was complete.
    TooShort,

    /// There is trailing input after a complete value.
    TooLong,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            ParseErrorKind::OutOfRange => write!(f, "input is out of range"),
            ParseErrorKind::Invalid => write!(f, "input contains invalid characters"),
            ParseErrorKind::TooShort => write!(f, "premature end of input"),
            ParseErrorKind::TooLong => write!(f, "trailing input"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

// to be used in this module and submodules
pub(crate) const OUT_OF_RANGE: ParseError = ParseError(ParseErrorKind::OutOfRange);
pub(crate) const INVALID: ParseError = ParseError(ParseErrorKind::Invalid);
pub(crate) const TOO_SHORT: ParseError = ParseError(ParseErrorKind::TooShort);
pub(crate) const TOO_LONG: ParseError = ParseError(ParseErrorKind::TooLong);

/// Same as `Result<T, ParseError>`.
pub type ParseResult<T> = Result<T, ParseError>;
