//! # GameClock: calendar values over the full `i32` year range
//!
//! GameClock provides the date and time value types a game clock needs: a calendar date, a time
//! of day, their combination and a signed duration in whole seconds. All of them are small
//! `Copy` values with no notion of time zones or of a running clock.
//!
//! Dates follow the proleptic Gregorian calendar from January 1 of year `i32::MIN` to
//! December 31 of year `i32::MAX`, so the year range is about ±2.1 billion years. Durations are
//! bounded by exactly the span between [`GameClockDateTime::MIN`] and
//! [`GameClockDateTime::MAX`], which means the difference of any two date-times is always a
//! valid duration.
//!
//! ### Features
//!
//! Default features:
//!
//! - `std`: implements `std::error::Error` for [`Error`] and [`ParseError`].
//! - `log`: emits [`log`](https://docs.rs/log) records where values are silently repaired,
//!   see [`DateTimeFields::normalize`].
//!
//! Optional features:
//!
//! - `alloc`: enables [`CanonicalFormat::to_canonical_string`].
//! - [`serde`][]: serialization in the canonical text form.
//! - [`rkyv`][]: zero-copy archiving of the value types.
//! - [`arbitrary`][]: construct arbitrary valid values, for fuzzing.
//!
//! [`serde`]: https://github.com/serde-rs/serde
//! [`rkyv`]: https://github.com/rkyv/rkyv
//! [`arbitrary`]: https://github.com/rust-fuzz/arbitrary
//!
//! ## Overview
//!
//! ### Construction
//!
//! Every type is created through validating constructors. Each comes in two shapes:
//! `from_*` returns a `Result` whose [`Error`] names the offending component and its valid
//! range, `from_*_opt` returns an `Option` and can be used in `const` context.
//!
//! ```
//! use gameclock::{Component, GameClockDate, GameClockTime, Weekday};
//!
//! let date = GameClockDate::from_ymd(2015, 3, 14)?;
//! assert_eq!(date, GameClockDate::from_yo(2015, 73)?);
//! assert_eq!(date, GameClockDate::from_isoywd(2015, 11, Weekday::Sat)?);
//!
//! let err = GameClockDate::from_ymd(2023, 9, 31).unwrap_err();
//! assert_eq!(err.component(), Some(Component::Day));
//! assert_eq!(err.to_string(), "invalid day: expected 1..=30");
//!
//! const NOON: Option<GameClockTime> = GameClockTime::from_hms_opt(12, 0, 0);
//! assert!(NOON.is_some());
//! # Ok::<_, gameclock::Error>(())
//! ```
//!
//! ### Arithmetic
//!
//! Adding a [`GameClockDuration`] to a date only uses its whole days. Adding one to a time of
//! day wraps around midnight and drops the day count, while a [`GameClockDateTime`] carries
//! it into the date. Month arithmetic clamps the day to the end of the target month.
//!
//! ```
//! use gameclock::{GameClockDate, GameClockDuration, GameClockTime};
//!
//! let date = GameClockDate::from_ymd(2023, 12, 31)?;
//! assert_eq!(date + GameClockDuration::from_days(1)?, GameClockDate::from_ymd(2024, 1, 1)?);
//! assert_eq!(
//!     GameClockDate::from_ymd(2024, 1, 31)?.checked_add_months(1)?,
//!     GameClockDate::from_ymd(2024, 2, 29)?
//! );
//!
//! let time = GameClockTime::from_hms(23, 59, 59)?;
//! assert_eq!(time + GameClockDuration::from_seconds(2)?, GameClockTime::from_hms(0, 0, 1)?);
//!
//! let dt = date.and_time(time);
//! assert_eq!(dt + GameClockDuration::from_seconds(2)?, GameClockDate::from_ymd(2024, 1, 1)?.and_hms(0, 0, 1)?);
//! # Ok::<_, gameclock::Error>(())
//! ```
//!
//! ### Formatting and parsing
//!
//! Each type has one canonical text form, used by `Display`, `Debug` and `FromStr`. The
//! [`CanonicalFormat`] trait writes it into a caller-provided buffer without allocating.
//!
//! ```
//! use gameclock::{GameClockDate, GameClockDuration};
//!
//! assert_eq!(GameClockDate::from_ymd(-5, 1, 1)?.to_string(), "-0005-01-01");
//! assert_eq!(GameClockDate::MAX.to_string(), "+2147483647-12-31");
//! assert_eq!(GameClockDuration::from_seconds(-93_784)?.to_string(), "-1:02:03:04");
//! assert_eq!("2015-09-05".parse::<GameClockDate>().ok(), Some(GameClockDate::from_ymd(2015, 9, 5)?));
//! # Ok::<_, gameclock::Error>(())
//! ```

#![doc(html_root_url = "https://docs.rs/gameclock/latest/")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod div;
mod duration;
pub use duration::GameClockDuration;

mod error;
pub use error::{Component, Error, ErrorKind};

mod fields;
pub use fields::DateTimeFields;

pub mod format;
#[doc(no_inline)]
pub use format::{CanonicalFormat, ParseError, ParseErrorKind};

mod naive;
pub use naive::{GameClockDate, GameClockDateTime, GameClockTime};
#[cfg(feature = "__internal_bench")]
#[doc(hidden)]
pub use naive::__BenchYearFlags;

#[cfg(feature = "serde")]
mod serde;

mod traits;
pub use traits::{Datelike, Timelike};

mod utils;

mod weekday;
pub use weekday::Weekday;

#[macro_use]
mod macros;

/// A convenience module appropriate for glob imports (`use gameclock::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{CanonicalFormat, Datelike, Timelike, Weekday};
    #[doc(no_inline)]
    pub use crate::{GameClockDate, GameClockDateTime, GameClockDuration, GameClockTime};
}

/// Workaround because `?` is not (yet) available in const context.
#[macro_export]
#[doc(hidden)]
macro_rules! try_opt {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return None,
        }
    };
}

/// Workaround because `.expect()` is not (yet) available in const context.
#[macro_export]
#[doc(hidden)]
macro_rules! expect {
    ($e:expr, $m:literal) => {
        match $e {
            Some(v) => v,
            None => panic!($m),
        }
    };
}
