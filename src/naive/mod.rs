//! Calendar dates, times of day and their combination.
//!
//! None of these types know about time zones or a running clock; they are plain values over
//! the proleptic Gregorian calendar.

pub(crate) mod date;
pub(crate) mod datetime;
mod internals;
pub(crate) mod time;

pub use self::date::GameClockDate;
pub use self::datetime::GameClockDateTime;
pub use self::time::GameClockTime;

#[cfg(feature = "__internal_bench")]
#[doc(hidden)]
pub use self::internals::YearFlags as __BenchYearFlags;
