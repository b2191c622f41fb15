//! Time of day without a date.

use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::{fmt, str};

#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

use crate::div::div_mod_euclid_i64;
use crate::duration::SECS_PER_DAY;
use crate::error::{Component, Error};
use crate::format::{self, CanonicalFormat, ParseError};
use crate::{GameClockDuration, Timelike};


/// A time of day with one-second resolution, from `00:00:00` to `23:59:59`.
///
/// There are no leap seconds: every day has exactly 86,400 seconds.
///
/// # Example
///
/// ```
/// use gameclock::{GameClockTime, Timelike};
///
/// let t = GameClockTime::from_hms(23, 56, 4)?;
/// assert_eq!((t.hour(), t.minute(), t.second()), (23, 56, 4));
/// assert_eq!(t.num_seconds_from_midnight(), 86_164);
/// assert_eq!(t.to_string(), "23:56:04");
/// # Ok::<_, gameclock::Error>(())
/// ```
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Default)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
pub struct GameClockTime {
    secs: u32,
}

impl GameClockTime {
    /// `00:00:00`.
    pub const MIDNIGHT: GameClockTime = GameClockTime { secs: 0 };

    /// The earliest time of day, equal to [`GameClockTime::MIDNIGHT`].
    pub const MIN: GameClockTime = GameClockTime::MIDNIGHT;

    /// The latest time of day, `23:59:59`.
    pub const MAX: GameClockTime = GameClockTime { secs: SECS_PER_DAY as u32 - 1 };

    /// Makes a new `GameClockTime` from hour, minute and second.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first component that is out of range: the hour must be
    /// in `0..=23`, the minute and second in `0..=59`.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{Component, GameClockTime};
    ///
    /// let from_hms = GameClockTime::from_hms;
    ///
    /// assert!(from_hms(0, 0, 0).is_ok());
    /// assert!(from_hms(23, 59, 59).is_ok());
    /// assert_eq!(from_hms(24, 0, 0).unwrap_err().component(), Some(Component::Hour));
    /// assert_eq!(from_hms(23, 60, 0).unwrap_err().component(), Some(Component::Minute));
    /// assert_eq!(from_hms(23, 59, 60).unwrap_err().component(), Some(Component::Second));
    /// ```
    pub const fn from_hms(hour: u32, min: u32, sec: u32) -> Result<GameClockTime, Error> {
        if hour >= 24 {
            return Err(Error::invalid(Component::Hour, 0, 23));
        }
        if min >= 60 {
            return Err(Error::invalid(Component::Minute, 0, 59));
        }
        if sec >= 60 {
            return Err(Error::invalid(Component::Second, 0, 59));
        }
        Ok(GameClockTime { secs: hour * 3600 + min * 60 + sec })
    }

    /// Makes a new `GameClockTime` from hour, minute and second.
    ///
    /// Returns `None` on an invalid hour, minute or second.
    #[inline]
    pub const fn from_hms_opt(hour: u32, min: u32, sec: u32) -> Option<GameClockTime> {
        match GameClockTime::from_hms(hour, min, sec) {
            Ok(time) => Some(time),
            Err(_) => None,
        }
    }

    /// Clamps each component to its range before combining them.
    #[inline]
    pub(crate) const fn from_hms_clamped(hour: u32, min: u32, sec: u32) -> GameClockTime {
        let hour = if hour > 23 { 23 } else { hour };
        let min = if min > 59 { 59 } else { min };
        let sec = if sec > 59 { 59 } else { sec };
        GameClockTime { secs: hour * 3600 + min * 60 + sec }
    }

    /// Makes a new `GameClockTime` from the number of seconds since midnight.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::SecondsFromMidnight`] error when `secs` is not in `0..=86_399`.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::GameClockTime;
    ///
    /// assert_eq!(GameClockTime::from_num_seconds_from_midnight(3723)?, GameClockTime::from_hms(1, 2, 3)?);
    /// assert!(GameClockTime::from_num_seconds_from_midnight(86_400).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub const fn from_num_seconds_from_midnight(secs: u32) -> Result<GameClockTime, Error> {
        if secs >= SECS_PER_DAY as u32 {
            return Err(Error::invalid(Component::SecondsFromMidnight, 0, SECS_PER_DAY - 1));
        }
        Ok(GameClockTime { secs })
    }

    /// Makes a new `GameClockTime` from the number of seconds since midnight.
    ///
    /// Returns `None` when `secs` is not in `0..=86_399`.
    #[inline]
    pub const fn from_num_seconds_from_midnight_opt(secs: u32) -> Option<GameClockTime> {
        match GameClockTime::from_num_seconds_from_midnight(secs) {
            Ok(time) => Some(time),
            Err(_) => None,
        }
    }

    /// Adds a duration to the current time, wrapping around midnight.
    ///
    /// Also returns the number of whole days that wrapped: positive when the result passed
    /// midnight going forward, negative going backward. This never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{GameClockDuration, GameClockTime};
    ///
    /// let from_hms = GameClockTime::from_hms;
    /// let hours = GameClockDuration::from_hours;
    ///
    /// assert_eq!(from_hms(3, 4, 5)?.overflowing_add_signed(hours(11)?), (from_hms(14, 4, 5)?, 0));
    /// assert_eq!(from_hms(3, 4, 5)?.overflowing_add_signed(hours(23)?), (from_hms(2, 4, 5)?, 1));
    /// assert_eq!(from_hms(3, 4, 5)?.overflowing_add_signed(hours(-7)?), (from_hms(20, 4, 5)?, -1));
    /// assert_eq!(from_hms(3, 4, 5)?.overflowing_add_signed(hours(-51)?), (from_hms(0, 4, 5)?, -2));
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub const fn overflowing_add_signed(&self, rhs: GameClockDuration) -> (GameClockTime, i64) {
        // |rhs| is far below i64::MAX, so this cannot overflow
        let total = self.secs as i64 + rhs.num_seconds();
        let (days, secs) = div_mod_euclid_i64(total, SECS_PER_DAY);
        (GameClockTime { secs: secs as u32 }, days)
    }

    /// Subtracts a duration from the current time, wrapping around midnight.
    ///
    /// Also returns the number of whole days that wrapped, with the same sign convention as
    /// [`GameClockTime::overflowing_add_signed`]: going back past midnight gives a negative
    /// count.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{GameClockDuration, GameClockTime};
    ///
    /// let from_hms = GameClockTime::from_hms;
    /// let hours = GameClockDuration::from_hours;
    ///
    /// assert_eq!(from_hms(3, 4, 5)?.overflowing_sub_signed(hours(2)?), (from_hms(1, 4, 5)?, 0));
    /// assert_eq!(from_hms(3, 4, 5)?.overflowing_sub_signed(hours(17)?), (from_hms(10, 4, 5)?, -1));
    /// assert_eq!(from_hms(3, 4, 5)?.overflowing_sub_signed(hours(-22)?), (from_hms(1, 4, 5)?, 1));
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    #[inline]
    pub const fn overflowing_sub_signed(&self, rhs: GameClockDuration) -> (GameClockTime, i64) {
        let total = self.secs as i64 - rhs.num_seconds();
        let (days, secs) = div_mod_euclid_i64(total, SECS_PER_DAY);
        (GameClockTime { secs: secs as u32 }, days)
    }

    /// Subtracts another `GameClockTime` from the current time.
    /// Returns a `GameClockDuration` strictly within ±1 day.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{GameClockDuration, GameClockTime};
    ///
    /// let from_hms = GameClockTime::from_hms;
    /// let since = GameClockTime::signed_duration_since;
    ///
    /// assert_eq!(since(from_hms(3, 5, 7)?, from_hms(3, 5, 7)?), GameClockDuration::ZERO);
    /// assert_eq!(since(from_hms(3, 5, 7)?, from_hms(3, 5, 0)?), GameClockDuration::from_seconds(7)?);
    /// assert_eq!(since(from_hms(3, 5, 7)?, from_hms(4, 5, 7)?), GameClockDuration::from_hours(-1)?);
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    #[inline]
    pub const fn signed_duration_since(self, rhs: GameClockTime) -> GameClockDuration {
        GameClockDuration::from_secs_trusted(self.secs as i64 - rhs.secs as i64)
    }

    #[inline]
    pub(crate) const fn hms(&self) -> (u32, u32, u32) {
        let sec = self.secs % 60;
        let mins = self.secs / 60;
        (mins / 60, mins % 60, sec)
    }
}

impl Timelike for GameClockTime {
    #[inline]
    fn hour(&self) -> u32 {
        self.hms().0
    }

    #[inline]
    fn minute(&self) -> u32 {
        self.hms().1
    }

    #[inline]
    fn second(&self) -> u32 {
        self.hms().2
    }

    /// Makes a new `GameClockTime` with the hour number changed.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{GameClockTime, Timelike};
    ///
    /// let t = GameClockTime::from_hms(23, 56, 4)?;
    /// assert_eq!(t.with_hour(7)?, GameClockTime::from_hms(7, 56, 4)?);
    /// assert!(t.with_hour(24).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    #[inline]
    fn with_hour(&self, hour: u32) -> Result<GameClockTime, Error> {
        if hour >= 24 {
            return Err(Error::invalid(Component::Hour, 0, 23));
        }
        Ok(GameClockTime { secs: hour * 3600 + self.secs % 3600 })
    }

    #[inline]
    fn with_minute(&self, min: u32) -> Result<GameClockTime, Error> {
        if min >= 60 {
            return Err(Error::invalid(Component::Minute, 0, 59));
        }
        Ok(GameClockTime { secs: self.secs / 3600 * 3600 + min * 60 + self.secs % 60 })
    }

    #[inline]
    fn with_second(&self, sec: u32) -> Result<GameClockTime, Error> {
        if sec >= 60 {
            return Err(Error::invalid(Component::Second, 0, 59));
        }
        Ok(GameClockTime { secs: self.secs / 60 * 60 + sec })
    }

    #[inline]
    fn num_seconds_from_midnight(&self) -> u32 {
        self.secs
    }
}

/// An addition of `GameClockDuration` to `GameClockTime` wraps around and never overflows or
/// underflows. In particular the addition ignores integral number of days; use
/// [`GameClockTime::overflowing_add_signed`] to get them.
///
/// # Example
///
/// ```
/// use gameclock::{GameClockDuration, GameClockTime};
///
/// let t = GameClockTime::from_hms(23, 59, 59)?;
/// assert_eq!(t + GameClockDuration::from_seconds(2)?, GameClockTime::from_hms(0, 0, 1)?);
/// assert_eq!(t + GameClockDuration::from_days(800)?, t);
/// # Ok::<_, gameclock::Error>(())
/// ```
impl Add<GameClockDuration> for GameClockTime {
    type Output = GameClockTime;

    #[inline]
    fn add(self, rhs: GameClockDuration) -> GameClockTime {
        self.overflowing_add_signed(rhs).0
    }
}

impl AddAssign<GameClockDuration> for GameClockTime {
    #[inline]
    fn add_assign(&mut self, rhs: GameClockDuration) {
        *self = self.add(rhs);
    }
}

/// A subtraction of `GameClockDuration` from `GameClockTime` wraps around and never overflows
/// or underflows. In particular the subtraction ignores integral number of days.
impl Sub<GameClockDuration> for GameClockTime {
    type Output = GameClockTime;

    #[inline]
    fn sub(self, rhs: GameClockDuration) -> GameClockTime {
        self.overflowing_sub_signed(rhs).0
    }
}

impl SubAssign<GameClockDuration> for GameClockTime {
    #[inline]
    fn sub_assign(&mut self, rhs: GameClockDuration) {
        *self = self.sub(rhs);
    }
}

/// Subtracts another `GameClockTime` from the current time.
/// Returns a `GameClockDuration` within ±1 day.
///
/// The implementation is a wrapper around [`GameClockTime::signed_duration_since`].
impl Sub<GameClockTime> for GameClockTime {
    type Output = GameClockDuration;

    #[inline]
    fn sub(self, rhs: GameClockTime) -> GameClockDuration {
        self.signed_duration_since(rhs)
    }
}

impl fmt::Debug for GameClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The `Display` output of the time `t` is `HH:MM:SS`.
impl fmt::Display for GameClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; format::MAX_TIME_LEN];
        format::pad_canonical(self, &mut buf, f)
    }
}

/// Parsing a `str` into a `GameClockTime` accepts exactly the `Display` output.
///
/// # Example
///
/// ```
/// use gameclock::GameClockTime;
///
/// assert_eq!("23:56:04".parse::<GameClockTime>(), Ok(GameClockTime::from_hms(23, 56, 4)?));
/// assert!("23:56".parse::<GameClockTime>().is_err());
/// assert!("24:00:00".parse::<GameClockTime>().is_err());
/// # Ok::<_, gameclock::Error>(())
/// ```
impl str::FromStr for GameClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<GameClockTime, ParseError> {
        format::parse::parse_time(s)
    }
}

impl CanonicalFormat for GameClockTime {
    #[inline]
    fn formatted_len(&self) -> usize {
        format::MAX_TIME_LEN
    }

    #[inline]
    fn write_canonical(&self, buf: &mut [u8]) -> Option<usize> {
        let (hour, min, sec) = self.hms();
        format::formatting::write_time(buf, hour, min, sec)
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for GameClockTime {
    fn arbitrary(u: &mut arbitrary::Unstructured) -> arbitrary::Result<GameClockTime> {
        let secs = u.int_in_range(0..=SECS_PER_DAY as u32 - 1)?;
        Ok(GameClockTime { secs })
    }
}
