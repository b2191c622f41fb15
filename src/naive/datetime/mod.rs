//! Date and time of day combined.

use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::{fmt, str};

#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

use crate::error::Error;
use crate::format::{self, CanonicalFormat, ParseError};
use crate::{Datelike, GameClockDate, GameClockDuration, GameClockTime, Timelike, Weekday};


/// A calendar date paired with a time of day.
///
/// The two halves are independent values; every `GameClockDate` combined with every
/// `GameClockTime` is a valid `GameClockDateTime`. Date fields are read through [`Datelike`],
/// time fields through [`Timelike`].
///
/// # Example
///
/// ```
/// use gameclock::{Datelike, GameClockDate, GameClockDateTime, GameClockTime, Timelike};
///
/// let dt = GameClockDateTime::new(GameClockDate::from_ymd(2015, 9, 18)?, GameClockTime::from_hms(23, 56, 4)?);
/// assert_eq!((dt.year(), dt.month(), dt.day()), (2015, 9, 18));
/// assert_eq!((dt.hour(), dt.minute(), dt.second()), (23, 56, 4));
/// assert_eq!(dt.to_string(), "2015-09-18 23:56:04");
/// # Ok::<_, gameclock::Error>(())
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
pub struct GameClockDateTime {
    date: GameClockDate,
    time: GameClockTime,
}

impl GameClockDateTime {
    /// The earliest representable date and time, midnight of [`GameClockDate::MIN`].
    pub const MIN: GameClockDateTime =
        GameClockDateTime { date: GameClockDate::MIN, time: GameClockTime::MIN };

    /// The latest representable date and time, `23:59:59` of [`GameClockDate::MAX`].
    pub const MAX: GameClockDateTime =
        GameClockDateTime { date: GameClockDate::MAX, time: GameClockTime::MAX };

    /// Makes a new `GameClockDateTime` from date and time components.
    ///
    /// Equivalent to [`date.and_time(time)`](GameClockDate::and_time) and many other helper
    /// constructors on `GameClockDate`.
    #[inline]
    pub const fn new(date: GameClockDate, time: GameClockTime) -> GameClockDateTime {
        GameClockDateTime { date, time }
    }

    /// Retrieves a date component.
    #[inline]
    pub const fn date(&self) -> GameClockDate {
        self.date
    }

    /// Retrieves a time component.
    #[inline]
    pub const fn time(&self) -> GameClockTime {
        self.time
    }

    /// Adds a duration to the current date and time.
    ///
    /// The time component absorbs the part below a day; whole days that wrap past midnight
    /// are carried into the date.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`](crate::Component::Year) error when the resulting date
    /// is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{GameClockDate, GameClockDuration};
    ///
    /// let d = GameClockDate::from_ymd(2016, 7, 8)?;
    /// let hms = |h, m, s| d.and_hms(h, m, s);
    /// let seconds = GameClockDuration::from_seconds;
    ///
    /// assert_eq!(hms(3, 5, 7)?.checked_add_signed(GameClockDuration::ZERO)?, hms(3, 5, 7)?);
    /// assert_eq!(hms(3, 5, 7)?.checked_add_signed(seconds(1)?)?, hms(3, 5, 8)?);
    /// assert_eq!(hms(3, 5, 7)?.checked_add_signed(seconds(-1)?)?, hms(3, 5, 6)?);
    /// assert_eq!(hms(3, 5, 7)?.checked_add_signed(seconds(3600 + 60)?)?, hms(4, 6, 7)?);
    /// assert_eq!(
    ///     hms(3, 5, 7)?.checked_add_signed(seconds(86_400)?)?,
    ///     GameClockDate::from_ymd(2016, 7, 9)?.and_hms(3, 5, 7)?
    /// );
    ///
    /// let far = GameClockDuration::from_days(1_000_000_000_000)?;
    /// assert!(hms(3, 5, 7)?.checked_add_signed(far).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn checked_add_signed(self, rhs: GameClockDuration) -> Result<GameClockDateTime, Error> {
        let (time, days) = self.time.overflowing_add_signed(rhs);
        let date = self.date.checked_add_days(days)?;
        Ok(GameClockDateTime { date, time })
    }

    /// Subtracts a duration from the current date and time.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`](crate::Component::Year) error when the resulting date
    /// is out of range.
    pub fn checked_sub_signed(self, rhs: GameClockDuration) -> Result<GameClockDateTime, Error> {
        let (time, days) = self.time.overflowing_sub_signed(rhs);
        let date = self.date.checked_add_days(days)?;
        Ok(GameClockDateTime { date, time })
    }

    /// Adds a number of months to the date, clamping the day to the end of the target month.
    /// The time of day is kept.
    ///
    /// Succeeds exactly when [`GameClockDate::checked_add_months`] succeeds on the date.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`](crate::Component::Year) error when the resulting date
    /// is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::GameClockDate;
    ///
    /// let dt = GameClockDate::from_ymd(2024, 1, 31)?.and_hms(1, 0, 0)?;
    /// assert_eq!(dt.checked_add_months(1)?, GameClockDate::from_ymd(2024, 2, 29)?.and_hms(1, 0, 0)?);
    /// assert!(dt.checked_add_months(i32::MAX).is_ok());
    /// assert!(GameClockDate::MAX.and_hms(0, 0, 0)?.checked_add_months(1).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn checked_add_months(self, months: i32) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { date: self.date.checked_add_months(months)?, time: self.time })
    }

    /// Subtracts a number of months from the date, clamping the day to the end of the target
    /// month. The time of day is kept.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`](crate::Component::Year) error when the resulting date
    /// is out of range.
    pub fn checked_sub_months(self, months: i32) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { date: self.date.checked_sub_months(months)?, time: self.time })
    }

    /// Adds a number of whole days to the date part.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`](crate::Component::Year) error when the resulting date
    /// is out of range.
    pub fn checked_add_days(self, days: i64) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { date: self.date.checked_add_days(days)?, ..self })
    }

    /// Subtracts a number of whole days from the date part.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`](crate::Component::Year) error when the resulting date
    /// is out of range.
    pub fn checked_sub_days(self, days: i64) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { date: self.date.checked_sub_days(days)?, ..self })
    }

    /// Subtracts another `GameClockDateTime` from the current date and time.
    /// This does not overflow or underflow at all.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{GameClockDate, GameClockDateTime, GameClockDuration};
    ///
    /// let d = GameClockDate::from_ymd(2016, 7, 8)?;
    /// assert_eq!(
    ///     d.and_hms(3, 5, 7)?.signed_duration_since(d.and_hms(2, 4, 6)?),
    ///     GameClockDuration::from_seconds(3600 + 60 + 1)?
    /// );
    ///
    /// // July 8 is the 190th day of 2016
    /// let d0 = GameClockDate::from_ymd(2016, 1, 1)?;
    /// assert_eq!(
    ///     d.and_hms(0, 7, 6)?.signed_duration_since(d0.and_hms(0, 0, 0)?),
    ///     GameClockDuration::from_seconds(189 * 86_400 + 7 * 60 + 6)?
    /// );
    ///
    /// assert_eq!(
    ///     GameClockDateTime::MAX.signed_duration_since(GameClockDateTime::MIN),
    ///     GameClockDuration::MAX
    /// );
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn signed_duration_since(self, rhs: GameClockDateTime) -> GameClockDuration {
        let days = self.date.signed_duration_since(rhs.date);
        let secs = self.time.signed_duration_since(rhs.time);
        GameClockDuration::from_secs_trusted(days.num_seconds() + secs.num_seconds())
    }
}

impl Datelike for GameClockDateTime {
    #[inline]
    fn year(&self) -> i32 {
        self.date.year()
    }

    #[inline]
    fn month(&self) -> u32 {
        self.date.month()
    }

    #[inline]
    fn day(&self) -> u32 {
        self.date.day()
    }

    #[inline]
    fn ordinal(&self) -> u32 {
        self.date.ordinal()
    }

    #[inline]
    fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    #[inline]
    fn iso_week_date(&self) -> (i64, u32, Weekday) {
        self.date.iso_week_date()
    }

    /// Makes a new `GameClockDateTime` with the year number changed, keeping month, day and
    /// time of day.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{Datelike, GameClockDate};
    ///
    /// let dt = GameClockDate::from_ymd(2015, 9, 25)?.and_hms(12, 34, 56)?;
    /// assert_eq!(dt.with_year(2016)?, GameClockDate::from_ymd(2016, 9, 25)?.and_hms(12, 34, 56)?);
    /// assert_eq!(dt.with_year(-308)?, GameClockDate::from_ymd(-308, 9, 25)?.and_hms(12, 34, 56)?);
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    #[inline]
    fn with_year(&self, year: i32) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { date: self.date.with_year(year)?, ..*self })
    }

    #[inline]
    fn with_month(&self, month: u32) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { date: self.date.with_month(month)?, ..*self })
    }

    #[inline]
    fn with_day(&self, day: u32) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { date: self.date.with_day(day)?, ..*self })
    }

    #[inline]
    fn with_ordinal(&self, ordinal: u32) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { date: self.date.with_ordinal(ordinal)?, ..*self })
    }

    #[inline]
    fn num_days_from_ce(&self) -> i64 {
        self.date.num_days_from_ce()
    }
}

impl Timelike for GameClockDateTime {
    #[inline]
    fn hour(&self) -> u32 {
        self.time.hour()
    }

    #[inline]
    fn minute(&self) -> u32 {
        self.time.minute()
    }

    #[inline]
    fn second(&self) -> u32 {
        self.time.second()
    }

    #[inline]
    fn with_hour(&self, hour: u32) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { time: self.time.with_hour(hour)?, ..*self })
    }

    #[inline]
    fn with_minute(&self, min: u32) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { time: self.time.with_minute(min)?, ..*self })
    }

    #[inline]
    fn with_second(&self, sec: u32) -> Result<GameClockDateTime, Error> {
        Ok(GameClockDateTime { time: self.time.with_second(sec)?, ..*self })
    }

    #[inline]
    fn num_seconds_from_midnight(&self) -> u32 {
        self.time.num_seconds_from_midnight()
    }
}

/// An addition of `GameClockDuration` to `GameClockDateTime`.
///
/// # Panics
///
/// Panics if the resulting date would be out of range.
/// Consider using [`GameClockDateTime::checked_add_signed`] to get an `Err` instead.
impl Add<GameClockDuration> for GameClockDateTime {
    type Output = GameClockDateTime;

    #[inline]
    fn add(self, rhs: GameClockDuration) -> GameClockDateTime {
        self.checked_add_signed(rhs).expect("`GameClockDateTime + GameClockDuration` overflowed")
    }
}

impl AddAssign<GameClockDuration> for GameClockDateTime {
    #[inline]
    fn add_assign(&mut self, rhs: GameClockDuration) {
        *self = self.add(rhs);
    }
}

/// A subtraction of `GameClockDuration` from `GameClockDateTime`.
///
/// # Panics
///
/// Panics if the resulting date would be out of range.
/// Consider using [`GameClockDateTime::checked_sub_signed`] to get an `Err` instead.
impl Sub<GameClockDuration> for GameClockDateTime {
    type Output = GameClockDateTime;

    #[inline]
    fn sub(self, rhs: GameClockDuration) -> GameClockDateTime {
        self.checked_sub_signed(rhs).expect("`GameClockDateTime - GameClockDuration` overflowed")
    }
}

impl SubAssign<GameClockDuration> for GameClockDateTime {
    #[inline]
    fn sub_assign(&mut self, rhs: GameClockDuration) {
        *self = self.sub(rhs);
    }
}

/// Subtracts another `GameClockDateTime` from the current date and time.
///
/// The implementation is a wrapper around [`GameClockDateTime::signed_duration_since`].
impl Sub<GameClockDateTime> for GameClockDateTime {
    type Output = GameClockDuration;

    #[inline]
    fn sub(self, rhs: GameClockDateTime) -> GameClockDuration {
        self.signed_duration_since(rhs)
    }
}

impl fmt::Debug for GameClockDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The `Display` output is the date and the time separated by a single space.
///
/// # Example
///
/// ```
/// use gameclock::GameClockDate;
///
/// let dt = GameClockDate::from_ymd(-5, 6, 7)?.and_hms(0, 1, 2)?;
/// assert_eq!(format!("{}", dt), "-0005-06-07 00:01:02");
/// # Ok::<_, gameclock::Error>(())
/// ```
impl fmt::Display for GameClockDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; format::MAX_DATETIME_LEN];
        format::pad_canonical(self, &mut buf, f)
    }
}

/// Parsing a `str` into a `GameClockDateTime` accepts the `Display` output.
///
/// # Example
///
/// ```
/// use gameclock::{GameClockDate, GameClockDateTime};
///
/// let dt = GameClockDate::from_ymd(2015, 9, 18)?.and_hms(23, 56, 4)?;
/// assert_eq!("2015-09-18 23:56:04".parse::<GameClockDateTime>(), Ok(dt));
/// assert!("2015-09-18T23:56:04".parse::<GameClockDateTime>().is_err());
/// # Ok::<_, gameclock::Error>(())
/// ```
impl str::FromStr for GameClockDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<GameClockDateTime, ParseError> {
        format::parse::parse_datetime(s)
    }
}

impl CanonicalFormat for GameClockDateTime {
    #[inline]
    fn formatted_len(&self) -> usize {
        self.date.formatted_len() + 1 + self.time.formatted_len()
    }

    fn write_canonical(&self, buf: &mut [u8]) -> Option<usize> {
        if buf.len() < self.formatted_len() {
            return None;
        }
        let n = self.date.write_canonical(buf)?;
        buf[n] = b' ';
        let m = self.time.write_canonical(&mut buf[n + 1..])?;
        Some(n + 1 + m)
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for GameClockDateTime {
    fn arbitrary(u: &mut arbitrary::Unstructured) -> arbitrary::Result<GameClockDateTime> {
        Ok(GameClockDateTime { date: u.arbitrary()?, time: u.arbitrary()? })
    }
}
