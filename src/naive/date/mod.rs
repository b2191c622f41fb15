//! Calendar date over the full `i32` year range.

use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::{fmt, str};

#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

use super::internals::{cycle_to_yo, yo_to_cycle, Mdf, Of, YearFlags, DAYS_PER_CYCLE};
use crate::div::{div_mod_euclid_i32, div_mod_euclid_i64};
use crate::error::{Component, Error};
use crate::format::{self, CanonicalFormat, ParseError};
use crate::{expect, try_opt};
use crate::{Datelike, GameClockDateTime, GameClockDuration, GameClockTime, Weekday};

#[cfg(test)]
mod tests;

/// A date in the proleptic Gregorian calendar, without time of day.
///
/// Every `i32` year is supported, from January 1 of `i32::MIN` ([`GameClockDate::MIN`]) to
/// December 31 of `i32::MAX` ([`GameClockDate::MAX`]). Year 0 is 1 BCE, year -1 is 2 BCE
/// and so on.
///
/// Values only come out of validating constructors, so a `GameClockDate` is always a real
/// calendar day. Dates are ordered chronologically.
///
/// # Example
///
/// ```
/// use gameclock::{Datelike, GameClockDate, Weekday};
///
/// let d = GameClockDate::from_ymd(2015, 1, 1)?;
/// assert_eq!(d.weekday(), Weekday::Thu);
/// assert_eq!(d.iso_week_date(), (2015, 1, Weekday::Thu));
/// assert_eq!(d.to_string(), "2015-01-01");
/// # Ok::<_, gameclock::Error>(())
/// ```
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
pub struct GameClockDate {
    year: i32,
    of: Of,
}

impl GameClockDate {
    /// The earliest representable date, January 1 of `i32::MIN`.
    pub const MIN: GameClockDate = GameClockDate {
        year: i32::MIN,
        of: expect!(Of::new(1, YearFlags::from_year(i32::MIN)), "invalid minimum date"),
    };

    /// The latest representable date, December 31 of `i32::MAX`.
    pub const MAX: GameClockDate = GameClockDate {
        year: i32::MAX,
        of: expect!(Of::new(365, YearFlags::from_year(i32::MAX)), "invalid maximum date"),
    };

    #[inline]
    const fn from_of(year: i32, of: Of) -> GameClockDate {
        GameClockDate { year, of }
    }

    /// Clamps the month to `1..=12` and the day to the length of that month in `year`.
    #[inline]
    pub(crate) const fn from_ymd_clamped(year: i32, month: u32, day: u32) -> GameClockDate {
        let of = Of::from_month_day_clamped(month, day, YearFlags::from_year(year));
        GameClockDate::from_of(year, of)
    }

    #[inline]
    const fn from_mdf(year: i32, mdf: Mdf) -> Option<GameClockDate> {
        match mdf.to_of() {
            Some(of) => Some(GameClockDate::from_of(year, of)),
            None => None,
        }
    }

    #[inline]
    pub(crate) const fn mdf(&self) -> Mdf {
        self.of.to_mdf()
    }

    /// Makes a new `GameClockDate` from the calendar date (year, month and day).
    ///
    /// # Errors
    ///
    /// Returns an error naming [`Component::Month`] when `month` is not in `1..=12`, or
    /// [`Component::Day`] with the month's real length when the day does not exist.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{Component, Datelike, GameClockDate};
    ///
    /// let d = GameClockDate::from_ymd(2015, 3, 14)?;
    /// assert_eq!((d.year(), d.month(), d.day()), (2015, 3, 14));
    /// assert_eq!(d.ordinal(), 73); // day of year
    ///
    /// let err = GameClockDate::from_ymd(2023, 9, 31).unwrap_err();
    /// assert_eq!(err.component(), Some(Component::Day));
    /// assert_eq!(err.to_string(), "invalid day: expected 1..=30");
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<GameClockDate, Error> {
        let flags = YearFlags::from_year(year);
        let first = Mdf::new(month, 1, flags).ok_or(Error::invalid(Component::Month, 1, 12))?;
        let day_error = Error::invalid(Component::Day, 1, i64::from(first.days_in_month()));
        let mdf = first.with_day(day).ok_or(day_error)?;
        GameClockDate::from_mdf(year, mdf).ok_or(day_error)
    }

    /// Makes a new `GameClockDate` from the calendar date (year, month and day).
    ///
    /// Returns `None` on an invalid month or day.
    #[inline]
    pub const fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<GameClockDate> {
        let flags = YearFlags::from_year(year);
        GameClockDate::from_mdf(year, try_opt!(Mdf::new(month, day, flags)))
    }

    /// Makes a new `GameClockDate` from the ordinal date (year and day of the year).
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Ordinal`] error when `ordinal` is not in `1..=365`
    /// (`1..=366` in a leap year).
    pub fn from_yo(year: i32, ordinal: u32) -> Result<GameClockDate, Error> {
        let flags = YearFlags::from_year(year);
        let of = Of::new(ordinal, flags)
            .ok_or(Error::invalid(Component::Ordinal, 1, i64::from(flags.ndays())))?;
        Ok(GameClockDate::from_of(year, of))
    }

    /// Makes a new `GameClockDate` from the ordinal date (year and day of the year).
    ///
    /// Returns `None` on an invalid ordinal.
    #[inline]
    pub const fn from_yo_opt(year: i32, ordinal: u32) -> Option<GameClockDate> {
        let of = try_opt!(Of::new(ordinal, YearFlags::from_year(year)));
        Some(GameClockDate::from_of(year, of))
    }

    /// Makes a new `GameClockDate` from the ISO week date (year, week number and day of the
    /// week).
    ///
    /// The resulting date may be in a different calendar year: ISO week 1 is the week that
    /// contains the year's first Thursday. Use [`Weekday::from_iso_number`] to get the weekday
    /// from an ISO weekday number.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::IsoWeek`] error when `week` is not in `1..=52` (or `1..=53` for
    /// years with 53 ISO weeks), or a [`Component::Year`] error when the date would fall
    /// outside of the `i32` year range.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{GameClockDate, Weekday};
    ///
    /// // 2015 starts on a Thursday, so its first ISO week starts in 2014.
    /// assert_eq!(
    ///     GameClockDate::from_isoywd(2015, 1, Weekday::Mon)?,
    ///     GameClockDate::from_ymd(2014, 12, 29)?,
    /// );
    /// assert_eq!(
    ///     GameClockDate::from_isoywd(2015, 53, Weekday::Sun)?,
    ///     GameClockDate::from_ymd(2016, 1, 3)?,
    /// );
    /// assert!(GameClockDate::from_isoywd(2015, 54, Weekday::Mon).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn from_isoywd(year: i32, week: u32, weekday: Weekday) -> Result<GameClockDate, Error> {
        let flags = YearFlags::from_year(year);
        let nweeks = flags.nisoweeks();
        if !(1..=nweeks).contains(&week) {
            return Err(Error::invalid(Component::IsoWeek, 1, i64::from(nweeks)));
        }

        // ordinal = week ordinal - delta
        let weekord = week * 7 + weekday as u32;
        let delta = flags.isoweek_delta();
        if weekord <= delta {
            // ordinal < 1, previous year
            let year = year.checked_sub(1).ok_or(Error::year_out_of_range())?;
            let prevflags = YearFlags::from_year(year);
            GameClockDate::from_yo(year, weekord + prevflags.ndays() - delta)
        } else {
            let ordinal = weekord - delta;
            let ndays = flags.ndays();
            if ordinal <= ndays {
                GameClockDate::from_yo(year, ordinal)
            } else {
                // ordinal > ndays, next year
                let year = year.checked_add(1).ok_or(Error::year_out_of_range())?;
                GameClockDate::from_yo(year, ordinal - ndays)
            }
        }
    }

    /// Makes a new `GameClockDate` from the ISO week date.
    ///
    /// Returns `None` on an invalid week or a date outside of the supported range.
    #[inline]
    pub fn from_isoywd_opt(year: i32, week: u32, weekday: Weekday) -> Option<GameClockDate> {
        GameClockDate::from_isoywd(year, week, weekday).ok()
    }

    /// Makes a new `GameClockDate` from the number of days since January 1, 1 (Day 1)
    /// in the proleptic Gregorian calendar.
    ///
    /// This is the inverse of [`Datelike::num_days_from_ce`].
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`] error when the date is outside of the `i32` year range.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{Datelike, GameClockDate};
    ///
    /// let from_days = GameClockDate::from_num_days_from_ce;
    /// assert_eq!(from_days(1)?, GameClockDate::from_ymd(1, 1, 1)?);
    /// assert_eq!(from_days(0)?, GameClockDate::from_ymd(0, 12, 31)?);
    /// assert_eq!(from_days(735_671)?, GameClockDate::from_ymd(2015, 3, 14)?);
    /// assert_eq!(from_days(-365)?.num_days_from_ce(), -365);
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn from_num_days_from_ce(days: i64) -> Result<GameClockDate, Error> {
        // make January 1, 1 BCE equal to day 0
        let days = days.checked_add(365).ok_or(Error::year_out_of_range())?;
        let (year_div_400, cycle) = div_mod_euclid_i64(days, i64::from(DAYS_PER_CYCLE));
        let (year_mod_400, ordinal) = cycle_to_yo(cycle as u32);
        let year = year_div_400
            .checked_mul(400)
            .and_then(|y| i32::try_from(y + i64::from(year_mod_400)).ok())
            .ok_or(Error::year_out_of_range())?;
        GameClockDate::from_yo(year, ordinal)
    }

    /// Makes a new `GameClockDate` from the number of days since January 1, 1 (Day 1).
    ///
    /// Returns `None` outside of the supported range.
    #[inline]
    pub fn from_num_days_from_ce_opt(days: i64) -> Option<GameClockDate> {
        GameClockDate::from_num_days_from_ce(days).ok()
    }

    /// Returns `true` if the year of this date is a leap year.
    #[inline]
    pub const fn leap_year(&self) -> bool {
        self.of.flags().is_leap()
    }

    /// Number of days in the month of this date.
    #[inline]
    pub const fn days_in_month(&self) -> u32 {
        self.mdf().days_in_month()
    }

    /// Adds a number of whole days.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`] error when the result leaves the `i32` year range.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::GameClockDate;
    ///
    /// let d = GameClockDate::from_ymd(2023, 12, 31)?;
    /// assert_eq!(d.checked_add_days(1)?, GameClockDate::from_ymd(2024, 1, 1)?);
    /// assert_eq!(d.checked_add_days(-365)?, GameClockDate::from_ymd(2022, 12, 31)?);
    /// assert!(GameClockDate::MAX.checked_add_days(1).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn checked_add_days(self, days: i64) -> Result<GameClockDate, Error> {
        // Ordinals up to 365 exist in every year, so this never crosses a year boundary.
        if let Some(ordinal) = i64::from(self.of.ordinal()).checked_add(days) {
            if (1..=365).contains(&ordinal) {
                if let Some(of) = self.of.with_ordinal(ordinal as u32) {
                    return Ok(GameClockDate::from_of(self.year, of));
                }
            }
        }

        let (year_div_400, year_mod_400) = div_mod_euclid_i32(self.year, 400);
        let cycle = i64::from(yo_to_cycle(year_mod_400 as u32, self.of.ordinal()));
        let cycle = cycle.checked_add(days).ok_or(Error::year_out_of_range())?;
        let (cycle_div_400y, cycle) = div_mod_euclid_i64(cycle, i64::from(DAYS_PER_CYCLE));
        let year_div_400 = i64::from(year_div_400) + cycle_div_400y;

        let (year_mod_400, ordinal) = cycle_to_yo(cycle as u32);
        let year = i32::try_from(year_div_400 * 400 + i64::from(year_mod_400))
            .map_err(|_| Error::year_out_of_range())?;
        GameClockDate::from_yo(year, ordinal)
    }

    /// Subtracts a number of whole days.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`] error when the result leaves the `i32` year range.
    #[inline]
    pub fn checked_sub_days(self, days: i64) -> Result<GameClockDate, Error> {
        match days.checked_neg() {
            Some(days) => self.checked_add_days(days),
            None => Err(Error::year_out_of_range()),
        }
    }

    /// Adds the whole days of `rhs` to the current date; the rest of `rhs` is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`] error when the result leaves the `i32` year range.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{GameClockDate, GameClockDuration};
    ///
    /// let d = GameClockDate::from_ymd(2015, 9, 5)?;
    /// assert_eq!(d.checked_add_signed(GameClockDuration::from_days(40)?)?,
    ///            GameClockDate::from_ymd(2015, 10, 15)?);
    /// assert_eq!(d.checked_add_signed(GameClockDuration::from_hours(47)?)?,
    ///            GameClockDate::from_ymd(2015, 9, 6)?);
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    #[inline]
    pub fn checked_add_signed(self, rhs: GameClockDuration) -> Result<GameClockDate, Error> {
        self.checked_add_days(rhs.num_days())
    }

    /// Subtracts the whole days of `rhs` from the current date.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`] error when the result leaves the `i32` year range.
    #[inline]
    pub fn checked_sub_signed(self, rhs: GameClockDuration) -> Result<GameClockDate, Error> {
        self.checked_add_days(-rhs.num_days())
    }

    /// Adds a number of months, clamping the day to the end of the target month.
    ///
    /// `months` may be negative.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`] error when the result leaves the `i32` year range.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::GameClockDate;
    ///
    /// let jan31 = GameClockDate::from_ymd(2024, 1, 31)?;
    /// assert_eq!(jan31.checked_add_months(1)?, GameClockDate::from_ymd(2024, 2, 29)?);
    /// assert_eq!(jan31.checked_add_months(13)?, GameClockDate::from_ymd(2025, 2, 28)?);
    /// assert_eq!(jan31.checked_add_months(-2)?, GameClockDate::from_ymd(2023, 11, 30)?);
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    #[inline]
    pub fn checked_add_months(self, months: i32) -> Result<GameClockDate, Error> {
        self.add_months(i64::from(months))
    }

    /// Subtracts a number of months, clamping the day to the end of the target month.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Year`] error when the result leaves the `i32` year range.
    #[inline]
    pub fn checked_sub_months(self, months: i32) -> Result<GameClockDate, Error> {
        self.add_months(-i64::from(months))
    }

    fn add_months(self, months: i64) -> Result<GameClockDate, Error> {
        let mdf = self.mdf();
        let mut year = i64::from(self.year) + months / 12;
        let mut month = i64::from(mdf.month()) + months % 12;
        if month > 12 {
            month -= 12;
            year += 1;
        } else if month < 1 {
            month += 12;
            year -= 1;
        }

        let year = i32::try_from(year).map_err(|_| Error::year_out_of_range())?;
        let first = Mdf::new(month as u32, 1, YearFlags::from_year(year))
            .ok_or(Error::invalid(Component::Month, 1, 12))?;
        let day = mdf.day().min(first.days_in_month());
        GameClockDate::from_ymd(year, first.month(), day)
    }

    /// Makes a new `GameClockDate` for the next calendar date.
    ///
    /// Returns `None` when `self` is [`GameClockDate::MAX`].
    #[inline]
    pub fn succ_opt(&self) -> Option<GameClockDate> {
        self.checked_add_days(1).ok()
    }

    /// Makes a new `GameClockDate` for the previous calendar date.
    ///
    /// Returns `None` when `self` is [`GameClockDate::MIN`].
    #[inline]
    pub fn pred_opt(&self) -> Option<GameClockDate> {
        self.checked_add_days(-1).ok()
    }

    /// Subtracts another `GameClockDate` from the current date.
    /// Returns a `GameClockDuration` of integral numbers of days.
    ///
    /// This cannot fail: the distance between [`GameClockDate::MIN`] and
    /// [`GameClockDate::MAX`] is representable.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{GameClockDate, GameClockDuration};
    ///
    /// let from_ymd = GameClockDate::from_ymd;
    /// let since = GameClockDate::signed_duration_since;
    ///
    /// assert_eq!(since(from_ymd(2014, 1, 1)?, from_ymd(2013, 1, 1)?), GameClockDuration::from_days(365)?);
    /// assert_eq!(since(from_ymd(2014, 1, 1)?, from_ymd(2010, 1, 1)?), GameClockDuration::from_days(365 * 4 + 1)?);
    /// assert_eq!(since(from_ymd(2014, 1, 1)?, from_ymd(2014, 1, 2)?), GameClockDuration::from_days(-1)?);
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn signed_duration_since(self, rhs: GameClockDate) -> GameClockDuration {
        GameClockDuration::from_days_trusted(self.days_since(rhs))
    }

    /// Whole days from `rhs` to `self`.
    fn days_since(self, rhs: GameClockDate) -> i64 {
        let (year1_div_400, year1_mod_400) = div_mod_euclid_i32(self.year, 400);
        let (year2_div_400, year2_mod_400) = div_mod_euclid_i32(rhs.year, 400);
        let cycle1 = i64::from(yo_to_cycle(year1_mod_400 as u32, self.of.ordinal()));
        let cycle2 = i64::from(yo_to_cycle(year2_mod_400 as u32, rhs.of.ordinal()));
        (i64::from(year1_div_400) - i64::from(year2_div_400)) * i64::from(DAYS_PER_CYCLE)
            + (cycle1 - cycle2)
    }

    /// Makes a new `GameClockDateTime` from the current date and given `GameClockTime`.
    #[inline]
    pub const fn and_time(&self, time: GameClockTime) -> GameClockDateTime {
        GameClockDateTime::new(*self, time)
    }

    /// Makes a new `GameClockDateTime` from the current date, hour, minute and second.
    ///
    /// # Errors
    ///
    /// Fails on an invalid hour, minute or second.
    #[inline]
    pub fn and_hms(&self, hour: u32, min: u32, sec: u32) -> Result<GameClockDateTime, Error> {
        GameClockTime::from_hms(hour, min, sec).map(|time| self.and_time(time))
    }
}

impl Datelike for GameClockDate {
    #[inline]
    fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    fn month(&self) -> u32 {
        self.mdf().month()
    }

    #[inline]
    fn day(&self) -> u32 {
        self.mdf().day()
    }

    #[inline]
    fn ordinal(&self) -> u32 {
        self.of.ordinal()
    }

    #[inline]
    fn weekday(&self) -> Weekday {
        self.of.weekday()
    }

    fn iso_week_date(&self) -> (i64, u32, Weekday) {
        let year = i64::from(self.year);
        let (rawweek, weekday) = self.of.isoweekdate_raw();
        if rawweek < 1 {
            // belongs to the last week of the previous year
            let (_, prev_mod_400) = div_mod_euclid_i64(year - 1, 400);
            (year - 1, YearFlags::from_year_mod_400(prev_mod_400 as u32).nisoweeks(), weekday)
        } else if rawweek > self.of.flags().nisoweeks() {
            (year + 1, 1, weekday)
        } else {
            (year, rawweek, weekday)
        }
    }

    /// Makes a new `GameClockDate` with the year number changed.
    ///
    /// # Errors
    ///
    /// Fails with a [`Component::Day`] error when the date is February 29 and `year` is not
    /// a leap year.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{Datelike, GameClockDate};
    ///
    /// let d = GameClockDate::from_ymd(2020, 2, 29)?;
    /// assert_eq!(d.with_year(2024)?, GameClockDate::from_ymd(2024, 2, 29)?);
    /// assert!(d.with_year(2023).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    fn with_year(&self, year: i32) -> Result<GameClockDate, Error> {
        // keep the month and day as is, only the flags change
        let mdf = self.mdf().with_flags(YearFlags::from_year(year));
        GameClockDate::from_mdf(year, mdf)
            .ok_or(Error::invalid(Component::Day, 1, i64::from(mdf.days_in_month())))
    }

    fn with_month(&self, month: u32) -> Result<GameClockDate, Error> {
        let mdf = self.mdf().with_month(month).ok_or(Error::invalid(Component::Month, 1, 12))?;
        GameClockDate::from_mdf(self.year, mdf)
            .ok_or(Error::invalid(Component::Day, 1, i64::from(mdf.days_in_month())))
    }

    fn with_day(&self, day: u32) -> Result<GameClockDate, Error> {
        let mdf = self.mdf();
        let day_error = Error::invalid(Component::Day, 1, i64::from(mdf.days_in_month()));
        let mdf = mdf.with_day(day).ok_or(day_error)?;
        GameClockDate::from_mdf(self.year, mdf).ok_or(day_error)
    }

    fn with_ordinal(&self, ordinal: u32) -> Result<GameClockDate, Error> {
        let flags = self.of.flags();
        let of = self
            .of
            .with_ordinal(ordinal)
            .ok_or(Error::invalid(Component::Ordinal, 1, i64::from(flags.ndays())))?;
        Ok(GameClockDate::from_of(self.year, of))
    }
}

/// An addition of the whole days of a `GameClockDuration` to `GameClockDate`.
///
/// # Panics
///
/// Panics if the resulting date would be out of range.
/// Consider using [`GameClockDate::checked_add_signed`] to get an `Err` instead.
impl Add<GameClockDuration> for GameClockDate {
    type Output = GameClockDate;

    #[inline]
    fn add(self, rhs: GameClockDuration) -> GameClockDate {
        self.checked_add_signed(rhs).expect("`GameClockDate + GameClockDuration` overflowed")
    }
}

impl AddAssign<GameClockDuration> for GameClockDate {
    #[inline]
    fn add_assign(&mut self, rhs: GameClockDuration) {
        *self = self.add(rhs);
    }
}

/// A subtraction of the whole days of a `GameClockDuration` from `GameClockDate`.
///
/// # Panics
///
/// Panics if the resulting date would be out of range.
/// Consider using [`GameClockDate::checked_sub_signed`] to get an `Err` instead.
impl Sub<GameClockDuration> for GameClockDate {
    type Output = GameClockDate;

    #[inline]
    fn sub(self, rhs: GameClockDuration) -> GameClockDate {
        self.checked_sub_signed(rhs).expect("`GameClockDate - GameClockDuration` overflowed")
    }
}

impl SubAssign<GameClockDuration> for GameClockDate {
    #[inline]
    fn sub_assign(&mut self, rhs: GameClockDuration) {
        *self = self.sub(rhs);
    }
}

/// Subtracts another `GameClockDate` from the current date.
/// Returns a `GameClockDuration` of integral numbers of days.
///
/// The implementation is a wrapper around [`GameClockDate::signed_duration_since`].
impl Sub<GameClockDate> for GameClockDate {
    type Output = GameClockDuration;

    #[inline]
    fn sub(self, rhs: GameClockDate) -> GameClockDuration {
        self.signed_duration_since(rhs)
    }
}

/// The `Debug` output is the same as the `Display` output.
///
/// Years outside of `-9999..=9999` are printed with an explicit sign and all of their digits.
impl fmt::Debug for GameClockDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The `Display` output of the date `d` is `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use gameclock::GameClockDate;
///
/// assert_eq!(format!("{}", GameClockDate::from_ymd(2015, 9, 5)?), "2015-09-05");
/// assert_eq!(format!("{}", GameClockDate::from_ymd(-5, 1, 1)?), "-0005-01-01");
/// assert_eq!(format!("{}", GameClockDate::from_ymd(12345, 1, 1)?), "+12345-01-01");
/// # Ok::<_, gameclock::Error>(())
/// ```
impl fmt::Display for GameClockDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; format::MAX_DATE_LEN];
        format::pad_canonical(self, &mut buf, f)
    }
}

/// Parsing a `str` into a `GameClockDate` accepts the `Display` output, plus an optional `+`
/// before four-digit years.
///
/// # Example
///
/// ```
/// use gameclock::GameClockDate;
///
/// let d = GameClockDate::from_ymd(2015, 9, 18)?;
/// assert_eq!("2015-09-18".parse::<GameClockDate>(), Ok(d));
/// assert_eq!("+2015-09-18".parse::<GameClockDate>(), Ok(d));
/// assert!("2015-9-18".parse::<GameClockDate>().is_err());
/// # Ok::<_, gameclock::Error>(())
/// ```
impl str::FromStr for GameClockDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<GameClockDate, ParseError> {
        format::parse::parse_date(s)
    }
}

impl CanonicalFormat for GameClockDate {
    #[inline]
    fn formatted_len(&self) -> usize {
        format::formatting::date_len(self.year)
    }

    #[inline]
    fn write_canonical(&self, buf: &mut [u8]) -> Option<usize> {
        let mdf = self.mdf();
        format::formatting::write_date(buf, self.year, mdf.month(), mdf.day())
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for GameClockDate {
    fn arbitrary(u: &mut arbitrary::Unstructured) -> arbitrary::Result<GameClockDate> {
        let year = u.arbitrary::<i32>()?;
        let ordinal = u.int_in_range(1..=YearFlags::from_year(year).ndays())?;
        GameClockDate::from_yo_opt(year, ordinal).ok_or(arbitrary::Error::IncorrectFormat)
    }
}
