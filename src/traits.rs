use crate::{Error, Weekday};

/// The common set of methods for date component.
///
/// Every `with_*` method validates the complete result and never produces an impossible
/// date; the error names the rejected component and the range that applied.
pub trait Datelike: Sized {
    /// Returns the year number in the proleptic Gregorian calendar.
    fn year(&self) -> i32;

    /// Returns the absolute year number starting from 1 with a boolean flag,
    /// which is false when the year predates the epoch (BCE/BC) and true otherwise (CE/AD).
    #[inline]
    fn year_ce(&self) -> (bool, u32) {
        let year = self.year();
        if year < 1 {
            (false, (1 - i64::from(year)) as u32)
        } else {
            (true, year as u32)
        }
    }

    /// Returns the month number starting from 1.
    ///
    /// The return value ranges from 1 to 12.
    fn month(&self) -> u32;

    /// Returns the month number starting from 0.
    ///
    /// The return value ranges from 0 to 11.
    #[inline]
    fn month0(&self) -> u32 {
        self.month() - 1
    }

    /// Returns the day of month starting from 1.
    ///
    /// The return value ranges from 1 to 31. (The last day of month differs by months.)
    fn day(&self) -> u32;

    /// Returns the day of month starting from 0.
    #[inline]
    fn day0(&self) -> u32 {
        self.day() - 1
    }

    /// Returns the day of year starting from 1.
    ///
    /// The return value ranges from 1 to 366. (The last day of year differs by years.)
    fn ordinal(&self) -> u32;

    /// Returns the day of year starting from 0.
    #[inline]
    fn ordinal0(&self) -> u32 {
        self.ordinal() - 1
    }

    /// Returns the day of week.
    fn weekday(&self) -> Weekday;

    /// Returns the ISO 8601 day of week, Monday = 1 through Sunday = 7.
    #[inline]
    fn iso_weekday(&self) -> u32 {
        self.weekday().number_from_monday()
    }

    /// Returns the ISO week date: the ISO year, the week number and the day of week.
    ///
    /// The ISO year can differ from [`Datelike::year`] for dates in the first or last few
    /// days of January and December. It is an `i64` because the first days of `i32::MIN` and
    /// the last days of `i32::MAX` belong to ISO years outside of the `i32` range.
    fn iso_week_date(&self) -> (i64, u32, Weekday);

    /// Makes a new value with the year number changed, keeping month and day.
    ///
    /// # Errors
    ///
    /// Fails when the date is February 29 and `year` is not a leap year.
    fn with_year(&self, year: i32) -> Result<Self, Error>;

    /// Makes a new value with the month number (starting from 1) changed.
    ///
    /// # Errors
    ///
    /// Fails when `month` is not in `1..=12` or the day does not exist in that month.
    fn with_month(&self, month: u32) -> Result<Self, Error>;

    /// Makes a new value with the month number (starting from 0) changed.
    ///
    /// # Errors
    ///
    /// Fails when `month0` is not in `0..=11` or the day does not exist in that month.
    #[inline]
    fn with_month0(&self, month0: u32) -> Result<Self, Error> {
        self.with_month(month0.saturating_add(1))
    }

    /// Makes a new value with the day of month (starting from 1) changed.
    ///
    /// # Errors
    ///
    /// Fails when `day` does not exist in the current month.
    fn with_day(&self, day: u32) -> Result<Self, Error>;

    /// Makes a new value with the day of month (starting from 0) changed.
    #[inline]
    fn with_day0(&self, day0: u32) -> Result<Self, Error> {
        self.with_day(day0.saturating_add(1))
    }

    /// Makes a new value with the day of year (starting from 1) changed.
    ///
    /// # Errors
    ///
    /// Fails when `ordinal` is not in `1..=365` (or `1..=366` in a leap year).
    fn with_ordinal(&self, ordinal: u32) -> Result<Self, Error>;

    /// Makes a new value with the day of year (starting from 0) changed.
    #[inline]
    fn with_ordinal0(&self, ordinal0: u32) -> Result<Self, Error> {
        self.with_ordinal(ordinal0.saturating_add(1))
    }

    /// Returns the number of days since January 1, 1 (Day 1) in the proleptic Gregorian calendar.
    ///
    /// The result is an `i64` because the `i32` year range spans about 1.5 trillion days.
    fn num_days_from_ce(&self) -> i64 {
        let mut year = i64::from(self.year()) - 1;
        let mut ndays = 0;
        if year < 0 {
            let excess = 1 + (-year) / 400;
            year += excess * 400;
            ndays -= excess * 146_097;
        }
        let div_100 = year / 100;
        ndays += ((year * 1461) >> 2) - div_100 + (div_100 >> 2);
        ndays + i64::from(self.ordinal())
    }
}

/// The common set of methods for time component.
pub trait Timelike: Sized {
    /// Returns the hour number from 0 to 23.
    fn hour(&self) -> u32;

    /// Returns the hour number from 1 to 12 with a boolean flag,
    /// which is false for AM and true for PM.
    #[inline]
    fn hour12(&self) -> (bool, u32) {
        let hour = self.hour();
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        (hour >= 12, hour12)
    }

    /// Returns the minute number from 0 to 59.
    fn minute(&self) -> u32;

    /// Returns the second number from 0 to 59.
    fn second(&self) -> u32;

    /// Makes a new value with the hour number changed.
    ///
    /// # Errors
    ///
    /// Fails when `hour` is not in `0..=23`.
    fn with_hour(&self, hour: u32) -> Result<Self, Error>;

    /// Makes a new value with the minute number changed.
    ///
    /// # Errors
    ///
    /// Fails when `min` is not in `0..=59`.
    fn with_minute(&self, min: u32) -> Result<Self, Error>;

    /// Makes a new value with the second number changed.
    ///
    /// # Errors
    ///
    /// Fails when `sec` is not in `0..=59`.
    fn with_second(&self, sec: u32) -> Result<Self, Error>;

    /// Returns the number of seconds past the last midnight.
    #[inline]
    fn num_seconds_from_midnight(&self) -> u32 {
        self.hour() * 3600 + self.minute() * 60 + self.second()
    }
}
