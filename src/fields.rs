//! Plain calendar fields, as exchanged with a platform date-time or a running game clock.

use crate::error::Error;
use crate::{Datelike, GameClockDate, GameClockDateTime, GameClockTime, Timelike};

/// A date and time as six loose integer fields.
///
/// This is the shape external sources hand out: nothing guarantees the fields form a real
/// calendar date. Convert strictly with [`TryFrom`], or leniently with
/// [`DateTimeFields::normalize`].
///
/// # Example
///
/// ```
/// use gameclock::{DateTimeFields, GameClockDate, GameClockDateTime};
///
/// let fields = DateTimeFields { year: 2024, month: 2, day: 29, hour: 13, minute: 5, second: 0 };
/// let dt = GameClockDateTime::try_from(fields)?;
/// assert_eq!(dt, GameClockDate::from_ymd(2024, 2, 29)?.and_hms(13, 5, 0)?);
/// assert_eq!(DateTimeFields::from(dt), fields);
/// # Ok::<_, gameclock::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeFields {
    /// Calendar year.
    pub year: i32,
    /// Month of the year, starting at 1.
    pub month: i32,
    /// Day of the month, starting at 1.
    pub day: i32,
    /// Hour of the day.
    pub hour: i32,
    /// Minute of the hour.
    pub minute: i32,
    /// Second of the minute.
    pub second: i32,
}

/// Maps negative fields to a value every validating constructor rejects.
fn unsigned(v: i32) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

fn clamp_field(name: &'static str, value: i32, min: i32, max: i32) -> u32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        #[cfg(feature = "log")]
        log::warn!("Found {name} {value} out of {min}..={max}, using {clamped}");
        #[cfg(not(feature = "log"))]
        let _ = name;
    }
    clamped as u32
}

impl DateTimeFields {
    /// The fields of `date` at midnight.
    pub fn from_date(date: GameClockDate) -> DateTimeFields {
        DateTimeFields::from(date.and_time(GameClockTime::MIDNIGHT))
    }

    /// The fields of `time` on 0001-01-01.
    pub fn from_time(time: GameClockTime) -> DateTimeFields {
        DateTimeFields {
            year: 1,
            month: 1,
            day: 1,
            hour: time.hour() as i32,
            minute: time.minute() as i32,
            second: time.second() as i32,
        }
    }

    /// Converts the year, month and day fields.
    ///
    /// # Errors
    ///
    /// Fails on an invalid month, or a day that does not exist in that month.
    pub fn to_date(&self) -> Result<GameClockDate, Error> {
        GameClockDate::from_ymd(self.year, unsigned(self.month), unsigned(self.day))
    }

    /// Converts the hour, minute and second fields.
    ///
    /// # Errors
    ///
    /// Fails on the first field out of its range, checking the hour first.
    pub fn to_time(&self) -> Result<GameClockTime, Error> {
        GameClockTime::from_hms(unsigned(self.hour), unsigned(self.minute), unsigned(self.second))
    }

    /// Makes a valid date and time out of possibly out-of-range fields.
    ///
    /// Each field is clamped into its range: the month to `1..=12`, the day to the length of
    /// the clamped month, the hour to `0..=23` and minutes and seconds to `0..=59`. Every
    /// year is valid and is kept as is. With the `log` feature each repaired field is logged
    /// as a warning.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::{DateTimeFields, GameClockDate};
    ///
    /// let raw = DateTimeFields { year: 2023, month: 2, day: 31, hour: 24, minute: -1, second: 59 };
    /// assert_eq!(raw.normalize(), GameClockDate::from_ymd(2023, 2, 28)?.and_hms(23, 0, 59)?);
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn normalize(self) -> GameClockDateTime {
        let month = clamp_field("month", self.month, 1, 12);
        let month_len = GameClockDate::from_ymd_clamped(self.year, month, 1).days_in_month();
        let day = clamp_field("day", self.day, 1, month_len as i32);
        let date = GameClockDate::from_ymd_clamped(self.year, month, day);

        let hour = clamp_field("hour", self.hour, 0, 23);
        let minute = clamp_field("minute", self.minute, 0, 59);
        let second = clamp_field("second", self.second, 0, 59);
        let time = GameClockTime::from_hms_clamped(hour, minute, second);

        let dt = date.and_time(time);
        #[cfg(feature = "log")]
        if DateTimeFields::from(dt) != self {
            log::debug!("Normalized {:?} to {}", self, dt);
        }
        dt
    }
}

impl From<GameClockDateTime> for DateTimeFields {
    fn from(dt: GameClockDateTime) -> DateTimeFields {
        DateTimeFields {
            year: dt.year(),
            month: dt.month() as i32,
            day: dt.day() as i32,
            hour: dt.hour() as i32,
            minute: dt.minute() as i32,
            second: dt.second() as i32,
        }
    }
}

/// Strict conversion that reports the first invalid field, date fields first.
impl TryFrom<DateTimeFields> for GameClockDateTime {
    type Error = Error;

    fn try_from(fields: DateTimeFields) -> Result<GameClockDateTime, Error> {
        Ok(fields.to_date()?.and_time(fields.to_time()?))
    }
}
