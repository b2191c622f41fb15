use core::fmt;

/// A calendar or clock field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Calendar year.
    Year,
    /// Month of the year.
    Month,
    /// Day of the month.
    Day,
    /// Day of the year.
    Ordinal,
    /// ISO 8601 week number.
    IsoWeek,
    /// ISO 8601 day of the week (1 = Monday).
    IsoWeekday,
    /// Hour of the day.
    Hour,
    /// Minute of the hour.
    Minute,
    /// Second of the minute.
    Second,
    /// Seconds elapsed since midnight.
    SecondsFromMidnight,
    /// A whole-second duration.
    Duration,
}

impl Component {
    const fn name(self) -> &'static str {
        match self {
            Component::Year => "year",
            Component::Month => "month",
            Component::Day => "day",
            Component::Ordinal => "ordinal",
            Component::IsoWeek => "ISO week",
            Component::IsoWeekday => "ISO weekday",
            Component::Hour => "hour",
            Component::Minute => "minute",
            Component::Second => "second",
            Component::SecondsFromMidnight => "seconds from midnight",
            Component::Duration => "duration",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The reason an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A component was outside of `min..=max`.
    ///
    /// The range is the one that applied to this particular call, so an invalid day in
    /// February 2023 reports `1..=28`.
    InvalidComponent {
        /// The offending component.
        component: Component,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// A duration computation left `GameClockDuration::MIN..=GameClockDuration::MAX`.
    DurationTooLong,
}

/// The error type for every fallible constructor and arithmetic operation in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Internal constructor.
    #[inline]
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Makes an [`ErrorKind::InvalidComponent`] error.
    #[inline]
    pub(crate) const fn invalid(component: Component, min: i64, max: i64) -> Self {
        Self::new(ErrorKind::InvalidComponent { component, min, max })
    }

    /// A year left the `i32` range.
    #[inline]
    pub(crate) const fn year_out_of_range() -> Self {
        Self::invalid(Component::Year, i32::MIN as i64, i32::MAX as i64)
    }

    /// Makes an [`ErrorKind::DurationTooLong`] error.
    #[inline]
    pub(crate) const fn duration_too_long() -> Self {
        Self::new(ErrorKind::DurationTooLong)
    }

    /// Returns what went wrong.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the failing component, if the error is about one.
    pub const fn component(&self) -> Option<Component> {
        match self.kind {
            ErrorKind::InvalidComponent { component, .. } => Some(component),
            ErrorKind::DurationTooLong => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidComponent { component, min, max } => {
                write!(f, "invalid {}: expected {}..={}", component, min, max)
            }
            ErrorKind::DurationTooLong => write!(f, "duration too long"),
        }
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
