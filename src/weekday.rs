use core::{fmt, str};

#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

use crate::error::{Component, Error};
use crate::format::{ParseError, ParseErrorKind};

/// The day of week.
///
/// There is no `Ord` implementation because a week has no canonical first day; use
/// [`Weekday::num_days_from_monday`] or [`Weekday::num_days_from_sunday`] to order days.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Weekday {
    /// Monday.
    Mon = 0,
    /// Tuesday.
    Tue = 1,
    /// Wednesday.
    Wed = 2,
    /// Thursday.
    Thu = 3,
    /// Friday.
    Fri = 4,
    /// Saturday.
    Sat = 5,
    /// Sunday.
    Sun = 6,
}

const SHORT_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const LONG_NAMES: [&str; 7] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Day `n` counted from Monday = 0, wrapping every 7 days.
    #[inline]
    pub(crate) const fn from_days_from_monday(n: u32) -> Weekday {
        Weekday::ALL[(n % 7) as usize]
    }

    /// Makes a weekday from its ISO 8601 number, Monday = 1 through Sunday = 7.
    ///
    /// # Errors
    ///
    /// Returns an [`Component::IsoWeekday`] error when `n` is not in `1..=7`.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::Weekday;
    ///
    /// assert_eq!(Weekday::from_iso_number(1)?, Weekday::Mon);
    /// assert_eq!(Weekday::from_iso_number(7)?, Weekday::Sun);
    /// assert!(Weekday::from_iso_number(0).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub const fn from_iso_number(n: u32) -> Result<Weekday, Error> {
        match n {
            1..=7 => Ok(Weekday::from_days_from_monday(n - 1)),
            _ => Err(Error::invalid(Component::IsoWeekday, 1, 7)),
        }
    }

    /// The next day in the week; Sunday is followed by Monday.
    #[inline]
    pub const fn succ(&self) -> Weekday {
        Weekday::from_days_from_monday(*self as u32 + 1)
    }

    /// The previous day in the week; Monday is preceded by Sunday.
    #[inline]
    pub const fn pred(&self) -> Weekday {
        Weekday::from_days_from_monday(*self as u32 + 6)
    }

    /// ISO 8601 weekday number, Monday = 1 through Sunday = 7.
    #[inline]
    pub const fn number_from_monday(&self) -> u32 {
        self.days_since(Weekday::Mon) + 1
    }

    /// Sunday = 1 through Saturday = 7.
    #[inline]
    pub const fn number_from_sunday(&self) -> u32 {
        self.days_since(Weekday::Sun) + 1
    }

    /// Monday = 0 through Sunday = 6.
    #[inline]
    pub const fn num_days_from_monday(&self) -> u32 {
        self.days_since(Weekday::Mon)
    }

    /// Sunday = 0 through Saturday = 6.
    #[inline]
    pub const fn num_days_from_sunday(&self) -> u32 {
        self.days_since(Weekday::Sun)
    }

    /// Number of days from the most recent `other` (inclusive) up to `self`, in `0..7`.
    ///
    /// ```
    /// use gameclock::Weekday;
    ///
    /// assert_eq!(Weekday::Wed.days_since(Weekday::Mon), 2);
    /// assert_eq!(Weekday::Mon.days_since(Weekday::Wed), 5);
    /// assert_eq!(Weekday::Fri.days_since(Weekday::Fri), 0);
    /// ```
    #[inline]
    pub const fn days_since(&self, other: Weekday) -> u32 {
        (*self as u32 + 7 - other as u32) % 7
    }

    /// Three-letter English abbreviation, e.g. `"Mon"`.
    #[inline]
    pub const fn short_name(&self) -> &'static str {
        SHORT_NAMES[*self as usize]
    }

    /// Full English name, e.g. `"Monday"`.
    #[inline]
    pub const fn long_name(&self) -> &'static str {
        LONG_NAMES[*self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.short_name())
    }
}

/// Any weekday can be represented as an integer from 0 to 6, which equals
/// [`Weekday::num_days_from_monday`].
impl num_traits::FromPrimitive for Weekday {
    #[inline]
    fn from_i64(n: i64) -> Option<Weekday> {
        Weekday::ALL.get(usize::try_from(n).ok()?).copied()
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Weekday> {
        Weekday::ALL.get(usize::try_from(n).ok()?).copied()
    }
}

/// Parsing accepts the short or the long English name in any ASCII case.
impl str::FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Weekday, ParseError> {
        if s.len() < 3 {
            return Err(ParseError(ParseErrorKind::TooShort));
        }
        Weekday::ALL
            .iter()
            .copied()
            .find(|day| {
                s.eq_ignore_ascii_case(day.short_name()) || s.eq_ignore_ascii_case(day.long_name())
            })
            .ok_or(ParseError(ParseErrorKind::Invalid))
    }
}
