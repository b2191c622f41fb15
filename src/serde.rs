//! Serialization in the canonical text form.
//!
//! Dates, times, date-times, durations and weekdays serialize as the same strings their
//! `Display` implementations produce, and deserialize through `FromStr`.
//!
//! ```
//! use gameclock::{GameClockDate, GameClockDuration};
//!
//! let date = GameClockDate::from_ymd(2016, 7, 8)?.and_hms(9, 10, 11)?;
//! assert_eq!(serde_json::to_string(&date).ok(), Some(r#""2016-07-08 09:10:11""#.to_owned()));
//!
//! let d: GameClockDuration = serde_json::from_str(r#""-1:00:00:00""#).unwrap();
//! assert_eq!(d, GameClockDuration::from_days(-1)?);
//! # Ok::<_, gameclock::Error>(())
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use ::serde::{de, ser};

use crate::{GameClockDate, GameClockDateTime, GameClockDuration, GameClockTime, Weekday};

struct CanonicalVisitor<T> {
    expecting: &'static str,
    marker: PhantomData<T>,
}

impl<'de, T> de::Visitor<'de> for CanonicalVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E>(self, value: &str) -> Result<T, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

macro_rules! canonical_serde {
    ($ty:ty, $expecting:literal) => {
        impl ser::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ser::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> de::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: de::Deserializer<'de>,
            {
                deserializer
                    .deserialize_str(CanonicalVisitor { expecting: $expecting, marker: PhantomData })
            }
        }
    };
}

canonical_serde!(GameClockDate, "a formatted date string");
canonical_serde!(GameClockTime, "a formatted time string");
canonical_serde!(GameClockDateTime, "a formatted date and time string");
canonical_serde!(GameClockDuration, "a formatted duration string");
canonical_serde!(Weekday, "a weekday name");
