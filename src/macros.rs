//! Macros for easy initialization of date and time values.

/// Create a [`GameClockDate`](crate::GameClockDate) with a statically known value.
///
/// Supported formats are 'year-month-day' and 'year-ordinal'.
///
/// The input is checked at compile time.
///
/// Note: rustfmt wants to add spaces around `-` in this macro.
/// For nice formatting use `#[rustfmt::skip::macros(date)]`, or use as `date! {2023-09-08}`
///
/// # Examples
/// ```
/// use gameclock::date;
///
/// assert_eq!(date!(2023-09-08), date!(2023-251));
/// ```
#[macro_export]
macro_rules! date {
    ($y:literal-$m:literal-$d:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const DATE: $crate::GameClockDate =
                match $crate::GameClockDate::from_ymd_opt($y, $m, $d) {
                    Some(d) => d,
                    None => panic!("invalid calendar date"),
                };
            DATE
        }
    }};
    ($y:literal-$o:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const DATE: $crate::GameClockDate = match $crate::GameClockDate::from_yo_opt($y, $o) {
                Some(d) => d,
                None => panic!("invalid ordinal date"),
            };
            DATE
        }
    }};
}

/// Create a [`GameClockTime`](crate::GameClockTime) with a statically known value.
///
/// Supported format is 'hour:minute:second'.
///
/// The input is checked at compile time.
///
/// # Examples
/// ```
/// use gameclock::time;
///
/// assert_eq!(time!(7:03:59).to_string(), "07:03:59");
/// ```
#[macro_export]
macro_rules! time {
    ($h:literal:$m:literal:$s:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const TIME: $crate::GameClockTime = match $crate::GameClockTime::from_hms_opt($h, $m, $s)
            {
                Some(t) => t,
                None => panic!("invalid time"),
            };
            TIME
        }
    }};
}

/// Create a [`GameClockDateTime`](crate::GameClockDateTime) with a statically known value.
///
/// The input is checked at compile time.
///
/// # Examples
/// ```
/// use gameclock::datetime;
///
/// assert_eq!(datetime!(2023-09-08 7:03:59).to_string(), "2023-09-08 07:03:59");
/// ```
#[macro_export]
macro_rules! datetime {
    ($y:literal-$m:literal-$d:literal $h:literal:$min:literal:$s:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const DATETIME: $crate::GameClockDateTime =
                $crate::GameClockDateTime::new($crate::date!($y - $m - $d), $crate::time!($h:$min:$s));
            DATETIME
        }
    }};
}

#[cfg(test)]
#[rustfmt::skip::macros(date, datetime)]
mod tests {
    use crate::{GameClockDate, GameClockDateTime, GameClockTime};

    #[test]
    fn init_macros() {
        assert_eq!(date!(2023-09-08), GameClockDate::from_ymd_opt(2023, 9, 8).unwrap());
        assert_eq!(date!(2023-253), GameClockDate::from_yo_opt(2023, 253).unwrap());
        assert_eq!(time!(7:03:25), GameClockTime::from_hms_opt(7, 3, 25).unwrap());
        assert_eq!(
            datetime!(2023-09-08 7:03:25),
            GameClockDate::from_ymd_opt(2023, 9, 8).unwrap().and_hms(7, 3, 25).unwrap()
        );
    }

    #[test]
    fn macros_are_const() {
        const DATE: GameClockDate = date!(2023-09-08);
        const TIME: GameClockTime = time!(7:03:25);
        const DATETIME: GameClockDateTime = datetime!(2023-09-08 7:03:25);
        assert_eq!(DATETIME, DATE.and_time(TIME));
    }
}
