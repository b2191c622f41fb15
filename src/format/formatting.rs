//! Fixed-layout writers for the canonical text forms.
//!
//! Each writer takes the raw components, checks the buffer against the exact length and then
//! fills it with indexed writes. They return the number of bytes written, or `None` when the
//! buffer is too short, in which case nothing is written.

use crate::div::div_rem_u64;
use crate::duration::SECS_PER_DAY;
use crate::utils::{count_digits, write_digits, write_four_digits, write_two_digits};

/// Length of the canonical form of a date in `year`.
///
/// ```
/// use gameclock::format::formatting::date_len;
///
/// assert_eq!(date_len(2015), 10);
/// assert_eq!(date_len(-1), 11);
/// assert_eq!(date_len(10_000), 12);
/// assert_eq!(date_len(i32::MIN), 17);
/// ```
pub const fn date_len(year: i32) -> usize {
    match year {
        0..=9999 => 10,
        -9999..=-1 => 11,
        // negate through i64, `i32::MIN` has no positive counterpart
        _ => 1 + count_digits((year as i64).unsigned_abs()) + 6,
    }
}

/// Writes `year-month-day` in canonical form.
///
/// `month` and `day` are written as two digits each and are not validated.
///
/// ```
/// use gameclock::format::formatting::write_date;
///
/// let mut buf = [0u8; 17];
/// assert_eq!(write_date(&mut buf, -2147483648, 12, 31), Some(17));
/// assert_eq!(&buf, b"-2147483648-12-31");
/// assert_eq!(write_date(&mut buf[..9], 2015, 1, 1), None);
/// ```
pub fn write_date(buf: &mut [u8], year: i32, month: u32, day: u32) -> Option<usize> {
    let len = date_len(year);
    if buf.len() < len {
        return None;
    }
    let year_end = len - 6;
    match year {
        0..=9999 => write_four_digits(&mut buf[..4], year as u32),
        _ => {
            buf[0] = if year < 0 { b'-' } else { b'+' };
            write_digits(&mut buf[1..year_end], (year as i64).unsigned_abs());
        }
    }
    buf[year_end] = b'-';
    write_two_digits(&mut buf[year_end + 1..year_end + 3], month);
    buf[year_end + 3] = b'-';
    write_two_digits(&mut buf[year_end + 4..len], day);
    Some(len)
}

/// Writes `hour:min:sec` as `HH:MM:SS`.
///
/// ```
/// use gameclock::format::formatting::write_time;
///
/// let mut buf = [0u8; 8];
/// assert_eq!(write_time(&mut buf, 7, 8, 9), Some(8));
/// assert_eq!(&buf, b"07:08:09");
/// ```
pub fn write_time(buf: &mut [u8], hour: u32, min: u32, sec: u32) -> Option<usize> {
    if buf.len() < 8 {
        return None;
    }
    write_two_digits(&mut buf[..2], hour);
    buf[2] = b':';
    write_two_digits(&mut buf[3..5], min);
    buf[5] = b':';
    write_two_digits(&mut buf[6..8], sec);
    Some(8)
}

/// Length of the canonical form of a duration of `secs` seconds.
///
/// ```
/// use gameclock::format::formatting::duration_len;
///
/// assert_eq!(duration_len(0), 8);
/// assert_eq!(duration_len(-1), 9);
/// assert_eq!(duration_len(86_400), 10);
/// assert_eq!(duration_len(-86_400 * 365), 13);
/// ```
pub const fn duration_len(secs: i64) -> usize {
    let days = secs.unsigned_abs() / SECS_PER_DAY as u64;
    let sign = (secs < 0) as usize;
    if days == 0 {
        sign + 8
    } else {
        sign + count_digits(days) + 1 + 8
    }
}

/// Writes a duration of `secs` seconds as `[-][D:]HH:MM:SS`.
///
/// The day count is only written when it is non-zero.
///
/// ```
/// use gameclock::format::formatting::write_duration;
///
/// let mut buf = [0u8; 23];
/// assert_eq!(write_duration(&mut buf, -93_784), Some(11));
/// assert_eq!(&buf[..11], b"-1:02:03:04");
/// assert_eq!(write_duration(&mut buf, 59), Some(8));
/// assert_eq!(&buf[..8], b"00:00:59");
/// ```
pub fn write_duration(buf: &mut [u8], secs: i64) -> Option<usize> {
    let len = duration_len(secs);
    if buf.len() < len {
        return None;
    }
    let (days, rem) = div_rem_u64(secs.unsigned_abs(), SECS_PER_DAY as u64);
    let mut pos = 0;
    if secs < 0 {
        buf[0] = b'-';
        pos = 1;
    }
    if days > 0 {
        let end = len - 9;
        write_digits(&mut buf[pos..end], days);
        buf[end] = b':';
        pos = end + 1;
    }
    let rem = rem as u32;
    write_time(&mut buf[pos..len], rem / 3600, rem / 60 % 60, rem % 60)?;
    Some(len)
}
