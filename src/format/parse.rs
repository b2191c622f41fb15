//! Parsers for the canonical text forms.
//!
//! The scanning helpers take the remaining input and return it together with the parsed
//! value, so the date and time parsers compose into the date-time parser.

use super::{ParseResult, INVALID, OUT_OF_RANGE, TOO_LONG, TOO_SHORT};
use crate::duration::SECS_PER_DAY;
use crate::{GameClockDate, GameClockDateTime, GameClockDuration, GameClockTime};

/// Number of digits in `i32::MIN`.
const MAX_YEAR_DIGITS: usize = 10;

/// Consumes exactly `n` ASCII digits.
fn digits(s: &str, n: usize) -> ParseResult<(&str, u32)> {
    let bytes = s.as_bytes();
    let mut v = 0u32;
    for i in 0..n {
        match bytes.get(i) {
            Some(c @ b'0'..=b'9') => v = v * 10 + (c - b'0') as u32,
            Some(_) => return Err(INVALID),
            None => return Err(TOO_SHORT),
        }
    }
    Ok((&s[n..], v))
}

/// Consumes one or more ASCII digits into a `u64`.
fn number(s: &str) -> ParseResult<(&str, u64, usize)> {
    let upto = s.bytes().position(|c| !c.is_ascii_digit()).unwrap_or(s.len());
    if upto == 0 {
        return Err(if s.is_empty() { TOO_SHORT } else { INVALID });
    }
    let mut v = 0u64;
    for c in s[..upto].bytes() {
        v = v
            .checked_mul(10)
            .and_then(|v| v.checked_add((c - b'0') as u64))
            .ok_or(OUT_OF_RANGE)?;
    }
    Ok((&s[upto..], v, upto))
}

/// Consumes the single byte `c`.
fn char(s: &str, c: u8) -> ParseResult<&str> {
    match s.as_bytes().first() {
        Some(&b) if b == c => Ok(&s[1..]),
        Some(_) => Err(INVALID),
        None => Err(TOO_SHORT),
    }
}

/// Fails with `TooLong` unless all input was consumed.
fn end<T>(s: &str, value: T) -> ParseResult<T> {
    if s.is_empty() {
        Ok(value)
    } else {
        Err(TOO_LONG)
    }
}

/// Parses `YYYY`, `-YYYY` or `±Y..` with four to ten digits.
fn year(s: &str) -> ParseResult<(&str, i32)> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => {
            let (s, year) = digits(s, 4)?;
            return Ok((s, year as i32));
        }
    };
    let (s, abs, len) = number(rest)?;
    if len < 4 {
        return Err(if s.is_empty() { TOO_SHORT } else { INVALID });
    }
    if len > MAX_YEAR_DIGITS {
        return Err(OUT_OF_RANGE);
    }
    let year = i32::try_from(sign * abs as i64).map_err(|_| OUT_OF_RANGE)?;
    Ok((s, year))
}

fn date(s: &str) -> ParseResult<(&str, GameClockDate)> {
    let (s, year) = year(s)?;
    let s = char(s, b'-')?;
    let (s, month) = digits(s, 2)?;
    let s = char(s, b'-')?;
    let (s, day) = digits(s, 2)?;
    let date = GameClockDate::from_ymd_opt(year, month, day).ok_or(OUT_OF_RANGE)?;
    Ok((s, date))
}

fn hms(s: &str) -> ParseResult<(&str, u32, u32, u32)> {
    let (s, hour) = digits(s, 2)?;
    let s = char(s, b':')?;
    let (s, min) = digits(s, 2)?;
    let s = char(s, b':')?;
    let (s, sec) = digits(s, 2)?;
    Ok((s, hour, min, sec))
}

fn time(s: &str) -> ParseResult<(&str, GameClockTime)> {
    let (s, hour, min, sec) = hms(s)?;
    let time = GameClockTime::from_hms_opt(hour, min, sec).ok_or(OUT_OF_RANGE)?;
    Ok((s, time))
}

pub(crate) fn parse_date(s: &str) -> ParseResult<GameClockDate> {
    let (s, date) = date(s)?;
    end(s, date)
}

pub(crate) fn parse_time(s: &str) -> ParseResult<GameClockTime> {
    let (s, time) = time(s)?;
    end(s, time)
}

pub(crate) fn parse_datetime(s: &str) -> ParseResult<GameClockDateTime> {
    let (s, date) = date(s)?;
    let s = char(s, b' ')?;
    let (s, time) = time(s)?;
    end(s, GameClockDateTime::new(date, time))
}

pub(crate) fn parse_duration(s: &str) -> ParseResult<GameClockDuration> {
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    // `D:HH:MM:SS` has one more separator than `HH:MM:SS`
    let (s, days) = if s.bytes().filter(|&c| c == b':').count() == 3 {
        let (s, days, _) = number(s)?;
        (char(s, b':')?, days)
    } else {
        (s, 0)
    };
    let (s, hour, min, sec) = hms(s)?;
    if hour > 23 || min > 59 || sec > 59 {
        return Err(OUT_OF_RANGE);
    }
    let secs = days
        .checked_mul(SECS_PER_DAY as u64)
        .and_then(|v| v.checked_add((hour * 3600 + min * 60 + sec) as u64))
        .and_then(|v| i64::try_from(v).ok())
        .ok_or(OUT_OF_RANGE)?;
    let secs = if negative { -secs } else { secs };
    let duration = GameClockDuration::from_seconds_opt(secs).ok_or(OUT_OF_RANGE)?;
    end(s, duration)
}
