//! The internal calendar representation.
//!
//! A date is stored as its year plus an [`Of`], the ordinal day paired with the year's
//! [`YearFlags`]. The flags carry everything else that depends on the year: its length,
//! the weekday it starts on and the number of ISO weeks it has. Month and day are derived
//! on demand through [`Mdf`] using two lookup tables keyed by packed "month, day, leap"
//! (`mdl`) and "ordinal, leap" (`ol`) indices.
//!
//! `Mdf` can hold impossible dates such as February 30; [`Mdf::valid`] or
//! [`Mdf::to_of`] must be consulted before treating it as a calendar date.

#![allow(unreachable_pub)]

use core::fmt;

use num_integer::div_rem;
#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

use crate::div::div_mod_euclid_i32;
use crate::Weekday;

/// Number of days in a 400-year Gregorian cycle.
pub(crate) const DAYS_PER_CYCLE: u32 = 146_097;

/// The year flags (aka the dominical letter).
///
/// There are 14 possible classes of year in the Gregorian calendar:
/// common and leap years starting with Monday through Sunday.
/// The flags are 4 bits `abbb`, where `a` is `1` for a common year and `bbb` is the
/// non-zero weekday class `c` such that January 1 falls on `(1 + c) % 7` (Monday = 0).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
pub struct YearFlags(u8);

const fn is_leap_mod_400(year_mod_400: usize) -> bool {
    year_mod_400 % 4 == 0 && (year_mod_400 % 25 != 0 || year_mod_400 % 16 == 0)
}

/// `YEAR_DELTAS[y]` is the number of leap years in `0..y` within one cycle.
const YEAR_DELTAS: &[u8; 401] = &{
    let mut deltas = [0u8; 401];
    let mut y = 0;
    while y < 400 {
        deltas[y + 1] = deltas[y] + is_leap_mod_400(y) as u8;
        y += 1;
    }
    deltas
};

const YEAR_TO_FLAGS: &[YearFlags; 400] = &{
    let mut flags = [YearFlags(0); 400];
    let mut y = 0;
    while y < 400 {
        // January 1 of year 0 is a Saturday.
        let jan1 = (5 + 365 * y + YEAR_DELTAS[y] as usize) % 7;
        let class = match (jan1 + 6) % 7 {
            0 => 7,
            c => c,
        };
        let common = if is_leap_mod_400(y) { 0 } else { 0b1000 };
        flags[y] = YearFlags((common | class) as u8);
        y += 1;
    }
    flags
};

/// Splits a day number inside one cycle into `(year_mod_400, ordinal)`.
pub(crate) fn cycle_to_yo(cycle: u32) -> (u32, u32) {
    debug_assert!(cycle < DAYS_PER_CYCLE);
    let (mut year_mod_400, mut ordinal0) = div_rem(cycle, 365);
    let delta = u32::from(YEAR_DELTAS[year_mod_400 as usize]);
    if ordinal0 < delta {
        year_mod_400 -= 1;
        ordinal0 += 365 - u32::from(YEAR_DELTAS[year_mod_400 as usize]);
    } else {
        ordinal0 -= delta;
    }
    (year_mod_400, ordinal0 + 1)
}

/// Day number inside one cycle of the given `year_mod_400` and 1-based ordinal.
pub(crate) const fn yo_to_cycle(year_mod_400: u32, ordinal: u32) -> u32 {
    year_mod_400 * 365 + YEAR_DELTAS[year_mod_400 as usize] as u32 + ordinal - 1
}

impl YearFlags {
    /// Flags of `year`, read from the 400-year table.
    #[inline]
    pub const fn from_year(year: i32) -> YearFlags {
        let (_, year_mod_400) = div_mod_euclid_i32(year, 400);
        YearFlags::from_year_mod_400(year_mod_400 as u32)
    }

    #[inline]
    pub(crate) const fn from_year_mod_400(year_mod_400: u32) -> YearFlags {
        YEAR_TO_FLAGS[year_mod_400 as usize]
    }

    #[inline]
    pub(crate) const fn is_leap(&self) -> bool {
        self.0 & 0b1000 == 0
    }

    /// The low bit of the table indices: `1` for a common year.
    #[inline]
    const fn common_bit(&self) -> usize {
        (self.0 >> 3) as usize
    }

    /// Number of days in the year, 365 or 366.
    #[inline]
    pub(crate) const fn ndays(&self) -> u32 {
        366 - (self.0 >> 3) as u32
    }

    /// Offset from the ordinal to the ISO week ordinal, in `3..=9`.
    #[inline]
    pub(crate) const fn isoweek_delta(&self) -> u32 {
        let delta = (self.0 & 0b0111) as u32;
        if delta < 3 {
            delta + 7
        } else {
            delta
        }
    }

    /// Number of ISO weeks in the year, 52 or 53.
    #[inline]
    pub(crate) const fn nisoweeks(&self) -> u32 {
        52 + ((0b0000_0100_0000_0110 >> self.0 as usize) & 1)
    }
}

impl fmt::Debug for YearFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const LETTERS: [&str; 8] = ["?", "E", "D", "C", "B", "A", "G", "F"];
        let class = (self.0 & 0b0111) as usize;
        if self.is_leap() {
            // A leap year switches letter after February.
            let next = if class == 7 { 1 } else { class + 1 };
            write!(f, "{}{}", LETTERS[class], LETTERS[next])
        } else {
            f.write_str(LETTERS[class])
        }
    }
}

const MAX_OL: usize = 366 << 1;
const MAX_MDL: usize = (12 << 6) | (31 << 1) | 1;

/// Marks a `mdl` index that is not a calendar date.
const XX: i8 = i8::MIN;

const DAYS_IN_MONTH_LEAP: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days before the first of each month in a common year.
const CUMULATIVE_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

#[inline]
const fn clamp(value: u32, min: u32, max: u32) -> u32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// `ol = mdl - MDL_TO_OL[mdl]`, or `XX` for impossible month and day combinations.
const MDL_TO_OL: &[i8; MAX_MDL + 1] = &{
    let mut table = [XX; MAX_MDL + 1];
    let mut common = 0;
    while common < 2 {
        let mut ordinal = 0;
        let mut month = 1;
        while month <= 12 {
            let len = if month == 2 && common == 1 { 28 } else { DAYS_IN_MONTH_LEAP[month - 1] };
            let mut day = 1;
            while day <= len as usize {
                ordinal += 1;
                let mdl = (month << 6) | (day << 1) | common;
                let ol = (ordinal << 1) | common;
                table[mdl] = (mdl - ol) as i8;
                day += 1;
            }
            month += 1;
        }
        common += 1;
    }
    table
};

/// `mdl = ol + OL_TO_MDL[ol]`.
const OL_TO_MDL: &[u8; MAX_OL + 1] = &{
    let mut table = [0u8; MAX_OL + 1];
    let mut mdl = 0;
    while mdl <= MAX_MDL {
        let delta = MDL_TO_OL[mdl];
        if delta != XX {
            table[mdl - delta as usize] = delta as u8;
        }
        mdl += 1;
    }
    table
};

/// Ordinal day of the year together with the year flags.
///
/// Only produced by [`Of::new`], [`Of::from_month_day_clamped`] and [`Mdf::to_of`], so the ordinal always fits the year.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
pub(crate) struct Of {
    ordinal: u32,
    flags: YearFlags,
}

impl Of {
    #[inline]
    pub(crate) const fn new(ordinal: u32, flags: YearFlags) -> Option<Of> {
        if ordinal >= 1 && ordinal <= flags.ndays() {
            Some(Of { ordinal, flags })
        } else {
            None
        }
    }

    /// Clamps the month to `1..=12` and the day to the length of that month.
    #[inline]
    pub(crate) const fn from_month_day_clamped(month: u32, day: u32, flags: YearFlags) -> Of {
        let month = clamp(month, 1, 12);
        let day = clamp(day, 1, Mdf { month, day: 1, flags }.days_in_month());
        let leap_day = (month > 2 && flags.is_leap()) as u32;
        Of { ordinal: CUMULATIVE_DAYS[month as usize - 1] + leap_day + day, flags }
    }

    #[inline]
    const fn ol(&self) -> usize {
        ((self.ordinal as usize) << 1) | self.flags.common_bit()
    }

    #[inline]
    pub(crate) const fn ordinal(&self) -> u32 {
        self.ordinal
    }

    #[inline]
    pub(crate) const fn flags(&self) -> YearFlags {
        self.flags
    }

    #[inline]
    pub(crate) const fn with_ordinal(&self, ordinal: u32) -> Option<Of> {
        Of::new(ordinal, self.flags)
    }

    #[inline]
    pub(crate) const fn weekday(&self) -> Weekday {
        Weekday::from_days_from_monday(self.ordinal + (self.flags.0 & 0b0111) as u32)
    }

    /// ISO week number (possibly 0 or one past the year's last week) and weekday.
    #[inline]
    pub(crate) const fn isoweekdate_raw(&self) -> (u32, Weekday) {
        let weekord = self.ordinal + self.flags.isoweek_delta();
        (weekord / 7, Weekday::from_days_from_monday(weekord % 7))
    }

    #[inline]
    pub(crate) const fn to_mdf(self) -> Mdf {
        let mdl = self.ol() + OL_TO_MDL[self.ol()] as usize;
        Mdf { month: (mdl >> 6) as u32, day: ((mdl >> 1) & 0b1_1111) as u32, flags: self.flags }
    }
}

impl fmt::Debug for Of {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Of({} /*{:?}*/)", self.ordinal, self.flags)
    }
}

/// Month, day of month and year flags.
///
/// The month is always in `1..=12` and the day in `1..=31`, but the combination may
/// not exist in the year.
#[derive(PartialEq, Eq, Hash, Copy, Clone)]
pub(crate) struct Mdf {
    month: u32,
    day: u32,
    flags: YearFlags,
}

impl Mdf {
    #[inline]
    pub(crate) const fn new(month: u32, day: u32, flags: YearFlags) -> Option<Mdf> {
        if month < 1 || month > 12 || day < 1 || day > 31 {
            return None;
        }
        Some(Mdf { month, day, flags })
    }

    #[inline]
    const fn mdl(&self) -> usize {
        ((self.month as usize) << 6) | ((self.day as usize) << 1) | self.flags.common_bit()
    }

    /// Whether the month and day exist in a year with these flags.
    #[inline]
    pub(crate) const fn valid(&self) -> bool {
        MDL_TO_OL[self.mdl()] != XX
    }

    #[inline]
    pub(crate) const fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub(crate) const fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub(crate) const fn with_month(&self, month: u32) -> Option<Mdf> {
        Mdf::new(month, self.day, self.flags)
    }

    #[inline]
    pub(crate) const fn with_day(&self, day: u32) -> Option<Mdf> {
        Mdf::new(self.month, day, self.flags)
    }

    #[inline]
    pub(crate) const fn with_flags(&self, flags: YearFlags) -> Mdf {
        Mdf { month: self.month, day: self.day, flags }
    }

    /// Number of days in this month of this year.
    #[inline]
    pub(crate) const fn days_in_month(&self) -> u32 {
        if self.month == 2 && !self.flags.is_leap() {
            28
        } else {
            DAYS_IN_MONTH_LEAP[self.month as usize - 1]
        }
    }

    #[inline]
    pub(crate) const fn to_of(self) -> Option<Of> {
        let delta = MDL_TO_OL[self.mdl()];
        if delta == XX {
            return None;
        }
        let ol = self.mdl() - delta as usize;
        Some(Of { ordinal: (ol >> 1) as u32, flags: self.flags })
    }
}

impl fmt::Debug for Mdf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Mdf({}-{} /*{:?}*/)", self.month, self.day, self.flags)
    }
}
