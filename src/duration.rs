//! Whole-second signed durations.

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use core::time::Duration as StdDuration;
use core::{fmt, str};

use num_traits::float::FloatCore;
#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

use crate::error::{Component, Error};
use crate::format::{self, CanonicalFormat, ParseError};

/// The number of seconds in a minute.
const SECS_PER_MINUTE: i64 = 60;
/// The number of seconds in an hour.
const SECS_PER_HOUR: i64 = 3600;
/// The number of seconds in a day.
pub(crate) const SECS_PER_DAY: i64 = 86_400;
/// The number of seconds in a week.
const SECS_PER_WEEK: i64 = 604_800;

/// Seconds from `GameClockDateTime::MIN` to `GameClockDateTime::MAX`.
const MAX_SECS: i64 = 135_536_076_801_503_999;

/// Largest magnitude a `f64` holds without losing integer precision.
const MAX_SAFE_F64: i64 = 1 << 53;

/// A signed number of whole seconds.
///
/// The range is exactly the distance between [`GameClockDateTime::MIN`] and
/// [`GameClockDateTime::MAX`] in either direction, so the difference of any two date-times
/// is representable and `-d` never overflows.
///
/// [`GameClockDateTime::MIN`]: crate::GameClockDateTime::MIN
/// [`GameClockDateTime::MAX`]: crate::GameClockDateTime::MAX
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "rkyv",
    derive(Archive, Deserialize, Serialize),
    archive(compare(PartialEq, PartialOrd)),
    archive_attr(derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash))
)]
pub struct GameClockDuration {
    secs: i64,
}

impl GameClockDuration {
    /// The most negative duration.
    pub const MIN: GameClockDuration = GameClockDuration { secs: -MAX_SECS };

    /// The most positive duration.
    pub const MAX: GameClockDuration = GameClockDuration { secs: MAX_SECS };

    /// A duration of zero seconds.
    pub const ZERO: GameClockDuration = GameClockDuration { secs: 0 };

    /// Wraps a second count that is known to be in range.
    #[inline]
    pub(crate) const fn from_secs_trusted(secs: i64) -> GameClockDuration {
        debug_assert!(secs >= -MAX_SECS && secs <= MAX_SECS);
        GameClockDuration { secs }
    }

    /// Wraps a day count that is known to be in range.
    #[inline]
    pub(crate) const fn from_days_trusted(days: i64) -> GameClockDuration {
        GameClockDuration::from_secs_trusted(days * SECS_PER_DAY)
    }

    #[inline]
    const fn new(secs: i64) -> Result<GameClockDuration, Error> {
        if secs < -MAX_SECS || secs > MAX_SECS {
            return Err(Error::duration_too_long());
        }
        Ok(GameClockDuration { secs })
    }

    /// `n` units of `secs_per_unit` seconds each, failing with the range that applies to `n`.
    const fn from_units(n: i64, secs_per_unit: i64) -> Result<GameClockDuration, Error> {
        let max = MAX_SECS / secs_per_unit;
        if n < -max || n > max {
            return Err(Error::invalid(Component::Duration, -max, max));
        }
        Ok(GameClockDuration { secs: n * secs_per_unit })
    }

    #[inline]
    const fn from_units_opt(n: i64, secs_per_unit: i64) -> Option<GameClockDuration> {
        match GameClockDuration::from_units(n, secs_per_unit) {
            Ok(d) => Some(d),
            Err(_) => None,
        }
    }

    /// Makes a new `GameClockDuration` with the given number of weeks.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Duration`] error with the accepted range of weeks when the
    /// duration is out of bounds.
    #[inline]
    pub const fn from_weeks(weeks: i64) -> Result<GameClockDuration, Error> {
        GameClockDuration::from_units(weeks, SECS_PER_WEEK)
    }

    /// Makes a new `GameClockDuration` with the given number of weeks, or `None` when out of
    /// bounds.
    #[inline]
    pub const fn from_weeks_opt(weeks: i64) -> Option<GameClockDuration> {
        GameClockDuration::from_units_opt(weeks, SECS_PER_WEEK)
    }

    /// Makes a new `GameClockDuration` with the given number of days.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Duration`] error with the accepted range of days when the
    /// duration is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::GameClockDuration;
    ///
    /// assert_eq!(GameClockDuration::from_days(2)?.num_seconds(), 172_800);
    /// assert!(GameClockDuration::from_days(i64::MAX).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    #[inline]
    pub const fn from_days(days: i64) -> Result<GameClockDuration, Error> {
        GameClockDuration::from_units(days, SECS_PER_DAY)
    }

    /// Makes a new `GameClockDuration` with the given number of days, or `None` when out of
    /// bounds.
    #[inline]
    pub const fn from_days_opt(days: i64) -> Option<GameClockDuration> {
        GameClockDuration::from_units_opt(days, SECS_PER_DAY)
    }

    /// Makes a new `GameClockDuration` with the given number of hours.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Duration`] error when the duration is out of bounds.
    #[inline]
    pub const fn from_hours(hours: i64) -> Result<GameClockDuration, Error> {
        GameClockDuration::from_units(hours, SECS_PER_HOUR)
    }

    /// Makes a new `GameClockDuration` with the given number of hours, or `None` when out of
    /// bounds.
    #[inline]
    pub const fn from_hours_opt(hours: i64) -> Option<GameClockDuration> {
        GameClockDuration::from_units_opt(hours, SECS_PER_HOUR)
    }

    /// Makes a new `GameClockDuration` with the given number of minutes.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Duration`] error when the duration is out of bounds.
    #[inline]
    pub const fn from_minutes(minutes: i64) -> Result<GameClockDuration, Error> {
        GameClockDuration::from_units(minutes, SECS_PER_MINUTE)
    }

    /// Makes a new `GameClockDuration` with the given number of minutes, or `None` when out
    /// of bounds.
    #[inline]
    pub const fn from_minutes_opt(minutes: i64) -> Option<GameClockDuration> {
        GameClockDuration::from_units_opt(minutes, SECS_PER_MINUTE)
    }

    /// Makes a new `GameClockDuration` with the given number of seconds.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Duration`] error when the duration is out of bounds.
    #[inline]
    pub const fn from_seconds(seconds: i64) -> Result<GameClockDuration, Error> {
        GameClockDuration::from_units(seconds, 1)
    }

    /// Makes a new `GameClockDuration` with the given number of seconds, or `None` when out
    /// of bounds.
    #[inline]
    pub const fn from_seconds_opt(seconds: i64) -> Option<GameClockDuration> {
        GameClockDuration::from_units_opt(seconds, 1)
    }

    /// Returns the total number of whole weeks in the duration.
    #[inline]
    pub const fn num_weeks(&self) -> i64 {
        self.secs / SECS_PER_WEEK
    }

    /// Returns the total number of whole days in the duration.
    #[inline]
    pub const fn num_days(&self) -> i64 {
        self.secs / SECS_PER_DAY
    }

    /// Returns the total number of whole hours in the duration.
    #[inline]
    pub const fn num_hours(&self) -> i64 {
        self.secs / SECS_PER_HOUR
    }

    /// Returns the total number of whole minutes in the duration.
    #[inline]
    pub const fn num_minutes(&self) -> i64 {
        self.secs / SECS_PER_MINUTE
    }

    /// Returns the total number of seconds in the duration.
    #[inline]
    pub const fn num_seconds(&self) -> i64 {
        self.secs
    }

    /// Returns `true` if the duration equals [`GameClockDuration::ZERO`].
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.secs == 0
    }

    /// Returns the duration as an absolute (non-negative) value.
    #[inline]
    pub const fn abs(&self) -> GameClockDuration {
        GameClockDuration { secs: self.secs.abs() }
    }

    /// Adds two durations.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DurationTooLong`](crate::ErrorKind::DurationTooLong) when the sum
    /// is out of bounds.
    #[inline]
    pub const fn checked_add(&self, rhs: &GameClockDuration) -> Result<GameClockDuration, Error> {
        // both operands are far from the i64 limits
        GameClockDuration::new(self.secs + rhs.secs)
    }

    /// Subtracts `rhs` from this duration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DurationTooLong`](crate::ErrorKind::DurationTooLong) when the
    /// difference is out of bounds.
    #[inline]
    pub const fn checked_sub(&self, rhs: &GameClockDuration) -> Result<GameClockDuration, Error> {
        GameClockDuration::new(self.secs - rhs.secs)
    }

    /// Multiplies the duration by an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DurationTooLong`](crate::ErrorKind::DurationTooLong) when the
    /// product is out of bounds.
    #[inline]
    pub const fn checked_mul(&self, rhs: i64) -> Result<GameClockDuration, Error> {
        match self.secs.checked_mul(rhs) {
            Some(secs) => GameClockDuration::new(secs),
            None => Err(Error::duration_too_long()),
        }
    }

    /// Divides the duration by an integer, truncating towards zero.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DurationTooLong`](crate::ErrorKind::DurationTooLong) when `rhs`
    /// is zero.
    #[inline]
    pub const fn checked_div(&self, rhs: i64) -> Result<GameClockDuration, Error> {
        if rhs == 0 {
            return Err(Error::duration_too_long());
        }
        // |secs| < i64::MAX, so `i64::MIN / -1` cannot happen
        Ok(GameClockDuration { secs: self.secs / rhs })
    }

    /// Multiplies the duration by a floating-point factor, rounding half to even.
    ///
    /// Results within ±2<sup>53</sup> seconds are computed in `f64`. Larger results are
    /// recomputed exactly from the factor's binary representation, so no precision is lost
    /// near the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DurationTooLong`](crate::ErrorKind::DurationTooLong) when the
    /// factor is NaN or infinite, or the product is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::GameClockDuration;
    ///
    /// let ten = GameClockDuration::from_seconds(10)?;
    /// assert_eq!(ten.mul_f64(1.5)?, GameClockDuration::from_seconds(15)?);
    /// assert_eq!(ten.mul_f64(0.25)?, GameClockDuration::from_seconds(2)?); // 2.5 rounds to even
    /// assert_eq!(ten.mul_f64(-0.35)?, GameClockDuration::from_seconds(-4)?);
    /// assert!(ten.mul_f64(f64::NAN).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn mul_f64(&self, factor: f64) -> Result<GameClockDuration, Error> {
        if !factor.is_finite() {
            return Err(Error::duration_too_long());
        }
        if self.secs == 0 || factor == 0.0 {
            return Ok(GameClockDuration::ZERO);
        }
        let approx = self.secs as f64 * factor;
        if let Some(secs) = safe_f64_result(self.secs, approx)? {
            return GameClockDuration::new(secs);
        }

        #[cfg(feature = "log")]
        log::trace!("exact duration scaling: {}s * {}", self.secs, factor);

        let (mantissa, exponent, sign) = FloatCore::integer_decode(factor);
        let product = u128::from(self.secs.unsigned_abs()) * u128::from(mantissa);
        let magnitude = if exponent >= 0 {
            product.checked_mul(pow2(exponent as u32)?).ok_or(Error::duration_too_long())?
        } else if exponent > -128 {
            div_round_even(product, 1u128 << exponent.unsigned_abs())
        } else {
            // |product| < 2^110
            0
        };
        GameClockDuration::from_magnitude(magnitude, (self.secs < 0) != (sign < 0))
    }

    /// Divides the duration by a floating-point divisor, rounding half to even.
    ///
    /// Uses the same two-step strategy as [`GameClockDuration::mul_f64`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DurationTooLong`](crate::ErrorKind::DurationTooLong) when the
    /// divisor is zero, NaN or infinite, or the quotient is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use gameclock::GameClockDuration;
    ///
    /// let ten = GameClockDuration::from_seconds(10)?;
    /// assert_eq!(ten.div_f64(4.0)?, GameClockDuration::from_seconds(2)?); // 2.5 rounds to even
    /// assert_eq!(ten.div_f64(0.5)?, GameClockDuration::from_seconds(20)?);
    /// assert!(ten.div_f64(0.0).is_err());
    /// # Ok::<_, gameclock::Error>(())
    /// ```
    pub fn div_f64(&self, divisor: f64) -> Result<GameClockDuration, Error> {
        if !divisor.is_finite() || divisor == 0.0 {
            return Err(Error::duration_too_long());
        }
        if self.secs == 0 {
            return Ok(GameClockDuration::ZERO);
        }
        let approx = self.secs as f64 / divisor;
        if let Some(secs) = safe_f64_result(self.secs, approx)? {
            return GameClockDuration::new(secs);
        }

        #[cfg(feature = "log")]
        log::trace!("exact duration scaling: {}s / {}", self.secs, divisor);

        let (mantissa, exponent, sign) = FloatCore::integer_decode(divisor);
        let secs = u128::from(self.secs.unsigned_abs());
        let magnitude = if exponent >= 64 {
            // the divisor exceeds 2^116 while |secs| < 2^57
            0
        } else if exponent >= 0 {
            div_round_even(secs, u128::from(mantissa) << exponent)
        } else {
            // |secs| < 2^57, so a product past u128 means a quotient above 2^75
            let shift = u32::from(exponent.unsigned_abs());
            if shift >= 128 {
                return Err(Error::duration_too_long());
            }
            let scaled = secs.checked_mul(1u128 << shift).ok_or(Error::duration_too_long())?;
            div_round_even(scaled, u128::from(mantissa))
        };
        GameClockDuration::from_magnitude(magnitude, (self.secs < 0) != (sign < 0))
    }

    fn from_magnitude(magnitude: u128, negative: bool) -> Result<GameClockDuration, Error> {
        let secs = i64::try_from(magnitude).map_err(|_| Error::duration_too_long())?;
        GameClockDuration::new(if negative { -secs } else { secs })
    }

    /// Creates a `GameClockDuration` from a [`core::time::Duration`], dropping the fractional
    /// second.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DurationTooLong`](crate::ErrorKind::DurationTooLong) when the
    /// duration is larger than [`GameClockDuration::MAX`].
    pub fn from_std(duration: StdDuration) -> Result<GameClockDuration, Error> {
        match i64::try_from(duration.as_secs()) {
            Ok(secs) => GameClockDuration::new(secs),
            Err(_) => Err(Error::duration_too_long()),
        }
    }

    /// Creates a [`core::time::Duration`] from this duration.
    ///
    /// # Errors
    ///
    /// Returns a [`Component::Duration`] error when the duration is negative, since
    /// `core::time::Duration` cannot represent that.
    pub fn to_std(&self) -> Result<StdDuration, Error> {
        match u64::try_from(self.secs) {
            Ok(secs) => Ok(StdDuration::from_secs(secs)),
            Err(_) => Err(Error::invalid(Component::Duration, 0, MAX_SECS)),
        }
    }
}

/// Returns the rounded `approx` when it can be trusted, or `None` when the exact path must run.
fn safe_f64_result(secs: i64, approx: f64) -> Result<Option<i64>, Error> {
    // Leave room above the bound so the exact path, not float error, makes the final call.
    if !(FloatCore::abs(approx) <= 2.0 * MAX_SECS as f64) {
        return Err(Error::duration_too_long());
    }
    if secs.unsigned_abs() > MAX_SAFE_F64 as u64 || FloatCore::abs(approx) > MAX_SAFE_F64 as f64 {
        return Ok(None);
    }
    Ok(Some(round_ties_even(approx) as i64))
}

fn round_ties_even(x: f64) -> f64 {
    if FloatCore::abs(x - FloatCore::trunc(x)) == 0.5 {
        2.0 * FloatCore::round(x / 2.0)
    } else {
        FloatCore::round(x)
    }
}

/// `2^exp`, or an error when the result cannot be a valid duration anyway.
fn pow2(exp: u32) -> Result<u128, Error> {
    if exp >= 64 {
        return Err(Error::duration_too_long());
    }
    Ok(1u128 << exp)
}

/// `num / den` rounded half to even. `den` must be non-zero.
fn div_round_even(num: u128, den: u128) -> u128 {
    let (q, r) = (num / den, num % den);
    let rest = den - r;
    if r > rest || (r == rest && q % 2 == 1) {
        q + 1
    } else {
        q
    }
}

impl Neg for GameClockDuration {
    type Output = GameClockDuration;

    #[inline]
    fn neg(self) -> GameClockDuration {
        GameClockDuration { secs: -self.secs }
    }
}

impl Add for GameClockDuration {
    type Output = GameClockDuration;

    fn add(self, rhs: GameClockDuration) -> GameClockDuration {
        self.checked_add(&rhs).expect("`GameClockDuration + GameClockDuration` overflowed")
    }
}

impl Sub for GameClockDuration {
    type Output = GameClockDuration;

    fn sub(self, rhs: GameClockDuration) -> GameClockDuration {
        self.checked_sub(&rhs).expect("`GameClockDuration - GameClockDuration` overflowed")
    }
}

impl AddAssign for GameClockDuration {
    fn add_assign(&mut self, rhs: GameClockDuration) {
        *self = *self + rhs;
    }
}

impl SubAssign for GameClockDuration {
    fn sub_assign(&mut self, rhs: GameClockDuration) {
        *self = *self - rhs;
    }
}

impl Mul<i64> for GameClockDuration {
    type Output = GameClockDuration;

    fn mul(self, rhs: i64) -> GameClockDuration {
        self.checked_mul(rhs).expect("`GameClockDuration * i64` overflowed")
    }
}

impl Div<i64> for GameClockDuration {
    type Output = GameClockDuration;

    fn div(self, rhs: i64) -> GameClockDuration {
        self.checked_div(rhs).expect("`GameClockDuration / i64` divided by zero")
    }
}

impl<'a> core::iter::Sum<&'a GameClockDuration> for GameClockDuration {
    fn sum<I: Iterator<Item = &'a GameClockDuration>>(iter: I) -> GameClockDuration {
        iter.fold(GameClockDuration::ZERO, |acc, x| acc + *x)
    }
}

impl core::iter::Sum<GameClockDuration> for GameClockDuration {
    fn sum<I: Iterator<Item = GameClockDuration>>(iter: I) -> GameClockDuration {
        iter.fold(GameClockDuration::ZERO, |acc, x| acc + x)
    }
}

/// Formats as `[-][D:]HH:MM:SS`, with the day count only present when non-zero.
///
/// # Example
///
/// ```
/// use gameclock::GameClockDuration;
///
/// assert_eq!(GameClockDuration::from_seconds(3723)?.to_string(), "01:02:03");
/// assert_eq!(GameClockDuration::from_seconds(-90_061)?.to_string(), "-1:01:01:01");
/// # Ok::<_, gameclock::Error>(())
/// ```
impl fmt::Display for GameClockDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; format::MAX_DURATION_LEN];
        format::pad_canonical(self, &mut buf, f)
    }
}

impl fmt::Debug for GameClockDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Parses the `Display` output back into a duration.
impl str::FromStr for GameClockDuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<GameClockDuration, ParseError> {
        format::parse::parse_duration(s)
    }
}

impl CanonicalFormat for GameClockDuration {
    #[inline]
    fn formatted_len(&self) -> usize {
        format::formatting::duration_len(self.secs)
    }

    #[inline]
    fn write_canonical(&self, buf: &mut [u8]) -> Option<usize> {
        format::formatting::write_duration(buf, self.secs)
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for GameClockDuration {
    fn arbitrary(u: &mut arbitrary::Unstructured) -> arbitrary::Result<GameClockDuration> {
        let secs = u.int_in_range(-MAX_SECS..=MAX_SECS)?;
        Ok(GameClockDuration { secs })
    }
}
