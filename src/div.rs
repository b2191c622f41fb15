//! Integer division utilities.
//!
//! Calendar arithmetic splits signed quantities (years, days, seconds) into a quotient and a
//! remainder that must stay non-negative even for negative inputs, so that year `-1` falls into
//! the previous 400-year cycle instead of wrapping into a negative table index.

/// Euclidean quotient and remainder of two `i32`s.
///
/// The remainder is always in `0..rhs.abs()`.
#[inline]
pub(crate) const fn div_mod_euclid_i32(lhs: i32, rhs: i32) -> (i32, i32) {
    (lhs.div_euclid(rhs), lhs.rem_euclid(rhs))
}

/// Euclidean quotient and remainder of two `i64`s.
///
/// The remainder is always in `0..rhs.abs()`.
#[inline]
pub(crate) const fn div_mod_euclid_i64(lhs: i64, rhs: i64) -> (i64, i64) {
    (lhs.div_euclid(rhs), lhs.rem_euclid(rhs))
}

/// Same as `(lhs / rhs, lhs % rhs)` for unsigned values.
#[inline]
pub(crate) const fn div_rem_u64(lhs: u64, rhs: u64) -> (u64, u64) {
    (lhs / rhs, lhs % rhs)
}
