//! Bit and digit helpers shared by the formatting code.

#[cfg(test)]
use core::fmt::{self, Write};

/// Position of the highest set bit for every value of the De Bruijn multiply below.
const DE_BRUIJN_LOG2: [u8; 32] = [
    0, 9, 1, 10, 13, 21, 2, 29, 11, 14, 16, 18, 22, 25, 3, 30, 8, 12, 20, 28, 15, 17, 24, 7, 19,
    27, 23, 6, 26, 5, 4, 31,
];

/// Powers of ten that fit in a `u64`.
const POW10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

// "00" through "99" concatenated.
const DIGIT_PAIRS: [u8; 200] = *b"\
    00010203040506070809\
    10111213141516171819\
    20212223242526272829\
    30313233343536373839\
    40414243444546474849\
    50515253545556575859\
    60616263646566676869\
    70717273747576777879\
    80818283848586878889\
    90919293949596979899";

/// Floor of the base-2 logarithm of `v`, without branches.
///
/// Returns 0 for both 0 and 1.
#[inline]
pub(crate) const fn log2_u32(mut v: u32) -> u32 {
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    DE_BRUIJN_LOG2[(v.wrapping_mul(0x07C4_ACDD) >> 27) as usize] as u32
}

/// Floor of the base-2 logarithm of `v`. Returns 0 for 0.
#[inline]
pub(crate) const fn log2_u64(v: u64) -> u32 {
    let hi = (v >> 32) as u32;
    if hi != 0 {
        32 + log2_u32(hi)
    } else {
        log2_u32(v as u32)
    }
}

/// Number of decimal digits needed to print `v`; `count_digits(0) == 1`.
#[inline]
pub(crate) const fn count_digits(v: u64) -> usize {
    // `v | 1` keeps zero at one digit and never changes the answer for other values,
    // since the largest number below each power of ten is odd.
    let v = v | 1;
    let r = ((log2_u64(v) + 1) * 1233) >> 12;
    r as usize + (v >= POW10[r as usize]) as usize
}

/// Writes `v % 100` as two ASCII digits into `out[0..2]`.
#[inline]
pub(crate) fn write_two_digits(out: &mut [u8], v: u32) {
    let i = (v % 100) as usize * 2;
    out[0] = DIGIT_PAIRS[i];
    out[1] = DIGIT_PAIRS[i + 1];
}

/// Writes `v % 10_000` as four ASCII digits into `out[0..4]`.
#[inline]
pub(crate) fn write_four_digits(out: &mut [u8], v: u32) {
    let v = v % 10_000;
    write_two_digits(&mut out[..2], v / 100);
    write_two_digits(&mut out[2..4], v);
}

/// Writes `v` as exactly `out.len()` ASCII digits, zero-padding on the left.
///
/// Digits that do not fit are dropped from the front, so callers size `out` with
/// [`count_digits`] first.
pub(crate) fn write_digits(out: &mut [u8], mut v: u64) {
    let mut nd = out.len();
    while nd >= 4 {
        write_four_digits(&mut out[nd - 4..nd], (v % 10_000) as u32);
        v /= 10_000;
        nd -= 4;
    }
    if nd >= 2 {
        write_two_digits(&mut out[nd - 2..nd], (v % 100) as u32);
        v /= 100;
        nd -= 2;
    }
    if nd > 0 {
        out[0] = b'0' + (v % 10) as u8;
    }
}

/// Compare the `Display` format of `value` against `expected`.
///
/// This is similar to writing `assert_eq!(value.to_string(), "expected")`, but works without any
/// allocations (and is shorter to write).
#[cfg(test)]
#[track_caller]
pub(crate) fn assert_display_eq<D>(value: D, expected: &str)
where
    D: fmt::Display,
{
    let mut cmp = WriteCompare::new(expected);
    write!(&mut cmp, "{}", value).unwrap();
    assert!(cmp.remainder.is_empty(), "output was a prefix of {:?}", expected);
}

/// Compare the `Debug` format of `value` against `expected`.
#[cfg(test)]
#[track_caller]
pub(crate) fn assert_debug_eq<D>(value: D, expected: &str)
where
    D: fmt::Debug,
{
    let mut cmp = WriteCompare::new(expected);
    write!(&mut cmp, "{:?}", value).unwrap();
    assert!(cmp.remainder.is_empty(), "output was a prefix of {:?}", expected);
}

/// Sink that will return an error when bytes are written to it that do not match `expected`.
#[cfg(test)]
pub(crate) struct WriteCompare<'a> {
    expected: &'a str,
    remainder: &'a str,
}

#[cfg(test)]
impl<'a> WriteCompare<'a> {
    pub(crate) fn new(expected: &'a str) -> Self {
        Self { expected, remainder: expected }
    }
}

#[cfg(test)]
impl Write for WriteCompare<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(remainder) = self.remainder.strip_prefix(s) {
            self.remainder = remainder;
            Ok(())
        } else {
            #[cfg(feature = "std")]
            eprintln!(
                "formatting difference: `(left == right)`\n  left: `\"{:?}{:?}(...)\"`\n right: `\"{:?}\"`",
                &self.expected[..(self.expected.len() - self.remainder.len())],
                s,
                self.expected
            );
            Err(fmt::Error)
        }
    }
}
