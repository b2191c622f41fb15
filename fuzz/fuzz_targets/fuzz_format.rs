#![no_main]
use libfuzzer_sys::fuzz_target;

use gameclock::format::{MAX_DATETIME_LEN, MAX_DURATION_LEN};
use gameclock::{CanonicalFormat, GameClockDateTime, GameClockDuration};

fuzz_target!(|data: (GameClockDateTime, GameClockDuration, usize)| {
    let (dt, d, cut) = data;

    let mut buf = [0u8; MAX_DATETIME_LEN];
    let len = dt.formatted_len();
    assert!(len <= MAX_DATETIME_LEN);
    let short = cut % (MAX_DATETIME_LEN + 1);
    match dt.write_canonical(&mut buf[..short]) {
        Some(n) => assert_eq!(n, len),
        None => assert!(short < len),
    }

    let mut buf = [0u8; MAX_DURATION_LEN];
    let n = d.write_canonical(&mut buf).unwrap();
    let s = std::str::from_utf8(&buf[..n]).unwrap();
    assert_eq!(s.parse::<GameClockDuration>(), Ok(d));

    let _ = dt.checked_add_signed(d);
    let _ = dt.checked_add_months(cut as i32);
});
