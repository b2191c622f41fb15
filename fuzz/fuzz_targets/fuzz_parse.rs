#![no_main]
use libfuzzer_sys::fuzz_target;

use gameclock::{GameClockDate, GameClockDateTime, GameClockDuration, GameClockTime};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // whatever parses must print back to the same text
        if let Ok(d) = s.parse::<GameClockDate>() {
            assert_eq!(d.to_string().parse::<GameClockDate>(), Ok(d));
        }
        if let Ok(t) = s.parse::<GameClockTime>() {
            assert_eq!(t.to_string(), s);
        }
        if let Ok(dt) = s.parse::<GameClockDateTime>() {
            assert_eq!(dt.to_string().parse::<GameClockDateTime>(), Ok(dt));
        }
        if let Ok(d) = s.parse::<GameClockDuration>() {
            assert_eq!(d.to_string().parse::<GameClockDuration>(), Ok(d));
        }
    }
});
