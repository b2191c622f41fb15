use num_iter::{range_inclusive, range_step_inclusive};

use super::GameClockDate;
use crate::error::{Component, ErrorKind};
use crate::{Datelike, GameClockDuration, Weekday};

// day counts from 0000-01-01 to the extremes
const MAX_DAYS_FROM_YEAR_0: i64 = 784_352_296_304;
const MIN_DAYS_FROM_YEAR_0: i64 = -784_352_296_305;

fn ymd(y: i32, m: u32, d: u32) -> GameClockDate {
    GameClockDate::from_ymd(y, m, d).unwrap()
}

#[test]
fn test_date_bounds() {
    assert_eq!(GameClockDate::MIN, ymd(i32::MIN, 1, 1));
    assert_eq!(GameClockDate::MAX, ymd(i32::MAX, 12, 31));
    assert_eq!(GameClockDate::MIN.weekday(), Weekday::Tue);
    assert_eq!(GameClockDate::MAX.weekday(), Weekday::Tue);
    assert_eq!(GameClockDate::MIN.num_days_from_ce(), -784_352_296_670);
    assert_eq!(GameClockDate::MAX.num_days_from_ce(), 784_352_295_939);
    assert!(GameClockDate::MIN < GameClockDate::MAX);
}

#[test]
fn test_date_from_ymd() {
    let ymd_opt = GameClockDate::from_ymd_opt;

    assert!(ymd_opt(2012, 0, 1).is_none());
    assert!(ymd_opt(2012, 1, 1).is_some());
    assert!(ymd_opt(2012, 2, 29).is_some());
    assert!(ymd_opt(2014, 2, 29).is_none());
    assert!(ymd_opt(2014, 3, 0).is_none());
    assert!(ymd_opt(2014, 3, 1).is_some());
    assert!(ymd_opt(2014, 3, 31).is_some());
    assert!(ymd_opt(2014, 3, 32).is_none());
    assert!(ymd_opt(2014, 12, 31).is_some());
    assert!(ymd_opt(2014, 13, 1).is_none());
    assert!(ymd_opt(1900, 2, 29).is_none());
    assert!(ymd_opt(2000, 2, 29).is_some());
}

#[test]
fn test_date_from_ymd_errors() {
    let err = GameClockDate::from_ymd(2014, 13, 1).unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::InvalidComponent { component: Component::Month, min: 1, max: 12 }
    );

    let err = GameClockDate::from_ymd(2023, 2, 29).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidComponent { component: Component::Day, min: 1, max: 28 });

    let err = GameClockDate::from_ymd(2024, 2, 30).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidComponent { component: Component::Day, min: 1, max: 29 });

    let err = GameClockDate::from_ymd(2024, 4, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidComponent { component: Component::Day, min: 1, max: 30 });

    let err = GameClockDate::from_ymd(2024, 1, 32).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidComponent { component: Component::Day, min: 1, max: 31 });
}

#[test]
fn test_date_from_ymd_clamped() {
    for year in [-400, -1, 0, 1900, 2000, 2023, 2024] {
        for month in range_inclusive(1u32, 12) {
            for day in range_inclusive(1u32, 31) {
                if let Some(d) = GameClockDate::from_ymd_opt(year, month, day) {
                    assert_eq!(GameClockDate::from_ymd_clamped(year, month, day), d);
                }
            }
        }
    }
    assert_eq!(GameClockDate::from_ymd_clamped(2023, 2, 31), ymd(2023, 2, 28));
    assert_eq!(GameClockDate::from_ymd_clamped(2024, 2, 31), ymd(2024, 2, 29));
    assert_eq!(GameClockDate::from_ymd_clamped(2024, 0, 0), ymd(2024, 1, 1));
    assert_eq!(GameClockDate::from_ymd_clamped(2024, 13, u32::MAX), ymd(2024, 12, 31));
    assert_eq!(GameClockDate::from_ymd_clamped(i32::MIN, 0, 0), GameClockDate::MIN);
    assert_eq!(GameClockDate::from_ymd_clamped(i32::MAX, 99, 99), GameClockDate::MAX);
}

#[test]
fn test_date_from_yo() {
    let yo_opt = GameClockDate::from_yo_opt;

    assert_eq!(yo_opt(2012, 0), None);
    assert_eq!(yo_opt(2012, 1), Some(ymd(2012, 1, 1)));
    assert_eq!(yo_opt(2012, 2), Some(ymd(2012, 1, 2)));
    assert_eq!(yo_opt(2012, 32), Some(ymd(2012, 2, 1)));
    assert_eq!(yo_opt(2012, 60), Some(ymd(2012, 2, 29)));
    assert_eq!(yo_opt(2012, 61), Some(ymd(2012, 3, 1)));
    assert_eq!(yo_opt(2012, 100), Some(ymd(2012, 4, 9)));
    assert_eq!(yo_opt(2012, 200), Some(ymd(2012, 7, 18)));
    assert_eq!(yo_opt(2012, 300), Some(ymd(2012, 10, 26)));
    assert_eq!(yo_opt(2012, 366), Some(ymd(2012, 12, 31)));
    assert_eq!(yo_opt(2012, 367), None);

    assert_eq!(yo_opt(2014, 0), None);
    assert_eq!(yo_opt(2014, 1), Some(ymd(2014, 1, 1)));
    assert_eq!(yo_opt(2014, 32), Some(ymd(2014, 2, 1)));
    assert_eq!(yo_opt(2014, 59), Some(ymd(2014, 2, 28)));
    assert_eq!(yo_opt(2014, 60), Some(ymd(2014, 3, 1)));
    assert_eq!(yo_opt(2014, 100), Some(ymd(2014, 4, 10)));
    assert_eq!(yo_opt(2014, 200), Some(ymd(2014, 7, 19)));
    assert_eq!(yo_opt(2014, 300), Some(ymd(2014, 10, 27)));
    assert_eq!(yo_opt(2014, 365), Some(ymd(2014, 12, 31)));
    assert_eq!(yo_opt(2014, 366), None);

    let err = GameClockDate::from_yo(2014, 366).unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::InvalidComponent { component: Component::Ordinal, min: 1, max: 365 }
    );
    let err = GameClockDate::from_yo(2012, 0).unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::InvalidComponent { component: Component::Ordinal, min: 1, max: 366 }
    );
}

#[test]
fn test_date_from_isoywd() {
    let isoywd_opt = GameClockDate::from_isoywd_opt;

    assert_eq!(isoywd_opt(2004, 0, Weekday::Sun), None);
    assert_eq!(isoywd_opt(2004, 1, Weekday::Mon), Some(ymd(2003, 12, 29)));
    assert_eq!(isoywd_opt(2004, 1, Weekday::Sun), Some(ymd(2004, 1, 4)));
    assert_eq!(isoywd_opt(2004, 2, Weekday::Mon), Some(ymd(2004, 1, 5)));
    assert_eq!(isoywd_opt(2004, 2, Weekday::Sun), Some(ymd(2004, 1, 11)));
    assert_eq!(isoywd_opt(2004, 52, Weekday::Mon), Some(ymd(2004, 12, 20)));
    assert_eq!(isoywd_opt(2004, 52, Weekday::Sun), Some(ymd(2004, 12, 26)));
    assert_eq!(isoywd_opt(2004, 53, Weekday::Mon), Some(ymd(2004, 12, 27)));
    assert_eq!(isoywd_opt(2004, 53, Weekday::Sun), Some(ymd(2005, 1, 2)));
    assert_eq!(isoywd_opt(2004, 54, Weekday::Mon), None);

    assert_eq!(isoywd_opt(2011, 0, Weekday::Sun), None);
    assert_eq!(isoywd_opt(2011, 1, Weekday::Mon), Some(ymd(2011, 1, 3)));
    assert_eq!(isoywd_opt(2011, 1, Weekday::Sun), Some(ymd(2011, 1, 9)));
    assert_eq!(isoywd_opt(2011, 2, Weekday::Mon), Some(ymd(2011, 1, 10)));
    assert_eq!(isoywd_opt(2011, 2, Weekday::Sun), Some(ymd(2011, 1, 16)));

    assert_eq!(isoywd_opt(2015, 1, Weekday::Mon), Some(ymd(2014, 12, 29)));
    assert_eq!(isoywd_opt(2015, 53, Weekday::Sun), Some(ymd(2016, 1, 3)));

    assert_eq!(isoywd_opt(2018, 51, Weekday::Mon), Some(ymd(2018, 12, 17)));
    assert_eq!(isoywd_opt(2018, 51, Weekday::Sun), Some(ymd(2018, 12, 23)));
    assert_eq!(isoywd_opt(2018, 52, Weekday::Mon), Some(ymd(2018, 12, 24)));
    assert_eq!(isoywd_opt(2018, 52, Weekday::Sun), Some(ymd(2018, 12, 30)));
    assert_eq!(isoywd_opt(2018, 53, Weekday::Mon), None);

    let err = GameClockDate::from_isoywd(2018, 53, Weekday::Mon).unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::InvalidComponent { component: Component::IsoWeek, min: 1, max: 52 }
    );
}

#[test]
fn test_date_from_isoywd_at_the_edges() {
    // January 1 of i32::MIN is a Tuesday, so week 1 starts a day before the supported range.
    let err = GameClockDate::from_isoywd(i32::MIN, 1, Weekday::Mon).unwrap_err();
    assert_eq!(err.component(), Some(Component::Year));
    assert_eq!(GameClockDate::from_isoywd(i32::MIN, 1, Weekday::Tue), Ok(GameClockDate::MIN));

    assert_eq!(GameClockDate::MIN.iso_week_date(), (i64::from(i32::MIN), 1, Weekday::Tue));
    // December 31 of i32::MAX is in week 1 of the following ISO year.
    assert_eq!(GameClockDate::MAX.iso_week_date(), (i64::from(i32::MAX) + 1, 1, Weekday::Tue));

    let monday = GameClockDate::MAX.checked_sub_days(1).unwrap();
    assert_eq!(monday.iso_week_date(), (i64::from(i32::MAX) + 1, 1, Weekday::Mon));
    let sunday = GameClockDate::MAX.checked_sub_days(2).unwrap();
    assert_eq!(sunday.iso_week_date(), (i64::from(i32::MAX), 52, Weekday::Sun));
    assert!(GameClockDate::from_isoywd(i32::MAX, 53, Weekday::Mon).is_err());
}

#[test]
fn test_date_from_isoywd_and_iso_week_date() {
    for year in range_inclusive(2000i32, 2400) {
        for week in range_inclusive(1u32, 53) {
            for &weekday in Weekday::ALL.iter() {
                if let Ok(d) = GameClockDate::from_isoywd(year, week, weekday) {
                    assert_eq!(d.weekday(), weekday);
                    assert_eq!(d.iso_week_date(), (i64::from(year), week, weekday));
                }
            }
        }
    }

    for year in range_inclusive(2000i32, 2400) {
        for month in range_inclusive(1u32, 12) {
            for day in range_inclusive(1u32, 31) {
                if let Some(d) = GameClockDate::from_ymd_opt(year, month, day) {
                    let (year_, week_, weekday_) = d.iso_week_date();
                    let year_ = i32::try_from(year_).unwrap();
                    assert_eq!(GameClockDate::from_isoywd(year_, week_, weekday_), Ok(d));
                }
            }
        }
    }
}

#[test]
fn test_date_from_num_days_from_ce() {
    let from_ndays_from_ce = GameClockDate::from_num_days_from_ce_opt;
    assert_eq!(from_ndays_from_ce(1), Some(ymd(1, 1, 1)));
    assert_eq!(from_ndays_from_ce(2), Some(ymd(1, 1, 2)));
    assert_eq!(from_ndays_from_ce(31), Some(ymd(1, 1, 31)));
    assert_eq!(from_ndays_from_ce(32), Some(ymd(1, 2, 1)));
    assert_eq!(from_ndays_from_ce(59), Some(ymd(1, 2, 28)));
    assert_eq!(from_ndays_from_ce(60), Some(ymd(1, 3, 1)));
    assert_eq!(from_ndays_from_ce(365), Some(ymd(1, 12, 31)));
    assert_eq!(from_ndays_from_ce(365 + 1), Some(ymd(2, 1, 1)));
    assert_eq!(from_ndays_from_ce(365 * 2 + 1), Some(ymd(3, 1, 1)));
    assert_eq!(from_ndays_from_ce(365 * 3 + 1), Some(ymd(4, 1, 1)));
    assert_eq!(from_ndays_from_ce(365 * 4 + 2), Some(ymd(5, 1, 1)));
    assert_eq!(from_ndays_from_ce(146_097 + 1), Some(ymd(401, 1, 1)));
    assert_eq!(from_ndays_from_ce(146_097 * 5 + 1), Some(ymd(2001, 1, 1)));
    assert_eq!(from_ndays_from_ce(719_163), Some(ymd(1970, 1, 1)));
    assert_eq!(from_ndays_from_ce(0), Some(ymd(0, 12, 31))); // 1 BCE
    assert_eq!(from_ndays_from_ce(-365), Some(ymd(0, 1, 1)));
    assert_eq!(from_ndays_from_ce(-366), Some(ymd(-1, 12, 31))); // 2 BCE

    for days in range_step_inclusive(-999_900i64, 1_000_000, 100) {
        assert_eq!(from_ndays_from_ce(days).map(|d| d.num_days_from_ce()), Some(days));
    }

    let min = GameClockDate::MIN;
    let max = GameClockDate::MAX;
    assert_eq!(from_ndays_from_ce(min.num_days_from_ce()), Some(min));
    assert_eq!(from_ndays_from_ce(min.num_days_from_ce() - 1), None);
    assert_eq!(from_ndays_from_ce(max.num_days_from_ce()), Some(max));
    assert_eq!(from_ndays_from_ce(max.num_days_from_ce() + 1), None);
    assert_eq!(from_ndays_from_ce(i64::MIN), None);
    assert_eq!(from_ndays_from_ce(i64::MAX), None);

    let err = GameClockDate::from_num_days_from_ce(i64::MAX).unwrap_err();
    assert_eq!(err.component(), Some(Component::Year));
}

#[test]
fn test_date_fields() {
    fn check(year: i32, month: u32, day: u32, ordinal: u32) {
        let d1 = ymd(year, month, day);
        assert_eq!(d1.year(), year);
        assert_eq!(d1.month(), month);
        assert_eq!(d1.day(), day);
        assert_eq!(d1.ordinal(), ordinal);

        let d2 = GameClockDate::from_yo(year, ordinal).unwrap();
        assert_eq!(d2.year(), year);
        assert_eq!(d2.month(), month);
        assert_eq!(d2.day(), day);
        assert_eq!(d2.ordinal(), ordinal);

        assert_eq!(d1, d2);
    }

    check(2012, 1, 1, 1);
    check(2012, 1, 2, 2);
    check(2012, 2, 1, 32);
    check(2012, 2, 29, 60);
    check(2012, 3, 1, 61);
    check(2012, 4, 9, 100);
    check(2012, 7, 18, 200);
    check(2012, 10, 26, 300);
    check(2012, 12, 31, 366);

    check(2014, 1, 1, 1);
    check(2014, 1, 2, 2);
    check(2014, 2, 1, 32);
    check(2014, 2, 28, 59);
    check(2014, 3, 1, 60);
    check(2014, 4, 10, 100);
    check(2014, 7, 19, 200);
    check(2014, 10, 27, 300);
    check(2014, 12, 31, 365);

    let d = ymd(2012, 2, 29);
    assert_eq!((d.month0(), d.day0(), d.ordinal0()), (1, 28, 59));
    assert!(d.leap_year());
    assert_eq!(d.days_in_month(), 29);
    assert!(!ymd(1900, 1, 1).leap_year());
    assert_eq!(ymd(1900, 2, 1).days_in_month(), 28);
    assert_eq!(ymd(0, 1, 1).year_ce(), (false, 1));
    assert_eq!(ymd(-1, 1, 1).year_ce(), (false, 2));
    assert_eq!(GameClockDate::MIN.year_ce(), (false, 2_147_483_649));
    assert_eq!(ymd(2012, 1, 1).year_ce(), (true, 2012));
}

#[test]
fn test_date_weekday() {
    assert_eq!(ymd(1582, 10, 15).weekday(), Weekday::Fri);
    // May 20, 1875 = ISO 8601 reference date
    assert_eq!(ymd(1875, 5, 20).weekday(), Weekday::Thu);
    assert_eq!(ymd(2000, 1, 1).weekday(), Weekday::Sat);
    assert_eq!(ymd(2000, 1, 1).iso_weekday(), 6);
    assert_eq!(ymd(0, 1, 1).weekday(), Weekday::Sat);
}

#[test]
fn test_date_with_fields() {
    let d = ymd(2000, 2, 29);
    assert_eq!(d.with_year(-400), Ok(ymd(-400, 2, 29)));
    assert!(d.with_year(-100).is_err());
    assert_eq!(d.with_year(1600), Ok(ymd(1600, 2, 29)));
    assert!(d.with_year(1900).is_err());
    assert_eq!(d.with_year(2000), Ok(ymd(2000, 2, 29)));
    assert!(d.with_year(2001).is_err());
    assert_eq!(d.with_year(2004), Ok(ymd(2004, 2, 29)));
    assert!(d.with_year(i32::MAX).is_err());
    assert_eq!(
        d.with_year(2001).unwrap_err().kind(),
        ErrorKind::InvalidComponent { component: Component::Day, min: 1, max: 28 }
    );

    let d = ymd(2000, 4, 30);
    assert!(d.with_month(0).is_err());
    assert_eq!(d.with_month(1), Ok(ymd(2000, 1, 30)));
    assert!(d.with_month(2).is_err());
    assert_eq!(d.with_month(3), Ok(ymd(2000, 3, 30)));
    assert_eq!(d.with_month(4), Ok(ymd(2000, 4, 30)));
    assert_eq!(d.with_month(12), Ok(ymd(2000, 12, 30)));
    assert!(d.with_month(13).is_err());
    assert!(d.with_month(u32::MAX).is_err());
    assert_eq!(d.with_month0(0), Ok(ymd(2000, 1, 30)));
    assert!(d.with_month0(u32::MAX).is_err());
    assert_eq!(d.with_month(13).unwrap_err().component(), Some(Component::Month));
    assert_eq!(d.with_month(2).unwrap_err().component(), Some(Component::Day));

    let d = ymd(2000, 2, 8);
    assert!(d.with_day(0).is_err());
    assert_eq!(d.with_day(1), Ok(ymd(2000, 2, 1)));
    assert_eq!(d.with_day(29), Ok(ymd(2000, 2, 29)));
    assert!(d.with_day(30).is_err());
    assert!(d.with_day(u32::MAX).is_err());
    assert_eq!(d.with_day0(28), Ok(ymd(2000, 2, 29)));

    let d = ymd(2000, 5, 5);
    assert!(d.with_ordinal(0).is_err());
    assert_eq!(d.with_ordinal(1), Ok(ymd(2000, 1, 1)));
    assert_eq!(d.with_ordinal(60), Ok(ymd(2000, 2, 29)));
    assert_eq!(d.with_ordinal(61), Ok(ymd(2000, 3, 1)));
    assert_eq!(d.with_ordinal(366), Ok(ymd(2000, 12, 31)));
    assert!(d.with_ordinal(367).is_err());
    assert!(d.with_ordinal(u32::MAX).is_err());
    assert_eq!(d.with_ordinal0(365), Ok(ymd(2000, 12, 31)));
}

#[test]
fn test_date_num_days_from_ce() {
    assert_eq!(ymd(1, 1, 1).num_days_from_ce(), 1);

    for year in range_inclusive(-9999i32, 10000) {
        assert_eq!(
            ymd(year, 1, 1).num_days_from_ce(),
            ymd(year - 1, 12, 31).num_days_from_ce() + 1
        );
    }
}

#[test]
fn test_date_succ() {
    assert_eq!(ymd(2014, 5, 6).succ_opt(), Some(ymd(2014, 5, 7)));
    assert_eq!(ymd(2014, 5, 31).succ_opt(), Some(ymd(2014, 6, 1)));
    assert_eq!(ymd(2014, 12, 31).succ_opt(), Some(ymd(2015, 1, 1)));
    assert_eq!(ymd(2016, 2, 28).succ_opt(), Some(ymd(2016, 2, 29)));
    assert_eq!(ymd(2016, 12, 30).succ_opt(), Some(ymd(2016, 12, 31)));
    assert_eq!(GameClockDate::MAX.succ_opt(), None);
}

#[test]
fn test_date_pred() {
    assert_eq!(ymd(2016, 3, 1).pred_opt(), Some(ymd(2016, 2, 29)));
    assert_eq!(ymd(2015, 1, 1).pred_opt(), Some(ymd(2014, 12, 31)));
    assert_eq!(ymd(2014, 6, 1).pred_opt(), Some(ymd(2014, 5, 31)));
    assert_eq!(ymd(2014, 5, 7).pred_opt(), Some(ymd(2014, 5, 6)));
    assert_eq!(GameClockDate::MIN.pred_opt(), None);
}

#[test]
fn test_date_add_days() {
    #[track_caller]
    fn check((y1, m1, d1): (i32, u32, u32), days: i64, ymd_: Option<(i32, u32, u32)>) {
        let lhs = ymd(y1, m1, d1);
        let sum = ymd_.map(|(y, m, d)| ymd(y, m, d));
        assert_eq!(lhs.checked_add_days(days).ok(), sum);
        if let Some(neg) = days.checked_neg() {
            assert_eq!(lhs.checked_sub_days(neg).ok(), sum);
        }
    }

    check((2014, 1, 1), 0, Some((2014, 1, 1)));
    check((2014, 1, 1), 1, Some((2014, 1, 2)));
    check((2014, 1, 1), -1, Some((2013, 12, 31)));
    check((2014, 1, 1), 364, Some((2014, 12, 31)));
    check((2014, 1, 1), 365, Some((2015, 1, 1)));
    check((2016, 1, 1), 365, Some((2016, 12, 31)));
    check((2016, 12, 31), -365, Some((2016, 1, 1)));
    check((2014, 1, 1), 365 * 4 + 1, Some((2018, 1, 1)));
    check((2014, 1, 1), 365 * 400 + 97, Some((2414, 1, 1)));
    check((-7, 1, 1), 365 * 12 + 3, Some((5, 1, 1)));

    // overflow check
    check((0, 1, 1), MAX_DAYS_FROM_YEAR_0, Some((i32::MAX, 12, 31)));
    check((0, 1, 1), MAX_DAYS_FROM_YEAR_0 + 1, None);
    check((0, 1, 1), i64::MAX, None);
    check((0, 1, 1), MIN_DAYS_FROM_YEAR_0, Some((i32::MIN, 1, 1)));
    check((0, 1, 1), MIN_DAYS_FROM_YEAR_0 - 1, None);
    check((0, 1, 1), i64::MIN, None);

    let err = GameClockDate::MAX.checked_add_days(1).unwrap_err();
    assert_eq!(err.component(), Some(Component::Year));
    assert!(GameClockDate::MIN.checked_sub_days(i64::MIN).is_err());
}

#[test]
fn test_date_add_signed() {
    #[track_caller]
    fn check((y1, m1, d1): (i32, u32, u32), rhs: GameClockDuration, ymd_: Option<(i32, u32, u32)>) {
        let lhs = ymd(y1, m1, d1);
        let sum = ymd_.map(|(y, m, d)| ymd(y, m, d));
        assert_eq!(lhs.checked_add_signed(rhs).ok(), sum);
        assert_eq!(lhs.checked_sub_signed(-rhs).ok(), sum);
    }
    let days = |d| GameClockDuration::from_days(d).unwrap();
    let seconds = |s| GameClockDuration::from_seconds(s).unwrap();

    check((2014, 1, 1), GameClockDuration::ZERO, Some((2014, 1, 1)));
    check((2014, 1, 1), seconds(86399), Some((2014, 1, 1)));
    // always round towards zero
    check((2014, 1, 1), seconds(-86399), Some((2014, 1, 1)));
    check((2014, 1, 1), days(1), Some((2014, 1, 2)));
    check((2014, 1, 1), days(-1), Some((2013, 12, 31)));
    check((2014, 1, 1), days(365 * 400 + 97), Some((2414, 1, 1)));

    check((0, 1, 1), days(MAX_DAYS_FROM_YEAR_0), Some((i32::MAX, 12, 31)));
    check((0, 1, 1), days(MAX_DAYS_FROM_YEAR_0 + 1), None);
    check((0, 1, 1), GameClockDuration::MAX, None);
    check((0, 1, 1), days(MIN_DAYS_FROM_YEAR_0), Some((i32::MIN, 1, 1)));
    check((0, 1, 1), days(MIN_DAYS_FROM_YEAR_0 - 1), None);
    check((0, 1, 1), GameClockDuration::MIN, None);

    assert_eq!(GameClockDate::MIN.checked_add_signed(GameClockDuration::MAX), Ok(GameClockDate::MAX));
    assert_eq!(GameClockDate::MAX.checked_add_signed(GameClockDuration::MIN), Ok(GameClockDate::MIN));
}

#[test]
fn test_date_add_months() {
    #[track_caller]
    fn check((y1, m1, d1): (i32, u32, u32), months: i32, ymd_: Option<(i32, u32, u32)>) {
        let lhs = ymd(y1, m1, d1);
        let sum = ymd_.map(|(y, m, d)| ymd(y, m, d));
        assert_eq!(lhs.checked_add_months(months).ok(), sum);
    }

    check((2014, 1, 1), 0, Some((2014, 1, 1)));
    check((2014, 1, 1), 1, Some((2014, 2, 1)));
    check((2014, 1, 1), 11, Some((2014, 12, 1)));
    check((2014, 1, 1), 12, Some((2015, 1, 1)));
    check((2014, 12, 1), 1, Some((2015, 1, 1)));
    check((2014, 1, 1), -1, Some((2013, 12, 1)));
    check((2014, 1, 1), -12, Some((2013, 1, 1)));
    check((2014, 1, 1), -13, Some((2012, 12, 1)));
    check((2014, 1, 31), 1, Some((2014, 2, 28)));
    check((2016, 1, 31), 1, Some((2016, 2, 29)));
    check((2016, 3, 31), -1, Some((2016, 2, 29)));
    check((2016, 3, 31), 1, Some((2016, 4, 30)));
    check((2016, 2, 29), 12, Some((2017, 2, 28)));
    check((2016, 2, 29), 48, Some((2020, 2, 29)));

    check((i32::MAX, 11, 30), 1, Some((i32::MAX, 12, 30)));
    check((i32::MAX, 12, 1), 1, None);
    check((i32::MIN, 2, 1), -1, Some((i32::MIN, 1, 1)));
    check((i32::MIN, 1, 1), -1, None);
    check((0, 1, 1), i32::MAX, Some((178_956_970, 8, 1)));
    check((0, 1, 1), i32::MIN, Some((-178_956_971, 5, 1)));

    let d = ymd(2014, 1, 31);
    assert_eq!(d.checked_sub_months(1), Ok(ymd(2013, 12, 31)));
    assert_eq!(d.checked_sub_months(-1), Ok(ymd(2014, 2, 28)));
    assert_eq!(ymd(0, 1, 1).checked_sub_months(i32::MIN), Ok(ymd(178_956_970, 9, 1)));
    let err = GameClockDate::MIN.checked_sub_months(1).unwrap_err();
    assert_eq!(err.component(), Some(Component::Year));
}

#[test]
fn test_date_sub() {
    #[track_caller]
    fn check((y1, m1, d1): (i32, u32, u32), (y2, m2, d2): (i32, u32, u32), diff: i64) {
        let lhs = ymd(y1, m1, d1);
        let rhs = ymd(y2, m2, d2);
        let diff = GameClockDuration::from_days(diff).unwrap();
        assert_eq!(lhs - rhs, diff);
        assert_eq!(rhs - lhs, -diff);
        assert_eq!(lhs.signed_duration_since(rhs), diff);
    }

    check((2014, 1, 1), (2014, 1, 1), 0);
    check((2014, 1, 2), (2014, 1, 1), 1);
    check((2014, 12, 31), (2014, 1, 1), 364);
    check((2015, 1, 3), (2014, 1, 1), 365 + 2);
    check((2018, 1, 1), (2014, 1, 1), 365 * 4 + 1);
    check((2414, 1, 1), (2014, 1, 1), 365 * 400 + 97);

    check((i32::MAX, 12, 31), (0, 1, 1), MAX_DAYS_FROM_YEAR_0);
    check((i32::MIN, 1, 1), (0, 1, 1), MIN_DAYS_FROM_YEAR_0);
    check((i32::MAX, 12, 31), (i32::MIN, 1, 1), 1_568_704_592_609);
}

#[test]
fn test_date_ops() {
    let mut d = ymd(2016, 2, 28);
    d += GameClockDuration::from_days(2).unwrap();
    assert_eq!(d, ymd(2016, 3, 1));
    d -= GameClockDuration::from_weeks(1).unwrap();
    assert_eq!(d, ymd(2016, 2, 23));
    assert_eq!(d + GameClockDuration::from_hours(-25).unwrap(), ymd(2016, 2, 22));
    assert_eq!(d - GameClockDuration::from_days(366).unwrap(), ymd(2015, 2, 22));
}

#[test]
#[should_panic]
fn test_date_add_overflow_panics() {
    let _ = GameClockDate::MAX + GameClockDuration::from_days(1).unwrap();
}

#[test]
fn test_date_and_time() {
    let d = ymd(2014, 5, 6);
    let dt = d.and_hms(7, 8, 9).unwrap();
    assert_eq!(dt.date(), d);
    assert_eq!(dt.to_string(), "2014-05-06 07:08:09");
    assert!(d.and_hms(24, 0, 0).is_err());
}

#[test]
fn test_date_fmt() {
    assert_eq!(format!("{:?}", ymd(2012, 3, 4)), "2012-03-04");
    assert_eq!(format!("{:?}", ymd(0, 3, 4)), "0000-03-04");
    assert_eq!(format!("{:?}", ymd(-307, 3, 4)), "-0307-03-04");
    assert_eq!(format!("{:?}", ymd(12345, 3, 4)), "+12345-03-04");

    assert_eq!(ymd(2012, 3, 4).to_string(), "2012-03-04");
    assert_eq!(ymd(9999, 12, 31).to_string(), "9999-12-31");
    assert_eq!(ymd(10000, 1, 1).to_string(), "+10000-01-01");
    assert_eq!(ymd(-9999, 1, 1).to_string(), "-9999-01-01");
    assert_eq!(ymd(-10000, 1, 1).to_string(), "-10000-01-01");
    assert_eq!(GameClockDate::MIN.to_string(), "-2147483648-01-01");
    assert_eq!(GameClockDate::MAX.to_string(), "+2147483647-12-31");

    // width and alignment apply to the whole string
    assert_eq!(format!("{:>12}", ymd(1234, 5, 6)), "  1234-05-06");
    assert_eq!(format!("{:<12}|", ymd(1234, 5, 6)), "1234-05-06  |");
}

#[test]
fn test_date_from_str() {
    let valid = [
        ("2015-02-18", ymd(2015, 2, 18)),
        ("+2015-02-18", ymd(2015, 2, 18)),
        ("0000-01-01", ymd(0, 1, 1)),
        ("-0001-12-31", ymd(-1, 12, 31)),
        ("+12345-06-07", ymd(12345, 6, 7)),
        ("-2147483648-01-01", GameClockDate::MIN),
        ("+2147483647-12-31", GameClockDate::MAX),
    ];
    for (s, d) in valid {
        assert_eq!(s.parse::<GameClockDate>(), Ok(d), "{:?}", s);
        assert_eq!(d.to_string().parse::<GameClockDate>(), Ok(d));
    }

    let invalid = [
        "",
        "x",
        "2015",
        "2015-02",
        "2015-2-18",
        "2015-02-18 ",
        " 2015-02-18",
        "2015/02/18",
        "2015-02-30",
        "2015-13-01",
        "2015-00-01",
        "12345-06-07",
        "+2147483648-01-01",
        "-2147483649-12-31",
    ];
    for s in invalid {
        assert!(s.parse::<GameClockDate>().is_err(), "{:?} should not parse", s);
    }
}

#[test]
fn test_date_ordering() {
    let mut dates = [ymd(2014, 1, 2), ymd(-1, 12, 31), ymd(2014, 1, 1), ymd(0, 1, 1)];
    dates.sort();
    assert_eq!(dates, [ymd(-1, 12, 31), ymd(0, 1, 1), ymd(2014, 1, 1), ymd(2014, 1, 2)]);
    assert!(ymd(2014, 12, 31) < ymd(2015, 1, 1));
}

#[cfg(feature = "arbitrary")]
#[test]
fn test_arbitrary_date_is_valid() {
    let bytes = [0x12u8, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x01, 0x02];
    let mut u = arbitrary::Unstructured::new(&bytes);
    let d: GameClockDate = arbitrary::Arbitrary::arbitrary(&mut u).unwrap();
    assert_eq!(GameClockDate::from_ymd(d.year(), d.month(), d.day()), Ok(d));
}
