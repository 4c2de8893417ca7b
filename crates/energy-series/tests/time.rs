// File: crates/energy-series/tests/time.rs
// Purpose: Validate the (year, day) to epoch-seconds converter.

use energy_series::time::{epoch, root_time, EPOCH_UNIX_SECONDS};
use proptest::prelude::*;

#[test]
fn epoch_is_zero() {
    assert_eq!(root_time(1995, 0), Some(0));
}

#[test]
fn one_non_leap_year_later() {
    assert_eq!(root_time(1996, 0), Some(31_536_000));
    // 1996 is a leap year
    assert_eq!(root_time(1997, 0), Some((365 + 366) * 86_400));
}

#[test]
fn offsets_roll_over_calendar_boundaries() {
    // 2000-01-01 + 59 days = 2000-02-29
    assert_eq!(root_time(2000, 59), Some(162_864_000));
    // day -1 of 1996 is 1995-12-31
    assert_eq!(root_time(1996, -1), Some(364 * 86_400));
    assert_eq!(root_time(1995, 365), root_time(1996, 0));
    // before the epoch
    assert_eq!(root_time(1994, 0), Some(-365 * 86_400));
}

#[test]
fn epoch_matches_unix_offset() {
    let e = epoch().expect("epoch date");
    let unix = e.and_hms_opt(0, 0, 0).expect("midnight").and_utc().timestamp();
    assert_eq!(unix, EPOCH_UNIX_SECONDS);
}

#[test]
fn unrepresentable_dates_are_none() {
    assert_eq!(root_time(i32::MAX, 0), None);
    assert_eq!(root_time(2000, i64::MAX), None);
}

proptest! {
    #[test]
    fn monotonic_in_day(year in 1900i32..2100, day in -800i64..800, step in 0i64..400) {
        let a = root_time(year, day).unwrap();
        let b = root_time(year, day + step).unwrap();
        prop_assert!(a <= b);
        prop_assert_eq!(b - a, step * 86_400);
    }

    #[test]
    fn whole_days_only(year in 1900i32..2100, day in 0i64..366) {
        prop_assert_eq!(root_time(year, day).unwrap() % 86_400, 0);
    }
}
