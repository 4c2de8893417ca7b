// File: crates/energy-series/src/time.rs
// Summary: Maps (year, day-of-year) onto the linear time axis used for X values.

use chrono::{Duration, NaiveDate};

/// Unix timestamp of the axis epoch, 1995-01-01T00:00:00Z.
pub const EPOCH_UNIX_SECONDS: i64 = 788_918_400;

const SECONDS_PER_DAY: i64 = 86_400;

/// The axis epoch. X value 0 is midnight at the start of this date.
pub fn epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1995, 1, 1)
}

/// Seconds from the epoch to January 1st of `year` plus `day` days.
///
/// Only whole days count. Offsets outside the year roll over with normal
/// calendar arithmetic (`day = -1` is December 31st of the previous year).
/// Returns `None` only when the date falls outside the representable range.
pub fn root_time(year: i32, day: i64) -> Option<i64> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let date = start.checked_add_signed(Duration::try_days(day)?)?;
    let days = date.signed_duration_since(epoch()?).num_days();
    days.checked_mul(SECONDS_PER_DAY)
}
