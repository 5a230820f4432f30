//! Date serial number conversion utilities
//!
//! Excel stores dates as serial numbers representing days since a base date:
//! - 1900 system: Day 1 = January 1, 1900 (Windows default)
//! - 1904 system: Day 0 = January 1, 1904 (Mac legacy)
//!
//! The 1900 system includes the leap year bug: Excel treats 1900 as a leap
//! year, so day 60 is February 29, 1900, a date that never existed. It has no
//! calendar instant, so [`serial_to_datetime`] rejects it.
//!
//! Time is stored as the fractional part of the serial number:
//! - 0.5 = 12:00:00 (noon)
//! - 0.75 = 18:00:00 (6 PM)

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::options::DateSystem;

const SECONDS_PER_DAY: i64 = 86_400;

/// The serial 60 of the 1900 system.
const PHANTOM_LEAP_DAY: i64 = 60;

/// Day zero of each date system.
fn epoch(system: DateSystem) -> Option<NaiveDate> {
    match system {
        // "January 0, 1900"
        DateSystem::Date1900 => NaiveDate::from_ymd_opt(1899, 12, 31),
        DateSystem::Date1904 => NaiveDate::from_ymd_opt(1904, 1, 1),
    }
}

/// Map a whole day count to a real calendar date.
fn day_to_date(days: i64, system: DateSystem) -> Option<NaiveDate> {
    if days < 0 {
        return None;
    }
    let offset = match system {
        DateSystem::Date1900 if days == PHANTOM_LEAP_DAY => return None,
        DateSystem::Date1900 if days > PHANTOM_LEAP_DAY => days - 1,
        _ => days,
    };
    epoch(system)?.checked_add_days(Days::new(offset as u64))
}

/// Convert an Excel serial number to a date (year, month, day).
///
/// Returns `None` for negative or non-finite serials. Serial 0 of the 1900
/// system is December 31, 1899, which is what time-only cells carry.
///
/// # Excel's Leap Year Bug
/// In the 1900 system, day 60 returns (1900, 2, 29) even though February 29, 1900
/// didn't actually exist. This matches what Excel displays.
pub fn serial_to_date(serial: f64, system: DateSystem) -> Option<(i32, u32, u32)> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.floor() as i64;
    if system == DateSystem::Date1900 && days == PHANTOM_LEAP_DAY {
        return Some((1900, 2, 29));
    }
    day_to_date(days, system).map(|d| (d.year(), d.month(), d.day()))
}

/// Convert an Excel serial number to a timestamp.
///
/// Seconds are rounded to the nearest whole second; a time that rounds up to
/// midnight rolls over into the next day.
pub fn serial_to_datetime(serial: f64, system: DateSystem) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let mut days = serial.floor() as i64;
    let mut seconds = (serial.fract() * SECONDS_PER_DAY as f64).round() as i64;
    if seconds >= SECONDS_PER_DAY {
        days += 1;
        seconds -= SECONDS_PER_DAY;
    }

    let date = day_to_date(days, system)?;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, 0)?;
    Some(date.and_time(time))
}

/// Convert a timestamp to an Excel serial number.
///
/// Returns `None` for timestamps before the epoch of the date system.
pub fn datetime_to_serial(dt: NaiveDateTime, system: DateSystem) -> Option<f64> {
    let mut days = dt.date().signed_duration_since(epoch(system)?).num_days();
    if days < 0 {
        return None;
    }
    if system == DateSystem::Date1900 && days >= PHANTOM_LEAP_DAY {
        days += 1;
    }

    let time = dt.time();
    let seconds = time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 / 1e9;
    Some(days as f64 + seconds / SECONDS_PER_DAY as f64)
}

/// Convert a date (year, month, day) to an Excel serial number.
pub fn date_to_serial(year: i32, month: u32, day: u32, system: DateSystem) -> Option<f64> {
    if system == DateSystem::Date1900 && (year, month, day) == (1900, 2, 29) {
        return Some(PHANTOM_LEAP_DAY as f64);
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    datetime_to_serial(date.and_time(NaiveTime::MIN), system)
}
