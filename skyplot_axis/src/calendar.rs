// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Julian Day conversions for date-axis labels.
//!
//! Dates use the proleptic civil calendar with the British reform of 1752: day numbers below
//! [`GREGORIAN_START_JD`] are in the Julian calendar, later ones in the Gregorian calendar.
//! Years before -4712 are not supported and produce unspecified dates.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Julian Day of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// First Julian Day number of the Gregorian calendar (1752-09-14).
pub const GREGORIAN_START_JD: f64 = 2_361_222.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

// Packed `YYYYMMDD` date of the first Gregorian day (1752-09-14).
const FIRST_GREGORIAN_DATE: i64 = 17_520_914;

/// A civil calendar date and time of day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    /// Astronomical year (year 0 is 1 BC).
    pub year: i32,
    /// Month, `1..=12`.
    pub month: u32,
    /// Day of month, `1..=31`.
    pub day: u32,
    /// Hour, `0..=23`.
    pub hour: u32,
    /// Minute, `0..=59`.
    pub minute: u32,
    /// Second, `0..=59`.
    pub second: u32,
}

impl CalendarDate {
    /// Creates a date at midnight.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            ..Self::default()
        }
    }

    /// Sets the time of day.
    pub fn with_time(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// The date packed as a `YYYYMMDD` integer, used to pick the calendar.
    fn packed(&self) -> i64 {
        i64::from(self.year) * 10_000 + i64::from(self.month) * 100 + i64::from(self.day)
    }
}

/// Converts Unix seconds into a Julian Day.
pub fn unix_to_julian_day(unix_seconds: f64) -> f64 {
    unix_seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Converts a Julian Day into Unix seconds.
pub fn julian_day_to_unix(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

/// Converts a Julian Day into a civil date and time of day.
///
/// The time of day is rounded to the nearest second; a day fraction that rounds up to
/// midnight rolls over into the next date.
pub fn julian_day_to_calendar(jd: f64) -> CalendarDate {
    let shifted = jd + 0.5;
    let mut z = shifted.floor();
    let mut secs = ((shifted - z) * SECONDS_PER_DAY).round();
    if secs >= SECONDS_PER_DAY {
        z += 1.0;
        secs -= SECONDS_PER_DAY;
    }

    let a = if z < GREGORIAN_START_JD {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let secs = to_u32(secs);
    CalendarDate {
        year: to_i32(year),
        month: to_u32(month),
        day: to_u32(day),
        hour: secs / 3600,
        minute: (secs / 60) % 60,
        second: secs % 60,
    }
}

/// Converts a civil date and time of day into a Julian Day.
///
/// Dates before 1752-09-14 are read as Julian calendar dates, later ones as Gregorian.
/// The eleven days dropped by the reform are therefore still accepted as Julian dates.
pub fn calendar_to_julian_day(date: &CalendarDate) -> f64 {
    let mut y = f64::from(date.year);
    let mut m = f64::from(date.month);
    if date.month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let b = if date.packed() < FIRST_GREGORIAN_DATE {
        0.0
    } else {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    };

    let day_fraction = (f64::from(date.hour)
        + f64::from(date.minute) / 60.0
        + f64::from(date.second) / 3600.0)
        / 24.0;

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + f64::from(date.day) + b
        - 1524.5
        + day_fraction
}

/// Converts Unix seconds into a civil date and time of day.
pub fn unix_to_calendar(unix_seconds: f64) -> CalendarDate {
    julian_day_to_calendar(unix_to_julian_day(unix_seconds))
}

/// Converts a civil date and time of day into Unix seconds.
pub fn calendar_to_unix(date: &CalendarDate) -> f64 {
    julian_day_to_unix(calendar_to_julian_day(date))
}

fn to_i32(v: f64) -> i32 {
    let v = v.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        v as i32
    }
}

fn to_u32(v: f64) -> u32 {
    let v = v.clamp(0.0, f64::from(u32::MAX));
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to the u32 range"
    )]
    {
        v as u32
    }
}
