// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::string::String;

use crate::calendar::CalendarDate;
use crate::util::floor_log;

/// Significant digits kept when printing a tick value.
const SIGNIFICANT_DIGITS: i32 = 12;

/// Formats a tick value as a plain decimal string.
///
/// Integral values print without a fractional part (`100`, not `100.0`), and values are
/// rounded to twelve significant digits first so float noise does not leak into labels.
pub fn format_tick_value(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        // Avoid printing `-0`.
        return alloc::format!("{}", if v == 0.0 { 0.0 } else { v });
    }
    let magnitude = floor_log(v.abs(), 10.0);
    let decimals = SIGNIFICANT_DIGITS - 1 - magnitude;
    if !(0..=20).contains(&decimals) {
        return alloc::format!("{v}");
    }
    let decimals = usize::try_from(decimals).unwrap_or(0);
    let mut s = alloc::format!("{v:.decimals$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Formats a calendar date as `D/M/YYYY`, without zero padding.
pub fn format_date_label(date: &CalendarDate) -> String {
    alloc::format!("{}/{}/{}", date.day, date.month, date.year)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_tick_value(100.0), "100", "integral value");
        assert_eq!(format_tick_value(-20.0), "-20", "negative integral value");
        assert_eq!(format_tick_value(0.0), "0", "zero");
        assert_eq!(format_tick_value(-0.0), "0", "negative zero");
    }

    #[test]
    fn float_noise_is_trimmed() {
        assert_eq!(format_tick_value(0.1 + 0.2), "0.3", "0.1 + 0.2");
        assert_eq!(format_tick_value(0.125), "0.125", "exact binary fraction");
        assert_eq!(format_tick_value(31.622_776_601_683_8), "31.6227766017", "root ticks");
    }

    #[test]
    fn extreme_magnitudes_fall_back_to_display() {
        assert_eq!(format_tick_value(1e30), "1000000000000000000000000000000", "large");
        assert_eq!(format_tick_value(f64::INFINITY), "inf", "infinite");
    }

    #[test]
    fn dates_are_unpadded() {
        assert_eq!(
            format_date_label(&CalendarDate::new(1970, 1, 3)),
            "3/1/1970",
            "day/month/year"
        );
    }
}
