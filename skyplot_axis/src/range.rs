// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Automatic display-range rounding.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::settings::AxisSettings;
use crate::util::{floor_log, log_base, sorted_pair};

/// Returns `(min, max)` over the finite values, or `None` if there are none.
pub fn sample_extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Whether `[min, max]` spans enough dynamic range for a log scale.
///
/// Requires a positive lower bound and `max >= 3 * min`.
pub fn log_applies(min: f64, max: f64) -> bool {
    min > 0.0 && max >= 3.0 * min
}

/// Orders the extrema and widens an empty interval so that `min < max`.
pub(crate) fn normalize_extent(min: f64, max: f64) -> (f64, f64) {
    let (min, mut max) = sorted_pair(min, max);
    if min == max {
        max = min + 1.0;
        // `+ 1` is absorbed by very large magnitudes.
        if min == max {
            max = min + min.abs();
        }
    }
    (min, max)
}

/// Rounds `[sample_min, sample_max]` outward to the order of magnitude of its span.
///
/// On a log axis, a rounded lower bound that is not positive (`[1, 1000]` rounds to
/// `[0, 1000]`) is replaced by rounding the logarithms of the extrema instead, which keeps the
/// range positive and aligned with (fractions of) decades. Explicit `settings.min` /
/// `settings.max` replace the computed bounds as given.
pub fn auto_range(sample_min: f64, sample_max: f64, settings: &AxisSettings, log: bool) -> (f64, f64) {
    let (lo, hi) = normalize_extent(sample_min, sample_max);
    let base = f64::from(settings.log_base);

    let (mut min, mut max) = round_outward(lo, hi, base);
    if log && lo > 0.0 && min <= 0.0 {
        let (u0, u1) = round_outward(log_base(lo, base), log_base(hi, base), base);
        (min, max) = (base.powf(u0).min(lo), base.powf(u1).max(hi));
    }

    if let Some(v) = settings.min {
        min = v;
    }
    if let Some(v) = settings.max {
        max = v;
    }
    normalize_extent(min, max)
}

/// `floor(lo / oom) * oom` and `ceil(hi / oom) * oom` where `oom = base^floor(log(hi - lo))`.
fn round_outward(lo: f64, hi: f64, base: f64) -> (f64, f64) {
    let e = floor_log(hi - lo, base);
    let (min, max) = if e >= 0 {
        let oom = base.powi(e);
        ((lo / oom).floor() * oom, (hi / oom).ceil() * oom)
    } else {
        // Scale up by an exact power instead of dividing by an inexact fraction.
        let scale = base.powi(-e);
        ((lo * scale).floor() / scale, (hi * scale).ceil() / scale)
    };
    (min.min(lo), max.max(hi))
}
