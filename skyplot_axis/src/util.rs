// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small numeric helpers shared by the range and tick code.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Return `(min, max)` for two owned values.
pub(crate) fn sorted_pair(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Logarithm of `x` in `base`.
///
/// Results within `1e-10` of an integer are snapped onto it, so exact powers of the base
/// (e.g. `log10(1000)`) do not land just below the integer.
pub(crate) fn log_base(x: f64, base: f64) -> f64 {
    let r = x.ln() / base.ln();
    let n = r.round();
    if (r - n).abs() < 1e-10 { n } else { r }
}

/// `floor(log_base(x))` as an integer exponent.
pub(crate) fn floor_log(x: f64, base: f64) -> i32 {
    to_exponent(log_base(x, base).floor())
}

/// `ceil(log_base(x))` as an integer exponent.
pub(crate) fn ceil_log(x: f64, base: f64) -> i32 {
    to_exponent(log_base(x, base).ceil())
}

/// Convert an already-integral float into an `i32` exponent, saturating at the `i32` range.
pub(crate) fn to_exponent(e: f64) -> i32 {
    if e.is_nan() {
        return 0;
    }
    let e = e.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        e as i32
    }
}

/// Round `value` to the decimal precision implied by `step`.
///
/// Keeps six more decimal digits than the step needs, which is enough for non-decimal steps
/// such as `0.125` while still removing accumulated noise like `0.30000000000000004`.
pub(crate) fn snap_to_step(value: f64, step: f64) -> f64 {
    if !value.is_finite() || !step.is_finite() || step <= 0.0 {
        return value;
    }
    let digits = 6 - floor_log(step, 10.0);
    // `10^22` is the largest power of ten that is exact in an `f64`.
    if !(0..=22).contains(&digits) {
        return value;
    }
    let scale = 10_f64.powi(digits);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn exact_powers_have_exact_logs() {
        assert_eq!(floor_log(1000.0, 10.0), 3, "log10(1000) should not round down");
        assert_eq!(ceil_log(1000.0, 10.0), 3, "log10(1000) should not round up");
        assert_eq!(floor_log(999.0, 10.0), 2, "999 is below the third decade");
        assert_eq!(ceil_log(0.5, 2.0), -1, "log2(0.5) is -1");
    }

    #[test]
    fn snapping_removes_float_noise() {
        assert_eq!(snap_to_step(0.1 + 0.2, 0.1), 0.3, "expected 0.3 after snapping");
        assert_eq!(snap_to_step(0.125, 0.125), 0.125, "binary steps must survive");
        assert_eq!(snap_to_step(40.0, 20.0), 40.0, "integers must be untouched");
    }

    #[test]
    fn sorted_pair_orders_values() {
        assert_eq!(sorted_pair(3.0, 1.0), (1.0, 3.0), "pair should be ascending");
        assert_eq!(sorted_pair(1.0, 3.0), (1.0, 3.0), "pair should be ascending");
    }
}
