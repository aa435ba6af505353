// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-level tick selection.
//!
//! The major level is chosen first. The minor level then only considers schemes that put a
//! tick within one pixel of every major tick, so both gridlines line up.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use tracing::trace;

use crate::projection::Projection;
use crate::range::log_applies;
use crate::scheme::{ScanWindow, SchemeGenerator, TickScheme};
use crate::settings::{AxisSettings, TickLevel};
use crate::util::{ceil_log, log_base};

/// Two ticks closer than this (in pixels) count as the same gridline.
const ALIGN_PIXELS: f64 = 1.0;

/// Whether a requested log scale survives for `[range_min, range_max]`.
///
/// Log scaling is dropped when the range has too little dynamic range to be useful.
pub fn effective_log(requested: bool, range_min: f64, range_max: f64) -> bool {
    requested && log_applies(range_min, range_max)
}

/// What the selector did with one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    Misaligned,
    Adopt,
    Keep,
    Skip,
    Stop,
}

/// Chooses tick values for one axis.
#[derive(Debug)]
pub struct TickSelector<'a> {
    settings: &'a AxisSettings,
    projection: &'a Projection,
    generator: SchemeGenerator,
}

impl<'a> TickSelector<'a> {
    /// Creates a selector for an axis whose range and log flag are already decided.
    pub fn new(settings: &'a AxisSettings, projection: &'a Projection) -> Self {
        Self {
            settings,
            projection,
            generator: SchemeGenerator::new(settings),
        }
    }

    /// Number of ticks aimed for at `level`, within the configured bounds.
    pub fn target_count(&self, level: TickLevel) -> usize {
        let raw = (self.projection.pixel_extent() / self.settings.target_separation(level)).floor();
        let raw = if raw.is_finite() {
            let raw = raw.clamp(0.0, 1e9);
            #[allow(clippy::cast_possible_truncation, reason = "clamped to a small non-negative range")]
            {
                raw as usize + 1
            }
        } else {
            self.settings.ticks_max
        };
        raw.clamp(self.settings.ticks_min, self.settings.ticks_max)
    }

    /// The window candidate schemes are materialized into, and the scan exponent.
    pub fn scan_window(&self) -> (ScanWindow, i32) {
        let p = self.projection;
        let base = f64::from(self.settings.log_base);
        let (lo, hi) = if p.log {
            (log_base(p.range_min, base), log_base(p.range_max, base))
        } else {
            (p.range_min, p.range_max)
        };
        let span = hi - lo;
        let exponent = if span > 0.0 { ceil_log(span, base) } else { 0 };
        let oom = base.powi(exponent);
        let window = ScanWindow {
            range: (p.range_min, p.range_max),
            outer: ((lo / oom).floor() * oom, (hi / oom).ceil() * oom),
            log: p.log,
            base,
        };
        (window, exponent)
    }

    /// Picks the tick values for `level`.
    ///
    /// `majors` are the already chosen major ticks; they constrain the minor level and are
    /// ignored for the major level. Returns an empty list when no candidate satisfies the
    /// count bounds.
    pub fn select(&self, level: TickLevel, majors: &[f64]) -> Vec<f64> {
        let target = self.target_count(level);
        let (window, exponent) = self.scan_window();
        let log = self.projection.log;

        let mut best: Option<Vec<f64>> = None;
        for scheme in self.generator.schemes(exponent, log) {
            let ticks = scheme.materialize(&window);
            let count = ticks.len();
            let best_len = best.as_ref().map_or(0, Vec::len);
            let verdict = if level == TickLevel::Minor && !self.aligned(&ticks, majors) {
                Verdict::Misaligned
            } else {
                self.judge(&scheme, count, best_len, target)
            };
            trace!(
                ?level,
                separation = scheme.tick_separation,
                mantissas = scheme.mantissas.len(),
                count,
                target,
                ?verdict,
                "tick scheme"
            );
            let dense_overflow =
                verdict != Verdict::Misaligned && self.ends_scan(&scheme, count, target);
            match verdict {
                Verdict::Adopt => best = Some(ticks),
                Verdict::Stop => break,
                Verdict::Misaligned | Verdict::Keep | Verdict::Skip => {}
            }
            if dense_overflow {
                break;
            }
        }

        let ticks = best.unwrap_or_default();
        if ticks.len() < self.settings.ticks_min {
            return Vec::new();
        }
        ticks
    }

    /// Acceptance rules, applied in generation order.
    fn judge(&self, scheme: &TickScheme, count: usize, best_len: usize, target: usize) -> Verdict {
        let log = self.projection.log;
        if log && scheme.is_dense(self.settings.log_base) {
            return if count <= self.settings.ticks_max {
                Verdict::Adopt
            } else {
                Verdict::Skip
            };
        }
        if log && scheme.is_multi_mantissa() && count > target {
            return Verdict::Skip;
        }
        if count > target {
            return Verdict::Stop;
        }
        if count > best_len {
            Verdict::Adopt
        } else {
            Verdict::Keep
        }
    }

    /// A dense decade scheme far above the target ends the scan, even when adopted.
    fn ends_scan(&self, scheme: &TickScheme, count: usize, target: usize) -> bool {
        self.projection.log
            && scheme.is_dense(self.settings.log_base)
            && count > target.saturating_mul(3)
    }

    /// Every major tick has a candidate tick within one pixel.
    fn aligned(&self, ticks: &[f64], majors: &[f64]) -> bool {
        majors.iter().all(|&major| {
            let at = self.projection.project(major);
            ticks
                .iter()
                .any(|&t| (self.projection.project(t) - at).abs() < ALIGN_PIXELS)
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn projection(pixels: f64, range: (f64, f64), log: bool) -> Projection {
        Projection {
            pixel_start: 0.0,
            pixel_end: pixels,
            range_min: range.0,
            range_max: range.1,
            log,
        }
    }

    #[test]
    fn target_count_follows_pixel_extent() {
        let settings = AxisSettings::default();
        let p = projection(600.0, (0.0, 100.0), false);
        let selector = TickSelector::new(&settings, &p);
        assert_eq!(selector.target_count(TickLevel::Major), 8, "600 / 80 + 1");
        assert_eq!(selector.target_count(TickLevel::Minor), 20, "clamped to ticks_max");

        let p = projection(50.0, (0.0, 100.0), false);
        let selector = TickSelector::new(&settings, &p);
        assert_eq!(selector.target_count(TickLevel::Major), 2, "clamped to ticks_min");
    }

    #[test]
    fn linear_levels_are_nested() {
        let settings = AxisSettings::default();
        let p = projection(600.0, (0.0, 100.0), false);
        let selector = TickSelector::new(&settings, &p);
        let majors = selector.select(TickLevel::Major, &[]);
        assert_eq!(majors, [0.0, 20.0, 40.0, 60.0, 80.0, 100.0], "majors every 20");
        let minors = selector.select(TickLevel::Minor, &majors);
        assert_eq!(minors.len(), 11, "minors every 10, got {minors:?}");
        assert!(
            majors.iter().all(|m| minors.contains(m)),
            "every major is also a minor"
        );
    }

    #[test]
    fn log_majors_include_decades() {
        let settings = AxisSettings::default();
        let p = projection(600.0, (1.0, 1000.0), true);
        let selector = TickSelector::new(&settings, &p);
        let majors = selector.select(TickLevel::Major, &[]);
        for decade in [1.0, 10.0, 100.0, 1000.0] {
            assert!(majors.contains(&decade), "missing {decade} in {majors:?}");
        }
        let minors = selector.select(TickLevel::Minor, &majors);
        assert!(!minors.is_empty(), "expected minor ticks");
        for m in &majors {
            let at = p.project(*m);
            assert!(
                minors.iter().any(|t| (p.project(*t) - at).abs() < 1.0),
                "major {m} has no aligned minor in {minors:?}"
            );
        }
    }

    #[test]
    fn log_majors_take_square_roots_over_cube_roots() {
        let settings = AxisSettings::default();
        let p = projection(600.0, (1.0, 1000.0), true);
        let majors = TickSelector::new(&settings, &p).select(TickLevel::Major, &[]);
        // Cube roots give ten ticks against a target of eight and are skipped.
        assert_eq!(majors.len(), 7, "half-decade majors, got {majors:?}");
        for (i, &m) in majors.iter().enumerate() {
            let expected = 10_f64.powf(i as f64 / 2.0);
            assert!(
                (m - expected).abs() <= 1e-9 * expected,
                "major {i} is {m}, expected {expected}"
            );
        }
        for (i, decade) in [1.0, 10.0, 100.0, 1000.0].into_iter().enumerate() {
            assert_eq!(majors[2 * i], decade, "decades are exact");
        }
    }

    #[test]
    fn narrow_log_span_adopts_dense_mantissas() {
        let settings = AxisSettings::default();
        let p = projection(600.0, (2.0, 7.0), true);
        let majors = TickSelector::new(&settings, &p).select(TickLevel::Major, &[]);
        assert_eq!(
            majors,
            [2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            "every integer mantissa inside the range"
        );
    }

    #[test]
    fn dense_scheme_far_over_target_is_passed_over() {
        let settings = AxisSettings::default();
        let p = projection(600.0, (1.0, 1e6), true);
        let selector = TickSelector::new(&settings, &p);
        let majors = selector.select(TickLevel::Major, &[]);
        assert_eq!(
            majors,
            [1.0, 10.0, 100.0, 1e3, 1e4, 1e5, 1e6],
            "one major per decade"
        );

        let dense = TickScheme::decade((1..10).map(f64::from));
        assert!(selector.ends_scan(&dense, 25, 8), "25 ticks exceed three times 8");
        assert!(!selector.ends_scan(&dense, 24, 8), "exactly three times the target");
        let roots = TickScheme::decade([1.0, 10_f64.sqrt()]);
        assert!(!selector.ends_scan(&roots, 25, 8), "only the dense scheme ends the scan");
        let flat = projection(600.0, (1.0, 9.0), false);
        let linear = TickSelector::new(&settings, &flat);
        assert!(!linear.ends_scan(&dense, 25, 8), "linear axes never end on a dense scheme");
    }

    #[test]
    fn too_few_ticks_commit_nothing() {
        let settings = AxisSettings::default().with_tick_bounds(3, 20);
        let p = projection(10.0, (0.0, 3.0), false);
        let selector = TickSelector::new(&settings, &p);
        assert_eq!(selector.target_count(TickLevel::Major), 3, "raised to ticks_min");
        // Spacing 2 gives two ticks and spacing 1 already gives four.
        assert!(
            selector.select(TickLevel::Major, &[]).is_empty(),
            "no scheme yields exactly three ticks"
        );
    }

    #[test]
    fn narrow_ranges_lose_log_scaling() {
        assert!(effective_log(true, 1.0, 1000.0), "wide range keeps log");
        assert!(!effective_log(true, 10.0, 20.0), "narrow range drops log");
        assert!(!effective_log(false, 1.0, 1000.0), "log was never requested");
    }
}
