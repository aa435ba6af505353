// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-to-pixel projection.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Maps values in `[range_min, range_max]` onto the pixel interval `[pixel_start, pixel_end]`.
///
/// The pixel ends may be given in either order, so a vertical axis with `pixel_end` above
/// `pixel_start` maps larger values to smaller pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Pixel coordinate of `range_min`.
    pub pixel_start: f64,
    /// Pixel coordinate of `range_max`.
    pub pixel_end: f64,
    /// Lower display bound.
    pub range_min: f64,
    /// Upper display bound.
    pub range_max: f64,
    /// Interpolate in log space (requires a positive range).
    pub log: bool,
}

impl Projection {
    /// Fraction of the way from `range_min` to `range_max` (0 at the start, 1 at the end).
    pub fn fraction(&self, value: f64) -> f64 {
        let (min, max) = (self.range_min, self.range_max);
        if self.log {
            let denom = (max / min).ln();
            if denom == 0.0 || !denom.is_finite() {
                return 0.0;
            }
            (value / min).ln() / denom
        } else {
            let denom = max - min;
            if denom == 0.0 {
                return 0.0;
            }
            (value - min) / denom
        }
    }

    /// Maps a value to a pixel coordinate.
    ///
    /// `range_min` maps exactly to `pixel_start` and `range_max` exactly to `pixel_end`.
    pub fn project(&self, value: f64) -> f64 {
        let p = self.fraction(value);
        self.pixel_start * (1.0 - p) + self.pixel_end * p
    }

    /// Maps a pixel coordinate back to a value.
    pub fn unproject(&self, pixel: f64) -> f64 {
        let extent = self.pixel_end - self.pixel_start;
        if extent == 0.0 {
            return self.range_min;
        }
        let p = (pixel - self.pixel_start) / extent;
        if self.log {
            self.range_min * (self.range_max / self.range_min).powf(p)
        } else {
            self.range_min + (self.range_max - self.range_min) * p
        }
    }

    /// Length of the axis in pixels.
    pub fn pixel_extent(&self) -> f64 {
        (self.pixel_end - self.pixel_start).abs()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn linear(pixel_start: f64, pixel_end: f64) -> Projection {
        Projection {
            pixel_start,
            pixel_end,
            range_min: 0.0,
            range_max: 100.0,
            log: false,
        }
    }

    #[test]
    fn range_bounds_map_exactly_to_pixel_ends() {
        for p in [linear(0.1, 0.7), linear(480.0, 20.0)] {
            assert_eq!(p.project(0.0), p.pixel_start, "min must map to start for {p:?}");
            assert_eq!(p.project(100.0), p.pixel_end, "max must map to end for {p:?}");
        }
        let log = Projection {
            pixel_start: 13.0,
            pixel_end: 377.0,
            range_min: 0.2,
            range_max: 7000.0,
            log: true,
        };
        assert_eq!(log.project(0.2), 13.0, "log min");
        assert_eq!(log.project(7000.0), 377.0, "log max");
    }

    #[test]
    fn inverted_axis_decreases() {
        let p = linear(400.0, 0.0);
        assert_eq!(p.project(25.0), 300.0, "quarter of the way up");
        assert!(p.project(60.0) < p.project(40.0), "larger values sit higher");
    }

    #[test]
    fn log_decades_are_evenly_spaced() {
        let p = Projection {
            pixel_start: 0.0,
            pixel_end: 300.0,
            range_min: 1.0,
            range_max: 1000.0,
            log: true,
        };
        assert!((p.project(10.0) - 100.0).abs() < 1e-9, "10 at one third");
        assert!((p.project(100.0) - 200.0).abs() < 1e-9, "100 at two thirds");
    }

    #[test]
    fn unproject_inverts_project() {
        let p = linear(600.0, 0.0);
        assert!((p.unproject(p.project(37.5)) - 37.5).abs() < 1e-9, "linear inverse");
        let log = Projection {
            log: true,
            range_min: 1.0,
            range_max: 1e6,
            ..p
        };
        assert!((log.unproject(log.project(420.0)) - 420.0).abs() < 1e-6, "log inverse");
    }

    #[test]
    fn zero_width_range_maps_to_start() {
        let p = Projection {
            range_max: 0.0,
            ..linear(5.0, 50.0)
        };
        assert_eq!(p.project(3.0), 5.0, "degenerate range");
    }
}
