// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis: range, ticks and projection for one chart dimension.
//!
//! An [`Axis`] is built once per render pass from a frozen sample set. It never changes
//! afterwards; new data means building a new axis.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::calendar::unix_to_calendar;
use crate::format::{format_date_label, format_tick_value};
use crate::projection::Projection;
use crate::range::{auto_range, log_applies, normalize_extent, sample_extent};
use crate::select::{TickSelector, effective_log};
use crate::settings::{AxisSettings, SettingsError, TickLevel};

/// Errors returned when building an [`Axis`].
#[derive(Debug, Clone, PartialEq)]
pub enum AxisError {
    /// None of the samples was a finite number.
    NoSamples,
    /// The settings failed validation.
    Settings(SettingsError),
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSamples => f.write_str("axis needs at least one finite sample"),
            Self::Settings(err) => write!(f, "invalid axis settings: {err}"),
        }
    }
}

impl core::error::Error for AxisError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::NoSamples => None,
            Self::Settings(err) => Some(err),
        }
    }
}

impl From<SettingsError> for AxisError {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err)
    }
}

/// A tick value tagged with its level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Tick value in data units.
    pub value: f64,
    /// Major or minor.
    pub level: TickLevel,
}

/// One chart dimension: display range, major and minor ticks, and the value-to-pixel mapping.
#[derive(Clone, Debug)]
pub struct Axis {
    settings: AxisSettings,
    sample_min: f64,
    sample_max: f64,
    projection: Projection,
    major_ticks: Vec<f64>,
    minor_ticks: Vec<f64>,
}

impl Axis {
    /// Builds an axis spanning `pixel_start..pixel_end` for the given samples.
    ///
    /// `samples` is the union of every value that will be drawn along this axis; non-finite
    /// values are ignored. The pixel ends may be given in either order.
    pub fn new(
        pixel_start: f64,
        pixel_end: f64,
        samples: impl IntoIterator<Item = f64>,
        settings: AxisSettings,
    ) -> Result<Self, AxisError> {
        settings.validate()?;
        let (sample_min, sample_max) = sample_extent(samples).ok_or(AxisError::NoSamples)?;
        let (lo, hi) = normalize_extent(sample_min, sample_max);

        let wants_log = settings.log && log_applies(lo, hi);
        let (mut range_min, mut range_max) = auto_range(lo, hi, &settings, wants_log);
        let log = effective_log(wants_log, range_min, range_max);
        if settings.log && !log {
            debug!(range_min, range_max, "log scale downgraded to linear");
            if wants_log {
                (range_min, range_max) = auto_range(lo, hi, &settings, false);
            }
        }

        let projection = Projection {
            pixel_start,
            pixel_end,
            range_min,
            range_max,
            log,
        };

        let (major_ticks, minor_ticks) = {
            let selector = TickSelector::new(&settings, &projection);
            let major = selector.select(TickLevel::Major, &[]);
            let minor = selector.select(TickLevel::Minor, &major);
            (major, minor)
        };

        debug!(
            sample_min,
            sample_max,
            range_min,
            range_max,
            log,
            majors = major_ticks.len(),
            minors = minor_ticks.len(),
            "axis built"
        );

        Ok(Self {
            settings,
            sample_min,
            sample_max,
            projection,
            major_ticks,
            minor_ticks,
        })
    }

    /// Settings the axis was built with.
    pub fn settings(&self) -> &AxisSettings {
        &self.settings
    }

    /// Axis title, if any.
    pub fn label(&self) -> Option<&str> {
        self.settings.label.as_deref()
    }

    /// Pixel coordinate of `range_min`.
    pub fn pixel_start(&self) -> f64 {
        self.projection.pixel_start
    }

    /// Pixel coordinate of `range_max`.
    pub fn pixel_end(&self) -> f64 {
        self.projection.pixel_end
    }

    /// Length of the axis in pixels.
    pub fn pixel_extent(&self) -> f64 {
        self.projection.pixel_extent()
    }

    /// Smallest finite sample.
    pub fn sample_min(&self) -> f64 {
        self.sample_min
    }

    /// Largest finite sample.
    pub fn sample_max(&self) -> f64 {
        self.sample_max
    }

    /// Lower display bound.
    pub fn range_min(&self) -> f64 {
        self.projection.range_min
    }

    /// Upper display bound.
    pub fn range_max(&self) -> f64 {
        self.projection.range_max
    }

    /// Whether the axis is logarithmic after auto-downgrade.
    pub fn is_log(&self) -> bool {
        self.projection.log
    }

    /// Major tick values, ascending.
    ///
    /// Empty when no spacing yields at least `ticks_min` ticks, which is common on short axes
    /// (around 100 px or less); renderers should draw the axis without gridlines then.
    pub fn major_ticks(&self) -> &[f64] {
        &self.major_ticks
    }

    /// Minor tick values, ascending. Empty under the same conditions as [`Self::major_ticks`],
    /// or when no denser spacing lines up with the majors.
    pub fn minor_ticks(&self) -> &[f64] {
        &self.minor_ticks
    }

    /// The value-to-pixel mapping.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Maps a value to a pixel coordinate.
    pub fn project(&self, value: f64) -> f64 {
        self.projection.project(value)
    }

    /// Maps a pixel coordinate back to a value.
    pub fn unproject(&self, pixel: f64) -> f64 {
        self.projection.unproject(pixel)
    }

    /// All ticks for drawing: the majors, then the minors that do not sit on a major tick.
    pub fn ticks(&self) -> impl Iterator<Item = Tick> + '_ {
        let majors = self.major_ticks.iter().map(|&value| Tick {
            value,
            level: TickLevel::Major,
        });
        let minors = self
            .minor_ticks
            .iter()
            .filter(|&&v| !self.major_ticks.iter().any(|&m| self.same_pixel(m, v)))
            .map(|&value| Tick {
                value,
                level: TickLevel::Minor,
            });
        majors.chain(minors)
    }

    /// Label text for a tick value.
    ///
    /// Date axes read the value as Unix seconds and print `D/M/YYYY`; other axes print the
    /// plain decimal value.
    pub fn tick_text(&self, value: f64) -> String {
        if self.settings.date {
            format_date_label(&unix_to_calendar(value))
        } else {
            format_tick_value(value)
        }
    }

    fn same_pixel(&self, a: f64, b: f64) -> bool {
        (self.project(a) - self.project(b)).abs() < 1.0
    }
}
