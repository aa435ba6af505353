// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis auto-ranging and tick generation for canvas charts.
//!
//! Given the samples drawn along one chart dimension and the pixel extent of the axis line,
//! an [`Axis`]:
//! - rounds the sample extrema outward to a "nice" display range,
//! - picks major ticks and a denser set of minor ticks that line up with them, on linear or
//!   logarithmic scales,
//! - maps values to pixels and formats tick labels (plain decimals or calendar dates).
//!
//! Drawing is out of scope; the renderer consumes [`Axis::major_ticks`],
//! [`Axis::minor_ticks`], [`Axis::project`] and [`Axis::tick_text`].
//!
//! ```
//! use skyplot_axis::{Axis, AxisSettings};
//!
//! let axis = Axis::new(0.0, 600.0, [3.0, 97.0], AxisSettings::default()).unwrap();
//! assert_eq!((axis.range_min(), axis.range_max()), (0.0, 100.0));
//! assert_eq!(axis.project(50.0), 300.0);
//! assert_eq!(axis.tick_text(40.0), "40");
//! ```
//!
//! The building blocks ([`auto_range`], [`SchemeGenerator`], [`TickSelector`], the calendar
//! conversions) are public for callers that want to drive them directly.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod calendar;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod projection;
mod range;
mod scheme;
mod select;
mod settings;
mod util;

pub use axis::{Axis, AxisError, Tick};
pub use calendar::{
    CalendarDate, GREGORIAN_START_JD, UNIX_EPOCH_JD, calendar_to_julian_day, calendar_to_unix,
    julian_day_to_calendar, julian_day_to_unix, unix_to_calendar, unix_to_julian_day,
};
pub use format::{format_date_label, format_tick_value};
pub use projection::Projection;
pub use range::{auto_range, log_applies, sample_extent};
pub use scheme::{ScanWindow, SchemeGenerator, TickScheme};
pub use select::{TickSelector, effective_log};
pub use settings::{AxisSettings, SettingsError, TickLevel};
