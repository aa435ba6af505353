// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `skyplot_axis`.

use skyplot_axis::{Axis, AxisError, AxisSettings, TickLevel};

const DAY: f64 = 86_400.0;

fn main() -> Result<(), AxisError> {
    // Percentages along a 600 px horizontal axis.
    let percent = Axis::new(
        0.0,
        600.0,
        [3.0, 41.5, 97.0],
        AxisSettings::default().with_label("Cloud cover (%)"),
    )?;
    print_axis("linear", &percent);

    // Flux densities spanning three decades on a vertical axis (y grows downward).
    let flux = Axis::new(
        400.0,
        0.0,
        [1.2, 35.0, 980.0],
        AxisSettings::default()
            .with_log(true)
            .with_label("Flux (mJy)"),
    )?;
    print_axis("log", &flux);

    // A log request on too narrow a range falls back to linear.
    let narrow = Axis::new(0.0, 600.0, [10.0, 20.0], AxisSettings::default().with_log(true))?;
    print_axis("downgraded", &narrow);

    // Six weeks of observation nights.
    let start = 1_700_000_000.0;
    let nights = (0..42).map(|n| start + f64::from(n) * DAY);
    let dates = Axis::new(
        0.0,
        800.0,
        nights,
        AxisSettings::default()
            .with_date(true)
            .with_label("Night"),
    )?;
    print_axis("date", &dates);

    Ok(())
}

fn print_axis(name: &str, axis: &Axis) {
    println!(
        "{name}: {} samples {}..{} range {}..{} log={}",
        axis.label().unwrap_or("(untitled)"),
        axis.sample_min(),
        axis.sample_max(),
        axis.range_min(),
        axis.range_max(),
        axis.is_log(),
    );
    for tick in axis.ticks() {
        let marker = match tick.level {
            TickLevel::Major => "major",
            TickLevel::Minor => "  minor",
        };
        println!(
            "  {marker} {:>8.2}px {}",
            axis.project(tick.value),
            axis.tick_text(tick.value)
        );
    }
}
