// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Which tick level a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickLevel {
    /// Primary, sparser ticks (labelled gridlines).
    Major,
    /// Secondary, denser ticks aligned with the major ticks.
    Minor,
}

impl TickLevel {
    /// Both levels, in the order they are computed.
    pub const ALL: [Self; 2] = [Self::Major, Self::Minor];

    fn index(self) -> usize {
        match self {
            Self::Major => 0,
            Self::Minor => 1,
        }
    }
}

/// Errors returned by [`AxisSettings::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// `log_base` must be at least 2.
    LogBase(u32),
    /// `factor_multiply` must be at least 1 and `log_base^factor_multiply` must fit in a `u64`.
    FactorMultiply(u32),
    /// Tick bounds must satisfy `1 <= ticks_min <= ticks_max`.
    TickBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
    /// Target tick separations must be finite and positive.
    TargetSeparation(TickLevel, f64),
    /// Range overrides must be finite, with `min <= max` when both are set.
    RangeOverride {
        /// Configured minimum override.
        min: Option<f64>,
        /// Configured maximum override.
        max: Option<f64>,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LogBase(base) => write!(f, "log base must be at least 2, got {base}"),
            Self::FactorMultiply(n) => {
                write!(f, "factor multiply must be at least 1 and small enough, got {n}")
            }
            Self::TickBounds { min, max } => {
                write!(f, "tick bounds must satisfy 1 <= min <= max, got {min}..={max}")
            }
            Self::TargetSeparation(level, sep) => {
                write!(f, "{level:?} target separation must be positive, got {sep}")
            }
            Self::RangeOverride { min, max } => {
                write!(f, "invalid range override min={min:?} max={max:?}")
            }
        }
    }
}

impl core::error::Error for SettingsError {}

/// Axis settings.
///
/// Every field has a usable default, so the usual pattern is
/// `AxisSettings::default().with_log(true)` and friends.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSettings {
    /// Exact lower display bound, replacing the computed one.
    pub min: Option<f64>,
    /// Exact upper display bound, replacing the computed one.
    pub max: Option<f64>,
    /// Axis title. Passed through for the renderer.
    pub label: Option<String>,
    /// Tick values are Unix seconds and are labelled as calendar dates.
    pub date: bool,
    /// Request logarithmic scaling. Downgraded to linear when the range is too narrow.
    pub log: bool,
    /// Base of the logarithm and of the "nice" spacings.
    pub log_base: u32,
    /// Number of factors of `log_base` used to build nice linear spacings.
    ///
    /// With base 10 and 2 factors the spacings are the divisors of 100:
    /// 1, 2, 4, 5, 10, 20, 25, 50 and 100 (times a power of ten).
    pub factor_multiply: u32,
    /// Smallest acceptable number of ticks per level.
    pub ticks_min: usize,
    /// Largest acceptable number of ticks per level.
    pub ticks_max: usize,
    /// Desired pixel spacing between ticks, `[major, minor]`.
    pub ticks_target_sep: [f64; 2],
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            label: None,
            date: false,
            log: false,
            log_base: 10,
            factor_multiply: 2,
            ticks_min: 2,
            ticks_max: 20,
            ticks_target_sep: [80.0, 20.0],
        }
    }
}

impl AxisSettings {
    /// Override the lower display bound.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Override the upper display bound.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the axis title.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label ticks as calendar dates (values are Unix seconds).
    pub fn with_date(mut self, date: bool) -> Self {
        self.date = date;
        self
    }

    /// Request logarithmic scaling.
    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    /// Set the logarithm base.
    pub fn with_log_base(mut self, log_base: u32) -> Self {
        self.log_base = log_base;
        self
    }

    /// Set the number of base factors used for nice spacings.
    pub fn with_factor_multiply(mut self, factor_multiply: u32) -> Self {
        self.factor_multiply = factor_multiply;
        self
    }

    /// Set the per-level tick count bounds.
    pub fn with_tick_bounds(mut self, ticks_min: usize, ticks_max: usize) -> Self {
        self.ticks_min = ticks_min;
        self.ticks_max = ticks_max;
        self
    }

    /// Set the desired pixel spacing for major and minor ticks.
    pub fn with_target_separation(mut self, major: f64, minor: f64) -> Self {
        self.ticks_target_sep = [major, minor];
        self
    }

    /// Target pixel spacing for `level`.
    pub fn target_separation(&self, level: TickLevel) -> f64 {
        self.ticks_target_sep[level.index()]
    }

    /// `log_base^factor_multiply`, the number whose divisors are the nice spacings.
    ///
    /// Returns `None` on overflow.
    pub fn factor_product(&self) -> Option<u64> {
        u64::from(self.log_base).checked_pow(self.factor_multiply)
    }

    /// Check the settings for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.log_base < 2 {
            return Err(SettingsError::LogBase(self.log_base));
        }
        if self.factor_multiply == 0 || self.factor_product().is_none() {
            return Err(SettingsError::FactorMultiply(self.factor_multiply));
        }
        if self.ticks_min == 0 || self.ticks_min > self.ticks_max {
            return Err(SettingsError::TickBounds {
                min: self.ticks_min,
                max: self.ticks_max,
            });
        }
        for level in TickLevel::ALL {
            let sep = self.target_separation(level);
            if !sep.is_finite() || sep <= 0.0 {
                return Err(SettingsError::TargetSeparation(level, sep));
            }
        }
        let finite = |v: Option<f64>| v.is_none_or(f64::is_finite);
        let ordered = match (self.min, self.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        };
        if !finite(self.min) || !finite(self.max) || !ordered {
            return Err(SettingsError::RangeOverride {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(AxisSettings::default().validate(), Ok(()), "defaults must validate");
    }

    #[test]
    fn default_factor_product_is_one_hundred() {
        assert_eq!(AxisSettings::default().factor_product(), Some(100), "10^2");
    }

    #[test]
    fn rejects_unusable_values() {
        let base = AxisSettings::default();
        assert_eq!(
            base.clone().with_log_base(1).validate(),
            Err(SettingsError::LogBase(1)),
            "base 1 has no logarithm"
        );
        assert_eq!(
            base.clone().with_factor_multiply(0).validate(),
            Err(SettingsError::FactorMultiply(0)),
            "zero factors give no spacings"
        );
        assert_eq!(
            base.clone().with_factor_multiply(40).validate(),
            Err(SettingsError::FactorMultiply(40)),
            "10^40 overflows u64"
        );
        assert_eq!(
            base.clone().with_tick_bounds(5, 3).validate(),
            Err(SettingsError::TickBounds { min: 5, max: 3 }),
            "inverted tick bounds"
        );
        assert_eq!(
            base.clone().with_target_separation(80.0, 0.0).validate(),
            Err(SettingsError::TargetSeparation(TickLevel::Minor, 0.0)),
            "zero minor separation"
        );
        assert_eq!(
            base.clone().with_min(10.0).with_max(1.0).validate(),
            Err(SettingsError::RangeOverride {
                min: Some(10.0),
                max: Some(1.0)
            }),
            "inverted overrides"
        );
        assert!(
            base.with_max(f64::INFINITY).validate().is_err(),
            "infinite override"
        );
    }
}
