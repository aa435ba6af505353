// Copyright 2025 the Skyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate tick spacings.
//!
//! A [`TickScheme`] describes a family of evenly spaced positions
//! `offset + k * tick_separation`, each multiplied by every mantissa. On a log axis positions
//! are exponents, so a position `u` becomes the value `log_base^u * mantissa`.
//!
//! [`SchemeGenerator`] enumerates schemes from coarsest to finest. The order matters: the
//! selector stops at the first candidate that is too dense.

extern crate alloc;

use alloc::vec::Vec;

use smallvec::{SmallVec, smallvec};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::settings::AxisSettings;
use crate::util::{snap_to_step, to_exponent};

/// Upper bound on the positions scanned per scheme.
const MAX_POSITIONS: i64 = 10_000;

/// Relative tolerance used when deciding whether a value sits on a range bound.
const BOUND_TOLERANCE: f64 = 1e-9;

/// A candidate family of tick positions.
#[derive(Clone, Debug, PartialEq)]
pub struct TickScheme {
    /// Multipliers applied to every position, ascending and starting at 1.
    pub mantissas: SmallVec<[f64; 9]>,
    /// Distance between consecutive positions (in decades on a log axis).
    pub tick_separation: f64,
    /// Position of `k = 0`.
    pub offset: f64,
}

/// The interval a scheme is materialized into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanWindow {
    /// Display range in value space.
    pub range: (f64, f64),
    /// Range bounds aligned outward to the scan order of magnitude, in position space.
    pub outer: (f64, f64),
    /// Positions are exponents of `base`.
    pub log: bool,
    /// Logarithm base.
    pub base: f64,
}

impl TickScheme {
    /// A single-mantissa scheme with the given separation.
    pub fn linear(tick_separation: f64) -> Self {
        Self {
            mantissas: smallvec![1.0],
            tick_separation,
            offset: 0.0,
        }
    }

    /// A one-decade scheme with the given mantissas.
    pub fn decade(mantissas: impl IntoIterator<Item = f64>) -> Self {
        Self {
            mantissas: mantissas.into_iter().collect(),
            tick_separation: 1.0,
            offset: 0.0,
        }
    }

    /// Whether the scheme carries more than one mantissa.
    pub fn is_multi_mantissa(&self) -> bool {
        self.mantissas.len() > 1
    }

    /// Whether this is the dense decade scheme `1, 2, …, log_base - 1`.
    pub fn is_dense(&self, log_base: u32) -> bool {
        log_base > 2
            && u32::try_from(self.mantissas.len()) == Ok(log_base - 1)
            && self
                .mantissas
                .iter()
                .zip(1..log_base)
                .all(|(&m, i)| m == f64::from(i))
    }

    /// Concrete tick values of this scheme inside `window.range`, ascending.
    ///
    /// Values within a small tolerance of a range bound are clamped onto it.
    pub fn materialize(&self, window: &ScanWindow) -> Vec<f64> {
        let sep = self.tick_separation;
        let mut out = Vec::new();
        if !sep.is_finite() || sep <= 0.0 {
            return out;
        }

        let k_start = position_index(((window.outer.0 - self.offset) / sep).floor());
        let k_end = position_index(((window.outer.1 - self.offset) / sep).ceil())
            .min(k_start.saturating_add(MAX_POSITIONS));

        let (min, max) = window.range;
        let (lo, hi) = if window.log {
            (min * (1.0 - BOUND_TOLERANCE), max * (1.0 + BOUND_TOLERANCE))
        } else {
            let tol = (max - min).abs() * BOUND_TOLERANCE;
            (min - tol, max + tol)
        };

        for k in k_start..=k_end {
            let u = self.offset + k as f64 * sep;
            let position = if window.log {
                decade_value(window.base, u)
            } else {
                snap_to_step(u, sep)
            };
            for &m in &self.mantissas {
                let v = position * m;
                if v >= lo && v <= hi {
                    out.push(v.clamp(min, max));
                }
            }
        }
        out
    }
}

/// Enumerates candidate schemes for an axis.
#[derive(Clone, Debug)]
pub struct SchemeGenerator {
    log_base: u32,
    factor_multiply: u32,
    ticks_max: usize,
    /// Divisors of `log_base^factor_multiply`, largest first.
    divisors: Vec<u64>,
}

impl SchemeGenerator {
    /// Creates a generator for validated settings.
    pub fn new(settings: &AxisSettings) -> Self {
        let product = settings.factor_product().unwrap_or(1);
        Self {
            log_base: settings.log_base,
            factor_multiply: settings.factor_multiply,
            ticks_max: settings.ticks_max,
            divisors: divisors_descending(settings.log_base, product),
        }
    }

    /// Divisors of `log_base^factor_multiply`, largest first.
    pub fn divisors(&self) -> &[u64] {
        &self.divisors
    }

    /// Candidate schemes from coarsest to finest for a scan order of magnitude
    /// `log_base^scan_exponent`.
    ///
    /// For each descend level `d` the spacings are
    /// `f / log_base^(factor_multiply - 1) * log_base^(scan_exponent - d)` over the divisors `f`.
    /// On a log axis only whole-decade spacings survive, and the level whose order of
    /// magnitude is `1 / log_base` is followed by the sub-decade schemes.
    pub fn schemes(&self, scan_exponent: i32, log: bool) -> Vec<TickScheme> {
        let base = f64::from(self.log_base);
        let depth_limit = 10.0 * self.ticks_max as f64;
        let shift = i32::try_from(self.factor_multiply)
            .unwrap_or(i32::MAX)
            .saturating_sub(1);

        let mut out = Vec::new();
        let mut d: i32 = 0;
        while base.powi(d - 1) < depth_limit {
            let p = scan_exponent.saturating_sub(shift).saturating_sub(d);
            for &f in &self.divisors {
                let f = f as f64;
                let sep = if p >= 0 {
                    f * base.powi(p)
                } else {
                    f / base.powi(-p)
                };
                if log {
                    if let Some(decades) = whole_decades(sep) {
                        out.push(TickScheme::linear(decades));
                    }
                } else {
                    out.push(TickScheme::linear(sep));
                }
            }
            if log && scan_exponent.saturating_sub(d) == -1 {
                self.push_sub_decade(&mut out);
            }
            d += 1;
        }
        out
    }

    /// Evenly spaced roots of the base within a decade, then every integer mantissa.
    fn push_sub_decade(&self, out: &mut Vec<TickScheme>) {
        let base = f64::from(self.log_base);
        for n in 2..self.log_base {
            let n_f = f64::from(n);
            out.push(TickScheme::decade(
                (0..n).map(|i| base.powf(f64::from(i) / n_f)),
            ));
        }
        if self.log_base > 2 {
            out.push(TickScheme::decade((1..self.log_base).map(f64::from)));
        }
    }
}

/// Returns the separation as a whole number of decades, if it is one.
fn whole_decades(sep: f64) -> Option<f64> {
    let n = sep.round();
    (n >= 1.0 && (sep - n).abs() <= 1e-9 * n).then_some(n)
}

/// `base^u`, using exact integer powers where `u` is integral.
fn decade_value(base: f64, u: f64) -> f64 {
    let n = u.round();
    if (u - n).abs() < 1e-9 {
        base.powi(to_exponent(n))
    } else {
        base.powf(u)
    }
}

fn position_index(k: f64) -> i64 {
    if k.is_nan() {
        return 0;
    }
    let k = k.clamp(-1e15, 1e15);
    #[allow(clippy::cast_possible_truncation, reason = "clamped well inside the i64 range")]
    {
        k as i64
    }
}

/// All divisors of `product = base^n`, largest first.
///
/// Built from the prime factorization of `base`, so this stays cheap for large powers.
fn divisors_descending(base: u32, product: u64) -> Vec<u64> {
    let mut primes: SmallVec<[u64; 8]> = SmallVec::new();
    let mut rest = u64::from(base);
    let mut p = 2_u64;
    while p * p <= rest {
        if rest % p == 0 {
            primes.push(p);
            while rest % p == 0 {
                rest /= p;
            }
        }
        p += 1;
    }
    if rest > 1 {
        primes.push(rest);
    }

    let mut out: Vec<u64> = alloc::vec![1];
    for &prime in &primes {
        let mut power_of_prime = product;
        let mut max_power = 0_u32;
        while power_of_prime % prime == 0 {
            power_of_prime /= prime;
            max_power += 1;
        }
        let current = out.clone();
        let mut factor = 1_u64;
        for _ in 0..max_power {
            factor *= prime;
            out.extend(current.iter().map(|d| d * factor));
        }
    }
    out.sort_unstable_by(|a, b| b.cmp(a));
    out
}
