//! CO2-equivalent amounts.
//!
//! A `Co2e` is always rounded to two decimal places at construction. There is no
//! way to build one from an unrounded or negative figure, so every value that
//! reaches an entry or a total has already been through the same rounding step.

use std::fmt;
use std::iter::Sum;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Round to two decimal places, half away from zero.
///
/// Magnitudes too large to scale by 100 have no fractional part left to round
/// and come back unchanged.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("CO2e amount must be a finite, non-negative number (got {0})")]
pub struct InvalidCo2e(f64);

/// Kilograms of CO2-equivalent, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Co2e(f64);

impl Co2e {
    pub const ZERO: Co2e = Co2e(0.0);

    /// Round `kg` to two decimal places. Returns `None` for negative or non-finite input.
    #[must_use]
    pub fn from_kg(kg: f64) -> Option<Self> {
        if !kg.is_finite() || kg < 0.0 {
            return None;
        }
        // `+ 0.0` folds a negative zero produced by rounding into positive zero.
        let rounded = round_to_cents(kg) + 0.0;
        rounded.is_finite().then_some(Self(rounded))
    }

    /// `round(quantity × factor, 2)`.
    #[must_use]
    pub fn from_product(quantity: f64, factor: f64) -> Option<Self> {
        Self::from_kg(quantity * factor)
    }

    #[must_use]
    pub const fn kg(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Co2e {
    type Error = InvalidCo2e;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_kg(value).ok_or(InvalidCo2e(value))
    }
}

impl From<Co2e> for f64 {
    fn from(value: Co2e) -> Self {
        value.0
    }
}

/// Totals saturate at `f64::MAX` rather than overflowing to infinity.
impl Sum for Co2e {
    fn sum<I: Iterator<Item = Co2e>>(iter: I) -> Self {
        let total: f64 = iter.map(Co2e::kg).sum();
        Self::from_kg(total).unwrap_or(Self(f64::MAX))
    }
}

impl<'a> Sum<&'a Co2e> for Co2e {
    fn sum<I: Iterator<Item = &'a Co2e>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Co2e {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg CO₂e", self.0)
    }
}
