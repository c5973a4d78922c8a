use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{cost::Cost, rate::KilowattHourRate};

/// Kilowatt-hours, the normalization target for every reading.
#[derive(
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
)]
#[must_use]
pub struct KilowattHours(pub f64);

impl KilowattHours {
    pub const ZERO: Self = Self(0.0);

    /// Fixed for compatibility with the reference deployment,
    /// not re-derived from a more precise conversion.
    const KILOWATT_HOURS_PER_MEGAJOULE: f64 = 0.277778;

    pub fn from_watt_hours(watt_hours: f64) -> Self {
        Self(watt_hours / 1000.0)
    }

    pub fn from_megajoules(megajoules: f64) -> Self {
        Self(megajoules * Self::KILOWATT_HOURS_PER_MEGAJOULE)
    }

    pub fn min(mut self, rhs: Self) -> Self {
        if rhs < self {
            self = rhs;
        }
        self
    }

    pub fn max(mut self, rhs: Self) -> Self {
        if rhs > self {
            self = rhs;
        }
        self
    }
}

impl Default for KilowattHours {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}kWh", self.0)
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Cost(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_from_watt_hours() {
        assert_abs_diff_eq!(KilowattHours::from_watt_hours(1000.0).0, KilowattHours(1.0).0);
    }

    #[test]
    fn test_from_megajoules() {
        assert_abs_diff_eq!(KilowattHours::from_megajoules(1.0).0, 0.277778);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(KilowattHours(1.0).min(KilowattHours(2.0)), KilowattHours(1.0));
        assert_eq!(KilowattHours(1.0).max(KilowattHours(2.0)), KilowattHours(2.0));
    }
}
