use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use chrono::TimeDelta;

use crate::quantity::energy::KilowattHours;

/// Average power over an interval.
#[derive(
    Clone, Copy, PartialEq, PartialOrd, derive_more::Add, derive_more::From, derive_more::FromStr,
)]
#[must_use]
pub struct Kilowatts(pub f64);

impl Kilowatts {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kW", self.0)
    }
}

impl Mul<TimeDelta> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: TimeDelta) -> Self::Output {
        let hours = rhs.as_seconds_f64() / 3600.0;
        KilowattHours(self.0 * hours)
    }
}

#[derive(Clone, Copy, PartialEq, PartialOrd, derive_more::From, derive_more::FromStr)]
#[must_use]
pub struct Watts(pub f64);

impl From<Watts> for Kilowatts {
    fn from(watts: Watts) -> Self {
        Self(watts.0 / 1000.0)
    }
}

impl Display for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} W", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_power_over_one_hour() {
        assert_abs_diff_eq!((Kilowatts(2.0) * TimeDelta::hours(1)).0, 2.0);
    }

    #[test]
    fn test_watts_to_kilowatts() {
        assert_abs_diff_eq!(Kilowatts::from(Watts(2200.0)).0, 2.2);
    }
}
