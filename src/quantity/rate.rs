use std::fmt::{Debug, Display, Formatter};

/// Currency units per kilowatt-hour. The currency itself is a display label
/// owned by the schedule.
#[derive(
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    derive_more::From,
    derive_more::FromStr,
)]
#[must_use]
pub struct KilowattHourRate(pub f64);

impl KilowattHourRate {
    pub const ZERO: Self = Self(0.0);
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}/kWh", self.0)
    }
}
