use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::power::Watts;

#[derive(Clone, Copy, PartialEq, PartialOrd, derive_more::From, derive_more::FromStr)]
#[must_use]
pub struct Amperes(pub f64);

impl Display for Amperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} A", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, PartialOrd, derive_more::From, derive_more::FromStr)]
#[must_use]
pub struct Volts(pub f64);

impl Display for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} V", self.0)
    }
}

impl Mul<Amperes> for Volts {
    type Output = Watts;

    fn mul(self, rhs: Amperes) -> Self::Output {
        Watts(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_volts_times_amperes() {
        assert_abs_diff_eq!((Volts(220.0) * Amperes(10.0)).0, 2200.0);
    }
}
