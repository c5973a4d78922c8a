use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

#[derive(
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Sub,
)]
#[must_use]
pub struct Cost(pub f64);

impl Cost {
    pub const ZERO: Self = Self(0.0);

    /// Round to whole currency units, half to even. Applied at the output
    /// boundary only: intermediate accumulation stays unrounded.
    pub fn round_to_whole(self) -> Self {
        Self(self.0.round_ties_even())
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Mul<f64> for Cost {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(Cost(0.5).round_to_whole(), Cost(0.0));
        assert_eq!(Cost(1.5).round_to_whole(), Cost(2.0));
        assert_eq!(Cost(2.5).round_to_whole(), Cost(2.0));
        assert_eq!(Cost(3691.6).round_to_whole(), Cost(3692.0));
    }
}
