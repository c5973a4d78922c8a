//! Typed quantities flowing through the calculation.

pub mod cost;
pub mod current;
pub mod energy;
pub mod power;
pub mod rate;
