//! The progressive block tariff: schedule construction and quoting.

pub mod quote;
pub mod schedule;
