use crate::{
    meter::{Channels, ReadingError},
    normalizer,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    tariff::schedule::RateSchedule,
};

/// Usage billed within one tier.
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct TierShare {
    pub lower_bound: KilowattHours,
    pub upper_bound: Option<KilowattHours>,
    pub rate: KilowattHourRate,

    /// Portion of the usage that falls inside this tier.
    pub billable: KilowattHours,

    /// Unrounded contribution to the base cost.
    pub cost: Cost,
}

/// Cost of one consumption reading.
#[derive(Clone, Debug)]
#[must_use]
pub struct Quote {
    pub usage: KilowattHours,

    /// Per-tier breakdown, unrounded.
    pub shares: Vec<TierShare>,

    /// Rounded to whole currency units, half to even.
    pub base: Cost,

    /// The unrounded base times `1 + VAT`, rounded the same way.
    pub with_tax: Cost,
}

impl Quote {
    pub fn zero() -> Self {
        Self {
            usage: KilowattHours::ZERO,
            shares: Vec::new(),
            base: Cost::ZERO,
            with_tax: Cost::ZERO,
        }
    }
}

impl RateSchedule {
    /// Walk the tiers in order, billing each block at its own rate.
    /// Non-positive usage costs exactly zero.
    pub fn quote(&self, usage: KilowattHours) -> Quote {
        let mut shares = Vec::with_capacity(self.tiers().len());
        let mut base = Cost::ZERO;
        let mut lower_bound = KilowattHours::ZERO;
        for tier in self.tiers() {
            let cap = tier.upper_bound.unwrap_or(usage);
            let billable = (usage.min(cap) - lower_bound).max(KilowattHours::ZERO);
            let cost = billable * tier.rate;
            base += cost;
            shares.push(TierShare {
                lower_bound,
                upper_bound: tier.upper_bound,
                rate: tier.rate,
                billable,
                cost,
            });
            if let Some(upper_bound) = tier.upper_bound {
                lower_bound = upper_bound;
            }
        }
        let with_tax = base * (1.0 + self.vat_rate());
        Quote {
            usage,
            shares,
            base: base.round_to_whole(),
            with_tax: with_tax.round_to_whole(),
        }
    }

    /// Normalize the device's preferred channel and quote the result.
    ///
    /// Normalization failures propagate: "could not determine consumption"
    /// is a different observation than zero consumption.
    pub fn quote_channels(&self, channels: &Channels) -> Result<Quote, ReadingError> {
        normalizer::normalize(channels).map(|usage| self.quote(usage))
    }

    /// The reference deployment's behavior: any normalization failure
    /// degrades to a zero quote. Kept for display surfaces that must always
    /// show a number; the failure kind is still logged.
    pub fn quote_channels_or_zero(&self, channels: &Channels) -> Quote {
        self.quote_channels(channels).unwrap_or_else(|error| {
            warn!(%error, "degrading the reading to a zero quote");
            Quote::zero()
        })
    }
}
