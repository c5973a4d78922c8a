use std::path::Path;

use itertools::Itertools;
use serde::Deserialize;

use crate::{
    prelude::*,
    quantity::{energy::KilowattHours, rate::KilowattHourRate},
};

/// One pricing block. Only the last tier of a schedule has no upper bound.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Tier {
    #[serde(rename = "upper_bound_kwh", default)]
    pub upper_bound: Option<KilowattHours>,

    pub rate: KilowattHourRate,
}

/// Validated, immutable pricing configuration.
///
/// Constructed once from user-entered configuration and replaced wholesale
/// when that configuration changes. The calculation path treats it as
/// pre-validated and never re-checks it.
#[derive(Clone, Debug)]
pub struct RateSchedule {
    tiers: Vec<Tier>,
    vat_rate: f64,
    cost_unit: String,
}

/// Tier boundaries of the reference deployment (EVN residential tariff).
const REFERENCE_BOUNDS: [f64; 5] = [50.0, 100.0, 200.0, 300.0, 400.0];

/// Reference rates in VND per kilowatt-hour.
const REFERENCE_RATES: [f64; 6] = [1678.0, 1734.0, 2014.0, 2536.0, 2834.0, 2927.0];

const REFERENCE_VAT_RATE: f64 = 0.1;
const REFERENCE_COST_UNIT: &str = "VND";

impl RateSchedule {
    pub fn try_new(tiers: Vec<Tier>, vat_rate: f64, cost_unit: String) -> Result<Self> {
        ensure!(!tiers.is_empty(), "the schedule must contain at least one tier");
        ensure!(!cost_unit.trim().is_empty(), "the cost unit must not be empty");
        ensure!(vat_rate >= 0.0, "the VAT rate must be non-negative, got {vat_rate}");
        for tier in &tiers {
            ensure!(tier.rate.0 >= 0.0, "tier rates must be non-negative, got {}", tier.rate);
        }
        let (bounded, last) = tiers.split_at(tiers.len() - 1);
        ensure!(last[0].upper_bound.is_none(), "the last tier must be unbounded");
        ensure!(
            bounded.iter().all(|tier| tier.upper_bound.is_some()),
            "only the last tier may be unbounded",
        );
        ensure!(
            bounded
                .iter()
                .filter_map(|tier| tier.upper_bound)
                .tuple_windows()
                .all(|(left, right)| left < right),
            "tier boundaries must strictly increase",
        );
        ensure!(
            bounded
                .first()
                .is_none_or(|tier| tier.upper_bound.is_some_and(|bound| bound > KilowattHours::ZERO)),
            "the first tier boundary must be positive",
        );
        Ok(Self { tiers, vat_rate, cost_unit })
    }

    /// Build a schedule over the reference boundaries. A missing rate for
    /// tiers 2–6 falls back to the tier-1 rate — resolved here, once; the
    /// calculation path never re-derives defaults.
    pub fn try_from_rates(
        first: KilowattHourRate,
        rest: [Option<KilowattHourRate>; 5],
        vat_rate: f64,
        cost_unit: String,
    ) -> Result<Self> {
        let tiers = REFERENCE_BOUNDS
            .into_iter()
            .map(|bound| Some(KilowattHours(bound)))
            .chain([None])
            .zip(std::iter::once(first).chain(rest.into_iter().map(|rate| rate.unwrap_or(first))))
            .map(|(upper_bound, rate)| Tier { upper_bound, rate })
            .collect();
        Self::try_new(tiers, vat_rate, cost_unit)
    }

    pub fn from_config_file(path: &Path) -> Result<Self> {
        let document = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read the schedule from `{}`", path.display()))?;
        let config: ScheduleConfig = toml::from_str(&document)
            .with_context(|| format!("failed to parse the schedule in `{}`", path.display()))?;
        config.try_into()
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub const fn vat_rate(&self) -> f64 {
        self.vat_rate
    }

    pub fn cost_unit(&self) -> &str {
        &self.cost_unit
    }
}

impl Default for RateSchedule {
    /// The reference deployment's schedule: EVN residential rates, 10% VAT.
    fn default() -> Self {
        let tiers = REFERENCE_BOUNDS
            .into_iter()
            .map(|bound| Some(KilowattHours(bound)))
            .chain([None])
            .zip(REFERENCE_RATES)
            .map(|(upper_bound, rate)| Tier { upper_bound, rate: KilowattHourRate(rate) })
            .collect();
        Self {
            tiers,
            vat_rate: REFERENCE_VAT_RATE,
            cost_unit: REFERENCE_COST_UNIT.to_owned(),
        }
    }
}

/// On-disk schedule, as user-entered configuration.
#[derive(Deserialize)]
pub struct ScheduleConfig {
    pub cost_unit: String,
    pub vat_rate: f64,
    pub tiers: Vec<Tier>,
}

impl TryFrom<ScheduleConfig> for RateSchedule {
    type Error = Error;

    fn try_from(config: ScheduleConfig) -> Result<Self> {
        Self::try_new(config.tiers, config.vat_rate, config.cost_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_is_valid() -> Result {
        let schedule = RateSchedule::default();
        RateSchedule::try_new(
            schedule.tiers.clone(),
            schedule.vat_rate,
            schedule.cost_unit.clone(),
        )?;
        Ok(())
    }

    #[test]
    fn test_missing_rates_fall_back_to_the_first() -> Result {
        let schedule = RateSchedule::try_from_rates(
            KilowattHourRate(1678.0),
            [None, Some(KilowattHourRate(2014.0)), None, None, None],
            0.1,
            "VND".to_owned(),
        )?;
        assert_eq!(schedule.tiers()[1].rate, KilowattHourRate(1678.0));
        assert_eq!(schedule.tiers()[2].rate, KilowattHourRate(2014.0));
        assert_eq!(schedule.tiers()[5].rate, KilowattHourRate(1678.0));
        Ok(())
    }

    #[test]
    fn test_rejects_negative_rate() {
        let tiers = vec![
            Tier { upper_bound: Some(KilowattHours(50.0)), rate: KilowattHourRate(-1.0) },
            Tier { upper_bound: None, rate: KilowattHourRate(1.0) },
        ];
        assert!(RateSchedule::try_new(tiers, 0.1, "VND".to_owned()).is_err());
    }

    #[test]
    fn test_rejects_negative_vat() {
        let tiers = vec![Tier { upper_bound: None, rate: KilowattHourRate(1.0) }];
        assert!(RateSchedule::try_new(tiers, -0.1, "VND".to_owned()).is_err());
    }

    #[test]
    fn test_rejects_non_increasing_boundaries() {
        let tiers = vec![
            Tier { upper_bound: Some(KilowattHours(100.0)), rate: KilowattHourRate(1.0) },
            Tier { upper_bound: Some(KilowattHours(50.0)), rate: KilowattHourRate(2.0) },
            Tier { upper_bound: None, rate: KilowattHourRate(3.0) },
        ];
        assert!(RateSchedule::try_new(tiers, 0.0, "VND".to_owned()).is_err());
    }

    #[test]
    fn test_rejects_bounded_last_tier() {
        let tiers =
            vec![Tier { upper_bound: Some(KilowattHours(50.0)), rate: KilowattHourRate(1.0) }];
        assert!(RateSchedule::try_new(tiers, 0.0, "VND".to_owned()).is_err());
    }

    #[test]
    fn test_rejects_unbounded_inner_tier() {
        let tiers = vec![
            Tier { upper_bound: None, rate: KilowattHourRate(1.0) },
            Tier { upper_bound: None, rate: KilowattHourRate(2.0) },
        ];
        assert!(RateSchedule::try_new(tiers, 0.0, "VND".to_owned()).is_err());
    }

    #[test]
    fn test_rejects_empty_cost_unit() {
        let tiers = vec![Tier { upper_bound: None, rate: KilowattHourRate(1.0) }];
        assert!(RateSchedule::try_new(tiers, 0.0, "  ".to_owned()).is_err());
    }

    #[test]
    fn test_parse_config() -> Result {
        // language=TOML
        const DOCUMENT: &str = r#"
            cost_unit = "VND"
            vat_rate = 0.1

            [[tiers]]
            upper_bound_kwh = 50.0
            rate = 1678.0

            [[tiers]]
            rate = 2927.0
        "#;
        let schedule: RateSchedule = toml::from_str::<ScheduleConfig>(DOCUMENT)?.try_into()?;
        assert_eq!(schedule.tiers().len(), 2);
        assert_eq!(schedule.tiers()[0].upper_bound, Some(KilowattHours(50.0)));
        assert_eq!(schedule.tiers()[1].rate, KilowattHourRate(2927.0));
        assert_eq!(schedule.cost_unit(), "VND");
        Ok(())
    }
}
