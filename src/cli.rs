use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    meter::{Channels, State},
    prelude::*,
    quantity::{energy::KilowattHours, rate::KilowattHourRate},
    tariff::schedule::RateSchedule,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Quote the cost of a consumption reading against the rate schedule.
    Quote(QuoteArgs),

    /// Print the active rate schedule.
    Tiers(ScheduleArgs),
}

#[derive(Parser)]
pub struct QuoteArgs {
    #[clap(flatten)]
    pub schedule: ScheduleArgs,

    #[clap(flatten)]
    pub reading: ReadingArgs,
}

/// The rate schedule, either from a TOML file or assembled from the tier
/// flags. The flag defaults are the EVN residential tariff.
#[derive(Parser)]
pub struct ScheduleArgs {
    /// TOML schedule file; overrides the tier-rate flags.
    #[clap(long = "schedule", env = "RATE_SCHEDULE_FILE")]
    pub schedule_file: Option<PathBuf>,

    /// Rate for the 0–50 kWh band.
    #[clap(long, default_value = "1678", env = "TIER_1_RATE")]
    pub tier_1_rate: KilowattHourRate,

    /// Rate for the 50–100 kWh band; falls back to the tier-1 rate.
    #[clap(long, default_value = "1734", env = "TIER_2_RATE")]
    pub tier_2_rate: Option<KilowattHourRate>,

    /// Rate for the 100–200 kWh band; falls back to the tier-1 rate.
    #[clap(long, default_value = "2014", env = "TIER_3_RATE")]
    pub tier_3_rate: Option<KilowattHourRate>,

    /// Rate for the 200–300 kWh band; falls back to the tier-1 rate.
    #[clap(long, default_value = "2536", env = "TIER_4_RATE")]
    pub tier_4_rate: Option<KilowattHourRate>,

    /// Rate for the 300–400 kWh band; falls back to the tier-1 rate.
    #[clap(long, default_value = "2834", env = "TIER_5_RATE")]
    pub tier_5_rate: Option<KilowattHourRate>,

    /// Rate for the 400+ kWh band; falls back to the tier-1 rate.
    #[clap(long, default_value = "2927", env = "TIER_6_RATE")]
    pub tier_6_rate: Option<KilowattHourRate>,

    /// VAT as a fraction, for example `0.1` for 10%.
    #[clap(long, default_value = "0.1", env = "VAT_RATE")]
    pub vat_rate: f64,

    /// Currency label attached to the produced costs.
    #[clap(long, default_value = "VND", env = "COST_UNIT")]
    pub cost_unit: String,
}

impl ScheduleArgs {
    pub fn load(&self) -> Result<RateSchedule> {
        match &self.schedule_file {
            Some(path) => RateSchedule::from_config_file(path),
            None => RateSchedule::try_from_rates(
                self.tier_1_rate,
                [
                    self.tier_2_rate,
                    self.tier_3_rate,
                    self.tier_4_rate,
                    self.tier_5_rate,
                    self.tier_6_rate,
                ],
                self.vat_rate,
                self.cost_unit.clone(),
            ),
        }
    }
}

/// One reading for the device, supplied either inline or as a channel-state
/// JSON document exported from the home automation platform.
#[derive(Parser)]
pub struct ReadingArgs {
    /// Channel-state JSON document with `energy`/`power`/`current`/`voltage` objects.
    #[clap(
        long = "channels",
        conflicts_with_all = ["kwh", "energy", "power", "current", "voltage"]
    )]
    pub channels_file: Option<PathBuf>,

    /// Consumption in kilowatt-hours (shorthand for `--energy N --energy-unit kWh`).
    #[clap(long, conflicts_with = "energy")]
    pub kwh: Option<KilowattHours>,

    /// Energy reading, interpreted per `--energy-unit`.
    #[clap(long)]
    pub energy: Option<f64>,

    /// Unit of the `--energy` reading: `kWh`, `Wh`, or `MJ`.
    #[clap(long, default_value = "kWh")]
    pub energy_unit: String,

    /// Power reading, interpreted as that average power sustained for one hour.
    #[clap(long)]
    pub power: Option<f64>,

    /// Unit of the `--power` reading: `W` or `kW`.
    #[clap(long, default_value = "W")]
    pub power_unit: String,

    /// Current in amperes; requires `--voltage`.
    #[clap(long, requires = "voltage")]
    pub current: Option<f64>,

    /// Voltage in volts; requires `--current`.
    #[clap(long, requires = "current")]
    pub voltage: Option<f64>,
}

impl ReadingArgs {
    pub fn channels(&self) -> Result<Channels> {
        if let Some(path) = &self.channels_file {
            let document = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read the channels from `{}`", path.display()))?;
            return serde_json::from_str(&document)
                .with_context(|| format!("failed to parse the channels in `{}`", path.display()));
        }
        Ok(Channels {
            energy: self
                .kwh
                .map(|kwh| State::new(kwh.0, "kWh"))
                .or_else(|| self.energy.map(|value| State::new(value, &self.energy_unit))),
            power: self.power.map(|value| State::new(value, &self.power_unit)),
            current: self.current.map(State::bare),
            voltage: self.voltage.map(State::bare),
        })
    }
}
