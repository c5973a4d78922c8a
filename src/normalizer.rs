//! Normalizes a raw channel reading into kilowatt-hours.

use chrono::TimeDelta;

use crate::{
    meter::{Channels, ReadingError, State},
    quantity::{
        current::{Amperes, Volts},
        energy::KilowattHours,
        power::{Kilowatts, Watts},
    },
};

/// Convert the preferred configured channel into kilowatt-hours.
///
/// Precedence is energy, then power, then the current + voltage pair.
/// The choice is made once per calculation: a failure on the preferred
/// channel is the result, never a cue to try the next channel.
pub fn normalize(channels: &Channels) -> Result<KilowattHours, ReadingError> {
    if let Some(energy) = &channels.energy {
        return normalize_energy(energy);
    }
    if let Some(power) = &channels.power {
        return normalize_power(power);
    }
    if let (Some(current), Some(voltage)) = (&channels.current, &channels.voltage) {
        return normalize_electrical(current, voltage);
    }
    // A lone current or voltage sensor is not a usable channel.
    Err(ReadingError::NoChannelConfigured)
}

fn normalize_energy(state: &State) -> Result<KilowattHours, ReadingError> {
    let value = state.value()?;
    match state.unit() {
        Some("kWh") => Ok(KilowattHours(value)),
        Some("Wh") => Ok(KilowattHours::from_watt_hours(value)),
        Some("MJ") => Ok(KilowattHours::from_megajoules(value)),
        unit => Err(ReadingError::InvalidUnit { unit: unit.unwrap_or_default().to_owned() }),
    }
}

fn normalize_power(state: &State) -> Result<KilowattHours, ReadingError> {
    let value = state.value()?;
    let power = match state.unit() {
        Some("W") => Kilowatts::from(Watts(value)),
        Some("kW") => Kilowatts(value),
        unit => {
            return Err(ReadingError::InvalidUnit { unit: unit.unwrap_or_default().to_owned() });
        }
    };
    // The modeling convention: a power reading stands for that average power
    // sustained for exactly one hour.
    Ok(power * TimeDelta::hours(1))
}

fn normalize_electrical(current: &State, voltage: &State) -> Result<KilowattHours, ReadingError> {
    let watts = Volts(voltage.value()?) * Amperes(current.value()?);
    Ok(Kilowatts::from(watts) * TimeDelta::hours(1))
}
