//! Channel states as supplied by the home automation platform.

use serde::Deserialize;

/// One entity state in the host platform's format: a stringly-typed value
/// with an optional unit of measurement among its attributes.
#[derive(Clone, Debug, Deserialize)]
pub struct State {
    pub state: String,

    #[serde(default)]
    pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Attributes {
    #[serde(rename = "unit_of_measurement")]
    pub unit: Option<String>,
}

impl State {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            state: value.to_string(),
            attributes: Attributes { unit: Some(unit.to_owned()) },
        }
    }

    /// A state with no unit of measurement attached.
    pub fn bare(value: f64) -> Self {
        Self { state: value.to_string(), attributes: Attributes::default() }
    }

    /// Numeric value of the state. The platform's not-reporting markers are
    /// classified separately from values that simply fail to parse.
    pub fn value(&self) -> Result<f64, ReadingError> {
        match self.state.as_str() {
            "unavailable" | "unknown" => Err(ReadingError::Unavailable),
            state => state
                .trim()
                .parse()
                .map_err(|_| ReadingError::InvalidValue { state: state.to_owned() }),
        }
    }

    pub fn unit(&self) -> Option<&str> {
        self.attributes.unit.as_deref()
    }
}

/// The measurement channels configured for one logical device. Each channel
/// is optional; which one gets used is decided by the normalizer's fixed
/// precedence, not by trial and error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Channels {
    pub energy: Option<State>,
    pub power: Option<State>,
    pub current: Option<State>,
    pub voltage: Option<State>,
}

/// Expected, non-fatal reading failures. None of these is ever collapsed
/// into a cost value by the calculation path itself.
#[derive(Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ReadingError {
    #[display("the channel is not reporting")]
    Unavailable,

    #[display("unrecognised unit of measurement `{unit}`")]
    InvalidUnit { unit: String },

    #[display("non-numeric state `{state}`")]
    InvalidValue { state: String },

    #[display("no measurement channel is configured")]
    NoChannelConfigured,
}

#[cfg(test)]
mod tests {
    use crate::prelude::Result;

    use super::*;

    #[test]
    fn test_deserialize_channels_ok() -> Result {
        // language=JSON
        const DOCUMENT: &str = r#"
            {
                "energy": {
                    "entity_id": "sensor.house_energy",
                    "state": "75.0",
                    "attributes": {
                        "unit_of_measurement": "kWh",
                        "device_class": "energy"
                    },
                    "last_updated": "2025-10-01T17:08:40.326747+00:00"
                },
                "power": {
                    "state": "unavailable",
                    "attributes": {}
                }
            }
        "#;
        let channels: Channels = serde_json::from_str(DOCUMENT)?;
        let energy = channels.energy.expect("the energy channel is present");
        assert_eq!(energy.value()?, 75.0);
        assert_eq!(energy.unit(), Some("kWh"));
        let power = channels.power.expect("the power channel is present");
        assert_eq!(power.value(), Err(ReadingError::Unavailable));
        assert!(channels.current.is_none());
        assert!(channels.voltage.is_none());
        Ok(())
    }

    #[test]
    fn test_value_unavailable() {
        let state = State { state: "unavailable".to_owned(), attributes: Attributes::default() };
        assert_eq!(state.value(), Err(ReadingError::Unavailable));

        let state = State { state: "unknown".to_owned(), attributes: Attributes::default() };
        assert_eq!(state.value(), Err(ReadingError::Unavailable));
    }

    #[test]
    fn test_value_non_numeric() {
        let state = State::new(0.0, "kWh");
        let state = State { state: "not-a-number".to_owned(), ..state };
        assert_eq!(
            state.value(),
            Err(ReadingError::InvalidValue { state: "not-a-number".to_owned() }),
        );
    }

    #[test]
    fn test_value_numeric() -> Result {
        assert_eq!(State::new(2.2, "kW").value()?, 2.2);
        assert_eq!(State::bare(220.0).value()?, 220.0);
        Ok(())
    }
}
