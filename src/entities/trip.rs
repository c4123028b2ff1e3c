//! Trip - the ephemeral input to one quote calculation

use serde::{Deserialize, Serialize};

/// Road type travelled, which modulates toll costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoadType {
    /// Highway, full tolls
    #[default]
    Autostrada,
    /// State road, almost no tolls
    Statale,
    /// Mixed route
    Misto,
}

impl RoadType {
    /// Fraction of the nominal per-km toll rate actually incurred.
    pub fn toll_multiplier(&self) -> f64 {
        match self {
            RoadType::Autostrada => 1.0,
            RoadType::Statale => 0.1,
            RoadType::Misto => 0.6,
        }
    }
}

impl std::fmt::Display for RoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoadType::Autostrada => write!(f, "Autostrada"),
            RoadType::Statale => write!(f, "Statale"),
            RoadType::Misto => write!(f, "Misto"),
        }
    }
}

impl std::str::FromStr for RoadType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "autostrada" => Ok(RoadType::Autostrada),
            "statale" => Ok(RoadType::Statale),
            "misto" => Ok(RoadType::Misto),
            _ => Err(format!(
                "Invalid road type: {}. Use autostrada, statale, or misto",
                s
            )),
        }
    }
}

/// One trip to be quoted.
///
/// Origin and destination are free-form labels; distance and hours are
/// user-supplied (no routing is performed). The form/CLI layer validates
/// ranges before the trip reaches the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Departure location
    pub origin: String,

    /// Arrival location
    pub destination: String,

    /// Trip distance in km (must be positive)
    pub distance: f64,

    /// Travel duration in hours (must be positive)
    pub hours: f64,

    /// Road type for toll estimation
    #[serde(default)]
    pub road_type: RoadType,

    /// Hours spent loading and unloading
    #[serde(default)]
    pub load_unload_hours: f64,

    /// Whether the client is VAT-liable
    #[serde(default)]
    pub has_vat: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_toll_multipliers() {
        assert_eq!(RoadType::Autostrada.toll_multiplier(), 1.0);
        assert_eq!(RoadType::Statale.toll_multiplier(), 0.1);
        assert_eq!(RoadType::Misto.toll_multiplier(), 0.6);
    }

    #[test]
    fn test_road_type_parse() {
        assert_eq!(RoadType::from_str("autostrada").unwrap(), RoadType::Autostrada);
        assert_eq!(RoadType::from_str("Misto").unwrap(), RoadType::Misto);
        assert!(RoadType::from_str("sterrato").is_err());
    }

    #[test]
    fn test_trip_roundtrip() {
        let trip = Trip {
            origin: "Milano".to_string(),
            destination: "Roma".to_string(),
            distance: 570.0,
            hours: 7.5,
            road_type: RoadType::Autostrada,
            load_unload_hours: 2.0,
            has_vat: true,
        };
        let yaml = serde_yml::to_string(&trip).unwrap();
        let parsed: Trip = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(trip, parsed);
    }
}
