//! Wire types of a NeoWs feed snapshot.
//!
//! Every field is optional: a descriptor with missing or malformed pieces is
//! still accepted and placed with defaults.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Top level of a feed snapshot. Objects are grouped by approach date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedSnapshot {
    #[serde(default)]
    pub element_count: Option<u64>,
    pub near_earth_objects: Option<BTreeMap<String, Vec<Value>>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiameterRange {
    pub estimated_diameter_min: Option<f64>,
    pub estimated_diameter_max: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EstimatedDiameter {
    pub kilometers: Option<DiameterRange>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MissDistance {
    /// Decimal string, as the feed sends it.
    pub kilometers: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RelativeVelocity {
    /// Decimal string, as the feed sends it.
    pub kilometers_per_hour: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloseApproach {
    pub close_approach_date: Option<String>,
    pub close_approach_date_full: Option<String>,
    pub miss_distance: Option<MissDistance>,
    pub relative_velocity: Option<RelativeVelocity>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitalData {
    pub first_observation_date: Option<String>,
    pub orbit_determination_date: Option<String>,
}

/// One near-Earth object as delivered by the feed.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct NeoDescriptor {
    pub name: Option<String>,
    pub is_potentially_hazardous_asteroid: Option<bool>,
    pub absolute_magnitude_h: Option<f64>,
    pub estimated_diameter: Option<EstimatedDiameter>,
    pub close_approach_data: Vec<CloseApproach>,
    pub orbital_data: Option<OrbitalData>,
}

impl NeoDescriptor {
    /// Decode one entry, salvaging what can be read when the full decode fails.
    ///
    /// Each top-level field is then decoded on its own, so one malformed field
    /// only loses itself. Malformed approach records are skipped individually.
    pub fn from_value_lenient(value: &Value) -> Self {
        if let Ok(descriptor) = serde_json::from_value::<NeoDescriptor>(value.clone()) {
            return descriptor;
        }
        let close_approach_data: Vec<CloseApproach> = value
            .get("close_approach_data")
            .and_then(Value::as_array)
            .map(|approaches| {
                approaches
                    .iter()
                    .filter_map(|approach| serde_json::from_value(approach.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();
        Self {
            name: field(value, "name"),
            is_potentially_hazardous_asteroid: field(value, "is_potentially_hazardous_asteroid"),
            absolute_magnitude_h: field(value, "absolute_magnitude_h").or_else(|| {
                value
                    .get("absolute_magnitude_h")
                    .and_then(Value::as_str)
                    .and_then(parse_decimal)
            }),
            estimated_diameter: field(value, "estimated_diameter"),
            close_approach_data,
            orbital_data: field(value, "orbital_data"),
        }
    }

    pub fn hazardous(&self) -> bool {
        self.is_potentially_hazardous_asteroid.unwrap_or(false)
    }

    pub fn diameter_max_km(&self) -> Option<f64> {
        self.estimated_diameter
            .as_ref()?
            .kilometers
            .as_ref()?
            .estimated_diameter_max
            .filter(|d| d.is_finite() && *d >= 0.0)
    }

    fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approach_data.first()
    }

    pub fn miss_distance_km(&self) -> Option<f64> {
        parse_decimal(self.first_approach()?.miss_distance.as_ref()?.kilometers.as_deref()?)
    }

    pub fn relative_velocity_kmh(&self) -> Option<f64> {
        parse_decimal(
            self.first_approach()?
                .relative_velocity
                .as_ref()?
                .kilometers_per_hour
                .as_deref()?,
        )
    }

    pub fn closest_approach(&self) -> Option<String> {
        let approach = self.first_approach()?;
        approach
            .close_approach_date_full
            .clone()
            .or_else(|| approach.close_approach_date.clone())
    }
}

/// Decode one member of `value`; absent, null or malformed yields `None`.
fn field<T: DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    serde_json::from_value(value.get(key)?.clone()).ok()
}

fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
