//! Record type for flat geocoding responses.
//!
//! Services disagree on small details: some send coordinates as JSON numbers,
//! others as strings (`"lat": "30.4"`), and the address field goes by
//! `formatted_address` or `display_name`. [`PlaceResult`] accepts all of
//! these.

use geolookup_core::{Coordinates, GeocodeResult};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

/// One candidate location from a flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Latitude in decimal degrees.
    #[serde(deserialize_with = "degrees")]
    pub lat: f64,
    /// Longitude in decimal degrees.
    #[serde(alias = "lng", deserialize_with = "degrees")]
    pub lon: f64,
    /// Formatted address.
    #[serde(alias = "display_name")]
    pub formatted_address: String,
}

impl GeocodeResult for PlaceResult {
    fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }

    fn address(&self) -> &str {
        &self.formatted_address
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Degrees {
    Number(f64),
    Text(String),
}

fn degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Degrees::deserialize(deserializer)? {
        Degrees::Number(value) => value,
        Degrees::Text(text) => text.trim().parse::<f64>().map_err(|_| {
            <D::Error as de::Error>::invalid_value(Unexpected::Str(&text), &"decimal degrees")
        })?,
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(<D::Error as de::Error>::invalid_value(
            Unexpected::Float(value),
            &"finite decimal degrees",
        ))
    }
}
