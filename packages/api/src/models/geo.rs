use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One Nominatim search candidate. Coordinates arrive as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoMatch {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl GeoMatch {
    /// Parse the string coordinates.
    pub fn point(&self) -> Result<GeoPoint> {
        Ok(GeoPoint {
            lat: parse_coordinate(&self.lat)?,
            lng: parse_coordinate(&self.lon)?,
        })
    }
}

fn parse_coordinate(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::InvalidCoordinate(raw.to_string()))
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
