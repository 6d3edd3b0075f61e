use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(GeoPoint { lat, lng })
    }
}

/// Provider query format: `lat,lng`
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Origin or destination of a directions request: either a free-text address
/// the provider geocodes itself, or a fixed point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Point(GeoPoint),
    Address(String),
}

impl Location {
    pub fn is_blank(&self) -> bool {
        match self {
            Location::Address(address) => address.trim().is_empty(),
            Location::Point(_) => false,
        }
    }

    /// Human-readable label, used for the synthetic destination stop.
    pub fn label(&self) -> String {
        match self {
            Location::Address(address) => address.trim().to_string(),
            Location::Point(point) => point.to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Address(address) => write!(f, "{}", address.trim()),
            Location::Point(point) => write!(f, "{}", point),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::Address(String::new())
    }
}

impl From<&str> for Location {
    fn from(address: &str) -> Self {
        Location::Address(address.to_string())
    }
}

impl From<GeoPoint> for Location {
    fn from(point: GeoPoint) -> Self {
        Location::Point(point)
    }
}
