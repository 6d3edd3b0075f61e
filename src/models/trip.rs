use crate::constants::{DEFAULT_ATTRACTION_TYPE, DEFAULT_NUM_ATTRACTIONS};
use crate::models::{Attraction, Itinerary, Location, Stop};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialRouteRequest {
    #[serde(default)]
    pub start_location: Location,
    #[serde(default)]
    pub end_location: Location,
    /// Attractions to return; zero or negative yields none. Form inputs send
    /// it as a numeric string.
    #[serde(
        default = "default_num_attractions",
        deserialize_with = "deserialize_count"
    )]
    pub num_attractions: i64,
    /// Provider place type, passed through unchecked; blank means the default
    #[serde(default = "default_attraction_type")]
    pub attraction_type: String,
}

fn default_num_attractions() -> i64 {
    DEFAULT_NUM_ATTRACTIONS
}

fn default_attraction_type() -> String {
    DEFAULT_ATTRACTION_TYPE.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Number(i64),
    Text(String),
}

/// Accept `3` or `"3"`. Anything else is a deserialization error.
fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("numAttractions must be an integer, got {:?}", text))
        }),
    }
}

impl InitialRouteRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_endpoints(&self.start_location, &self.end_location)
    }

    /// Place type to search for, falling back to the default when blank.
    pub fn category(&self) -> &str {
        match self.attraction_type.trim() {
            "" => DEFAULT_ATTRACTION_TYPE,
            category => category,
        }
    }

    pub fn top_n(&self) -> usize {
        usize::try_from(self.num_attractions).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRouteRequest {
    #[serde(default)]
    pub start_location: Location,
    #[serde(default)]
    pub end_location: Location,
    #[serde(default)]
    pub waypoints: Vec<Stop>,
}

impl OptimizedRouteRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_endpoints(&self.start_location, &self.end_location)?;

        if self.waypoints.is_empty() {
            return Err("Select at least one attraction to optimize a route".to_string());
        }

        Ok(())
    }
}

fn validate_endpoints(start: &Location, end: &Location) -> Result<(), String> {
    if start.is_blank() {
        return Err("startLocation is required".to_string());
    }
    if end.is_blank() {
        return Err("endLocation is required".to_string());
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct InitialRouteResponse {
    pub message: String,
    /// Raw directions object as the provider returned it
    pub route: Value,
    pub attractions: Vec<Attraction>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRouteResponse {
    pub message: String,
    /// Raw directions object, including the provider's waypoint order and legs
    pub route: Value,
    pub itinerary: Itinerary,
    pub total_duration_seconds: u64,
    pub total_distance_meters: u64,
}

impl OptimizedRouteResponse {
    pub fn new(message: impl Into<String>, route: Value, itinerary: Itinerary) -> Self {
        OptimizedRouteResponse {
            message: message.into(),
            route,
            total_duration_seconds: itinerary.total_duration_seconds(),
            total_distance_meters: itinerary.total_distance_meters(),
            itinerary,
        }
    }
}
