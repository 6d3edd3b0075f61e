use crate::models::GeoPoint;
use serde::{Deserialize, Serialize};

/// One point of a trip: either an attraction the user picked or the synthetic
/// final destination, which has no place id or rating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Provider place id; only stops that carry one can be routed through
    #[serde(default, alias = "place_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default, alias = "is_destination")]
    pub is_destination: bool,
}

impl Stop {
    pub fn destination(name: impl Into<String>) -> Self {
        Stop {
            id: None,
            name: name.into(),
            rating: None,
            location: None,
            is_destination: true,
        }
    }

    /// Place id usable as a routing waypoint. Blank ids and the destination
    /// never qualify.
    pub fn place_id(&self) -> Option<&str> {
        if self.is_destination {
            return None;
        }
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

/// Travel metrics for the segment that ends at an itinerary stop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub duration_text: String,
    pub distance_text: String,
    #[serde(default)]
    pub duration_seconds: u64,
    #[serde(default)]
    pub distance_meters: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryStop {
    #[serde(flatten)]
    pub stop: Stop,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg: Option<Leg>,
}

/// Ordered stops of an optimized trip, destination last.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Itinerary {
    pub stops: Vec<ItineraryStop>,
}

impl Itinerary {
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn destination(&self) -> Option<&Stop> {
        self.stops
            .last()
            .map(|s| &s.stop)
            .filter(|s| s.is_destination)
    }

    pub fn total_duration_seconds(&self) -> u64 {
        self.stops
            .iter()
            .filter_map(|s| s.leg.as_ref())
            .map(|leg| leg.duration_seconds)
            .sum()
    }

    pub fn total_distance_meters(&self) -> u64 {
        self.stops
            .iter()
            .filter_map(|s| s.leg.as_ref())
            .map(|leg| leg.distance_meters)
            .sum()
    }
}
