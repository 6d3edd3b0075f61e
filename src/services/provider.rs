use crate::error::ProviderError;
use crate::models::{Attraction, GeoPoint, Leg, Location};
use async_trait::async_trait;
use serde_json::Value;

/// A driving-directions request. `waypoints` are provider place ids.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub origin: Location,
    pub destination: Location,
    pub waypoints: Vec<String>,
    /// Let the provider choose the visiting order of `waypoints`
    pub optimize_waypoints: bool,
}

impl DirectionsRequest {
    pub fn direct(origin: Location, destination: Location) -> Self {
        DirectionsRequest {
            origin,
            destination,
            waypoints: Vec::new(),
            optimize_waypoints: false,
        }
    }
}

/// A successful directions response: the provider's raw object, passed
/// through to clients untouched, plus the fields this service works with
/// (taken from the first route).
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsResponse {
    pub raw: Value,
    pub overview_polyline: String,
    /// Permutation of the request's waypoints chosen by the provider
    pub waypoint_order: Vec<usize>,
    /// One leg per consecutive pair of points, in final visiting order
    pub legs: Vec<Leg>,
}

/// Driving directions between locations.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> std::result::Result<DirectionsResponse, ProviderError>;
}

/// Nearby place search.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Places of `category` within `radius_meters` of `location`. An empty
    /// result is a success.
    async fn nearby(
        &self,
        location: &GeoPoint,
        radius_meters: u32,
        category: &str,
    ) -> std::result::Result<Vec<Attraction>, ProviderError>;
}
