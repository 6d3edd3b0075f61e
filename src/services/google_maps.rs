use crate::constants::{DEFAULT_PROVIDER_TIMEOUT_SECONDS, GOOGLE_MAPS_BASE_URL};
use crate::error::ProviderError;
use crate::models::{Attraction, GeoPoint, Leg};
use crate::services::provider::{
    DirectionsRequest, DirectionsResponse, PlacesProvider, RoutingProvider,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Client for the Google Maps Directions and Places Nearby Search web APIs.
#[derive(Clone)]
pub struct GoogleMapsClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl GoogleMapsClient {
    pub fn new(api_key: String) -> Self {
        GoogleMapsClient {
            client: Client::new(),
            api_key,
            base_url: GOOGLE_MAPS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECONDS),
        }
    }

    pub fn with_config(api_key: String, base_url: String, timeout: Duration) -> Self {
        GoogleMapsClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Send a GET request and return the JSON body. Transport failures,
    /// timeouts and non-2xx responses all become a `ProviderError`; the
    /// provider-level `status` field is checked by the caller.
    async fn get_json(&self, request: RequestBuilder, what: &str) -> ProviderResult<Value> {
        let response = request
            .query(&[("key", &self.api_key)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::warn!("{} request timed out after {:?}", what, self.timeout);
                    ProviderError::new(
                        ProviderError::TIMEOUT,
                        format!("{} request timed out", what),
                    )
                } else {
                    ProviderError::new(
                        ProviderError::NETWORK_ERROR,
                        format!("{} request failed: {}", what, e),
                    )
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, "{} HTTP error {}: {}", what, status, error_text);
            return Err(ProviderError::new(
                format!("HTTP {}", status.as_u16()),
                error_text,
            ));
        }

        response.json::<Value>().await.map_err(|e| {
            ProviderError::invalid_response(format!("Failed to parse {} response: {}", what, e))
        })
    }
}

#[async_trait]
impl RoutingProvider for GoogleMapsClient {
    async fn directions(&self, request: &DirectionsRequest) -> ProviderResult<DirectionsResponse> {
        let url = format!("{}/directions/json", self.base_url);

        let mut params = vec![
            ("origin", request.origin.to_string()),
            ("destination", request.destination.to_string()),
            ("mode", "driving".to_string()),
        ];
        if let Some(waypoints) = format_waypoints(&request.waypoints, request.optimize_waypoints) {
            params.push(("waypoints", waypoints));
        }

        tracing::debug!(
            waypoints = request.waypoints.len(),
            optimize = request.optimize_waypoints,
            "Directions request: {} -> {} via {} waypoints",
            request.origin,
            request.destination,
            request.waypoints.len()
        );

        let raw = self
            .get_json(self.client.get(&url).query(&params), "Directions")
            .await?;
        let directions = parse_directions(raw)?;

        tracing::debug!(
            legs = directions.legs.len(),
            polyline_len = directions.overview_polyline.len(),
            "Directions response: {} legs, waypoint order {:?}",
            directions.legs.len(),
            directions.waypoint_order
        );

        Ok(directions)
    }
}

#[async_trait]
impl PlacesProvider for GoogleMapsClient {
    async fn nearby(
        &self,
        location: &GeoPoint,
        radius_meters: u32,
        category: &str,
    ) -> ProviderResult<Vec<Attraction>> {
        let url = format!("{}/place/nearbysearch/json", self.base_url);

        tracing::debug!(
            lat = location.lat,
            lng = location.lng,
            radius_m = radius_meters,
            category,
            "Places nearby request"
        );

        let params = [
            ("location", location.to_string()),
            ("radius", radius_meters.to_string()),
            ("type", category.to_string()),
        ];

        let raw = self
            .get_json(self.client.get(&url).query(&params), "Places")
            .await?;
        parse_places(raw, category)
    }
}

/// `waypoints` parameter: `optimize:true|place_id:A|place_id:B`.
fn format_waypoints(place_ids: &[String], optimize: bool) -> Option<String> {
    if place_ids.is_empty() {
        return None;
    }

    let mut parts = Vec::with_capacity(place_ids.len() + 1);
    if optimize {
        parts.push("optimize:true".to_string());
    }
    parts.extend(place_ids.iter().map(|id| format!("place_id:{}", id)));
    Some(parts.join("|"))
}

fn status_error(status: String, error_message: Option<String>) -> ProviderError {
    let message = error_message.unwrap_or_else(|| status.clone());
    ProviderError::new(status, message)
}

/// Validate a raw directions body and extract what the trip planner needs.
pub fn parse_directions(raw: Value) -> ProviderResult<DirectionsResponse> {
    let parsed = GoogleDirectionsApiResponse::deserialize(&raw).map_err(|e| {
        ProviderError::invalid_response(format!("Unexpected directions response: {}", e))
    })?;

    if parsed.status != "OK" {
        tracing::warn!(
            status = %parsed.status,
            "Directions request rejected: {}",
            parsed.error_message.as_deref().unwrap_or("no message")
        );
        return Err(status_error(parsed.status, parsed.error_message));
    }

    let route = parsed
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::new("ZERO_RESULTS", "No routes found"))?;

    Ok(DirectionsResponse {
        overview_polyline: route.overview_polyline.points,
        waypoint_order: route.waypoint_order,
        legs: route.legs.into_iter().map(Leg::from).collect(),
        raw,
    })
}

/// Validate a raw places body and convert its results. `ZERO_RESULTS` is an
/// empty success; results without a place id or location are skipped.
pub fn parse_places(raw: Value, category: &str) -> ProviderResult<Vec<Attraction>> {
    let parsed = GooglePlacesApiResponse::deserialize(&raw).map_err(|e| {
        ProviderError::invalid_response(format!("Unexpected places response: {}", e))
    })?;

    match parsed.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(Vec::new()),
        _ => {
            tracing::warn!(
                status = %parsed.status,
                "Places request rejected: {}",
                parsed.error_message.as_deref().unwrap_or("no message")
            );
            return Err(status_error(parsed.status, parsed.error_message));
        }
    }

    Ok(parsed
        .results
        .into_iter()
        .filter_map(|place| place.into_attraction(category))
        .collect())
}

// Google Maps API response types

#[derive(Debug, Deserialize)]
struct GoogleDirectionsApiResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<GoogleRoute>,
}

#[derive(Debug, Deserialize)]
struct GoogleRoute {
    overview_polyline: GooglePolyline,
    #[serde(default)]
    waypoint_order: Vec<usize>,
    #[serde(default)]
    legs: Vec<GoogleLeg>,
}

#[derive(Debug, Deserialize)]
struct GooglePolyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct GoogleLeg {
    duration: GoogleTextValue,
    distance: GoogleTextValue,
}

#[derive(Debug, Deserialize)]
struct GoogleTextValue {
    text: String,
    value: u64, // seconds or meters
}

impl From<GoogleLeg> for Leg {
    fn from(leg: GoogleLeg) -> Self {
        Leg {
            duration_text: leg.duration.text,
            distance_text: leg.distance.text,
            duration_seconds: leg.duration.value,
            distance_meters: leg.distance.value,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GooglePlacesApiResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GooglePlace>,
}

#[derive(Debug, Deserialize)]
struct GooglePlace {
    place_id: Option<String>,
    #[serde(default)]
    name: String,
    rating: Option<f64>,
    user_ratings_total: Option<u32>,
    geometry: Option<GooglePlaceGeometry>,
    vicinity: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GooglePlaceGeometry {
    location: GeoPoint,
}

impl GooglePlace {
    fn into_attraction(self, category: &str) -> Option<Attraction> {
        let (Some(id), Some(geometry)) = (self.place_id, self.geometry) else {
            tracing::debug!("Skipping place '{}' without id or location", self.name);
            return None;
        };

        Some(Attraction {
            id,
            name: self.name,
            rating: self.rating,
            review_count: self.user_ratings_total.unwrap_or(0),
            location: geometry.location,
            category: category.to_string(),
            address: self.vicinity,
        })
    }
}
