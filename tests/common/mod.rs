use async_trait::async_trait;
use detourist::config::TripPlannerConfig;
use detourist::models::{Attraction, GeoPoint};
use detourist::services::google_maps::parse_directions;
use detourist::services::provider::{
    DirectionsRequest, DirectionsResponse, PlacesProvider, RoutingProvider,
};
use detourist::services::trip_service::TripService;
use detourist::{AppState, ProviderError};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Routing provider that answers every request with the same raw body,
/// parsed the way the real client parses it.
#[allow(dead_code)]
pub struct FakeRouting {
    raw: Value,
    pub requests: Mutex<Vec<DirectionsRequest>>,
}

#[allow(dead_code)]
impl FakeRouting {
    pub fn new(raw: Value) -> Self {
        FakeRouting {
            raw,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<DirectionsRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoutingProvider for FakeRouting {
    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        parse_directions(self.raw.clone())
    }
}

/// Places provider scripted per search location. Unscripted locations return
/// no places.
#[allow(dead_code)]
pub struct FakePlaces {
    scripted: Vec<(GeoPoint, Result<Vec<Attraction>, ProviderError>)>,
    pub searched: Mutex<Vec<GeoPoint>>,
}

#[allow(dead_code)]
impl FakePlaces {
    pub fn new() -> Self {
        FakePlaces {
            scripted: Vec::new(),
            searched: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, at: GeoPoint, result: Result<Vec<Attraction>, ProviderError>) -> Self {
        self.scripted.push((at, result));
        self
    }

    pub fn searched(&self) -> Vec<GeoPoint> {
        self.searched.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacesProvider for FakePlaces {
    async fn nearby(
        &self,
        location: &GeoPoint,
        _radius_meters: u32,
        _category: &str,
    ) -> Result<Vec<Attraction>, ProviderError> {
        self.searched.lock().unwrap().push(*location);
        self.scripted
            .iter()
            .find(|(at, _)| same_point(at, location))
            .map(|(_, result)| result.clone())
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[allow(dead_code)]
pub fn same_point(a: &GeoPoint, b: &GeoPoint) -> bool {
    (a.lat - b.lat).abs() < 1e-6 && (a.lng - b.lng).abs() < 1e-6
}

/// Route of `n` points heading north from (30.0, -120.0), 0.01 degrees apart.
#[allow(dead_code)]
pub fn route_points(n: usize) -> Vec<GeoPoint> {
    (0..n)
        .map(|i| GeoPoint {
            lat: 30.0 + i as f64 * 0.01,
            lng: -120.0,
        })
        .collect()
}

#[allow(dead_code)]
pub fn encode(points: &[GeoPoint]) -> String {
    let line: geo::LineString<f64> = points
        .iter()
        .map(|p| (p.lng, p.lat))
        .collect::<Vec<_>>()
        .into();
    polyline::encode_coordinates(line, 5).unwrap()
}

/// Directions body in the provider's format.
#[allow(dead_code)]
pub fn directions_body(points: &[GeoPoint], waypoint_order: &[usize], leg_count: usize) -> Value {
    let legs: Vec<Value> = (0..leg_count)
        .map(|i| {
            json!({
                "duration": {"text": format!("{} mins", (i + 1) * 10), "value": (i + 1) * 600},
                "distance": {"text": format!("{} km", (i + 1) * 5), "value": (i + 1) * 5000}
            })
        })
        .collect();

    json!({
        "status": "OK",
        "geocoded_waypoints": [],
        "routes": [{
            "summary": "CA-1",
            "overview_polyline": {"points": encode(points)},
            "waypoint_order": waypoint_order,
            "legs": legs
        }]
    })
}

#[allow(dead_code)]
pub fn attraction(id: &str, rating: Option<f64>) -> Attraction {
    Attraction {
        id: id.to_string(),
        name: format!("Attraction {}", id),
        rating,
        review_count: 100,
        location: GeoPoint {
            lat: 30.0,
            lng: -120.0,
        },
        category: "tourist_attraction".to_string(),
        address: Some("Highway 1".to_string()),
    }
}

#[allow(dead_code)]
pub fn test_app(routing: Arc<FakeRouting>, places: Arc<FakePlaces>) -> axum::Router {
    let trip_service = TripService::new(routing, places, &TripPlannerConfig::default());
    let state = Arc::new(AppState { trip_service });
    detourist::routes::create_router(state)
}

/// Check if we should skip real API tests
#[allow(dead_code)]
pub fn should_skip_real_api_tests() -> bool {
    std::env::var("SKIP_REAL_API_TESTS").is_ok() || std::env::var("GOOGLE_MAPS_API_KEY").is_err()
}
