//! Stable application-wide constants.
//!
//! Default fallbacks for env-var-based configuration and provider limits.
//! Tuning knobs that are read at start-up live in
//! [`TripPlannerConfig`](crate::config::TripPlannerConfig).

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3001";
/// Default CORS allow-list (the local frontend dev server).
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

// --- Provider ---

/// Base URL of the Google Maps web services.
pub const GOOGLE_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
/// Per-call timeout for outbound provider requests. Overridden by
/// `PROVIDER_TIMEOUT_SECONDS`.
pub const DEFAULT_PROVIDER_TIMEOUT_SECONDS: u64 = 10;
/// Precision of the provider's encoded polylines (1e-5 degrees).
pub const POLYLINE_PRECISION: u32 = 5;
/// Largest radius the places nearby search accepts.
pub const MAX_SEARCH_RADIUS_METERS: u32 = 50_000;

// --- Trip planning ---

/// Number of points sampled along the route as attraction search origins.
pub const DEFAULT_MAX_SAMPLE_POINTS: usize = 5;
/// Radius of each per-sample-point places search.
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 10_000;
/// Attractions returned when a request does not say how many it wants.
pub const DEFAULT_NUM_ATTRACTIONS: i64 = 5;
/// Place type searched when a request does not name one.
pub const DEFAULT_ATTRACTION_TYPE: &str = "tourist_attraction";
