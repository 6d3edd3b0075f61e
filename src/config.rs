use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub google_maps_api_key: String,
    /// Overrides the provider base URL (local proxies, tests)
    pub google_maps_base_url: Option<String>,
    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,
    pub provider_timeout_seconds: u64,
    pub trip_planner: TripPlannerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripPlannerConfig {
    /// Upper bound on points sampled along the route for attraction searches
    pub max_sample_points: usize,

    /// Radius (meters) of each places search around a sample point
    pub search_radius_m: u32,
}

impl Default for TripPlannerConfig {
    fn default() -> Self {
        Self {
            max_sample_points: DEFAULT_MAX_SAMPLE_POINTS,
            search_radius_m: DEFAULT_SEARCH_RADIUS_METERS,
        }
    }
}

impl TripPlannerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let max_sample_points: usize = env::var("MAX_SAMPLE_POINTS")
            .unwrap_or_else(|_| defaults.max_sample_points.to_string())
            .parse()
            .map_err(|_| "Invalid MAX_SAMPLE_POINTS")?;

        if !(1..=25).contains(&max_sample_points) {
            return Err("MAX_SAMPLE_POINTS must be between 1 and 25".to_string());
        }

        let search_radius_m: u32 = env::var("SEARCH_RADIUS_M")
            .unwrap_or_else(|_| defaults.search_radius_m.to_string())
            .parse()
            .map_err(|_| "Invalid SEARCH_RADIUS_M")?;

        if search_radius_m == 0 || search_radius_m > MAX_SEARCH_RADIUS_METERS {
            return Err(format!(
                "SEARCH_RADIUS_M must be between 1 and {} meters",
                MAX_SEARCH_RADIUS_METERS
            ));
        }

        Ok(Self {
            max_sample_points,
            search_radius_m,
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let provider_timeout_seconds: u64 = env::var("PROVIDER_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|_| "Invalid PROVIDER_TIMEOUT_SECONDS")?;

        if !(1..=120).contains(&provider_timeout_seconds) {
            return Err("PROVIDER_TIMEOUT_SECONDS must be between 1 and 120".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY")
                .map_err(|_| "GOOGLE_MAPS_API_KEY must be set")?,
            google_maps_base_url: env::var("GOOGLE_MAPS_BASE_URL").ok(),
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            provider_timeout_seconds,
            trip_planner: TripPlannerConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated origin list, dropping blanks and trailing slashes.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
