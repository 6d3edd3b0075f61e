use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure reported by the routing/places provider, or by the transport to it.
/// `status` is the provider's own status string where one exists
/// (`REQUEST_DENIED`, `ZERO_RESULTS`, ...), otherwise one of the synthetic
/// statuses below.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{status}: {message}")]
pub struct ProviderError {
    pub status: String,
    pub message: String,
}

impl ProviderError {
    pub const TIMEOUT: &'static str = "TIMEOUT";
    pub const NETWORK_ERROR: &'static str = "NETWORK_ERROR";
    pub const INVALID_RESPONSE: &'static str = "INVALID_RESPONSE";

    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        ProviderError {
            status: status.into(),
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_RESPONSE, message)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Failed to decode route geometry: {0}")]
    Decode(String),

    #[error("Could not compute a route: {0}")]
    RouteUnavailable(ProviderError),

    #[error("Could not find attractions: {0}")]
    AttractionsUnavailable(ProviderError),

    #[error("Could not optimize your itinerary: {0}")]
    OptimizationFailed(ProviderError),
}

impl AppError {
    /// Relabel a raw provider failure as a route-computation failure.
    pub fn into_route_error(self) -> Self {
        match self {
            AppError::Provider(e) => AppError::RouteUnavailable(e),
            other => other,
        }
    }

    pub fn into_attractions_error(self) -> Self {
        match self {
            AppError::Provider(e) => AppError::AttractionsUnavailable(e),
            other => other,
        }
    }

    pub fn into_optimization_error(self) -> Self {
        match self {
            AppError::Provider(e) => AppError::OptimizationFailed(e),
            other => other,
        }
    }

    /// Provider status carried by this error, if any.
    pub fn provider_status(&self) -> Option<&str> {
        match self {
            AppError::Provider(e)
            | AppError::RouteUnavailable(e)
            | AppError::AttractionsUnavailable(e)
            | AppError::OptimizationFailed(e) => Some(e.status.as_str()),
            _ => None,
        }
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let provider_status = self.provider_status().map(str::to_string);

        let (status, error_message) = match self {
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
            AppError::OriginNotAllowed(ref origin) => {
                tracing::warn!(origin = %origin, "Rejected request from disallowed origin");
                (
                    StatusCode::FORBIDDEN,
                    format!("Origin {} is not allowed", origin),
                )
            }
            AppError::Provider(ref e) => {
                tracing::error!(status = %e.status, "Provider error: {}", e.message);
                (StatusCode::BAD_GATEWAY, format!("Provider error: {}", e.message))
            }
            AppError::Decode(ref e) => {
                tracing::error!("Route geometry decode error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Could not compute a route: the route geometry was malformed".to_string(),
                )
            }
            AppError::RouteUnavailable(ref e) => {
                tracing::warn!(status = %e.status, "Route request failed: {}", e.message);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Could not compute a route: {}", e.message),
                )
            }
            AppError::AttractionsUnavailable(ref e) => {
                tracing::warn!(status = %e.status, "Attraction search failed: {}", e.message);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Could not find attractions: {}", e.message),
                )
            }
            AppError::OptimizationFailed(ref e) => {
                tracing::warn!(status = %e.status, "Itinerary optimization failed: {}", e.message);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Could not optimize your itinerary: {}", e.message),
                )
            }
        };

        let mut body = json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        });
        if let Some(provider_status) = provider_status {
            body["status"] = json!(provider_status);
        }

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
