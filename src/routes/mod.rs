pub mod health;
pub mod trip;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::AppError;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/api/generate-route", post(trip::generate_route))
        .route(
            "/api/generate-optimized-route",
            post(trip::generate_optimized_route),
        )
        .with_state(state)
}

/// The configured caller origins, compared byte for byte with `Origin`.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Arc<Vec<String>>);

impl AllowedOrigins {
    pub fn new(origins: &[String]) -> Self {
        AllowedOrigins(Arc::new(origins.to_vec()))
    }

    pub fn allows(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|o| o.as_bytes() == origin.as_bytes())
    }
}

/// CORS restricted to the configured origins, checked on every request.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allowed = AllowedOrigins::new(allowed_origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts| allowed.allows(origin),
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Refuse requests whose `Origin` is not allowed before they reach a handler.
/// Requests without an `Origin` header pass.
pub async fn reject_disallowed_origin(
    State(allowed): State<AllowedOrigins>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        if !allowed.allows(origin) {
            let origin = String::from_utf8_lossy(origin.as_bytes()).into_owned();
            return Err(AppError::OriginNotAllowed(origin));
        }
    }

    Ok(next.run(request).await)
}

/// Apply the origin allow-list: CORS headers for allowed browser origins and
/// a 403 for everyone else.
pub fn with_origin_policy(router: Router, allowed_origins: &[String]) -> Router {
    router
        .layer(middleware::from_fn_with_state(
            AllowedOrigins::new(allowed_origins),
            reject_disallowed_origin,
        ))
        .layer(cors_layer(allowed_origins))
}
