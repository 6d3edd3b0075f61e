use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn root() -> &'static str {
    "Detourist backend is running!"
}

/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
