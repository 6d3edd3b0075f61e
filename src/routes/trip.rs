use crate::error::{AppError, Result};
use crate::models::{
    InitialRouteRequest, InitialRouteResponse, OptimizedRouteRequest, OptimizedRouteResponse,
};
use crate::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

/// POST /api/generate-route
/// Driving route between two locations plus the top-rated attractions along it
pub async fn generate_route(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<InitialRouteRequest>, JsonRejection>,
) -> Result<Json<InitialRouteResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let response = state.trip_service.generate_initial_route(&request).await?;

    tracing::info!(
        "Route generated with {} attractions",
        response.attractions.len()
    );

    Ok(Json(response))
}

/// POST /api/generate-optimized-route
/// Route through the selected stops in optimized order
pub async fn generate_optimized_route(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<OptimizedRouteRequest>, JsonRejection>,
) -> Result<Json<OptimizedRouteResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let response = state.trip_service.generate_optimized_route(&request).await?;

    tracing::info!(
        "Optimized itinerary with {} stops",
        response.itinerary.len()
    );

    Ok(Json(response))
}
