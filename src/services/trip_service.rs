use crate::config::TripPlannerConfig;
use crate::error::{AppError, Result};
use crate::models::{
    InitialRouteRequest, InitialRouteResponse, OptimizedRouteRequest, OptimizedRouteResponse,
};
use crate::services::attraction_aggregator::AttractionAggregator;
use crate::services::itinerary_optimizer::ItineraryOptimizer;
use crate::services::polyline_sampler::PolylineSampler;
use crate::services::provider::{DirectionsRequest, PlacesProvider, RoutingProvider};
use std::sync::Arc;

/// The two request/response operations of the trip planner. Holds no state
/// between calls: everything a call needs comes in with its request.
pub struct TripService {
    routing: Arc<dyn RoutingProvider>,
    sampler: PolylineSampler,
    aggregator: AttractionAggregator,
    optimizer: ItineraryOptimizer,
    search_radius_m: u32,
}

impl TripService {
    pub fn new(
        routing: Arc<dyn RoutingProvider>,
        places: Arc<dyn PlacesProvider>,
        config: &TripPlannerConfig,
    ) -> Self {
        TripService {
            sampler: PolylineSampler::new(config.max_sample_points),
            aggregator: AttractionAggregator::new(places),
            optimizer: ItineraryOptimizer::new(routing.clone()),
            routing,
            search_radius_m: config.search_radius_m,
        }
    }

    /// Route between the two locations plus the top-rated attractions found
    /// near points along it.
    pub async fn generate_initial_route(
        &self,
        request: &InitialRouteRequest,
    ) -> Result<InitialRouteResponse> {
        request.validate().map_err(AppError::InvalidRequest)?;

        tracing::info!(
            start = %request.start_location,
            end = %request.end_location,
            num_attractions = request.num_attractions,
            attraction_type = request.category(),
            "Initial route request"
        );

        let directions = self
            .routing
            .directions(&DirectionsRequest::direct(
                request.start_location.clone(),
                request.end_location.clone(),
            ))
            .await
            .map_err(|e| AppError::from(e).into_route_error())?;

        let sample_points = self.sampler.sample(&directions.overview_polyline)?;

        let attractions = self
            .aggregator
            .aggregate(
                &sample_points,
                request.category(),
                self.search_radius_m,
                request.top_n(),
            )
            .await
            .map_err(AppError::into_attractions_error)?;

        Ok(InitialRouteResponse {
            message: "Route and attractions found!".to_string(),
            route: directions.raw,
            attractions,
        })
    }

    /// Route through the user's chosen stops in the provider's optimized
    /// order, with the stops re-sequenced to match.
    pub async fn generate_optimized_route(
        &self,
        request: &OptimizedRouteRequest,
    ) -> Result<OptimizedRouteResponse> {
        request.validate().map_err(AppError::InvalidRequest)?;

        tracing::info!(
            start = %request.start_location,
            end = %request.end_location,
            waypoints = request.waypoints.len(),
            "Optimized route request"
        );

        let optimized = self
            .optimizer
            .optimize(
                &request.start_location,
                &request.end_location,
                &request.waypoints,
            )
            .await
            .map_err(AppError::into_optimization_error)?;

        Ok(OptimizedRouteResponse::new(
            "Optimized route generated successfully!",
            optimized.directions.raw,
            optimized.itinerary,
        ))
    }
}
