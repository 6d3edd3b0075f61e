use crate::error::{ProviderError, Result};
use crate::models::{Itinerary, ItineraryStop, Leg, Location, Stop};
use crate::services::provider::{DirectionsRequest, DirectionsResponse, RoutingProvider};
use std::sync::Arc;

/// An optimized route and the user's stops re-sequenced to match it.
#[derive(Debug, Clone)]
pub struct OptimizedItinerary {
    pub directions: DirectionsResponse,
    pub itinerary: Itinerary,
}

/// Asks the routing provider for the best visiting order of the user's stops
/// and rebuilds the itinerary in that order, destination last.
#[derive(Clone)]
pub struct ItineraryOptimizer {
    routing: Arc<dyn RoutingProvider>,
}

impl ItineraryOptimizer {
    pub fn new(routing: Arc<dyn RoutingProvider>) -> Self {
        ItineraryOptimizer { routing }
    }

    /// Stops without a place id are left out of the request and of the
    /// resulting itinerary. With no qualifying stops this is a direct route.
    pub async fn optimize(
        &self,
        origin: &Location,
        destination: &Location,
        stops: &[Stop],
    ) -> Result<OptimizedItinerary> {
        let qualifying: Vec<Stop> = stops
            .iter()
            .filter(|s| s.place_id().is_some())
            .cloned()
            .collect();

        if qualifying.len() < stops.len() {
            tracing::debug!(
                "Ignoring {} stops without a place id",
                stops.len() - qualifying.len()
            );
        }

        let request = DirectionsRequest {
            origin: origin.clone(),
            destination: destination.clone(),
            waypoints: qualifying
                .iter()
                .filter_map(|s| s.place_id().map(str::to_string))
                .collect(),
            optimize_waypoints: true,
        };

        tracing::info!(
            "Optimizing itinerary from {} to {} with {} stops",
            origin,
            destination,
            qualifying.len()
        );

        let directions = self.routing.directions(&request).await?;
        let itinerary = build_itinerary(
            &qualifying,
            &directions.waypoint_order,
            &directions.legs,
            destination.label(),
        )?;

        Ok(OptimizedItinerary {
            directions,
            itinerary,
        })
    }
}

/// Position `j` holds `stops[waypoint_order[j]]`, then the destination is
/// appended. `legs[j]` is attached to whatever sits at output position `j`,
/// exactly as the provider indexes them.
///
/// An empty `waypoint_order` with stops present means the provider kept the
/// request order.
pub fn build_itinerary(
    stops: &[Stop],
    waypoint_order: &[usize],
    legs: &[Leg],
    destination_name: String,
) -> std::result::Result<Itinerary, ProviderError> {
    let order: Vec<usize> = if waypoint_order.is_empty() {
        (0..stops.len()).collect()
    } else {
        validate_order(waypoint_order, stops.len())?;
        waypoint_order.to_vec()
    };

    let ordered = order
        .into_iter()
        .map(|i| stops[i].clone())
        .chain(std::iter::once(Stop::destination(destination_name)));

    let stops = ordered
        .enumerate()
        .map(|(position, stop)| ItineraryStop {
            stop,
            leg: legs.get(position).cloned(),
        })
        .collect();

    Ok(Itinerary { stops })
}

/// `order` must be a permutation of `0..len`.
fn validate_order(order: &[usize], len: usize) -> std::result::Result<(), ProviderError> {
    if order.len() != len {
        return Err(ProviderError::invalid_response(format!(
            "Waypoint order has {} entries for {} waypoints",
            order.len(),
            len
        )));
    }

    let mut seen = vec![false; len];
    for &i in order {
        if i >= len || seen[i] {
            return Err(ProviderError::invalid_response(format!(
                "Waypoint order {:?} is not a permutation of {} waypoints",
                order, len
            )));
        }
        seen[i] = true;
    }

    Ok(())
}
