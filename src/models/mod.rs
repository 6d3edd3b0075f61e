pub mod attraction;
pub mod geo_point;
pub mod itinerary;
pub mod trip;

pub use attraction::Attraction;
pub use geo_point::{GeoPoint, Location};
pub use itinerary::{Itinerary, ItineraryStop, Leg, Stop};
pub use trip::{
    InitialRouteRequest, InitialRouteResponse, OptimizedRouteRequest, OptimizedRouteResponse,
};
