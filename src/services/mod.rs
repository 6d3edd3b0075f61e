pub mod attraction_aggregator;
pub mod google_maps;
pub mod itinerary_optimizer;
pub mod polyline_sampler;
pub mod provider;
pub mod trip_service;
