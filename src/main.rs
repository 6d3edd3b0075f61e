use detourist::config::Config;
use detourist::constants::GOOGLE_MAPS_BASE_URL;
use detourist::services::google_maps::GoogleMapsClient;
use detourist::services::provider::{PlacesProvider, RoutingProvider};
use detourist::services::trip_service::TripService;
use detourist::AppState;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "detourist=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Detourist API server");
    tracing::info!(
        max_sample_points = config.trip_planner.max_sample_points,
        search_radius_m = config.trip_planner.search_radius_m,
        provider_timeout_s = config.provider_timeout_seconds,
        "Configuration loaded successfully"
    );

    // Initialize services
    let timeout = Duration::from_secs(config.provider_timeout_seconds);
    let base_url = config
        .google_maps_base_url
        .clone()
        .unwrap_or_else(|| GOOGLE_MAPS_BASE_URL.to_string());
    let google_maps = Arc::new(GoogleMapsClient::with_config(
        config.google_maps_api_key.clone(),
        base_url,
        timeout,
    ));
    let routing: Arc<dyn RoutingProvider> = google_maps.clone();
    let places: Arc<dyn PlacesProvider> = google_maps;

    let trip_service = TripService::new(routing, places, &config.trip_planner);

    // Create application state
    let state = Arc::new(AppState { trip_service });

    tracing::info!("Allowed CORS origins: {:?}", config.allowed_origins);

    // Build router with CORS and tracing
    let app = detourist::routes::with_origin_policy(
        detourist::routes::create_router(state),
        &config.allowed_origins,
    )
    .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
