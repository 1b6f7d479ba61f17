use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use skybrief_server::config::ServerConfig;
use skybrief_server::noaa::NoaaClient;
use skybrief_server::web::{AppState, cors_layer, create_router};

#[tokio::main]
async fn main() {
    // Load .env file if present
    let env_file = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Ok(path) = &env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Create NOAA client
    let client = NoaaClient::new(config.noaa()).expect("Failed to create NOAA client");
    info!(base_url = client.base_url(), "Using aviation weather provider");

    // Build app state and router
    let state = AppState::new(client);
    let app = create_router(state)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http());

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("SkyBrief API listening on http://{addr}");
    info!("  GET  /health          - Health check");
    info!("  GET  /metar/:station  - Decoded current conditions");
    info!("  GET  /taf/:station    - Forecast");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
