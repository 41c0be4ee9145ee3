use std::net::SocketAddr;

use dock_server::cache::{CacheConfig, CachedGbfsClient};
use dock_server::gbfs::{GbfsClient, GbfsConfig};
use dock_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Optional feed override, e.g. another city's GBFS endpoints
    let mut gbfs_config = GbfsConfig::new();
    if let Ok(base_url) = std::env::var("GBFS_BASE_URL") {
        gbfs_config = gbfs_config.with_base_url(base_url);
    }

    let client = GbfsClient::new(gbfs_config).expect("Failed to create GBFS client");

    // Cache the joined snapshot so page loads share one fetch pair
    let cache_config = CacheConfig::default();
    let cached = CachedGbfsClient::new(client, &cache_config);

    // Build app state
    let state = AppState::new(cached);

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Dock availability map listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the map.");
    println!();
    println!("API Endpoints:");
    println!("  GET /health        - Health check");
    println!("  GET /api/stations  - Classified station markers (JSON)");
    println!("  GET /legend        - Legend fragment (HTML)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
