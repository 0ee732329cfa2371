use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use metro_server::datasource::{DataApiConfig, HttpDataSource, MockDataSource, TransitDataSource};
use metro_server::favorites::FavoriteStore;
use metro_server::network::NetworkCache;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind = std::env::var("METRO_BIND").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let addr: SocketAddr = bind.parse().expect("METRO_BIND is not a valid address");

    let favorites_path =
        std::env::var("METRO_FAVORITES_PATH").unwrap_or_else(|_| "favorites.json".to_string());
    let favorites = FavoriteStore::new(favorites_path);

    // Without a data API the server runs against the built-in sample
    // network, which is enough to exercise every endpoint locally.
    match std::env::var("METRO_DATA_API_URL") {
        Ok(base_url) => {
            let config = DataApiConfig::new(base_url);
            let source = HttpDataSource::new(config).expect("failed to create data API client");
            serve(addr, source, favorites).await;
        }
        Err(_) => {
            tracing::warn!("METRO_DATA_API_URL not set, serving the built-in sample network");
            serve(addr, MockDataSource::sample(), favorites).await;
        }
    }
}

async fn serve<D>(addr: SocketAddr, source: D, favorites: FavoriteStore)
where
    D: TransitDataSource + 'static,
{
    let state = AppState::new(NetworkCache::new(source), favorites);
    let app = create_router(state);

    tracing::info!(%addr, "metro route planner listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
