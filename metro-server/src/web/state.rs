//! Application state for the web layer.

use std::sync::Arc;

use crate::favorites::FavoriteStore;
use crate::network::NetworkCache;

/// Shared application state.
///
/// Generic over the data source so handlers can be exercised against the
/// mock source in tests.
pub struct AppState<D> {
    /// Lazily-built transit network.
    pub network: Arc<NetworkCache<D>>,

    /// Flat-file favorites store.
    pub favorites: Arc<FavoriteStore>,
}

impl<D> AppState<D> {
    /// Create a new app state.
    pub fn new(network: NetworkCache<D>, favorites: FavoriteStore) -> Self {
        Self {
            network: Arc::new(network),
            favorites: Arc::new(favorites),
        }
    }
}

// Manual impl: `D` itself need not be `Clone`, only the `Arc`s are.
impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            network: self.network.clone(),
            favorites: self.favorites.clone(),
        }
    }
}
