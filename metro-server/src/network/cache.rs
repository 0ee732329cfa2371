//! Lazily-built, process-lifetime network cache.
//!
//! The graph and amenity index are fetched and built on first demand and
//! then shared for the lifetime of the process (or until an explicit
//! rebuild). Concurrent cold-start callers converge on a single build:
//! the build gate admits one builder while the others wait and then read
//! the freshly-published network.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::datasource::{DataSourceError, TransitDataSource};

use super::amenities::AmenityIndex;
use super::graph::Graph;

/// The built transit network: graph plus amenity index.
///
/// Immutable once built; searches borrow it freely without locking.
#[derive(Debug)]
pub struct Network {
    /// Bidirectional adjacency graph.
    pub graph: Graph,
    /// Station amenity lookup.
    pub amenities: AmenityIndex,
}

/// Snapshot of the cache state for the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkStatus {
    /// Number of stations in the graph.
    pub stations: usize,
    /// Number of directed edges in the graph.
    pub edges: usize,
}

/// Owns the data source and the memoized network.
pub struct NetworkCache<D> {
    source: D,
    current: RwLock<Option<Arc<Network>>>,
    build_gate: Mutex<()>,
}

impl<D: TransitDataSource> NetworkCache<D> {
    /// Create an empty cache around a data source. Nothing is fetched
    /// until the first `get`.
    pub fn new(source: D) -> Self {
        Self {
            source,
            current: RwLock::new(None),
            build_gate: Mutex::new(()),
        }
    }

    /// Return the network, building it first if necessary.
    ///
    /// A failed build leaves the cache empty; the next caller triggers a
    /// fresh fetch.
    pub async fn get(&self) -> Result<Arc<Network>, DataSourceError> {
        if let Some(network) = self.current.read().await.as_ref() {
            return Ok(network.clone());
        }

        let _gate = self.build_gate.lock().await;

        // Another caller may have finished the build while we waited.
        if let Some(network) = self.current.read().await.as_ref() {
            return Ok(network.clone());
        }

        let network = self.build().await?;
        *self.current.write().await = Some(network.clone());
        Ok(network)
    }

    /// Discard the cached network and build a fresh one.
    pub async fn rebuild(&self) -> Result<Arc<Network>, DataSourceError> {
        let _gate = self.build_gate.lock().await;
        let network = self.build().await?;
        *self.current.write().await = Some(network.clone());
        Ok(network)
    }

    /// Current cache state, `None` before the first successful build.
    pub async fn status(&self) -> Option<NetworkStatus> {
        self.current.read().await.as_ref().map(|network| NetworkStatus {
            stations: network.graph.station_count(),
            edges: network.graph.edge_count(),
        })
    }

    async fn build(&self) -> Result<Arc<Network>, DataSourceError> {
        let (edges, amenities) =
            tokio::try_join!(self.source.fetch_edges(), self.source.fetch_amenities())?;

        let graph = Graph::build(&edges);
        let amenities = AmenityIndex::build(&amenities);
        info!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            amenity_stations = amenities.len(),
            "transit network built"
        );

        Ok(Arc::new(Network { graph, amenities }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::MockDataSource;

    #[tokio::test]
    async fn builds_on_first_get_only() {
        let source = MockDataSource::sample();
        let cache = NetworkCache::new(source.clone());

        assert!(cache.status().await.is_none());

        let first = cache.get().await.unwrap();
        let second = cache.get().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        // One edges fetch plus one amenities fetch
        assert_eq!(source.fetch_count(), 2);

        let status = cache.status().await.unwrap();
        assert_eq!(status.stations, 8);
        assert_eq!(status.edges, 14);
    }

    #[tokio::test]
    async fn concurrent_cold_start_builds_once() {
        let source = MockDataSource::sample();
        let cache = Arc::new(NetworkCache::new(source.clone()));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move { cache.get().await.unwrap() }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn failed_build_is_not_cached() {
        let cache = NetworkCache::new(MockDataSource::failing());

        assert!(cache.get().await.is_err());
        assert!(cache.status().await.is_none());
        // The failure is surfaced again rather than silently recovered
        assert!(cache.get().await.is_err());
    }

    #[tokio::test]
    async fn rebuild_refetches() {
        let source = MockDataSource::sample();
        let cache = NetworkCache::new(source.clone());

        let first = cache.get().await.unwrap();
        let rebuilt = cache.rebuild().await.unwrap();
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(source.fetch_count(), 4);

        let current = cache.get().await.unwrap();
        assert!(Arc::ptr_eq(&rebuilt, &current));
    }
}
