//! In-memory data source for tests and offline runs.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{LineId, StationId};

use super::error::DataSourceError;
use super::{AmenityRecord, EdgeRecord, TransitDataSource};

/// Data source serving fixed records from memory.
///
/// Counts fetches so tests can assert that the network cache builds only
/// once, and can be flipped into a failing mode to exercise error paths.
#[derive(Debug, Clone)]
pub struct MockDataSource {
    edges: Arc<Vec<EdgeRecord>>,
    amenities: Arc<Vec<AmenityRecord>>,
    fail: bool,
    fetches: Arc<AtomicUsize>,
}

impl MockDataSource {
    /// Create a mock source serving the given records.
    pub fn new(edges: Vec<EdgeRecord>, amenities: Vec<AmenityRecord>) -> Self {
        Self {
            edges: Arc::new(edges),
            amenities: Arc::new(amenities),
            fail: false,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock source whose fetches always fail.
    pub fn failing() -> Self {
        Self {
            edges: Arc::new(Vec::new()),
            amenities: Arc::new(Vec::new()),
            fail: true,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A small two-line sample network for offline runs.
    ///
    /// Line 1 runs 101-102-103-104-105; line 2 runs 201-103-202-203 and
    /// crosses line 1 at station 103.
    pub fn sample() -> Self {
        let edge = |from: u32, to: u32, time: u32, dist: u32, fare: u32, line: u32| EdgeRecord {
            from: StationId::new(from),
            to: StationId::new(to),
            time_secs: time,
            distance_m: dist,
            fare,
            line: LineId::new(line),
        };
        let amenity = |station: u32, restrooms: u32, shops: u32| AmenityRecord {
            station: StationId::new(station),
            restroom_count: restrooms,
            shop_count: shops,
        };

        Self::new(
            vec![
                edge(101, 102, 120, 900, 100, 1),
                edge(102, 103, 180, 1400, 150, 1),
                edge(103, 104, 150, 1100, 100, 1),
                edge(104, 105, 200, 1600, 150, 1),
                edge(201, 103, 140, 1000, 100, 2),
                edge(103, 202, 160, 1200, 150, 2),
                edge(202, 203, 130, 950, 100, 2),
            ],
            vec![
                amenity(101, 2, 4),
                amenity(103, 3, 8),
                amenity(203, 1, 2),
            ],
        )
    }

    /// Number of completed fetch calls (edges and amenities each count).
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), DataSourceError> {
        if self.fail {
            Err(DataSourceError::Api {
                status: 500,
                message: "mock data source failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl TransitDataSource for MockDataSource {
    fn fetch_edges(
        &self,
    ) -> impl Future<Output = Result<Vec<EdgeRecord>, DataSourceError>> + Send {
        async move {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.check_failure()?;
            Ok(self.edges.as_ref().clone())
        }
    }

    fn fetch_amenities(
        &self,
    ) -> impl Future<Output = Result<Vec<AmenityRecord>, DataSourceError>> + Send {
        async move {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.check_failure()?;
            Ok(self.amenities.as_ref().clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_configured_records() {
        let source = MockDataSource::sample();
        let edges = source.fetch_edges().await.unwrap();
        assert_eq!(edges.len(), 7);
        let amenities = source.fetch_amenities().await.unwrap();
        assert_eq!(amenities.len(), 3);
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn failing_source_errors() {
        let source = MockDataSource::failing();
        let err = source.fetch_edges().await.unwrap_err();
        assert!(matches!(err, DataSourceError::Api { status: 500, .. }));
    }
}
