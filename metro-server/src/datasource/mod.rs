//! Transit data source boundary.
//!
//! The network is loaded in bulk from an external store: a list of
//! directed edge records (one direction per station pair) and per-station
//! amenity counts. Schema and transport belong to the implementations;
//! the rest of the crate only sees the `TransitDataSource` trait, which
//! also lets every consumer be tested against mock data.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, StationId};

mod error;
mod http;
mod mock;

pub use error::DataSourceError;
pub use http::{DataApiConfig, HttpDataSource};
pub use mock::MockDataSource;

/// A directed edge as recorded upstream.
///
/// The store records only one direction per station pair; the graph
/// builder inserts the reversed counterpart with identical weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Origin station.
    pub from: StationId,
    /// Destination station.
    pub to: StationId,
    /// Travel time in seconds. Always positive in well-formed data.
    pub time_secs: u32,
    /// Distance in meters. Carried for completeness; unused by search.
    pub distance_m: u32,
    /// Fare in fare units.
    pub fare: u32,
    /// Line this edge belongs to.
    pub line: LineId,
}

/// Amenity counts for one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityRecord {
    /// The station these counts describe.
    pub station: StationId,
    /// Number of restrooms.
    pub restroom_count: u32,
    /// Number of shops.
    pub shop_count: u32,
}

/// Bulk access to the upstream transit data.
pub trait TransitDataSource: Send + Sync {
    /// Fetch every edge record in the network.
    fn fetch_edges(
        &self,
    ) -> impl Future<Output = Result<Vec<EdgeRecord>, DataSourceError>> + Send;

    /// Fetch amenity counts for every station that has any.
    fn fetch_amenities(
        &self,
    ) -> impl Future<Output = Result<Vec<AmenityRecord>, DataSourceError>> + Send;
}
