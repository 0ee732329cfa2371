//! The built transit network and its process-lifetime cache.
//!
//! `Graph` and `AmenityIndex` are constructed from the data store on first
//! demand and shared read-only; `NetworkCache` owns them and guards the
//! one-time build against concurrent cold starts.

mod amenities;
mod cache;
mod graph;

pub use amenities::AmenityIndex;
pub use cache::{Network, NetworkCache, NetworkStatus};
pub use graph::{Edge, Graph};
