//! Core domain types for trip planning.

mod error;
pub mod format;
mod segment;
mod station;

pub use error::RouteError;
pub use segment::{Hop, PathResult, RideSegment};
pub use station::{InvalidStationId, LineId, StationAmenities, StationId};
