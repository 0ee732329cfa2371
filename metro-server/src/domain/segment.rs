//! Route result types.
//!
//! A raw search result is an ordered list of `Hop`s, one per traversed
//! edge. Consecutive hops on the same line are merged into `RideSegment`s,
//! the unit presented to riders; a `PathResult` is the full answer for one
//! station pair.

use super::station::{LineId, StationAmenities, StationId};

/// A single traversed edge, before merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// Station the hop departs from.
    pub from: StationId,
    /// Station the hop arrives at.
    pub to: StationId,
    /// Line ridden for this hop.
    pub line: LineId,
    /// Travel time for this hop, in seconds.
    pub time_secs: u32,
    /// Fare for this hop, in fare units.
    pub fare: u32,
}

/// A maximal run of travel on one line, merged from consecutive hops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideSegment {
    /// Boarding station of the segment.
    pub from: StationId,
    /// Alighting station of the segment.
    pub to: StationId,
    /// Line ridden for the whole segment.
    pub line: LineId,
    /// Accumulated travel time on this line, in seconds.
    pub time_secs: u64,
    /// Accumulated fare on this line, in fare units.
    pub fare: u64,
    /// Amenities at the boarding station.
    pub amenities: StationAmenities,
}

/// A complete route between two stations.
///
/// `total_time_secs` and `total_fare` always equal the sums over
/// `segments`; the searches compute them from their own accumulators and
/// the merge tests assert the two agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Total travel time in seconds.
    pub total_time_secs: u64,
    /// Total fare in fare units.
    pub total_fare: u64,
    /// Ride segments in travel order. Empty only for the trivial
    /// start == end route.
    pub segments: Vec<RideSegment>,
}

impl PathResult {
    /// The trivial route from a station to itself: no segments, no time,
    /// no fare, no transfers.
    pub fn trivial() -> Self {
        PathResult {
            total_time_secs: 0,
            total_fare: 0,
            segments: Vec::new(),
        }
    }

    /// Build a result from merged segments, deriving the totals.
    pub fn from_segments(segments: Vec<RideSegment>) -> Self {
        let total_time_secs = segments.iter().map(|s| s.time_secs).sum();
        let total_fare = segments.iter().map(|s| s.fare).sum();
        PathResult {
            total_time_secs,
            total_fare,
            segments,
        }
    }

    /// Number of line transfers: one fewer than the segment count.
    pub fn transfer_count(&self) -> u32 {
        (self.segments.len().saturating_sub(1)) as u32
    }

    /// True for the zero-segment start == end route.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }
}
