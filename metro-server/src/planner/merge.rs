//! Merging raw hop sequences into ride segments.

use crate::domain::{Hop, RideSegment};
use crate::network::AmenityIndex;

/// Collapse consecutive same-line hops into ride segments.
///
/// A hop on the same line as the previous one extends the open segment,
/// accumulating its time and fare; a hop on a different line starts a new
/// segment. Each segment carries the amenity counts of its boarding
/// station (zeros for stations without amenity data).
pub fn merge_hops(hops: &[Hop], amenities: &AmenityIndex) -> Vec<RideSegment> {
    let mut segments: Vec<RideSegment> = Vec::new();

    for hop in hops {
        match segments.last_mut() {
            Some(last) if last.line == hop.line => {
                last.to = hop.to;
                last.time_secs += u64::from(hop.time_secs);
                last.fare += u64::from(hop.fare);
            }
            _ => segments.push(RideSegment {
                from: hop.from,
                to: hop.to,
                line: hop.line,
                time_secs: u64::from(hop.time_secs),
                fare: u64::from(hop.fare),
                amenities: amenities.get(hop.from),
            }),
        }
    }

    segments
}
