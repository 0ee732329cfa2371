//! Station amenity lookup.

use std::collections::HashMap;

use crate::datasource::AmenityRecord;
use crate::domain::{StationAmenities, StationId};

/// Maps stations to their amenity counts.
///
/// Stations absent from the upstream data resolve to zero counts; a
/// missing entry is never an error.
#[derive(Debug, Clone, Default)]
pub struct AmenityIndex {
    by_station: HashMap<StationId, StationAmenities>,
}

impl AmenityIndex {
    /// Build the index from upstream amenity records.
    pub fn build(records: &[AmenityRecord]) -> Self {
        let by_station = records
            .iter()
            .map(|r| {
                (
                    r.station,
                    StationAmenities {
                        restroom_count: r.restroom_count,
                        shop_count: r.shop_count,
                    },
                )
            })
            .collect();
        AmenityIndex { by_station }
    }

    /// Amenity counts for a station, zeros if unknown.
    pub fn get(&self, station: StationId) -> StationAmenities {
        self.by_station
            .get(&station)
            .copied()
            .unwrap_or_default()
    }

    /// Number of stations with recorded amenities.
    pub fn len(&self) -> usize {
        self.by_station.len()
    }

    /// True if no station has recorded amenities.
    pub fn is_empty(&self) -> bool {
        self.by_station.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_station_counts() {
        let index = AmenityIndex::build(&[AmenityRecord {
            station: StationId::new(103),
            restroom_count: 3,
            shop_count: 8,
        }]);

        let amenities = index.get(StationId::new(103));
        assert_eq!(amenities.restroom_count, 3);
        assert_eq!(amenities.shop_count, 8);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn unknown_station_defaults_to_zero() {
        let index = AmenityIndex::build(&[]);
        assert_eq!(index.get(StationId::new(1)), StationAmenities::default());
        assert!(index.is_empty());
    }
}
