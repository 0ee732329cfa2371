//! Station and line identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station identifier: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// Numeric identifier of a station in the transit network.
///
/// Station identifiers are opaque numbers assigned by the data store.
/// This type guarantees that any `StationId` was parsed from (or built as)
/// a plain non-negative number.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let station = StationId::parse("123").unwrap();
/// assert_eq!(station, StationId::new(123));
///
/// // Non-numeric input is rejected
/// assert!(StationId::parse("12a").is_err());
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StationId(u32);

impl StationId {
    /// Create a station identifier from a raw number.
    pub fn new(id: u32) -> Self {
        StationId(id)
    }

    /// Parse a station identifier from a request parameter.
    ///
    /// The input must be a non-empty string of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }
        s.parse::<u32>().map(StationId).map_err(|_| InvalidStationId {
            reason: "must be a non-negative number",
        })
    }

    /// The raw numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

/// Identifier of a physical line (route) in the network.
///
/// Riding consecutive edges with the same `LineId` incurs no transfer.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LineId(u32);

impl LineId {
    /// Create a line identifier from a raw number.
    pub fn new(id: u32) -> Self {
        LineId(id)
    }

    /// The raw numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

/// Amenity counts for a station, attached to the boarding station of each
/// ride segment. Stations absent from the amenity data default to zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationAmenities {
    /// Number of restrooms at the station.
    pub restroom_count: u32,
    /// Number of shops at the station.
    pub shop_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_station() {
        assert_eq!(StationId::parse("0").unwrap(), StationId::new(0));
        assert_eq!(StationId::parse("123").unwrap(), StationId::new(123));
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(StationId::parse("").is_err());
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!(StationId::parse("abc").is_err());
        assert!(StationId::parse("12a").is_err());
        assert!(StationId::parse("-5").is_err());
        assert!(StationId::parse("1.5").is_err());
    }

    #[test]
    fn display_is_plain_number() {
        assert_eq!(StationId::new(207).to_string(), "207");
        assert_eq!(LineId::new(2).to_string(), "2");
    }

    #[test]
    fn amenities_default_to_zero() {
        let amenities = StationAmenities::default();
        assert_eq!(amenities.restroom_count, 0);
        assert_eq!(amenities.shop_count, 0);
    }
}
