//! Request and response DTOs.
//!
//! Responses use the wire naming the original clients expect
//! (camelCase), and apply display formatting as the final projection:
//! numeric accumulation is finished before any string is produced.

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, PathResult, RideSegment, StationId, format};
use crate::favorites::Favorite;
use crate::network::NetworkStatus;
use crate::planner::RouteAgreement;

/// Query parameters for a route search.
///
/// Stations arrive as strings and are validated at the boundary so that
/// malformed input never reaches the search core.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuery {
    pub start_station: String,
    pub end_station: String,
}

/// One merged ride segment, formatted for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideSegmentDto {
    pub from_station: StationId,
    pub to_station: StationId,
    pub line_number: LineId,
    pub time_on_line: String,
    pub cost_on_line: String,
    pub restroom_count: u32,
    pub shop_count: u32,
}

impl RideSegmentDto {
    pub fn from_segment(segment: &RideSegment) -> Self {
        Self {
            from_station: segment.from,
            to_station: segment.to,
            line_number: segment.line,
            time_on_line: format::format_duration(segment.time_secs),
            cost_on_line: format::format_fare(segment.fare),
            restroom_count: segment.amenities.restroom_count,
            shop_count: segment.amenities.shop_count,
        }
    }
}

/// A complete route answer for one strategy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResultDto {
    pub start_station: StationId,
    pub end_station: StationId,
    pub total_time: String,
    pub total_cost: String,
    pub total_transfers: u32,
    pub segments: Vec<RideSegmentDto>,
}

impl PathResultDto {
    pub fn from_result(start: StationId, end: StationId, result: &PathResult) -> Self {
        Self {
            start_station: start,
            end_station: end,
            total_time: format::format_duration(result.total_time_secs),
            total_cost: format::format_fare(result.total_fare),
            total_transfers: result.transfer_count(),
            segments: result
                .segments
                .iter()
                .map(RideSegmentDto::from_segment)
                .collect(),
        }
    }
}

/// The least-transfers answer: every route tying for the minimum.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRoutesDto {
    pub start_station: StationId,
    pub end_station: StationId,
    pub total_transfers: u32,
    pub paths: Vec<PathResultDto>,
}

impl TransferRoutesDto {
    pub fn from_results(start: StationId, end: StationId, results: &[PathResult]) -> Self {
        Self {
            start_station: start,
            end_station: end,
            total_transfers: results.first().map(PathResult::transfer_count).unwrap_or(0),
            paths: results
                .iter()
                .map(|r| PathResultDto::from_result(start, end, r))
                .collect(),
        }
    }
}

/// The combined three-strategy answer with per-candidate comparison.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedRoutesDto {
    pub fastest: PathResultDto,
    pub cheapest: PathResultDto,
    pub fewest_transfers: TransferRoutesDto,
    /// One classification per least-transfers candidate.
    pub comparison: Vec<RouteAgreement>,
}

/// Network cache state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatusDto {
    pub built: bool,
    pub stations: usize,
    pub edges: usize,
}

impl NetworkStatusDto {
    pub fn from_status(status: Option<NetworkStatus>) -> Self {
        match status {
            Some(status) => Self {
                built: true,
                stations: status.stations,
                edges: status.edges,
            },
            None => Self {
                built: false,
                stations: 0,
                edges: 0,
            },
        }
    }
}

/// Body for saving a favorite trip.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub label: String,
    pub start_station: String,
    pub end_station: String,
}

/// A saved favorite trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    pub id: u64,
    pub label: String,
    pub start_station: StationId,
    pub end_station: StationId,
}

impl FavoriteDto {
    pub fn from_favorite(favorite: &Favorite) -> Self {
        Self {
            id: favorite.id,
            label: favorite.label.clone(),
            start_station: favorite.start,
            end_station: favorite.end,
        }
    }
}

/// Error body returned for every failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationAmenities;

    #[test]
    fn segment_dto_formats_time_and_fare() {
        let segment = RideSegment {
            from: StationId::new(101),
            to: StationId::new(103),
            line: LineId::new(1),
            time_secs: 300,
            fare: 1250,
            amenities: StationAmenities {
                restroom_count: 2,
                shop_count: 4,
            },
        };

        let dto = RideSegmentDto::from_segment(&segment);
        assert_eq!(dto.time_on_line, "5m 0s");
        assert_eq!(dto.cost_on_line, "1,250 won");
        assert_eq!(dto.restroom_count, 2);
        assert_eq!(dto.shop_count, 4);
    }

    #[test]
    fn path_dto_uses_camel_case_names() {
        let result = PathResult::trivial();
        let dto = PathResultDto::from_result(StationId::new(1), StationId::new(1), &result);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["startStation"], 1);
        assert_eq!(json["endStation"], 1);
        assert_eq!(json["totalTime"], "0s");
        assert_eq!(json["totalCost"], "0 won");
        assert_eq!(json["totalTransfers"], 0);
        assert!(json["segments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn agreement_serializes_as_camel_case() {
        let json = serde_json::to_value(RouteAgreement::AllEqual).unwrap();
        assert_eq!(json, "allEqual");
        let json = serde_json::to_value(RouteAgreement::NoOverlap).unwrap();
        assert_eq!(json, "noOverlap");
    }
}
