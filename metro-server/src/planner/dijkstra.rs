//! Single-criterion shortest-path search.
//!
//! Classic label-setting Dijkstra over the station graph, instantiated
//! twice: minimizing travel time or minimizing fare. The non-optimized
//! metric is carried along so the result reports both totals, and
//! predecessor links record which edge (hence which line) reached each
//! station for path reconstruction.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::domain::{Hop, LineId, PathResult, RouteError, StationId};
use crate::network::{Edge, Network};

use super::merge::merge_hops;

/// Which edge weight the search minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Minimize total travel time.
    Time,
    /// Minimize total fare.
    Fare,
}

impl Objective {
    /// The minimized weight of an edge.
    fn weight(self, edge: &Edge) -> u64 {
        match self {
            Objective::Time => u64::from(edge.time_secs),
            Objective::Fare => u64::from(edge.fare),
        }
    }

    /// The carried, non-optimized weight of an edge.
    fn secondary_weight(self, edge: &Edge) -> u64 {
        match self {
            Objective::Time => u64::from(edge.fare),
            Objective::Fare => u64::from(edge.time_secs),
        }
    }
}

/// The edge used to reach a station, for path reconstruction.
struct Predecessor {
    from: StationId,
    line: LineId,
    time_secs: u32,
    fare: u32,
}

/// Find the minimum-weight route between two stations.
///
/// Ties in accumulated weight are broken by frontier order (first
/// extracted wins); with strictly positive weights this nondeterminism is
/// accepted. A start equal to the end yields the trivial zero-segment
/// route.
pub fn search(
    network: &Network,
    start: StationId,
    end: StationId,
    objective: Objective,
) -> Result<PathResult, RouteError> {
    let graph = &network.graph;
    if !graph.contains(start) {
        return Err(RouteError::InvalidStation(start));
    }
    if !graph.contains(end) {
        return Err(RouteError::InvalidStation(end));
    }
    if start == end {
        return Ok(PathResult::trivial());
    }

    // Best known accumulated primary weight per station, with the
    // secondary metric accumulated along the same path.
    let mut best: HashMap<StationId, u64> = HashMap::new();
    let mut secondary: HashMap<StationId, u64> = HashMap::new();
    let mut previous: HashMap<StationId, Predecessor> = HashMap::new();
    let mut visited: HashSet<StationId> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(u64, StationId)>> = BinaryHeap::new();

    best.insert(start, 0);
    secondary.insert(start, 0);
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((weight, station))) = frontier.pop() {
        if !visited.insert(station) {
            continue;
        }
        if station == end {
            break;
        }

        let station_secondary = secondary[&station];
        for edge in graph.edges_from(station) {
            if visited.contains(&edge.to) {
                continue;
            }
            let next = weight + objective.weight(edge);
            if best.get(&edge.to).is_none_or(|&known| next < known) {
                best.insert(edge.to, next);
                secondary.insert(edge.to, station_secondary + objective.secondary_weight(edge));
                previous.insert(
                    edge.to,
                    Predecessor {
                        from: station,
                        line: edge.line,
                        time_secs: edge.time_secs,
                        fare: edge.fare,
                    },
                );
                frontier.push(Reverse((next, edge.to)));
            }
        }
    }

    let hops = reconstruct(&previous, start, end);
    if hops.is_empty() {
        return Err(RouteError::NoPathFound { start, end });
    }

    let (total_time_secs, total_fare) = match objective {
        Objective::Time => (best[&end], secondary[&end]),
        Objective::Fare => (secondary[&end], best[&end]),
    };
    debug!(%start, %end, ?objective, total_time_secs, total_fare, "shortest path found");

    Ok(PathResult {
        total_time_secs,
        total_fare,
        segments: merge_hops(&hops, &network.amenities),
    })
}

/// Walk the predecessor chain backwards from the destination. Empty if
/// the destination was never reached.
fn reconstruct(
    previous: &HashMap<StationId, Predecessor>,
    start: StationId,
    end: StationId,
) -> Vec<Hop> {
    let mut hops = Vec::new();
    let mut current = end;

    while current != start {
        let Some(prev) = previous.get(&current) else {
            return Vec::new();
        };
        hops.push(Hop {
            from: prev.from,
            to: current,
            line: prev.line,
            time_secs: prev.time_secs,
            fare: prev.fare,
        });
        current = prev.from;
    }

    hops.reverse();
    hops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::{AmenityRecord, EdgeRecord};
    use crate::network::{AmenityIndex, Graph};

    fn station(id: u32) -> StationId {
        StationId::new(id)
    }

    fn network(records: &[(u32, u32, u32, u32, u32)]) -> Network {
        let records: Vec<EdgeRecord> = records
            .iter()
            .map(|&(from, to, time, fare, line)| EdgeRecord {
                from: station(from),
                to: station(to),
                time_secs: time,
                distance_m: 0,
                fare,
                line: LineId::new(line),
            })
            .collect();
        Network {
            graph: Graph::build(&records),
            amenities: AmenityIndex::build(&[AmenityRecord {
                station: station(1),
                restroom_count: 2,
                shop_count: 5,
            }]),
        }
    }

    /// Stations {1,2,3}: line 1 end-to-end, plus a faster but pricier
    /// line 2 hop from 2 to 3.
    fn branching_network() -> Network {
        network(&[(1, 2, 60, 100, 1), (2, 3, 90, 150, 1), (2, 3, 50, 200, 2)])
    }

    #[test]
    fn time_optimal_takes_the_faster_line() {
        let net = branching_network();
        let path = search(&net, station(1), station(3), Objective::Time).unwrap();

        assert_eq!(path.total_time_secs, 110);
        assert_eq!(path.total_fare, 300);
        assert_eq!(path.segments.len(), 2);
        assert_eq!(path.segments[1].line, LineId::new(2));
        assert_eq!(path.transfer_count(), 1);
    }

    #[test]
    fn fare_optimal_takes_the_cheaper_line() {
        let net = branching_network();
        let path = search(&net, station(1), station(3), Objective::Fare).unwrap();

        assert_eq!(path.total_fare, 250);
        assert_eq!(path.total_time_secs, 150);
        assert_eq!(path.segments.len(), 1);
        assert_eq!(path.segments[0].line, LineId::new(1));
    }

    #[test]
    fn totals_match_segment_sums() {
        let net = branching_network();
        for objective in [Objective::Time, Objective::Fare] {
            let path = search(&net, station(1), station(3), objective).unwrap();
            let seg_time: u64 = path.segments.iter().map(|s| s.time_secs).sum();
            let seg_fare: u64 = path.segments.iter().map(|s| s.fare).sum();
            assert_eq!(path.total_time_secs, seg_time);
            assert_eq!(path.total_fare, seg_fare);
        }
    }

    #[test]
    fn search_works_in_reverse_direction() {
        // Edges are recorded 1->2->3 but travel is bidirectional
        let net = branching_network();
        let path = search(&net, station(3), station(1), Objective::Time).unwrap();
        assert_eq!(path.total_time_secs, 110);
        assert_eq!(path.segments.last().unwrap().to, station(1));
    }

    #[test]
    fn time_optimality_against_exhaustive_check() {
        // A ring with a chord: 1-2-3-4-1 plus 2-4
        let net = network(&[
            (1, 2, 100, 100, 1),
            (2, 3, 100, 100, 1),
            (3, 4, 100, 100, 1),
            (4, 1, 250, 100, 2),
            (2, 4, 120, 500, 3),
        ]);

        let path = search(&net, station(1), station(4), Objective::Time).unwrap();
        // Candidates: 1-2-3-4 = 300, 1-4 direct = 250, 1-2-4 = 220
        assert_eq!(path.total_time_secs, 220);
    }

    #[test]
    fn boarding_amenities_are_attached() {
        let net = branching_network();
        let path = search(&net, station(1), station(3), Objective::Fare).unwrap();
        assert_eq!(path.segments[0].amenities.restroom_count, 2);
        assert_eq!(path.segments[0].amenities.shop_count, 5);
    }

    #[test]
    fn unknown_station_is_rejected() {
        let net = branching_network();
        let err = search(&net, station(99), station(3), Objective::Time).unwrap_err();
        assert_eq!(err, RouteError::InvalidStation(station(99)));

        let err = search(&net, station(1), station(99), Objective::Time).unwrap_err();
        assert_eq!(err, RouteError::InvalidStation(station(99)));
    }

    #[test]
    fn disconnected_stations_have_no_path() {
        let net = network(&[(1, 2, 60, 100, 1), (8, 9, 60, 100, 2)]);
        let err = search(&net, station(1), station(9), Objective::Time).unwrap_err();
        assert_eq!(
            err,
            RouteError::NoPathFound {
                start: station(1),
                end: station(9),
            }
        );
    }

    #[test]
    fn start_equals_end_is_trivial() {
        let net = branching_network();
        let path = search(&net, station(2), station(2), Objective::Time).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.total_time_secs, 0);
        assert_eq!(path.total_fare, 0);
    }
}
