//! Multi-criteria route planning over the transit network.
//!
//! Three searches share one graph: time-optimal and fare-optimal routes
//! via label-setting shortest path, and the set of routes tying for the
//! minimum number of line transfers via a richer (station, line) state
//! search. All three produce merged `RideSegment` sequences; the
//! comparator classifies how much the strategies agree.

mod compare;
mod dijkstra;
mod merge;
mod transfers;

pub use compare::{RouteAgreement, classify_routes, same_route};
pub use dijkstra::Objective;
pub use merge::merge_hops;

use crate::domain::{PathResult, RouteError, StationId};
use crate::network::Network;

/// The minimum-time route between two stations.
pub fn fastest_route(
    network: &Network,
    start: StationId,
    end: StationId,
) -> Result<PathResult, RouteError> {
    dijkstra::search(network, start, end, Objective::Time)
}

/// The minimum-fare route between two stations.
pub fn cheapest_route(
    network: &Network,
    start: StationId,
    end: StationId,
) -> Result<PathResult, RouteError> {
    dijkstra::search(network, start, end, Objective::Fare)
}

/// Every route achieving the minimum transfer count between two stations.
pub fn fewest_transfer_routes(
    network: &Network,
    start: StationId,
    end: StationId,
) -> Result<Vec<PathResult>, RouteError> {
    transfers::search(network, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::EdgeRecord;
    use crate::domain::LineId;
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
            amenities: AmenityIndex::default(),
        }
    }

    /// The three strategies disagree exactly as the weights dictate:
    /// line B is faster but pricier, staying on line A avoids transfers.
    #[test]
    fn strategies_disagree_on_the_branching_network() {
        let net = network(&[(1, 2, 60, 100, 1), (2, 3, 90, 150, 1), (2, 3, 50, 200, 2)]);

        let fastest = fastest_route(&net, station(1), station(3)).unwrap();
        assert_eq!(fastest.total_time_secs, 110);

        let cheapest = cheapest_route(&net, station(1), station(3)).unwrap();
        assert_eq!(cheapest.total_fare, 250);

        let fewest = fewest_transfer_routes(&net, station(1), station(3)).unwrap();
        assert_eq!(fewest.len(), 1);
        assert_eq!(fewest[0].transfer_count(), 0);

        // Cheapest and fewest-transfers ride line 1 end-to-end; fastest
        // switches to line 2.
        let agreements = classify_routes(&fastest, &cheapest, &fewest);
        assert_eq!(agreements, vec![RouteAgreement::CheapestFewestTransfers]);
    }

    #[test]
    fn strategies_agree_on_a_single_corridor() {
        let net = network(&[(1, 2, 60, 100, 1), (2, 3, 90, 150, 1)]);

        let fastest = fastest_route(&net, station(1), station(3)).unwrap();
        let cheapest = cheapest_route(&net, station(1), station(3)).unwrap();
        let fewest = fewest_transfer_routes(&net, station(1), station(3)).unwrap();

        let agreements = classify_routes(&fastest, &cheapest, &fewest);
        assert_eq!(agreements, vec![RouteAgreement::AllEqual]);
    }
}
