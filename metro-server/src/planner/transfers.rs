//! Least-transfers multi-path search.
//!
//! Transfer-count optimality cannot be expressed as a plain station-keyed
//! relaxation: the cost of an edge depends on which line the traveler is
//! currently riding. The search therefore runs over (station, arrival
//! line) states, ordered lexicographically by (transfer count, travel
//! time), and collects *every* destination arrival tying for the minimum
//! transfer count rather than stopping at the first.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::domain::{Hop, LineId, PathResult, RouteError, StationId};
use crate::network::Network;

use super::compare::same_route;
use super::merge::merge_hops;

/// A frontier entry: a concrete ride to `station`, arriving on `line`.
///
/// The hop list is carried in the entry (not reconstructed from
/// predecessor links) because several co-optimal rides may pass through
/// the same state and must not overwrite one another.
#[derive(Debug, Clone)]
struct FrontierEntry {
    transfers: u32,
    time_secs: u64,
    fare: u64,
    station: StationId,
    /// Line of the edge that reached `station`; `None` before boarding.
    line: Option<LineId>,
    hops: Vec<Hop>,
}

impl FrontierEntry {
    fn key(&self) -> (u32, u64) {
        (self.transfers, self.time_secs)
    }
}

// Frontier ordering is the lexicographic (transfers, time) key only;
// entries with equal keys are interchangeable for ordering purposes.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FrontierEntry {}

/// Find every route achieving the minimum number of line transfers.
///
/// Among tied routes, each distinct merged segment sequence appears
/// exactly once. A start equal to the end yields a single trivial route.
pub fn search(
    network: &Network,
    start: StationId,
    end: StationId,
) -> Result<Vec<PathResult>, RouteError> {
    let graph = &network.graph;
    if !graph.contains(start) {
        return Err(RouteError::InvalidStation(start));
    }
    if !graph.contains(end) {
        return Err(RouteError::InvalidStation(end));
    }
    if start == end {
        return Ok(vec![PathResult::trivial()]);
    }

    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry {
        transfers: 0,
        time_secs: 0,
        fare: 0,
        station: start,
        line: None,
        hops: Vec::new(),
    }));

    // Best (transfers, time) committed per (station, arrival line).
    let mut visited: HashMap<(StationId, Option<LineId>), (u32, u64)> = HashMap::new();
    let mut arrivals: Vec<FrontierEntry> = Vec::new();

    while let Some(Reverse(entry)) = frontier.pop() {
        if let Some(&(transfers, time_secs)) = visited.get(&(entry.station, entry.line)) {
            // No better than what is already committed: discard. The
            // equal-metrics case is a redundant expansion of the same
            // state, not a new route.
            if transfers < entry.transfers
                || (transfers == entry.transfers && time_secs <= entry.time_secs)
            {
                continue;
            }
        }
        visited.insert((entry.station, entry.line), (entry.transfers, entry.time_secs));

        if entry.station == end {
            // Record the full ride and keep searching: other frontier
            // entries may still lead to equally-good arrivals, and the
            // destination may be reached again on a different line.
            arrivals.push(entry);
            continue;
        }

        for edge in graph.edges_from(entry.station) {
            // Boarding from the synthetic start line never counts
            let transfer = u32::from(entry.line.is_some_and(|line| line != edge.line));
            let mut hops = entry.hops.clone();
            hops.push(Hop {
                from: entry.station,
                to: edge.to,
                line: edge.line,
                time_secs: edge.time_secs,
                fare: edge.fare,
            });
            frontier.push(Reverse(FrontierEntry {
                transfers: entry.transfers + transfer,
                time_secs: entry.time_secs + u64::from(edge.time_secs),
                fare: entry.fare + u64::from(edge.fare),
                station: edge.to,
                line: Some(edge.line),
                hops,
            }));
        }
    }

    if arrivals.is_empty() {
        return Err(RouteError::NoPathFound { start, end });
    }

    // Keep only the minimum-transfer arrivals, then drop duplicates whose
    // merged segment sequences are identical.
    let min_transfers = arrivals.iter().map(|a| a.transfers).min().unwrap_or(0);
    let mut results: Vec<PathResult> = Vec::new();
    for arrival in arrivals {
        if arrival.transfers != min_transfers {
            continue;
        }
        let candidate = PathResult {
            total_time_secs: arrival.time_secs,
            total_fare: arrival.fare,
            segments: merge_hops(&arrival.hops, &network.amenities),
        };
        if !results.iter().any(|kept| same_route(kept, &candidate)) {
            results.push(candidate);
        }
    }

    debug!(
        %start,
        %end,
        min_transfers,
        routes = results.len(),
        "least-transfers search finished"
    );
    Ok(results)
}
