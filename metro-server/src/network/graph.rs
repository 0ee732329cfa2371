//! Bidirectional adjacency graph over the transit network.

use std::collections::HashMap;

use crate::datasource::EdgeRecord;
use crate::domain::{LineId, StationId};

/// A directed edge in the built graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Station this edge leads to.
    pub to: StationId,
    /// Line the rider is on while traversing this edge.
    pub line: LineId,
    /// Travel time in seconds.
    pub time_secs: u32,
    /// Distance in meters. Unused by search, carried for completeness.
    pub distance_m: u32,
    /// Fare in fare units.
    pub fare: u32,
}

/// Adjacency structure mapping each station to its outgoing edges.
///
/// The store records one direction per station pair; travel is
/// bidirectional, so `build` inserts the reversed counterpart of every
/// record with identical weights. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<StationId, Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Build the graph from the upstream edge records.
    pub fn build(records: &[EdgeRecord]) -> Self {
        let mut adjacency: HashMap<StationId, Vec<Edge>> = HashMap::new();

        for record in records {
            adjacency.entry(record.from).or_default().push(Edge {
                to: record.to,
                line: record.line,
                time_secs: record.time_secs,
                distance_m: record.distance_m,
                fare: record.fare,
            });
            // Reversed counterpart with identical weights
            adjacency.entry(record.to).or_default().push(Edge {
                to: record.from,
                line: record.line,
                time_secs: record.time_secs,
                distance_m: record.distance_m,
                fare: record.fare,
            });
        }

        let edge_count = adjacency.values().map(Vec::len).sum();
        Graph {
            adjacency,
            edge_count,
        }
    }

    /// Whether the station appears in the graph.
    pub fn contains(&self, station: StationId) -> bool {
        self.adjacency.contains_key(&station)
    }

    /// Outgoing edges from a station. Empty for unknown stations.
    pub fn edges_from(&self, station: StationId) -> &[Edge] {
        self.adjacency
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges (twice the record count).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate over all stations in the graph.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency.keys().copied()
    }
}
