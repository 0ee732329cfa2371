//! Structural comparison of routes from the three strategies.

use serde::Serialize;

use crate::domain::PathResult;

/// Which of the three strategies produced structurally identical routes.
///
/// Reported per least-transfers candidate, against the fastest and
/// cheapest routes. Route equality is transitive, so exactly one of these
/// holds for each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteAgreement {
    /// No two strategies agree.
    NoOverlap,
    /// Fastest and cheapest coincide; the candidate differs.
    FastestCheapest,
    /// Cheapest and the candidate coincide; fastest differs.
    CheapestFewestTransfers,
    /// Fastest and the candidate coincide; cheapest differs.
    FastestFewestTransfers,
    /// All three describe the same route.
    AllEqual,
}

/// Whether two results describe the same physical route.
///
/// Segments are compared field-by-field on stations, line, time and fare;
/// totals are derivable and amenity counts are presentation data, so
/// neither participates.
pub fn same_route(a: &PathResult, b: &PathResult) -> bool {
    a.segments.len() == b.segments.len()
        && a.segments.iter().zip(&b.segments).all(|(x, y)| {
            x.from == y.from
                && x.to == y.to
                && x.line == y.line
                && x.time_secs == y.time_secs
                && x.fare == y.fare
        })
}

/// Classify one least-transfers candidate against the other strategies.
pub fn classify(
    fastest: &PathResult,
    cheapest: &PathResult,
    candidate: &PathResult,
) -> RouteAgreement {
    let fastest_cheapest = same_route(fastest, cheapest);
    let cheapest_candidate = same_route(cheapest, candidate);
    let fastest_candidate = same_route(fastest, candidate);

    match (fastest_cheapest, cheapest_candidate, fastest_candidate) {
        (true, true, true) => RouteAgreement::AllEqual,
        (true, false, false) => RouteAgreement::FastestCheapest,
        (false, true, false) => RouteAgreement::CheapestFewestTransfers,
        (false, false, true) => RouteAgreement::FastestFewestTransfers,
        // Mixed cases are unreachable: equality is transitive
        _ => RouteAgreement::NoOverlap,
    }
}

/// Classify every least-transfers candidate independently.
pub fn classify_routes(
    fastest: &PathResult,
    cheapest: &PathResult,
    candidates: &[PathResult],
) -> Vec<RouteAgreement> {
    candidates
        .iter()
        .map(|candidate| classify(fastest, cheapest, candidate))
        .collect()
}
