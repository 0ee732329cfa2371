//! Route search error types.
//!
//! These cover failures the search core itself can detect. Data-source
//! failures carry their own type (`datasource::DataSourceError`) and are
//! surfaced before a search ever runs.

use super::station::StationId;

/// Errors from the route searches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The station identifier is not part of the network.
    #[error("station {0} is not part of the network")]
    InvalidStation(StationId),

    /// Both stations exist, but no route connects them.
    #[error("no route exists between stations {start} and {end}")]
    NoPathFound { start: StationId, end: StationId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::InvalidStation(StationId::new(999));
        assert_eq!(err.to_string(), "station 999 is not part of the network");

        let err = RouteError::NoPathFound {
            start: StationId::new(1),
            end: StationId::new(42),
        };
        assert_eq!(
            err.to_string(),
            "no route exists between stations 1 and 42"
        );
    }
}
