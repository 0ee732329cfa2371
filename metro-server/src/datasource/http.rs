//! HTTP client for the transit data API.
//!
//! Fetches the edge list and station amenity counts as JSON. The wire
//! field names follow the upstream store's column aliases.

use std::future::Future;

use serde::Deserialize;

use crate::domain::{LineId, StationId};

use super::error::DataSourceError;
use super::{AmenityRecord, EdgeRecord, TransitDataSource};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the data API client.
#[derive(Debug, Clone)]
pub struct DataApiConfig {
    /// Base URL of the data API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl DataApiConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Edge record as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EdgeDto {
    from_node: u32,
    to_node: u32,
    time_weight: u32,
    distance_weight: u32,
    cost_weight: u32,
    line_number: u32,
}

impl EdgeDto {
    fn into_record(self) -> EdgeRecord {
        EdgeRecord {
            from: StationId::new(self.from_node),
            to: StationId::new(self.to_node),
            time_secs: self.time_weight,
            distance_m: self.distance_weight,
            fare: self.cost_weight,
            line: LineId::new(self.line_number),
        }
    }
}

/// Amenity record as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AmenityDto {
    station_num: u32,
    restroom_count: u32,
    shop_count: u32,
}

impl AmenityDto {
    fn into_record(self) -> AmenityRecord {
        AmenityRecord {
            station: StationId::new(self.station_num),
            restroom_count: self.restroom_count,
            shop_count: self.shop_count,
        }
    }
}

/// HTTP data source backed by the transit data API.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDataSource {
    /// Create a new client with the given configuration.
    pub fn new(config: DataApiConfig) -> Result<Self, DataSourceError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch and decode a JSON list from `{base_url}/{path}`.
    async fn get_list<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, DataSourceError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        tracing::debug!(%url, "fetching transit data");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DataSourceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| DataSourceError::Json {
            message: e.to_string(),
        })
    }
}

impl TransitDataSource for HttpDataSource {
    fn fetch_edges(
        &self,
    ) -> impl Future<Output = Result<Vec<EdgeRecord>, DataSourceError>> + Send {
        async move {
            let edges: Vec<EdgeDto> = self.get_list("edges").await?;
            Ok(edges.into_iter().map(EdgeDto::into_record).collect())
        }
    }

    fn fetch_amenities(
        &self,
    ) -> impl Future<Output = Result<Vec<AmenityRecord>, DataSourceError>> + Send {
        async move {
            let amenities: Vec<AmenityDto> = self.get_list("amenities").await?;
            Ok(amenities
                .into_iter()
                .map(AmenityDto::into_record)
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_dto_field_names() {
        let json = r#"{
            "fromNode": 101,
            "toNode": 102,
            "timeWeight": 120,
            "distanceWeight": 900,
            "costWeight": 200,
            "lineNumber": 2
        }"#;
        let dto: EdgeDto = serde_json::from_str(json).unwrap();
        let record = dto.into_record();
        assert_eq!(record.from, StationId::new(101));
        assert_eq!(record.to, StationId::new(102));
        assert_eq!(record.time_secs, 120);
        assert_eq!(record.distance_m, 900);
        assert_eq!(record.fare, 200);
        assert_eq!(record.line, LineId::new(2));
    }

    #[test]
    fn amenity_dto_field_names() {
        let json = r#"{"stationNum": 101, "restroomCount": 2, "shopCount": 5}"#;
        let dto: AmenityDto = serde_json::from_str(json).unwrap();
        let record = dto.into_record();
        assert_eq!(record.station, StationId::new(101));
        assert_eq!(record.restroom_count, 2);
        assert_eq!(record.shop_count, 5);
    }

    #[test]
    fn config_defaults() {
        let config = DataApiConfig::new("http://localhost:9000");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        let config = config.with_timeout(5);
        assert_eq!(config.timeout_secs, 5);
    }
}
