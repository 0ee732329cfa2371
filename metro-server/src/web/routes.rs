//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::datasource::{DataSourceError, TransitDataSource};
use crate::domain::{RouteError, StationId};
use crate::favorites::FavoriteError;
use crate::planner;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<D>(state: AppState<D>) -> Router
where
    D: TransitDataSource + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/routes/fastest", get(fastest_route::<D>))
        .route("/routes/cheapest", get(cheapest_route::<D>))
        .route("/routes/fewest-transfers", get(fewest_transfers::<D>))
        .route("/routes/combined", get(combined_routes::<D>))
        .route("/network/status", get(network_status::<D>))
        .route("/network/rebuild", post(rebuild_network::<D>))
        .route(
            "/favorites",
            get(list_favorites::<D>).post(add_favorite::<D>),
        )
        .route("/favorites/:id", axum::routing::delete(remove_favorite::<D>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse the station pair out of a route query.
///
/// Malformed identifiers are rejected here, before the core is invoked.
fn parse_stations(query: &RouteQuery) -> Result<(StationId, StationId), AppError> {
    let start = StationId::parse(query.start_station.trim()).map_err(|e| AppError::BadRequest {
        message: format!("invalid start station '{}': {e}", query.start_station),
    })?;
    let end = StationId::parse(query.end_station.trim()).map_err(|e| AppError::BadRequest {
        message: format!("invalid end station '{}': {e}", query.end_station),
    })?;
    Ok((start, end))
}

/// Minimum-time route between two stations.
async fn fastest_route<D: TransitDataSource>(
    State(state): State<AppState<D>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<PathResultDto>, AppError> {
    let (start, end) = parse_stations(&query)?;
    let network = state.network.get().await?;
    let result = planner::fastest_route(&network, start, end)?;
    Ok(Json(PathResultDto::from_result(start, end, &result)))
}

/// Minimum-fare route between two stations.
async fn cheapest_route<D: TransitDataSource>(
    State(state): State<AppState<D>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<PathResultDto>, AppError> {
    let (start, end) = parse_stations(&query)?;
    let network = state.network.get().await?;
    let result = planner::cheapest_route(&network, start, end)?;
    Ok(Json(PathResultDto::from_result(start, end, &result)))
}

/// Every route tying for the minimum transfer count.
async fn fewest_transfers<D: TransitDataSource>(
    State(state): State<AppState<D>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<TransferRoutesDto>, AppError> {
    let (start, end) = parse_stations(&query)?;
    let network = state.network.get().await?;
    let results = planner::fewest_transfer_routes(&network, start, end)?;
    Ok(Json(TransferRoutesDto::from_results(start, end, &results)))
}

/// All three strategies plus the per-candidate comparison.
///
/// The searches have no data dependency on one another and run
/// concurrently; the comparator is the join point. A failure in any leg
/// fails the whole request.
async fn combined_routes<D: TransitDataSource>(
    State(state): State<AppState<D>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<CombinedRoutesDto>, AppError> {
    let (start, end) = parse_stations(&query)?;
    let network = state.network.get().await?;

    let fastest_net = network.clone();
    let cheapest_net = network.clone();
    let fewest_net = network.clone();
    let (fastest, cheapest, fewest) = tokio::try_join!(
        tokio::task::spawn_blocking(move || planner::fastest_route(&fastest_net, start, end)),
        tokio::task::spawn_blocking(move || planner::cheapest_route(&cheapest_net, start, end)),
        tokio::task::spawn_blocking(move || {
            planner::fewest_transfer_routes(&fewest_net, start, end)
        }),
    )
    .map_err(|e| AppError::Internal {
        message: format!("search task failed: {e}"),
    })?;
    let (fastest, cheapest, fewest) = (fastest?, cheapest?, fewest?);

    let comparison = planner::classify_routes(&fastest, &cheapest, &fewest);

    Ok(Json(CombinedRoutesDto {
        fastest: PathResultDto::from_result(start, end, &fastest),
        cheapest: PathResultDto::from_result(start, end, &cheapest),
        fewest_transfers: TransferRoutesDto::from_results(start, end, &fewest),
        comparison,
    }))
}

/// Current network cache state.
async fn network_status<D: TransitDataSource>(
    State(state): State<AppState<D>>,
) -> Json<NetworkStatusDto> {
    Json(NetworkStatusDto::from_status(state.network.status().await))
}

/// Discard the cached network and build a fresh one.
async fn rebuild_network<D: TransitDataSource>(
    State(state): State<AppState<D>>,
) -> Result<(StatusCode, Json<NetworkStatusDto>), AppError> {
    state.network.rebuild().await?;
    let status = state.network.status().await;
    Ok((
        StatusCode::CREATED,
        Json(NetworkStatusDto::from_status(status)),
    ))
}

/// List saved favorites.
async fn list_favorites<D: TransitDataSource>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<FavoriteDto>>, AppError> {
    let favorites = state.favorites.list()?;
    Ok(Json(
        favorites.iter().map(FavoriteDto::from_favorite).collect(),
    ))
}

/// Save a favorite trip.
async fn add_favorite<D: TransitDataSource>(
    State(state): State<AppState<D>>,
    Json(request): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<FavoriteDto>), AppError> {
    let start =
        StationId::parse(request.start_station.trim()).map_err(|e| AppError::BadRequest {
            message: format!("invalid start station '{}': {e}", request.start_station),
        })?;
    let end = StationId::parse(request.end_station.trim()).map_err(|e| AppError::BadRequest {
        message: format!("invalid end station '{}': {e}", request.end_station),
    })?;

    let favorite = state.favorites.add(request.label, start, end)?;
    Ok((
        StatusCode::CREATED,
        Json(FavoriteDto::from_favorite(&favorite)),
    ))
}

/// Remove a favorite by id.
async fn remove_favorite<D: TransitDataSource>(
    State(state): State<AppState<D>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.favorites.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::InvalidStation(_) | RouteError::NoPathFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<DataSourceError> for AppError {
    fn from(e: DataSourceError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl From<FavoriteError> for AppError {
    fn from(e: FavoriteError) -> Self {
        match e {
            FavoriteError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
