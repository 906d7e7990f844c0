//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{Crs, Station};
use crate::network::{NetworkError, RailNetwork};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/regions", get(list_regions))
        .route("/api/stations", get(list_stations))
        .route("/api/hubs", get(list_hubs))
        .route("/api/hubs/closest", get(closest_hub))
        .route("/api/fares", get(fares_to))
        .route("/journey", get(plan_journey))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Network overview page.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = IndexTemplate::from_network(&state.network)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
    Ok(Html(html))
}

/// Regions in first-seen order.
async fn list_regions(State(state): State<AppState>) -> Json<RegionsResponse> {
    let regions = state
        .network
        .regions()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(RegionsResponse { regions })
}

/// Every station in the network.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .network
        .stations()
        .iter()
        .map(StationResult::from_station)
        .collect();
    Json(StationsResponse {
        count: state.network.station_count(),
        stations,
    })
}

/// Hub stations, optionally filtered by region.
async fn list_hubs(
    State(state): State<AppState>,
    Query(req): Query<HubsRequest>,
) -> Json<HubsResponse> {
    let hubs = state
        .network
        .hub_stations(req.region.as_deref())
        .into_iter()
        .map(StationResult::from_station)
        .collect();
    Json(HubsResponse { hubs })
}

/// The hub nearest a station within its region.
async fn closest_hub(
    State(state): State<AppState>,
    Query(req): Query<ClosestHubRequest>,
) -> Result<Json<StationResult>, AppError> {
    let station = find_station(&state.network, "station", &req.station)?;
    let hub = state.network.closest_hub(station)?;
    Ok(Json(StationResult::from_station(hub)))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan and price a journey between two stations.
async fn plan_journey(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<JourneyRequest>,
) -> Result<Response, AppError> {
    let start = find_station(&state.network, "start", &req.from)?;
    let dest = find_station(&state.network, "destination", &req.to)?;
    let quote = state.network.journey_quote(start, dest)?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = JourneyTemplate {
            journey: JourneyView::from_quote(&quote),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(JourneyResult::from_quote(&quote)).into_response())
    }
}

/// Fares from every station to one destination.
async fn fares_to(
    State(state): State<AppState>,
    Query(req): Query<FaresRequest>,
) -> Result<Json<FaresResponse>, AppError> {
    let dest = find_station(&state.network, "destination", &req.to)?;
    let fares = state
        .network
        .fares_to(&dest.crs())?
        .into_iter()
        .map(|(station, fare)| FareResult::new(station, fare))
        .collect();

    Ok(Json(FaresResponse {
        destination: StationResult::from_station(dest),
        fares,
    }))
}

/// Resolve a user-supplied code to a station in the network.
fn find_station<'a>(
    network: &'a RailNetwork,
    role: &str,
    code: &str,
) -> Result<&'a Station, AppError> {
    let crs = Crs::parse_normalized(code).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {role} CRS: {e}"),
    })?;
    network.station(&crs).ok_or_else(|| AppError::NotFound {
        message: NetworkError::NotInNetwork(crs).to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e {
            NetworkError::NotInNetwork(_) => AppError::NotFound { message },
            NetworkError::NoHubInRegion(_) => AppError::Unprocessable { message },
            NetworkError::DuplicateCode(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
