//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, warn};

use crate::config::AllowedOrigins;
use crate::decode::{get_decoded_metar, get_taf};
use crate::domain::{Icao, StationReport};
use crate::noaa::NoaaError;

use super::dto::{metar_fault, taf_fault};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metar/:station", get(metar))
        .route("/taf/:station", get(taf))
        .with_state(state)
}

/// CORS policy for browser clients: read-only methods from the configured
/// origins.
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET, Method::OPTIONS]);

    match origins {
        AllowedOrigins::Any => layer.allow_origin(Any),
        AllowedOrigins::List(list) => {
            let origins: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| {
                    HeaderValue::from_str(origin)
                        .inspect_err(|_| warn!(origin = %origin, "ignoring invalid CORS origin"))
                        .ok()
                })
                .collect();
            layer.allow_origin(origins)
        }
    }
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Current conditions for a station.
async fn metar(
    State(state): State<AppState>,
    Path(station): Path<String>,
) -> Result<Response, AppError> {
    let report = get_decoded_metar(state.source.as_ref(), &station)
        .await
        .map_err(|source| AppError::Metar {
            station: Icao::normalize(&station),
            source,
        })?;

    Ok(respond(report))
}

/// Forecast for a station.
async fn taf(
    State(state): State<AppState>,
    Path(station): Path<String>,
) -> Result<Response, AppError> {
    let report = get_taf(state.source.as_ref(), &station)
        .await
        .map_err(|source| AppError::Taf {
            station: Icao::normalize(&station),
            source,
        })?;

    Ok(respond(report))
}

/// 200 for a report, 404 when the provider had none.
fn respond<T: Serialize>(report: StationReport<T>) -> Response {
    if report.success {
        Json(report).into_response()
    } else {
        debug!(station = %report.station, "no report for station");
        (StatusCode::NOT_FOUND, Json(report)).into_response()
    }
}

/// A lookup that failed upstream.
///
/// Each variant renders as a 500 carrying the schema-valid fallback payload
/// for its endpoint.
#[derive(Debug)]
pub enum AppError {
    Metar { station: Icao, source: NoaaError },
    Taf { station: Icao, source: NoaaError },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Metar { station, source } => {
                error!(station = %station, error = %source, "METAR lookup failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(metar_fault(&station))).into_response()
            }
            AppError::Taf { station, source } => {
                error!(station = %station, error = %source, "TAF lookup failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(taf_fault(&station))).into_response()
            }
        }
    }
}
