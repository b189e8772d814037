use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{HealthDto, StatusDto},
    server::model::app::AppState,
};

pub static PROBES_TAG: &str = "probes";

/// Report the server build and uptime
#[utoipa::path(
    get,
    path = "/api/status",
    tag = PROBES_TAG,
    responses(
        (status = 200, description = "Server build and uptime", body = StatusDto)
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusDto {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
        }),
    )
}

/// Report whether the database is reachable
///
/// Always answers 200 so load balancers can read the body; a broken database
/// shows up as `degraded` rather than a dropped connection.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = PROBES_TAG,
    responses(
        (status = 200, description = "Database reachability", body = HealthDto)
    ),
)]
pub async fn get_health(State(state): State<AppState>) -> impl IntoResponse {
    let status = match state.db.ping().await {
        Ok(()) => "ok",
        Err(_) => "degraded",
    };

    (
        StatusCode::OK,
        Json(HealthDto {
            status: status.to_string(),
        }),
    )
}
