//! Liveness and database readiness at `/health`, outside `/api`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// 200 while the pool can run `SELECT 1`, otherwise 503 in the usual error
/// envelope so load balancers and clients see the same shape.
async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    tabletop_db::health_check(&state.pool)
        .await
        .map_err(|err| AppError::ServiceUnavailable(format!("database: {err}")))?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: true,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
