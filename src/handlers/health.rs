use axum::{extract::State, Json};
use serde::Serialize;

use crate::{error::Result, state::AppState};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Liveness plus a database ping
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    state.db.ping().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
