use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    status: String,
    languages: usize,
    visit_webhook: bool,
}

/// Ready once every language has a variant. The sheets themselves are not
/// probed; a failed fetch only empties that page.
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let languages = state.registry.variants().len();
    let status = if languages == menu_core::Language::ALL.len() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            status: if status.is_success() { "ready" } else { "degraded" }.to_string(),
            languages,
            visit_webhook: state.visit_tracker.is_configured(),
        }),
    )
}
