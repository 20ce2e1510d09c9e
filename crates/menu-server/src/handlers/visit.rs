use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use tracing::{error, info};

use crate::state::AppState;
use crate::utils::{session, ApiError};

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum VisitResponse {
    Recorded { success: bool },
    Skipped { skipped: bool },
}

/// Count a visit at most once per cookie lifetime.
pub async fn record_visit(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<VisitResponse>), ApiError> {
    let mut visitor = session::read_session(&jar);
    if !visitor.should_record_visit() {
        return Ok((jar, Json(VisitResponse::Skipped { skipped: true })));
    }

    if let Err(e) = state.visit_tracker.record_visit().await {
        error!("Failed to record visit: {}", e);
        return Err(ApiError::WebhookError(e.to_string()));
    }

    visitor.mark_visit_recorded();
    info!("New visit counted");
    let jar = session::write_visit_flag(jar, &visitor, state.settings.visit.cookie_max_age_seconds);
    Ok((jar, Json(VisitResponse::Recorded { success: true })))
}
