//! Diagnostics endpoints

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::error::{WebsiteError, WebsiteResult};
use crate::state::SiteState;

const LOGS_PATH: &str = "/api/logs";

fn require_development(state: &SiteState) -> WebsiteResult<()> {
    if state.is_development() {
        Ok(())
    } else {
        Err(WebsiteError::PageNotFound {
            path: LOGS_PATH.to_string(),
        })
    }
}

/// `GET /api/logs`: the site logger's entries, oldest first
pub async fn get_logs(State(state): State<Arc<SiteState>>) -> WebsiteResult<Json<Value>> {
    require_development(&state)?;

    let entries = state.logger.get_logs();
    Ok(Json(json!({
        "count": entries.len(),
        "capacity": state.logger.capacity(),
        "entries": entries,
    })))
}

/// `DELETE /api/logs`
pub async fn clear_logs(State(state): State<Arc<SiteState>>) -> WebsiteResult<StatusCode> {
    require_development(&state)?;

    state.logger.clear_logs();
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health`
pub async fn health_check(State(state): State<Arc<SiteState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "mode": if state.is_development() { "dev" } else { "prod" },
        "uptime_seconds": state.uptime_seconds(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
