//! GET /v1/jerseys endpoint

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::types::JerseyInfo;

/// List the jersey catalog, ordered ascending by year.
pub async fn list_jerseys(State(state): State<AppState>) -> Json<Vec<JerseyInfo>> {
    Json(state.catalog.iter().map(JerseyInfo::from).collect())
}
