use axum::extract::State;
use axum::{Json, Router};
use comfort_core::{DashboardPayload, DashboardService};
use std::sync::Arc;

use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardService>,
}

/// Every request, whatever its path or method, gets the dashboard.
pub fn router(state: AppState) -> Router {
    Router::new().fallback(dashboard_handler).with_state(state)
}

pub(crate) async fn dashboard_handler(
    State(state): State<AppState>,
) -> AppResult<Json<DashboardPayload>> {
    let payload = state.dashboard.dashboard().await?;
    Ok(Json(payload))
}
