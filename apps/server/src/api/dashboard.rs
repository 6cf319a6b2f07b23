use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use agrifin_core::dashboard::DashboardSummary;
use axum::{extract::State, routing::get, Json, Router};

async fn get_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<DashboardSummary>> {
    Ok(Json(state.dashboard_service.summary()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
