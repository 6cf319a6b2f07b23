use std::sync::Arc;

use crate::main_lib::AppState;
use agrifin_core::risk::RiskAssessment;
use axum::{extract::State, routing::get, Json, Router};

/// Draws a fresh score on every call.
async fn get_risk(State(state): State<Arc<AppState>>) -> Json<RiskAssessment> {
    Json(state.risk_estimator.assess())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/risk", get(get_risk))
}
