use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use agrifin_core::profile::{FarmerProfile, FarmerProfileInput};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

async fn get_profile(State(state): State<Arc<AppState>>) -> ApiResult<Json<FarmerProfile>> {
    state
        .profile_service
        .get_profile()?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No farmer profile registered".to_string()))
}

async fn save_profile(
    State(state): State<Arc<AppState>>,
    Json(input): Json<FarmerProfileInput>,
) -> ApiResult<Json<FarmerProfile>> {
    let profile = state.profile_service.save_profile(input).await?;
    Ok(Json(profile))
}

async fn delete_profile(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    state.profile_service.delete_profile().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/profile",
        get(get_profile).put(save_profile).delete(delete_profile),
    )
}
