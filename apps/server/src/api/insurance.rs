use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use agrifin_core::insurance::{
    insurance_catalog, InsurancePolicy, InsuranceProduct, InsuranceQuote, NewInsurancePolicy,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseRequest {
    #[serde(flatten)]
    policy: NewInsurancePolicy,
    /// Pay the premium through the wallet before issuing the policy.
    #[serde(default)]
    pay_with_wallet: bool,
}

async fn list_policies(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<InsurancePolicy>>> {
    Ok(Json(state.insurance_service.list_policies()?))
}

async fn purchase_policy(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PurchaseRequest>,
) -> ApiResult<(StatusCode, Json<InsurancePolicy>)> {
    let policy = if request.pay_with_wallet {
        state
            .insurance_service
            .purchase_policy_with_payment(request.policy, &state.premium_collection)
            .await?
    } else {
        state
            .insurance_service
            .purchase_policy(request.policy)
            .await?
    };
    Ok((StatusCode::CREATED, Json(policy)))
}

async fn get_policy(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<InsurancePolicy>> {
    Ok(Json(state.insurance_service.get_policy(&id)?))
}

async fn quote_policy(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewInsurancePolicy>,
) -> ApiResult<Json<InsuranceQuote>> {
    Ok(Json(state.insurance_service.quote(&request)?))
}

async fn list_insurance_types() -> Json<Vec<InsuranceProduct>> {
    Json(insurance_catalog())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/insurance", get(list_policies).post(purchase_policy))
        .route("/insurance/quote", post(quote_policy))
        .route("/insurance/types", get(list_insurance_types))
        .route("/insurance/{id}", get(get_policy))
}
