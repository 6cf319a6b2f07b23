use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use agrifin_core::loans::{
    loan_catalog, LoanApplication, LoanProduct, LoanReview, LoanStatus, NewLoanApplication,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct ListQuery {
    status: Option<LoanStatus>,
}

async fn list_loans(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<LoanApplication>>> {
    let applications = match query.status {
        Some(status) => state.loan_service.list_applications_by_status(status)?,
        None => state.loan_service.list_applications()?,
    };
    Ok(Json(applications))
}

async fn submit_loan(
    State(state): State<Arc<AppState>>,
    Json(application): Json<NewLoanApplication>,
) -> ApiResult<(StatusCode, Json<LoanApplication>)> {
    let submitted = state.loan_service.submit_application(application).await?;
    Ok((StatusCode::CREATED, Json(submitted)))
}

async fn get_loan(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<LoanApplication>> {
    Ok(Json(state.loan_service.get_application(&id)?))
}

async fn approve_loan(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<LoanApplication>> {
    let approved = state
        .loan_service
        .approve_application(&id, &state.disbursement)
        .await?;
    Ok(Json(approved))
}

async fn reject_loan(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<LoanApplication>> {
    Ok(Json(state.loan_service.reject_application(&id).await?))
}

async fn list_loan_types() -> Json<Vec<LoanProduct>> {
    Json(loan_catalog())
}

async fn list_for_review(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<LoanReview>>> {
    Ok(Json(state.loan_service.list_for_review()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/loans", get(list_loans).post(submit_loan))
        .route("/loans/types", get(list_loan_types))
        .route("/loans/{id}", get(get_loan))
        .route("/loans/{id}/approve", post(approve_loan))
        .route("/loans/{id}/reject", post(reject_loan))
        .route("/admin/loans", get(list_for_review))
}
