//! Dashboard module - read-only aggregate over the farmer's records.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{DashboardSummary, InsuranceSummary, LoanSummary};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
