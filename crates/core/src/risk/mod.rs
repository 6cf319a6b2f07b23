//! Risk module - placeholder eligibility scoring.
//!
//! There is no scoring model behind this module. The score only drives the
//! eligibility labels shown next to the loan form, and the estimator is an
//! injected capability so it can be swapped for a real model.

mod risk_estimator;
mod risk_model;

pub use risk_estimator::{FixedRiskEstimator, RandomRiskEstimator, RiskEstimator};
pub use risk_model::{
    Eligibility, InterestRateRange, RiskAssessment, ELIGIBILITY_THRESHOLD, MAX_RISK_SCORE,
    MIN_RISK_SCORE,
};
