use rand::Rng;

use super::risk_model::{RiskAssessment, MAX_RISK_SCORE, MIN_RISK_SCORE};

/// Capability producing a risk score.
pub trait RiskEstimator: Send + Sync {
    fn estimate_score(&self) -> u8;

    fn assess(&self) -> RiskAssessment {
        RiskAssessment::from_score(self.estimate_score())
    }
}

/// Draws a uniform score in `[MIN_RISK_SCORE, MAX_RISK_SCORE]` on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRiskEstimator;

impl RiskEstimator for RandomRiskEstimator {
    fn estimate_score(&self) -> u8 {
        rand::thread_rng().gen_range(MIN_RISK_SCORE..=MAX_RISK_SCORE)
    }
}

/// Always returns the same score.
#[derive(Debug, Clone, Copy)]
pub struct FixedRiskEstimator(pub u8);

impl RiskEstimator for FixedRiskEstimator {
    fn estimate_score(&self) -> u8 {
        self.0
    }
}
