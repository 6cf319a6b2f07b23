//! Risk assessment models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lowest score the default estimator produces.
pub const MIN_RISK_SCORE: u8 = 30;

/// Highest score the default estimator produces.
pub const MAX_RISK_SCORE: u8 = 85;

/// Scores at or above this value may open the loan form.
pub const ELIGIBILITY_THRESHOLD: u8 = 45;

/// Cosmetic eligibility label derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    High,
    Medium,
    Low,
}

impl Eligibility {
    pub fn from_score(score: u8) -> Self {
        if score < 40 {
            Eligibility::High
        } else if score < 60 {
            Eligibility::Medium
        } else {
            Eligibility::Low
        }
    }
}

/// Indicative interest range, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRateRange {
    pub min_percent: Decimal,
    pub max_percent: Decimal,
}

/// Everything the loan and dashboard screens derive from one score.
///
/// Nothing here is persisted alongside loan applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub score: u8,
    pub eligibility: Eligibility,
    pub eligible_to_apply: bool,
    /// `score × 1000`
    pub suggested_max_amount: Decimal,
    /// Only present when `eligible_to_apply` is true.
    pub interest_rate_range: Option<InterestRateRange>,
}

impl RiskAssessment {
    pub fn from_score(score: u8) -> Self {
        let eligible_to_apply = score >= ELIGIBILITY_THRESHOLD;
        let headroom = Decimal::from(100u32.saturating_sub(u32::from(score)));

        let interest_rate_range = eligible_to_apply.then(|| InterestRateRange {
            min_percent: dec!(4) + headroom / dec!(20),
            max_percent: dec!(7) + headroom / dec!(10),
        });

        Self {
            score,
            eligibility: Eligibility::from_score(score),
            eligible_to_apply,
            suggested_max_amount: Decimal::from(score) * dec!(1000),
            interest_rate_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_bands() {
        assert_eq!(Eligibility::from_score(30), Eligibility::High);
        assert_eq!(Eligibility::from_score(39), Eligibility::High);
        assert_eq!(Eligibility::from_score(40), Eligibility::Medium);
        assert_eq!(Eligibility::from_score(59), Eligibility::Medium);
        assert_eq!(Eligibility::from_score(60), Eligibility::Low);
        assert_eq!(Eligibility::from_score(85), Eligibility::Low);
    }

    #[test]
    fn test_eligible_to_apply_threshold() {
        assert!(!RiskAssessment::from_score(44).eligible_to_apply);
        assert!(RiskAssessment::from_score(45).eligible_to_apply);
    }

    #[test]
    fn test_derived_figures() {
        let assessment = RiskAssessment::from_score(60);
        assert_eq!(assessment.suggested_max_amount, dec!(60000));
        let range = assessment.interest_rate_range.unwrap();
        assert_eq!(range.min_percent, dec!(6));
        assert_eq!(range.max_percent, dec!(11));
    }

    #[test]
    fn test_no_interest_range_when_ineligible() {
        let assessment = RiskAssessment::from_score(35);
        assert_eq!(assessment.eligibility, Eligibility::High);
        assert!(assessment.interest_rate_range.is_none());
    }
}
