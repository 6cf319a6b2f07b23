use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{Error, Result};
use crate::insurance::{InsurancePolicy, PolicyStatus};
use crate::loans::{LoanApplication, LoanStatus};
use crate::profile::FarmerProfile;
use crate::risk::RiskAssessment;

/// Loan counts per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Sum of approved amounts.
    pub approved_amount: Decimal,
}

/// Adds `amount` to a running total, failing instead of overflowing.
fn add_to_total(total: Decimal, amount: Decimal, field: &str) -> Result<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| Error::Unexpected(format!("{} exceeds the representable range", field)))
}

impl LoanSummary {
    pub fn from_applications(applications: &[LoanApplication]) -> Result<Self> {
        applications
            .iter()
            .try_fold(LoanSummary::default(), |mut summary, application| {
                summary.total += 1;
                match application.status {
                    LoanStatus::Pending => summary.pending += 1,
                    LoanStatus::Approved => {
                        summary.approved += 1;
                        summary.approved_amount = add_to_total(
                            summary.approved_amount,
                            application.amount,
                            "Approved amount",
                        )?;
                    }
                    LoanStatus::Rejected => summary.rejected += 1,
                }
                Ok(summary)
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceSummary {
    pub total_policies: usize,
    /// Policies whose end date is still ahead.
    pub active_policies: usize,
    pub total_premium: Decimal,
    pub total_coverage: Decimal,
}

impl InsuranceSummary {
    pub fn from_policies(policies: &[InsurancePolicy], at: DateTime<Utc>) -> Result<Self> {
        let mut summary = InsuranceSummary {
            total_policies: policies.len(),
            ..Default::default()
        };
        for policy in policies {
            if policy.status_at(at) == PolicyStatus::Active {
                summary.active_policies += 1;
            }
            summary.total_premium =
                add_to_total(summary.total_premium, policy.premium, "Total premium")?;
            summary.total_coverage =
                add_to_total(summary.total_coverage, policy.max_coverage, "Total coverage")?;
        }
        Ok(summary)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub profile: Option<FarmerProfile>,
    pub loans: LoanSummary,
    pub insurance: InsuranceSummary,
    pub risk: RiskAssessment,
}
