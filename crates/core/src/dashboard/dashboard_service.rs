use chrono::Utc;
use std::sync::Arc;

use super::dashboard_model::{DashboardSummary, InsuranceSummary, LoanSummary};
use crate::errors::Result;
use crate::insurance::InsuranceServiceTrait;
use crate::loans::LoanServiceTrait;
use crate::profile::ProfileServiceTrait;
use crate::risk::RiskEstimator;

pub trait DashboardServiceTrait: Send + Sync {
    fn summary(&self) -> Result<DashboardSummary>;
}

pub struct DashboardService {
    profile_service: Arc<dyn ProfileServiceTrait>,
    loan_service: Arc<dyn LoanServiceTrait>,
    insurance_service: Arc<dyn InsuranceServiceTrait>,
    risk_estimator: Arc<dyn RiskEstimator>,
}

impl DashboardService {
    pub fn new(
        profile_service: Arc<dyn ProfileServiceTrait>,
        loan_service: Arc<dyn LoanServiceTrait>,
        insurance_service: Arc<dyn InsuranceServiceTrait>,
        risk_estimator: Arc<dyn RiskEstimator>,
    ) -> Self {
        Self {
            profile_service,
            loan_service,
            insurance_service,
            risk_estimator,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn summary(&self) -> Result<DashboardSummary> {
        let profile = self.profile_service.get_profile()?;
        let applications = self.loan_service.list_applications()?;
        let policies = self.insurance_service.list_policies()?;

        Ok(DashboardSummary {
            profile,
            loans: LoanSummary::from_applications(&applications)?,
            insurance: InsuranceSummary::from_policies(&policies, Utc::now())?,
            risk: self.risk_estimator.assess(),
        })
    }
}
