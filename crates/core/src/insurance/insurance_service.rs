use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use super::insurance_model::{InsurancePolicy, InsuranceQuote, NewInsurancePolicy, PolicyStatus};
use super::insurance_traits::{InsuranceRepositoryTrait, InsuranceServiceTrait};
use crate::constants::POLICY_TERM_MONTHS;
use crate::errors::{Error, Result};
use crate::ids::IdGenerator;
use crate::utils::time_utils::add_calendar_months;
use crate::wallet::FundTransferTrait;

/// Service for the insurance ledger
pub struct InsuranceService {
    repository: Arc<dyn InsuranceRepositoryTrait>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InsuranceService {
    pub fn new(
        repository: Arc<dyn InsuranceRepositoryTrait>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    async fn append_policy(
        &self,
        quote: InsuranceQuote,
        transaction_hash: Option<String>,
    ) -> Result<InsurancePolicy> {
        let start_date = Utc::now();
        let end_date = add_calendar_months(start_date, POLICY_TERM_MONTHS)?;

        let policy = InsurancePolicy {
            id: self.id_generator.next_id(),
            policy_number: self.id_generator.next_policy_number(),
            insurance_type: quote.insurance_type,
            crop_area_acres: quote.crop_area_acres,
            premium: quote.premium,
            max_coverage: quote.max_coverage,
            status: PolicyStatus::Active,
            start_date,
            end_date,
            transaction_hash,
        };

        let mut policies = self.repository.load_all()?;
        policies.push(policy.clone());
        self.repository.save_all(policies).await?;

        info!(
            "Issued policy {} ({}, {} acres, premium {})",
            policy.policy_number, policy.insurance_type, policy.crop_area_acres, policy.premium
        );
        Ok(policy)
    }
}

#[async_trait]
impl InsuranceServiceTrait for InsuranceService {
    fn list_policies(&self) -> Result<Vec<InsurancePolicy>> {
        self.repository.load_all()
    }

    fn get_policy(&self, policy_id: &str) -> Result<InsurancePolicy> {
        self.repository
            .load_all()?
            .into_iter()
            .find(|p| p.id == policy_id)
            .ok_or_else(|| Error::NotFound(format!("Insurance policy '{}' not found", policy_id)))
    }

    fn quote(&self, new_policy: &NewInsurancePolicy) -> Result<InsuranceQuote> {
        new_policy.validate()
    }

    async fn purchase_policy(&self, new_policy: NewInsurancePolicy) -> Result<InsurancePolicy> {
        let quote = new_policy.validate()?;
        self.append_policy(quote, None).await
    }

    async fn purchase_policy_with_payment(
        &self,
        new_policy: NewInsurancePolicy,
        transfer: &dyn FundTransferTrait,
    ) -> Result<InsurancePolicy> {
        let quote = new_policy.validate()?;

        let reference = transfer.transfer(quote.premium).await.map_err(|e| {
            warn!("Premium payment of {} failed: {}", quote.premium, e);
            match e {
                Error::Transfer(_) => e,
                other => Error::Transfer(other.to_string()),
            }
        })?;

        self.append_policy(quote, Some(reference)).await
    }
}
