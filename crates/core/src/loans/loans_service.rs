use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use std::sync::Arc;

use super::loans_model::{LoanApplication, LoanReview, LoanStatus, NewLoanApplication};
use super::loans_traits::{LoanRepositoryTrait, LoanServiceTrait};
use crate::constants::{UNKNOWN_FARMER_ID, UNKNOWN_FARMER_NAME};
use crate::errors::{Error, Result};
use crate::ids::IdGenerator;
use crate::profile::ProfileRepositoryTrait;
use crate::wallet::FundTransferTrait;

/// Service for the loan ledger
pub struct LoanService {
    repository: Arc<dyn LoanRepositoryTrait>,
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
    id_generator: Arc<dyn IdGenerator>,
}

impl LoanService {
    pub fn new(
        repository: Arc<dyn LoanRepositoryTrait>,
        profile_repository: Arc<dyn ProfileRepositoryTrait>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            profile_repository,
            id_generator,
        }
    }

    /// Index of the pending application with `application_id`.
    fn find_pending(applications: &[LoanApplication], application_id: &str) -> Result<usize> {
        applications
            .iter()
            .position(|a| a.id == application_id && !a.status.is_terminal())
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "No pending loan application with id '{}'",
                    application_id
                ))
            })
    }
}

#[async_trait]
impl LoanServiceTrait for LoanService {
    fn list_applications(&self) -> Result<Vec<LoanApplication>> {
        self.repository.load_all()
    }

    fn list_applications_by_status(&self, status: LoanStatus) -> Result<Vec<LoanApplication>> {
        Ok(self
            .repository
            .load_all()?
            .into_iter()
            .filter(|a| a.status == status)
            .collect())
    }

    fn get_application(&self, application_id: &str) -> Result<LoanApplication> {
        self.repository
            .load_all()?
            .into_iter()
            .find(|a| a.id == application_id)
            .ok_or_else(|| {
                Error::NotFound(format!("Loan application '{}' not found", application_id))
            })
    }

    fn list_for_review(&self) -> Result<Vec<LoanReview>> {
        let profile = self.profile_repository.load()?;
        let (farmer_name, farmer_id) = match profile {
            Some(p) => (p.name, p.id),
            None => (
                UNKNOWN_FARMER_NAME.to_string(),
                UNKNOWN_FARMER_ID.to_string(),
            ),
        };

        Ok(self
            .repository
            .load_all()?
            .into_iter()
            .map(|application| LoanReview {
                application,
                farmer_name: farmer_name.clone(),
                farmer_id: farmer_id.clone(),
            })
            .collect())
    }

    async fn submit_application(
        &self,
        new_application: NewLoanApplication,
    ) -> Result<LoanApplication> {
        let validated = new_application.validate()?;

        let application = LoanApplication {
            id: self.id_generator.next_id(),
            loan_type: validated.loan_type,
            amount: validated.amount,
            purpose: validated.purpose,
            repayment_term: validated.repayment_term,
            status: LoanStatus::Pending,
            applied_at: Utc::now(),
            reviewed_at: None,
            transaction_hash: None,
        };

        let mut applications = self.repository.load_all()?;
        applications.push(application.clone());
        self.repository.save_all(applications).await?;

        info!(
            "Submitted loan application {} ({}, {} over {} months)",
            application.id,
            application.loan_type,
            application.amount,
            application.repayment_term.months()
        );
        Ok(application)
    }

    async fn approve_application(
        &self,
        application_id: &str,
        transfer: &dyn FundTransferTrait,
    ) -> Result<LoanApplication> {
        let mut applications = self.repository.load_all()?;
        let index = Self::find_pending(&applications, application_id)?;
        let amount = applications[index].amount;

        debug!(
            "Disbursing {} for loan application {}",
            amount, application_id
        );
        let reference = transfer.transfer(amount).await.map_err(|e| {
            warn!(
                "Transfer for loan application {} failed: {}",
                application_id, e
            );
            match e {
                Error::Transfer(_) => e,
                other => Error::Transfer(other.to_string()),
            }
        })?;

        let application = &mut applications[index];
        application.status = LoanStatus::Approved;
        application.reviewed_at = Some(Utc::now());
        application.transaction_hash = Some(reference);
        let approved = application.clone();

        self.repository.save_all(applications).await?;
        info!("Approved loan application {}", application_id);
        Ok(approved)
    }

    async fn reject_application(&self, application_id: &str) -> Result<LoanApplication> {
        let mut applications = self.repository.load_all()?;
        let index = Self::find_pending(&applications, application_id)?;

        let application = &mut applications[index];
        application.status = LoanStatus::Rejected;
        application.reviewed_at = Some(Utc::now());
        let rejected = application.clone();

        self.repository.save_all(applications).await?;
        info!("Rejected loan application {}", application_id);
        Ok(rejected)
    }
}
