//! Loan repository and service traits.
//!
//! These traits define the contract for loan operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::loans_model::{LoanApplication, LoanReview, LoanStatus, NewLoanApplication};
use crate::errors::Result;
use crate::wallet::FundTransferTrait;

/// Trait defining the contract for loan ledger persistence.
///
/// The ledger is stored as one snapshot. Readers get the full list in
/// insertion order and writers always replace the full list.
#[async_trait]
pub trait LoanRepositoryTrait: Send + Sync {
    /// Loads every application. A missing snapshot is an empty ledger.
    fn load_all(&self) -> Result<Vec<LoanApplication>>;

    /// Replaces the stored ledger with `applications`.
    async fn save_all(&self, applications: Vec<LoanApplication>) -> Result<()>;
}

/// Trait defining the contract for loan ledger operations.
#[async_trait]
pub trait LoanServiceTrait: Send + Sync {
    /// Lists every application in insertion order.
    fn list_applications(&self) -> Result<Vec<LoanApplication>>;

    fn list_applications_by_status(&self, status: LoanStatus) -> Result<Vec<LoanApplication>>;

    fn get_application(&self, application_id: &str) -> Result<LoanApplication>;

    /// Lists applications joined with the current farmer profile.
    fn list_for_review(&self) -> Result<Vec<LoanReview>>;

    /// Validates the form values and appends a pending application.
    async fn submit_application(&self, new_application: NewLoanApplication)
        -> Result<LoanApplication>;

    /// Disburses the amount through `transfer` and marks the application
    /// approved. Only pending applications can be approved; a failed
    /// transfer leaves the ledger untouched.
    async fn approve_application(
        &self,
        application_id: &str,
        transfer: &dyn FundTransferTrait,
    ) -> Result<LoanApplication>;

    /// Marks a pending application rejected.
    async fn reject_application(&self, application_id: &str) -> Result<LoanApplication>;
}
