//! Insurance repository and service traits.

use async_trait::async_trait;

use super::insurance_model::{InsurancePolicy, InsuranceQuote, NewInsurancePolicy};
use crate::errors::Result;
use crate::wallet::FundTransferTrait;

/// Trait defining the contract for insurance ledger persistence.
///
/// Same snapshot semantics as the loan ledger.
#[async_trait]
pub trait InsuranceRepositoryTrait: Send + Sync {
    /// Loads every policy. A missing snapshot is an empty ledger.
    fn load_all(&self) -> Result<Vec<InsurancePolicy>>;

    /// Replaces the stored ledger with `policies`.
    async fn save_all(&self, policies: Vec<InsurancePolicy>) -> Result<()>;
}

/// Trait defining the contract for insurance ledger operations.
#[async_trait]
pub trait InsuranceServiceTrait: Send + Sync {
    /// Lists every policy in purchase order.
    fn list_policies(&self) -> Result<Vec<InsurancePolicy>>;

    fn get_policy(&self, policy_id: &str) -> Result<InsurancePolicy>;

    /// Prices a policy without storing anything.
    fn quote(&self, new_policy: &NewInsurancePolicy) -> Result<InsuranceQuote>;

    /// Buys a policy and appends it to the ledger.
    async fn purchase_policy(&self, new_policy: NewInsurancePolicy) -> Result<InsurancePolicy>;

    /// Pays the premium through `transfer`, then buys the policy. Nothing is
    /// stored when the payment fails.
    async fn purchase_policy_with_payment(
        &self,
        new_policy: NewInsurancePolicy,
        transfer: &dyn FundTransferTrait,
    ) -> Result<InsurancePolicy>;
}
