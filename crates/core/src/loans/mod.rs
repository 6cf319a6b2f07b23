//! Loans module - domain models, services, and traits.

mod loans_model;
mod loans_service;
mod loans_traits;


// Re-export the public interface
pub use loans_model::{
    LoanApplication, LoanProduct, LoanReview, LoanStatus, LoanType, NewLoanApplication,
    RepaymentTerm, ValidatedLoanApplication,
};
pub use loans_service::LoanService;
pub use loans_traits::{LoanRepositoryTrait, LoanServiceTrait};

/// Every loan product, in catalog order.
pub fn loan_catalog() -> Vec<LoanProduct> {
    LoanType::ALL.iter().map(LoanType::product).collect()
}
