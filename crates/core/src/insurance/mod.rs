//! Insurance module - domain models, services, and traits.

mod insurance_model;
mod insurance_service;
mod insurance_traits;


pub use insurance_model::{
    InsurancePolicy, InsuranceProduct, InsuranceQuote, InsuranceType, NewInsurancePolicy,
    PolicyStatus,
};
pub use insurance_service::InsuranceService;
pub use insurance_traits::{InsuranceRepositoryTrait, InsuranceServiceTrait};

/// Every insurance product, in catalog order.
pub fn insurance_catalog() -> Vec<InsuranceProduct> {
    InsuranceType::ALL
        .iter()
        .map(InsuranceType::product)
        .collect()
}
