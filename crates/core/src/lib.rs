//! AgriFin Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for farmer profiles, loan
//! applications and insurance policies. It is storage-agnostic and defines
//! repository traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod ids;
pub mod insurance;
pub mod loans;
pub mod profile;
pub mod risk;
pub mod utils;
pub mod wallet;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
