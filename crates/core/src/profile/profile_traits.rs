//! Profile repository and service traits.

use async_trait::async_trait;

use super::profile_model::{FarmerProfile, FarmerProfileInput};
use crate::errors::Result;

/// Trait defining the contract for profile persistence.
///
/// The profile is a singleton snapshot: `save` replaces whatever was stored.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    /// Returns the stored profile, or `None` when nothing is stored.
    fn load(&self) -> Result<Option<FarmerProfile>>;

    /// Overwrites the stored profile.
    async fn save(&self, profile: FarmerProfile) -> Result<FarmerProfile>;

    /// Removes the stored profile. Removing a missing profile is not an error.
    async fn delete(&self) -> Result<()>;
}

/// Trait defining the contract for profile operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    fn get_profile(&self) -> Result<Option<FarmerProfile>>;

    /// Validates and stores the profile, keeping `id` and `registered_at`
    /// of an existing profile.
    async fn save_profile(&self, input: FarmerProfileInput) -> Result<FarmerProfile>;

    async fn delete_profile(&self) -> Result<()>;
}
