use async_trait::async_trait;

use crate::local_storage::LocalStorageRepository;
use agrifin_core::constants::PROFILE_STORAGE_KEY;
use agrifin_core::errors::Result;
use agrifin_core::profile::{FarmerProfile, ProfileRepositoryTrait};

/// Stores the single farmer profile under `agrifin_user`.
pub struct ProfileRepository {
    storage: LocalStorageRepository,
}

impl ProfileRepository {
    pub fn new(storage: LocalStorageRepository) -> Self {
        ProfileRepository { storage }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn load(&self) -> Result<Option<FarmerProfile>> {
        self.storage.load_snapshot(PROFILE_STORAGE_KEY)
    }

    async fn save(&self, profile: FarmerProfile) -> Result<FarmerProfile> {
        self.storage
            .save_snapshot(PROFILE_STORAGE_KEY, &profile)
            .await?;
        Ok(profile)
    }

    async fn delete(&self) -> Result<()> {
        self.storage.remove_item(PROFILE_STORAGE_KEY).await
    }
}
