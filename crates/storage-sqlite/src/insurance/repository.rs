use async_trait::async_trait;

use crate::local_storage::LocalStorageRepository;
use agrifin_core::constants::INSURANCES_STORAGE_KEY;
use agrifin_core::errors::Result;
use agrifin_core::insurance::{InsurancePolicy, InsuranceRepositoryTrait};

pub struct InsuranceRepository {
    storage: LocalStorageRepository,
}

impl InsuranceRepository {
    pub fn new(storage: LocalStorageRepository) -> Self {
        InsuranceRepository { storage }
    }
}

#[async_trait]
impl InsuranceRepositoryTrait for InsuranceRepository {
    fn load_all(&self) -> Result<Vec<InsurancePolicy>> {
        Ok(self
            .storage
            .load_snapshot(INSURANCES_STORAGE_KEY)?
            .unwrap_or_default())
    }

    async fn save_all(&self, policies: Vec<InsurancePolicy>) -> Result<()> {
        self.storage
            .save_snapshot(INSURANCES_STORAGE_KEY, &policies)
            .await
    }
}
