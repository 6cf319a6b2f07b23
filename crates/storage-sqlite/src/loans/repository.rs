use async_trait::async_trait;

use crate::local_storage::LocalStorageRepository;
use agrifin_core::constants::LOANS_STORAGE_KEY;
use agrifin_core::errors::Result;
use agrifin_core::loans::{LoanApplication, LoanRepositoryTrait};

/// Stores the loan ledger as one JSON array under `agrifin_loans`.
pub struct LoanRepository {
    storage: LocalStorageRepository,
}

impl LoanRepository {
    pub fn new(storage: LocalStorageRepository) -> Self {
        LoanRepository { storage }
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    fn load_all(&self) -> Result<Vec<LoanApplication>> {
        Ok(self
            .storage
            .load_snapshot(LOANS_STORAGE_KEY)?
            .unwrap_or_default())
    }

    async fn save_all(&self, applications: Vec<LoanApplication>) -> Result<()> {
        self.storage
            .save_snapshot(LOANS_STORAGE_KEY, &applications)
            .await
    }
}
