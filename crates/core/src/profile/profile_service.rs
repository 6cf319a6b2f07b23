use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

use super::profile_model::{FarmerProfile, FarmerProfileInput};
use super::profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::errors::Result;
use crate::ids::IdGenerator;

/// Service for managing the farmer profile
pub struct ProfileService {
    repository: Arc<dyn ProfileRepositoryTrait>,
    id_generator: Arc<dyn IdGenerator>,
}

impl ProfileService {
    pub fn new(
        repository: Arc<dyn ProfileRepositoryTrait>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            id_generator,
        }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    fn get_profile(&self) -> Result<Option<FarmerProfile>> {
        self.repository.load()
    }

    async fn save_profile(&self, input: FarmerProfileInput) -> Result<FarmerProfile> {
        input.validate()?;

        let now = Utc::now();
        let (id, registered_at) = match self.repository.load()? {
            Some(existing) => {
                debug!("Updating profile {}", existing.id);
                (existing.id, existing.registered_at)
            }
            None => {
                let id = self.id_generator.next_id();
                info!("Registering new farmer profile {}", id);
                (id, now)
            }
        };

        let profile = input.into_profile(id, registered_at, now);
        self.repository.save(profile).await
    }

    async fn delete_profile(&self) -> Result<()> {
        info!("Deleting farmer profile");
        self.repository.delete().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, ValidationError};
    use crate::profile::{CropType, IrrigationType, SoilType};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockProfileRepository {
        stored: Mutex<Option<String>>,
    }

    #[async_trait]
    impl ProfileRepositoryTrait for MockProfileRepository {
        fn load(&self) -> Result<Option<FarmerProfile>> {
            self.stored
                .lock()
                .unwrap()
                .as_deref()
                .map(|raw| serde_json::from_str::<FarmerProfile>(raw))
                .transpose()
                .map_err(Error::from)
        }

        async fn save(&self, profile: FarmerProfile) -> Result<FarmerProfile> {
            *self.stored.lock().unwrap() = Some(serde_json::to_string(&profile)?);
            Ok(profile)
        }

        async fn delete(&self) -> Result<()> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    struct SequentialIds(Mutex<u32>);

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> String {
            let mut n = self.0.lock().unwrap();
            *n += 1;
            format!("farmer-{}", n)
        }

        fn next_policy_number(&self) -> String {
            unimplemented!()
        }
    }

    fn service() -> (ProfileService, Arc<MockProfileRepository>) {
        let repository = Arc::new(MockProfileRepository::default());
        let service = ProfileService::new(
            repository.clone(),
            Arc::new(SequentialIds(Mutex::new(0))),
        );
        (service, repository)
    }

    fn input() -> FarmerProfileInput {
        FarmerProfileInput {
            name: "Lakshmi Devi".to_string(),
            mobile_number: "9876543210".to_string(),
            national_id: "123412341234".to_string(),
            location: "Nashik, Maharashtra".to_string(),
            primary_crop: CropType::Wheat,
            farm_size_acres: dec!(3.5),
            soil_type: Some(SoilType::Loamy),
            irrigation_type: Some(IrrigationType::Drip),
        }
    }

    #[tokio::test]
    async fn test_load_without_profile_is_none() {
        let (service, _) = service();
        assert!(service.get_profile().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let (service, _) = service();
        let saved = service.save_profile(input()).await.unwrap();
        let loaded = service.get_profile().unwrap().unwrap();

        assert_eq!(saved, loaded);
        assert_eq!(loaded.id, "farmer-1");
        assert_eq!(loaded.farm_size_acres, dec!(3.5));
        assert_eq!(loaded.soil_type, Some(SoilType::Loamy));
        assert_eq!(loaded.registered_at, loaded.updated_at);
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_registration_time() {
        let (service, _) = service();
        let first = service.save_profile(input()).await.unwrap();

        let mut changed = input();
        changed.location = "Pune".to_string();
        changed.soil_type = None;
        let second = service.save_profile(changed).await.unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.registered_at, first.registered_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(second.location, "Pune");
        // Wholesale replacement, no merge with the old soil type.
        assert_eq!(second.soil_type, None);
    }

    #[tokio::test]
    async fn test_invalid_mobile_number_is_rejected() {
        let (service, repository) = service();
        let mut bad = input();
        bad.mobile_number = "98765".to_string();

        let err = service.save_profile(bad).await.unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidInput(_))));
        assert!(repository.stored.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_national_id_is_rejected() {
        let (service, _) = service();
        let mut bad = input();
        bad.national_id = "1234".to_string();
        assert!(service.save_profile(bad).await.is_err());
    }

    #[tokio::test]
    async fn test_negative_farm_size_is_rejected_but_zero_is_allowed() {
        let (service, _) = service();
        let mut bad = input();
        bad.farm_size_acres = dec!(-1);
        assert!(service.save_profile(bad).await.is_err());

        let mut zero = input();
        zero.farm_size_acres = dec!(0);
        assert!(service.save_profile(zero).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let (service, _) = service();
        service.save_profile(input()).await.unwrap();
        service.delete_profile().await.unwrap();
        assert!(service.get_profile().unwrap().is_none());
    }
}
