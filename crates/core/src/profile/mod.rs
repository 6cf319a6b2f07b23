//! Profile module - the farmer profile singleton.

mod profile_model;
mod profile_service;
mod profile_traits;

pub use profile_model::{CropType, FarmerProfile, FarmerProfileInput, IrrigationType, SoilType};
pub use profile_service::ProfileService;
pub use profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
