//! Farmer profile domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::utils::validation::{is_valid_mobile_number, is_valid_national_id, require_min_length};

/// Crop a farmer primarily grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Rice,
    Wheat,
    Maize,
    Pulses,
    Cotton,
    Sugarcane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clayey,
    Loamy,
    Sandy,
    Silty,
    Peaty,
    Chalky,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationType {
    Drip,
    Sprinkler,
    Flood,
    /// No irrigation
    Rainfed,
    Subsurface,
}

/// Domain model for the single farmer profile of an installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerProfile {
    pub id: String,
    pub name: String,
    /// 10 digits
    pub mobile_number: String,
    /// 12 digits
    pub national_id: String,
    pub location: String,
    pub primary_crop: CropType,
    #[serde(with = "rust_decimal::serde::str")]
    pub farm_size_acres: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<SoilType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrigation_type: Option<IrrigationType>,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for registering or editing the profile.
///
/// Any merge with the previously stored profile happens in the caller; the
/// stored record is replaced wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerProfileInput {
    pub name: String,
    pub mobile_number: String,
    pub national_id: String,
    pub location: String,
    pub primary_crop: CropType,
    #[serde(with = "rust_decimal::serde::str")]
    pub farm_size_acres: Decimal,
    #[serde(default)]
    pub soil_type: Option<SoilType>,
    #[serde(default)]
    pub irrigation_type: Option<IrrigationType>,
}

impl FarmerProfileInput {
    /// Validates the profile fields.
    pub fn validate(&self) -> Result<()> {
        require_min_length("Name", &self.name, 2)?;
        if !is_valid_mobile_number(self.mobile_number.trim()) {
            return Err(Error::invalid_input("Mobile number must be 10 digits"));
        }
        if !is_valid_national_id(self.national_id.trim()) {
            return Err(Error::invalid_input("National ID must be 12 digits"));
        }
        require_min_length("Location", &self.location, 2)?;
        if self.farm_size_acres < Decimal::ZERO {
            return Err(Error::invalid_input("Farm size cannot be negative"));
        }
        Ok(())
    }

    /// Builds the stored record. `id` and `registered_at` come from the
    /// previous profile when one exists.
    pub fn into_profile(
        self,
        id: String,
        registered_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> FarmerProfile {
        FarmerProfile {
            id,
            name: self.name.trim().to_string(),
            mobile_number: self.mobile_number.trim().to_string(),
            national_id: self.national_id.trim().to_string(),
            location: self.location.trim().to_string(),
            primary_crop: self.primary_crop,
            farm_size_acres: self.farm_size_acres.normalize(),
            soil_type: self.soil_type,
            irrigation_type: self.irrigation_type,
            registered_at,
            updated_at,
        }
    }
}
