//! Insurance policy domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::validation::parse_positive_decimal;

/// Insurance cover a farmer can buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum InsuranceType {
    CropProtection,
    WeatherProtection,
    DroughtProtection,
}

/// Per-acre pricing of an insurance type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceProduct {
    pub insurance_type: InsuranceType,
    pub name: &'static str,
    pub premium_per_acre: Decimal,
    pub coverage_per_acre: Decimal,
}

impl InsuranceType {
    pub const ALL: [InsuranceType; 3] = [
        InsuranceType::CropProtection,
        InsuranceType::WeatherProtection,
        InsuranceType::DroughtProtection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::CropProtection => "crop_protection",
            InsuranceType::WeatherProtection => "weather_protection",
            InsuranceType::DroughtProtection => "drought_protection",
        }
    }

    fn legacy_id(&self) -> &'static str {
        match self {
            InsuranceType::CropProtection => "1",
            InsuranceType::WeatherProtection => "2",
            InsuranceType::DroughtProtection => "3",
        }
    }

    pub fn product(&self) -> InsuranceProduct {
        let (name, premium_per_acre, coverage_per_acre) = match self {
            InsuranceType::CropProtection => ("Crop Protection", dec!(2000), dec!(50000)),
            InsuranceType::WeatherProtection => ("Weather Protection", dec!(3000), dec!(75000)),
            InsuranceType::DroughtProtection => ("Drought Protection", dec!(2000), dec!(50000)),
        };
        InsuranceProduct {
            insurance_type: *self,
            name,
            premium_per_acre,
            coverage_per_acre,
        }
    }

    pub fn name(&self) -> &'static str {
        self.product().name
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsuranceType {
    type Err = Error;

    /// Accepts the key, the display name (case-insensitive) or the catalog
    /// position. Bilingual labels such as `फसल सुरक्षा - Crop Protection`
    /// match on their English part.
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        let english = value.rsplit(" - ").next().unwrap_or(value).trim();
        InsuranceType::ALL
            .into_iter()
            .find(|t| {
                t.as_str() == value
                    || t.legacy_id() == value
                    || t.name().eq_ignore_ascii_case(value)
                    || t.name().eq_ignore_ascii_case(english)
            })
            .ok_or_else(|| {
                Error::Validation(ValidationError::UnknownVariant {
                    kind: "insurance type",
                    value: value.to_string(),
                })
            })
    }
}

impl TryFrom<String> for InsuranceType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        InsuranceType::from_str(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Active,
    /// Never stored; reported for policies past their end date.
    Expired,
}

/// Domain model representing a purchased insurance policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredInsurancePolicy")]
pub struct InsurancePolicy {
    pub id: String,
    pub policy_number: String,
    pub insurance_type: InsuranceType,
    #[serde(with = "rust_decimal::serde::str")]
    pub crop_area_acres: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub premium: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_coverage: Decimal,
    pub status: PolicyStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Reference of the premium payment, when it was paid through a wallet
    #[serde(alias = "txHash", default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

/// A decimal written either as a string or as a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAmount {
    Text(#[serde(with = "rust_decimal::serde::str")] Decimal),
    Number(Decimal),
}

impl From<StoredAmount> for Decimal {
    fn from(amount: StoredAmount) -> Self {
        match amount {
            StoredAmount::Text(value) | StoredAmount::Number(value) => value,
        }
    }
}

/// Snapshot shape accepted when reading policies back.
///
/// Older snapshots name the cover (`insuranceName`), keep the area as
/// `cropArea`, store amounts as numbers and may carry a null `maxCoverage`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredInsurancePolicy {
    id: String,
    policy_number: String,
    #[serde(alias = "insuranceName")]
    insurance_type: InsuranceType,
    #[serde(alias = "cropArea")]
    crop_area_acres: StoredAmount,
    premium: StoredAmount,
    #[serde(default)]
    max_coverage: Option<StoredAmount>,
    status: PolicyStatus,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    #[serde(alias = "txHash", default)]
    transaction_hash: Option<String>,
}

impl TryFrom<StoredInsurancePolicy> for InsurancePolicy {
    type Error = Error;

    fn try_from(stored: StoredInsurancePolicy) -> Result<Self> {
        let crop_area_acres = Decimal::from(stored.crop_area_acres);
        let max_coverage = match stored.max_coverage {
            Some(amount) => Decimal::from(amount),
            None => InsuranceQuote::compute(stored.insurance_type, crop_area_acres)?.max_coverage,
        };
        Ok(InsurancePolicy {
            id: stored.id,
            policy_number: stored.policy_number,
            insurance_type: stored.insurance_type,
            crop_area_acres,
            premium: stored.premium.into(),
            max_coverage,
            status: stored.status,
            start_date: stored.start_date,
            end_date: stored.end_date,
            transaction_hash: stored.transaction_hash,
        })
    }
}

impl InsurancePolicy {
    /// Status as of `at`: stored policies stay `active` and expire by date.
    pub fn status_at(&self, at: DateTime<Utc>) -> PolicyStatus {
        if at >= self.end_date {
            PolicyStatus::Expired
        } else {
            self.status
        }
    }
}

/// Raw form values for a policy purchase or quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInsurancePolicy {
    pub insurance_type: String,
    pub crop_area_acres: String,
}

/// Premium and coverage for an insurance type and area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceQuote {
    pub insurance_type: InsuranceType,
    #[serde(with = "rust_decimal::serde::str")]
    pub crop_area_acres: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub premium: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_coverage: Decimal,
}

impl InsuranceQuote {
    /// Both amounts scale linearly with the area. Fails when an amount
    /// would not fit in a `Decimal`.
    pub fn compute(insurance_type: InsuranceType, crop_area_acres: Decimal) -> Result<Self> {
        let product = insurance_type.product();
        let out_of_range = || {
            let largest_rate = product.premium_per_acre.max(product.coverage_per_acre);
            Error::Validation(ValidationError::OutOfRange {
                field: "Crop area",
                value: crop_area_acres.to_string(),
                min: "0".to_string(),
                max: (Decimal::MAX / largest_rate).trunc().to_string(),
            })
        };
        let premium = product
            .premium_per_acre
            .checked_mul(crop_area_acres)
            .ok_or_else(out_of_range)?;
        let max_coverage = product
            .coverage_per_acre
            .checked_mul(crop_area_acres)
            .ok_or_else(out_of_range)?;
        Ok(Self {
            insurance_type,
            crop_area_acres,
            premium,
            max_coverage,
        })
    }
}

impl NewInsurancePolicy {
    /// Parses the form values and prices the cover.
    pub fn validate(&self) -> Result<InsuranceQuote> {
        let insurance_type = InsuranceType::from_str(&self.insurance_type)?;
        let crop_area_acres = parse_positive_decimal("Crop area", &self.crop_area_acres)?;
        InsuranceQuote::compute(insurance_type, crop_area_acres)
    }
}
