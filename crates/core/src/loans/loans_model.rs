//! Loan application domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_LOAN_PURPOSE_LENGTH;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::validation::{parse_positive_decimal, require_min_length};

/// Loan product a farmer can apply for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum LoanType {
    CropProduction,
    EquipmentPurchase,
    SeedFertilizer,
}

/// Bounds and pricing of a loan type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProduct {
    pub loan_type: LoanType,
    pub name: &'static str,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    /// Annual interest rate, in percent
    pub interest_rate: Decimal,
}

impl LoanType {
    pub const ALL: [LoanType; 3] = [
        LoanType::CropProduction,
        LoanType::EquipmentPurchase,
        LoanType::SeedFertilizer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::CropProduction => "crop_production",
            LoanType::EquipmentPurchase => "equipment_purchase",
            LoanType::SeedFertilizer => "seed_fertilizer",
        }
    }

    /// Position in the catalog, starting at 1. Older form values used it.
    fn legacy_id(&self) -> &'static str {
        match self {
            LoanType::CropProduction => "1",
            LoanType::EquipmentPurchase => "2",
            LoanType::SeedFertilizer => "3",
        }
    }

    pub fn product(&self) -> LoanProduct {
        let (name, min_amount, max_amount, interest_rate) = match self {
            LoanType::CropProduction => {
                ("Crop Production Loan", dec!(10000), dec!(50000), dec!(4.5))
            }
            LoanType::EquipmentPurchase => {
                ("Equipment Purchase Loan", dec!(20000), dec!(100000), dec!(5.5))
            }
            LoanType::SeedFertilizer => {
                ("Seed & Fertilizer Loan", dec!(2000), dec!(25000), dec!(3.5))
            }
        };
        LoanProduct {
            loan_type: *self,
            name,
            min_amount,
            max_amount,
            interest_rate,
        }
    }

    pub fn name(&self) -> &'static str {
        self.product().name
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanType {
    type Err = Error;

    /// Accepts the key (`seed_fertilizer`), the display name
    /// (`Seed & Fertilizer Loan`, case-insensitive) or the catalog position.
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        LoanType::ALL
            .into_iter()
            .find(|t| {
                t.as_str() == value
                    || t.legacy_id() == value
                    || t.name().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| {
                Error::Validation(ValidationError::UnknownVariant {
                    kind: "loan type",
                    value: value.to_string(),
                })
            })
    }
}

impl TryFrom<String> for LoanType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        LoanType::from_str(&value)
    }
}

/// Repayment period offered on the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepaymentTerm {
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "12months")]
    TwelveMonths,
    #[serde(rename = "24months")]
    TwentyFourMonths,
}

impl RepaymentTerm {
    pub const ALL: [RepaymentTerm; 4] = [
        RepaymentTerm::ThreeMonths,
        RepaymentTerm::SixMonths,
        RepaymentTerm::TwelveMonths,
        RepaymentTerm::TwentyFourMonths,
    ];

    pub fn months(&self) -> u32 {
        match self {
            RepaymentTerm::ThreeMonths => 3,
            RepaymentTerm::SixMonths => 6,
            RepaymentTerm::TwelveMonths => 12,
            RepaymentTerm::TwentyFourMonths => 24,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RepaymentTerm::ThreeMonths => "3months",
            RepaymentTerm::SixMonths => "6months",
            RepaymentTerm::TwelveMonths => "12months",
            RepaymentTerm::TwentyFourMonths => "24months",
        }
    }
}

impl FromStr for RepaymentTerm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        RepaymentTerm::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| {
                Error::Validation(ValidationError::UnknownVariant {
                    kind: "repayment term",
                    value: value.to_string(),
                })
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
}

impl LoanStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoanStatus::Pending)
    }
}

/// Domain model representing a loan application in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub id: String,
    pub loan_type: LoanType,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub purpose: String,
    pub repayment_term: RepaymentTerm,
    pub status: LoanStatus,
    pub applied_at: DateTime<Utc>,
    /// When the admin approved or rejected the application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Reference of the disbursement transfer; only set on approval
    #[serde(alias = "txHash", default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

/// Raw form values for a new loan application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoanApplication {
    pub loan_type: String,
    pub amount: String,
    pub purpose: String,
    pub repayment_term: String,
}

/// A new application whose fields passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLoanApplication {
    pub loan_type: LoanType,
    pub amount: Decimal,
    pub purpose: String,
    pub repayment_term: RepaymentTerm,
}

impl NewLoanApplication {
    /// Parses and validates the form values.
    pub fn validate(&self) -> Result<ValidatedLoanApplication> {
        let loan_type = LoanType::from_str(&self.loan_type)?;
        let amount = parse_positive_decimal("Amount", &self.amount)?;

        let product = loan_type.product();
        if amount < product.min_amount || amount > product.max_amount {
            return Err(Error::Validation(ValidationError::OutOfRange {
                field: "Amount",
                value: amount.to_string(),
                min: product.min_amount.to_string(),
                max: product.max_amount.to_string(),
            }));
        }

        require_min_length("Purpose", &self.purpose, MIN_LOAN_PURPOSE_LENGTH)?;
        let repayment_term = RepaymentTerm::from_str(&self.repayment_term)?;

        Ok(ValidatedLoanApplication {
            loan_type,
            amount,
            purpose: self.purpose.trim().to_string(),
            repayment_term,
        })
    }
}

/// A loan application joined with the farmer who filed it, for admin review.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanReview {
    #[serde(flatten)]
    pub application: LoanApplication,
    pub farmer_name: String,
    pub farmer_id: String,
}
