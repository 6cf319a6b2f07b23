//! Field-level validation helpers shared by the input models.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::errors::{Error, Result, ValidationError};

static MOBILE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid regex pattern"));

static NATIONAL_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("Invalid regex pattern"));

/// Exactly 10 ASCII digits.
pub fn is_valid_mobile_number(value: &str) -> bool {
    MOBILE_NUMBER_REGEX.is_match(value)
}

/// Exactly 12 ASCII digits.
pub fn is_valid_national_id(value: &str) -> bool {
    NATIONAL_ID_REGEX.is_match(value)
}

/// Fails unless `value` has at least `min` characters once trimmed.
pub fn require_min_length(field: &str, value: &str, min: usize) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    if trimmed.chars().count() < min {
        return Err(Error::invalid_input(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

/// Parses a user-entered number that must be strictly positive.
pub fn parse_positive_decimal(field: &str, raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    let value = Decimal::from_str(trimmed)
        .map_err(|_| Error::invalid_input(format!("{} must be a positive number", field)))?;
    if value <= Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "{} must be a positive number",
            field
        )));
    }
    Ok(value.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mobile_number_format() {
        assert!(is_valid_mobile_number("9876543210"));
        assert!(!is_valid_mobile_number("987654321"));
        assert!(!is_valid_mobile_number("98765432100"));
        assert!(!is_valid_mobile_number("98765-43210"));
        assert!(!is_valid_mobile_number("९८७६५४३२१०"));
    }

    #[test]
    fn test_national_id_format() {
        assert!(is_valid_national_id("123412341234"));
        assert!(!is_valid_national_id("12341234123"));
        assert!(!is_valid_national_id("1234 1234 1234"));
    }

    #[test]
    fn test_parse_positive_decimal() {
        assert_eq!(parse_positive_decimal("Amount", "5000").unwrap(), dec!(5000));
        assert_eq!(parse_positive_decimal("Amount", " 2.50 ").unwrap(), dec!(2.5));
        assert!(parse_positive_decimal("Amount", "0").is_err());
        assert!(parse_positive_decimal("Amount", "-3").is_err());
        assert!(parse_positive_decimal("Amount", "abc").is_err());
        assert!(matches!(
            parse_positive_decimal("Amount", ""),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn test_require_min_length() {
        assert!(require_min_length("Name", "Ravi", 2).is_ok());
        assert!(require_min_length("Name", " R ", 2).is_err());
    }
}
