use chrono::{DateTime, Months, Utc};

use crate::errors::{Error, Result};

/// Adds whole calendar months to an instant.
///
/// Days past the end of the target month clamp to its last day
/// (e.g. Aug 31 + 6 months = Feb 28/29).
pub fn add_calendar_months(start: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>> {
    start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| {
            Error::Unexpected(format!(
                "Date {} plus {} months is out of range",
                start, months
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_add_calendar_months() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let end = add_calendar_months(start, 6).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 7, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_add_calendar_months_clamps_to_month_end() {
        let start = Utc.with_ymd_and_hms(2023, 8, 31, 0, 0, 0).unwrap();
        let end = add_calendar_months(start, 6).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
    }
}
