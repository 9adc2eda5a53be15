//! Calendar dates and the `YYYY-MM-DD` format used at every boundary.
//!
//! Dates are stored, returned by reads and serialized to JSON in this one
//! format so existing consumers keep seeing the same strings.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;

/// `strftime` pattern for `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years that render as exactly four digits.
pub const YEARS: RangeInclusive<i32> = 0..=9999;

/// Check that `date` renders as `YYYY-MM-DD` and so parses back.
///
/// # Errors
///
/// Returns [`ValidationError::DateOutOfRange`] naming `field` otherwise.
pub fn check_range(field: &'static str, date: NaiveDate) -> Result<(), ValidationError> {
    let year = date.year();
    if YEARS.contains(&year) {
        Ok(())
    } else {
        Err(ValidationError::DateOutOfRange { field, year })
    }
}

/// Render a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] for any other shape.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    // chrono accepts unpadded fields, the contract does not
    if value.len() != 10 {
        return Err(ValidationError::InvalidDate {
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
    })
}

/// `serde(with = ...)` adapter serializing a [`NaiveDate`] as `YYYY-MM-DD`.
pub mod ymd {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        super::check_range("date", *date).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&super::format_date(*date))
    }

    /// # Errors
    ///
    /// Fails when the input is not a `YYYY-MM-DD` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_zero_pad_old_years() {
        let date = NaiveDate::from_ymd_opt(1600, 1, 1).unwrap();
        assert_eq!(format_date(date), "1600-01-01");
    }

    #[test]
    fn should_parse_formatted_date() {
        let date = parse_date("2017-04-21").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 4, 21).unwrap());
    }

    #[test]
    fn should_reject_unpadded_date() {
        assert!(matches!(
            parse_date("2017-4-21"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn should_reject_timestamp() {
        assert!(parse_date("2017-04-21T00:00:00Z").is_err());
    }

    #[test]
    fn should_accept_four_digit_year_bounds() {
        let first = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert!(check_range("year_of_release", first).is_ok());
        assert!(check_range("year_of_release", last).is_ok());
        assert_eq!(parse_date(&format_date(first)).unwrap(), first);
        assert_eq!(parse_date(&format_date(last)).unwrap(), last);
    }

    #[test]
    fn should_reject_years_that_need_a_sign() {
        let late = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        let early = NaiveDate::from_ymd_opt(-1, 12, 31).unwrap();
        assert_eq!(
            check_range("year_of_release", late),
            Err(ValidationError::DateOutOfRange {
                field: "year_of_release",
                year: 10000
            })
        );
        assert!(check_range("date_uploaded", early).is_err());
    }

    #[test]
    fn should_reject_impossible_date() {
        assert!(parse_date("2017-02-30").is_err());
    }
}
