//! Haiku — a short poem with its author and publication metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date;
use crate::error::{HaikuError, ValidationError};
use crate::id::HaikuId;

/// A haiku record, one row of the `haikus` table.
///
/// Field names match the column names, so the JSON form of a record is the
/// same object the table stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Haiku {
    pub id: HaikuId,
    pub title: String,
    pub author: String,
    pub text: String,
    #[serde(with = "date::ymd")]
    pub year_of_release: NaiveDate,
    #[serde(with = "date::ymd")]
    pub date_uploaded: NaiveDate,
}

impl Haiku {
    /// Create a builder for constructing a [`Haiku`].
    #[must_use]
    pub fn builder() -> HaikuBuilder {
        HaikuBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HaikuError::Validation`] when `id` is empty or a date's
    /// year falls outside `0..=9999`.
    pub fn validate(&self) -> Result<(), HaikuError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        date::check_range("year_of_release", self.year_of_release)?;
        date::check_range("date_uploaded", self.date_uploaded)?;
        Ok(())
    }

    /// Copy of this haiku under another identifier.
    #[must_use]
    pub fn with_id(&self, id: impl Into<HaikuId>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }
}

/// Step-by-step builder for [`Haiku`].
#[derive(Debug, Default)]
pub struct HaikuBuilder {
    id: Option<HaikuId>,
    title: Option<String>,
    author: Option<String>,
    text: Option<String>,
    year_of_release: Option<NaiveDate>,
    date_uploaded: Option<NaiveDate>,
}

impl HaikuBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<HaikuId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn year_of_release(mut self, date: NaiveDate) -> Self {
        self.year_of_release = Some(date);
        self
    }

    #[must_use]
    pub fn date_uploaded(mut self, date: NaiveDate) -> Self {
        self.date_uploaded = Some(date);
        self
    }

    /// Consume the builder, validate, and return a [`Haiku`].
    ///
    /// A missing id is generated and a missing upload date defaults to
    /// today (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`HaikuError::Validation`] if `year_of_release` is missing or
    /// the id is empty.
    pub fn build(self) -> Result<Haiku, HaikuError> {
        let year_of_release = self
            .year_of_release
            .ok_or(ValidationError::MissingField("year_of_release"))?;
        let haiku = Haiku {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            year_of_release,
            date_uploaded: self
                .date_uploaded
                .unwrap_or_else(|| chrono::Utc::now().date_naive()),
        };
        haiku.validate()?;
        Ok(haiku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(value: &str) -> NaiveDate {
        date::parse_date(value).unwrap()
    }

    fn silence() -> Haiku {
        Haiku::builder()
            .id("haiku1")
            .title("Silence")
            .author("Basho Matsuo")
            .text("An old silent pond... A frog jumps into the pond, splash! Silence again.")
            .year_of_release(ymd("1600-01-01"))
            .date_uploaded(ymd("2017-04-21"))
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_haiku_when_fields_provided() {
        let haiku = silence();
        assert_eq!(haiku.id.as_str(), "haiku1");
        assert_eq!(haiku.author, "Basho Matsuo");
    }

    #[test]
    fn should_generate_id_when_missing() {
        let haiku = Haiku::builder()
            .title("Untitled")
            .year_of_release(ymd("1686-01-01"))
            .build()
            .unwrap();
        assert!(!haiku.id.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_id_is_empty() {
        let result = Haiku::builder()
            .id("")
            .year_of_release(ymd("1686-01-01"))
            .build();
        assert!(matches!(
            result,
            Err(HaikuError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_require_release_date() {
        let result = Haiku::builder().id("haiku1").build();
        assert!(matches!(
            result,
            Err(HaikuError::Validation(ValidationError::MissingField(
                "year_of_release"
            )))
        ));
    }

    #[test]
    fn should_reject_five_digit_release_year() {
        let result = Haiku::builder()
            .id("haiku2")
            .year_of_release(NaiveDate::from_ymd_opt(10000, 1, 1).unwrap())
            .build();
        assert!(matches!(
            result,
            Err(HaikuError::Validation(ValidationError::DateOutOfRange {
                field: "year_of_release",
                year: 10000
            }))
        ));
    }

    #[test]
    fn should_reject_negative_upload_year() {
        let mut haiku = silence();
        haiku.date_uploaded = NaiveDate::from_ymd_opt(-1, 1, 1).unwrap();
        assert!(haiku.validate().is_err());
    }

    #[test]
    fn should_refuse_to_serialize_out_of_range_date() {
        let mut haiku = silence();
        haiku.year_of_release = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        assert!(serde_json::to_string(&haiku).is_err());
    }

    #[test]
    fn should_keep_other_fields_when_changing_id() {
        let haiku = silence();
        let copy = haiku.with_id("haiku2");
        assert_eq!(copy.id.as_str(), "haiku2");
        assert_eq!(copy.text, haiku.text);
        assert_eq!(copy.date_uploaded, haiku.date_uploaded);
    }

    #[test]
    fn should_serialize_dates_as_ymd() {
        let json = serde_json::to_value(silence()).unwrap();
        assert_eq!(json["id"], "haiku1");
        assert_eq!(json["year_of_release"], "1600-01-01");
        assert_eq!(json["date_uploaded"], "2017-04-21");
    }

    #[test]
    fn should_reject_json_with_malformed_date() {
        let json = r#"{
            "id": "haiku1",
            "title": "Silence",
            "author": "Basho Matsuo",
            "text": "...",
            "year_of_release": "1600/01/01",
            "date_uploaded": "2017-04-21"
        }"#;
        assert!(serde_json::from_str::<Haiku>(json).is_err());
    }
}
