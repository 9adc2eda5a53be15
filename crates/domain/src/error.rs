//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HaikuError`]
//! via `#[from]`.

use std::error::Error as StdError;

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum HaikuError {
    /// A domain invariant was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The storage layer failed. The message is the driver's, unchanged.
    #[error(transparent)]
    Storage(Box<dyn StdError + Send + Sync>),
}

/// Invariant violations detected while building or checking a record.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The identifier is empty.
    #[error("id must not be empty")]
    EmptyId,

    /// A required field was never set.
    #[error("missing field {0}")]
    MissingField(&'static str),

    /// A date was not in `YYYY-MM-DD` form.
    #[error("invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// A date's year cannot be written as four digits.
    #[error("{field} year {year} is outside 0..=9999")]
    DateOutOfRange { field: &'static str, year: i32 },
}

/// A lookup by identifier found nothing.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
