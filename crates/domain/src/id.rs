//! Typed identifier for haikus.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a [`Haiku`](crate::haiku::Haiku).
///
/// Any non-empty string is a valid id; fresh ids are random UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HaikuId(String);

impl Default for HaikuId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl HaikuId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HaikuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HaikuId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for HaikuId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for HaikuId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
