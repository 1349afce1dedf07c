//! Record identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Identifier of a backend record.
///
/// The backend serialises 64-bit keys as JSON strings on some resources and as
/// numbers on others, so both shapes are accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(i64),
    Str(String),
}

impl RecordId {
    /// Numeric value, if the id is a number or a string holding one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RecordId::Num(n) => Some(*n),
            RecordId::Str(s) => s.parse().ok(),
        }
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RecordId::Num(n) => core::fmt::Display::fmt(n, f),
            RecordId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl FromStr for RecordId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ModelError::invalid_id("RecordId: empty"));
        }
        Ok(Self::Str(trimmed.to_string()))
    }
}
