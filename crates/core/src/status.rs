//! Enable/disable flag used by list filters.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Enabled state as the backend spells it: `"1"` or `"2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnableStatus {
    #[serde(rename = "1")]
    Enabled,
    #[serde(rename = "2")]
    Disabled,
}

impl EnableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnableStatus::Enabled => "1",
            EnableStatus::Disabled => "2",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, EnableStatus::Enabled)
    }
}

impl core::fmt::Display for EnableStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnableStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(EnableStatus::Enabled),
            "2" => Ok(EnableStatus::Disabled),
            other => Err(ModelError::invalid_status(format!("EnableStatus: {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_as_backend_flag() {
        assert_eq!(serde_json::to_string(&EnableStatus::Enabled).unwrap(), r#""1""#);
        let parsed: EnableStatus = serde_json::from_str(r#""2""#).unwrap();
        assert_eq!(parsed, EnableStatus::Disabled);
    }

    #[test]
    fn parse_rejects_unknown_flags() {
        assert_eq!("1".parse::<EnableStatus>().unwrap(), EnableStatus::Enabled);
        assert!("0".parse::<EnableStatus>().is_err());
    }
}
