//! Release notes shown by the console's "what's new" dialog.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ModelResult;
use crate::time::parse_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub id: String,
    pub version_num: String,
    pub title: String,
    pub release_time: String,
    #[serde(default)]
    pub content: Option<String>,
    /// The console should force a fresh login after upgrading to this release.
    #[serde(default)]
    pub re_login: Option<bool>,
    #[serde(default)]
    pub remark: Option<String>,
}

impl VersionInfo {
    pub fn requires_relogin(&self) -> bool {
        self.re_login.unwrap_or(false)
    }

    pub fn released_at(&self) -> ModelResult<NaiveDateTime> {
        parse_timestamp(&self.release_time)
    }
}
