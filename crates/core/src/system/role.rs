//! Roles and their menu grants.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ModelResult;
use crate::id::RecordId;
use crate::page::{PageQuery, Paginated};
use crate::time::parse_timestamp;

pub type RoleList = Paginated<RoleListItem>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleListItem {
    pub id: RecordId,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub remark: Option<String>,
    /// `1` for built-in roles the console must not delete.
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub is_system: i32,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub menu_id_list: Vec<RecordId>,
}

impl RoleListItem {
    pub fn is_system(&self) -> bool {
        self.is_system == 1
    }

    pub fn created_at(&self) -> ModelResult<Option<NaiveDateTime>> {
        self.create_time.as_deref().map(parse_timestamp).transpose()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageQuery>,
}

/// Payload for creating or updating a role together with its menu grants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_id_list: Option<Vec<RecordId>>,
}
