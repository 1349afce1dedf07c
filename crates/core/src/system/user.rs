//! User accounts.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ModelResult;
use crate::id::RecordId;
use crate::page::{PageQuery, Paginated};
use crate::status::EnableStatus;
use crate::time::parse_timestamp;

pub type UserList = Paginated<UserListItem>;

/// One row of the user table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    pub id: RecordId,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub gender: Option<i32>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub tenant_name: Option<String>,
    #[serde(default)]
    pub dept_id: Option<String>,
    #[serde(default)]
    pub dept_name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub user_key: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub updater: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub role_id_list: Vec<RecordId>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub tenant_role: bool,
}

impl UserListItem {
    pub fn created_at(&self) -> ModelResult<Option<NaiveDateTime>> {
        self.create_time.as_deref().map(parse_timestamp).transpose()
    }

    pub fn updated_at(&self) -> ModelResult<Option<NaiveDateTime>> {
        self.update_time.as_deref().map(parse_timestamp).transpose()
    }
}

/// Filters for the user table. Unset filters are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_gender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnableStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_role: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_flag: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<String>,
    /// Unset leaves paging to the backend.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageQuery>,
}

/// Payload for creating or updating a user. `id` is required on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id_list: Option<Vec<RecordId>>,
}
