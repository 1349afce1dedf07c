//! Dictionary types and their entries.

use serde::{Deserialize, Serialize};

use crate::page::PageQuery;

/// A dictionary type (e.g. `user_gender`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dict {
    pub id: String,
    #[serde(default)]
    pub dict_name: Option<String>,
    #[serde(default)]
    pub dict_type: Option<String>,
    /// `0` for a static list, `1` when entries come from `dict_sql`.
    #[serde(default)]
    pub dict_source: Option<i32>,
    #[serde(default)]
    pub sort: Option<i32>,
    #[serde(default)]
    pub dict_sql: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub dict_type_id: Option<String>,
}

/// One entry of a dictionary type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictData {
    pub id: String,
    #[serde(default)]
    pub sort: Option<i32>,
    #[serde(default)]
    pub dict_type: Option<String>,
    pub dict_label: String,
    pub dict_value: String,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub dict_type_id: Option<String>,
    #[serde(default)]
    pub label_class: Option<String>,
}

/// Filters shared by the dictionary type and dictionary data tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict_label: Option<String>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageQuery>,
}

impl DictSearchParams {
    /// Filter for the entries of one dictionary type.
    pub fn for_type_id(dict_type_id: impl Into<String>) -> Self {
        Self {
            dict_type_id: Some(dict_type_id.into()),
            ..Default::default()
        }
    }
}
