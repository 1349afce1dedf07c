//! System parameters (key/value settings editable from the console).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ModelResult;
use crate::page::PageQuery;
use crate::time::parse_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsInfo {
    pub id: i64,
    #[serde(default)]
    pub param_name: Option<String>,
    /// `1` for built-in system parameters, `0` otherwise.
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub param_type: i32,
    pub param_key: String,
    #[serde(default)]
    pub param_value: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_list: Option<Vec<i64>>,
}

impl ParamsInfo {
    pub fn is_system(&self) -> bool {
        self.param_type == 1
    }

    pub fn created_at(&self) -> ModelResult<Option<NaiveDateTime>> {
        self.create_time.as_deref().map(parse_timestamp).transpose()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsSearchParams {
    /// Matched against both the parameter name and key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_type: Option<i32>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageQuery>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}
