//! Departments (organisation tree).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ModelResult;
use crate::page::{PageQuery, Paginated};
use crate::time::parse_timestamp;

pub type DeptList = Paginated<DeptListItem>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeptListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub role_code: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub is_system: i32,
}

impl DeptListItem {
    /// Departments without a parent (or parented to `"0"`) sit at the top of the tree.
    pub fn is_root(&self) -> bool {
        matches!(self.parent_id.as_deref(), None | Some("") | Some("0"))
    }

    pub fn created_at(&self) -> ModelResult<Option<NaiveDateTime>> {
        self.create_time.as_deref().map(parse_timestamp).transpose()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeptSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Unset leaves paging to the backend.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageQuery>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeptForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_detection() {
        let mut dept: DeptListItem =
            serde_json::from_str(r#"{"id":"10","name":"HQ","parentId":"0"}"#).unwrap();
        assert!(dept.is_root());
        dept.parent_id = Some("10".to_string());
        assert!(!dept.is_root());
    }
}
