//! Menu routes and menu maintenance.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::RecordId;

/// A route record as served to the console's router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRoute {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub path: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub meta: MenuMeta,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub children: Vec<MenuRoute>,
}

impl MenuRoute {
    /// Depth-first walk over this route and all of its descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a MenuRoute)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Every button-level permission mark declared under this route.
    pub fn auth_marks(&self) -> Vec<&str> {
        let mut marks = Vec::new();
        self.walk(&mut |route| {
            marks.extend(route.meta.auth_list.iter().map(|a| a.auth_mark.as_str()));
        });
        marks
    }
}

/// Route metadata. Keys the console understands are typed; anything else the
/// backend sends is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuMeta {
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hide: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hide_tab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_iframe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auth_list: Vec<MenuAuth>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuAuth {
    pub title: String,
    pub auth_mark: String,
}

/// Payload for creating or updating a menu entry or button.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
    /// `0` menu, `1` button.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hide: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
