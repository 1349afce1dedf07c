//! Login and current-user shapes.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Credentials sent to the login endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl core::fmt::Debug for LoginParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginParams")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token pair issued on login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl core::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginResponse").finish_non_exhaustive()
    }
}

/// Profile of the signed-in user, including the button-level permissions the
/// console uses to show or hide actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub buttons: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub roles: Vec<String>,
    pub user_id: RecordId,
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserInfo {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn has_button(&self, mark: &str) -> bool {
        self.buttons.iter().any(|b| b == mark)
    }
}
