//! Sign-in, sign-out and the current user's profile.

use sysconsole_core::auth::{LoginParams, LoginResponse, UserInfo};

use crate::client::ConsoleClient;
use crate::error::ApiResult;
use crate::request::ApiRequest;
use crate::transport::Transport;

const LOGIN: &str = "/sysApi/sys/auth/login";
const LOGOUT: &str = "/sysApi/sys/auth/logout";
const USER_INFO: &str = "/sysApi/sys/user/info";
const AUTHORITY: &str = "/sysApi/sys/menu/authority";

pub fn login(params: &LoginParams) -> ApiResult<ApiRequest<LoginResponse>> {
    ApiRequest::post(LOGIN).with_body(params)
}

/// Revoke a refresh token. The token travels in the query string.
pub fn logout(refresh_token: &str) -> ApiRequest<Option<LoginResponse>> {
    ApiRequest::post(LOGOUT).with_query_pair("refreshToken", refresh_token)
}

pub fn get_user_info() -> ApiRequest<UserInfo> {
    ApiRequest::get(USER_INFO)
}

/// Permission marks granted to the current user's roles.
pub fn get_authority_list() -> ApiRequest<Vec<String>> {
    ApiRequest::get(AUTHORITY)
}

impl<T: Transport> ConsoleClient<T> {
    pub async fn login(&self, params: &LoginParams) -> ApiResult<LoginResponse> {
        self.execute(login(params)?).await
    }

    pub async fn logout(&self, refresh_token: &str) -> ApiResult<Option<LoginResponse>> {
        self.execute(logout(refresh_token)).await
    }

    pub async fn get_user_info(&self) -> ApiResult<UserInfo> {
        self.execute(get_user_info()).await
    }

    pub async fn get_authority_list(&self) -> ApiResult<Vec<String>> {
        self.execute(get_authority_list()).await
    }
}
