//! Roles and their menu grants.

use serde_json::Value;
use sysconsole_core::system::{RoleForm, RoleList, RoleListItem, RoleSearchParams};

use crate::client::ConsoleClient;
use crate::error::ApiResult;
use crate::request::ApiRequest;
use crate::transport::Transport;

const ROLE: &str = "/sysApi/sys/role";
const ROLE_PAGE: &str = "/sysApi/sys/role/page";
const ROLE_LIST: &str = "/sysApi/sys/role/list";
const ROLE_UPDATE: &str = "/sysApi/sys/role/update";
const ROLE_DEL: &str = "/sysApi/sys/role/del";

pub fn get_role_page(params: &RoleSearchParams) -> ApiResult<ApiRequest<RoleList>> {
    ApiRequest::get(ROLE_PAGE).with_query(params)
}

/// Every role matching the filters, unpaginated.
pub fn get_role_list(params: &RoleSearchParams) -> ApiResult<ApiRequest<Vec<RoleListItem>>> {
    ApiRequest::get(ROLE_LIST).with_query(params)
}

pub fn save_role(form: &RoleForm) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(ROLE).with_body(form)
}

pub fn update_role(form: &RoleForm) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(ROLE_UPDATE).with_body(form)
}

pub fn delete_role(ids: &[i64]) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(ROLE_DEL).with_body(ids)
}

impl<T: Transport> ConsoleClient<T> {
    pub async fn get_role_page(&self, params: &RoleSearchParams) -> ApiResult<RoleList> {
        self.execute(get_role_page(params)?).await
    }

    pub async fn get_role_list(&self, params: &RoleSearchParams) -> ApiResult<Vec<RoleListItem>> {
        self.execute(get_role_list(params)?).await
    }

    pub async fn save_role(&self, form: &RoleForm) -> ApiResult<Value> {
        self.execute(save_role(form)?).await
    }

    pub async fn update_role(&self, form: &RoleForm) -> ApiResult<Value> {
        self.execute(update_role(form)?).await
    }

    pub async fn delete_role(&self, ids: &[i64]) -> ApiResult<Value> {
        self.execute(delete_role(ids)?).await
    }
}
