//! Tenants and tenant membership.

use serde_json::Value;
use sysconsole_core::Paginated;
use sysconsole_core::system::{TenantForm, TenantInfo, TenantSearchParams};

use crate::client::ConsoleClient;
use crate::error::ApiResult;
use crate::request::{ApiRequest, path_segment};
use crate::transport::Transport;

const TENANT_PAGE: &str = "/sysApi/tenant/member/page";
const TENANT_SAVE: &str = "/sysApi/tenant/member/save";
const TENANT_UPDATE: &str = "/sysApi/tenant/member/update";
const TENANT_DEL: &str = "/sysApi/tenant/member/delById";
const BIND_TENANT_USER: &str = "/sysApi/sys/user/bindTenantUser";
const UNBIND_TENANT_USER: &str = "/sysApi/sys/user/unBindTenantUser";

pub fn get_tenant_list(params: &TenantSearchParams) -> ApiResult<ApiRequest<Paginated<TenantInfo>>> {
    ApiRequest::get(TENANT_PAGE).with_query(params)
}

pub fn save_tenant(form: &TenantForm) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(TENANT_SAVE).with_body(form)
}

pub fn update_tenant(form: &TenantForm) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(TENANT_UPDATE).with_body(form)
}

/// Attach users to a tenant.
pub fn bind_tenant_user(tenant_id: &str, user_ids: &[String]) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(format!("{BIND_TENANT_USER}/{}", path_segment(&tenant_id))).with_body(user_ids)
}

/// Detach users from a tenant.
pub fn unbind_tenant_user(tenant_id: &str, user_ids: &[String]) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(format!("{UNBIND_TENANT_USER}/{}", path_segment(&tenant_id)))
        .with_body(user_ids)
}

pub fn delete_tenant(id: &str) -> ApiRequest<Value> {
    ApiRequest::post(format!("{TENANT_DEL}/{}", path_segment(&id)))
}

impl<T: Transport> ConsoleClient<T> {
    pub async fn get_tenant_list(
        &self,
        params: &TenantSearchParams,
    ) -> ApiResult<Paginated<TenantInfo>> {
        self.execute(get_tenant_list(params)?).await
    }

    pub async fn save_tenant(&self, form: &TenantForm) -> ApiResult<Value> {
        self.execute(save_tenant(form)?).await
    }

    pub async fn update_tenant(&self, form: &TenantForm) -> ApiResult<Value> {
        self.execute(update_tenant(form)?).await
    }

    pub async fn bind_tenant_user(&self, tenant_id: &str, user_ids: &[String]) -> ApiResult<Value> {
        self.execute(bind_tenant_user(tenant_id, user_ids)?).await
    }

    pub async fn unbind_tenant_user(
        &self,
        tenant_id: &str,
        user_ids: &[String],
    ) -> ApiResult<Value> {
        self.execute(unbind_tenant_user(tenant_id, user_ids)?).await
    }

    pub async fn delete_tenant(&self, id: &str) -> ApiResult<Value> {
        self.execute(delete_tenant(id)).await
    }
}
