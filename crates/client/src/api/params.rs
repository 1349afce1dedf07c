//! System parameters.

use serde_json::Value;
use sysconsole_core::Paginated;
use sysconsole_core::system::{ParamsForm, ParamsInfo, ParamsSearchParams};

use crate::client::ConsoleClient;
use crate::error::ApiResult;
use crate::request::ApiRequest;
use crate::transport::Transport;

const PARAMS: &str = "/sysApi/sys/params";
const PARAMS_PAGE: &str = "/sysApi/sys/params/page";
const PARAMS_UPDATE: &str = "/sysApi/sys/params/update";
const PARAMS_DEL: &str = "/sysApi/sys/params/del";

pub fn get_params_list(
    params: &ParamsSearchParams,
) -> ApiResult<ApiRequest<Paginated<ParamsInfo>>> {
    ApiRequest::get(PARAMS_PAGE).with_query(params)
}

pub fn update_params(form: &ParamsForm) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(PARAMS_UPDATE).with_body(form)
}

pub fn save_params(form: &ParamsForm) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(PARAMS).with_body(form)
}

pub fn delete_params(ids: &[i64]) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(PARAMS_DEL).with_body(ids)
}

impl<T: Transport> ConsoleClient<T> {
    pub async fn get_params_list(
        &self,
        params: &ParamsSearchParams,
    ) -> ApiResult<Paginated<ParamsInfo>> {
        self.execute(get_params_list(params)?).await
    }

    pub async fn update_params(&self, form: &ParamsForm) -> ApiResult<Value> {
        self.execute(update_params(form)?).await
    }

    pub async fn save_params(&self, form: &ParamsForm) -> ApiResult<Value> {
        self.execute(save_params(form)?).await
    }

    pub async fn delete_params(&self, ids: &[i64]) -> ApiResult<Value> {
        self.execute(delete_params(ids)?).await
    }
}
