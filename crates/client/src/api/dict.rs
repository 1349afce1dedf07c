//! Dictionary types and entries.

use serde_json::Value;
use sysconsole_core::Paginated;
use sysconsole_core::system::{Dict, DictData, DictSearchParams};

use crate::client::ConsoleClient;
use crate::error::ApiResult;
use crate::request::ApiRequest;
use crate::transport::Transport;

const DICT_TYPE_PAGE: &str = "/sysApi/sys/dict/type/page";
const DICT_DATA_PAGE: &str = "/sysApi/sys/dict/data/page";
const DICT_TYPE_DEL: &str = "/sysApi/sys/dict/type/del";

pub fn get_dict_list(params: &DictSearchParams) -> ApiResult<ApiRequest<Paginated<Dict>>> {
    ApiRequest::get(DICT_TYPE_PAGE).with_query(params)
}

pub fn get_dict_data_list(params: &DictSearchParams) -> ApiResult<ApiRequest<Paginated<DictData>>> {
    ApiRequest::get(DICT_DATA_PAGE).with_query(params)
}

/// Delete dictionary types by id.
pub fn delete_dict(ids: &[String]) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(DICT_TYPE_DEL).with_body(ids)
}

impl<T: Transport> ConsoleClient<T> {
    pub async fn get_dict_list(&self, params: &DictSearchParams) -> ApiResult<Paginated<Dict>> {
        self.execute(get_dict_list(params)?).await
    }

    pub async fn get_dict_data_list(
        &self,
        params: &DictSearchParams,
    ) -> ApiResult<Paginated<DictData>> {
        self.execute(get_dict_data_list(params)?).await
    }

    pub async fn delete_dict(&self, ids: &[String]) -> ApiResult<Value> {
        self.execute(delete_dict(ids)?).await
    }
}
