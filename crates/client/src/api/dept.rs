//! Department maintenance.

use serde_json::Value;
use sysconsole_core::system::{DeptForm, DeptList, DeptSearchParams};

use crate::client::ConsoleClient;
use crate::error::ApiResult;
use crate::request::{ApiRequest, path_segment};
use crate::transport::Transport;

const DEPT: &str = "/sysApi/sys/dept";
const DEPT_LIST: &str = "/sysApi/sys/dept/list";
const DEPT_PAGE: &str = "/sysApi/sys/dept/page";
const DEPT_UPDATE: &str = "/sysApi/sys/dept/update";

/// Department list; the filters travel as a JSON body.
pub fn get_dept_list(params: &DeptSearchParams) -> ApiResult<ApiRequest<DeptList>> {
    ApiRequest::post(DEPT_LIST).with_body(params)
}

pub fn get_dept_page(params: &DeptSearchParams) -> ApiResult<ApiRequest<DeptList>> {
    ApiRequest::get(DEPT_PAGE).with_query(params)
}

pub fn save_dept(form: &DeptForm) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(DEPT).with_body(form)
}

pub fn update_dept(form: &DeptForm) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(DEPT_UPDATE).with_body(form)
}

pub fn delete_dept(id: &str) -> ApiRequest<Value> {
    ApiRequest::post(format!("{DEPT}/delById/{}", path_segment(&id)))
}

impl<T: Transport> ConsoleClient<T> {
    pub async fn get_dept_list(&self, params: &DeptSearchParams) -> ApiResult<DeptList> {
        self.execute(get_dept_list(params)?).await
    }

    pub async fn get_dept_page(&self, params: &DeptSearchParams) -> ApiResult<DeptList> {
        self.execute(get_dept_page(params)?).await
    }

    pub async fn save_dept(&self, form: &DeptForm) -> ApiResult<Value> {
        self.execute(save_dept(form)?).await
    }

    pub async fn update_dept(&self, form: &DeptForm) -> ApiResult<Value> {
        self.execute(update_dept(form)?).await
    }

    pub async fn delete_dept(&self, id: &str) -> ApiResult<Value> {
        self.execute(delete_dept(id)).await
    }
}
