//! Menu routes and menu maintenance.

use serde::Serialize;
use sysconsole_core::system::{MenuForm, MenuRoute};

use crate::client::ConsoleClient;
use crate::error::ApiResult;
use crate::request::{ApiRequest, path_segment};
use crate::transport::Transport;

const MENU: &str = "/sysApi/sys/menu";
const MENU_ROUTE: &str = "/sysApi/sys/menu/route";
const MENU_UPDATE: &str = "/sysApi/sys/menu/update";

/// Route tree for the current user. The filter body is passed through as-is.
pub fn get_menu_list<P>(params: &P) -> ApiResult<ApiRequest<Vec<MenuRoute>>>
where
    P: Serialize + ?Sized,
{
    ApiRequest::post(MENU_ROUTE).with_body(params)
}

pub fn save_menu(form: &MenuForm) -> ApiResult<ApiRequest<Option<String>>> {
    ApiRequest::post(MENU).with_body(form)
}

pub fn update_menu(form: &MenuForm) -> ApiResult<ApiRequest<Option<String>>> {
    ApiRequest::post(MENU_UPDATE).with_body(form)
}

pub fn delete_menu(menu_id: i64) -> ApiRequest<Option<String>> {
    ApiRequest::post(format!("{MENU}/delById/{}", path_segment(&menu_id)))
}

impl<T: Transport> ConsoleClient<T> {
    pub async fn get_menu_list<P>(&self, params: &P) -> ApiResult<Vec<MenuRoute>>
    where
        P: Serialize + ?Sized,
    {
        self.execute(get_menu_list(params)?).await
    }

    pub async fn save_menu(&self, form: &MenuForm) -> ApiResult<Option<String>> {
        self.execute(save_menu(form)?).await
    }

    pub async fn update_menu(&self, form: &MenuForm) -> ApiResult<Option<String>> {
        self.execute(update_menu(form)?).await
    }

    pub async fn delete_menu(&self, menu_id: i64) -> ApiResult<Option<String>> {
        self.execute(delete_menu(menu_id)).await
    }
}
