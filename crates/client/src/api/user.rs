//! User accounts.

use serde_json::Value;
use sysconsole_core::RecordId;
use sysconsole_core::system::{UserForm, UserList, UserListItem, UserSearchParams};

use crate::client::ConsoleClient;
use crate::error::ApiResult;
use crate::request::{ApiRequest, path_segment};
use crate::transport::Transport;

const USER: &str = "/sysApi/sys/user";
const USER_PAGE: &str = "/sysApi/sys/user/page";
const USER_UPDATE: &str = "/sysApi/sys/user/update";
const USER_DEL: &str = "/sysApi/sys/user/del";

pub fn get_user_list(params: &UserSearchParams) -> ApiResult<ApiRequest<UserList>> {
    ApiRequest::get(USER_PAGE).with_query(params)
}

pub fn add_user(form: &UserForm) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(USER).with_body(form)
}

pub fn get_user_by_id(user_id: &RecordId) -> ApiRequest<UserListItem> {
    ApiRequest::get(format!("{USER}/{}", path_segment(user_id)))
}

pub fn update_user(form: &UserForm) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(USER_UPDATE).with_body(form)
}

pub fn delete_user(ids: &[RecordId]) -> ApiResult<ApiRequest<Value>> {
    ApiRequest::post(USER_DEL).with_body(ids)
}

impl<T: Transport> ConsoleClient<T> {
    pub async fn get_user_list(&self, params: &UserSearchParams) -> ApiResult<UserList> {
        self.execute(get_user_list(params)?).await
    }

    pub async fn add_user(&self, form: &UserForm) -> ApiResult<Value> {
        self.execute(add_user(form)?).await
    }

    pub async fn get_user_by_id(&self, user_id: impl Into<RecordId>) -> ApiResult<UserListItem> {
        self.execute(get_user_by_id(&user_id.into())).await
    }

    pub async fn update_user(&self, form: &UserForm) -> ApiResult<Value> {
        self.execute(update_user(form)?).await
    }

    pub async fn delete_user(&self, ids: &[RecordId]) -> ApiResult<Value> {
        self.execute(delete_user(ids)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use crate::testing::client_replying;
    use serde_json::json;
    use sysconsole_core::EnableStatus;

    #[tokio::test]
    async fn page_sends_filters_as_query() {
        let client = client_replying(Ok(json!({
            "records": [{ "id": "9", "username": "bob", "status": 1 }],
            "pageNum": 2, "pageSize": 10, "total": 11
        })));
        let params = UserSearchParams {
            user_phone: Some("138".to_string()),
            status: Some(EnableStatus::Disabled),
            tenant_id: Some("t1".to_string()),
            page: Some(sysconsole_core::PageQuery::new(2, 10)),
            ..Default::default()
        };

        let page = client.get_user_list(&params).await.unwrap();
        assert_eq!(page.records[0].username, "bob");
        assert!(!page.has_next_page());

        let sent = client.transport().last();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.path, "/sysApi/sys/user/page");
        assert_eq!(sent.query_value("userPhone"), Some("138"));
        assert_eq!(sent.query_value("status"), Some("2"));
        assert_eq!(sent.query_value("tenantId"), Some("t1"));
        assert_eq!(sent.query_value("pageNum"), Some("2"));
        assert_eq!(sent.query_value("userName"), None);
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn add_and_update_post_the_form() {
        let form = UserForm {
            username: Some("carol".to_string()),
            role_id_list: Some(vec![RecordId::from(2)]),
            ..Default::default()
        };
        let client = client_replying(Ok(json!("1790000000000000009")));

        assert_eq!(client.add_user(&form).await.unwrap(), json!("1790000000000000009"));
        client.update_user(&form).await.unwrap();

        let calls = client.transport().calls();
        assert_eq!((calls[0].method, calls[0].path.as_str()), (Method::Post, "/sysApi/sys/user"));
        assert_eq!(
            (calls[1].method, calls[1].path.as_str()),
            (Method::Post, "/sysApi/sys/user/update")
        );
        assert_eq!(calls[0].body, Some(json!({ "username": "carol", "roleIdList": [2] })));
    }

    #[tokio::test]
    async fn get_by_id_accepts_numbers_and_strings() {
        let client = client_replying(Ok(json!({ "id": 3, "username": "dave" })));
        let user = client.get_user_by_id(3).await.unwrap();
        assert_eq!(user.username, "dave");
        assert_eq!(client.transport().last().path, "/sysApi/sys/user/3");

        let client = client_replying(Ok(json!({ "id": "u/1", "username": "erin" })));
        client.get_user_by_id("u/1").await.unwrap();
        let sent = client.transport().last();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.path, "/sysApi/sys/user/u%2F1");
    }

    #[tokio::test]
    async fn delete_posts_mixed_ids() {
        let client = client_replying(Ok(serde_json::Value::Null));

        client
            .delete_user(&[RecordId::from(1), RecordId::from("1790000000000000002")])
            .await
            .unwrap();

        let sent = client.transport().last();
        assert_eq!(sent.path, "/sysApi/sys/user/del");
        assert_eq!(sent.body, Some(json!([1, "1790000000000000002"])));
    }
}
