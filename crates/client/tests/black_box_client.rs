use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use sysconsole_client::model::system::{
    DeptForm, DictSearchParams, ParamsSearchParams, UserSearchParams,
};
use sysconsole_client::{ApiError, ClientConfig, ConsoleClient};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same routes at the root and below a gateway prefix.
        let app = backend().nest("/gateway", backend());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self) -> ConsoleClient {
        ConsoleClient::new(ClientConfig::new(&self.base_url).unwrap()).unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({ "code": 200, "msg": "success", "data": data }))
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// A stand-in for the admin backend, speaking its envelope.
fn backend() -> Router {
    Router::new()
        .route(
            "/sysApi/sys/info/latestVersion",
            get(|| async {
                ok(json!({
                    "id": "1",
                    "versionNum": "2.4.0",
                    "title": "Spring release",
                    "releaseTime": "2024-03-01 09:30:00",
                    "reLogin": true
                }))
            }),
        )
        .route(
            "/sysApi/sys/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "secret" {
                    ok(json!({ "accessToken": "tok-1", "refreshToken": "ref-1" }))
                } else {
                    Json(json!({ "code": 500, "msg": "bad credentials", "data": null }))
                }
            }),
        )
        .route(
            "/sysApi/sys/user/info",
            get(|headers: HeaderMap| async move {
                match header(&headers, "authorization") {
                    Some(token) => ok(json!({
                        "userId": 1,
                        "userName": token,
                        "roles": ["R_SUPER"],
                        "buttons": ["B_CODE1"]
                    })),
                    None => Json(json!({ "code": 401, "msg": "token expired", "data": null })),
                }
            }),
        )
        .route(
            "/sysApi/sys/menu/authority",
            get(|headers: HeaderMap| async move {
                ok(json!([
                    header(&headers, "x-request-id"),
                    header(&headers, "user-agent"),
                ]))
            }),
        )
        .route(
            "/sysApi/sys/user/page",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                let page_num: u32 = query.get("pageNum").and_then(|p| p.parse().ok()).unwrap_or(0);
                ok(json!({
                    "records": [{ "id": "7", "username": query.get("userName") }],
                    "pageNum": page_num,
                    "pageSize": 10,
                    "total": 1
                }))
            }),
        )
        .route(
            "/sysApi/sys/dept",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                ok(json!({ "contentType": header(&headers, "content-type"), "body": body }))
            }),
        )
        .route(
            "/sysApi/sys/dept/delById/:id",
            post(|Path(id): Path<String>| async move { ok(json!(id)) }),
        )
        .route(
            "/sysApi/sys/params/page",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream   exploded") }),
        )
        .route(
            "/sysApi/sys/menu/route",
            post(|| async { "<html>maintenance</html>" }),
        )
        .route(
            "/sysApi/sys/dict/type/page",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                ok(json!({ "records": [] }))
            }),
        )
}

#[tokio::test]
async fn unwraps_envelope_payloads() {
    let srv = TestServer::spawn().await;

    let version = srv.client().get_version().await.unwrap();

    assert_eq!(version.version_num, "2.4.0");
    assert!(version.requires_relogin());
}

#[tokio::test]
async fn login_token_is_sent_verbatim_afterwards() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let err = client.get_user_info().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.backend_message(), Some("token expired"));

    let tokens = client
        .login(&sysconsole_client::model::auth::LoginParams::new("admin", "secret"))
        .await
        .unwrap();
    client.set_access_token(Some(tokens.access_token));

    let user = client.get_user_info().await.unwrap();
    assert_eq!(user.user_name, "tok-1");
    assert!(user.has_button("B_CODE1"));
}

#[tokio::test]
async fn business_failures_surface_code_and_message() {
    let srv = TestServer::spawn().await;

    let err = srv
        .client()
        .login(&sysconsole_client::model::auth::LoginParams::new("admin", "nope"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Business {
            code: 500,
            msg: "bad credentials".to_string()
        }
    );
}

#[tokio::test]
async fn every_request_carries_id_and_user_agent() {
    let srv = TestServer::spawn().await;

    let seen = srv.client().get_authority_list().await.unwrap();

    assert_eq!(seen.len(), 2);
    assert!(uuid::Uuid::parse_str(&seen[0]).is_ok());
    assert!(seen[1].starts_with("sysconsole-client/"));
}

#[tokio::test]
async fn get_parameters_travel_in_the_query_string() {
    let srv = TestServer::spawn().await;
    let params = UserSearchParams {
        user_name: Some("ali ce".to_string()),
        page: Some(sysconsole_client::model::PageQuery::new(3, 10)),
        ..Default::default()
    };

    let page = srv.client().get_user_list(&params).await.unwrap();

    assert_eq!(page.page_num, 3);
    assert_eq!(page.records[0].username, "ali ce");
}

#[tokio::test]
async fn post_parameters_travel_as_json_body() {
    let srv = TestServer::spawn().await;
    let form = DeptForm {
        name: Some("R&D".to_string()),
        parent_id: Some("0".to_string()),
        ..Default::default()
    };

    let echoed = srv.client().save_dept(&form).await.unwrap();

    assert_eq!(echoed["contentType"], "application/json");
    assert_eq!(echoed["body"], json!({ "name": "R&D", "parentId": "0" }));
}

#[tokio::test]
async fn path_ids_stay_one_segment() {
    let srv = TestServer::spawn().await;

    let id = srv.client().delete_dept("a/b c").await.unwrap();

    assert_eq!(id, json!("a/b c"));
}

#[tokio::test]
async fn http_errors_keep_status_and_body() {
    let srv = TestServer::spawn().await;

    let err = srv
        .client()
        .get_params_list(&ParamsSearchParams::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            body: "upstream exploded".to_string()
        }
    );
}

#[tokio::test]
async fn non_envelope_bodies_are_decode_errors() {
    let srv = TestServer::spawn().await;

    let err = srv.client().get_menu_list(&json!({})).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn slow_backends_time_out() {
    let srv = TestServer::spawn().await;
    let config = ClientConfig::new(&srv.base_url)
        .unwrap()
        .with_timeout(Duration::from_millis(100));
    let client = ConsoleClient::new(config).unwrap();

    let err = client
        .get_dict_list(&DictSearchParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Timeout(_)));
}

#[tokio::test]
async fn base_url_prefix_is_preserved() {
    let srv = TestServer::spawn().await;
    let config = ClientConfig::new(&format!("{}/gateway/", srv.base_url)).unwrap();

    let version = ConsoleClient::new(config).unwrap().get_version().await.unwrap();

    assert_eq!(version.title, "Spring release");
}

#[tokio::test]
async fn unreachable_backends_are_transport_errors() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = ClientConfig::new(&format!("http://{addr}")).unwrap();

    let err = ConsoleClient::new(config).unwrap().get_version().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}
