//! Integration tests for the reqwest transport and the sub-clients.
//!
//! Tests run against a local `mockito` server, or a bare TCP listener where a
//! malformed response is needed.
//!
//! Run with:
//! ```bash
//! cargo test -p fallkeeper-sdk --test http_integration
//! ```

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use fallkeeper_sdk::prelude::*;

async fn client_for(server: &ServerGuard) -> FallkeeperClient {
    FallkeeperClient::builder()
        .scheme("http")
        .host(&server.host_with_port())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

fn api_error(err: SdkError) -> ApiError {
    match err {
        SdkError::Api(e) => e,
        other => panic!("expected an API error, got: {other:?}"),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_me_without_auth_is_unauthorized() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/_me")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"e1","code":"jwt_security_error","status":"401","detail":"missing token","meta":{}}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let err = api_error(client.users().me().await.unwrap_err());

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    let raw = err.raw_response.expect("unauthorized keeps the raw failure");
    assert_eq!(raw.status, Some(401));
    assert_eq!(raw.server_error().unwrap().detail, "missing token");
}

#[tokio::test]
async fn test_unlisted_status_is_unknown_without_raw() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/aircrafts/404")
        .with_status(404)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let err = api_error(client.aircrafts().show(404).await.unwrap_err());

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::Unknown);
    assert!(err.raw_response.is_none());
}

#[tokio::test]
async fn test_service_unavailable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(503)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let err = api_error(client.status().get().await.unwrap_err());
    assert_eq!(err.kind, ErrorKind::Unavailable);
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_connection_refused_is_unknown() {
    let client = FallkeeperClient::builder()
        .host("127.0.0.1:1")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let err = api_error(client.status().get().await.unwrap_err());
    assert_eq!(err.kind, ErrorKind::Unknown);
}

#[tokio::test]
async fn test_status_ok() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let status = client.status().get().await.unwrap();

    mock.assert_async().await;
    assert_eq!(status.status, "ok");
}

#[tokio::test]
async fn test_list_dropzones_with_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/dropzones")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded("name".into(), "Voss".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"id":1,"name":"Skydive Voss","type":"seasonal"},{"id":2,"name":"Voss Vind"}]"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let dropzones = client
        .dropzones()
        .list(&ListQuery::new().name("Voss").limit(10))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(dropzones.len(), 2);
    assert_eq!(dropzones[0].kind, "seasonal");
}

#[tokio::test]
async fn test_create_aircraft_posts_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/aircrafts")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "Twin Otter", "capacity": 22})))
        .with_status(201)
        .with_header("location", "/aircrafts/17")
        .create_async()
        .await;

    let client = client_for(&server).await;
    let form = AircraftForm {
        name: "Twin Otter".to_string(),
        capacity: 22,
        ..Default::default()
    };
    let resp = client.aircrafts().create(&form).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.status, 201);
    assert_eq!(resp.header("Location"), Some("/aircrafts/17"));
}

#[tokio::test]
async fn test_update_jump_patches_nested_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/users/7/jumps/31")
        .match_body(Matcher::Json(json!({"altitude": 4200.0})))
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let form = JumpUpdateForm {
        altitude: Some(4200.0),
        ..Default::default()
    };
    let resp = client.jumps(7).update(31, &form).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.status, 204);
}

#[tokio::test]
async fn test_login_stores_authorization_header() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/auth/login")
        .match_header("authorization", "Basic amRvZTpzZWNyZXQ=")
        .with_status(200)
        .with_header("authorization", "Bearer jwt-123")
        .create_async()
        .await;
    let me = server
        .mock("GET", "/users/_me")
        .match_header("authorization", "Bearer jwt-123")
        .with_status(200)
        .with_body(r#"{"id":5,"username":"jdoe","email":"jdoe@example.test"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    client
        .auth()
        .with(RequestOptions::new().header("Authorization", "Basic amRvZTpzZWNyZXQ="))
        .login()
        .await
        .unwrap();
    assert!(client.auth().is_authenticated().await);

    let profile = client.users().me().await.unwrap();
    login.assert_async().await;
    me.assert_async().await;
    assert_eq!(profile.profile.username, "jdoe");

    client.auth().logout().await;
    assert!(!client.auth().is_authenticated().await);
}

#[tokio::test]
async fn test_auth_header_overrides_per_call_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/locations/3")
        .match_header("x-auth", "a")
        .with_status(200)
        .with_body(r#"{"id":3,"country":"NO"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let mut auth = Headers::new();
    auth.insert("X-Auth".to_string(), "a".to_string());
    client.set_auth_header(auth).await;

    let location = client
        .locations()
        .with(RequestOptions::new().header("X-Auth", "b"))
        .show(3)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(location.country, "NO");
}

#[tokio::test]
async fn test_raw_request_passes_response_through() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/5/gear")
        .with_status(200)
        .with_header("x-total", "0")
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server).await;
    let resp = client.request("/users/5/gear", None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("X-Total"), Some("0"));
    assert_eq!(resp.body, "[]");
}

#[tokio::test]
async fn test_truncated_error_body_keeps_status() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        // Promise more body than is sent, then hang up.
        socket
            .write_all(b"HTTP/1.1 503 Service Unavailable\r\ncontent-length: 100\r\n\r\nshort")
            .await
            .unwrap();
    });

    let client = FallkeeperClient::builder()
        .host(&addr.to_string())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let err = api_error(client.status().get().await.unwrap_err());
    server.await.unwrap();

    assert_eq!(err.kind, ErrorKind::Unavailable);
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_mixed_case_headers_sent_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_header("authorization", "Bearer a")
        .match_header("content-type", "text/plain")
        .match_request(|req| {
            req.header("authorization").len() == 1 && req.header("content-type").len() == 1
        })
        .with_status(200)
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let mut auth = Headers::new();
    auth.insert("Authorization".to_string(), "Bearer a".to_string());
    client.set_auth_header(auth).await;

    client
        .status()
        .with(
            RequestOptions::new()
                .header("authorization", "Basic x")
                .header("content-type", "text/plain"),
        )
        .get()
        .await
        .unwrap();
    mock.assert_async().await;
}
