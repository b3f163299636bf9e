//! 传输层行为：请求头、错误分类与取消

mod common;

use common::{setup, TOKEN};
use serde_json::json;
use statuspage_client::{
    CancellationToken, Client, ClientConfig, Component, Error, UpdateComponentParams,
};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_standard_headers() {
    let (client, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages"))
        .and(header("accept", "application/json"))
        .and(header("authorization", format!("OAuth {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let pages = client.pages().list(&CancellationToken::new()).await.unwrap();
    assert!(pages.is_empty());

    // 没有请求体时不应带 Content-Type
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_content_type_only_with_body() {
    let (client, server) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/pages/1/components/2"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let component = client
        .components()
        .update(
            &CancellationToken::new(),
            "1",
            "2",
            &UpdateComponentParams::default(),
        )
        .await
        .unwrap();
    assert_eq!(component, Component::default());

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, json!({ "component": {} }));
}

#[tokio::test]
async fn test_server_error_keeps_raw_body() {
    let (client, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages/1/components/2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client
        .components()
        .get(&CancellationToken::new(), "1", "2")
        .await
        .unwrap_err();

    match &err {
        Error::Api {
            status,
            status_line,
            body,
        } => {
            assert_eq!(*status, 500);
            assert_eq!(status_line, "500 Internal Server Error");
            assert_eq!(body, "boom");
        }
        other => panic!("expected API error, got {:?}", other),
    }

    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("boom"));
}

#[tokio::test]
async fn test_json_error_body_is_not_parsed() {
    let (client, server) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/pages/1/components/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Not found" })))
        .mount(&server)
        .await;

    let err = client
        .components()
        .delete(&CancellationToken::new(), "1", "404")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::Api { body, .. } => assert_eq!(body, r#"{"error":"Not found"}"#),
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let (client, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client
        .pages()
        .get(&CancellationToken::new(), "1")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_shape_mismatch_is_decode_error() {
    let (client, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages/1/components"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5 })))
        .mount(&server)
        .await;

    let err = client
        .components()
        .list(&CancellationToken::new(), "1")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_cancelled_before_send() {
    let (client, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client.pages().list(&cancel).await.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_while_waiting() {
    let (client, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages/1/incidents/unresolved"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = client
        .incidents()
        .list_unresolved(&cancel, "1")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let (_, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(100));
    let client = Client::with_config(TOKEN, config, None).unwrap();

    let err = client.pages().list(&CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // 端口 1 上没有服务
    let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
    let client = Client::with_config(TOKEN, config, None).unwrap();

    let err = client
        .maintenance()
        .list_active(&CancellationToken::new(), "1")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let (client, server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages/1/components/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"2"}"#))
        .expect(8)
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        let cancel = cancel.clone();
        handles.push(tokio::spawn(async move {
            client.components().get(&cancel, "1", "2").await
        }));
    }

    for handle in handles {
        let component = handle.await.unwrap().unwrap();
        assert_eq!(component.id.as_deref(), Some("2"));
    }
}
