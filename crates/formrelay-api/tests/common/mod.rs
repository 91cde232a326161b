//! Common test utilities and helpers for relay integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use formrelay_api::{ApiContext, app};
use formrelay_core::{
    EmailJsPayload, EmailSender, RelayConfig, RelayError, StaticConfigProvider, UpstreamResponse,
};
use http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use mockall::mock;
use std::sync::Arc;
use tower::ServiceExt;

mock! {
    pub Sender {}

    #[async_trait]
    impl EmailSender for Sender {
        async fn send(&self, payload: &EmailJsPayload) -> Result<UpstreamResponse, RelayError>;
    }
}

/// Credentials used by every configured test
pub fn test_config() -> RelayConfig {
    RelayConfig::new("service_test", "template_test", "public_test", "private_test")
}

/// Context with full configuration
pub fn configured(sender: MockSender) -> Arc<ApiContext> {
    ApiContext::with_parts(
        Arc::new(sender),
        Arc::new(StaticConfigProvider::new(test_config())),
    )
}

/// Context with no secrets provisioned
pub fn unconfigured(sender: MockSender) -> Arc<ApiContext> {
    ApiContext::with_parts(
        Arc::new(sender),
        Arc::new(StaticConfigProvider::unconfigured()),
    )
}

/// A sender that must never be reached
pub fn unreachable_sender() -> MockSender {
    let mut sender = MockSender::new();
    sender.expect_send().never();
    sender
}

/// A sender answering once with the given upstream status and body
pub fn sender_answering(status: u16, body: &'static str) -> MockSender {
    let mut sender = MockSender::new();
    sender
        .expect_send()
        .times(1)
        .returning(move |_| Ok(UpstreamResponse::new(status, body)));
    sender
}

pub const VALID_FORM: &str = r#"{"name":"A","email":"a@b.com","message":"hi"}"#;

/// Response pieces the tests care about
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }
}

/// Run one request through the router
pub async fn call(ctx: Arc<ApiContext>, method: &str, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app(ctx).oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn assert_cors_headers(headers: &HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}
