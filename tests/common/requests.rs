//! One-shot request helpers around `tower::ServiceExt`

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use super::auth_helpers::auth_header;

/// Send one request and return the status with the decoded JSON body.
///
/// An empty body decodes to `Value::Null`.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, auth_header(token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, body)
}

pub async fn get(router: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(router, Method::GET, uri, token, None).await
}

pub async fn post(router: &Router, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, token, Some(body)).await
}

pub async fn put(router: &Router, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
    send(router, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(router, Method::DELETE, uri, token, None).await
}
