//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use bookstore_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Services over fresh in-memory stores
pub fn services() -> Services {
    Services::new(Repository::in_memory())
}

/// Full router over fresh in-memory stores
pub fn app() -> Router {
    api::create_router(AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(services()),
    })
}

/// Send one request and return the status with the parsed JSON body
/// (`Value::Null` when the body is empty)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
