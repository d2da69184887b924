//! Drives the router in-process against the memory store.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use company_api::{app, AppState, MemoryDocumentStore};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_body_limit(64 * 1024)
    }

    pub fn with_body_limit(limit: usize) -> Self {
        Self {
            router: app(AppState::new(MemoryDocumentStore::new()), limit),
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create through the API and return the new record's `_id`.
    ///
    /// Create only acknowledges, so the id is taken from the last listed record.
    pub async fn create(&self, collection: &str, body: Value) -> String {
        let (status, ack) = self.post(&format!("/api/{}", collection), body).await;
        assert_eq!(status, StatusCode::OK, "create failed: {}", ack);
        let (_, list) = self.get(&format!("/api/{}", collection)).await;
        list.as_array()
            .and_then(|rows| rows.last())
            .and_then(|row| row["_id"].as_str())
            .expect("created record listed")
            .to_string()
    }
}
