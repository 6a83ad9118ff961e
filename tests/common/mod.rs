//! Shared harness for HTTP integration tests
//!
//! Builds the full router over a fresh database in a temp directory and
//! drives it in-process; no socket is opened.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use stores_api::{build_router, Database, ServerConfig};

pub struct TestApp {
    // Keeps the database directory alive for the test's duration
    _tmp: TempDir,
    pub database: Database,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let database = Database::new(tmp.path().join("stores.sqlite"));
        database.init_schema().unwrap();
        let router = build_router(&ServerConfig::default(), database.clone());
        Self {
            _tmp: tmp,
            database,
            router,
        }
    }

    /// Send a request and return status plus parsed JSON body
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
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

    /// Create a store and return its id
    pub async fn create_store(&self, name: &str) -> String {
        let (status, body) = self.post("/store", serde_json::json!({ "name": name })).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }

    /// Create an item and return its id
    pub async fn create_item(&self, name: &str, price: f64, store_id: &str) -> String {
        let (status, body) = self
            .post(
                "/item",
                serde_json::json!({ "name": name, "price": price, "store_id": store_id }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }
}
