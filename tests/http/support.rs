//! Shared server harness for the HTTP tests.

use std::sync::Arc;

use bookshelf::{http, CatalogService, InMemoryCatalog};
use serde_json::{json, Value};

/// A running catalog server plus a client pointed at it.
pub struct TestServer {
    pub base: String,
    pub client: reqwest::Client,
    pub service: Arc<CatalogService<InMemoryCatalog>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// POST `/api/books` with a JSON title and return the new book's id.
    pub async fn create(&self, title: &str) -> String {
        let body: Value = self
            .client
            .post(self.url("/api/books"))
            .json(&json!({ "title": title }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        body["_id"].as_str().unwrap().to_string()
    }
}

/// Bind to port 0 and return the running server.
pub async fn start_server() -> TestServer {
    let service = Arc::new(CatalogService::new(InMemoryCatalog::new()));
    let app = http::router(service.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
        service,
    }
}

/// Assert a plain-text 200 response with the given body.
pub async fn assert_text(resp: reqwest::Response, expected: &str) {
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("text/plain"),
        "expected text/plain, got {content_type:?}"
    );
    assert_eq!(resp.text().await.unwrap(), expected);
}
