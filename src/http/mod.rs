//! HTTP transport for the catalog — maps the REST surface onto a
//! `CatalogService`.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET|POST|DELETE /api/books` — list, create, delete all.
//! - `GET|POST|DELETE /api/books/:id` — fetch, comment, delete one.
//! - `GET /health` — `{ "ok": true, "books": <count> }`.
//!
//! Missing fields and unknown ids are answered with `200 OK` and a
//! plain-text body (`missing title`, `missing comment`, `no book exists`);
//! existing clients match on that text rather than on the status.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use bookshelf::{http, CatalogService, InMemoryCatalog};
//!
//! let service = Arc::new(CatalogService::new(InMemoryCatalog::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(service.clone());
//!
//! // Or serve directly
//! http::serve(service, "0.0.0.0:3000").await?;
//! ```

mod books;
mod payload;

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::catalog::{CatalogService, CatalogStore};
use crate::error::CatalogError;

pub use payload::Payload;

/// Build an axum `Router` serving the catalog API from the given service.
pub fn router<S: CatalogStore + 'static>(service: Arc<CatalogService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<S>))
        .route(
            "/api/books",
            get(books::list::<S>)
                .post(books::create::<S>)
                .delete(books::delete_all::<S>),
        )
        .route(
            "/api/books/:id",
            get(books::get::<S>)
                .post(books::comment::<S>)
                .delete(books::delete::<S>),
        )
        .fallback(not_found)
        .with_state(service)
}

/// Serve the catalog over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: CatalogStore + 'static>(
    service: Arc<CatalogService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    serve_with_shutdown(service, listener, std::future::pending::<()>()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<S, F>(
    service: Arc<CatalogService<S>>,
    listener: TcpListener,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    S: CatalogStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(service);
    info!(addr = %listener.local_addr()?, "catalog listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("catalog stopped");
    Ok(())
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        if !self.is_contract_outcome() {
            error!(error = %self, "catalog request failed");
        }
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.to_string()).into_response()
    }
}

/// `GET /health` — returns `{ "ok": true, "books": <count> }`.
async fn health_handler<S: CatalogStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Result<impl IntoResponse, CatalogError> {
    let books = service.count()?;
    Ok(Json(json!({ "ok": true, "books": books })))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
