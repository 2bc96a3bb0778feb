//! Postboard Server
//!
//! HTTP API for text posts, backed by an in-memory store, with an SQLite
//! file-post store and an image hosting client prepared alongside.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{routing::get, Router};
use postboard_core::ports::PostStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use services::ImageKitClient;
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub db: Arc<Database>,
    pub images: Option<Arc<ImageKitClient>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/posts",
            get(handlers::posts::list)
                .post(handlers::posts::create)
                .delete(handlers::posts::delete),
        )
        .route("/posts/:id", get(handlers::posts::get))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::Value;
    use crate::storage::MemoryPostStore;
    use tempfile::TempDir;
    use tower::ServiceExt;

    /// Seeded post store plus a fresh database in a temp dir
    pub async fn test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let db = Database::connect(&url, 2).await.unwrap();
        db.create_tables().await.unwrap();

        let state = AppState {
            posts: Arc::new(MemoryPostStore::seeded()),
            db: Arc::new(db),
            images: None,
        };
        (state, dir)
    }

    pub async fn call(
        state: AppState,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = router(state)
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}
