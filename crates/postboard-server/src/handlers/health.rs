//! Health check

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// Confirms a database session can be checked out and used
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let mut session = state.db.session().await.map_err(|e| {
        tracing::warn!("Health check could not acquire a session: {:#}", e);
        ApiError::Unavailable("Database unavailable".to_string())
    })?;

    session.ping().await.map_err(|e| {
        tracing::warn!("Health check ping failed: {:#}", e);
        ApiError::Unavailable("Database unavailable".to_string())
    })?;

    Ok(Json(json!({ "status": "ok" })))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{call, test_state};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_health_ok() {
        let (state, _dir) = test_state().await;

        let (status, body) = call(state, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_health_unavailable_after_close() {
        let (state, _dir) = test_state().await;
        state.db.close().await;

        let (status, body) = call(state, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({"detail": "Database unavailable"}));
    }
}
