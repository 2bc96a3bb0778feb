//! Post handlers

use crate::error::{ApiError, ApiResult};
use crate::extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::AppState;
use axum::{extract::State, Json};
use postboard_core::ports::PostStore;
use postboard_core::{
    CreatedPost, DeletePost, DeletedPost, ListLimit, PostCreate, PostId, PostListing,
    PostResponse,
};
use serde::Deserialize;
use tracing::info;

const POST_NOT_FOUND: &str = "Post not found";
const DELETE_NOT_FOUND: &str = "Post not available to delete";

#[derive(Debug, Deserialize)]
pub struct ListParams {
    limit: Option<i64>,
}

pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> ApiResult<Json<PostListing>> {
    let limit = ListLimit::from_query(params.limit)
        .map_err(|e| ApiError::from_post_error(e, POST_NOT_FOUND))?;

    let listing = state
        .posts
        .list(limit)
        .await
        .map_err(|e| ApiError::from_post_error(e, POST_NOT_FOUND))?;

    Ok(Json(listing))
}

pub async fn get(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<PostId>,
) -> ApiResult<Json<PostResponse>> {
    let post = state
        .posts
        .get(id)
        .await
        .map_err(|e| ApiError::from_post_error(e, POST_NOT_FOUND))?;

    Ok(Json(post.into()))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PostCreate>,
) -> ApiResult<Json<CreatedPost>> {
    let (id, post) = state
        .posts
        .create(req.into())
        .await
        .map_err(|e| ApiError::from_post_error(e, POST_NOT_FOUND))?;

    info!("Created post {}", id);
    Ok(Json(CreatedPost::new(id, post)))
}

pub async fn delete(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<DeletePost>,
) -> ApiResult<Json<DeletedPost>> {
    let deleted = state
        .posts
        .delete(req.id)
        .await
        .map_err(|e| ApiError::from_post_error(e, DELETE_NOT_FOUND))?;

    info!("Deleted post {}", req.id);
    Ok(Json(deleted))
}
