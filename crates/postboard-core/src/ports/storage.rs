//! Storage traits for persistence

use crate::{DeletedPost, ListLimit, Post, PostId, PostListing, Result};
use async_trait::async_trait;

/// Post store
///
/// Backends must assign identifiers that are unique and strictly increasing,
/// and must apply each mutation atomically.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts in insertion order, or the first `n` when limited
    async fn list(&self, limit: ListLimit) -> Result<PostListing>;

    /// Fails with `PostError::NotFound` for unknown ids
    async fn get(&self, id: PostId) -> Result<Post>;

    /// Stores the post under the next identifier and returns that identifier
    async fn create(&self, post: Post) -> Result<(PostId, Post)>;

    /// Removes the post and returns it with a confirmation message
    async fn delete(&self, id: PostId) -> Result<DeletedPost>;
}
