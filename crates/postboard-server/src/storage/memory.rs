//! In-memory post store
//!
//! Process-lifetime only: contents are rebuilt from the seed list on every
//! start and lost on shutdown.

use async_trait::async_trait;
use postboard_core::ports::PostStore;
use postboard_core::{DeletedPost, ListLimit, Post, PostError, PostId, PostListing, Result};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

const SEED_POSTS: [(&str, &str); 10] = [
    ("New post", "Cool test post about FastAPI."),
    (
        "Learning Python",
        "Today I learned about dictionaries and functions.",
    ),
    (
        "FastAPI Tips",
        "FastAPI makes building APIs super fast and clean!",
    ),
    (
        "My First API",
        "Just deployed my first API using Uvicorn and FastAPI.",
    ),
    (
        "Async in Python",
        "Understanding async/await can really improve performance.",
    ),
    (
        "SQLAlchemy Intro",
        "ORMs make database interactions much easier.",
    ),
    (
        "Docker for Devs",
        "Containerizing apps simplifies deployment.",
    ),
    (
        "Frontend vs Backend",
        "Exploring how APIs power modern web apps.",
    ),
    (
        "APIs Everywhere",
        "APIs connect services across the internet — they’re the glue of modern apps.",
    ),
    (
        "Deploying to Render",
        "Quick guide: how to deploy a FastAPI app for free.",
    ),
];

/// Posts keyed by integer id.
///
/// New ids are always `max + 1`, so ascending key order is insertion order.
/// Id assignment and insertion happen under the same write lock.
pub struct MemoryPostStore {
    posts: RwLock<BTreeMap<PostId, Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
        }
    }

    /// Store pre-filled with the ten starter posts (ids 1..=10)
    pub fn seeded() -> Self {
        let posts = SEED_POSTS
            .iter()
            .zip(1..)
            .map(|((title, content), id)| (id, Post::new(*title, *content)))
            .collect::<BTreeMap<_, _>>();
        info!("Seeded in-memory store with {} posts", posts.len());

        Self {
            posts: RwLock::new(posts),
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list(&self, limit: ListLimit) -> Result<PostListing> {
        let posts = self.posts.read().await;

        let listing = match limit {
            ListLimit::All => PostListing::All(
                posts
                    .iter()
                    .map(|(id, post)| (*id, post.clone().into()))
                    .collect(),
            ),
            ListLimit::First(n) => PostListing::Limited(
                posts.values().take(n).cloned().map(Into::into).collect(),
            ),
        };

        Ok(listing)
    }

    async fn get(&self, id: PostId) -> Result<Post> {
        self.posts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(PostError::NotFound(id))
    }

    async fn create(&self, post: Post) -> Result<(PostId, Post)> {
        let mut posts = self.posts.write().await;

        let id = posts.keys().next_back().copied().unwrap_or(0) + 1;
        posts.insert(id, post.clone());
        debug!("Created post {} ({:?})", id, post.title);

        Ok((id, post))
    }

    async fn delete(&self, id: PostId) -> Result<DeletedPost> {
        let removed = self.posts.write().await.remove(&id);

        match removed {
            Some(post) => {
                debug!("Deleted post {}", id);
                Ok(DeletedPost::new(id, post))
            }
            None => Err(PostError::NotFound(id)),
        }
    }
}
