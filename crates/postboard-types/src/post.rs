//! Text post types

use crate::PostId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A stored text post. The identifier is the store key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Create request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
}

impl From<PostCreate> for Post {
    fn from(req: PostCreate) -> Self {
        Post {
            title: req.title,
            content: req.content,
        }
    }
}

/// Delete request body. `title` is accepted but never consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePost {
    pub id: PostId,
    #[serde(default)]
    pub title: Option<String>,
}

/// Public shape of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub title: String,
    pub content: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        PostResponse {
            title: post.title,
            content: post.content,
        }
    }
}

/// Returned by create: the public shape plus the assigned identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPost {
    pub id: PostId,
    pub title: String,
    pub content: String,
}

impl CreatedPost {
    pub fn new(id: PostId, post: Post) -> Self {
        Self {
            id,
            title: post.title,
            content: post.content,
        }
    }
}

/// Returned by delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedPost {
    pub message: String,
    pub post: PostResponse,
}

impl DeletedPost {
    pub fn new(id: PostId, post: Post) -> Self {
        Self {
            message: format!("Post with id {} deleted successfully", id),
            post: post.into(),
        }
    }
}

/// Listing result.
///
/// Without a limit the whole `id -> post` mapping is returned; with one, an
/// ordered array of the first `limit` posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostListing {
    All(BTreeMap<PostId, PostResponse>),
    Limited(Vec<PostResponse>),
}

impl PostListing {
    pub fn len(&self) -> usize {
        match self {
            PostListing::All(map) => map.len(),
            PostListing::Limited(posts) => posts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
