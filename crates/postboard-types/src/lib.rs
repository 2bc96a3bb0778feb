//! Postboard Types - Pure transfer objects
//!
//! Request, response and record shapes shared by the store and the HTTP layer.
//! Nothing here touches a runtime or a database driver.

pub mod file_post;
pub mod post;
pub mod user;

pub use file_post::*;
pub use post::*;
pub use user::*;

/// Integer identifier of an in-memory post
pub type PostId = i64;
