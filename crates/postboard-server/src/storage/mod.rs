//! Storage layer
//!
//! Text posts live in process memory behind the `PostStore` port.
//! File posts live in SQLite and are reached through per-unit-of-work sessions.

pub mod db;
pub mod memory;

pub use db::{Database, DbSession};
pub use memory::MemoryPostStore;
