//! Postboard Core Library
//!
//! Error taxonomy and store ports shared by every post store backend.

// Re-export pure types from postboard-types
pub use postboard_types::*;

pub mod error;
pub mod ports;
pub mod query;

pub use error::{PostError, Result};
pub use query::ListLimit;
