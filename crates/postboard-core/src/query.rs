//! Listing query normalization

use crate::{PostError, Result};

/// How many posts a listing should return.
///
/// An absent or zero limit means "everything" and yields the full mapping.
/// Negative limits are rejected rather than interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLimit {
    All,
    First(usize),
}

impl ListLimit {
    pub fn from_query(raw: Option<i64>) -> Result<Self> {
        match raw {
            None | Some(0) => Ok(ListLimit::All),
            Some(n) if n < 0 => Err(PostError::Validation(format!(
                "limit must be a non-negative integer, got {}",
                n
            ))),
            Some(n) => Ok(ListLimit::First(usize::try_from(n).unwrap_or(usize::MAX))),
        }
    }
}
