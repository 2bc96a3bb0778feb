//! File-backed post records (persisted model)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post referencing an uploaded file. `id` and `created_at` are set once
/// at insert and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePost {
    pub id: Uuid,
    pub caption: Option<String>,
    pub url: String,
    pub file_type: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; identity and timestamp are assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFilePost {
    #[serde(default)]
    pub caption: Option<String>,
    pub url: String,
    pub file_type: String,
    pub file_name: String,
}

impl NewFilePost {
    /// Stamp a fresh identifier and creation time
    pub fn into_record(self) -> FilePost {
        FilePost {
            id: Uuid::new_v4(),
            caption: self.caption,
            url: self.url,
            file_type: self.file_type,
            file_name: self.file_name,
            created_at: Utc::now(),
        }
    }
}
