use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A titled text record with a unique ID and create/update timestamps.
///
/// Timestamps are Unix seconds. `created_at` is set once at construction.
/// `updated_at` is refreshed by callers on every content-affecting edit;
/// the store itself never stamps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    /// Creates a new note with a fresh random ID and both timestamps set to now.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
