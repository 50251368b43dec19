//! Error types for the Notepane core library.

use thiserror::Error;

/// All errors that can occur within the Notepane core library.
#[derive(Debug, Error)]
pub enum NotepaneError {
    /// A note ID was requested that does not exist in the store.
    #[error("Note not found: {0}")]
    NoteNotFound(String),
}

/// Convenience alias that pins the error type to [`NotepaneError`].
pub type Result<T> = std::result::Result<T, NotepaneError>;

impl NotepaneError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_not_found_carries_id() {
        let e = NotepaneError::NoteNotFound("note-42".to_string());
        assert!(e.to_string().contains("note-42"));
    }

    #[test]
    fn test_user_message_does_not_leak_id() {
        let e = NotepaneError::NoteNotFound("note-42".to_string());
        assert!(!e.user_message().contains("note-42"));
    }
}
