//! Optional bootstrap data for demonstration builds.

use crate::Note;

/// Returns the small fixed set of notes a demonstration build starts with.
///
/// Purely optional: callers pass the result to
/// [`NoteStore::with_notes`](crate::NoteStore::with_notes) explicitly at
/// application startup, or skip it for an empty store.
pub fn sample_notes() -> Vec<Note> {
    [
        ("First Note", "Welcome to Notepane."),
        ("Second Note", "Tap a note to open it."),
        ("Third Note", "Edits are saved as you type."),
        ("Fourth Note", "Swipe a row to delete it."),
    ]
    .into_iter()
    .map(|(title, content)| Note::new(title, content))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoteStore;
    use std::collections::HashSet;

    #[test]
    fn test_sample_notes_have_unique_ids() {
        let notes = sample_notes();
        let ids: HashSet<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), notes.len());
    }

    #[test]
    fn test_sample_notes_seed_a_store() {
        let store = NoteStore::with_notes(sample_notes());
        assert_eq!(store.len(), 4);
        assert_eq!(store.active_note_id(), None);
    }
}
