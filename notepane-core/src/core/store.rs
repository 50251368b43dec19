//! Observable in-memory repository of notes and the active-note selection.

use crate::{Note, NotepaneError, Result};
use log::debug;
use serde::Serialize;

/// The kind of state change a [`NoteStore`] notification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The note list changed: a note was appended, replaced in place, or removed.
    NotesChanged,
    /// The active-note selection changed.
    SelectionChanged,
}

/// A consistent post-mutation copy of the store state, handed to listeners.
///
/// Fields serialize in camelCase so the snapshot can cross an IPC boundary
/// to a rendering layer unchanged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    /// All notes, in store order.
    pub notes: Vec<Note>,
    /// ID of the note currently open for detail view/edit, if any.
    pub active_note_id: Option<String>,
}

type Listener = Box<dyn Fn(StoreEvent, &StoreSnapshot) + Send>;

/// In-memory repository of [`Note`]s plus the currently active selection.
///
/// The store owns all note data exclusively; collaborators mutate it only
/// through the operations below, each of which completes fully before
/// synchronously notifying every registered listener. Constructed once at
/// application startup, never as a module-load side effect, and shared
/// behind an `Arc<Mutex<_>>` for the lifetime of the process.
///
/// Invariant: `active_note_id`, when set, always names a note present in
/// `notes`. Removing the referenced note clears the selection in the same
/// step, so a dangling selection is never observable.
pub struct NoteStore {
    notes: Vec<Note>,
    active_note_id: Option<String>,
    listeners: Vec<Listener>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Creates an empty store with no selection.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            active_note_id: None,
            listeners: Vec::new(),
        }
    }

    /// Creates a store pre-populated with `notes`.
    ///
    /// Seeding goes through the upsert path, so a later duplicate ID replaces
    /// the earlier entry and the ID-uniqueness invariant holds from the start.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let mut store = Self::new();
        for note in notes {
            store.save_note(note);
        }
        store
    }

    /// Registers a listener invoked synchronously after every state change,
    /// with the event kind and a consistent post-mutation snapshot.
    pub fn subscribe(&mut self, listener: impl Fn(StoreEvent, &StoreSnapshot) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// All notes, in store order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// ID of the active note, if a selection is set.
    pub fn active_note_id(&self) -> Option<&str> {
        self.active_note_id.as_deref()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            notes: self.notes.clone(),
            active_note_id: self.active_note_id.clone(),
        }
    }

    /// Upserts `note` by ID.
    ///
    /// An unknown ID appends the note at the end of the list; a known ID
    /// replaces the existing entry in place, keeping its position. Always
    /// succeeds. Notifies listeners with [`StoreEvent::NotesChanged`].
    pub fn save_note(&mut self, note: Note) {
        debug!("save_note({})", note.id);
        match self.notes.iter().position(|n| n.id == note.id) {
            Some(idx) => self.notes[idx] = note,
            None => self.notes.push(note),
        }
        self.notify(StoreEvent::NotesChanged);
    }

    /// Removes the note with `note_id` and returns it.
    ///
    /// If the removed note was the active one, the selection is cleared in
    /// the same step, so listeners never observe a dangling selection.
    /// Notifies [`StoreEvent::NotesChanged`], then
    /// [`StoreEvent::SelectionChanged`] when the selection was cleared.
    ///
    /// # Errors
    ///
    /// Returns [`NotepaneError::NoteNotFound`] if no note has `note_id`;
    /// the store is left untouched.
    pub fn delete_note(&mut self, note_id: &str) -> Result<Note> {
        debug!("delete_note({note_id})");
        let idx = self
            .notes
            .iter()
            .position(|n| n.id == note_id)
            .ok_or_else(|| NotepaneError::NoteNotFound(note_id.to_string()))?;

        let removed = self.notes.remove(idx);
        let cleared = self.active_note_id.as_deref() == Some(note_id);
        if cleared {
            self.active_note_id = None;
        }
        self.notify(StoreEvent::NotesChanged);
        if cleared {
            self.notify(StoreEvent::SelectionChanged);
        }
        Ok(removed)
    }

    /// Resolves the active selection to its note.
    ///
    /// Returns `None` when no selection is set. A selection naming a missing
    /// note also resolves to `None` rather than failing, even though the
    /// store invariant keeps that case unreachable.
    pub fn active_note(&self) -> Option<&Note> {
        let id = self.active_note_id.as_deref()?;
        self.notes.iter().find(|n| n.id == id)
    }

    /// Marks `note` as the one open for detail view/edit.
    ///
    /// Membership is not validated; callers only pass notes already present
    /// in the store. Notifies [`StoreEvent::SelectionChanged`].
    pub fn set_active_note(&mut self, note: &Note) {
        self.active_note_id = Some(note.id.clone());
        self.notify(StoreEvent::SelectionChanged);
    }

    /// Clears the active selection. Idempotent: clearing an already-empty
    /// selection changes nothing and notifies no one.
    pub fn clear_active_note(&mut self) {
        if self.active_note_id.take().is_some() {
            self.notify(StoreEvent::SelectionChanged);
        }
    }

    fn notify(&self, event: StoreEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &self.listeners {
            listener(event, &snapshot);
        }
    }
}
