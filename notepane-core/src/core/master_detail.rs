//! Master-detail layout derivation and user-intent routing.
//!
//! [`MasterDetailController`] decides which layout to present (the
//! two-pane list-plus-editor used on large landscape screens, or one of
//! the single-pane states used on phones) as a pure function of the
//! current [`ScreenDimensions`], an optional two-pane override, and the
//! shared [`NoteStore`] state. Nothing about the layout is stored; it is
//! re-derived on every render.
//!
//! User intents flow the other way: select, edit, delete, and
//! clear-selection calls are routed into store mutations, and observers
//! of the store re-derive their view-state from the notifications.

use crate::{Note, NoteStore, Result, ScreenDimensions};
use chrono::Utc;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// The three mutually exclusive layout states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderMode {
    /// List on the left, detail editor (or an empty placeholder) on the right.
    TwoPane,
    /// Full-screen note list.
    OnePaneList,
    /// Full-screen detail editor for the active note, with a back action.
    OnePaneDetail,
}

/// Everything the rendering layer needs to paint one frame.
///
/// Serializes with a `"mode"` tag and camelCase fields so it can cross an
/// IPC boundary to a rendering layer unchanged.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all_fields = "camelCase")]
pub enum ViewState {
    /// Both panes visible; the right pane is an empty placeholder until a
    /// note is selected.
    TwoPane {
        notes: Vec<Note>,
        active_note: Option<Note>,
    },
    /// Only the note list.
    OnePaneList { notes: Vec<Note> },
    /// Only the detail editor.
    OnePaneDetail { note: Note },
}

impl ViewState {
    /// The layout state this view-state paints.
    #[must_use]
    pub fn mode(&self) -> RenderMode {
        match self {
            Self::TwoPane { .. } => RenderMode::TwoPane,
            Self::OnePaneList { .. } => RenderMode::OnePaneList,
            Self::OnePaneDetail { .. } => RenderMode::OnePaneDetail,
        }
    }
}

/// Routes user intents into the [`NoteStore`] and derives the layout to
/// present from store state and device geometry.
///
/// The store handle and initial screen geometry are passed at construction;
/// there is no ambient lookup. The platform layer feeds orientation changes
/// through [`set_screen_dimensions`](Self::set_screen_dimensions), and the
/// rendering layer requests a [`ViewState`] whenever a store notification
/// or geometry change invalidates the last frame.
pub struct MasterDetailController {
    store: Arc<Mutex<NoteStore>>,
    screen: ScreenDimensions,
    force_two_pane: bool,
}

impl MasterDetailController {
    pub fn new(store: Arc<Mutex<NoteStore>>, screen: ScreenDimensions) -> Self {
        Self {
            store,
            screen,
            force_two_pane: false,
        }
    }

    /// Returns a clone of the shared store handle, for collaborators that
    /// subscribe to store notifications directly.
    pub fn store(&self) -> Arc<Mutex<NoteStore>> {
        Arc::clone(&self.store)
    }

    /// Current screen geometry.
    pub fn screen(&self) -> ScreenDimensions {
        self.screen
    }

    /// Replaces the screen geometry. Called by the platform layer on every
    /// orientation change.
    pub fn set_screen_dimensions(&mut self, screen: ScreenDimensions) {
        self.screen = screen;
    }

    /// Forces two-pane mode regardless of device geometry.
    pub fn set_two_pane_override(&mut self, force: bool) {
        self.force_two_pane = force;
    }

    /// Returns true when both panes should be shown: either the override is
    /// set, or the device is a tablet in landscape orientation.
    pub fn use_two_pane(&self) -> bool {
        self.force_two_pane || (self.screen.is_tablet() && self.screen.is_landscape())
    }

    /// Derives the current layout state.
    ///
    /// Outside two-pane mode the selection decides between list and detail.
    /// The selection is resolved against the note list first, so a dangling
    /// selection (unreachable while the store invariant holds) falls back
    /// to the list rather than a detail view with nothing to show.
    pub fn render_mode(&self) -> RenderMode {
        if self.use_two_pane() {
            return RenderMode::TwoPane;
        }
        let store = self.store.lock().expect("Mutex poisoned");
        if store.active_note().is_some() {
            RenderMode::OnePaneDetail
        } else {
            RenderMode::OnePaneList
        }
    }

    /// Derives the full view-state for one frame: the layout state plus the
    /// note data each visible pane renders.
    pub fn view_state(&self) -> ViewState {
        let store = self.store.lock().expect("Mutex poisoned");
        let active = store.active_note().cloned();
        if self.use_two_pane() {
            ViewState::TwoPane {
                notes: store.notes().to_vec(),
                active_note: active,
            }
        } else if let Some(note) = active {
            ViewState::OnePaneDetail { note }
        } else {
            ViewState::OnePaneList {
                notes: store.notes().to_vec(),
            }
        }
    }

    /// A list item was tapped: open `note` for detail view/edit.
    pub fn select_note(&self, note: &Note) {
        self.store.lock().expect("Mutex poisoned").set_active_note(note);
    }

    /// Back or "Done" was tapped: close the detail editor. In two-pane mode
    /// this only empties the right pane; both panes stay visible.
    pub fn clear_selection(&self) {
        self.store.lock().expect("Mutex poisoned").clear_active_note();
    }

    /// Creates a fresh note and saves it. The new note is appended at the
    /// end of the list and does not change the selection.
    pub fn create_note(&self, title: impl Into<String>, content: impl Into<String>) -> Note {
        let note = Note::new(title, content);
        self.store
            .lock()
            .expect("Mutex poisoned")
            .save_note(note.clone());
        note
    }

    /// Deletes `note` from the store and returns it.
    ///
    /// If `note` was the active one the store clears the selection in the
    /// same step, which outside two-pane mode moves the layout from detail
    /// back to the list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NotepaneError::NoteNotFound`] if the note is no
    /// longer present; the rendering layer owns user-visible handling.
    pub fn delete_note(&self, note: &Note) -> Result<Note> {
        self.store.lock().expect("Mutex poisoned").delete_note(&note.id)
    }

    /// The title field was edited: save a copy of `note` with the new title
    /// and a refreshed `updated_at`.
    pub fn edit_title(&self, note: &Note, title: &str) {
        let mut updated = note.clone();
        updated.title = title.to_string();
        updated.updated_at = Utc::now().timestamp();
        self.store.lock().expect("Mutex poisoned").save_note(updated);
    }

    /// The content field was edited: save a copy of `note` with the new
    /// content and a refreshed `updated_at`.
    pub fn edit_content(&self, note: &Note, content: &str) {
        let mut updated = note.clone();
        updated.content = content.to_string();
        updated.updated_at = Utc::now().timestamp();
        self.store.lock().expect("Mutex poisoned").save_note(updated);
    }
}
