//! Core library for Notepane — a small master-detail note-taking application.
//!
//! The two primary types are [`NoteStore`], an observable in-memory
//! repository of notes plus the currently active selection, and
//! [`MasterDetailController`], which derives the layout to present
//! (two-pane on large landscape screens, single-pane otherwise) from the
//! store's state and the device's screen geometry, and routes user intents
//! back into store mutations.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    device::ScreenDimensions,
    error::{NotepaneError, Result},
    master_detail::{MasterDetailController, RenderMode, ViewState},
    note::Note,
    seed::sample_notes,
    store::{NoteStore, StoreEvent, StoreSnapshot},
};
