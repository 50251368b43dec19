//! Internal domain modules for the Notepane core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod device;
pub mod error;
pub mod master_detail;
pub mod note;
pub mod seed;
pub mod store;

#[doc(inline)]
pub use device::ScreenDimensions;
#[doc(inline)]
pub use error::{NotepaneError, Result};
#[doc(inline)]
pub use master_detail::{MasterDetailController, RenderMode, ViewState};
#[doc(inline)]
pub use note::Note;
#[doc(inline)]
pub use seed::sample_notes;
#[doc(inline)]
pub use store::{NoteStore, StoreEvent, StoreSnapshot};
