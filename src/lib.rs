// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # Femto
//!
//! A small screen-oriented terminal text editor.
//!
//! Femto edits one file at a time in a raw-mode terminal with:
//! - Tab-aware rendering and horizontal/vertical scrolling
//! - Incremental search with cancel-and-restore
//! - Save, save-as and confirmation before discarding changes
//!
//! ## Architecture
//!
//! Femto uses The Elm Architecture (TEA) pattern:
//! - **Model**: Editor session state
//! - **Message**: Actions decoded from keys
//! - **Update**: State transitions
//! - **View**: One frame of terminal output per change
//!
//! ## Modules
//!
//! - [`app`]: Main loop, session state and dispatch
//! - [`editor`]: Row buffer, cursor and file I/O
//! - [`input`]: Key decoding from raw terminal bytes
//! - [`search`]: Incremental search
//! - [`ui`]: Viewport and frame rendering
//! - [`terminal`]: Raw mode, window size and output
//! - [`config`]: Defaults flag file

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod search;
pub mod terminal;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Cursor, EditorBuffer};
    pub use crate::input::{Key, KeyDecoder};
    pub use crate::ui::viewport::Viewport;
}
