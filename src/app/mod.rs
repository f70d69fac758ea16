//! Editor session state and main event loop.
//!
//! This module follows The Elm Architecture (TEA):
//! - [`Model`]: The complete session state
//! - [`Message`]: All possible actions
//! - [`update`]: State transitions for one message
//! - [`App::run`]: Main loop: render, read a key, dispatch

mod effects;
mod event_loop;
mod input;
mod model;
mod prompt;
mod update;

pub use input::message_for_key;
pub use model::{DEFAULT_QUIT_TIMES, MESSAGE_TIMEOUT, Model};
pub use prompt::{Prompt, PromptKind};
pub use update::{Message, update};

use std::path::PathBuf;

/// Shown in the message bar when the editor starts.
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    quit_times: u8,
}

impl App {
    /// Create an editor for the given file, or an unnamed empty buffer.
    pub const fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            quit_times: DEFAULT_QUIT_TIMES,
        }
    }

    /// Set how many consecutive Ctrl-Q presses discard unsaved changes.
    #[must_use]
    pub const fn with_quit_times(mut self, times: u8) -> Self {
        self.quit_times = times;
        self
    }
}
