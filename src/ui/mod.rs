//! Screen output.
//!
//! - [`viewport`]: Scroll offsets that keep the cursor on screen
//! - [`render`]: Builds one frame of text rows, status bar and message bar

pub mod viewport;

mod render;
mod status;

pub use render::{WELCOME, render};
