//! Row-based text buffer.
//!
//! Each [`Row`] keeps its raw bytes alongside a tab-expanded rendered form.
//! [`EditorBuffer`] orders the rows, owns the cursor and tracks whether the
//! text changed since it was loaded or saved.

mod buffer;
mod file;
mod row;

pub use buffer::{Cursor, Direction, EditorBuffer};
pub use file::{load_lines, persist, split_lines};
pub use row::{Row, TAB_STOP};
