use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::editor::{Direction, EditorBuffer};
use crate::search::{RestorePoint, SearchSession};
use crate::ui::viewport::Viewport;

use super::prompt::Prompt;

/// How long a status message stays in the message bar.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Quit presses needed to discard unsaved changes, unless configured.
pub const DEFAULT_QUIT_TIMES: u8 = 3;

/// Rows reserved below the text area for the status and message bars.
const BAR_ROWS: u16 = 2;

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    set_at: Instant,
}

/// The complete editor session state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone)]
pub struct Model {
    pub buffer: EditorBuffer,
    pub viewport: Viewport,
    pub file_path: Option<PathBuf>,
    /// Open save-as or search prompt, if any.
    pub prompt: Option<Prompt>,
    pub should_quit: bool,
    quit_times: u8,
    quit_remaining: u8,
    status: Option<StatusMessage>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(EditorBuffer::empty(), None, (0, 0))
    }
}

impl Model {
    /// Create a session for `buffer` on a terminal of `size` (columns, rows).
    pub const fn new(buffer: EditorBuffer, file_path: Option<PathBuf>, size: (u16, u16)) -> Self {
        Self {
            buffer,
            viewport: Viewport::new(size.0, size.1.saturating_sub(BAR_ROWS)),
            file_path,
            prompt: None,
            should_quit: false,
            quit_times: DEFAULT_QUIT_TIMES,
            quit_remaining: DEFAULT_QUIT_TIMES,
            status: None,
        }
    }

    /// Set how many consecutive quit presses discard unsaved changes.
    #[must_use]
    pub fn with_quit_times(mut self, times: u8) -> Self {
        self.quit_times = times.max(1);
        self.quit_remaining = self.quit_times;
        self
    }

    pub const fn quit_remaining(&self) -> u8 {
        self.quit_remaining
    }

    pub(super) const fn rearm_quit(&mut self) {
        self.quit_remaining = self.quit_times;
    }

    /// Count one quit press against a modified buffer; returns the presses
    /// still needed.
    pub(super) const fn consume_quit(&mut self) -> u8 {
        self.quit_remaining = self.quit_remaining.saturating_sub(1);
        self.quit_remaining
    }

    /// Apply a new terminal size (columns, rows).
    pub const fn resize(&mut self, width: u16, height: u16) {
        self.viewport
            .resize(width, height.saturating_sub(BAR_ROWS));
    }

    /// Terminal size the viewport was laid out for.
    pub const fn terminal_size(&self) -> (u16, u16) {
        (
            self.viewport.width(),
            self.viewport.height().saturating_add(BAR_ROWS),
        )
    }

    /// Scroll the viewport so the cursor is visible.
    pub fn scroll(&mut self) {
        let row = self.buffer.cursor().row;
        let render_col = self.buffer.render_col();
        self.viewport.scroll(row, render_col);
    }

    /// Name shown in the status bar.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .map_or_else(|| "[No Name]".to_string(), |p| p.display().to_string())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn show_status(&mut self, message: impl Into<String>) {
        self.show_status_at(message, Instant::now());
    }

    pub fn show_status_at(&mut self, message: impl Into<String>, now: Instant) {
        self.status = Some(StatusMessage {
            text: message.into(),
            set_at: now,
        });
    }

    /// Drop the status message once it is older than [`MESSAGE_TIMEOUT`].
    ///
    /// Returns `true` if a message was cleared.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        if self
            .status
            .as_ref()
            .is_some_and(|s| now.saturating_duration_since(s.set_at) >= MESSAGE_TIMEOUT)
        {
            self.status = None;
            return true;
        }
        false
    }

    /// The status message, if it is still within its display window.
    pub fn active_status(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|s| now.saturating_duration_since(s.set_at) < MESSAGE_TIMEOUT)
            .map(|s| s.text.as_str())
    }

    /// Open the incremental search prompt, remembering where to return on
    /// cancel.
    pub(super) fn open_search(&mut self) {
        let restore = RestorePoint {
            cursor: self.buffer.cursor(),
            row_offset: self.viewport.row_offset(),
            col_offset: self.viewport.col_offset(),
        };
        self.prompt = Some(Prompt::search(SearchSession::new(restore)));
    }

    /// Move the cursor by one screen, starting from the top or bottom edge
    /// of the current viewport.
    pub(super) fn page(&mut self, direction: Direction) {
        let height = self.viewport.height() as usize;
        let col = self.buffer.cursor().col;
        let row = match direction {
            Direction::Up => self.viewport.row_offset(),
            _ => (self.viewport.row_offset() + height)
                .saturating_sub(1)
                .min(self.buffer.line_count()),
        };
        self.buffer.move_to(row, col);
        for _ in 0..height {
            self.buffer.move_cursor(direction);
        }
    }
}
