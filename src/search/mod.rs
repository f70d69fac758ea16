//! Incremental search.
//!
//! A [`SearchSession`] lives only while the search prompt is open. It
//! remembers where the cursor and viewport were when the prompt opened, the
//! row of the last match and the direction to move in. Every keystroke in
//! the prompt calls [`SearchSession::find`] with the current query.

use crate::editor::{Cursor, EditorBuffer};

/// Direction in which the next match is looked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// Cursor and viewport state to return to when a search is canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestorePoint {
    pub cursor: Cursor,
    pub row_offset: usize,
    pub col_offset: usize,
}

/// A match location as a raw (not rendered) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    restore: RestorePoint,
    last_match: Option<usize>,
    direction: SearchDirection,
}

impl SearchSession {
    pub const fn new(restore: RestorePoint) -> Self {
        Self {
            restore,
            last_match: None,
            direction: SearchDirection::Forward,
        }
    }

    pub const fn restore_point(&self) -> RestorePoint {
        self.restore
    }

    pub const fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub const fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// Forget the last match. Called whenever the query text changes.
    pub const fn reset(&mut self) {
        self.last_match = None;
        self.direction = SearchDirection::Forward;
    }

    pub const fn set_direction(&mut self, direction: SearchDirection) {
        self.direction = direction;
    }

    /// Find the next row whose rendered text contains `query`.
    ///
    /// With no previous match the scan starts at `from_row` itself; after a
    /// match it starts one row past the match in the current direction. The
    /// scan wraps around and visits each row at most once. An empty query
    /// never matches.
    pub fn find(&mut self, buffer: &EditorBuffer, query: &[u8], from_row: usize) -> Option<Match> {
        let len = buffer.line_count();
        if len == 0 || query.is_empty() {
            return None;
        }
        let mut row = match self.last_match {
            Some(last) => self.step(last, len),
            None => from_row.min(len - 1),
        };
        for _ in 0..len {
            if let Some(found) = buffer.row(row).and_then(|r| {
                find_bytes(r.render(), query).map(|rx| Match {
                    row,
                    col: r.rx_to_cx(rx),
                })
            }) {
                self.last_match = Some(row);
                tracing::debug!(row = found.row, col = found.col, "search match");
                return Some(found);
            }
            row = self.step(row, len);
        }
        None
    }

    const fn step(&self, row: usize, len: usize) -> usize {
        match self.direction {
            SearchDirection::Forward if row + 1 >= len => 0,
            SearchDirection::Forward => row + 1,
            SearchDirection::Backward if row == 0 => len - 1,
            SearchDirection::Backward => row - 1,
        }
    }
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
