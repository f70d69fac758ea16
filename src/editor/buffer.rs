use super::row::Row;

/// Cursor position in the editor buffer.
///
/// `row` may equal the buffer's line count: that is the virtual line past
/// the end, where typing starts a new row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based byte index into the row's raw content.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// An ordered list of rows plus the cursor that edits them.
///
/// Row-level operations take explicit indices and ignore anything out of
/// range. Cursor-level operations (`insert_char`, `delete_back`, ...) are the
/// editing commands and keep the cursor clamped to valid positions.
#[derive(Debug, Clone, Default)]
pub struct EditorBuffer {
    rows: Vec<Row>,
    cursor: Cursor,
    dirty: bool,
}

impl EditorBuffer {
    /// Create an empty buffer with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a clean buffer from already-split lines.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            rows: lines.into_iter().map(Row::new).collect(),
            cursor: Cursor::default(),
            dirty: false,
        }
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Number of rows.
    pub const fn line_count(&self) -> usize {
        self.rows.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Raw length of a row, 0 for the virtual past-end row.
    pub fn line_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Row::len)
    }

    /// Rendered column of the cursor.
    pub fn render_col(&self) -> usize {
        self.rows
            .get(self.cursor.row)
            .map_or(0, |row| row.cx_to_rx(self.cursor.col))
    }

    /// Serialize every row followed by a newline.
    ///
    /// The byte length of the saved file is the length of the returned vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.chars());
            out.push(b'\n');
        }
        out
    }

    // --- Row-level operations ---

    /// Insert a row at `at` (`0..=line_count`). Larger indices are ignored.
    pub fn insert_row(&mut self, at: usize, content: impl Into<Vec<u8>>) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(content));
        self.dirty = true;
    }

    /// Remove the row at `at`. Out-of-range indices are ignored.
    pub fn delete_row(&mut self, at: usize) -> Option<Row> {
        if at >= self.rows.len() {
            return None;
        }
        self.dirty = true;
        Some(self.rows.remove(at))
    }

    /// Insert a byte into row `row` at `col` (clamped to the row length).
    pub fn insert_char_at(&mut self, row: usize, col: usize, byte: u8) {
        if let Some(r) = self.rows.get_mut(row) {
            r.insert(col, byte);
            self.dirty = true;
        }
    }

    /// Delete the byte at `col` in row `row`.
    pub fn delete_char_at(&mut self, row: usize, col: usize) -> Option<u8> {
        let removed = self.rows.get_mut(row)?.remove(col)?;
        self.dirty = true;
        Some(removed)
    }

    /// Append bytes to the end of row `row`.
    pub fn append_to_row(&mut self, row: usize, bytes: &[u8]) {
        if let Some(r) = self.rows.get_mut(row) {
            r.append(bytes);
            self.dirty = true;
        }
    }

    // --- Editing at the cursor ---

    /// Insert a byte at the cursor, creating a row first when the cursor is
    /// on the virtual past-end row.
    pub fn insert_char(&mut self, byte: u8) {
        if self.cursor.row == self.rows.len() {
            self.insert_row(self.rows.len(), Vec::new());
        }
        self.insert_char_at(self.cursor.row, self.cursor.col, byte);
        self.cursor.col += 1;
    }

    /// Split the current row at the cursor (Enter key).
    pub fn insert_newline(&mut self) {
        if self.cursor.col == 0 {
            self.insert_row(self.cursor.row, Vec::new());
        } else if let Some(row) = self.rows.get_mut(self.cursor.row) {
            let tail = row.split_off(self.cursor.col);
            self.insert_row(self.cursor.row + 1, tail);
        }
        self.cursor.row += 1;
        self.cursor.col = 0;
    }

    /// Delete the byte before the cursor (Backspace), joining with the
    /// previous row at column 0.
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        let Cursor { row, col } = self.cursor;
        if row >= self.rows.len() || (row == 0 && col == 0) {
            return false;
        }
        if col > 0 {
            self.delete_char_at(row, col - 1);
            self.cursor.col -= 1;
        } else {
            self.cursor.col = self.line_len(row - 1);
            if let Some(removed) = self.delete_row(row) {
                self.append_to_row(row - 1, removed.chars());
            }
            self.cursor.row -= 1;
        }
        true
    }

    /// Delete the byte under the cursor (Delete key), joining the next row
    /// at the end of a row. The cursor does not move.
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let Cursor { row, col } = self.cursor;
        if row >= self.rows.len() {
            return false;
        }
        if col < self.line_len(row) {
            return self.delete_char_at(row, col).is_some();
        }
        match self.delete_row(row + 1) {
            Some(next) => {
                self.append_to_row(row, next.chars());
                true
            }
            None => false,
        }
    }

    // --- Cursor movement ---

    /// Move the cursor one step in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.cursor.row = self.cursor.row.saturating_sub(1),
            Direction::Down => {
                if self.cursor.row < self.rows.len() {
                    self.cursor.row += 1;
                }
            }
        }
        self.clamp_col();
    }

    /// Move cursor to the beginning of the row (Home).
    pub const fn move_home(&mut self) {
        self.cursor.col = 0;
    }

    /// Move cursor to the end of the row (End).
    pub fn move_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.row);
    }

    /// Move cursor to a specific row and column, clamped to the buffer.
    /// The virtual past-end row is a valid target.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cursor.row = row.min(self.rows.len());
        self.cursor.col = col;
        self.clamp_col();
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.line_len(self.cursor.row);
        }
    }

    fn move_right(&mut self) {
        let Some(row) = self.rows.get(self.cursor.row) else {
            return;
        };
        if self.cursor.col < row.len() {
            self.cursor.col += 1;
        } else {
            self.cursor.row += 1;
            self.cursor.col = 0;
        }
    }

    fn clamp_col(&mut self) {
        self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lines(buf: &EditorBuffer) -> Vec<String> {
        buf.rows()
            .iter()
            .map(|r| String::from_utf8_lossy(r.chars()).into_owned())
            .collect()
    }

    // --- Construction and basic queries ---

    #[test]
    fn test_empty_buffer_has_no_rows() {
        let buf = EditorBuffer::empty();
        assert_eq!(buf.line_count(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.line_len(0), 0);
    }

    #[test]
    fn test_from_lines_is_clean() {
        let buf = EditorBuffer::from_lines(["hello", "world"]);
        assert_eq!(lines(&buf), ["hello", "world"]);
        assert!(!buf.is_dirty());
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_to_bytes_terminates_every_row() {
        let buf = EditorBuffer::from_lines(["a", "", "bc"]);
        assert_eq!(buf.to_bytes(), b"a\n\nbc\n");
        assert!(EditorBuffer::empty().to_bytes().is_empty());
    }

    // --- Row-level operations ---

    #[test]
    fn test_insert_row_marks_dirty() {
        let mut buf = EditorBuffer::from_lines(["b"]);
        buf.insert_row(0, "a");
        buf.insert_row(2, "c");
        assert_eq!(lines(&buf), ["a", "b", "c"]);
        assert!(buf.is_dirty());
    }

    #[test]
    fn test_insert_row_past_end_is_ignored() {
        let mut buf = EditorBuffer::from_lines(["a"]);
        buf.insert_row(5, "x");
        assert_eq!(lines(&buf), ["a"]);
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_delete_row_out_of_range_is_ignored() {
        let mut buf = EditorBuffer::from_lines(["a"]);
        assert!(buf.delete_row(1).is_none());
        assert!(!buf.is_dirty());
        assert_eq!(buf.delete_row(0).map(|r| r.chars().to_vec()), Some(b"a".to_vec()));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_append_to_row() {
        let mut buf = EditorBuffer::from_lines(["ab"]);
        buf.append_to_row(0, b"\tc");
        assert_eq!(buf.row(0).unwrap().render(), b"ab      c");
        assert!(buf.is_dirty());
    }

    // --- Character insertion ---

    #[test]
    fn test_insert_char_on_virtual_row_creates_row() {
        let mut buf = EditorBuffer::empty();
        buf.insert_char(b'x');
        assert_eq!(lines(&buf), ["x"]);
        assert_eq!(buf.cursor(), Cursor::at(0, 1));
        assert!(buf.is_dirty());
    }

    #[test]
    fn test_insert_char_in_middle() {
        let mut buf = EditorBuffer::from_lines(["hllo"]);
        buf.move_cursor(Direction::Right);
        buf.insert_char(b'e');
        assert_eq!(lines(&buf), ["hello"]);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_insert_char_after_last_row() {
        let mut buf = EditorBuffer::from_lines(["a"]);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
        buf.insert_char(b'b');
        assert_eq!(lines(&buf), ["a", "b"]);
    }

    // --- Newline ---

    #[test]
    fn test_newline_at_start_inserts_row_above() {
        let mut buf = EditorBuffer::from_lines(["hello"]);
        buf.insert_newline();
        assert_eq!(lines(&buf), ["", "hello"]);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_newline_in_middle_splits() {
        let mut buf = EditorBuffer::from_lines(["hello world"]);
        buf.move_to(0, 5);
        buf.insert_newline();
        assert_eq!(lines(&buf), ["hello", " world"]);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_newline_at_end() {
        let mut buf = EditorBuffer::from_lines(["hello"]);
        buf.move_end();
        buf.insert_newline();
        assert_eq!(lines(&buf), ["hello", ""]);
    }

    #[test]
    fn test_newline_on_virtual_row_appends_row() {
        let mut buf = EditorBuffer::from_lines(["a"]);
        buf.move_to(1, 0);
        buf.insert_newline();
        assert_eq!(lines(&buf), ["a", ""]);
        assert_eq!(buf.cursor(), Cursor::at(2, 0));
    }

    // --- Backspace ---

    #[test]
    fn test_delete_back_at_origin_is_noop() {
        let mut buf = EditorBuffer::from_lines(["hello"]);
        assert!(!buf.delete_back());
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_delete_back_on_virtual_row_is_noop() {
        let mut buf = EditorBuffer::from_lines(["hello"]);
        buf.move_to(1, 0);
        assert!(!buf.delete_back());
        assert_eq!(lines(&buf), ["hello"]);
    }

    #[test]
    fn test_delete_back_removes_char() {
        let mut buf = EditorBuffer::from_lines(["hello"]);
        buf.move_to(0, 5);
        assert!(buf.delete_back());
        assert_eq!(lines(&buf), ["hell"]);
        assert_eq!(buf.cursor(), Cursor::at(0, 4));
    }

    #[test]
    fn test_delete_back_joins_rows() {
        let mut buf = EditorBuffer::from_lines(["hello", "world"]);
        buf.move_to(1, 0);
        assert!(buf.delete_back());
        assert_eq!(lines(&buf), ["helloworld"]);
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    // --- Delete forward ---

    #[test]
    fn test_delete_forward_merges_next_row() {
        let mut buf = EditorBuffer::from_lines(["abc", "def"]);
        buf.move_to(0, 3);
        assert!(buf.delete_forward());
        assert_eq!(lines(&buf), ["abcdef"]);
        assert_eq!(buf.cursor(), Cursor::at(0, 3));
    }

    #[test]
    fn test_delete_forward_removes_char_under_cursor() {
        let mut buf = EditorBuffer::from_lines(["hello"]);
        assert!(buf.delete_forward());
        assert_eq!(lines(&buf), ["ello"]);
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_delete_forward_at_end_of_last_row_is_noop() {
        let mut buf = EditorBuffer::from_lines(["hello"]);
        buf.move_end();
        assert!(!buf.delete_forward());
        assert!(!buf.is_dirty());
    }

    // --- Cursor movement ---

    #[test]
    fn test_move_left_wraps_to_previous_row_end() {
        let mut buf = EditorBuffer::from_lines(["hello", "world"]);
        buf.move_to(1, 0);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    #[test]
    fn test_move_left_at_origin_is_noop() {
        let mut buf = EditorBuffer::from_lines(["hello"]);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_move_right_wraps_to_next_row_start() {
        let mut buf = EditorBuffer::from_lines(["hello", "world"]);
        buf.move_to(0, 5);
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_move_right_on_virtual_row_is_noop() {
        let mut buf = EditorBuffer::from_lines(["a"]);
        buf.move_to(1, 0);
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_move_down_reaches_virtual_row_only() {
        let mut buf = EditorBuffer::from_lines(["a", "b"]);
        for _ in 0..5 {
            buf.move_cursor(Direction::Down);
        }
        assert_eq!(buf.cursor(), Cursor::at(2, 0));
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let mut buf = EditorBuffer::from_lines(["hello", "hi"]);
        buf.move_to(0, 4);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor(), Cursor::at(1, 2));
        buf.move_cursor(Direction::Up);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_home_and_end() {
        let mut buf = EditorBuffer::from_lines(["hello"]);
        buf.move_end();
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
        buf.move_home();
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_move_to_clamps() {
        let mut buf = EditorBuffer::from_lines(["hello"]);
        buf.move_to(0, 100);
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
        buf.move_to(100, 3);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_render_col_accounts_for_tabs() {
        let mut buf = EditorBuffer::from_lines(["\tx"]);
        buf.move_to(0, 1);
        assert_eq!(buf.render_col(), 8);
        buf.move_to(1, 0);
        assert_eq!(buf.render_col(), 0);
    }

    // --- Complex editing sequences ---

    #[test]
    fn test_split_and_rejoin() {
        let mut buf = EditorBuffer::from_lines(["helloworld"]);
        buf.move_to(0, 5);
        buf.insert_newline();
        assert_eq!(lines(&buf), ["hello", "world"]);
        buf.delete_back();
        assert_eq!(lines(&buf), ["helloworld"]);
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    #[derive(Debug, Clone)]
    enum Edit {
        Insert(usize, u8),
        Delete(usize),
    }

    fn edit_strategy() -> impl Strategy<Value = Edit> {
        prop_oneof![
            (0usize..40, prop_oneof![Just(b'\t'), b' '..=b'~']).prop_map(|(c, b)| Edit::Insert(c, b)),
            (0usize..40).prop_map(Edit::Delete),
        ]
    }

    proptest! {
        #[test]
        fn char_edits_keep_render_in_sync(
            start in proptest::collection::vec(prop_oneof![Just(b'\t'), b'a'..=b'z'], 0..20),
            edits in proptest::collection::vec(edit_strategy(), 0..60),
        ) {
            let mut buf = EditorBuffer::from_lines([start.clone()]);
            let mut expected = start.len();
            for edit in edits {
                match edit {
                    Edit::Insert(col, b) => {
                        buf.insert_char_at(0, col, b);
                        expected += 1;
                    }
                    Edit::Delete(col) => {
                        if buf.delete_char_at(0, col).is_some() {
                            expected -= 1;
                        }
                    }
                }
                let row = buf.row(0).unwrap();
                let fresh = Row::new(row.chars().to_vec());
                prop_assert_eq!(row.render(), fresh.render());
            }
            prop_assert_eq!(buf.line_len(0), expected);
        }
    }
}
