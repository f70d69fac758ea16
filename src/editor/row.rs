/// Width of a tab stop in screen columns.
pub const TAB_STOP: usize = 8;

/// One line of text.
///
/// `chars` holds the bytes as they appear in the file; `render` is the
/// display form with tabs expanded to the next multiple of [`TAB_STOP`].
/// Every mutation rebuilds `render`, so the two never drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    pub fn new(chars: impl Into<Vec<u8>>) -> Self {
        let mut row = Self {
            chars: chars.into(),
            render: Vec::new(),
        };
        row.update_render();
        row
    }

    /// Raw bytes of the row.
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Tab-expanded bytes of the row.
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Raw length in bytes.
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Length of the rendered form in screen columns.
    pub const fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Insert a byte at `at`, clamped to the end of the row.
    pub fn insert(&mut self, at: usize, byte: u8) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, byte);
        self.update_render();
    }

    /// Remove the byte at `at`. Out-of-range positions are ignored.
    pub fn remove(&mut self, at: usize) -> Option<u8> {
        if at >= self.chars.len() {
            return None;
        }
        let byte = self.chars.remove(at);
        self.update_render();
        Some(byte)
    }

    /// Append bytes to the end of the row.
    pub fn append(&mut self, bytes: &[u8]) {
        self.chars.extend_from_slice(bytes);
        self.update_render();
    }

    /// Cut the row at `at`, returning everything from `at` onward.
    pub fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.chars.len());
        let tail = self.chars.split_off(at);
        self.update_render();
        tail
    }

    /// Convert a raw index into the rendered column where that byte starts.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        self.chars
            .iter()
            .take(cx)
            .fold(0, |rx, &b| advance(rx, b))
    }

    /// Convert a rendered column into the raw index of the byte that covers
    /// it. Columns inside a tab map to the tab; columns past the end map to
    /// the row length.
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &b) in self.chars.iter().enumerate() {
            cur_rx = advance(cur_rx, b);
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }

    fn update_render(&mut self) {
        self.render.clear();
        for &b in &self.chars {
            if b == b'\t' {
                self.render.push(b' ');
                while self.render.len() % TAB_STOP != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(b);
            }
        }
    }
}

const fn advance(rx: usize, byte: u8) -> usize {
    if byte == b'\t' {
        rx + TAB_STOP - (rx % TAB_STOP)
    } else {
        rx + 1
    }
}
