use crate::search::SearchSession;

/// What the prompt is collecting input for.
#[derive(Debug, Clone)]
pub enum PromptKind {
    /// Filename for saving an unnamed buffer.
    SaveAs,
    /// Incremental search query.
    Search(SearchSession),
}

/// A one-line prompt shown in the message bar.
///
/// Only printable ASCII is ever appended, so the input is kept as a `String`.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub const fn save_as() -> Self {
        Self {
            kind: PromptKind::SaveAs,
            input: String::new(),
        }
    }

    pub const fn search(session: SearchSession) -> Self {
        Self {
            kind: PromptKind::Search(session),
            input: String::new(),
        }
    }

    pub const fn is_search(&self) -> bool {
        matches!(self.kind, PromptKind::Search(_))
    }

    /// Text shown in the message bar while the prompt is open.
    pub fn label(&self) -> String {
        match self.kind {
            PromptKind::SaveAs => format!("Save as: {} (ESC to cancel)", self.input),
            PromptKind::Search(_) => format!("Search: {} (Use ESC/Arrows/Enter)", self.input),
        }
    }
}
