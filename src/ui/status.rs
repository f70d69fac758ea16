use std::time::Instant;

use crate::app::Model;

/// Longest filename prefix shown in the status bar.
const NAME_WIDTH: usize = 20;

/// Status bar text, exactly `width` bytes wide.
///
/// Filename, line count and a modified flag on the left; the cursor line
/// over the line count on the right. The right part is dropped when it does
/// not fit.
pub fn status_line(model: &Model, width: usize) -> Vec<u8> {
    let name = model.display_name();
    let name: String = name.chars().take(NAME_WIDTH).collect();
    let lines = model.buffer.line_count();
    let modified = if model.buffer.is_dirty() {
        " (modified)"
    } else {
        ""
    };
    let left = format!("{name} - {lines} lines{modified}");
    let right = format!("{}/{lines}", model.buffer.cursor().row + 1);

    let mut line: Vec<u8> = left.into_bytes();
    line.truncate(width);
    while line.len() < width {
        if width - line.len() == right.len() {
            line.extend_from_slice(right.as_bytes());
        } else {
            line.push(b' ');
        }
    }
    line
}

/// Message bar text, at most `width` bytes.
///
/// An open prompt takes precedence over the status message.
pub fn message_line(model: &Model, now: Instant, width: usize) -> Vec<u8> {
    let mut line = match &model.prompt {
        Some(prompt) => prompt.label().into_bytes(),
        None => model
            .active_status(now)
            .map(|s| s.as_bytes().to_vec())
            .unwrap_or_default(),
    };
    line.truncate(width);
    line
}
