use std::io;
use std::time::Instant;

use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};

use crate::app::Model;

use super::status::{message_line, status_line};

/// Shown on an empty, unnamed buffer.
pub const WELCOME: &str = concat!("Femto editor -- version ", env!("CARGO_PKG_VERSION"));

/// Build one complete frame for `model` as terminal output bytes.
///
/// The cursor is hidden while drawing and shown at its final position at
/// the end. Call [`Model::scroll`] first so the cursor is inside the
/// viewport.
///
/// # Errors
///
/// Returns any error from queueing terminal commands into the frame.
pub fn render(model: &Model, now: Instant) -> io::Result<Vec<u8>> {
    let mut frame = Vec::with_capacity(4096);
    draw(&mut frame, model, now)?;
    Ok(frame)
}

fn draw(out: &mut Vec<u8>, model: &Model, now: Instant) -> io::Result<()> {
    queue!(out, cursor::Hide, cursor::MoveTo(0, 0))?;
    draw_rows(out, model)?;
    draw_status_bar(out, model)?;
    draw_message_bar(out, model, now)?;

    let viewport = &model.viewport;
    let cursor_row = model.buffer.cursor().row.saturating_sub(viewport.row_offset());
    let cursor_col = model.buffer.render_col().saturating_sub(viewport.col_offset());
    queue!(
        out,
        cursor::MoveTo(to_u16(cursor_col), to_u16(cursor_row)),
        cursor::Show
    )
}

fn draw_rows(out: &mut Vec<u8>, model: &Model) -> io::Result<()> {
    let viewport = &model.viewport;
    let width = viewport.width() as usize;
    let height = viewport.height() as usize;
    let show_welcome = model.buffer.is_empty() && model.file_path().is_none();

    for y in 0..height {
        let file_row = y + viewport.row_offset();
        if let Some(row) = model.buffer.row(file_row) {
            let text = row.render();
            let start = viewport.col_offset().min(text.len());
            let end = (start + width).min(text.len());
            out.extend(text[start..end].iter().map(|&b| printable(b)));
        } else if show_welcome && y == height / 3 {
            draw_welcome(out, width);
        } else {
            out.push(b'~');
        }
        queue!(out, Clear(ClearType::UntilNewLine))?;
        out.extend_from_slice(b"\r\n");
    }
    Ok(())
}

fn draw_welcome(out: &mut Vec<u8>, width: usize) {
    let text = &WELCOME.as_bytes()[..WELCOME.len().min(width)];
    let padding = (width - text.len()) / 2;
    if padding > 0 {
        out.push(b'~');
        out.extend(std::iter::repeat_n(b' ', padding - 1));
    }
    out.extend_from_slice(text);
}

fn draw_status_bar(out: &mut Vec<u8>, model: &Model) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reverse))?;
    out.extend_from_slice(&status_line(model, model.viewport.width() as usize));
    queue!(out, SetAttribute(Attribute::Reset))?;
    out.extend_from_slice(b"\r\n");
    Ok(())
}

fn draw_message_bar(out: &mut Vec<u8>, model: &Model, now: Instant) -> io::Result<()> {
    queue!(out, Clear(ClearType::UntilNewLine))?;
    out.extend_from_slice(&message_line(model, now, model.viewport.width() as usize));
    Ok(())
}

/// Control bytes would move the terminal cursor; draw them as `?`.
const fn printable(byte: u8) -> u8 {
    if byte < 0x20 || byte == 0x7f {
        b'?'
    } else {
        byte
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
