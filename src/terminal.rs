//! Terminal plumbing: raw mode, the stdin byte source, window size and
//! frame output.

use std::io::{self, ErrorKind, Read, Write};
use std::os::fd::AsFd;
use std::sync::Mutex;

use crossterm::{cursor, queue, terminal};
use nix::sys::termios::{
    ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices, Termios,
    tcgetattr, tcsetattr,
};

use crate::error::TerminalError;
use crate::input::ByteSource;

/// Longest cursor position report we are willing to read.
const CURSOR_REPORT_MAX: usize = 32;

/// Puts stdin into raw mode and restores the original settings on drop.
///
/// A panic hook restores the terminal too, so a panic message is printed on
/// a sane terminal.
pub struct RawMode {
    original: Termios,
}

impl RawMode {
    /// Switch stdin to raw mode.
    ///
    /// Reads return after at most 100 ms even when no byte arrived
    /// (`VMIN = 0`, `VTIME = 1`).
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes cannot be read or set,
    /// for example when stdin is not a terminal.
    pub fn enable() -> Result<Self, TerminalError> {
        let stdin = io::stdin();
        let original = tcgetattr(stdin.as_fd()).map_err(TerminalError::GetAttributes)?;

        let mut raw = original.clone();
        raw.input_flags.remove(
            InputFlags::BRKINT
                | InputFlags::ICRNL
                | InputFlags::INPCK
                | InputFlags::ISTRIP
                | InputFlags::IXON,
        );
        raw.output_flags.remove(OutputFlags::OPOST);
        raw.control_flags.insert(ControlFlags::CS8);
        raw.local_flags
            .remove(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 1;

        tcsetattr(stdin.as_fd(), SetArg::TCSAFLUSH, &raw).map_err(TerminalError::SetAttributes)?;
        install_panic_hook(original.clone());
        tracing::debug!("raw mode enabled");
        Ok(Self { original })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = tcsetattr(io::stdin().as_fd(), SetArg::TCSAFLUSH, &self.original) {
            tracing::error!(%err, "failed to restore terminal attributes");
        }
    }
}

fn install_panic_hook(original: Termios) {
    let original = Mutex::new(original);
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Ok(termios) = original.lock() {
            let _ = tcsetattr(io::stdin().as_fd(), SetArg::TCSAFLUSH, &termios);
        }
        let _ = clear_screen(&mut io::stdout());
        previous(info);
    }));
}

/// Byte source over raw-mode stdin.
///
/// In raw mode a read returns nothing after the `VTIME` interval, which is
/// reported as `Ok(None)`.
#[derive(Debug)]
pub struct StdinSource {
    stdin: io::Stdin,
}

impl StdinSource {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.stdin.read(&mut byte) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(byte[0])),
            Err(err) if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock) => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// Terminal size as (columns, rows).
///
/// Asks the terminal driver first. If that fails or reports no columns, the
/// cursor is pushed to the bottom-right corner and its reported position is
/// used instead.
///
/// # Errors
///
/// Returns [`TerminalError::WindowSize`] if neither method yields a size.
pub fn window_size<W: Write, S: ByteSource>(
    out: &mut W,
    source: &mut S,
) -> Result<(u16, u16), TerminalError> {
    match terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => return Ok((cols, rows)),
        Ok(_) => tracing::warn!("terminal reported zero size, probing cursor position"),
        Err(err) => tracing::warn!(%err, "terminal size query failed, probing cursor position"),
    }
    out.write_all(b"\x1b[999C\x1b[999B\x1b[6n")?;
    out.flush()?;
    let reply = read_cursor_report(source)?;
    parse_cursor_report(&reply).ok_or(TerminalError::WindowSize)
}

fn read_cursor_report<S: ByteSource>(source: &mut S) -> io::Result<Vec<u8>> {
    let mut reply = Vec::new();
    while reply.len() < CURSOR_REPORT_MAX {
        match source.read_byte()? {
            Some(b'R') | None => break,
            Some(byte) => reply.push(byte),
        }
    }
    Ok(reply)
}

/// Parse a cursor position report `ESC [ rows ; cols` (the trailing `R`
/// already stripped) into (columns, rows).
pub fn parse_cursor_report(reply: &[u8]) -> Option<(u16, u16)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    let rows: u16 = rows.parse().ok()?;
    let cols: u16 = cols.parse().ok()?;
    (rows > 0 && cols > 0).then_some((cols, rows))
}

/// Write a complete frame and flush it.
///
/// # Errors
///
/// Returns any I/O error from the terminal.
pub fn write_frame<W: Write>(out: &mut W, frame: &[u8]) -> io::Result<()> {
    out.write_all(frame)?;
    out.flush()
}

/// Clear the screen and home the cursor.
///
/// # Errors
///
/// Returns any I/O error from the terminal.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    out.flush()
}
