//! Keyboard input decoding.
//!
//! Raw-mode terminals deliver keystrokes as bytes. Most keys are a single
//! byte, but arrows and the navigation cluster arrive as escape sequences.
//! [`KeyDecoder`] turns the byte stream into one [`Key`] per call.

mod decoder;

pub use decoder::{ByteSource, KeyDecoder};

/// Carriage return, sent by the Enter key in raw mode.
pub const ENTER: u8 = b'\r';
/// DEL, sent by the Backspace key on most terminals.
pub const BACKSPACE: u8 = 0x7f;
/// Tab.
pub const TAB: u8 = b'\t';
/// The escape byte that introduces multi-byte sequences.
pub const ESC: u8 = 0x1b;

/// Byte produced by holding Ctrl with the given letter.
pub const fn ctrl(key: u8) -> u8 {
    key & 0x1f
}

/// A logical key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte that is not the start of an escape sequence, printable or
    /// control.
    Char(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    /// A bare escape, or an escape sequence this decoder does not know.
    Escape,
}

impl Key {
    /// True for bytes that should be inserted into the buffer as text.
    ///
    /// Tab counts as text; every other C0 control byte and DEL do not.
    pub const fn is_text(self) -> bool {
        match self {
            Self::Char(b) => b == TAB || (b >= 0x20 && b != BACKSPACE),
            _ => false,
        }
    }
}
