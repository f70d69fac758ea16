use std::collections::VecDeque;
use std::io;

use super::{ESC, Key};

/// A source of raw input bytes.
///
/// Each call yields at most one byte. `Ok(None)` means nothing arrived
/// within the source's poll interval; the caller decides whether to retry.
pub trait ByteSource {
    /// Read a single byte, if one is available.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying device.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }
}

/// Position inside an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing read yet.
    Ground,
    /// Read `ESC`.
    Escape,
    /// Read `ESC x` where `x` is not `[`; one more byte is consumed.
    EscapeOther,
    /// Read `ESC [`.
    Csi,
    /// Read `ESC [ digit`, waiting for `~`.
    CsiParam(u8),
}

enum Step {
    Next(State),
    Emit(Key),
}

fn step(state: State, byte: u8) -> Step {
    match state {
        State::Ground if byte == ESC => Step::Next(State::Escape),
        State::Ground => Step::Emit(Key::Char(byte)),
        State::Escape if byte == b'[' => Step::Next(State::Csi),
        State::Escape => Step::Next(State::EscapeOther),
        State::EscapeOther => Step::Emit(Key::Escape),
        State::Csi => match byte {
            b'A' => Step::Emit(Key::ArrowUp),
            b'B' => Step::Emit(Key::ArrowDown),
            b'C' => Step::Emit(Key::ArrowRight),
            b'D' => Step::Emit(Key::ArrowLeft),
            b'H' => Step::Emit(Key::Home),
            b'F' => Step::Emit(Key::End),
            b'0'..=b'9' => Step::Next(State::CsiParam(byte)),
            _ => Step::Emit(Key::Escape),
        },
        State::CsiParam(param) if byte == b'~' => Step::Emit(match param {
            b'1' | b'7' => Key::Home,
            b'4' | b'8' => Key::End,
            b'3' => Key::Delete,
            b'5' => Key::PageUp,
            b'6' => Key::PageDown,
            _ => Key::Escape,
        }),
        State::CsiParam(_) => Step::Emit(Key::Escape),
    }
}

/// Decodes a byte stream into [`Key`] events.
///
/// Sequences that are cut short or not recognized collapse into
/// [`Key::Escape`] after consuming the bytes already read.
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Mutable access to the underlying byte source.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Block until a key is available and decode it.
    ///
    /// The editor's event loop calls [`Self::try_read_key`] instead so it can
    /// check for resizes and expired status messages between polls.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the byte source.
    pub fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = self.try_read_key()? {
                return Ok(key);
            }
        }
    }

    /// Decode one key, or return `None` if no byte arrived within one poll.
    ///
    /// Once the first byte is in hand this never returns `None`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the byte source.
    pub fn try_read_key(&mut self) -> io::Result<Option<Key>> {
        let Some(first) = self.source.read_byte()? else {
            return Ok(None);
        };
        let mut state = match step(State::Ground, first) {
            Step::Emit(key) => return Ok(Some(key)),
            Step::Next(state) => state,
        };
        loop {
            let Some(byte) = self.source.read_byte()? else {
                tracing::trace!(?state, "escape sequence cut short");
                return Ok(Some(Key::Escape));
            };
            match step(state, byte) {
                Step::Emit(key) => return Ok(Some(key)),
                Step::Next(next) => state = next,
            }
        }
    }
}
