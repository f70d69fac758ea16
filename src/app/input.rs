use crate::app::{Message, Model};
use crate::editor::Direction;
use crate::input::{BACKSPACE, ENTER, Key, ctrl};
use crate::search::SearchDirection;

/// Map a decoded key to a message, given whether a prompt is open.
pub fn message_for_key(model: &Model, key: Key) -> Message {
    match &model.prompt {
        Some(prompt) => prompt_message(key, prompt.is_search()),
        None => editing_message(key),
    }
}

fn editing_message(key: Key) -> Message {
    const QUIT: u8 = ctrl(b'q');
    const SAVE: u8 = ctrl(b's');
    const FIND: u8 = ctrl(b'f');
    const BACKSPACE_CTRL: u8 = ctrl(b'h');
    const REFRESH: u8 = ctrl(b'l');

    match key {
        Key::Char(ENTER) => Message::InsertNewline,
        Key::Char(QUIT) => Message::Quit,
        Key::Char(SAVE) => Message::Save,
        Key::Char(FIND) => Message::Find,
        Key::Char(BACKSPACE | BACKSPACE_CTRL) => Message::DeleteBack,
        Key::Delete => Message::DeleteForward,
        Key::Char(REFRESH) | Key::Escape => Message::Refresh,
        Key::ArrowUp => Message::MoveCursor(Direction::Up),
        Key::ArrowDown => Message::MoveCursor(Direction::Down),
        Key::ArrowLeft => Message::MoveCursor(Direction::Left),
        Key::ArrowRight => Message::MoveCursor(Direction::Right),
        Key::PageUp => Message::PageUp,
        Key::PageDown => Message::PageDown,
        Key::Home => Message::Home,
        Key::End => Message::End,
        Key::Char(byte) if key.is_text() => Message::InsertChar(byte),
        Key::Char(_) => Message::Unbound,
    }
}

fn prompt_message(key: Key, searching: bool) -> Message {
    const BACKSPACE_CTRL: u8 = ctrl(b'h');

    match key {
        Key::Char(BACKSPACE | BACKSPACE_CTRL) | Key::Delete => Message::PromptBackspace,
        Key::Escape => Message::PromptCancel,
        Key::Char(ENTER) => Message::PromptAccept,
        Key::ArrowRight | Key::ArrowDown if searching => {
            Message::SearchNext(SearchDirection::Forward)
        }
        Key::ArrowLeft | Key::ArrowUp if searching => {
            Message::SearchNext(SearchDirection::Backward)
        }
        Key::Char(byte) if byte.is_ascii() && !byte.is_ascii_control() => {
            Message::PromptInput(byte)
        }
        _ => Message::Unbound,
    }
}
