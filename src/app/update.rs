use std::path::PathBuf;

use crate::app::Model;
use crate::app::prompt::{Prompt, PromptKind};
use crate::editor::Direction;
use crate::search::SearchDirection;

/// All possible actions in the editor.
///
/// Keys are mapped to messages in `input.rs`; [`update`] applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Move cursor one step
    MoveCursor(Direction),
    /// Move cursor up one screen
    PageUp,
    /// Move cursor down one screen
    PageDown,
    /// Move cursor to start of row
    Home,
    /// Move cursor to end of row
    End,

    // Editing
    /// Insert a byte at the cursor
    InsertChar(u8),
    /// Split row at cursor (Enter)
    InsertNewline,
    /// Delete byte before cursor (Backspace)
    DeleteBack,
    /// Delete byte under cursor (Delete)
    DeleteForward,

    // Commands
    /// Save to disk, prompting for a name when unnamed
    Save,
    /// Open the search prompt
    Find,
    /// Quit, subject to unsaved-change confirmation
    Quit,
    /// Redraw only (Ctrl-L, Escape)
    Refresh,
    /// A key with no binding
    Unbound,

    // Prompt
    /// Append a byte to the prompt input
    PromptInput(u8),
    /// Remove the last byte of the prompt input
    PromptBackspace,
    /// Confirm the prompt (Enter)
    PromptAccept,
    /// Abandon the prompt (Escape)
    PromptCancel,
    /// Look for the next match in a direction
    SearchNext(SearchDirection),
}

/// Apply a message to the model.
///
/// Every message except [`Message::Quit`] re-arms the quit confirmation
/// counter.
pub fn update(mut model: Model, msg: Message) -> Model {
    if msg != Message::Quit {
        model.rearm_quit();
    }

    match msg {
        Message::MoveCursor(direction) => model.buffer.move_cursor(direction),
        Message::PageUp => model.page(Direction::Up),
        Message::PageDown => model.page(Direction::Down),
        Message::Home => model.buffer.move_home(),
        Message::End => model.buffer.move_end(),

        Message::InsertChar(byte) => model.buffer.insert_char(byte),
        Message::InsertNewline => model.buffer.insert_newline(),
        Message::DeleteBack => {
            model.buffer.delete_back();
        }
        Message::DeleteForward => {
            model.buffer.delete_forward();
        }

        Message::Save => {
            if model.file_path.is_some() {
                model.save_to_disk();
            } else {
                model.prompt = Some(Prompt::save_as());
            }
        }
        Message::Find => model.open_search(),
        Message::Quit => handle_quit(&mut model),
        Message::Refresh | Message::Unbound => {}

        Message::PromptInput(byte) => {
            if let Some(prompt) = model.prompt.as_mut() {
                prompt.input.push(char::from(byte));
                restart_search(&mut model);
            }
        }
        Message::PromptBackspace => {
            if let Some(prompt) = model.prompt.as_mut() {
                prompt.input.pop();
                restart_search(&mut model);
            }
        }
        Message::SearchNext(direction) => {
            if let Some(Prompt {
                kind: PromptKind::Search(session),
                ..
            }) = model.prompt.as_mut()
            {
                session.set_direction(direction);
                run_search(&mut model);
            }
        }
        Message::PromptAccept => accept_prompt(&mut model),
        Message::PromptCancel => cancel_prompt(&mut model),
    }

    model
}

fn handle_quit(model: &mut Model) {
    if !model.buffer.is_dirty() {
        model.should_quit = true;
        return;
    }
    let remaining = model.consume_quit();
    if remaining == 0 {
        tracing::info!("quitting with unsaved changes");
        model.should_quit = true;
    } else {
        model.show_status(format!(
            "WARNING!!! File has unsaved changes. Press Ctrl-Q {remaining} more times to quit."
        ));
    }
}

/// The query changed: forget the previous match and search again from the
/// cursor.
fn restart_search(model: &mut Model) {
    if let Some(Prompt {
        kind: PromptKind::Search(session),
        ..
    }) = model.prompt.as_mut()
    {
        session.reset();
        run_search(model);
    }
}

fn run_search(model: &mut Model) {
    let Some(Prompt {
        kind: PromptKind::Search(session),
        input,
    }) = model.prompt.as_mut()
    else {
        return;
    };
    let from_row = model.buffer.cursor().row;
    if let Some(found) = session.find(&model.buffer, input.as_bytes(), from_row) {
        model.buffer.move_to(found.row, found.col);
        model.viewport.reveal(found.row);
    }
}

fn accept_prompt(model: &mut Model) {
    let Some(prompt) = model.prompt.take() else {
        return;
    };
    if prompt.input.is_empty() {
        model.prompt = Some(prompt);
        return;
    }
    match prompt.kind {
        PromptKind::SaveAs => {
            model.file_path = Some(PathBuf::from(&prompt.input));
            if !model.save_to_disk() {
                model.file_path = None;
            }
        }
        PromptKind::Search(_) => {
            tracing::debug!(query = %prompt.input, "search accepted");
        }
    }
}

fn cancel_prompt(model: &mut Model) {
    let Some(prompt) = model.prompt.take() else {
        return;
    };
    match prompt.kind {
        PromptKind::SaveAs => model.show_status("Save aborted"),
        PromptKind::Search(session) => {
            let restore = session.restore_point();
            model.buffer.move_to(restore.cursor.row, restore.cursor.col);
            model
                .viewport
                .restore(restore.row_offset, restore.col_offset);
        }
    }
}
