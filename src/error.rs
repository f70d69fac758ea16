//! Fatal setup errors.

use std::io;

use thiserror::Error;

/// Errors that stop the editor before or while taking over the terminal.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to read terminal attributes")]
    GetAttributes(#[source] nix::Error),
    #[error("failed to set terminal attributes")]
    SetAttributes(#[source] nix::Error),
    #[error("could not determine the terminal window size")]
    WindowSize,
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}
