//! Femto - a small screen-oriented terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! femto              # empty, unnamed buffer
//! femto notes.txt    # edit a file
//! ```
//!
//! Keys: Ctrl-S save, Ctrl-Q quit, Ctrl-F find.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use femto::app::{App, DEFAULT_QUIT_TIMES};
use femto::config::load_effective_flags;

/// A small screen-oriented terminal text editor
#[derive(Parser, Debug)]
#[command(name = "femto", version, about, long_about = None)]
struct Cli {
    /// File to edit; starts with an empty buffer when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

/// Route tracing output away from the screen.
///
/// With a log file the filter defaults to `debug`. Without one nothing is
/// logged unless `FEMTO_LOG` asks for it, in which case events go to stderr.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = |default: &str| {
        EnvFilter::try_from_env("FEMTO_LOG").unwrap_or_else(|_| EnvFilter::new(default))
    };

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("debug"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("off"))
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let flags = load_effective_flags()?;

    let log_file = flags
        .log_file
        .clone()
        .or_else(|| std::env::var_os("FEMTO_LOG_FILE").map(PathBuf::from));
    init_logging(log_file.as_deref())?;

    let mut app =
        App::new(cli.file).with_quit_times(flags.quit_times.unwrap_or(DEFAULT_QUIT_TIMES));

    app.run().context("Application error")
}
