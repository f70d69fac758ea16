use std::io::{Stdout, stdout};
use std::time::Instant;

use anyhow::{Context, Result};

use crate::app::{App, HELP_MESSAGE, Model, message_for_key, update};
use crate::editor::{self, EditorBuffer};
use crate::input::{ByteSource, KeyDecoder};
use crate::terminal::{self, RawMode, StdinSource};

impl App {
    /// Run the editor until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the terminal cannot be
    /// put into raw mode or measured, or terminal I/O fails. The terminal is
    /// restored before the error is returned.
    pub fn run(&mut self) -> Result<()> {
        let buffer = match &self.file_path {
            Some(path) => {
                let lines = editor::load_lines(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                tracing::info!(path = %path.display(), lines = lines.len(), "loaded");
                EditorBuffer::from_lines(lines)
            }
            None => EditorBuffer::empty(),
        };

        let raw_mode = RawMode::enable().context("Failed to enable raw mode")?;
        let mut out = stdout();
        let mut decoder = KeyDecoder::new(StdinSource::new());

        let result = terminal::window_size(&mut out, decoder.source_mut())
            .context("Failed to determine terminal size")
            .and_then(|size| {
                let mut model = Model::new(buffer, self.file_path.clone(), size)
                    .with_quit_times(self.quit_times);
                model.show_status(HELP_MESSAGE);
                Self::event_loop(&mut out, &mut decoder, &mut model)
            });

        // Best effort: the terminal may already be gone.
        let _ = terminal::clear_screen(&mut out);
        drop(raw_mode);
        if let Err(err) = &result {
            tracing::error!("{err:#}");
        }
        result
    }

    fn event_loop<S: ByteSource>(
        out: &mut Stdout,
        decoder: &mut KeyDecoder<S>,
        model: &mut Model,
    ) -> Result<()> {
        let mut needs_render = true;

        loop {
            if let Ok((width, height)) = crossterm::terminal::size()
                && width > 0
                && height > 0
                && (width, height) != model.terminal_size()
            {
                tracing::debug!(width, height, "terminal resized");
                model.resize(width, height);
                needs_render = true;
            }

            if model.expire_status(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                model.scroll();
                let frame = crate::ui::render(model, Instant::now())?;
                terminal::write_frame(out, &frame)?;
                needs_render = false;
            }

            let Some(key) = decoder.try_read_key()? else {
                continue;
            };
            let msg = message_for_key(model, key);
            tracing::trace!(?key, ?msg, "dispatch");
            *model = update(std::mem::take(model), msg);
            needs_render = true;

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
