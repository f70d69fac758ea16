use crate::app::Model;
use crate::editor;

impl Model {
    /// Write the buffer to its file and report the outcome in the status bar.
    ///
    /// Failures leave the buffer untouched and dirty. Returns `true` on
    /// success.
    pub(super) fn save_to_disk(&mut self) -> bool {
        let Some(path) = self.file_path.clone() else {
            return false;
        };
        let bytes = self.buffer.to_bytes();
        match editor::persist(&path, &bytes) {
            Ok(()) => {
                self.buffer.mark_clean();
                tracing::info!(path = %path.display(), bytes = bytes.len(), "saved");
                self.show_status(format!("{} bytes written to disk", bytes.len()));
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "save failed");
                self.show_status(format!("Can't save! I/O error: {err}"));
                false
            }
        }
    }
}
