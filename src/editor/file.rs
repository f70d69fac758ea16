use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Split file content into lines, stripping trailing `\r` and `\n` bytes.
///
/// A final newline does not start an extra empty line, so an empty input or
/// a single `"\n"` produce zero and one lines respectively.
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = bytes
        .split(|&b| b == b'\n')
        .map(|line| {
            let end = line
                .iter()
                .rposition(|&b| b != b'\r')
                .map_or(0, |i| i + 1);
            line[..end].to_vec()
        })
        .collect();
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

/// Read a whole file as a list of lines.
///
/// # Errors
///
/// Returns the I/O error from opening or reading the file.
pub fn load_lines(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    let bytes = fs::read(path)?;
    Ok(split_lines(&bytes))
}

/// Write `bytes` to `path`, creating it with mode 0644 if needed.
///
/// The file is truncated to the new length before writing so a shorter
/// buffer never leaves stale bytes behind.
///
/// # Errors
///
/// Returns the I/O error from opening, truncating, or writing the file.
pub fn persist(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options.open(path)?;
    file.set_len(bytes.len() as u64)?;
    file.write_all(bytes)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_split_lines_newline_terminated() {
        assert_eq!(split_lines(b"a\nb\n"), vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_split_lines_without_final_newline() {
        assert_eq!(split_lines(b"a\nb"), vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_split_lines_strips_carriage_returns() {
        assert_eq!(
            split_lines(b"a\r\nb\r\r\n\r\n"),
            vec![b"a".to_vec(), b"b".to_vec(), Vec::new()]
        );
    }

    #[test]
    fn test_split_lines_empty_inputs() {
        assert!(split_lines(b"").is_empty());
        assert_eq!(split_lines(b"\n"), vec![Vec::<u8>::new()]);
        assert_eq!(split_lines(b"\n\n"), vec![Vec::new(), Vec::new()]);
    }

    #[test]
    fn test_split_lines_keeps_non_utf8_bytes() {
        assert_eq!(split_lines(b"\xff\xfe\n"), vec![vec![0xff, 0xfe]]);
    }

    #[test]
    fn test_persist_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "a much longer previous content\n").unwrap();
        persist(&path, b"short\n").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"short\n");
    }

    #[test]
    fn test_persist_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.txt");
        persist(&path, b"x\n").unwrap();
        assert_eq!(load_lines(&path).unwrap(), vec![b"x".to_vec()]);
    }

    #[test]
    fn test_persist_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("file.txt");
        assert!(persist(&path, b"x").is_err());
    }
}
