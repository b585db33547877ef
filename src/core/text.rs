//! Permissive text reading shared by the line counter and the import parsers.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads `path` as UTF-8, dropping invalid byte sequences.
///
/// Content with a NUL byte is rejected as binary.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if bytes.contains(&0) {
        bail!("{} looks like binary content", path.display());
    }
    Ok(decode_lossy_ignore(&bytes))
}

/// Like [`read_text`], but any failure becomes `None`.
pub fn read_permissive(path: &Path) -> Option<String> {
    match read_text(path) {
        Ok(text) => Some(text),
        Err(err) => {
            debug!("skipping unreadable file: {err:#}");
            None
        }
    }
}

/// Number of lines in `path`, or zero when it cannot be read as text.
pub fn count_lines(path: &Path) -> usize {
    read_permissive(path)
        .map(|text| count_text_lines(&text))
        .unwrap_or(0)
}

/// Counts lines with universal-newline rules: `\n`, `\r\n` and a bare `\r`
/// each end a line, and unterminated trailing text is one more line.
pub fn count_text_lines(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut lines = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => lines += 1,
            b'\r' => {
                lines += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    if matches!(bytes.last(), Some(b) if *b != b'\n' && *b != b'\r') {
        lines += 1;
    }
    lines
}

fn decode_lossy_ignore(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_unterminated_last_line() {
        assert_eq!(count_text_lines(""), 0);
        assert_eq!(count_text_lines("a"), 1);
        assert_eq!(count_text_lines("a\n"), 1);
        assert_eq!(count_text_lines("a\nb"), 2);
        assert_eq!(count_text_lines("\n\n"), 2);
    }

    #[test]
    fn treats_cr_and_crlf_as_single_terminators() {
        assert_eq!(count_text_lines("a\r\nb\r\n"), 2);
        assert_eq!(count_text_lines("a\rb\rc"), 3);
        assert_eq!(count_text_lines("a\r\n\r\n"), 2);
    }

    #[test]
    fn invalid_sequences_are_dropped_not_replaced() {
        assert_eq!(decode_lossy_ignore(b"fo\xffo"), "foo");
        assert_eq!(decode_lossy_ignore(b"\xff\xfe"), "");
    }
}
