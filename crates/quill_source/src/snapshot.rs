//! Immutable script snapshots with a line-start index.

use crate::position::Position;
use quill_common::ContentHash;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The captured text of one script together with its version token.
///
/// A snapshot is never mutated: when a file changes, the cache replaces the
/// whole snapshot. Because the version is computed in the constructor from
/// the same text the snapshot stores, the two can never disagree.
#[derive(Clone, Debug)]
pub struct ScriptSnapshot {
    path: PathBuf,
    version: ContentHash,
    text: Arc<str>,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<usize>,
}

impl ScriptSnapshot {
    /// Captures `text` for `path`, hashing it and indexing line starts.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        Self {
            path: path.into(),
            version: ContentHash::of_text(&text),
            line_starts: compute_line_starts(&text),
            text,
        }
    }

    /// The file this snapshot was taken from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The content-derived version token.
    pub fn version(&self) -> ContentHash {
        self.version
    }

    /// The captured text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// A shared handle to the captured text.
    pub fn shared_text(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the snapshot holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines (a trailing newline opens one more, empty, line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the text of the zero-based `line`, without its line break.
    pub fn line(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());
        let raw = &self.text[start..end];
        Some(raw.trim_end_matches(['\n', '\r']))
    }

    /// Converts a byte offset into a zero-based [`Position`].
    ///
    /// Offsets past the end clamp to the end of the text, and offsets inside
    /// a multi-byte character resolve to that character.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = self.line_starts[line_idx];
        let ch = self.text[line_start..]
            .char_indices()
            .take_while(|(i, _)| line_start + i < offset)
            .count();
        Position::new(line_idx as u32, ch as u32)
    }
}

/// Computes the byte offsets of each line start in the given text.
fn compute_line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(
        text.bytes()
            .enumerate()
            .filter(|(_, byte)| *byte == b'\n')
            .map(|(i, _)| i + 1),
    );
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(text: &str) -> ScriptSnapshot {
        ScriptSnapshot::new("/proj/main.ts", text)
    }

    #[test]
    fn version_matches_text() {
        let s = snap("let a = 1;\n");
        assert_eq!(s.version(), ContentHash::of_text("let a = 1;\n"));
        assert_eq!(s.text(), "let a = 1;\n");
        assert_eq!(s.path(), Path::new("/proj/main.ts"));
    }

    #[test]
    fn line_starts_computation() {
        let s = snap("abc\ndef\nghi");
        assert_eq!(s.line_starts, vec![0, 4, 8]);
        assert_eq!(s.line_count(), 3);
    }

    #[test]
    fn position_resolution_is_zero_based() {
        let s = snap("abc\ndef\nghi");
        assert_eq!(s.position_at(0), Position::new(0, 0));
        assert_eq!(s.position_at(4), Position::new(1, 0));
        assert_eq!(s.position_at(5), Position::new(1, 1));
        assert_eq!(s.position_at(10), Position::new(2, 2));
    }

    #[test]
    fn position_clamps_past_end() {
        let s = snap("ab\ncd");
        assert_eq!(s.position_at(999), Position::new(1, 2));
    }

    #[test]
    fn position_counts_characters_not_bytes() {
        // 'é' is two bytes in UTF-8.
        let s = snap("é = 1");
        assert_eq!(s.position_at(3), Position::new(0, 2));
    }

    #[test]
    fn line_text_strips_breaks() {
        let s = snap("one\r\ntwo\nthree");
        assert_eq!(s.line(0), Some("one"));
        assert_eq!(s.line(1), Some("two"));
        assert_eq!(s.line(2), Some("three"));
        assert_eq!(s.line(3), None);
    }

    #[test]
    fn empty_text() {
        let s = snap("");
        assert!(s.is_empty());
        assert_eq!(s.line_count(), 1);
        assert_eq!(s.position_at(0), Position::new(0, 0));
    }

    #[test]
    fn clones_share_text() {
        let s = snap("shared");
        let t = s.clone();
        assert!(Arc::ptr_eq(&s.shared_text(), &t.shared_text()));
    }
}
