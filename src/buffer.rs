//! Text-buffer collaborator surface.
//!
//! Resolvers only ever query a buffer; they never mutate one. [`TextBuffer`]
//! is the read-only contract an editor integration implements, and
//! [`StringBuffer`] is a complete in-memory implementation over a source
//! string, used by the tests and handy for embedders.
//!
//! Lines and columns are zero-based; columns count characters, not bytes.

use std::path::{Path, PathBuf};

use crate::text;

/// A caret location in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A possibly empty, possibly reversed selection range.
///
/// `anchor` is where the selection started; `active` is the moving caret.
/// The two may coincide (an empty selection) or be in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// An empty selection with the caret at `position`.
    pub fn caret(position: Position) -> Self {
        Self {
            anchor: position,
            active: position,
        }
    }

    /// The lesser of anchor and active.
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// The greater of anchor and active.
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    pub fn is_single_line(&self) -> bool {
        self.anchor.line == self.active.line
    }
}

/// Read-only query surface of a text buffer.
pub trait TextBuffer {
    /// Full content of the given line, without its terminator. Out-of-range
    /// lines are empty.
    fn line_content(&self, line: usize) -> String;

    /// Text covered by `[start, end)`, lines joined with `\n`.
    fn text_in_range(&self, start: Position, end: Position) -> String;

    /// The word under or immediately before `position`, if any.
    fn word_at(&self, position: Position) -> Option<String>;

    /// Language identifier of the buffer content (e.g. `"rust"`).
    fn language_id(&self) -> &str;

    /// File identity backing this buffer, if it has one.
    fn path(&self) -> Option<&Path>;
}

/// In-memory [`TextBuffer`] over a source string.
#[derive(Debug, Clone)]
pub struct StringBuffer {
    lines: Vec<String>,
    language: String,
    path: Option<PathBuf>,
}

impl StringBuffer {
    pub fn new(source: &str) -> Self {
        Self {
            lines: text::split_lines(source)
                .into_iter()
                .map(str::to_string)
                .collect(),
            language: "plaintext".to_string(),
            path: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Slice of a line between two character columns, clamped to its length.
    fn column_slice(line: &str, from: usize, to: usize) -> &str {
        let mut start = line.len();
        let mut end = line.len();
        for (count, (offset, _)) in line.char_indices().enumerate() {
            if count == from {
                start = offset;
            }
            if count == to {
                end = offset;
                break;
            }
        }
        if start > end {
            return "";
        }
        &line[start..end]
    }
}

impl TextBuffer for StringBuffer {
    fn line_content(&self, line: usize) -> String {
        self.lines.get(line).cloned().unwrap_or_default()
    }

    fn text_in_range(&self, start: Position, end: Position) -> String {
        if start >= end {
            return String::new();
        }
        if start.line == end.line {
            let line = self.line_content(start.line);
            return Self::column_slice(&line, start.column, end.column).to_string();
        }
        let mut parts = Vec::new();
        let first = self.line_content(start.line);
        parts.push(Self::column_slice(&first, start.column, usize::MAX).to_string());
        for line in start.line + 1..end.line {
            parts.push(self.line_content(line));
        }
        let last = self.line_content(end.line);
        parts.push(Self::column_slice(&last, 0, end.column).to_string());
        parts.join("\n")
    }

    fn word_at(&self, position: Position) -> Option<String> {
        let line = self.lines.get(position.line)?;
        let chars: Vec<char> = line.chars().collect();
        let column = position.column.min(chars.len());
        let is_word = |c: char| c.is_alphanumeric() || c == '_';
        let mut start = column;
        while start > 0 && is_word(chars[start - 1]) {
            start -= 1;
        }
        let mut end = column;
        while end < chars.len() && is_word(chars[end]) {
            end += 1;
        }
        if start == end {
            None
        } else {
            Some(chars[start..end].iter().collect())
        }
    }

    fn language_id(&self) -> &str {
        &self.language
    }

    fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
