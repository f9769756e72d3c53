//! Clipboard variable, with multi-cursor spread.

use crate::snippet::Variable;
use crate::text;

use super::VariableResolver;

/// Answers `CLIPBOARD` from a clipboard-read function captured at
/// construction.
///
/// With spread enabled and as many non-blank clipboard lines as there are
/// cursors, each cursor receives its own line; on any mismatch every cursor
/// receives the full text. Distribution is all-or-nothing.
pub struct ClipboardResolver<'a> {
    read: Box<dyn Fn() -> Option<String> + 'a>,
    cursor_index: usize,
    cursor_count: usize,
    spread: bool,
}

impl<'a> ClipboardResolver<'a> {
    /// `cursor_index` is this cursor's zero-based position among
    /// `cursor_count` simultaneous cursors.
    pub fn new(
        read: impl Fn() -> Option<String> + 'a,
        cursor_index: usize,
        cursor_count: usize,
        spread: bool,
    ) -> Self {
        Self {
            read: Box::new(read),
            cursor_index,
            cursor_count,
            spread,
        }
    }
}

impl VariableResolver for ClipboardResolver<'_> {
    fn resolve(&self, variable: &Variable<'_>) -> Option<String> {
        if variable.name != "CLIPBOARD" {
            return None;
        }
        let clipboard = (self.read)()?;
        if clipboard.is_empty() {
            return None;
        }
        if self.spread {
            let lines: Vec<&str> = text::split_lines(&clipboard)
                .into_iter()
                .filter(|line| !text::is_blank(line))
                .collect();
            if lines.len() == self.cursor_count {
                if let Some(line) = lines.get(self.cursor_index) {
                    return Some(line.to_string());
                }
            }
        }
        Some(clipboard)
    }
}
