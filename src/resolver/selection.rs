//! Selection and caret variables.

use crate::buffer::{Selection, TextBuffer};
use crate::snippet::Variable;
use crate::text;

use super::VariableResolver;

/// Answers `SELECTION`, `TM_SELECTED_TEXT`, `TM_CURRENT_LINE`,
/// `TM_CURRENT_WORD`, `TM_LINE_INDEX` and `TM_LINE_NUMBER` from a buffer
/// snapshot and the active selection.
pub struct SelectionResolver<'a> {
    buffer: &'a dyn TextBuffer,
    selection: Selection,
}

impl<'a> SelectionResolver<'a> {
    pub fn new(buffer: &'a dyn TextBuffer, selection: Selection) -> Self {
        Self { buffer, selection }
    }

    /// The selected text, re-indented for the template position when it
    /// spans multiple lines and the variable knows where it sits.
    fn selected_text(&self, variable: &Variable<'_>) -> Option<String> {
        let start = self.selection.start();
        let end = self.selection.end();
        let value = self.buffer.text_in_range(start, end);
        if value.is_empty() {
            return None;
        }
        let context = match variable.context {
            Some(context) if start.line != end.line => context,
            _ => return Some(value),
        };

        // The insertion engine will indent the whole substituted block to the
        // template position. Pre-insert the part of the template-local
        // indentation the document line does not already carry, so the two
        // do not compound.
        let line = self.buffer.line_content(start.line);
        let line_indent = text::leading_whitespace_within(&line, start.column);
        let var_indent = context.preceding_indent().unwrap_or(line_indent);
        let common = text::common_prefix_len(var_indent, line_indent);
        let delta = &var_indent[common..];
        Some(text::indent_after_breaks(&value, delta))
    }
}

impl VariableResolver for SelectionResolver<'_> {
    fn resolve(&self, variable: &Variable<'_>) -> Option<String> {
        let position = self.selection.active;
        match variable.name {
            "SELECTION" | "TM_SELECTED_TEXT" => self.selected_text(variable),
            "TM_CURRENT_LINE" => Some(self.buffer.line_content(position.line)),
            "TM_CURRENT_WORD" => self.buffer.word_at(position),
            "TM_LINE_INDEX" => Some(position.line.to_string()),
            "TM_LINE_NUMBER" => Some((position.line + 1).to_string()),
            _ => None,
        }
    }
}
