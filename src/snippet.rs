//! Parsed snippet data contract.
//!
//! The snippet parser lives upstream; this module only defines the shape of
//! what it hands over: an ordered sequence of template fragments, and the
//! variable node a resolver is asked about. A variable that should resolve
//! context-sensitively (multi-line selection re-indentation) carries a
//! [`FragmentContext`] pointing back into the sequence it belongs to.

use crate::text;

/// One parsed piece of a snippet template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Literal template text, line breaks included.
    Text(String),
    /// A numbered tabstop with its default text.
    Placeholder { index: u32, default: String },
    /// A named variable awaiting substitution.
    Variable { name: String },
}

/// A variable's view of the fragment sequence it sits in.
///
/// `index` is the variable's own position; the walk over preceding siblings
/// stops there, so the structure is only ever read, never owned.
#[derive(Debug, Clone, Copy)]
pub struct FragmentContext<'a> {
    fragments: &'a [Fragment],
    index: usize,
}

impl<'a> FragmentContext<'a> {
    pub fn new(fragments: &'a [Fragment], index: usize) -> Self {
        Self { fragments, index }
    }

    /// Whitespace prefix of the last line of the nearest literal-text
    /// fragment before the variable, or `None` if no text fragment precedes
    /// it.
    pub fn preceding_indent(&self) -> Option<&'a str> {
        let end = self.index.min(self.fragments.len());
        self.fragments[..end].iter().rev().find_map(|f| match f {
            Fragment::Text(value) => Some(text::leading_whitespace(text::last_line(value))),
            _ => None,
        })
    }
}

/// A named variable occurrence handed to the resolvers.
#[derive(Debug, Clone, Copy)]
pub struct Variable<'a> {
    pub name: &'a str,
    pub context: Option<FragmentContext<'a>>,
}

impl<'a> Variable<'a> {
    /// A bare variable with no surrounding template context.
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            context: None,
        }
    }

    /// A variable at `index` within `fragments`.
    pub fn with_context(name: &'a str, fragments: &'a [Fragment], index: usize) -> Self {
        Self {
            name,
            context: Some(FragmentContext::new(fragments, index)),
        }
    }
}

/// The closed set of variable names the resolvers recognize. Anything else
/// passes through unresolved; the upstream parser uses this table to decide
/// whether an identifier is a variable at all.
pub const KNOWN_VARIABLE_NAMES: [&str; 30] = [
    "CURRENT_YEAR",
    "CURRENT_YEAR_SHORT",
    "CURRENT_MONTH",
    "CURRENT_DATE",
    "CURRENT_HOUR",
    "CURRENT_MINUTE",
    "CURRENT_SECOND",
    "CURRENT_DAY_NAME",
    "CURRENT_DAY_NAME_SHORT",
    "CURRENT_MONTH_NAME",
    "CURRENT_MONTH_NAME_SHORT",
    "CURRENT_SECONDS_UNIX",
    "SELECTION",
    "CLIPBOARD",
    "TM_SELECTED_TEXT",
    "TM_CURRENT_LINE",
    "TM_CURRENT_WORD",
    "TM_LINE_INDEX",
    "TM_LINE_NUMBER",
    "TM_FILENAME",
    "TM_FILENAME_BASE",
    "TM_DIRECTORY",
    "TM_FILEPATH",
    "BLOCK_COMMENT_START",
    "BLOCK_COMMENT_END",
    "LINE_COMMENT",
    "WORKSPACE_NAME",
    "WORKSPACE_FOLDER",
    "RANDOM",
    "RANDOM_HEX",
];

/// True if `name` is one of [`KNOWN_VARIABLE_NAMES`].
pub fn is_known_variable(name: &str) -> bool {
    KNOWN_VARIABLE_NAMES.contains(&name)
}
