//! Snippet variable resolution for editor snippet insertion.
//!
//! When a snippet template is materialized into a document, named variables
//! like `TM_FILENAME` or `CLIPBOARD` must become concrete strings. This
//! library provides the resolvers that answer them from the editing context
//! (selection, file identity, clipboard, comment syntax, wall clock,
//! workspace, randomness) and a [`CompositeResolver`] that chains them with
//! first-match-wins precedence.
//!
//! Parsing snippet syntax and applying the edit are out of scope; the
//! insertion engine hands over [`Variable`] nodes and receives
//! `Option<String>` back, `None` meaning the name stayed unresolved.
//!
//! # Example
//!
//! ```rust
//! use snippet_vars::{
//!     CompositeResolver, ModelResolver, Position, Selection, SelectionResolver,
//!     StringBuffer, Variable, VariableResolver,
//! };
//!
//! let buffer = StringBuffer::new("fn main() {}\n").with_path("/src/main.rs");
//! let selection = Selection::caret(Position::new(0, 3));
//!
//! let selection_resolver = SelectionResolver::new(&buffer, selection);
//! let model_resolver = ModelResolver::new(&buffer, None);
//! let composite = CompositeResolver::new(vec![
//!     Box::new(selection_resolver),
//!     Box::new(model_resolver),
//! ]);
//!
//! assert_eq!(
//!     composite.resolve(&Variable::new("TM_CURRENT_WORD")),
//!     Some("main".to_string())
//! );
//! assert_eq!(
//!     composite.resolve(&Variable::new("TM_FILENAME")),
//!     Some("main.rs".to_string())
//! );
//! ```

pub mod buffer;
pub mod labels;
pub mod language;
pub mod resolver;
pub mod snippet;
pub mod text;
pub mod workspace;

pub use buffer::{Position, Selection, StringBuffer, TextBuffer};
pub use labels::{PathLabels, PlainLabels};
pub use language::{CommentTokens, LanguageConfigError, LanguageRegistry};
pub use resolver::{
    ClipboardResolver, Clock, CommentResolver, CompositeResolver, ModelResolver, RandomResolver,
    SelectionResolver, SystemClock, TimeResolver, VariableResolver, WorkspaceResolver,
};
pub use snippet::{is_known_variable, Fragment, FragmentContext, Variable, KNOWN_VARIABLE_NAMES};
pub use workspace::{WorkspaceIdentity, WORKSPACE_SUFFIX};
