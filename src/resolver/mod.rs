//! Variable resolvers and the chain that combines them.
//!
//! Each resolver answers a disjoint handful of variable names and signals
//! everything else as unresolved (`None`). The insertion engine builds one
//! [`CompositeResolver`] per insertion event from whichever resolvers apply
//! to its context and queries it once per variable, in template order.
//!
//! # Example
//!
//! ```rust
//! use snippet_vars::{CompositeResolver, TimeResolver, RandomResolver, Variable, VariableResolver};
//!
//! let composite = CompositeResolver::new(vec![
//!     Box::new(TimeResolver::new()),
//!     Box::new(RandomResolver::new()),
//! ]);
//!
//! assert!(composite.resolve(&Variable::new("CURRENT_YEAR")).is_some());
//! assert!(composite.resolve(&Variable::new("NO_SUCH_VARIABLE")).is_none());
//! ```

mod clipboard;
mod comment;
mod model;
mod random;
mod selection;
mod time;
mod workspace;

pub use clipboard::ClipboardResolver;
pub use comment::CommentResolver;
pub use model::ModelResolver;
pub use random::RandomResolver;
pub use selection::SelectionResolver;
pub use time::{Clock, SystemClock, TimeResolver};
pub use workspace::WorkspaceResolver;

use crate::snippet::Variable;

/// Capability of answering some subset of variable names.
///
/// `None` means "not mine, try the next resolver"; it is distinct from
/// `Some(String::new())`, which is a valid resolved value. Implementations
/// hold only read-only context and must not mutate anything.
pub trait VariableResolver {
    fn resolve(&self, variable: &Variable<'_>) -> Option<String>;
}

/// Ordered first-match-wins chain of resolvers.
///
/// The delegate order is fixed at construction and decides precedence: when
/// two delegates both answer a name, the earlier one wins. A name no
/// delegate answers stays unresolved.
pub struct CompositeResolver<'a> {
    delegates: Vec<Box<dyn VariableResolver + 'a>>,
}

impl<'a> CompositeResolver<'a> {
    pub fn new(delegates: Vec<Box<dyn VariableResolver + 'a>>) -> Self {
        Self { delegates }
    }
}

impl VariableResolver for CompositeResolver<'_> {
    fn resolve(&self, variable: &Variable<'_>) -> Option<String> {
        for (index, delegate) in self.delegates.iter().enumerate() {
            if let Some(value) = delegate.resolve(variable) {
                log::trace!("variable {} resolved by delegate {}", variable.name, index);
                return Some(value);
            }
        }
        log::trace!("variable {} unresolved", variable.name);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Answers one fixed name with one fixed value.
    struct Fixed {
        name: &'static str,
        value: &'static str,
    }

    impl VariableResolver for Fixed {
        fn resolve(&self, variable: &Variable<'_>) -> Option<String> {
            (variable.name == self.name).then(|| self.value.to_string())
        }
    }

    #[test]
    fn test_first_match_wins() {
        let composite = CompositeResolver::new(vec![
            Box::new(Fixed {
                name: "X",
                value: "a",
            }),
            Box::new(Fixed {
                name: "X",
                value: "b",
            }),
        ]);
        assert_eq!(composite.resolve(&Variable::new("X")), Some("a".to_string()));
    }

    #[test]
    fn test_falls_through_to_later_delegate() {
        let composite = CompositeResolver::new(vec![
            Box::new(Fixed {
                name: "X",
                value: "a",
            }),
            Box::new(Fixed {
                name: "Y",
                value: "b",
            }),
        ]);
        assert_eq!(composite.resolve(&Variable::new("Y")), Some("b".to_string()));
    }

    #[test]
    fn test_unresolved_when_no_delegate_answers() {
        let composite = CompositeResolver::new(vec![Box::new(Fixed {
            name: "X",
            value: "a",
        })]);
        assert_eq!(composite.resolve(&Variable::new("Z")), None);
    }

    #[test]
    fn test_empty_string_is_a_resolved_value() {
        let composite = CompositeResolver::new(vec![
            Box::new(Fixed {
                name: "X",
                value: "",
            }),
            Box::new(Fixed {
                name: "X",
                value: "shadowed",
            }),
        ]);
        assert_eq!(composite.resolve(&Variable::new("X")), Some(String::new()));
    }
}
