//! Comment-token variables.

use crate::buffer::TextBuffer;
use crate::language::LanguageRegistry;
use crate::snippet::Variable;

use super::VariableResolver;

/// Answers `LINE_COMMENT`, `BLOCK_COMMENT_START` and `BLOCK_COMMENT_END` by
/// looking up the buffer's language in a [`LanguageRegistry`]. A language
/// without configuration, or without the particular token, stays unresolved.
pub struct CommentResolver<'a> {
    buffer: &'a dyn TextBuffer,
    languages: &'a LanguageRegistry,
}

impl<'a> CommentResolver<'a> {
    pub fn new(buffer: &'a dyn TextBuffer, languages: &'a LanguageRegistry) -> Self {
        Self { buffer, languages }
    }
}

impl VariableResolver for CommentResolver<'_> {
    fn resolve(&self, variable: &Variable<'_>) -> Option<String> {
        let tokens = self.languages.comments(self.buffer.language_id())?;
        match variable.name {
            "LINE_COMMENT" => tokens.line.clone(),
            "BLOCK_COMMENT_START" => tokens.block_start.clone(),
            "BLOCK_COMMENT_END" => tokens.block_end.clone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::StringBuffer;
    use pretty_assertions::assert_eq;

    fn resolve(language: &str, name: &str) -> Option<String> {
        let buffer = StringBuffer::new("").with_language(language);
        let registry = LanguageRegistry::default();
        CommentResolver::new(&buffer, &registry).resolve(&Variable::new(name))
    }

    #[test]
    fn test_all_three_tokens() {
        assert_eq!(resolve("rust", "LINE_COMMENT"), Some("//".to_string()));
        assert_eq!(
            resolve("rust", "BLOCK_COMMENT_START"),
            Some("/*".to_string())
        );
        assert_eq!(resolve("rust", "BLOCK_COMMENT_END"), Some("*/".to_string()));
    }

    #[test]
    fn test_missing_token_unresolved() {
        // Python has no block comments, CSS no line comments
        assert_eq!(resolve("python", "BLOCK_COMMENT_START"), None);
        assert_eq!(resolve("css", "LINE_COMMENT"), None);
    }

    #[test]
    fn test_unconfigured_language_unresolved() {
        assert_eq!(resolve("cobol", "LINE_COMMENT"), None);
    }

    #[test]
    fn test_other_names_unresolved() {
        assert_eq!(resolve("rust", "TM_FILENAME"), None);
    }
}
