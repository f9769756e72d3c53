//! Language comment-token configuration.
//!
//! Comment variables (`LINE_COMMENT`, `BLOCK_COMMENT_START`,
//! `BLOCK_COMMENT_END`) look tokens up by language identifier. The table
//! loads from TOML and ships with defaults for common languages; embedders
//! with their own language service can start from [`LanguageRegistry::empty`]
//! and insert entries themselves.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a language configuration table.
#[derive(Error, Debug)]
pub enum LanguageConfigError {
    #[error("Failed to read language configuration file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse language configuration TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Comment tokens of one language. Any of the three may be absent; a
/// language with no block-comment syntax simply leaves those unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommentTokens {
    /// Line comment introducer, e.g. `//`.
    pub line: Option<String>,
    /// Block comment opener, e.g. `/*`.
    pub block_start: Option<String>,
    /// Block comment closer, e.g. `*/`.
    pub block_end: Option<String>,
}

/// TOML structure for deserializing the table
#[derive(Deserialize)]
struct TomlLanguages {
    languages: HashMap<String, CommentTokens>,
}

/// Built-in comment tokens for common languages
const DEFAULT_LANGUAGES: &str = r##"
[languages.rust]
line = "//"
block_start = "/*"
block_end = "*/"

[languages.c]
line = "//"
block_start = "/*"
block_end = "*/"

[languages.javascript]
line = "//"
block_start = "/*"
block_end = "*/"

[languages.typescript]
line = "//"
block_start = "/*"
block_end = "*/"

[languages.css]
block_start = "/*"
block_end = "*/"

[languages.html]
block_start = "<!--"
block_end = "-->"

[languages.python]
line = "#"

[languages.shellscript]
line = "#"

[languages.toml]
line = "#"

[languages.yaml]
line = "#"

[languages.lua]
line = "--"
block_start = "--[["
block_end = "]]"

[languages.sql]
line = "--"
block_start = "/*"
block_end = "*/"
"##;

/// Lookup table from language identifier to comment tokens.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: HashMap<String, CommentTokens>,
}

impl LanguageRegistry {
    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
        }
    }

    /// Load a registry from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, LanguageConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a registry from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, LanguageConfigError> {
        let parsed: TomlLanguages = toml::from_str(content)?;
        log::debug!("loaded comment tokens for {} languages", parsed.languages.len());
        Ok(Self {
            languages: parsed.languages,
        })
    }

    /// Register or replace the tokens of one language.
    pub fn insert(&mut self, language: impl Into<String>, tokens: CommentTokens) {
        self.languages.insert(language.into(), tokens);
    }

    /// Comment tokens of `language`, or `None` if it has no configuration.
    pub fn comments(&self, language: &str) -> Option<&CommentTokens> {
        self.languages.get(language)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::from_toml(DEFAULT_LANGUAGES).expect("Default language table should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_registry() {
        let registry = LanguageRegistry::default();
        let rust = registry.comments("rust").expect("rust should be built in");
        assert_eq!(rust.line.as_deref(), Some("//"));
        assert_eq!(rust.block_start.as_deref(), Some("/*"));
        assert_eq!(rust.block_end.as_deref(), Some("*/"));
    }

    #[test]
    fn test_partial_tokens() {
        let registry = LanguageRegistry::default();
        let python = registry.comments("python").expect("python should be built in");
        assert_eq!(python.line.as_deref(), Some("#"));
        assert_eq!(python.block_start, None);

        let css = registry.comments("css").expect("css should be built in");
        assert_eq!(css.line, None);
        assert_eq!(css.block_start.as_deref(), Some("/*"));
    }

    #[test]
    fn test_unknown_language() {
        let registry = LanguageRegistry::default();
        assert_eq!(registry.comments("brainfuck"), None);
    }

    #[test]
    fn test_from_toml() {
        let registry = LanguageRegistry::from_toml(
            r#"
            [languages.ini]
            line = ";"
            "#,
        )
        .expect("Should parse");
        assert_eq!(
            registry.comments("ini").and_then(|t| t.line.as_deref()),
            Some(";")
        );
        // Only what the file declares is present
        assert_eq!(registry.comments("rust"), None);
    }

    #[test]
    fn test_invalid_toml() {
        let result = LanguageRegistry::from_toml("languages = 3");
        assert!(matches!(result, Err(LanguageConfigError::ParseError(_))));
    }

    #[test]
    fn test_insert() {
        let mut registry = LanguageRegistry::empty();
        registry.insert(
            "ada",
            CommentTokens {
                line: Some("--".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            registry.comments("ada").and_then(|t| t.line.as_deref()),
            Some("--")
        );
    }
}
