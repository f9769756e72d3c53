//! File-identity variables.

use std::path::Path;

use crate::buffer::TextBuffer;
use crate::labels::PathLabels;
use crate::snippet::Variable;

use super::VariableResolver;

/// Answers `TM_FILENAME`, `TM_FILENAME_BASE`, `TM_DIRECTORY` and
/// `TM_FILEPATH` from the buffer's file identity.
///
/// The two display variables need a [`PathLabels`] collaborator and stay
/// unresolved without one; so do all four when the buffer has no backing
/// file.
pub struct ModelResolver<'a> {
    buffer: &'a dyn TextBuffer,
    labels: Option<&'a dyn PathLabels>,
}

impl<'a> ModelResolver<'a> {
    pub fn new(buffer: &'a dyn TextBuffer, labels: Option<&'a dyn PathLabels>) -> Self {
        Self { buffer, labels }
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Final path segment with its last extension removed. Dotfiles and
/// extensionless names come back unchanged.
fn file_name_base(path: &Path) -> Option<String> {
    let name = file_name(path)?;
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(name[..idx].to_string()),
        _ => Some(name),
    }
}

impl VariableResolver for ModelResolver<'_> {
    fn resolve(&self, variable: &Variable<'_>) -> Option<String> {
        let path = self.buffer.path()?;
        match variable.name {
            "TM_FILENAME" => file_name(path),
            "TM_FILENAME_BASE" => file_name_base(path),
            "TM_DIRECTORY" => {
                let labels = self.labels?;
                let parent = path.parent()?;
                if parent == Path::new(".") || parent == Path::new("") {
                    return Some(String::new());
                }
                Some(labels.display(parent))
            }
            "TM_FILEPATH" => self.labels.map(|labels| labels.display(path)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::StringBuffer;
    use crate::labels::PlainLabels;
    use pretty_assertions::assert_eq;

    fn resolve_with(path: &str, labels: bool, name: &str) -> Option<String> {
        let buffer = StringBuffer::new("").with_path(path);
        let plain = PlainLabels;
        let labels: Option<&dyn PathLabels> = labels.then_some(&plain as &dyn PathLabels);
        ModelResolver::new(&buffer, labels).resolve(&Variable::new(name))
    }

    #[test]
    fn test_filename() {
        assert_eq!(
            resolve_with("/home/dev/proj/mod.rs", true, "TM_FILENAME"),
            Some("mod.rs".to_string())
        );
    }

    #[test]
    fn test_filename_base_strips_last_extension_only() {
        assert_eq!(
            resolve_with("/tmp/archive.tar.gz", false, "TM_FILENAME_BASE"),
            Some("archive.tar".to_string())
        );
    }

    #[test]
    fn test_filename_base_keeps_extensionless_and_dotfiles() {
        assert_eq!(
            resolve_with("/tmp/README", false, "TM_FILENAME_BASE"),
            Some("README".to_string())
        );
        assert_eq!(
            resolve_with("/tmp/.gitignore", false, "TM_FILENAME_BASE"),
            Some(".gitignore".to_string())
        );
    }

    #[test]
    fn test_filepath_and_directory() {
        assert_eq!(
            resolve_with("/home/dev/proj/mod.rs", true, "TM_FILEPATH"),
            Some("/home/dev/proj/mod.rs".to_string())
        );
        assert_eq!(
            resolve_with("/home/dev/proj/mod.rs", true, "TM_DIRECTORY"),
            Some("/home/dev/proj".to_string())
        );
    }

    #[test]
    fn test_directory_of_bare_filename_is_empty() {
        assert_eq!(
            resolve_with("mod.rs", true, "TM_DIRECTORY"),
            Some(String::new())
        );
        assert_eq!(
            resolve_with("./mod.rs", true, "TM_DIRECTORY"),
            Some(String::new())
        );
    }

    #[test]
    fn test_display_variables_need_labels() {
        assert_eq!(resolve_with("/tmp/a.rs", false, "TM_DIRECTORY"), None);
        assert_eq!(resolve_with("/tmp/a.rs", false, "TM_FILEPATH"), None);
    }

    #[test]
    fn test_unresolved_without_file_identity() {
        let buffer = StringBuffer::new("");
        let resolver = ModelResolver::new(&buffer, None);
        assert_eq!(resolver.resolve(&Variable::new("TM_FILENAME")), None);
    }
}
