//! Path display collaborator surface.

use std::path::Path;

use crate::workspace::normalize_drive_letter;

/// Turns a file or directory identity into a human-readable string.
///
/// Editors typically shorten home directories, apply workspace-relative
/// display and so on; the resolvers only care that some such service exists.
/// `TM_DIRECTORY` and `TM_FILEPATH` stay unresolved without one.
pub trait PathLabels {
    fn display(&self, path: &Path) -> String;
}

/// Plain display: the path as a string, drive-letter casing normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLabels;

impl PathLabels for PlainLabels {
    fn display(&self, path: &Path) -> String {
        normalize_drive_letter(&path.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_labels() {
        assert_eq!(
            PlainLabels.display(Path::new("/home/dev/notes.md")),
            "/home/dev/notes.md"
        );
        assert_eq!(
            PlainLabels.display(Path::new("c:\\src\\main.rs")),
            "C:\\src\\main.rs"
        );
    }
}
