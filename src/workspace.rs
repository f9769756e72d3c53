//! Workspace identity collaborator surface.

use std::path::{PathBuf, MAIN_SEPARATOR};

/// File suffix that marks a multi-root workspace configuration file. Matched
/// exactly and case-sensitively when deriving the workspace name.
pub const WORKSPACE_SUFFIX: &str = ".code-workspace";

/// Identity of the workspace an insertion happens in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceIdentity {
    /// A single folder opened directly.
    SingleFolder { path: PathBuf },
    /// A multi-root workspace, identified by its configuration file.
    MultiRoot { config_path: PathBuf },
}

impl WorkspaceIdentity {
    pub fn single_folder(path: impl Into<PathBuf>) -> Self {
        Self::SingleFolder { path: path.into() }
    }

    pub fn multi_root(config_path: impl Into<PathBuf>) -> Self {
        Self::MultiRoot {
            config_path: config_path.into(),
        }
    }
}

/// Uppercases the drive letter of a `x:`-prefixed path so that equal Windows
/// paths display identically. Paths without a drive letter pass through
/// unchanged.
pub fn normalize_drive_letter(path: &str) -> String {
    let mut chars = path.chars();
    match (chars.next(), chars.next()) {
        (Some(drive), Some(':')) if drive.is_ascii_lowercase() => {
            let mut out = String::with_capacity(path.len());
            out.push(drive.to_ascii_uppercase());
            out.push_str(&path[1..]);
            out
        }
        _ => path.to_string(),
    }
}

/// The platform's root path separator as a string.
pub(crate) fn root_separator() -> String {
    MAIN_SEPARATOR.to_string()
}
