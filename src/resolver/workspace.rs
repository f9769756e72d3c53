//! Workspace-identity variables.

use std::path::Path;

use crate::snippet::Variable;
use crate::workspace::{
    normalize_drive_letter, root_separator, WorkspaceIdentity, WORKSPACE_SUFFIX,
};

use super::VariableResolver;

/// Answers `WORKSPACE_NAME` and `WORKSPACE_FOLDER`. Unresolved when no
/// workspace identity is available at all.
pub struct WorkspaceResolver {
    identity: Option<WorkspaceIdentity>,
}

impl WorkspaceResolver {
    pub fn new(identity: Option<WorkspaceIdentity>) -> Self {
        Self { identity }
    }

    fn name(identity: &WorkspaceIdentity) -> Option<String> {
        match identity {
            WorkspaceIdentity::SingleFolder { path } => base_name(path),
            WorkspaceIdentity::MultiRoot { config_path } => {
                let name = base_name(config_path)?;
                Some(
                    name.strip_suffix(WORKSPACE_SUFFIX)
                        .map(str::to_string)
                        .unwrap_or(name),
                )
            }
        }
    }

    fn folder(identity: &WorkspaceIdentity) -> Option<String> {
        match identity {
            WorkspaceIdentity::SingleFolder { path } => {
                Some(normalize_drive_letter(&path.to_string_lossy()))
            }
            WorkspaceIdentity::MultiRoot { config_path } => {
                // Strip the config file's own base name plus one separator
                // from its full path; what remains is the folder.
                let name = base_name(config_path)?;
                let full = config_path.to_string_lossy();
                let folder = match full.strip_suffix(&name) {
                    Some(rest) => rest.strip_suffix(['/', '\\']).unwrap_or(rest),
                    None => &full,
                };
                if folder.is_empty() {
                    Some(root_separator())
                } else {
                    Some(normalize_drive_letter(folder))
                }
            }
        }
    }
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

impl VariableResolver for WorkspaceResolver {
    fn resolve(&self, variable: &Variable<'_>) -> Option<String> {
        let identity = self.identity.as_ref()?;
        match variable.name {
            "WORKSPACE_NAME" => Self::name(identity),
            "WORKSPACE_FOLDER" => Self::folder(identity),
            _ => None,
        }
    }
}
