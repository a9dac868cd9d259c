//! Package manager detection from lockfiles.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use super::error::WorkspaceError;

/// Package manager used by the project under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// npm (`package-lock.json`).
    Npm,
    /// Yarn (`yarn.lock`).
    Yarn,
}

/// Lockfiles in detection order.
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("package-lock.json", PackageManager::Npm),
    ("yarn.lock", PackageManager::Yarn),
];

impl PackageManager {
    /// Detect from the first lockfile present in `project_root`.
    pub fn detect(project_root: &Path) -> Result<Self, WorkspaceError> {
        LOCKFILES
            .iter()
            .find(|(lockfile, _)| project_root.join(lockfile).is_file())
            .map(|(lockfile, manager)| {
                tracing::debug!(lockfile, %manager, "detected package manager");
                *manager
            })
            .ok_or_else(|| WorkspaceError::MissingLockfile {
                root: project_root.to_path_buf(),
            })
    }

    /// Lockfile that identifies this package manager.
    pub fn lockfile(self) -> &'static str {
        match self {
            Self::Npm => "package-lock.json",
            Self::Yarn => "yarn.lock",
        }
    }

    /// Executable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
