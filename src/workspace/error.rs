//! Error taxonomy shared by every workspace operation.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::resolver::DirectoryKind;

/// Workspace-layer errors.
///
/// Fatal variants describe misconfiguration that a retry cannot fix. The library never exits
/// the process itself; callers check [`WorkspaceError::is_fatal`] and decide.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// No candidate directory for `kind` exists under the project root.
    #[error("no valid {kind} directory found in {}", .root.display())]
    MissingDirectory {
        /// Directory kind that failed to resolve.
        kind: DirectoryKind,
        /// Project root that was searched.
        root: PathBuf,
    },
    /// No known lockfile exists under the project root.
    #[error(
        "cannot detect the package manager: {} does not contain a valid lock file",
        .root.display()
    )]
    MissingLockfile {
        /// Project root that was searched.
        root: PathBuf,
    },
    /// The project configuration file could not be parsed.
    #[error("invalid configuration file {}: {source}", .path.display())]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Parse failure.
        source: serde_json::Error,
    },
    /// IO failure on a specific path.
    #[error("io error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },
    /// Directory traversal failure.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl WorkspaceError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for configuration/environment errors that should terminate the harness.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingDirectory { .. } | Self::MissingLockfile { .. } | Self::Config { .. }
        )
    }

    /// Remediation hint for fatal errors.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::MissingDirectory {
                kind: DirectoryKind::Build,
                ..
            } => Some(format!(
                "Please compile your contracts and/or specify `{}` in your {}",
                DirectoryKind::Build.config_key(),
                super::config::CONFIG_FILE_NAME
            )),
            Self::MissingDirectory { kind, .. } => Some(format!(
                "Please specify `{}` in your {}",
                kind.config_key(),
                super::config::CONFIG_FILE_NAME
            )),
            Self::MissingLockfile { .. } => Some(
                "Install the project's dependencies with npm or yarn so that a lock file exists"
                    .to_string(),
            ),
            Self::Config { .. } => {
                Some("Fix or remove the configuration file and try again".to_string())
            }
            Self::Io { .. } | Self::Walk(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_errors_carry_hints_and_io_errors_do_not() {
        let missing = WorkspaceError::MissingDirectory {
            kind: DirectoryKind::Test,
            root: PathBuf::from("/tmp/project"),
        };
        assert!(missing.is_fatal());
        assert_eq!(
            missing.to_string(),
            "no valid test directory found in /tmp/project"
        );
        assert!(missing.hint().is_some_and(|h| h.contains("testDir")));

        let build = WorkspaceError::MissingDirectory {
            kind: DirectoryKind::Build,
            root: PathBuf::from("/tmp/project"),
        };
        assert!(build.hint().is_some_and(|h| h.contains("compile")));

        let io = WorkspaceError::io(
            "/tmp/project/a.sol",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!io.is_fatal());
        assert!(io.hint().is_none());
    }
}
