//! Workspace configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::WorkspaceError;
use super::resolver::DirectoryKind;

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "sumo-config.json";

/// Configuration consumed by the workspace layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceConfig {
    /// Absolute root of the project under test.
    pub project_root: PathBuf,
    /// Optional contracts directory override, relative to the project root.
    pub contracts_dir: Option<String>,
    /// Optional test directory override, relative to the project root.
    pub test_dir: Option<String>,
    /// Optional build directory override, relative to the project root.
    pub build_dir: Option<String>,
}

/// On-disk shape of `sumo-config.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    contracts_dir: Option<String>,
    test_dir: Option<String>,
    build_dir: Option<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            project_root: absolutize(project_root),
            contracts_dir: None,
            test_dir: None,
            build_dir: None,
        }
    }
}

impl WorkspaceConfig {
    /// Load configuration for `project_root`, merging `sumo-config.json` when present.
    pub fn load(project_root: impl Into<PathBuf>) -> Result<Self, WorkspaceError> {
        let config = Self::default().with_project_root(project_root);
        let path = config.project_root.join(CONFIG_FILE_NAME);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                return Ok(config);
            }
            Err(err) => return Err(WorkspaceError::io(&path, err)),
        };

        let file: ConfigFile = serde_json::from_str(&raw)
            .map_err(|source| WorkspaceError::Config {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loaded configuration file");

        Ok(Self {
            contracts_dir: file.contracts_dir,
            test_dir: file.test_dir,
            build_dir: file.build_dir,
            ..config
        })
    }

    /// Set project root. Relative paths are made absolute against the current directory.
    pub fn with_project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = absolutize(project_root.into());
        self
    }

    /// Set contracts directory override.
    pub fn with_contracts_dir(mut self, dir: impl Into<String>) -> Self {
        self.contracts_dir = Some(dir.into());
        self
    }

    /// Set test directory override.
    pub fn with_test_dir(mut self, dir: impl Into<String>) -> Self {
        self.test_dir = Some(dir.into());
        self
    }

    /// Set build directory override.
    pub fn with_build_dir(mut self, dir: impl Into<String>) -> Self {
        self.build_dir = Some(dir.into());
        self
    }

    /// Raw override configured for `kind`, if any.
    pub fn override_for(&self, kind: DirectoryKind) -> Option<&str> {
        match kind {
            DirectoryKind::Contracts => self.contracts_dir.as_deref(),
            DirectoryKind::Test => self.test_dir.as_deref(),
            DirectoryKind::Build => self.build_dir.as_deref(),
        }
    }
}

fn absolutize(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn default_root_is_absolute_and_builder_overrides_work() {
        let default = WorkspaceConfig::default();
        assert!(default.project_root.is_absolute());

        let cfg = WorkspaceConfig::default()
            .with_project_root("/tmp/project-a")
            .with_contracts_dir("solidity")
            .with_test_dir("spec")
            .with_build_dir("artifacts/out");

        assert_eq!(cfg.project_root, PathBuf::from("/tmp/project-a"));
        assert_eq!(cfg.override_for(DirectoryKind::Contracts), Some("solidity"));
        assert_eq!(cfg.override_for(DirectoryKind::Test), Some("spec"));
        assert_eq!(cfg.override_for(DirectoryKind::Build), Some("artifacts/out"));
    }

    #[test]
    fn load_without_file_yields_defaults() {
        let tmp = tempdir().expect("tempdir should be created");
        let cfg = WorkspaceConfig::load(tmp.path()).expect("load should succeed");
        assert_eq!(cfg.project_root, tmp.path());
        assert!(cfg.contracts_dir.is_none());
        assert!(cfg.test_dir.is_none());
        assert!(cfg.build_dir.is_none());
    }

    #[test]
    fn load_reads_camel_case_keys_and_ignores_unknown_ones() {
        let tmp = tempdir().expect("tempdir should be created");
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"{"contractsDir": "src/contracts", "testDir": "", "minimal": true}"#,
        )
        .expect("config should be written");

        let cfg = WorkspaceConfig::load(tmp.path()).expect("load should succeed");
        assert_eq!(cfg.contracts_dir.as_deref(), Some("src/contracts"));
        assert_eq!(cfg.test_dir.as_deref(), Some(""));
        assert!(cfg.build_dir.is_none());
    }

    #[test]
    fn malformed_file_is_a_fatal_config_error() {
        let tmp = tempdir().expect("tempdir should be created");
        std::fs::write(tmp.path().join(CONFIG_FILE_NAME), "{not json")
            .expect("config should be written");

        let err = WorkspaceConfig::load(tmp.path()).expect_err("load should fail");
        assert!(matches!(err, WorkspaceError::Config { .. }));
        assert!(err.is_fatal());
    }
}
