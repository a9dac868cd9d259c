//! Resolution of the contracts, test, and build directories.
//!
//! Each kind has a fixed priority table of conventional locations. A non-blank user override
//! is always tried before the table; the first candidate that exists as a directory wins.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::config::WorkspaceConfig;
use super::error::WorkspaceError;

/// The three project directories the harness needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryKind {
    /// Solidity sources.
    Contracts,
    /// Test suite.
    Test,
    /// Compiler output.
    Build,
}

impl DirectoryKind {
    /// All kinds, in resolution order used by the harness.
    pub const ALL: [DirectoryKind; 3] = [Self::Contracts, Self::Test, Self::Build];

    /// Conventional locations, most specific first.
    pub fn conventions(self) -> &'static [&'static str] {
        match self {
            Self::Contracts => &["contracts", "src"],
            Self::Test => &["test", "tests"],
            Self::Build => &[
                "build/artifacts/contracts",
                "build/artifacts",
                "build",
                "output",
                "out",
                "artifacts/contracts",
                "artifacts",
            ],
        }
    }

    /// Key naming this kind's override in `sumo-config.json`.
    pub fn config_key(self) -> &'static str {
        match self {
            Self::Contracts => "contractsDir",
            Self::Test => "testDir",
            Self::Build => "buildDir",
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contracts => "contracts",
            Self::Test => "test",
            Self::Build => "build",
        }
    }
}

impl fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory that resolved successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDirectory {
    /// Which directory this is.
    pub kind: DirectoryKind,
    /// Absolute path on disk.
    pub path: PathBuf,
}

/// Resolves project directories against the filesystem.
#[derive(Debug, Clone)]
pub struct PathResolver {
    config: WorkspaceConfig,
}

impl PathResolver {
    /// Build a resolver for `config`.
    pub fn new(config: WorkspaceConfig) -> Self {
        Self { config }
    }

    /// Project root this resolver searches.
    pub fn project_root(&self) -> &std::path::Path {
        &self.config.project_root
    }

    /// Ordered absolute candidates for `kind`.
    ///
    /// A configured override comes first. Surrounding whitespace is trimmed from it, so `" dist "`
    /// is tried as `dist`, and an override that is empty after trimming is skipped.
    pub fn candidates(&self, kind: DirectoryKind) -> Vec<PathBuf> {
        let root = &self.config.project_root;
        let user_override = self
            .config
            .override_for(kind)
            .map(str::trim)
            .filter(|dir| !dir.is_empty());

        user_override
            .into_iter()
            .chain(kind.conventions().iter().copied())
            .map(|dir| root.join(dir))
            .collect()
    }

    /// Resolve `kind` to the first candidate that exists as a directory.
    ///
    /// The check is `is_dir`, not plain existence: a regular file named like a candidate is
    /// passed over.
    pub fn resolve(&self, kind: DirectoryKind) -> Result<ResolvedDirectory, WorkspaceError> {
        for candidate in self.candidates(kind) {
            if candidate.is_dir() {
                tracing::debug!(%kind, path = %candidate.display(), "resolved directory");
                return Ok(ResolvedDirectory {
                    kind,
                    path: candidate,
                });
            }
            tracing::trace!(%kind, path = %candidate.display(), "candidate missing");
        }

        Err(WorkspaceError::MissingDirectory {
            kind,
            root: self.config.project_root.clone(),
        })
    }

    /// Resolved contracts directory.
    pub fn contracts_dir(&self) -> Result<PathBuf, WorkspaceError> {
        self.resolve(DirectoryKind::Contracts).map(|dir| dir.path)
    }

    /// Resolved test directory.
    pub fn test_dir(&self) -> Result<PathBuf, WorkspaceError> {
        self.resolve(DirectoryKind::Test).map(|dir| dir.path)
    }

    /// Resolved build directory.
    pub fn build_dir(&self) -> Result<PathBuf, WorkspaceError> {
        self.resolve(DirectoryKind::Build).map(|dir| dir.path)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use proptest::prelude::*;
    use tempfile::tempdir;

    use super::*;

    fn resolver_for(root: &Path) -> PathResolver {
        PathResolver::new(WorkspaceConfig::default().with_project_root(root))
    }

    fn with_override(root: &Path, kind: DirectoryKind, dir: &str) -> PathResolver {
        let config = WorkspaceConfig::default().with_project_root(root);
        let config = match kind {
            DirectoryKind::Contracts => config.with_contracts_dir(dir),
            DirectoryKind::Test => config.with_test_dir(dir),
            DirectoryKind::Build => config.with_build_dir(dir),
        };
        PathResolver::new(config)
    }

    fn any_kind() -> impl Strategy<Value = DirectoryKind> {
        prop_oneof![
            Just(DirectoryKind::Contracts),
            Just(DirectoryKind::Test),
            Just(DirectoryKind::Build),
        ]
    }

    #[test]
    fn conventions_are_tried_in_priority_order() {
        let tmp = tempdir().expect("tempdir should be created");
        std::fs::create_dir_all(tmp.path().join("src")).expect("src should be created");
        std::fs::create_dir_all(tmp.path().join("contracts")).expect("contracts should be created");
        std::fs::create_dir_all(tmp.path().join("out")).expect("out should be created");
        std::fs::create_dir_all(tmp.path().join("build/artifacts"))
            .expect("build artifacts should be created");

        let resolver = resolver_for(tmp.path());
        assert_eq!(
            resolver.contracts_dir().expect("contracts should resolve"),
            tmp.path().join("contracts")
        );
        assert_eq!(
            resolver.build_dir().expect("build should resolve"),
            tmp.path().join("build/artifacts")
        );
    }

    #[test]
    fn falls_back_to_secondary_convention() {
        let tmp = tempdir().expect("tempdir should be created");
        std::fs::create_dir_all(tmp.path().join("tests")).expect("tests should be created");

        let resolved = resolver_for(tmp.path())
            .resolve(DirectoryKind::Test)
            .expect("tests should resolve");
        assert_eq!(resolved.kind, DirectoryKind::Test);
        assert_eq!(resolved.path, tmp.path().join("tests"));
    }

    #[test]
    fn plain_file_does_not_count_as_directory() {
        let tmp = tempdir().expect("tempdir should be created");
        std::fs::write(tmp.path().join("build"), "not a dir").expect("file should be written");
        std::fs::create_dir_all(tmp.path().join("out")).expect("out should be created");

        assert_eq!(
            resolver_for(tmp.path())
                .build_dir()
                .expect("build should resolve"),
            tmp.path().join("out")
        );
    }

    #[test]
    fn missing_override_falls_through_to_conventions() {
        let tmp = tempdir().expect("tempdir should be created");
        std::fs::create_dir_all(tmp.path().join("contracts")).expect("contracts should be created");

        let resolver = with_override(tmp.path(), DirectoryKind::Contracts, "does/not/exist");
        assert_eq!(
            resolver.contracts_dir().expect("contracts should resolve"),
            tmp.path().join("contracts")
        );
    }

    #[test]
    fn nothing_on_disk_is_fatal_for_every_kind() {
        let tmp = tempdir().expect("tempdir should be created");
        let resolver = resolver_for(tmp.path());

        for kind in DirectoryKind::ALL {
            let err = resolver.resolve(kind).expect_err("resolution should fail");
            match &err {
                WorkspaceError::MissingDirectory { kind: k, root } => {
                    assert_eq!(*k, kind);
                    assert_eq!(root, tmp.path());
                }
                other => panic!("expected missing directory error, got {other:?}"),
            }
            assert!(err.is_fatal());
        }
    }

    #[test]
    fn candidates_put_trimmed_override_first() {
        let resolver = with_override(Path::new("/p"), DirectoryKind::Build, "  dist  ");
        let candidates = resolver.candidates(DirectoryKind::Build);
        assert_eq!(candidates[0], PathBuf::from("/p/dist"));
        assert_eq!(candidates[1], PathBuf::from("/p/build/artifacts/contracts"));
        assert_eq!(candidates.len(), 1 + DirectoryKind::Build.conventions().len());
    }

    proptest! {
        #[test]
        fn existing_override_always_wins(kind in any_kind(), name in "[a-z][a-z0-9_]{0,8}") {
            let tmp = tempdir().expect("tempdir should be created");
            for convention in kind.conventions() {
                std::fs::create_dir_all(tmp.path().join(convention))
                    .expect("convention dir should be created");
            }
            let custom = format!("custom/{name}");
            std::fs::create_dir_all(tmp.path().join(&custom)).expect("override dir should be created");

            let resolved = with_override(tmp.path(), kind, &custom)
                .resolve(kind)
                .expect("override should resolve");
            prop_assert_eq!(resolved.path, tmp.path().join(&custom));
        }

        #[test]
        fn blank_override_without_conventions_is_fatal(kind in any_kind(), blank in "[ \t]{0,4}") {
            let tmp = tempdir().expect("tempdir should be created");
            let resolver = with_override(tmp.path(), kind, &blank);

            prop_assert_eq!(resolver.candidates(kind).len(), kind.conventions().len());
            let err = resolver.resolve(kind).expect_err("resolution should fail");
            prop_assert!(
                matches!(err, WorkspaceError::MissingDirectory { .. }),
                "expected missing directory error"
            );
        }
    }
}
