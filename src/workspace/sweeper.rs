//! Build-directory and temp-area cleanup between trials.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::WorkspaceError;
use super::fsops::{empty_dir, remove_entry};
use super::resolver::PathResolver;

/// Name prefixes of temp entries left behind by the local test chain.
///
/// `tmp-` is the sandbox directory prefix, `ganache` covers the node's own database dirs.
pub const TEMP_PREFIXES: &[&str] = &["tmp-", "ganache"];

/// Outcome of a temp-area sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Entries removed.
    pub removed: Vec<PathBuf>,
    /// Entries that matched but could not be removed.
    pub failed: Vec<PathBuf>,
}

/// Empties derived directories.
#[derive(Debug, Clone)]
pub struct Sweeper {
    resolver: PathResolver,
    temp_root: PathBuf,
}

impl Sweeper {
    /// Build a sweeper that scans the OS temp directory.
    pub fn new(resolver: PathResolver) -> Self {
        Self {
            resolver,
            temp_root: std::env::temp_dir(),
        }
    }

    /// Scan `temp_root` instead of the OS temp directory.
    pub fn with_temp_root(mut self, temp_root: impl Into<PathBuf>) -> Self {
        self.temp_root = temp_root.into();
        self
    }

    /// Temp area this sweeper scans.
    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }

    /// Empty the resolved build directory, keeping the directory itself.
    pub fn clean_build_dir(&self) -> Result<PathBuf, WorkspaceError> {
        let build_dir = self.resolver.build_dir()?;
        let removed = empty_dir(&build_dir)?;
        tracing::info!(path = %build_dir.display(), removed, "Build directory cleaned");
        Ok(build_dir)
    }

    /// Remove sandbox and chain leftovers from the temp area. Never fails.
    ///
    /// A failed removal is logged and recorded in [`SweepReport::failed`]; the sweep carries on
    /// with the remaining entries.
    pub fn clean_tmp(&self) -> SweepReport {
        self.sweep_tmp_with(remove_entry)
    }

    fn sweep_tmp_with<F>(&self, remove: F) -> SweepReport
    where
        F: Fn(&Path) -> Result<(), WorkspaceError>,
    {
        let mut report = SweepReport::default();
        let entries = match std::fs::read_dir(&self.temp_root) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %self.temp_root.display(), error = %err, "cannot read temp directory");
                return report;
            }
        };

        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !TEMP_PREFIXES.iter().any(|prefix| name.starts_with(prefix)) {
                continue;
            }

            let path = entry.path();
            match remove(&path) {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "deleted temp entry");
                    report.removed.push(path);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "could not delete temp entry");
                    report.failed.push(path);
                }
            }
        }

        tracing::info!(
            removed = report.removed.len(),
            failed = report.failed.len(),
            "Ganache temp files deleted"
        );
        report
    }
}
