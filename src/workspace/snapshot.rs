//! Baseline restore.
//!
//! The baseline under `sumo/baseline/` is written once, before any mutation, by the harness
//! front end. Restoring copies it back over the working tree so that a mutated file never
//! survives into the next trial. Copies are synchronous and the first failure aborts the
//! restore; a half-restored tree must never be reported as success.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use super::error::WorkspaceError;
use super::layout::SumoLayout;
use super::resolver::PathResolver;

/// Extensions restored from `baseline/contracts`.
pub const CONTRACT_EXTENSIONS: &[&str] = &["sol"];

/// Extensions restored from `baseline/test`.
pub const TEST_EXTENSIONS: &[&str] = &["js", "mjs", "sol", "ts", "py"];

/// Result of a restore call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RestoreOutcome {
    /// No baseline on disk; nothing was touched.
    Skipped {
        /// Baseline location that was checked.
        baseline: PathBuf,
    },
    /// Baseline copied over the working tree.
    Restored {
        /// Number of contract files written.
        contracts: usize,
        /// Number of test files written.
        tests: usize,
    },
}

/// Reads the baseline and writes it back over the project.
#[derive(Debug, Clone)]
pub struct SnapshotManager {
    layout: SumoLayout,
    resolver: PathResolver,
}

impl SnapshotManager {
    /// Build a manager for `layout`, resolving destinations with `resolver`.
    pub fn new(layout: SumoLayout, resolver: PathResolver) -> Self {
        Self { layout, resolver }
    }

    /// True when a baseline directory exists.
    pub fn has_baseline(&self) -> bool {
        self.layout.baseline_dir.is_dir()
    }

    /// Restore contracts and tests from the baseline.
    pub fn restore(&self) -> Result<RestoreOutcome, WorkspaceError> {
        if !self.has_baseline() {
            tracing::warn!(
                baseline = %self.layout.baseline_dir.display(),
                "Project was not restored (No baseline available)"
            );
            return Ok(RestoreOutcome::Skipped {
                baseline: self.layout.baseline_dir.clone(),
            });
        }

        // Both destinations must resolve before the first byte is written.
        let contracts_dir = self.resolver.contracts_dir()?;
        let test_dir = self.resolver.test_dir()?;

        let contracts = restore_subtree(
            &self.layout.baseline_contracts_dir(),
            &contracts_dir,
            CONTRACT_EXTENSIONS,
        )?;
        let tests = restore_subtree(&self.layout.baseline_test_dir(), &test_dir, TEST_EXTENSIONS)?;

        tracing::info!(contracts, tests, "Project restored");
        Ok(RestoreOutcome::Restored { contracts, tests })
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}

/// Files under `source` whose extension is in `extensions`, sorted by path.
///
/// Symlinks are followed, so a linked baseline file is restored with its target's contents.
fn baseline_files(source: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, WorkspaceError> {
    if !source.is_dir() {
        tracing::debug!(path = %source.display(), "baseline subtree absent");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Copy every matching file from `source` into `destination`, keeping relative paths.
fn restore_subtree(
    source: &Path,
    destination: &Path,
    extensions: &[&str],
) -> Result<usize, WorkspaceError> {
    let files = baseline_files(source, extensions)?;

    for file in &files {
        let relative = file
            .strip_prefix(source)
            .map_err(|_| {
                WorkspaceError::io(
                    file,
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "baseline file escaped its subtree",
                    ),
                )
            })?;
        let target = destination.join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WorkspaceError::io(parent, e))?;
        }
        std::fs::copy(file, &target).map_err(|e| WorkspaceError::io(&target, e))?;
        tracing::debug!(from = %file.display(), to = %target.display(), "restored file");
    }

    Ok(files.len())
}
