//! Results and mutants directories.

use std::path::Path;

use super::error::WorkspaceError;
use super::fsops::empty_dir;
use super::layout::SumoLayout;

/// Owner of `sumo/results/` and `sumo/results/mutants/`.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    layout: SumoLayout,
}

impl ArtifactStore {
    /// Build a store over `layout`.
    pub fn new(layout: SumoLayout) -> Self {
        Self { layout }
    }

    /// Results directory.
    pub fn results_dir(&self) -> &Path {
        &self.layout.results_dir
    }

    /// Mutants directory.
    pub fn mutants_dir(&self) -> &Path {
        &self.layout.mutants_dir
    }

    /// Create the results and mutants directories if they are missing. Idempotent.
    pub fn setup(&self) -> Result<(), WorkspaceError> {
        for dir in [&self.layout.results_dir, &self.layout.mutants_dir] {
            if !dir.is_dir() {
                std::fs::create_dir_all(dir).map_err(|e| WorkspaceError::io(dir, e))?;
                tracing::debug!(path = %dir.display(), "created results directory");
            }
        }
        Ok(())
    }

    /// Empty the results directory and recreate its expected subtree.
    ///
    /// Returns `false` without touching the disk when the results directory was never created.
    pub fn clean(&self) -> Result<bool, WorkspaceError> {
        let results_dir = &self.layout.results_dir;
        if !results_dir.exists() {
            tracing::debug!(path = %results_dir.display(), "results directory absent, nothing to clean");
            return Ok(false);
        }

        empty_dir(results_dir)?;
        tracing::info!("Results directory cleaned");
        self.setup()?;
        Ok(true)
    }
}
