//! One handle over a project under test.

use std::path::Path;

use super::artifacts::ArtifactStore;
use super::config::WorkspaceConfig;
use super::error::WorkspaceError;
use super::layout::SumoLayout;
use super::package_manager::PackageManager;
use super::resolver::PathResolver;
use super::snapshot::SnapshotManager;
use super::sweeper::Sweeper;

/// Bundles configuration and layout and hands out the workspace components.
#[derive(Debug, Clone)]
pub struct Workspace {
    config: WorkspaceConfig,
    layout: SumoLayout,
}

impl Workspace {
    /// Build a workspace for `config`.
    pub fn new(config: WorkspaceConfig) -> Self {
        let layout = SumoLayout::new(&config.project_root);
        Self { config, layout }
    }

    /// Project root.
    pub fn project_root(&self) -> &Path {
        &self.config.project_root
    }

    /// Configuration in effect.
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Fixed `sumo/` paths.
    pub fn layout(&self) -> &SumoLayout {
        &self.layout
    }

    /// Directory resolver.
    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(self.config.clone())
    }

    /// Results store.
    pub fn artifacts(&self) -> ArtifactStore {
        ArtifactStore::new(self.layout.clone())
    }

    /// Baseline restorer.
    pub fn snapshots(&self) -> SnapshotManager {
        SnapshotManager::new(self.layout.clone(), self.resolver())
    }

    /// Build and temp cleaner.
    pub fn sweeper(&self) -> Sweeper {
        Sweeper::new(self.resolver())
    }

    /// Package manager of the project.
    pub fn package_manager(&self) -> Result<PackageManager, WorkspaceError> {
        PackageManager::detect(&self.config.project_root)
    }
}
