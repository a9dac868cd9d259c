//! Filesystem orchestration for a mutation-testing run.

pub mod artifacts;
pub mod config;
pub mod error;
mod fsops;
pub mod layout;
pub mod package_manager;
pub mod project;
pub mod resolver;
pub mod snapshot;
pub mod sweeper;

pub use artifacts::ArtifactStore;
pub use config::{CONFIG_FILE_NAME, WorkspaceConfig};
pub use error::WorkspaceError;
pub use layout::SumoLayout;
pub use package_manager::PackageManager;
pub use project::Workspace;
pub use resolver::{DirectoryKind, PathResolver, ResolvedDirectory};
pub use snapshot::{RestoreOutcome, SnapshotManager};
pub use sweeper::{SweepReport, Sweeper, TEMP_PREFIXES};
