//! # sumo-workspace
//!
//! `sumo-workspace` is the filesystem layer of a Solidity mutation-testing harness:
//! - `workspace::resolver`: locate the contracts, test, and build directories
//! - `workspace::snapshot`: restore the pristine baseline over a mutated working tree
//! - `workspace::artifacts`: create and empty `sumo/results/`
//! - `workspace::sweeper`: empty the build directory and purge test-chain temp files
//!
//! Mutant generation, test execution, and reporting live outside this crate and call into it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod workspace;

pub use workspace::{
    ArtifactStore, DirectoryKind, PackageManager, PathResolver, RestoreOutcome, SnapshotManager,
    SweepReport, Sweeper, Workspace, WorkspaceConfig, WorkspaceError,
};
