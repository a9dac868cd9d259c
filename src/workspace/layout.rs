//! Fixed `sumo/` layout under the project root.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Paths owned by the harness, all derived from the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumoLayout {
    /// `<root>/sumo`
    pub sumo_dir: PathBuf,
    /// `<root>/sumo/results`
    pub results_dir: PathBuf,
    /// `<root>/sumo/results/mutants`
    pub mutants_dir: PathBuf,
    /// `<root>/sumo/results/sumo-log.txt`; written by the reporter, not by this crate.
    pub report_txt: PathBuf,
    /// `<root>/sumo/baseline`
    pub baseline_dir: PathBuf,
}

impl SumoLayout {
    /// Derive the layout for `project_root`.
    pub fn new(project_root: &Path) -> Self {
        let sumo_dir = project_root.join("sumo");
        let results_dir = sumo_dir.join("results");
        Self {
            mutants_dir: results_dir.join("mutants"),
            report_txt: results_dir.join("sumo-log.txt"),
            baseline_dir: sumo_dir.join("baseline"),
            results_dir,
            sumo_dir,
        }
    }

    /// Baseline copy of the contracts tree.
    pub fn baseline_contracts_dir(&self) -> PathBuf {
        self.baseline_dir.join("contracts")
    }

    /// Baseline copy of the test tree.
    pub fn baseline_test_dir(&self) -> PathBuf {
        self.baseline_dir.join("test")
    }
}
