use sumo_workspace::{DirectoryKind, Workspace, WorkspaceConfig};

#[test]
fn crate_root_exports_workspace_components() {
    let workspace = Workspace::new(
        WorkspaceConfig::default()
            .with_project_root("/tmp/dapp")
            .with_test_dir("spec"),
    );

    let contracts = workspace.resolver().candidates(DirectoryKind::Contracts);
    assert!(contracts[0].ends_with("contracts"));
    assert!(contracts[1].ends_with("src"));

    let tests = workspace.resolver().candidates(DirectoryKind::Test);
    assert!(tests[0].ends_with("spec"));
    assert_eq!(tests.len(), 1 + DirectoryKind::Test.conventions().len());

    assert_eq!(
        workspace.artifacts().mutants_dir(),
        workspace.layout().mutants_dir.as_path()
    );
    assert!(workspace.layout().results_dir.ends_with("sumo/results"));
}
