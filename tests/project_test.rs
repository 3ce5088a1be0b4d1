use solgen::error::Error;
use solgen::progress::ProgressReporter;
use solgen::project::{Command, Project, ProjectBuilder, Variant};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

struct CountingReporter(Arc<AtomicUsize>);

impl ProgressReporter for CountingReporter {
    fn report(&self, _message: &str) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn new_project(root: &Path, with_wallet: bool) -> Project {
    ProjectBuilder::new(Command::New, Variant::Java)
        .with_project_name("Test")
        .with_package_name("org.com")
        .with_root_directory(root)
        .with_wallet(with_wallet)
        .build()
        .unwrap()
}

/// Runs every stage up to (but not including) the external build.
fn scaffold_without_build(project: &Project) {
    project.generate_top_level_directories().unwrap();
    let wallet = project.generate_wallet().unwrap();
    let provider = project.template_provider(Some(&wallet)).unwrap();
    provider.generate_files(project.structure()).unwrap();
}

#[test]
fn test_builder_rejects_invalid_project_name() {
    let err = ProjectBuilder::new(Command::New, Variant::Java)
        .with_project_name("1nvalid")
        .with_package_name("org.com")
        .with_root_directory("/tmp/x")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_builder_rejects_invalid_package_name() {
    let err = ProjectBuilder::new(Command::New, Variant::Java)
        .with_project_name("Test")
        .with_package_name("org..com")
        .with_root_directory("/tmp/x")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_builder_requires_import_path_for_import() {
    let err = ProjectBuilder::new(Command::Import, Variant::Java)
        .with_project_name("Test")
        .with_package_name("org.com")
        .with_root_directory("/tmp/x")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_builder_rejects_import_path_for_new() {
    let err = ProjectBuilder::new(Command::New, Variant::Java)
        .with_project_name("Test")
        .with_package_name("org.com")
        .with_root_directory("/tmp/x")
        .with_solidity_import_path("/tmp/contracts")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_expected_directories_exist_after_scaffold() {
    let temp_dir = TempDir::new().unwrap();
    let project = new_project(temp_dir.path(), true);

    scaffold_without_build(&project);

    let structure = project.structure();
    assert!(structure.main_path().is_dir());
    assert!(structure.test_path().is_dir());
    assert!(structure.solidity_path().is_dir());
    assert!(structure.wrapper_path().is_dir());
    assert!(structure.wallet_path().is_dir());
    assert!(structure.solidity_path().join("HelloWorld.sol").is_file());
    assert!(structure.project_root().join("build.gradle").is_file());
}

#[test]
fn test_no_wallet_files_without_wallet_flag() {
    let temp_dir = TempDir::new().unwrap();
    let project = new_project(temp_dir.path(), false);

    project.generate_top_level_directories().unwrap();
    let provider = project.template_provider(None).unwrap();
    provider.generate_files(project.structure()).unwrap();

    assert!(!project.structure().wallet_path().exists());
}

#[test]
fn test_wallet_stage_writes_keystore_and_password_file() {
    let temp_dir = TempDir::new().unwrap();
    let project = new_project(temp_dir.path(), true);

    project.generate_top_level_directories().unwrap();
    let wallet = project.generate_wallet().unwrap();

    let wallet_path = project.structure().wallet_path();
    assert!(wallet_path.join(&wallet.wallet_name).is_file());
    let password =
        fs::read_to_string(wallet_path.join(&wallet.password_file_name)).unwrap();
    assert_eq!(password, wallet.password);
}

#[test]
fn test_wallet_starter_references_generated_wallet() {
    let temp_dir = TempDir::new().unwrap();
    let project = new_project(temp_dir.path(), true);

    scaffold_without_build(&project);

    let starter = fs::read_to_string(
        project.structure().main_path().join("Test.java"),
    )
    .unwrap();
    assert!(!starter.contains("<wallet_name>"));
    assert!(!starter.contains("<password_file_name>"));
    assert!(starter.contains("src/main/resources/wallet/"));
}

#[test]
fn test_import_with_missing_source_creates_no_contract_files() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-contracts");
    let project = ProjectBuilder::new(Command::Import, Variant::Java)
        .with_project_name("Test")
        .with_package_name("org.com")
        .with_root_directory(temp_dir.path())
        .with_solidity_import_path(&missing)
        .build()
        .unwrap();

    project.generate_top_level_directories().unwrap();
    let provider = project.template_provider(None).unwrap();
    let err = provider.generate_files(project.structure()).unwrap_err();

    assert!(matches!(err, Error::Filesystem { .. }));
    let solidity = project.structure().solidity_path();
    assert_eq!(fs::read_dir(solidity).unwrap().count(), 0);
}

#[test]
fn test_import_with_empty_existing_source_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let contracts = temp_dir.path().join("contracts");
    fs::create_dir_all(&contracts).unwrap();
    let project = ProjectBuilder::new(Command::Import, Variant::Java)
        .with_project_name("Test")
        .with_package_name("org.com")
        .with_root_directory(temp_dir.path())
        .with_solidity_import_path(&contracts)
        .build()
        .unwrap();

    project.generate_top_level_directories().unwrap();
    let provider = project.template_provider(None).unwrap();
    provider.generate_files(project.structure()).unwrap();

    let solidity = project.structure().solidity_path();
    assert!(solidity.is_dir());
    assert_eq!(fs::read_dir(solidity).unwrap().count(), 0);
}

#[test]
fn test_kotlin_variant_scaffold() {
    let temp_dir = TempDir::new().unwrap();
    let project = ProjectBuilder::new(Command::New, Variant::Kotlin)
        .with_project_name("Test")
        .with_package_name("org.com")
        .with_root_directory(temp_dir.path())
        .build()
        .unwrap();

    project.generate_top_level_directories().unwrap();
    let provider = project.template_provider(None).unwrap();
    provider.generate_files(project.structure()).unwrap();

    let main_path = project.structure().main_path();
    assert!(main_path.to_str().unwrap().contains("src/main/kotlin"));
    assert!(main_path.join("Test.kt").is_file());
}

#[test]
fn test_build_failure_aborts_run_before_test_generation() {
    let temp_dir = TempDir::new().unwrap();
    let stages = Arc::new(AtomicUsize::new(0));
    let project = ProjectBuilder::new(Command::New, Variant::Java)
        .with_project_name("Test")
        .with_package_name("org.com")
        .with_root_directory(temp_dir.path())
        .with_tests(true)
        .with_reporter(Box::new(CountingReporter(stages.clone())))
        .build()
        .unwrap();

    // The external build fails here (no build tool in the generated tree is
    // runnable in tests), aborting the run, but the stages before it must
    // have reported progress and left their output on disk.
    let result = project.create_project();
    assert!(matches!(result, Err(Error::BuildTool { .. })));
    assert!(stages.load(Ordering::SeqCst) >= 2);
    assert!(project.structure().project_root().join("build.gradle").is_file());

    // A failed build aborts the run before test generation: the test
    // directory stays empty even though tests were requested.
    assert_eq!(
        fs::read_dir(project.structure().test_path()).unwrap().count(),
        0
    );
}
