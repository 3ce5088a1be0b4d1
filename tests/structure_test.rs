use solgen::structure::ProjectStructure;
use tempfile::TempDir;

#[test]
fn test_derived_paths() {
    let structure = ProjectStructure::new("/tmp/x", "org.com", "Test", "java");

    assert_eq!(structure.project_root().to_str().unwrap(), "/tmp/x/Test");
    assert_eq!(
        structure.main_path().to_str().unwrap(),
        "/tmp/x/Test/src/main/java/org/com"
    );
    assert_eq!(
        structure.test_path().to_str().unwrap(),
        "/tmp/x/Test/src/test/java/org/com"
    );
    assert_eq!(
        structure.solidity_path().to_str().unwrap(),
        "/tmp/x/Test/src/main/solidity"
    );
    assert_eq!(
        structure.wrapper_path().to_str().unwrap(),
        "/tmp/x/Test/gradle/wrapper"
    );
    assert_eq!(
        structure.wallet_path().to_str().unwrap(),
        "/tmp/x/Test/src/main/resources/wallet"
    );
}

#[test]
fn test_kotlin_language_segment() {
    let structure = ProjectStructure::new("/tmp/x", "org.com", "Test", "kotlin");
    assert_eq!(
        structure.main_path().to_str().unwrap(),
        "/tmp/x/Test/src/main/kotlin/org/com"
    );
}

#[test]
fn test_directory_creation() {
    let temp_dir = TempDir::new().unwrap();
    let structure = ProjectStructure::new(temp_dir.path(), "org.com", "Test", "java");

    structure.create_main_directory().unwrap();
    structure.create_test_directory().unwrap();
    structure.create_solidity_directory().unwrap();
    structure.create_wrapper_directory().unwrap();
    structure.create_wallet_directory().unwrap();

    assert!(structure.main_path().is_dir());
    assert!(structure.test_path().is_dir());
    assert!(structure.solidity_path().is_dir());
    assert!(structure.wrapper_path().is_dir());
    assert!(structure.wallet_path().is_dir());
}

#[test]
fn test_directory_creation_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let structure = ProjectStructure::new(temp_dir.path(), "org.com", "Test", "java");

    structure.create_main_directory().unwrap();
    structure.create_main_directory().unwrap();

    assert!(structure.main_path().is_dir());
}

#[test]
fn test_directory_creation_fails_on_path_collision() {
    let temp_dir = TempDir::new().unwrap();
    let structure = ProjectStructure::new(temp_dir.path(), "org.com", "Test", "java");

    // A file where the project root should be blocks directory creation.
    std::fs::write(structure.project_root(), "not a directory").unwrap();
    assert!(structure.create_main_directory().is_err());
}
