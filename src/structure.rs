//! Canonical directory layout of a generated project.
//! All paths derive deterministically from the root directory, package name
//! and project name; directory creation is idempotent.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Computed directory tree for one project.
///
/// Constructed once per run and immutable thereafter. The `create_*`
/// operations may be called in any order and repeated freely; an already
/// existing directory is a no-op, anything else (permissions, a file sitting
/// where a directory should go) surfaces as a filesystem error.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub project_name: String,
    pub package_name: String,
    project_root: PathBuf,
    main_path: PathBuf,
    test_path: PathBuf,
    solidity_path: PathBuf,
    wrapper_path: PathBuf,
    wallet_path: PathBuf,
    generated_wrappers: PathBuf,
}

impl ProjectStructure {
    /// Derives the full tree from the identifying triple plus the variant's
    /// language path segment (`java` or `kotlin`).
    pub fn new(
        root_directory: impl AsRef<Path>,
        package_name: &str,
        project_name: &str,
        language_dir: &str,
    ) -> Self {
        let project_root = root_directory.as_ref().join(project_name);
        let package_path: PathBuf = package_name.split('.').collect();

        let main_path =
            project_root.join("src").join("main").join(language_dir).join(&package_path);
        let test_path =
            project_root.join("src").join("test").join(language_dir).join(&package_path);
        let solidity_path = project_root.join("src").join("main").join("solidity");
        let wrapper_path = project_root.join("gradle").join("wrapper");
        let wallet_path =
            project_root.join("src").join("main").join("resources").join("wallet");
        let generated_wrappers = project_root
            .join("build")
            .join("generated")
            .join("sources")
            .join("web3j")
            .join("main")
            .join(language_dir);

        ProjectStructure {
            project_name: project_name.to_string(),
            package_name: package_name.to_string(),
            project_root,
            main_path,
            test_path,
            solidity_path,
            wrapper_path,
            wallet_path,
            generated_wrappers,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn main_path(&self) -> &Path {
        &self.main_path
    }

    pub fn test_path(&self) -> &Path {
        &self.test_path
    }

    pub fn solidity_path(&self) -> &Path {
        &self.solidity_path
    }

    pub fn wrapper_path(&self) -> &Path {
        &self.wrapper_path
    }

    pub fn wallet_path(&self) -> &Path {
        &self.wallet_path
    }

    /// Where the build tool places compiled contract wrapper sources.
    pub fn generated_wrappers(&self) -> &Path {
        &self.generated_wrappers
    }

    pub fn create_main_directory(&self) -> Result<()> {
        create_directory(&self.main_path)
    }

    pub fn create_test_directory(&self) -> Result<()> {
        create_directory(&self.test_path)
    }

    pub fn create_solidity_directory(&self) -> Result<()> {
        create_directory(&self.solidity_path)
    }

    pub fn create_wrapper_directory(&self) -> Result<()> {
        create_directory(&self.wrapper_path)
    }

    pub fn create_wallet_directory(&self) -> Result<()> {
        create_directory(&self.wallet_path)
    }
}

fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::filesystem(path, e))
}
