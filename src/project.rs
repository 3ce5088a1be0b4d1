//! Project orchestration: drives directory creation, wallet generation,
//! template rendering, the external build and the optional post-build steps
//! for one project-creation run.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::platform;
use crate::progress::{LogReporter, ProgressReporter};
use crate::provider::{TemplateProvider, TemplateProviderBuilder};
use crate::structure::ProjectStructure;
use crate::testgen::{JavaTestGenerator, KotlinTestGenerator, UnitTestGenerator};
use crate::verifier;
use crate::wallet::{self, ProjectWallet};
use crate::writer;

/// Whether a project is freshly created with a bundled sample contract, or
/// wraps an externally supplied contract source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New,
    Import,
}

/// Output ecosystem of the generated client source. Resolved once at
/// configuration time; the orchestrator body is variant-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Java,
    Kotlin,
}

impl Variant {
    /// Language segment of the source directory layout.
    pub fn language_dir(&self) -> &'static str {
        match self {
            Variant::Java => "java",
            Variant::Kotlin => "kotlin",
        }
    }

    pub fn source_extension(&self) -> &'static str {
        match self {
            Variant::Java => ".java",
            Variant::Kotlin => ".kt",
        }
    }

    /// Starter template id. The wallet-aware starter is only selected when a
    /// wallet is generated, so its wallet placeholders always resolve.
    pub fn starter_template(&self, with_wallet: bool) -> &'static str {
        match (self, with_wallet) {
            (Variant::Java, true) => "java/Template.java",
            (Variant::Java, false) => "java/EmptyTemplate.java",
            (Variant::Kotlin, true) => "kotlin/Template.kt",
            (Variant::Kotlin, false) => "kotlin/EmptyTemplate.kt",
        }
    }

    pub fn build_script_template(&self, command: Command) -> &'static str {
        match (self, command) {
            (Variant::Java, Command::New) => "java/build.gradle.template",
            (Variant::Java, Command::Import) => "java/build.gradleImport.template",
            (Variant::Kotlin, Command::New) => "kotlin/build.gradle.template",
            (Variant::Kotlin, Command::Import) => "kotlin/build.gradleImport.template",
        }
    }

    pub fn test_generator(&self, package_name: &str) -> Box<dyn UnitTestGenerator> {
        match self {
            Variant::Java => Box::new(JavaTestGenerator::new(package_name)),
            Variant::Kotlin => Box::new(KotlinTestGenerator::new(package_name)),
        }
    }
}

/// One configured project-creation run.
///
/// The stages are strictly sequential; a failure at any stage aborts the run
/// and partially created directories and files are left on disk.
pub struct Project {
    command: Command,
    variant: Variant,
    with_wallet: bool,
    with_tests: bool,
    with_fat_jar: bool,
    solidity_import_path: Option<PathBuf>,
    structure: ProjectStructure,
    reporter: Box<dyn ProgressReporter>,
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Project")
            .field("command", &self.command)
            .field("variant", &self.variant)
            .field("with_wallet", &self.with_wallet)
            .field("with_tests", &self.with_tests)
            .field("with_fat_jar", &self.with_fat_jar)
            .field("solidity_import_path", &self.solidity_import_path)
            .field("structure", &self.structure)
            .finish_non_exhaustive()
    }
}

impl Project {
    pub fn structure(&self) -> &ProjectStructure {
        &self.structure
    }

    /// Drives the full scaffold:
    /// directories, optional wallet, templates, build, optional tests,
    /// optional fat jar.
    pub fn create_project(&self) -> Result<()> {
        self.reporter
            .report(&format!("Creating project '{}'", self.structure.project_name));
        self.generate_top_level_directories()?;

        let project_wallet =
            if self.with_wallet { Some(self.generate_wallet()?) } else { None };

        let provider = self.template_provider(project_wallet.as_ref())?;
        provider.generate_files(&self.structure)?;

        self.reporter.report("Compiling the generated project");
        self.build_project()?;

        if self.with_tests {
            self.reporter.report("Generating contract wrapper tests");
            self.generate_tests()?;
        }
        if self.with_fat_jar {
            self.reporter.report("Packaging a fat jar");
            self.package_fat_jar()?;
        }

        self.reporter.report(&format!(
            "Project created at {}",
            self.structure.project_root().display()
        ));
        Ok(())
    }

    pub fn generate_top_level_directories(&self) -> Result<()> {
        self.structure.create_main_directory()?;
        self.structure.create_test_directory()?;
        self.structure.create_solidity_directory()?;
        self.structure.create_wrapper_directory()?;
        Ok(())
    }

    /// Creates the keystore and writes the plaintext password to a sibling
    /// file inside the wallet directory.
    pub fn generate_wallet(&self) -> Result<ProjectWallet> {
        self.structure.create_wallet_directory()?;
        let project_wallet = wallet::generate_wallet(self.structure.wallet_path())?;
        writer::write_resource_file(
            &project_wallet.password,
            &project_wallet.password_file_name,
            self.structure.wallet_path(),
        )?;
        Ok(project_wallet)
    }

    /// Assembles the template provider for this run's command and variant.
    pub fn template_provider(
        &self,
        project_wallet: Option<&ProjectWallet>,
    ) -> Result<TemplateProvider> {
        let starter_file_name = format!(
            "{}{}",
            verifier::capitalize_first_letter(&self.structure.project_name),
            self.variant.source_extension()
        );

        let mut builder = TemplateProviderBuilder::new(self.command)
            .with_project_name(&self.structure.project_name)
            .with_package_name(&self.structure.package_name)
            .with_starter_source(
                self.variant.starter_template(project_wallet.is_some()),
                &starter_file_name,
            )
            .with_build_script(self.variant.build_script_template(self.command))
            .with_build_settings("settings.gradle.template")
            .with_wrapper_settings("gradle/gradle-wrapper.properties.template")
            .with_wrapper_script("gradle/gradlew.template")
            .with_wrapper_bat_script("gradle/gradlew.bat.template")
            .with_wrapper_jar("gradle/gradle-wrapper.jar");

        if self.command == Command::New {
            builder = builder.with_sample_contract("HelloWorld.sol");
        }
        if let Some(path) = &self.solidity_import_path {
            builder = builder.with_solidity_import_path(path);
        }
        if let Some(project_wallet) = project_wallet {
            builder = builder
                .with_wallet_name(&project_wallet.wallet_name)
                .with_password_file_name(&project_wallet.password_file_name);
        }
        builder.build()
    }

    /// Marks the wrapper launcher executable and runs the build, blocking
    /// until the build tool exits.
    pub fn build_project(&self) -> Result<()> {
        let launcher = self.structure.project_root().join(platform::launcher_name());
        platform::set_executable(&launcher)?;
        platform::execute(self.structure.project_root(), &platform::build_command())
    }

    pub fn generate_tests(&self) -> Result<()> {
        let generator = self.variant.test_generator(&self.structure.package_name);
        generator.generate(self.structure.generated_wrappers(), self.structure.test_path())
    }

    pub fn package_fat_jar(&self) -> Result<()> {
        platform::execute(self.structure.project_root(), &platform::fat_jar_command())
    }
}

/// Validating configuration surface for [`Project`].
///
/// Identifier validation and command/flag consistency checks happen here,
/// before anything touches the disk.
pub struct ProjectBuilder {
    command: Command,
    variant: Variant,
    project_name: Option<String>,
    package_name: Option<String>,
    root_directory: Option<PathBuf>,
    solidity_import_path: Option<PathBuf>,
    with_wallet: bool,
    with_tests: bool,
    with_fat_jar: bool,
    reporter: Option<Box<dyn ProgressReporter>>,
}

impl ProjectBuilder {
    pub fn new(command: Command, variant: Variant) -> Self {
        ProjectBuilder {
            command,
            variant,
            project_name: None,
            package_name: None,
            root_directory: None,
            solidity_import_path: None,
            with_wallet: false,
            with_tests: false,
            with_fat_jar: false,
            reporter: None,
        }
    }

    pub fn with_project_name(mut self, project_name: &str) -> Self {
        self.project_name = Some(project_name.to_string());
        self
    }

    pub fn with_package_name(mut self, package_name: &str) -> Self {
        self.package_name = Some(package_name.to_string());
        self
    }

    pub fn with_root_directory(mut self, root_directory: impl Into<PathBuf>) -> Self {
        self.root_directory = Some(root_directory.into());
        self
    }

    pub fn with_solidity_import_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.solidity_import_path = Some(path.into());
        self
    }

    pub fn with_wallet(mut self, with_wallet: bool) -> Self {
        self.with_wallet = with_wallet;
        self
    }

    pub fn with_tests(mut self, with_tests: bool) -> Self {
        self.with_tests = with_tests;
        self
    }

    pub fn with_fat_jar(mut self, with_fat_jar: bool) -> Self {
        self.with_fat_jar = with_fat_jar;
        self
    }

    pub fn with_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn build(self) -> Result<Project> {
        let project_name = self
            .project_name
            .ok_or_else(|| Error::Config("project name is not set".to_string()))?;
        let package_name = self
            .package_name
            .ok_or_else(|| Error::Config("package name is not set".to_string()))?;
        let root_directory = self
            .root_directory
            .ok_or_else(|| Error::Config("root directory is not set".to_string()))?;

        if !verifier::required_args_are_not_empty(&[&project_name, &package_name]) {
            return Err(Error::Validation(
                "required parameters must not be empty".to_string(),
            ));
        }
        if !verifier::class_name_is_valid(&project_name) {
            return Err(Error::Validation(format!(
                "'{}' is not a valid project name",
                project_name
            )));
        }
        if !verifier::package_name_is_valid(&package_name) {
            return Err(Error::Validation(format!(
                "'{}' is not a valid package name",
                package_name
            )));
        }
        if self.command == Command::Import && self.solidity_import_path.is_none() {
            return Err(Error::Config(
                "an imported project requires a solidity source path".to_string(),
            ));
        }
        if self.command == Command::New && self.solidity_import_path.is_some() {
            return Err(Error::Config(
                "a solidity source path cannot be given for a new project".to_string(),
            ));
        }

        let structure = ProjectStructure::new(
            root_directory,
            &package_name,
            &project_name,
            self.variant.language_dir(),
        );

        Ok(Project {
            command: self.command,
            variant: self.variant,
            with_wallet: self.with_wallet,
            with_tests: self.with_tests,
            with_fat_jar: self.with_fat_jar,
            solidity_import_path: self.solidity_import_path,
            structure,
            reporter: self.reporter.unwrap_or_else(|| Box::new(LogReporter)),
        })
    }
}
