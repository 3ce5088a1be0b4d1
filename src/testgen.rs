//! Test scaffolding for compiled contract wrappers.
//! Invoked only after a successful build, when the generated wrapper
//! sources exist on disk.

use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::writer;

/// Emits test sources for the compiled contract wrappers found in
/// `wrapper_dir`, writing them under `test_dir`.
pub trait UnitTestGenerator {
    fn generate(&self, wrapper_dir: &Path, test_dir: &Path) -> Result<()>;
}

/// Test generator for the Java variant.
pub struct JavaTestGenerator {
    package_name: String,
}

impl JavaTestGenerator {
    pub fn new(package_name: &str) -> Self {
        JavaTestGenerator { package_name: package_name.to_string() }
    }
}

impl UnitTestGenerator for JavaTestGenerator {
    fn generate(&self, wrapper_dir: &Path, test_dir: &Path) -> Result<()> {
        for class_name in wrapper_class_names(wrapper_dir, "java")? {
            let content = format!(
                "package {package};\n\n\
                 public class {class}Test {{\n\n    \
                 // Exercise the deployed {class} wrapper here.\n\
                 }}\n",
                package = self.package_name,
                class = class_name,
            );
            writer::write_resource_file(&content, &format!("{}Test.java", class_name), test_dir)?;
        }
        Ok(())
    }
}

/// Test generator for the Kotlin variant.
pub struct KotlinTestGenerator {
    package_name: String,
}

impl KotlinTestGenerator {
    pub fn new(package_name: &str) -> Self {
        KotlinTestGenerator { package_name: package_name.to_string() }
    }
}

impl UnitTestGenerator for KotlinTestGenerator {
    fn generate(&self, wrapper_dir: &Path, test_dir: &Path) -> Result<()> {
        for class_name in wrapper_class_names(wrapper_dir, "kt")? {
            let content = format!(
                "package {package}\n\n\
                 class {class}Test {{\n\n    \
                 // Exercise the deployed {class} wrapper here.\n\
                 }}\n",
                package = self.package_name,
                class = class_name,
            );
            writer::write_resource_file(&content, &format!("{}Test.kt", class_name), test_dir)?;
        }
        Ok(())
    }
}

fn wrapper_class_names(wrapper_dir: &Path, extension: &str) -> Result<Vec<String>> {
    if !wrapper_dir.exists() {
        return Err(Error::filesystem(
            wrapper_dir,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "compiled wrapper directory does not exist",
            ),
        ));
    }

    let mut class_names = Vec::new();
    for entry in WalkDir::new(wrapper_dir) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(wrapper_dir).to_path_buf();
            Error::filesystem(path, e.into())
        })?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().and_then(|e| e.to_str()) == Some(extension)
        {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                debug!("Found compiled wrapper: {}", stem);
                class_names.push(stem.to_string());
            }
        }
    }
    Ok(class_names)
}
