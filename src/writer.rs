//! Disk persistence for rendered templates and copied resources.
//! All writes are synchronous; failures carry the offending path.

use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Writes text content to `directory/filename`, creating the file if absent
/// and overwriting it if present.
pub fn write_resource_file(content: &str, filename: &str, directory: &Path) -> Result<()> {
    let destination = directory.join(filename);
    debug!("Writing file: {}", destination.display());
    fs::create_dir_all(directory).map_err(|e| Error::filesystem(directory, e))?;
    fs::write(&destination, content).map_err(|e| Error::filesystem(&destination, e))
}

/// Copies an embedded binary resource byte-for-byte to `destination`.
pub fn copy_resource_file(bytes: &[u8], destination: &Path) -> Result<()> {
    debug!("Copying resource: {}", destination.display());
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::filesystem(parent, e))?;
    }
    fs::write(destination, bytes).map_err(|e| Error::filesystem(destination, e))
}

/// Copies a contract source (a single file or a whole tree) into the
/// project's solidity directory, preserving the directory structure.
///
/// A missing source path is a hard filesystem error, not a silent skip.
pub fn import_solidity_project(source: &Path, destination: &Path) -> Result<()> {
    if !source.exists() {
        return Err(Error::filesystem(
            source,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "solidity import path does not exist",
            ),
        ));
    }

    if source.is_file() {
        let file_name = source.file_name().ok_or_else(|| {
            Error::filesystem(
                source,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "solidity import path has no file name",
                ),
            )
        })?;
        let target = destination.join(file_name);
        fs::create_dir_all(destination).map_err(|e| Error::filesystem(destination, e))?;
        debug!("Importing contract source: {}", target.display());
        fs::copy(source, &target).map_err(|e| Error::filesystem(&target, e))?;
        return Ok(());
    }

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            Error::filesystem(path, e.into())
        })?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walkdir yields paths under its root");
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::filesystem(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::filesystem(parent, e))?;
            }
            debug!("Importing contract source: {}", target.display());
            fs::copy(entry.path(), &target).map_err(|e| Error::filesystem(&target, e))?;
        }
    }
    Ok(())
}
