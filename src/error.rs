//! Error handling for the solgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Custom error types for solgen operations.
///
/// Every failure in the scaffolding pipeline is terminal: nothing is retried
/// and no partial state is cleaned up.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents filesystem failures, carrying the offending path
    #[error("Filesystem error at '{path}': {source}.")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents an incomplete or contradictory project configuration,
    /// reported before any disk mutation
    #[error("Configuration error: {0}.")]
    Config(String),

    /// Represents rejected user input (project or package identifiers)
    #[error("Validation error: {0}.")]
    Validation(String),

    /// Represents errors during template lookup or rendering
    #[error("Template error: {0}.")]
    Template(String),

    /// Represents failures of the wallet keystore primitive
    #[error("Wallet generation error: {0}.")]
    Crypto(String),

    /// Represents a non-zero exit of the external build tool
    #[error("Build tool exited with status {status}.")]
    BuildTool { status: i32 },
}

impl Error {
    /// Wraps an I/O error together with the path the operation failed on.
    pub fn filesystem(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Filesystem { path: path.as_ref().to_path_buf(), source }
    }
}

/// Convenience type alias for Results with solgen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
