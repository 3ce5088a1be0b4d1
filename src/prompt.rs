//! Interactive fallback prompts for values not supplied on the command line.
//! Each prompt re-asks until the identifier validator accepts the input.

use std::path::PathBuf;

use dialoguer::Input;

use crate::error::{Error, Result};
use crate::verifier;

pub fn project_name() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Please enter the project name")
            .interact_text()
            .map_err(|e| Error::Config(e.to_string()))?;
        if verifier::class_name_is_valid(&input) {
            return Ok(input);
        }
        println!("'{}' is not a valid project name.", input);
    }
}

pub fn package_name() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Please enter the package name for your project")
            .interact_text()
            .map_err(|e| Error::Config(e.to_string()))?;
        if verifier::package_name_is_valid(&input) {
            return Ok(input);
        }
        println!("'{}' is not a valid package name.", input);
    }
}

/// Asks for the destination directory, defaulting to the current directory.
pub fn project_destination() -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("Please enter the destination of your project")
        .default(".".to_string())
        .interact_text()
        .map_err(|e| Error::Config(e.to_string()))?;
    Ok(PathBuf::from(input))
}
