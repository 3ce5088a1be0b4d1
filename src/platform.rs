//! OS-conditional subprocess plumbing for the external build tool.
//! Everything platform-specific lives here; the orchestrator only deals in
//! command vectors.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Name of the wrapper launcher script on the current platform.
pub fn launcher_name() -> &'static str {
    if cfg!(windows) {
        "gradlew.bat"
    } else {
        "gradlew"
    }
}

/// Command line that compiles the generated project.
pub fn build_command() -> Vec<String> {
    wrapper_command("build")
}

/// Command line that packages the project into a fat jar.
pub fn fat_jar_command() -> Vec<String> {
    wrapper_command("shadowJar")
}

fn wrapper_command(task: &str) -> Vec<String> {
    if cfg!(windows) {
        vec![
            "cmd.exe".to_string(),
            "/c".to_string(),
            format!("gradlew.bat {} -q", task),
        ]
    } else {
        vec![
            "bash".to_string(),
            "-c".to_string(),
            format!("./gradlew {} -q", task),
        ]
    }
}

/// Marks the wrapper launcher executable. A no-op on Windows.
pub fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o755);
        std::fs::set_permissions(path, permissions)
            .map_err(|e| Error::filesystem(path, e))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

/// Runs a command in `working_dir` with stdout/stderr inherited, blocking
/// until the child exits. There is no timeout and no retry; a non-zero exit
/// code is a fatal build-tool error.
pub fn execute(working_dir: &Path, command: &[String]) -> Result<()> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Config("build command must not be empty".to_string()))?;
    let status = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::filesystem(working_dir, e))?;

    if !status.success() {
        return Err(Error::BuildTool { status: status.code().unwrap_or(-1) });
    }
    Ok(())
}
