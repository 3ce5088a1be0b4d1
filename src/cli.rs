//! Command-line interface implementation for solgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for solgen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "solgen: smart-contract client project scaffolding tool",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: ScaffoldCommand,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum ScaffoldCommand {
    /// Create a new project with a bundled sample contract
    New(ProjectOpts),

    /// Create a project wrapping an existing Solidity source tree
    Import {
        #[command(flatten)]
        opts: ProjectOpts,

        /// Path to the Solidity file or folder to import
        #[arg(short = 's', long = "solidity-path")]
        solidity_path: PathBuf,
    },
}

#[derive(ClapArgs, Debug)]
pub struct ProjectOpts {
    /// Project name; prompted for interactively when omitted
    #[arg(short = 'n', long = "project-name")]
    pub name: Option<String>,

    /// Package name for the generated sources; prompted for when omitted
    #[arg(short = 'p', long = "package-name")]
    pub package: Option<String>,

    /// Directory the project is created under; prompted for when omitted
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Generate a password-protected wallet for the project
    #[arg(short = 'w', long)]
    pub wallet: bool,

    /// Generate test scaffolding for the compiled contract wrappers
    #[arg(short = 't', long)]
    pub tests: bool,

    /// Package the compiled project into a fat jar
    #[arg(long)]
    pub fat_jar: bool,

    /// Generate Kotlin client sources instead of Java
    #[arg(short = 'k', long)]
    pub kotlin: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
