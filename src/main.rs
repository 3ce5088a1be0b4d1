//! solgen's main application entry point.
//! Parses arguments, fills missing values interactively, validates them and
//! hands the configured project to the orchestrator.

use std::path::PathBuf;

use solgen::{
    cli::{get_args, Args, ProjectOpts, ScaffoldCommand},
    error::{default_error_handler, Result},
    project::{Command, ProjectBuilder, Variant},
    prompt,
};

fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        ScaffoldCommand::New(opts) => scaffold(Command::New, opts, None),
        ScaffoldCommand::Import { opts, solidity_path } => {
            scaffold(Command::Import, opts, Some(solidity_path))
        }
    }
}

/// Resolves the project configuration (prompting for anything missing),
/// validates it and runs the scaffold end to end.
fn scaffold(
    command: Command,
    opts: ProjectOpts,
    solidity_path: Option<PathBuf>,
) -> Result<()> {
    let project_name = match opts.name {
        Some(name) => name,
        None => prompt::project_name()?,
    };
    let package_name = match opts.package {
        Some(package) => package,
        None => prompt::package_name()?,
    };
    let output_dir = match opts.output_dir {
        Some(dir) => dir,
        None => prompt::project_destination()?,
    };
    let variant = if opts.kotlin { Variant::Kotlin } else { Variant::Java };

    let mut builder = ProjectBuilder::new(command, variant)
        .with_project_name(&project_name)
        .with_package_name(&package_name)
        .with_root_directory(&output_dir)
        .with_wallet(opts.wallet)
        .with_tests(opts.tests)
        .with_fat_jar(opts.fat_jar);
    if let Some(path) = solidity_path {
        builder = builder.with_solidity_import_path(path);
    }

    let project = builder.build()?;
    project.create_project()?;

    println!(
        "Project '{}' created successfully in {}.",
        project_name,
        output_dir.display()
    );
    Ok(())
}
