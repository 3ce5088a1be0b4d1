//! solgen scaffolds smart-contract client projects: it lays out the
//! directory tree, renders the build and starter-source templates,
//! optionally generates a password-protected wallet, invokes the external
//! build tool and optionally emits test scaffolding.

/// Command-line interface module for the solgen application
pub mod cli;

/// Error types and handling for the solgen application
pub mod error;

/// OS-conditional build-tool command selection and subprocess execution
pub mod platform;

/// Progress-reporting seam used by the orchestrator
pub mod progress;

/// Project orchestration: builder, variants and the end-to-end run
pub mod project;

/// Interactive fallback prompts for missing command-line values
pub mod prompt;

/// Template roles, replacement values and rendering
pub mod provider;

/// Canonical directory layout of a generated project
pub mod structure;

/// Embedded template resources
pub mod templates;

/// Test scaffolding for compiled contract wrappers
pub mod testgen;

/// Identifier validation for project and package names
pub mod verifier;

/// Wallet keystore and password-file generation
pub mod wallet;

/// Disk persistence for rendered templates and copied resources
pub mod writer;
