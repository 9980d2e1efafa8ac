//! CLI module for optmapgen
//!
//! The surface is deliberately small: a bare invocation regenerates every
//! artifact into the current directory, `-h`/`--help` prints usage and
//! writes nothing. There are no other flags.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! `execute()` returns `CliResult<ExitCode>` instead of calling
//! `process::exit`; only the top-level `run()` function handles errors
//! and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::process;

use chrono::Datelike;
use clap::Parser;

use crate::driver::{self, EmitOptions};
use crate::registry::Registry;
use crate::version::VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Regenerate the kind-specific C++ and SWIG sources of optmap
#[derive(Parser, Debug)]
#[command(name = "optmapgen")]
#[command(version = VERSION)]
#[command(about = "Regenerate the kind-specific C++ and SWIG sources of optmap", long_about = None)]
pub struct Cli {}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. `execute()`
/// returns `CliResult` and errors are handled here. Help and version
/// requests exit inside `Cli::parse` before anything is written.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the generation run and return the exit code.
fn execute(_cli: Cli) -> CliResult<ExitCode> {
    let registry = Registry::default_set();
    let options = EmitOptions::new(".", chrono::Utc::now().year());

    let written = driver::emit_all(&registry, &options)
        .map_err(|e| CliError::failure(format!("optmapgen: {e}")))?;

    tracing::info!(artifact_count = written.len(), "regenerated optmap sources");
    Ok(ExitCode::SUCCESS)
}
