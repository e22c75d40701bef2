//! CLI module for headergen
//!
//! Reads a resolved compilation unit serialized as JSON and writes its Objective-C header.
//!
//! ## Commands
//!
//! - `emit <UNIT.json>` - Generate the header into the output directory (or stdout)
//! - `deps <UNIT.json>` - Print the forward declarations and includes the header would carry
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::HEADERGEN_VERSION;

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
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
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

/// Objective-C header generator for translated Java compilation units
#[derive(Parser, Debug)]
#[command(name = "headergen")]
#[command(version = HEADERGEN_VERSION)]
#[command(about = "Generate Objective-C headers from resolved Java compilation units", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the header of a compilation unit
    Emit {
        /// Compilation unit serialized as JSON
        #[arg(value_name = "UNIT")]
        file: PathBuf,
        /// Output directory; the header lands at its source-relative path (default: .)
        #[arg(short = 'o', long = "output", value_name = "OUT_DIR")]
        output_dir: Option<PathBuf>,
        /// Short prefix for a package, as `package=PREFIX` (repeatable)
        #[arg(long = "prefix", value_name = "PKG=PREFIX", value_parser = commands::parse_prefix)]
        prefixes: Vec<(String, String)>,
        /// Do not emit deprecation attributes and pragmas
        #[arg(long = "no-deprecated")]
        no_deprecated: bool,
        /// Spaces per indentation level
        #[arg(long = "indent", value_name = "N", default_value_t = 2)]
        indent: usize,
        /// Write the header to stdout instead of a file
        #[arg(long, conflicts_with = "output_dir")]
        stdout: bool,
    },

    /// Print the forward declarations and includes of a compilation unit
    Deps {
        /// Compilation unit serialized as JSON
        #[arg(value_name = "UNIT")]
        file: PathBuf,
        /// Short prefix for a package, as `package=PREFIX` (repeatable)
        #[arg(long = "prefix", value_name = "PKG=PREFIX", value_parser = commands::parse_prefix)]
        prefixes: Vec<(String, String)>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
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

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Emit {
            file,
            output_dir,
            prefixes,
            no_deprecated,
            indent,
            stdout,
        } => {
            let options = commands::EmitOptions {
                prefixes,
                generate_deprecated: !no_deprecated,
                indent_width: indent,
                output: if stdout {
                    commands::Output::Stdout
                } else {
                    commands::Output::Directory(output_dir.unwrap_or_else(|| PathBuf::from(".")))
                },
            };
            commands::emit_header(&file, &options)
        }
        Command::Deps { file, prefixes } => commands::print_dependencies(&file, &prefixes),
    }
}

// ============================================================================
// Tests
// ============================================================================
