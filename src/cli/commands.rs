//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use headergen_ast::CompilationUnit;

use crate::config::HeaderConfig;
use crate::dependencies::{DependencyCollector, HeaderImportCollector};
use crate::emit::imports::{forward_declaration, include_statement};
use crate::emit::unit::header_file_name;
use crate::emit::{EmitError, HeaderGenerator};
use crate::naming::JavaNamingPolicy;

use super::{CliError, CliResult, ExitCode};

/// Where `emit` writes the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    /// Root directory; the header goes to its source-relative path below it.
    Directory(PathBuf),
}

/// Options of the `emit` command.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub prefixes: Vec<(String, String)>,
    pub generate_deprecated: bool,
    pub indent_width: usize,
    pub output: Output,
}

/// Parse a `package=PREFIX` argument.
pub fn parse_prefix(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((package, prefix)) if !package.is_empty() && !prefix.is_empty() => {
            Ok((package.to_string(), prefix.to_string()))
        }
        _ => Err(format!("expected `package=PREFIX`, got `{}`", arg)),
    }
}

/// Read and deserialize a compilation unit.
pub fn load_unit(path: &Path) -> CliResult<CompilationUnit> {
    let source = fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading {}: {}", path.display(), e)))?;
    let unit: CompilationUnit = serde_json::from_str(&source)
        .map_err(|e| CliError::failure(format!("Error parsing {}: {}", path.display(), e)))?;
    if unit.types.is_empty() {
        tracing::warn!(source = %unit.source_file, "compilation unit declares no types");
    }
    Ok(unit)
}

fn naming_policy(prefixes: &[(String, String)]) -> JavaNamingPolicy {
    prefixes
        .iter()
        .fold(JavaNamingPolicy::new(), |naming, (package, prefix)| {
            naming.with_prefix(package.as_str(), prefix.as_str())
        })
}

/// Render an emission error with its diagnostic code and help.
fn render_emit_error(err: EmitError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

/// Reject header paths that would escape the output directory.
fn validate_header_path(header: &Path) -> CliResult<()> {
    let escapes = header
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if escapes {
        return Err(CliError::failure(format!(
            "Header path '{}' must stay inside the output directory",
            header.display()
        )));
    }
    Ok(())
}

/// Generate the header text of a unit with the given options.
pub fn generate_header(unit: &CompilationUnit, options: &EmitOptions) -> CliResult<String> {
    let naming = naming_policy(&options.prefixes);
    let collector = HeaderImportCollector::new(&naming);
    let config = HeaderConfig::new()
        .with_indent_width(options.indent_width)
        .with_deprecated_declarations(options.generate_deprecated);
    HeaderGenerator::new(&naming, &collector)
        .with_config(config)
        .generate(unit)
        .map_err(render_emit_error)
}

/// `emit`: generate and write the header of one unit.
pub fn emit_header(file: &Path, options: &EmitOptions) -> CliResult<ExitCode> {
    let unit = load_unit(file)?;
    let header = generate_header(&unit, options)?;

    match &options.output {
        Output::Stdout => print!("{}", header),
        Output::Directory(dir) => {
            let relative = PathBuf::from(header_file_name(&unit));
            validate_header_path(&relative)?;
            let target = dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| CliError::failure(format!("Error creating {}: {}", parent.display(), e)))?;
            }
            fs::write(&target, header)
                .map_err(|e| CliError::failure(format!("Error writing {}: {}", target.display(), e)))?;
            tracing::info!(header = %target.display(), "header written");
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// `deps`: print forward declarations, then includes, one statement per line.
pub fn print_dependencies(file: &Path, prefixes: &[(String, String)]) -> CliResult<ExitCode> {
    let unit = load_unit(file)?;
    let naming = naming_policy(prefixes);
    let deps = HeaderImportCollector::new(&naming).collect(&unit);
    for import in &deps.forward_declarations {
        println!("{}", forward_declaration(import));
    }
    for import in &deps.super_types {
        println!("{}", include_statement(import));
    }
    Ok(ExitCode::SUCCESS)
}
