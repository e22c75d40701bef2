//! Whole-unit header generation.

use std::path::Path;

use headergen_ast::{CompilationUnit, Declaration};

use super::annotations::write_annotation_declaration;
use super::enums::write_enum_declaration;
use super::imports::{write_file_epilogue, write_file_prologue};
use super::types::write_type_declaration;
use super::{EmitContext, EmitError};
use crate::config::HeaderConfig;
use crate::dependencies::DependencyCollector;
use crate::naming::NamingPolicy;

/// Generates the header text of a compilation unit.
///
/// The generator holds no per-unit state; one instance can serve any number of units.
///
/// ## Examples
/// ```rust
/// use headergen::{HeaderGenerator, HeaderImportCollector, JavaNamingPolicy};
/// use headergen_ast::{CompilationUnit, TypeBinding, TypeDeclaration};
///
/// let naming = JavaNamingPolicy::new();
/// let collector = HeaderImportCollector::new(&naming);
/// let unit = CompilationUnit::new("com.example", "com/example/Foo.java")
///     .with_declaration(TypeDeclaration::new(TypeBinding::class("com.example", "Foo")));
///
/// let header = HeaderGenerator::new(&naming, &collector).generate(&unit).unwrap();
/// assert!(header.contains("@interface ComExampleFoo : NSObject {\n}\n"));
/// assert!(header.ends_with("#endif // _ComExampleFoo_H_\n"));
/// ```
pub struct HeaderGenerator<'a> {
    naming: &'a dyn NamingPolicy,
    collector: &'a dyn DependencyCollector,
    config: HeaderConfig,
}

impl<'a> HeaderGenerator<'a> {
    pub fn new(naming: &'a dyn NamingPolicy, collector: &'a dyn DependencyCollector) -> Self {
        Self {
            naming,
            collector,
            config: HeaderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: HeaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Generate the complete header for `unit`.
    ///
    /// Emission stops at the first malformed declaration; no partial header is returned.
    #[tracing::instrument(skip_all, fields(source = %unit.source_file))]
    pub fn generate(&self, unit: &CompilationUnit) -> Result<String, EmitError> {
        let mut ctx = EmitContext::new(self.naming, &self.config);
        let main_type_name = self.naming.main_type_name(unit);
        let deps = self.collector.collect(unit);

        ctx.out.writeln(&self.config.render_file_header(&unit.source_file));
        write_file_prologue(&mut ctx, &main_type_name, &deps);

        for decl in &unit.types {
            tracing::debug!(name = %decl.binding().qualified_name(), "emitting declaration");
            ctx.out.newline();
            match decl {
                Declaration::Type(decl) => write_type_declaration(&mut ctx, decl)?,
                Declaration::Enum(decl) => write_enum_declaration(&mut ctx, decl)?,
                Declaration::Annotation(decl) => write_annotation_declaration(&mut ctx, decl)?,
            }
        }

        write_file_epilogue(&mut ctx, &main_type_name);
        Ok(ctx.finish())
    }
}

/// Header path for a unit: its source path with the extension replaced by `h`.
pub fn header_file_name(unit: &CompilationUnit) -> String {
    Path::new(&unit.source_file)
        .with_extension("h")
        .to_string_lossy()
        .into_owned()
}
