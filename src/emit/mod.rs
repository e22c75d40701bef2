//! Emit Objective-C header text from a resolved compilation unit.
//!
//! [`HeaderGenerator`] is the entry point. It dispatches each top-level declaration to the
//! orchestrator for its kind; the orchestrators share the member-level helpers below.
//!
//! ## Notes
//! - Every helper takes an [`EmitContext`] by `&mut` and appends to its writer. There is no other
//!   state: one context lives for exactly one unit.
//! - Runtime spellings come from `headergen_core::lang::runtime` and must not be repeated inline.
//!
//! ## See also
//! - [`unit`]: file-level framing and declaration dispatch
//! - [`types`], [`enums`], [`annotations`]: per-kind orchestrators
//! - [`members`], [`statics`]: methods, instance variables and static accessors
//! - [`constants`]: literal rendering for `#define`d constants
//! - [`imports`]: guard, forward declarations and includes

pub mod annotations;
pub mod constants;
pub mod enums;
pub mod imports;
pub mod members;
pub mod statics;
pub mod types;
pub mod unit;
pub mod writer;


pub use unit::HeaderGenerator;
pub use writer::HeaderWriter;

use miette::Diagnostic;
use thiserror::Error;

use crate::config::HeaderConfig;
use crate::naming::NamingPolicy;

/// Error during header emission.
///
/// Inputs are expected to be validated upstream, so every variant is a violated model invariant.
/// Emission of the whole unit stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EmitError {
    #[error("field declaration in `{declaration}` has no variables")]
    #[diagnostic(
        code(headergen::emit::empty_field),
        help("every field declaration must declare at least one variable fragment")
    )]
    EmptyFieldDeclaration { declaration: String },

    #[error("constant `{field}` in `{declaration}` is declared `{expected}` but holds a `{found}` value")]
    #[diagnostic(
        code(headergen::emit::constant_kind_mismatch),
        help("the constant value must have the same kind as the field's primitive type")
    )]
    ConstantKindMismatch {
        declaration: String,
        field: String,
        expected: String,
        found: String,
    },
}

/// Per-unit emission state shared by all emitters.
pub struct EmitContext<'a> {
    pub out: HeaderWriter,
    pub naming: &'a dyn NamingPolicy,
    pub config: &'a HeaderConfig,
}

impl<'a> EmitContext<'a> {
    pub fn new(naming: &'a dyn NamingPolicy, config: &'a HeaderConfig) -> Self {
        Self {
            out: HeaderWriter::new(config.indent_width),
            naming,
            config,
        }
    }

    /// Whether deprecation attributes apply to a declaration carrying `@Deprecated`.
    pub fn needs_deprecated_attribute(&self, deprecated: bool) -> bool {
        self.config.generate_deprecated_declarations && deprecated
    }

    pub fn finish(self) -> String {
        self.out.finish()
    }
}
