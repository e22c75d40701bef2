//! Resolved declaration model for header emission.
//!
//! Upstream phases (parsing, binding resolution) produce these values; the header emitter only reads
//! them. Every type derives `serde` traits so a unit can be handed over as JSON.
//!
//! ## Modules
//!
//! - [`types`]: type references and modifiers
//! - [`bindings`]: resolved variable/method bindings and constant values
//! - [`decl`]: declarations and their members
//! - [`unit`]: compilation units and header dependency records

pub mod bindings;
pub mod decl;
pub mod types;
pub mod unit;

pub use bindings::{ConstantValue, MethodBinding, MethodKind, Parameter, VariableBinding};
pub use decl::{
    Annotation, AnnotationTypeDeclaration, AnnotationTypeMemberDeclaration, EnumConstantDeclaration, EnumDeclaration,
    FieldDeclaration, MethodDeclaration, RetentionPolicy, TypeDeclaration, VariableDeclarationFragment, has_deprecated,
};
pub use headergen_core::lang::primitives::PrimitiveKind;
pub use types::{Modifiers, TypeBinding, TypeKind};
pub use unit::{CompilationUnit, Declaration, HeaderDependencies, Import};
