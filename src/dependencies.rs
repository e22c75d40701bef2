//! Header dependency collection
//!
//! Decides which referenced types a header includes and which it only forward-declares. Supertypes
//! must be fully visible (their headers are included); every other declared type referenced from a
//! field, method signature or annotation member only needs `@class` / `@protocol`.

use std::collections::BTreeSet;

use headergen_ast::{CompilationUnit, Declaration, HeaderDependencies, Import, TypeBinding, TypeKind};
use headergen_core::lang::{foundation, primitives, runtime};

use crate::naming::NamingPolicy;

/// Header files of the fixed runtime supertypes.
const ENUM_BASE_HEADER: &str = "java/lang/Enum";
const ANNOTATION_HEADER: &str = "java/lang/annotation/Annotation";

/// Dependency collection service consumed by the unit emitter.
pub trait DependencyCollector: Send + Sync {
    /// Collect the deduplicated forward declarations and supertype includes of a unit.
    fn collect(&self, unit: &CompilationUnit) -> HeaderDependencies;
}

/// Default collector, naming types through a [`NamingPolicy`].
pub struct HeaderImportCollector<'a> {
    naming: &'a dyn NamingPolicy,
}

impl<'a> HeaderImportCollector<'a> {
    pub fn new(naming: &'a dyn NamingPolicy) -> Self {
        Self { naming }
    }

    /// Header path of a declared type without extension: nested types live in their top-level type's header.
    fn import_file_name(ty: &TypeBinding) -> String {
        if ty.package.is_empty() {
            ty.top_level_name().to_string()
        } else {
            format!("{}/{}", ty.package.replace('.', "/"), ty.top_level_name())
        }
    }

    fn declared_import(&self, ty: &TypeBinding) -> Import {
        Import::new(self.naming.full_name(ty), Self::import_file_name(ty), ty.is_interface())
    }

    /// Add the forward declaration a type reference needs, if any.
    fn add_reference(&self, ty: &TypeBinding, out: &mut BTreeSet<Import>) {
        match &ty.kind {
            TypeKind::Primitive(_) | TypeKind::TypeVariable(_) => {}
            TypeKind::Array(element) => {
                let class = element
                    .primitive_kind()
                    .and_then(|kind| primitives::info_for(kind).array_type)
                    .unwrap_or(runtime::OBJECT_ARRAY);
                out.insert(Import::new(class, class, false));
            }
            _ => {
                if !foundation::is_foundation_type(&ty.qualified_name()) {
                    out.insert(self.declared_import(ty));
                }
            }
        }
    }

    fn add_super_type(&self, ty: &TypeBinding, out: &mut BTreeSet<Import>) {
        if !foundation::is_foundation_type(&ty.qualified_name()) {
            out.insert(self.declared_import(ty));
        }
    }

    fn collect_declaration(&self, decl: &Declaration, deps: &mut HeaderDependencies) {
        match decl {
            Declaration::Type(type_decl) => {
                if let Some(superclass) = &type_decl.superclass {
                    self.add_super_type(superclass, &mut deps.super_types);
                }
                for interface in &type_decl.superinterfaces {
                    self.add_super_type(interface, &mut deps.super_types);
                }
            }
            Declaration::Enum(enum_decl) => {
                deps.super_types
                    .insert(Import::new(runtime::ENUM_BASE, ENUM_BASE_HEADER, false));
                for interface in &enum_decl.interfaces {
                    self.add_super_type(interface, &mut deps.super_types);
                }
                deps.forward_declarations.insert(Import::new(
                    runtime::OBJECT_ARRAY,
                    runtime::OBJECT_ARRAY,
                    false,
                ));
            }
            Declaration::Annotation(annotation) => {
                deps.super_types
                    .insert(Import::new(runtime::ANNOTATION_PROTOCOL, ANNOTATION_HEADER, true));
                for member in &annotation.members {
                    self.add_reference(&member.ty, &mut deps.forward_declarations);
                }
            }
        }

        for field in decl.fields() {
            self.add_reference(&field.ty, &mut deps.forward_declarations);
        }
        for method in decl.methods() {
            self.add_reference(&method.binding.return_type, &mut deps.forward_declarations);
            for param in &method.binding.parameters {
                self.add_reference(&param.ty, &mut deps.forward_declarations);
            }
        }
    }
}

impl DependencyCollector for HeaderImportCollector<'_> {
    #[tracing::instrument(skip_all, fields(source = %unit.source_file, decl_count = unit.types.len()))]
    fn collect(&self, unit: &CompilationUnit) -> HeaderDependencies {
        let mut deps = HeaderDependencies::default();
        for decl in &unit.types {
            self.collect_declaration(decl, &mut deps);
        }

        // An included supertype is already fully declared.
        let included: BTreeSet<String> = deps.super_types.iter().map(|i| i.type_name.clone()).collect();
        deps.forward_declarations
            .retain(|import| !included.contains(&import.type_name));

        tracing::debug!(
            forward = deps.forward_declarations.len(),
            includes = deps.super_types.len(),
            "collected header dependencies"
        );
        deps
    }
}
