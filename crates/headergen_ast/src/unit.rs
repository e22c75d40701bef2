//! Compilation units and header dependency records.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decl::{AnnotationTypeDeclaration, EnumDeclaration, FieldDeclaration, MethodDeclaration, TypeDeclaration};
use crate::types::TypeBinding;

/// A top-level declaration of a compilation unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "declaration", rename_all = "snake_case")]
pub enum Declaration {
    /// Class or interface.
    Type(TypeDeclaration),
    Enum(EnumDeclaration),
    Annotation(AnnotationTypeDeclaration),
}

impl Declaration {
    pub fn binding(&self) -> &TypeBinding {
        match self {
            Declaration::Type(decl) => &decl.binding,
            Declaration::Enum(decl) => &decl.binding,
            Declaration::Annotation(decl) => &decl.binding,
        }
    }

    pub fn fields(&self) -> &[FieldDeclaration] {
        match self {
            Declaration::Type(decl) => &decl.fields,
            Declaration::Enum(decl) => &decl.fields,
            Declaration::Annotation(decl) => &decl.fields,
        }
    }

    pub fn methods(&self) -> &[MethodDeclaration] {
        match self {
            Declaration::Type(decl) => &decl.methods,
            Declaration::Enum(decl) => &decl.methods,
            Declaration::Annotation(decl) => &decl.methods,
        }
    }

    pub fn is_top_level(&self) -> bool {
        match self {
            Declaration::Type(decl) => decl.top_level,
            Declaration::Enum(decl) => decl.top_level,
            Declaration::Annotation(decl) => decl.top_level,
        }
    }
}

impl From<TypeDeclaration> for Declaration {
    fn from(decl: TypeDeclaration) -> Self {
        Declaration::Type(decl)
    }
}

impl From<EnumDeclaration> for Declaration {
    fn from(decl: EnumDeclaration) -> Self {
        Declaration::Enum(decl)
    }
}

impl From<AnnotationTypeDeclaration> for Declaration {
    fn from(decl: AnnotationTypeDeclaration) -> Self {
        Declaration::Annotation(decl)
    }
}

/// One resolved source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    #[serde(default)]
    pub package: String,
    /// Path of the source file as given to the translator (`com/example/Foo.java`).
    pub source_file: String,
    /// Declarations in source order, nested types already hoisted.
    #[serde(default)]
    pub types: Vec<Declaration>,
}

impl CompilationUnit {
    pub fn new(package: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            source_file: source_file.into(),
            types: Vec::new(),
        }
    }

    pub fn with_declaration(mut self, decl: impl Into<Declaration>) -> Self {
        self.types.push(decl.into());
        self
    }

    /// File name of the source without directories or extension (`Foo`).
    pub fn source_stem(&self) -> &str {
        Path::new(&self.source_file)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.source_file)
    }

    /// Find the declaration whose name matches the source file stem.
    pub fn main_declaration(&self) -> Option<&Declaration> {
        let stem = self.source_stem();
        self.types
            .iter()
            .find(|decl| decl.is_top_level() && decl.binding().name == stem)
    }
}

/// A type reference a header depends on.
///
/// Ordering is by target type name first, which is the order forward declarations and includes are
/// printed in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Import {
    /// Target-language type name (`ComExampleFoo`).
    pub type_name: String,
    /// Header path without extension (`com/example/Foo`).
    pub import_file_name: String,
    pub is_interface: bool,
}

impl Import {
    pub fn new(type_name: impl Into<String>, import_file_name: impl Into<String>, is_interface: bool) -> Self {
        Self {
            type_name: type_name.into(),
            import_file_name: import_file_name.into(),
            is_interface,
        }
    }
}

/// Dependencies of one header: types that only need a forward declaration, and supertypes whose
/// headers must be included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDependencies {
    pub forward_declarations: BTreeSet<Import>,
    pub super_types: BTreeSet<Import>,
}

impl HeaderDependencies {
    pub fn is_empty(&self) -> bool {
        self.forward_declarations.is_empty() && self.super_types.is_empty()
    }
}
