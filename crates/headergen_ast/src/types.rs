//! Type references and modifier sets.

use serde::{Deserialize, Serialize};

use headergen_core::lang::primitives::PrimitiveKind;

/// What a [`TypeBinding`] denotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Primitive(PrimitiveKind),
    Class,
    Interface,
    Enum,
    Annotation,
    /// Array with the given element type.
    Array(Box<TypeBinding>),
    /// Type variable with its (erased) bound, if any.
    TypeVariable(Option<Box<TypeBinding>>),
}

/// A resolved reference to a type.
///
/// `name` is the simple name; nested types join their enclosing names with `.` (`Map.Entry`).
/// Primitives, arrays and type variables carry an empty package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBinding {
    #[serde(default)]
    pub package: String,
    pub name: String,
    pub kind: TypeKind,
}

impl TypeBinding {
    pub fn new(package: impl Into<String>, name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, TypeKind::Class)
    }

    pub fn interface(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, TypeKind::Interface)
    }

    pub fn enum_type(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, TypeKind::Enum)
    }

    pub fn annotation(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, TypeKind::Annotation)
    }

    pub fn primitive(kind: PrimitiveKind) -> Self {
        let name = headergen_core::lang::primitives::java_name(kind);
        Self::new("", name, TypeKind::Primitive(kind))
    }

    pub fn array(element: TypeBinding) -> Self {
        let name = format!("{}[]", element.name);
        Self::new("", name, TypeKind::Array(Box::new(element)))
    }

    pub fn type_variable(name: impl Into<String>, bound: Option<TypeBinding>) -> Self {
        Self::new("", name, TypeKind::TypeVariable(bound.map(Box::new)))
    }

    /// Qualified source name (`java.util.Map.Entry`).
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Simple name of the innermost type (`Entry` for `Map.Entry`).
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Name of the outermost enclosing type (`Map` for `Map.Entry`).
    pub fn top_level_name(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self.kind {
            TypeKind::Primitive(kind) => Some(kind),
            _ => None,
        }
    }

    /// Interfaces and annotation types are both rendered as protocols.
    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface | TypeKind::Annotation)
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array(_))
    }
}

/// Declaration modifiers relevant to header emission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(rename = "native")]
    pub is_native: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_native(mut self) -> Self {
        self.is_native = true;
        self
    }

    /// `static final`, the modifier set of constants.
    pub fn constant() -> Self {
        Self::none().with_static().with_final()
    }
}
