//! Type declarations and their members.

use serde::{Deserialize, Serialize};

use crate::bindings::{MethodBinding, MethodKind, VariableBinding};
use crate::types::{Modifiers, TypeBinding, TypeKind};

/// Simple and qualified spellings of the deprecation marker.
const DEPRECATED_SIMPLE: &str = "Deprecated";
const DEPRECATED_QUALIFIED: &str = "java.lang.Deprecated";

fn default_true() -> bool {
    true
}

/// An annotation applied to a declaration, as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// `Deprecated` or `java.lang.Deprecated`: the name exactly as it appeared at the use site.
    pub type_name: String,
}

impl Annotation {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.type_name.contains('.')
    }

    /// A qualified use must name `java.lang.Deprecated`; a simple one must be `Deprecated`.
    pub fn is_deprecated(&self) -> bool {
        let expected = if self.is_qualified() {
            DEPRECATED_QUALIFIED
        } else {
            DEPRECATED_SIMPLE
        };
        self.type_name == expected
    }
}

/// Check whether any annotation in the list marks the declaration deprecated.
pub fn has_deprecated(annotations: &[Annotation]) -> bool {
    annotations.iter().any(Annotation::is_deprecated)
}

/// How long an annotation type is retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    Source,
    #[default]
    Class,
    Runtime,
}

/// One declared name within a field declaration (`a` in `int a, b;`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarationFragment {
    pub binding: VariableBinding,
}

impl VariableDeclarationFragment {
    pub fn new(binding: VariableBinding) -> Self {
        Self { binding }
    }

    pub fn name(&self) -> &str {
        &self.binding.name
    }
}

/// A field declaration: one or more fragments sharing a declared type and modifier set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    #[serde(rename = "type")]
    pub ty: TypeBinding,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub doc: Option<String>,
    pub fragments: Vec<VariableDeclarationFragment>,
}

impl FieldDeclaration {
    pub fn new(ty: TypeBinding, modifiers: Modifiers) -> Self {
        Self {
            ty,
            modifiers,
            doc: None,
            fragments: Vec::new(),
        }
    }

    /// Add a fragment whose binding shares this declaration's type and modifiers.
    pub fn with_fragment(mut self, name: impl Into<String>) -> Self {
        let binding = VariableBinding::new(name, self.ty.clone(), self.modifiers);
        self.fragments.push(VariableDeclarationFragment::new(binding));
        self
    }

    pub fn with_binding(mut self, binding: VariableBinding) -> Self {
        self.fragments.push(VariableDeclarationFragment::new(binding));
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static
    }
}

/// A method, constructor or normalized static initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub binding: MethodBinding,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Whether a recognized native body accompanies a `native` method.
    #[serde(default)]
    pub has_native_code: bool,
}

impl MethodDeclaration {
    pub fn new(binding: MethodBinding) -> Self {
        Self {
            binding,
            doc: None,
            annotations: Vec::new(),
            has_native_code: false,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_native_code(mut self) -> Self {
        self.has_native_code = true;
        self
    }

    pub fn has_native_code(&self) -> bool {
        self.has_native_code
    }

    /// A `native` method whose body must be supplied outside the generated unit.
    pub fn is_external_native(&self) -> bool {
        self.binding.is_native() && !self.has_native_code
    }

    /// Whether this method makes the declaring type need a static initialization guard.
    pub fn is_initialize_method(&self) -> bool {
        self.binding.kind == MethodKind::StaticInitializer
    }

    pub fn is_deprecated(&self) -> bool {
        has_deprecated(&self.annotations)
    }
}

/// A class or interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub binding: TypeBinding,
    #[serde(default)]
    pub superclass: Option<TypeBinding>,
    #[serde(default)]
    pub superinterfaces: Vec<TypeBinding>,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
    #[serde(default = "default_true")]
    pub top_level: bool,
}

impl TypeDeclaration {
    pub fn new(binding: TypeBinding) -> Self {
        Self {
            binding,
            superclass: None,
            superinterfaces: Vec::new(),
            modifiers: Modifiers::none(),
            annotations: Vec::new(),
            doc: None,
            fields: Vec::new(),
            methods: Vec::new(),
            top_level: true,
        }
    }

    pub fn with_superclass(mut self, superclass: TypeBinding) -> Self {
        self.superclass = Some(superclass);
        self
    }

    pub fn with_interface(mut self, interface: TypeBinding) -> Self {
        self.superinterfaces.push(interface);
        self
    }

    pub fn with_field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn nested(mut self) -> Self {
        self.top_level = false;
        self
    }

    pub fn is_interface(&self) -> bool {
        self.binding.kind == TypeKind::Interface
    }

    pub fn is_deprecated(&self) -> bool {
        has_deprecated(&self.annotations)
    }
}

/// One constant of an enum. Its ordinal is its position in [`EnumDeclaration::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumConstantDeclaration {
    pub name: String,
    pub binding: VariableBinding,
}

impl EnumConstantDeclaration {
    /// Build a constant whose binding is a `static final` field of the enum type.
    pub fn new(name: impl Into<String>, enum_type: &TypeBinding) -> Self {
        let name = name.into();
        let mut binding = VariableBinding::new(name.clone(), enum_type.clone(), Modifiers::constant());
        binding.enum_constant = true;
        Self { name, binding }
    }
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    pub binding: TypeBinding,
    #[serde(default)]
    pub interfaces: Vec<TypeBinding>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub constants: Vec<EnumConstantDeclaration>,
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
    #[serde(default = "default_true")]
    pub top_level: bool,
}

impl EnumDeclaration {
    pub fn new(binding: TypeBinding) -> Self {
        Self {
            binding,
            interfaces: Vec::new(),
            annotations: Vec::new(),
            doc: None,
            constants: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            top_level: true,
        }
    }

    pub fn with_constant(mut self, name: impl Into<String>) -> Self {
        let constant = EnumConstantDeclaration::new(name, &self.binding);
        self.constants.push(constant);
        self
    }

    pub fn with_interface(mut self, interface: TypeBinding) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_deprecated(&self) -> bool {
        has_deprecated(&self.annotations)
    }
}

/// A member of an annotation type (`String value() default "";`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationTypeMemberDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeBinding,
    /// Source text of the default expression, if any.
    #[serde(default)]
    pub default_value: Option<String>,
}

impl AnnotationTypeMemberDeclaration {
    pub fn new(name: impl Into<String>, ty: TypeBinding) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }
}

/// An annotation type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationTypeDeclaration {
    pub binding: TypeBinding,
    #[serde(default)]
    pub retention: RetentionPolicy,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub members: Vec<AnnotationTypeMemberDeclaration>,
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
    #[serde(default = "default_true")]
    pub top_level: bool,
}

impl AnnotationTypeDeclaration {
    pub fn new(binding: TypeBinding) -> Self {
        Self {
            binding,
            retention: RetentionPolicy::default(),
            annotations: Vec::new(),
            doc: None,
            members: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            top_level: true,
        }
    }

    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }

    pub fn with_member(mut self, member: AnnotationTypeMemberDeclaration) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }

    pub fn is_runtime_retained(&self) -> bool {
        self.retention == RetentionPolicy::Runtime
    }
}
