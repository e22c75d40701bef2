//! Resolved bindings for variables and methods.

use serde::{Deserialize, Serialize};

use crate::types::{Modifiers, TypeBinding};

/// A compile-time constant value, tagged with its source scalar kind.
///
/// `Char` holds a UTF-16 code unit, the source language's character representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantValue {
    Boolean(bool),
    Char(u16),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl ConstantValue {
    /// Name of the value's kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConstantValue::Boolean(_) => "boolean",
            ConstantValue::Char(_) => "char",
            ConstantValue::Byte(_) => "byte",
            ConstantValue::Short(_) => "short",
            ConstantValue::Int(_) => "int",
            ConstantValue::Long(_) => "long",
            ConstantValue::Float(_) => "float",
            ConstantValue::Double(_) => "double",
            ConstantValue::String(_) => "String",
        }
    }
}

/// The resolved binding of one field fragment (or enum constant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableBinding {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeBinding,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Present only for compile-time constants.
    #[serde(default)]
    pub constant_value: Option<ConstantValue>,
    /// Field is annotated as a non-owning reference.
    #[serde(default)]
    pub weak: bool,
    #[serde(default)]
    pub enum_constant: bool,
}

impl VariableBinding {
    pub fn new(name: impl Into<String>, ty: TypeBinding, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers,
            constant_value: None,
            weak: false,
            enum_constant: false,
        }
    }

    pub fn with_constant(mut self, value: ConstantValue) -> Self {
        self.constant_value = Some(value);
        self
    }

    pub fn with_weak(mut self) -> Self {
        self.weak = true;
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static
    }

    pub fn is_final(&self) -> bool {
        self.modifiers.is_final
    }

    pub fn is_weak(&self) -> bool {
        self.weak
    }

    /// A `static final` primitive with a compile-time value: substituted at every use site through a
    /// `#define`, so it never has storage of its own.
    pub fn is_primitive_constant(&self) -> bool {
        self.is_static() && self.is_final() && self.ty.is_primitive() && self.constant_value.is_some()
    }
}

/// What kind of body a method declaration has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Method,
    Constructor,
    /// A static initializer block normalized into a class initialization method.
    StaticInitializer,
}

/// A named, typed method parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeBinding,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeBinding) -> Self {
        Self { name: name.into(), ty }
    }
}

/// The resolved binding of a method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodBinding {
    pub name: String,
    #[serde(default)]
    pub kind: MethodKind,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub return_type: TypeBinding,
    /// Compiler-generated method with no source counterpart.
    #[serde(default)]
    pub synthetic: bool,
    /// Translated as a plain C function; never declared in the header.
    #[serde(default)]
    pub function: bool,
    /// Fixed native selector this method maps onto (e.g. `isEqual:`).
    #[serde(default)]
    pub mapped_selector: Option<String>,
}

impl MethodBinding {
    pub fn new(name: impl Into<String>, return_type: TypeBinding) -> Self {
        Self {
            name: name.into(),
            kind: MethodKind::Method,
            modifiers: Modifiers::none(),
            parameters: Vec::new(),
            return_type,
            synthetic: false,
            function: false,
            mapped_selector: None,
        }
    }

    pub fn with_kind(mut self, kind: MethodKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_mapped_selector(mut self, selector: impl Into<String>) -> Self {
        self.mapped_selector = Some(selector.into());
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static
    }

    pub fn is_native(&self) -> bool {
        self.modifiers.is_native
    }

    pub fn is_constructor(&self) -> bool {
        self.kind == MethodKind::Constructor
    }
}
