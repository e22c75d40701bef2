//! Target naming policy
//!
//! How source identifiers become target identifiers: full type names (package camel-casing, package
//! prefixes, nested-type joining, the enum suffix), object-type strings, instance and static variable
//! names, and method selectors.
//!
//! The emitters only see the [`NamingPolicy`] trait. [`JavaNamingPolicy`] is the default
//! implementation, following the J2ObjC runtime's conventions.

use std::collections::BTreeMap;

use headergen_ast::{
    AnnotationTypeDeclaration, AnnotationTypeMemberDeclaration, CompilationUnit, MethodBinding, Parameter, TypeBinding,
    TypeKind, VariableBinding,
};
use headergen_core::lang::{foundation, primitives, runtime};

/// Naming service consumed by the header emitters.
///
/// Implementations must be deterministic: the same binding always yields the same string.
pub trait NamingPolicy: Send + Sync {
    /// Full target name of a declared type (`ComExampleFoo`, `JavaUtilMap_Entry`, `ComExampleColorEnum`).
    fn full_name(&self, ty: &TypeBinding) -> String;

    /// Object-type string used in storage declarations and accessor macros (`int`, `id`,
    /// `NSString *`, `id<JavaUtilList>`).
    fn objc_type(&self, ty: &TypeBinding) -> String;

    /// Like [`NamingPolicy::objc_type`], but type variables resolve to their bound.
    fn specific_objc_type(&self, ty: &TypeBinding) -> String;

    /// Instance variable name of a field (`count_`).
    fn field_name(&self, var: &VariableBinding) -> String;

    /// Storage suffix of a static field, as used after `<Type>_` (`count_`; enum constants keep their name).
    fn static_var_name(&self, var: &VariableBinding) -> String;

    /// Macro name a primitive constant is `#define`d as (`ComExampleFoo_MAX`).
    fn primitive_constant_name(&self, declaring: &TypeBinding, var: &VariableBinding) -> String;

    /// Target-visible method name, before selector keywords are appended.
    fn method_name(&self, method: &MethodBinding) -> String;

    /// Property name of an annotation member.
    fn annotation_property_name(&self, member: &AnnotationTypeMemberDeclaration) -> String;

    /// Signature of a normal method, without terminator.
    fn method_declaration(&self, declaring: &TypeBinding, method: &MethodBinding) -> String;

    /// Signature of a constructor, without terminator.
    fn constructor_declaration(&self, declaring: &TypeBinding, method: &MethodBinding) -> String;

    /// Signature of a method mapped onto a fixed native selector, without terminator.
    fn mapped_method_declaration(&self, declaring: &TypeBinding, method: &MethodBinding, selector: &str) -> String;

    /// Signature of the member-wise constructor of a runtime annotation, without terminator.
    fn annotation_constructor_declaration(&self, decl: &AnnotationTypeDeclaration) -> String;

    /// Whether a package has a configured short-name prefix.
    fn has_prefix(&self, package: &str) -> bool;

    /// Name a prefixed type would have had without its prefix (`ComExampleFoo`).
    fn unprefixed_name(&self, ty: &TypeBinding) -> String;

    /// Name used in the header guard of a unit.
    fn main_type_name(&self, unit: &CompilationUnit) -> String;
}

/// Default naming policy.
///
/// ## Examples
/// ```rust
/// use headergen::naming::{JavaNamingPolicy, NamingPolicy};
/// use headergen_ast::TypeBinding;
///
/// let naming = JavaNamingPolicy::new().with_prefix("com.example.util", "CEU");
/// assert_eq!(naming.full_name(&TypeBinding::class("com.example", "Foo")), "ComExampleFoo");
/// assert_eq!(naming.full_name(&TypeBinding::class("com.example.util", "Bar")), "CEUBar");
/// assert_eq!(naming.objc_type(&TypeBinding::class("java.lang", "String")), "NSString *");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JavaNamingPolicy {
    /// Package name -> prefix replacing its camel-cased form.
    prefixes: BTreeMap<String, String>,
}

impl JavaNamingPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the camel-cased package name with `prefix` for types in `package`.
    pub fn with_prefix(mut self, package: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.prefixes.insert(package.into(), prefix.into());
        self
    }

    pub fn prefix_for(&self, package: &str) -> Option<&str> {
        self.prefixes.get(package).map(String::as_str)
    }

    fn package_prefix(&self, package: &str) -> String {
        match self.prefix_for(package) {
            Some(prefix) => prefix.to_string(),
            None => camel_case_qualified_name(package),
        }
    }

    /// Keyword fragment a parameter type contributes to a selector (`Int`, `NSString`, `Id`, `IntArray`).
    fn parameter_keyword(&self, ty: &TypeBinding) -> String {
        match &ty.kind {
            TypeKind::Primitive(kind) => primitives::capitalized(*kind),
            TypeKind::Array(element) => format!("{}Array", self.parameter_keyword(element)),
            TypeKind::TypeVariable(_) => "Id".to_string(),
            _ if ty.qualified_name() == foundation::OBJECT_QUALIFIED_NAME => "Id".to_string(),
            _ => self.full_name(ty),
        }
    }

    /// `withInt:(int)count withNSString:(NSString *)name`, with `first` replacing the leading `with`.
    fn keyword_parameters(&self, first: &str, parameters: &[Parameter]) -> String {
        let mut parts = Vec::with_capacity(parameters.len());
        for (i, param) in parameters.iter().enumerate() {
            let keyword = self.parameter_keyword(&param.ty);
            let lead = if i == 0 { first } else { "with" };
            parts.push(format!("{}{}:({}){}", lead, keyword, self.objc_type(&param.ty), param.name));
        }
        parts.join(" ")
    }

    fn return_type(&self, method: &MethodBinding) -> String {
        self.objc_type(&method.return_type)
    }
}

fn method_sign(method: &MethodBinding) -> char {
    if method.is_static() { '+' } else { '-' }
}

/// Upper-case the first character of `s`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Camel-case a dotted name: `com.example.Foo` -> `ComExampleFoo`.
pub fn camel_case_qualified_name(name: &str) -> String {
    name.split('.').filter(|part| !part.is_empty()).map(capitalize).collect()
}

impl NamingPolicy for JavaNamingPolicy {
    fn full_name(&self, ty: &TypeBinding) -> String {
        match &ty.kind {
            TypeKind::Primitive(kind) => primitives::objc_name(*kind).to_string(),
            TypeKind::Array(element) => match element.primitive_kind().and_then(|k| primitives::info_for(k).array_type) {
                Some(array) => array.to_string(),
                None => runtime::OBJECT_ARRAY.to_string(),
            },
            TypeKind::TypeVariable(_) => "id".to_string(),
            _ => {
                if let Some(mapped) = foundation::objc_name_for(&ty.qualified_name()) {
                    return mapped.to_string();
                }
                let mut name = self.package_prefix(&ty.package);
                name.push_str(&ty.name.replace('.', "_"));
                if ty.kind == TypeKind::Enum {
                    name.push_str(runtime::ENUM_SUFFIX);
                }
                name
            }
        }
    }

    fn objc_type(&self, ty: &TypeBinding) -> String {
        match &ty.kind {
            TypeKind::Primitive(kind) => primitives::objc_name(*kind).to_string(),
            TypeKind::TypeVariable(_) => "id".to_string(),
            TypeKind::Array(_) => format!("{} *", self.full_name(ty)),
            _ if ty.qualified_name() == foundation::OBJECT_QUALIFIED_NAME => "id".to_string(),
            _ if ty.is_interface() || is_foundation_protocol(ty) => format!("id<{}>", self.full_name(ty)),
            _ => format!("{} *", self.full_name(ty)),
        }
    }

    fn specific_objc_type(&self, ty: &TypeBinding) -> String {
        match &ty.kind {
            TypeKind::TypeVariable(Some(bound)) => self.specific_objc_type(bound),
            _ => self.objc_type(ty),
        }
    }

    fn field_name(&self, var: &VariableBinding) -> String {
        format!("{}_", var.name)
    }

    fn static_var_name(&self, var: &VariableBinding) -> String {
        if var.enum_constant {
            var.name.clone()
        } else {
            format!("{}_", var.name)
        }
    }

    fn primitive_constant_name(&self, declaring: &TypeBinding, var: &VariableBinding) -> String {
        format!("{}_{}", self.full_name(declaring), var.name)
    }

    fn method_name(&self, method: &MethodBinding) -> String {
        method.name.clone()
    }

    fn annotation_property_name(&self, member: &AnnotationTypeMemberDeclaration) -> String {
        member.name.clone()
    }

    fn method_declaration(&self, _declaring: &TypeBinding, method: &MethodBinding) -> String {
        let mut decl = format!("{} ({}){}", method_sign(method), self.return_type(method), self.method_name(method));
        if !method.parameters.is_empty() {
            decl.push_str(&self.keyword_parameters("With", &method.parameters));
        }
        decl
    }

    fn constructor_declaration(&self, _declaring: &TypeBinding, method: &MethodBinding) -> String {
        let mut decl = String::from("- (instancetype)init");
        if !method.parameters.is_empty() {
            decl.push_str(&self.keyword_parameters("With", &method.parameters));
        }
        decl
    }

    fn mapped_method_declaration(&self, _declaring: &TypeBinding, method: &MethodBinding, selector: &str) -> String {
        let mut decl = format!("{} ({})", method_sign(method), self.return_type(method));
        if method.parameters.is_empty() {
            decl.push_str(selector.trim_end_matches(':'));
            return decl;
        }
        let keywords = selector.split(':').filter(|k| !k.is_empty());
        let parts: Vec<String> = keywords
            .zip(&method.parameters)
            .map(|(keyword, param)| format!("{}:({}){}", keyword, self.objc_type(&param.ty), param.name))
            .collect();
        decl.push_str(&parts.join(" "));
        decl
    }

    fn annotation_constructor_declaration(&self, decl: &AnnotationTypeDeclaration) -> String {
        let mut members: Vec<&AnnotationTypeMemberDeclaration> = decl.members.iter().collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));

        let mut out = String::from("- (instancetype)init");
        for (i, member) in members.iter().enumerate() {
            let name = self.annotation_property_name(member);
            let keyword = if i == 0 {
                format!("With{}", capitalize(&name))
            } else {
                format!(" {}", name)
            };
            out.push_str(&format!("{}:({}){}_", keyword, self.objc_type(&member.ty), name));
        }
        out
    }

    fn has_prefix(&self, package: &str) -> bool {
        self.prefixes.contains_key(package)
    }

    fn unprefixed_name(&self, ty: &TypeBinding) -> String {
        let mut name = camel_case_qualified_name(&ty.qualified_name());
        if ty.kind == TypeKind::Enum {
            name.push_str(runtime::ENUM_SUFFIX);
        }
        name
    }

    fn main_type_name(&self, unit: &CompilationUnit) -> String {
        match unit.main_declaration() {
            Some(decl) => self.full_name(decl.binding()),
            None => format!("{}{}", self.package_prefix(&unit.package), unit.source_stem()),
        }
    }
}

fn is_foundation_protocol(ty: &TypeBinding) -> bool {
    let qualified = ty.qualified_name();
    foundation::FOUNDATION_TYPES
        .iter()
        .any(|t| t.is_protocol && t.qualified_name == qualified)
}
