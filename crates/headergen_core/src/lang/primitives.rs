//! Primitive type vocabulary.
//!
//! Maps each source-language primitive to its target spelling, its IOS array class and its boxed
//! wrapper type.
//!
//! ## Examples
//! ```rust
//! use headergen_core::lang::primitives::{self, PrimitiveKind};
//!
//! assert_eq!(primitives::unboxed("java.lang.Integer"), Some(PrimitiveKind::Int));
//! assert_eq!(primitives::capitalized(PrimitiveKind::Char), "Char");
//! ```

/// Stable identifier for source primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub id: PrimitiveKind,
    /// Source spelling (`long`).
    pub java: &'static str,
    /// Target spelling (`long long`).
    pub objc: &'static str,
    /// IOS array class holding elements of this type.
    pub array_type: Option<&'static str>,
    /// Qualified name of the boxed wrapper class.
    pub wrapper: &'static str,
    /// Accessor the runtime uses to unbox the wrapper.
    pub value_accessor: &'static str,
    /// Whether `BOXED_INC_AND_DEC` helpers exist for the wrapper.
    pub has_inc_and_dec: bool,
}

/// Registry of primitive types.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    info(PrimitiveKind::Boolean, "boolean", "BOOL", Some("IOSBooleanArray"), "java.lang.Boolean", "booleanValue", false),
    info(PrimitiveKind::Byte, "byte", "char", Some("IOSByteArray"), "java.lang.Byte", "charValue", true),
    info(PrimitiveKind::Char, "char", "unichar", Some("IOSCharArray"), "java.lang.Character", "charValue", true),
    info(PrimitiveKind::Short, "short", "short int", Some("IOSShortArray"), "java.lang.Short", "shortValue", true),
    info(PrimitiveKind::Int, "int", "int", Some("IOSIntArray"), "java.lang.Integer", "intValue", true),
    info(PrimitiveKind::Long, "long", "long long", Some("IOSLongArray"), "java.lang.Long", "longLongValue", true),
    info(PrimitiveKind::Float, "float", "float", Some("IOSFloatArray"), "java.lang.Float", "floatValue", true),
    info(PrimitiveKind::Double, "double", "double", Some("IOSDoubleArray"), "java.lang.Double", "doubleValue", true),
    info(PrimitiveKind::Void, "void", "void", None, "java.lang.Void", "", false),
];

/// Resolve a source spelling (`int`) to its id.
pub fn from_java(name: &str) -> Option<PrimitiveKind> {
    PRIMITIVES.iter().find(|p| p.java == name).map(|p| p.id)
}

/// Return the source spelling of a primitive.
pub fn java_name(id: PrimitiveKind) -> &'static str {
    info_for(id).java
}

/// Return the target spelling of a primitive.
pub fn objc_name(id: PrimitiveKind) -> &'static str {
    info_for(id).objc
}

/// Return the source spelling with its first letter upper-cased (`Int`, `Boolean`).
pub fn capitalized(id: PrimitiveKind) -> String {
    let java = java_name(id);
    let mut chars = java.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Return the primitive a boxed wrapper class unboxes to.
///
/// ## Parameters
/// - `qualified_name`: qualified source name of a class, e.g. `java.lang.Long`.
pub fn unboxed(qualified_name: &str) -> Option<PrimitiveKind> {
    PRIMITIVES.iter().find(|p| p.wrapper == qualified_name).map(|p| p.id)
}

/// Return the full metadata entry for a primitive.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveKind) -> &'static PrimitiveInfo {
    PRIMITIVES
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: primitive registry covers every PrimitiveKind")
}

const fn info(
    id: PrimitiveKind,
    java: &'static str,
    objc: &'static str,
    array_type: Option<&'static str>,
    wrapper: &'static str,
    value_accessor: &'static str,
    has_inc_and_dec: bool,
) -> PrimitiveInfo {
    PrimitiveInfo {
        id,
        java,
        objc,
        array_type,
        wrapper,
        value_accessor,
        has_inc_and_dec,
    }
}
