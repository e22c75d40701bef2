//! Runtime support library spellings.
//!
//! These are the macro names, attributes, root types and protocols that generated headers reference.
//! They must match the runtime headers exactly.

/// Header imported by every generated unit.
pub const RUNTIME_HEADER: &str = "JreEmulation.h";

/// Root object type, also the default superclass.
pub const ROOT_OBJECT: &str = "NSObject";

/// Root protocol every interface conforms to.
pub const ROOT_PROTOCOL: &str = "NSObject";

/// Marker protocol for translated source-language objects.
pub const JAVA_OBJECT_PROTOCOL: &str = "JavaObject";

/// Base class of translated enums.
pub const ENUM_BASE: &str = "JavaLangEnum";

/// Copy-capability protocol adopted by every enum.
pub const COPYING_PROTOCOL: &str = "NSCopying";

/// Simple name of the source-language clone marker interface.
pub const CLONE_MARKER: &str = "Cloneable";

/// Base protocol of translated annotation types.
pub const ANNOTATION_PROTOCOL: &str = "JavaLangAnnotationAnnotation";

/// Element array type used by `values` accessors.
pub const OBJECT_ARRAY: &str = "IOSObjectArray";

/// Category hosting natives implemented outside the generated unit.
pub const NATIVE_METHODS_CATEGORY: &str = "NativeMethods";

/// Suffix carried by enum wrapper class names.
pub const ENUM_SUFFIX: &str = "Enum";

/// Deprecation attribute.
pub const DEPRECATED_ATTRIBUTE: &str = "__attribute__((deprecated))";

/// Method-family override suppressing ARC family inference.
pub const METHOD_FAMILY_NONE: &str = "OBJC_METHOD_FAMILY_NONE";

/// Storage export qualifier.
pub const FOUNDATION_EXPORT: &str = "FOUNDATION_EXPORT";

/// Weak ownership qualifier for instance variables.
pub const WEAK_QUALIFIER: &str = "__weak";

/// Static initializer guard macro.
pub const STATIC_INIT: &str = "J2OBJC_STATIC_INIT";

/// Suffix of the external guard flag (`<Type>_initialized`).
pub const INITIALIZED_SUFFIX: &str = "_initialized";

/// Prefix of the no-op initializer stub emitted when no guard is needed.
pub const INIT_STUB_PREFIX: &str = "__attribute__((always_inline)) inline void";

/// Static field getter macro.
pub const STATIC_FIELD_GETTER: &str = "J2OBJC_STATIC_FIELD_GETTER";

/// Static field address getter macro (non-final primitives).
pub const STATIC_FIELD_REF_GETTER: &str = "J2OBJC_STATIC_FIELD_REF_GETTER";

/// Static field setter macro (non-final objects).
pub const STATIC_FIELD_SETTER: &str = "J2OBJC_STATIC_FIELD_SETTER";

/// Instance field setter macro.
pub const FIELD_SETTER: &str = "J2OBJC_FIELD_SETTER";

/// Increment/decrement helpers for boxed numeric wrappers.
pub const BOXED_INC_AND_DEC: &str = "BOXED_INC_AND_DEC";

/// Visibility line opening a public instance-variable block.
pub const PUBLIC_IVARS: &str = " @public";

/// Visibility line opening a private instance-variable block.
pub const PRIVATE_IVARS: &str = " @private";

/// Pragmas bracketing a unit when deprecated declarations are generated.
pub const PRAGMA_PUSH: &str = "#pragma clang diagnostic push";
pub const PRAGMA_IGNORE_DEPRECATED: &str = "#pragma GCC diagnostic ignored \"-Wdeprecated-declarations\"";
pub const PRAGMA_POP: &str = "#pragma clang diagnostic pop";

/// Fixed class-level and copy-protocol declarations every enum wrapper carries.
pub const ENUM_VALUES_DECLARATION: &str = "+ (IOSObjectArray *)values;";
pub const ENUM_COPY_DECLARATION: &str = "- (id)copyWithZone:(NSZone *)zone;";

/// Render the `valueOf` class accessor for an enum wrapper type.
pub fn enum_value_of_declaration(type_name: &str) -> String {
    format!("+ ({} *)valueOfWithNSString:(NSString *)name;", type_name)
}

/// Render the runtime import line.
pub fn runtime_import() -> String {
    format!("#import \"{}\"", RUNTIME_HEADER)
}
