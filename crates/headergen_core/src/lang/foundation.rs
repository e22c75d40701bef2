//! Source types that map onto Foundation or runtime-provided types.
//!
//! These never need a forward declaration or an include of their own: Foundation and the runtime
//! header already declare them.

/// Mapping entry from a qualified source type to its target name.
#[derive(Debug, Clone, Copy)]
pub struct FoundationType {
    pub qualified_name: &'static str,
    pub objc_name: &'static str,
    /// Whether the target spelling is a protocol rather than a class.
    pub is_protocol: bool,
}

/// Registry of mapped types.
pub const FOUNDATION_TYPES: &[FoundationType] = &[
    FoundationType {
        qualified_name: "java.lang.Object",
        objc_name: "NSObject",
        is_protocol: false,
    },
    FoundationType {
        qualified_name: "java.lang.String",
        objc_name: "NSString",
        is_protocol: false,
    },
    FoundationType {
        qualified_name: "java.lang.Number",
        objc_name: "NSNumber",
        is_protocol: false,
    },
    FoundationType {
        qualified_name: "java.lang.Throwable",
        objc_name: "NSException",
        is_protocol: false,
    },
    FoundationType {
        qualified_name: "java.lang.Class",
        objc_name: "IOSClass",
        is_protocol: false,
    },
    FoundationType {
        qualified_name: "java.lang.Cloneable",
        objc_name: "NSCopying",
        is_protocol: true,
    },
];

/// Qualified name of the root source type, rendered as `id` in type positions.
pub const OBJECT_QUALIFIED_NAME: &str = "java.lang.Object";

/// Look up the target name of a mapped source type.
pub fn objc_name_for(qualified_name: &str) -> Option<&'static str> {
    FOUNDATION_TYPES
        .iter()
        .find(|t| t.qualified_name == qualified_name)
        .map(|t| t.objc_name)
}

/// Check whether a source type is provided by Foundation or the runtime.
pub fn is_foundation_type(qualified_name: &str) -> bool {
    objc_name_for(qualified_name).is_some()
}
