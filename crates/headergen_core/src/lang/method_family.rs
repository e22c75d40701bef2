//! Reserved method-family prefixes.
//!
//! clang infers an ARC method family (and a related result type) from selector prefixes. Translated
//! methods that happen to start with one of these prefixes must opt out with
//! `OBJC_METHOD_FAMILY_NONE`, otherwise the compiler assumes ownership rules the method does not follow.

/// Selector prefixes that trigger method-family inference.
pub const RESERVED_PREFIXES: &[&str] = &["new", "copy", "alloc", "init", "mutableCopy"];

/// Check whether a target-visible method name needs the method-family override.
pub fn needs_family_override(name: &str) -> bool {
    RESERVED_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}
