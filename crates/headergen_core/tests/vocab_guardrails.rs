use std::collections::HashSet;

use headergen_core::lang::foundation;
use headergen_core::lang::method_family;
use headergen_core::lang::primitives::{self, PRIMITIVES};
use headergen_core::lang::runtime;

#[test]
fn primitive_spellings_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for info in PRIMITIVES {
        assert_eq!(
            primitives::from_java(info.java),
            Some(info.id),
            "primitive spelling not resolvable: {}",
            info.java
        );
        assert!(seen.insert(info.java), "duplicate primitive spelling {:?}", info.java);
    }
}

#[test]
fn boxed_wrappers_unbox_to_their_primitive() {
    for info in PRIMITIVES {
        assert_eq!(
            primitives::unboxed(info.wrapper),
            Some(info.id),
            "wrapper {} does not unbox to {:?}",
            info.wrapper,
            info.id
        );
    }
}

#[test]
fn inc_and_dec_set_is_the_seven_numeric_kinds() {
    let names: HashSet<&str> = PRIMITIVES
        .iter()
        .filter(|p| p.has_inc_and_dec)
        .map(|p| p.java)
        .collect();
    let expected: HashSet<&str> = ["int", "long", "double", "float", "short", "byte", "char"]
        .into_iter()
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn every_non_void_primitive_has_an_array_class() {
    for info in PRIMITIVES {
        if info.java == "void" {
            assert!(info.array_type.is_none());
        } else {
            let array = info.array_type.unwrap_or_else(|| panic!("no array type for {}", info.java));
            assert!(array.starts_with("IOS") && array.ends_with("Array"), "odd array class {}", array);
        }
    }
}

#[test]
fn foundation_mapping_is_unique() {
    let mut seen = HashSet::new();
    for entry in foundation::FOUNDATION_TYPES {
        assert!(seen.insert(entry.qualified_name), "duplicate mapping for {}", entry.qualified_name);
        assert_eq!(foundation::objc_name_for(entry.qualified_name), Some(entry.objc_name));
    }
    assert!(foundation::is_foundation_type(foundation::OBJECT_QUALIFIED_NAME));
}

#[test]
fn runtime_macro_spellings_are_exact() {
    assert_eq!(runtime::STATIC_INIT, "J2OBJC_STATIC_INIT");
    assert_eq!(runtime::STATIC_FIELD_GETTER, "J2OBJC_STATIC_FIELD_GETTER");
    assert_eq!(runtime::STATIC_FIELD_REF_GETTER, "J2OBJC_STATIC_FIELD_REF_GETTER");
    assert_eq!(runtime::STATIC_FIELD_SETTER, "J2OBJC_STATIC_FIELD_SETTER");
    assert_eq!(runtime::FIELD_SETTER, "J2OBJC_FIELD_SETTER");
    assert_eq!(runtime::BOXED_INC_AND_DEC, "BOXED_INC_AND_DEC");
    assert_eq!(runtime::FOUNDATION_EXPORT, "FOUNDATION_EXPORT");
    assert_eq!(runtime::DEPRECATED_ATTRIBUTE, "__attribute__((deprecated))");
    assert_eq!(runtime::METHOD_FAMILY_NONE, "OBJC_METHOD_FAMILY_NONE");
    assert_eq!(runtime::runtime_import(), "#import \"JreEmulation.h\"");
}

#[test]
fn reserved_prefixes_are_distinct() {
    let unique: HashSet<&&str> = method_family::RESERVED_PREFIXES.iter().collect();
    assert_eq!(unique.len(), method_family::RESERVED_PREFIXES.len());
}
