//! Golden snapshot tests for whole headers
//!
//! These tests load compilation units from `tests/fixtures/*.json`, generate their headers and
//! compare the output against stored snapshots. This ensures emission changes are reviewed and
//! intentional.
//!
//! Run with: `cargo test --test header_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use headergen::{HeaderGenerator, HeaderImportCollector, JavaNamingPolicy};
use headergen_ast::CompilationUnit;

/// Load a compilation unit from the fixtures directory
fn load_fixture(name: &str) -> CompilationUnit {
    let path = format!("tests/fixtures/{}.json", name);
    let source = fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path));
    serde_json::from_str(&source).unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path, e))
}

/// Generate a header with the given naming policy
fn generate_with(naming: &JavaNamingPolicy, unit: &CompilationUnit) -> String {
    let collector = HeaderImportCollector::new(naming);
    HeaderGenerator::new(naming, &collector)
        .generate(unit)
        .expect("header generation failed")
}

fn generate(unit: &CompilationUnit) -> String {
    generate_with(&JavaNamingPolicy::new(), unit)
}

#[test]
fn test_class_header() {
    let header = generate(&load_fixture("shape"));
    insta::assert_snapshot!("shape_class", header);
}

#[test]
fn test_enum_header() {
    let header = generate(&load_fixture("color"));
    insta::assert_snapshot!("color_enum", header);
}

#[test]
fn test_prefixed_runtime_annotation_header() {
    let naming = JavaNamingPolicy::new().with_prefix("com.example.meta", "CEM");
    let header = generate_with(&naming, &load_fixture("named"));
    insta::assert_snapshot!("named_annotation_prefixed", header);
}
