#![forbid(unsafe_code)]
//! Objective-C header generation for translated Java compilation units
//!
//! Takes a resolved compilation unit (see `headergen_ast`) and produces the text of its `.h` file: the
//! include guard, forward declarations and includes, then one `@interface` / `@protocol` block per
//! declaration with the static accessors and macros the J2ObjC runtime expects.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;
pub mod config;
pub mod dependencies;
pub mod emit;
pub mod naming;
pub mod version;

pub use config::HeaderConfig;
pub use dependencies::{DependencyCollector, HeaderImportCollector};
pub use emit::{EmitError, HeaderGenerator};
pub use naming::{JavaNamingPolicy, NamingPolicy};
