//! Provide the fixed vocabulary of the J2ObjC runtime support library for the header emitter.
//!
//! Generated headers link against a runtime that defines a handful of macros, base protocols and
//! root types. Every one of those spellings is a compatibility contract: a typo compiles into a header
//! that no longer matches the runtime. This crate keeps them in one place so the emitter (and its tests)
//! never spell them out ad hoc.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, and no model/AST types.
//! - The only optional dependency is `serde`, enabled by `headergen_ast` so primitive ids can appear in
//!   serialized compilation units.

pub mod lang;
