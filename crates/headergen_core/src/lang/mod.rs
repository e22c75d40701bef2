//! Target-runtime vocabulary registries.
//!
//! Callers work with stable ids (e.g. [`primitives::PrimitiveKind`]) and constant spellings instead of
//! string literals scattered across the emitter.
//!
//! ## Examples
//! ```rust
//! use headergen_core::lang::primitives::{self, PrimitiveKind};
//!
//! assert_eq!(primitives::from_java("long"), Some(PrimitiveKind::Long));
//! assert_eq!(primitives::objc_name(PrimitiveKind::Long), "long long");
//! ```

pub mod foundation;
pub mod method_family;
pub mod primitives;
pub mod runtime;
