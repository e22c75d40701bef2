//! headergen version information.
//!
//! A single constant so the CLI and any generated text agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The headergen version string (for example, `0.1.0-alpha.1`).
pub const HEADERGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
