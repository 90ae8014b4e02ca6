//! Lint rules built on the core analysis.
//!
//! Each rule is a thin function over `CheckContext` data that returns a
//! specific issue type; the CLI layer wraps those into `Issue` values.

pub mod prefer_default_export;

pub use prefer_default_export::check_prefer_default_export;
