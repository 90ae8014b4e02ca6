//! Core data types shared across the analysis pipeline.

pub mod source;

pub use source::{SourceContext, SourceLocation};
