//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `context`: `CheckContext` orchestrating config, scanning, and analysis
//! - `comments`: suppression directive collection
//! - `data`: source location types
//! - `exports`: the export counting and decision algorithm
//! - `file_analyzer`: per-file pipeline (parse, analyze, locate, suppress)
//! - `file_scanner`: source file discovery
//! - `parsers`: swc-based source parsing

pub mod comments;
pub mod context;
pub mod data;
pub mod exports;
pub mod file_analyzer;
pub mod file_scanner;
pub mod parsers;

pub use context::{AnalysisData, CheckContext};
pub use data::{SourceContext, SourceLocation};
pub use file_analyzer::ExportViolation;
