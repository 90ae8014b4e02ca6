//! Modlint - export style checker for JavaScript/TypeScript modules
//!
//! Modlint is a CLI tool and library for checking ES module export style.
//! Its core rule, `prefer-default-export`, flags modules that export exactly
//! one named binding without a default export.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (file scanning, parsing, export analysis)
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Lint rules built on top of the core analysis

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
