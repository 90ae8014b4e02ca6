//! Source file parsers.
//!
//! - `js`: JS/TS/JSX/TSX source file parser (uses swc for AST generation)

pub mod js;
