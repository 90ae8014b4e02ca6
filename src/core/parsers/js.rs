use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use swc_common::{
    BytePos, FileName, Globals, SourceMap,
    comments::{Comment, SingleThreadedComments},
};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// Map of byte positions to comments.
pub type CommentMap = HashMap<BytePos, Vec<Comment>>;

/// Thread-safe extracted comments from SingleThreadedComments.
/// Extracted during parsing and stored independently of swc types.
#[derive(Debug, Clone)]
pub struct ExtractedComments {
    pub leading: CommentMap,
    pub trailing: CommentMap,
}

impl ExtractedComments {
    /// Extract comments from SingleThreadedComments.
    /// This must be called before SingleThreadedComments is dropped.
    pub fn from_swc(comments: &SingleThreadedComments) -> Self {
        let (leading, trailing) = comments.borrow_all();
        Self {
            leading: leading.iter().map(|(k, v)| (*k, v.clone())).collect(),
            trailing: trailing.iter().map(|(k, v)| (*k, v.clone())).collect(),
        }
    }

    /// Provide access to both comment maps without cloning them.
    pub fn borrow_all(&self) -> (&CommentMap, &CommentMap) {
        (&self.leading, &self.trailing)
    }
}

pub struct ParsedModule {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub comments: ExtractedComments,
}

/// Pick the parser syntax for a file based on its extension.
///
/// `.ts`/`.tsx`/`.mts`/`.cts` get TypeScript syntax (TSX enabled for `.tsx`);
/// everything else is parsed as ECMAScript with JSX and the
/// default-export-from proposal enabled.
pub fn syntax_for_file(file_path: &str) -> Syntax {
    let ext = Path::new(file_path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext {
        "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        }),
        "tsx" => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            export_default_from: true,
            ..Default::default()
        }),
    }
}

/// Parse JS/TS source code string into an AST.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_source(code: String, file_path: &str, source_map: Arc<SourceMap>) -> Result<ParsedModule> {
    use swc_common::GLOBALS;

    let syntax = syntax_for_file(file_path);

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse module: {:?}", e))?;

        // Extract comments immediately (before SingleThreadedComments drops)
        let extracted_comments = ExtractedComments::from_swc(&comments);

        Ok(ParsedModule {
            module,
            source_map,
            comments: extracted_comments,
        })
    })
}

/// Parse a TypeScript snippet for unit tests.
#[cfg(test)]
pub fn parse_test_module(code: &str) -> Module {
    parse_source(code.to_string(), "test.tsx", Arc::new(SourceMap::default()))
        .expect("test snippet must parse")
        .module
}

/// Parse a plain-JS snippet for unit tests (proposal syntax enabled).
#[cfg(test)]
pub fn parse_test_js_module(code: &str) -> Module {
    parse_source(code.to_string(), "test.jsx", Arc::new(SourceMap::default()))
        .expect("test snippet must parse")
        .module
}
