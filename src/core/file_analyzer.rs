//! Per-file analysis pipeline.
//!
//! One file goes through: parse -> export classification -> end-of-module
//! decision -> span-to-location mapping -> suppression lookup. Each file's
//! state is exclusively owned by its task, so files can be analyzed in
//! parallel without locking.

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;

use crate::core::comments::{CommentCollector, SuppressibleRule};
use crate::core::data::{SourceContext, SourceLocation};
use crate::core::exports::{SiteKind, analyze_module_exports};
use crate::core::parsers::js::parse_source;

/// A `prefer-default-export` finding for one module, located and checked
/// against suppression directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportViolation {
    pub context: SourceContext,
    pub site: SiteKind,
    pub binding: Option<String>,
    /// True when a directive disables the rule at the reported line.
    pub suppressed: bool,
}

/// Analyze one file's export surface.
///
/// Returns `Ok(None)` for modules with nothing to report; parse failures
/// surface as errors so the caller can turn them into parse-error issues.
pub fn analyze_file(
    file_path: &str,
    code: String,
    source_map: Arc<SourceMap>,
) -> Result<Option<ExportViolation>> {
    let parsed = parse_source(code, file_path, source_map)?;

    let Some(site) = analyze_module_exports(&parsed.module) else {
        return Ok(None);
    };

    let loc = parsed.source_map.lookup_char_pos(site.span.lo);
    let line = loc.line;
    let col = loc.col_display + 1;
    let source_line = loc
        .file
        .get_line(line.saturating_sub(1))
        .map(|l| l.trim_end().to_string())
        .unwrap_or_default();

    let suppressions = CommentCollector::collect(&parsed.comments, &parsed.source_map);
    let suppressed = suppressions.is_suppressed(line, SuppressibleRule::PreferDefaultExport);

    Ok(Some(ExportViolation {
        context: SourceContext::new(SourceLocation::new(file_path, line, col), source_line),
        site: site.kind,
        binding: site.binding,
        suppressed,
    }))
}
