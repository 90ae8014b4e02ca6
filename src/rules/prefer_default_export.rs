//! Prefer-default-export rule.
//!
//! Flags modules that export exactly one named binding without a default
//! export. The detection itself happens during per-file analysis; this rule
//! filters out directive-suppressed findings and shapes the rest into issues.

use crate::{
    core::{CheckContext, ExportViolation},
    issues::PreferDefaultExportIssue,
};

pub fn check_prefer_default_export(ctx: &CheckContext) -> Vec<PreferDefaultExportIssue> {
    collect_issues(ctx.export_violations())
}

fn collect_issues(violations: &[ExportViolation]) -> Vec<PreferDefaultExportIssue> {
    violations
        .iter()
        .filter(|v| !v.suppressed)
        .map(|v| PreferDefaultExportIssue {
            context: v.context.clone(),
            site: v.site,
            binding: v.binding.clone(),
        })
        .collect()
}
