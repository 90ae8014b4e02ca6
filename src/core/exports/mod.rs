//! Module export analysis.
//!
//! The pieces compose in document order: `bindings` counts the identifiers a
//! pattern binds, `visitor` classifies each export construct into an
//! [`ExportSite`], and `accumulator` tallies the sites and applies the
//! end-of-module decision.

pub mod accumulator;
pub mod bindings;
pub mod visitor;

pub use accumulator::{ExportSite, ModuleExportState, SiteKind, ViolationSite};
pub use bindings::count_bindings;
pub use visitor::ExportCollector;

use swc_ecma_ast::Module;

/// Run the full export analysis over one parsed module.
///
/// Returns the site to report when the module exports exactly one named
/// binding and no default export, or `None` otherwise.
pub fn analyze_module_exports(module: &Module) -> Option<ViolationSite> {
    let mut state = ModuleExportState::new();
    for site in ExportCollector::collect(module) {
        state.record(site);
    }
    state.finish()
}
