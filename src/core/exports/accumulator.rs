//! Per-module export accounting and the end-of-module decision.
//!
//! One `ModuleExportState` is created per module traversal, fed every export
//! construct in document order, and consumed exactly once at end-of-module.
//! The decision is holistic: a module is flagged only when the whole file
//! exports exactly one named binding and no default export.

use swc_common::Span;

/// Which syntax node a violation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    /// A whole export declaration: `export const foo = ...`
    Declaration,
    /// An individual specifier: the `foo` in `export { foo }`
    Specifier,
}

/// The node to report when the module ends with exactly one named binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationSite {
    pub kind: SiteKind,
    pub span: Span,
    /// The exported name, when statically known.
    pub binding: Option<String>,
}

/// One export construct, classified.
///
/// The classification is a closed union so the accumulator's transition
/// table is exhaustive; syntax the visitor does not recognize never reaches
/// the accumulator at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportSite {
    /// `export default ...`, `export v from '...'`, or a specifier renamed
    /// to `default`.
    Default,
    /// `export * from '...'`.
    ReexportAll,
    /// Type or interface exports, including `type`-qualified specifiers.
    TypeOnly,
    /// `export const/let/var/function/class ...` binding `bindings` names.
    NamedDeclaration {
        bindings: usize,
        span: Span,
        binding: Option<String>,
    },
    /// One specifier of `export { ... }` / `export { ... } from '...'`,
    /// contributing exactly one binding.
    NamedSpecifier {
        span: Span,
        binding: Option<String>,
    },
}

/// Running export state for one module.
///
/// `total_named_bindings` only ever grows, and `has_default` never reverts
/// once set. The state is owned by a single file's analysis and never shared.
#[derive(Debug, Default)]
pub struct ModuleExportState {
    has_default: bool,
    total_named_bindings: usize,
    single_binding_site: Option<ViolationSite>,
}

impl ModuleExportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one export construct.
    pub fn record(&mut self, site: ExportSite) {
        match site {
            ExportSite::Default => self.has_default = true,
            ExportSite::ReexportAll | ExportSite::TypeOnly => {}
            ExportSite::NamedDeclaration {
                bindings,
                span,
                binding,
            } => {
                self.add_named(bindings, SiteKind::Declaration, span, binding);
            }
            ExportSite::NamedSpecifier { span, binding } => {
                self.add_named(1, SiteKind::Specifier, span, binding);
            }
        }
    }

    fn add_named(&mut self, count: usize, kind: SiteKind, span: Span, binding: Option<String>) {
        if count == 0 {
            return;
        }
        self.total_named_bindings += count;
        self.single_binding_site = if self.total_named_bindings == 1 {
            Some(ViolationSite {
                kind,
                span,
                binding,
            })
        } else {
            None
        };
    }

    /// Apply the end-of-module decision rule.
    ///
    /// A default export suppresses everything. Otherwise exactly one named
    /// binding yields the violation site; zero or two-plus yield nothing.
    pub fn finish(self) -> Option<ViolationSite> {
        if self.has_default {
            return None;
        }
        if self.total_named_bindings == 1 {
            return self.single_binding_site;
        }
        None
    }
}
