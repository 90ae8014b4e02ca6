//! Classification of export syntax into [`ExportSite`]s.
//!
//! The visitor walks one parsed module in document order and classifies
//! every export construct it encounters. TS-only shapes with no ESM export
//! semantics (`export =`, namespace exports, ambient `declare` declarations)
//! are deliberately skipped rather than rejected.

use swc_ecma_ast::{
    Decl, ExportAll, ExportDecl, ExportDefaultDecl, ExportDefaultExpr, ExportSpecifier, Module,
    ModuleExportName, NamedExport,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::accumulator::ExportSite;
use super::bindings::{count_var_decl_bindings, single_binding_name};

/// Collects classified export sites from a module, in document order.
#[derive(Debug, Default)]
pub struct ExportCollector {
    sites: Vec<ExportSite>,
}

impl ExportCollector {
    pub fn collect(module: &Module) -> Vec<ExportSite> {
        let mut collector = Self::default();
        module.visit_with(&mut collector);
        collector.sites
    }
}

impl Visit for ExportCollector {
    fn visit_export_decl(&mut self, node: &ExportDecl) {
        match &node.decl {
            Decl::Var(var) => {
                if var.declare {
                    return;
                }
                let binding = match var.decls.as_slice() {
                    [only] => single_binding_name(&only.name),
                    _ => None,
                };
                self.sites.push(ExportSite::NamedDeclaration {
                    bindings: count_var_decl_bindings(var),
                    span: node.span,
                    binding,
                });
            }
            Decl::Fn(func) => {
                if func.declare {
                    return;
                }
                self.sites.push(ExportSite::NamedDeclaration {
                    bindings: 1,
                    span: node.span,
                    binding: Some(func.ident.sym.to_string()),
                });
            }
            Decl::Class(class) => {
                if class.declare {
                    return;
                }
                self.sites.push(ExportSite::NamedDeclaration {
                    bindings: 1,
                    span: node.span,
                    binding: Some(class.ident.sym.to_string()),
                });
            }
            // Enums bind a runtime value name
            Decl::TsEnum(ts_enum) => {
                if ts_enum.declare {
                    return;
                }
                self.sites.push(ExportSite::NamedDeclaration {
                    bindings: 1,
                    span: node.span,
                    binding: Some(ts_enum.id.sym.to_string()),
                });
            }
            Decl::TsInterface(_) | Decl::TsTypeAlias(_) => {
                self.sites.push(ExportSite::TypeOnly);
            }
            Decl::TsModule(_) | Decl::Using(_) => {}
        }
    }

    fn visit_named_export(&mut self, node: &NamedExport) {
        // `export type { ... }` / `export type { ... } from '...'`
        if node.type_only {
            self.sites.push(ExportSite::TypeOnly);
            return;
        }

        for specifier in &node.specifiers {
            match specifier {
                // `export v from '...'` default-export-from shorthand
                ExportSpecifier::Default(_) => self.sites.push(ExportSite::Default),
                // `export * as ns from '...'` creates one named binding
                ExportSpecifier::Namespace(ns) => self.sites.push(ExportSite::NamedSpecifier {
                    span: ns.span,
                    binding: exported_name(&ns.name),
                }),
                ExportSpecifier::Named(named) => {
                    if named.is_type_only {
                        self.sites.push(ExportSite::TypeOnly);
                        continue;
                    }
                    // The effective exported name: rename target if present,
                    // otherwise the local name itself.
                    let exported = named.exported.as_ref().unwrap_or(&named.orig);
                    if is_default_name(exported) {
                        self.sites.push(ExportSite::Default);
                    } else {
                        self.sites.push(ExportSite::NamedSpecifier {
                            span: named.span,
                            binding: exported_name(exported),
                        });
                    }
                }
            }
        }
    }

    fn visit_export_default_decl(&mut self, _node: &ExportDefaultDecl) {
        self.sites.push(ExportSite::Default);
    }

    fn visit_export_default_expr(&mut self, _node: &ExportDefaultExpr) {
        self.sites.push(ExportSite::Default);
    }

    fn visit_export_all(&mut self, _node: &ExportAll) {
        self.sites.push(ExportSite::ReexportAll);
    }
}

fn is_default_name(name: &ModuleExportName) -> bool {
    match name {
        ModuleExportName::Ident(ident) => ident.sym == "default",
        ModuleExportName::Str(s) => s.value.as_str() == Some("default"),
    }
}

fn exported_name(name: &ModuleExportName) -> Option<String> {
    match name {
        ModuleExportName::Ident(ident) => Some(ident.sym.to_string()),
        ModuleExportName::Str(s) => s.value.as_str().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::parsers::js::{parse_test_js_module, parse_test_module};

    fn classify(code: &str) -> Vec<ExportSite> {
        ExportCollector::collect(&parse_test_module(code))
    }

    fn site_kinds(sites: &[ExportSite]) -> Vec<&'static str> {
        sites
            .iter()
            .map(|site| match site {
                ExportSite::Default => "default",
                ExportSite::ReexportAll => "reexport-all",
                ExportSite::TypeOnly => "type-only",
                ExportSite::NamedDeclaration { .. } => "declaration",
                ExportSite::NamedSpecifier { .. } => "specifier",
            })
            .collect()
    }

    fn kinds(code: &str) -> Vec<&'static str> {
        site_kinds(&classify(code))
    }

    /// Plain-JS dialect, for proposal syntax TypeScript rejects.
    fn kinds_js(code: &str) -> Vec<&'static str> {
        site_kinds(&ExportCollector::collect(&parse_test_js_module(code)))
    }

    #[test]
    fn test_named_const_declaration() {
        let sites = classify("export const foo = 'foo';");
        assert_eq!(sites.len(), 1);
        let ExportSite::NamedDeclaration {
            bindings, binding, ..
        } = &sites[0]
        else {
            panic!("expected a declaration site");
        };
        assert_eq!(*bindings, 1);
        assert_eq!(binding.as_deref(), Some("foo"));
    }

    #[test]
    fn test_destructured_declaration_counts_all_bindings() {
        let sites = classify("export const { foo, bar: baz } = item;");
        let ExportSite::NamedDeclaration {
            bindings, binding, ..
        } = &sites[0]
        else {
            panic!("expected a declaration site");
        };
        assert_eq!(*bindings, 2);
        assert_eq!(*binding, None);
    }

    #[test]
    fn test_default_forms() {
        assert_eq!(kinds("export default function bar() {}"), vec!["default"]);
        assert_eq!(kinds("export default 42;"), vec!["default"]);
    }

    #[test]
    fn test_specifier_list() {
        assert_eq!(
            kinds("let a, b; export { a, b as c };"),
            vec!["specifier", "specifier"]
        );
    }

    #[test]
    fn test_specifier_renamed_to_default() {
        assert_eq!(
            kinds("let a, b; export { a as default, b };"),
            vec!["default", "specifier"]
        );
    }

    #[test]
    fn test_reexports() {
        assert_eq!(kinds("export * from './foo';"), vec!["reexport-all"]);
        assert_eq!(
            kinds("export { a, b } from './foo';"),
            vec!["specifier", "specifier"]
        );
        assert_eq!(kinds("export * as ns from './foo';"), vec!["specifier"]);
    }

    #[test]
    fn test_reexported_default_shorthand() {
        assert_eq!(
            kinds_js("export Memory, { MemoryValue } from './Memory';"),
            vec!["default", "specifier"]
        );
    }

    #[test]
    fn test_reexport_of_default_binding() {
        assert_eq!(kinds("export { default } from './foo';"), vec!["default"]);
    }

    #[test]
    fn test_type_exports_are_type_only() {
        assert_eq!(kinds("export type UserId = number;"), vec!["type-only"]);
        assert_eq!(
            kinds("export interface Foo { bar: string; }"),
            vec!["type-only"]
        );
        assert_eq!(kinds("export type { T } from './t';"), vec!["type-only"]);
        assert_eq!(kinds("type T = number; export { type T };"), vec!["type-only"]);
    }

    #[test]
    fn test_enum_is_a_value_binding() {
        assert_eq!(kinds("export enum Color { Red }"), vec!["declaration"]);
    }

    #[test]
    fn test_ambient_and_assignment_shapes_are_ignored() {
        assert_eq!(kinds("export declare const foo: number;"), Vec::<&str>::new());
        assert_eq!(kinds("const x = 1; export = x;"), Vec::<&str>::new());
    }

    #[test]
    fn test_imports_produce_no_sites() {
        assert_eq!(kinds("import * as foo from './foo';"), Vec::<&str>::new());
    }
}
