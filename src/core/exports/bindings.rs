//! Binding counting for export declarations.
//!
//! Given the left-hand side of an exported declaration, counts how many
//! concrete identifiers it binds. Destructuring patterns may nest without
//! bound; elided array slots bind nothing; type annotations are never
//! traversed.

use swc_ecma_ast::{ObjectPatProp, Pat, VarDecl};

/// Count the identifiers bound by a single pattern.
///
/// Renamed properties (`{ a: b }`) count the bound name `b`, not the source
/// key. Default values (`{ a = 1 }`, `[a = 1]`) delegate to the pattern on
/// their left; the default expression itself is never inspected.
///
/// Patterns this does not recognize count as zero rather than failing, so
/// one unusual construct never aborts analysis of the module.
pub fn count_bindings(pat: &Pat) -> usize {
    match pat {
        Pat::Ident(_) => 1,
        Pat::Array(arr) => arr
            .elems
            .iter()
            .flatten()
            .map(count_bindings)
            .sum(),
        Pat::Rest(rest) => count_bindings(&rest.arg),
        Pat::Object(obj) => obj
            .props
            .iter()
            .map(|prop| match prop {
                ObjectPatProp::KeyValue(kv) => count_bindings(&kv.value),
                // Shorthand with optional default: `{ a }` / `{ a = 1 }`
                ObjectPatProp::Assign(_) => 1,
                ObjectPatProp::Rest(rest) => count_bindings(&rest.arg),
            })
            .sum(),
        Pat::Assign(assign) => count_bindings(&assign.left),
        Pat::Expr(_) | Pat::Invalid(_) => 0,
    }
}

/// Count the identifiers bound across all declarators of a declaration.
///
/// `export const a = 1, [b, c] = pair;` binds three names.
pub fn count_var_decl_bindings(decl: &VarDecl) -> usize {
    decl.decls.iter().map(|d| count_bindings(&d.name)).sum()
}

/// The bound name, if the pattern is a single plain identifier.
///
/// Used only to enrich report output; destructuring patterns return None.
pub fn single_binding_name(pat: &Pat) -> Option<String> {
    match pat {
        Pat::Ident(ident) => Some(ident.id.sym.to_string()),
        _ => None,
    }
}
