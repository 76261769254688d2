//! Binding-identifier collection.
//!
//! Which fields of a type hold binding positions is part of its registry
//! definition (`.bindings([..])`), so this walk needs no per-type code.

use crate::node::{Alias, FxIndexMap, Node, NodeType, Value};
use crate::registry;
use estree_common::JsWord;
use std::collections::VecDeque;

/// Collects the identifiers `node` binds, keyed by name.
///
/// With `duplicates`, every binding of a name is kept (destructuring can
/// rebind the same name, which callers may want to detect); otherwise the
/// last one wins. `outer_only` stops at function boundaries: a function's
/// own name still counts, bindings created inside its body do not.
pub fn get_binding_identifiers<'a>(
    node: &'a Node,
    duplicates: bool,
    outer_only: bool,
) -> FxIndexMap<JsWord, Vec<&'a Node>> {
    let mut ids: FxIndexMap<JsWord, Vec<&'a Node>> = FxIndexMap::default();
    let mut search = VecDeque::new();
    search.push_back(node);

    while let Some(id) = search.pop_front() {
        if id.kind() == NodeType::Identifier {
            if let Some(name) = id.str_field("name") {
                let bucket = ids.entry(name.clone()).or_default();
                if duplicates {
                    bucket.push(id);
                } else {
                    bucket.clear();
                    bucket.push(id);
                }
            }
            continue;
        }

        if id.is(Alias::ExportDeclaration) && id.kind() != NodeType::ExportAllDeclaration {
            if let Some(declaration) = id.child("declaration") {
                if declaration.is(Alias::Declaration) {
                    search.push_back(declaration);
                }
            }
            continue;
        }

        if outer_only {
            if id.kind() == NodeType::FunctionDeclaration {
                if let Some(fn_id) = id.child("id") {
                    search.push_back(fn_id);
                }
                continue;
            }
            if id.kind() == NodeType::FunctionExpression {
                continue;
            }
        }

        for &key in registry::binding_keys(id.kind()) {
            match id.field(key) {
                Some(Value::Node(child)) => search.push_back(child),
                Some(Value::List(items)) => {
                    for item in items {
                        if let Value::Node(child) = item {
                            search.push_back(child);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    ids
}

pub fn get_outer_binding_identifiers<'a>(
    node: &'a Node,
    duplicates: bool,
) -> FxIndexMap<JsWord, Vec<&'a Node>> {
    get_binding_identifiers(node, duplicates, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::builder;

    fn ident(name: &str) -> Node {
        builder(NodeType::Identifier, vec![Value::str(name)]).unwrap()
    }

    fn declarator(id: Node, init: Option<Node>) -> Node {
        builder(
            NodeType::VariableDeclarator,
            vec![Value::node(id), init.map(Value::node).unwrap_or(Value::Null)],
        )
        .unwrap()
    }

    fn var_decl(declarations: Vec<Node>) -> Node {
        builder(
            NodeType::VariableDeclaration,
            vec![Value::str("var"), Value::nodes(declarations)],
        )
        .unwrap()
    }

    #[test]
    fn collects_from_declarations() {
        let decl = var_decl(vec![
            declarator(ident("a"), None),
            declarator(ident("b"), None),
        ]);
        let ids = get_binding_identifiers(&decl, false, false);
        let names: Vec<_> = ids.keys().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn destructuring_rebinding_with_duplicates() {
        // var [a, a] = ...;
        let pattern = builder(
            NodeType::ArrayPattern,
            vec![Value::List(vec![
                Value::node(ident("a")),
                Value::node(ident("a")),
            ])],
        )
        .unwrap();
        let decl = var_decl(vec![declarator(pattern, None)]);

        let a = JsWord::from("a");
        let singles = get_binding_identifiers(&decl, false, false);
        assert_eq!(singles[&a].len(), 1);

        let all = get_binding_identifiers(&decl, true, false);
        assert_eq!(all[&a].len(), 2);
    }

    #[test]
    fn outer_only_stops_at_function_bodies() {
        // function f(p) { var inner; }
        let body = builder(
            NodeType::BlockStatement,
            vec![Value::nodes(vec![var_decl(vec![declarator(
                ident("inner"),
                None,
            )])])],
        )
        .unwrap();
        let func = builder(
            NodeType::FunctionDeclaration,
            vec![
                Value::node(ident("f")),
                Value::nodes(vec![ident("p")]),
                Value::node(body),
            ],
        )
        .unwrap();

        let outer = get_outer_binding_identifiers(&func, false);
        let names: Vec<_> = outer.keys().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["f"]);

        let inner = get_binding_identifiers(&func, false, false);
        assert!(inner.contains_key(&JsWord::from("p")));
        assert!(inner.contains_key(&JsWord::from("inner")));
    }

    #[test]
    fn export_declarations_expose_inner_bindings() {
        let exported = builder(
            NodeType::ExportNamedDeclaration,
            vec![Value::node(var_decl(vec![declarator(ident("x"), None)]))],
        )
        .unwrap();
        let ids = get_binding_identifiers(&exported, false, false);
        assert!(ids.contains_key(&JsWord::from("x")));
    }
}
