//! Flow and TypeScript union flattening and de-duplication.

use crate::node::{Alias, FxIndexMap, Node, NodeType, Value};
use indexmap::map::Entry;
use std::collections::VecDeque;

/// What distinguishes one union dialect from the other: the collapsing
/// "any" type, the alias naming the base (keyword-like) types, the union
/// wrapper, and the generic-reference shape.
struct UnionRules {
    any: NodeType,
    base: Alias,
    union: NodeType,
    generic: NodeType,
    name_key: &'static str,
    qualified: fn(&Node) -> Option<String>,
}

const FLOW_RULES: UnionRules = UnionRules {
    any: NodeType::AnyTypeAnnotation,
    base: Alias::FlowBaseAnnotation,
    union: NodeType::UnionTypeAnnotation,
    generic: NodeType::GenericTypeAnnotation,
    name_key: "id",
    qualified: flow_qualified_name,
};

const TS_RULES: UnionRules = UnionRules {
    any: NodeType::TSAnyKeyword,
    base: Alias::TSBaseType,
    union: NodeType::TSUnionType,
    generic: NodeType::TSTypeReference,
    name_key: "typeName",
    qualified: ts_qualified_name,
};

fn flow_qualified_name(node: &Node) -> Option<String> {
    match node.kind() {
        NodeType::Identifier => node.str_field("name").map(|name| name.to_string()),
        NodeType::QualifiedTypeIdentifier => {
            let id = node.child("id")?.str_field("name")?;
            let qualification = flow_qualified_name(node.child("qualification")?)?;
            Some(format!("{}.{}", id, qualification))
        }
        _ => None,
    }
}

fn ts_qualified_name(node: &Node) -> Option<String> {
    match node.kind() {
        NodeType::Identifier => node.str_field("name").map(|name| name.to_string()),
        NodeType::TSQualifiedName => {
            let left = ts_qualified_name(node.child("left")?)?;
            let right = node.child("right")?.str_field("name")?;
            Some(format!("{}.{}", left, right))
        }
        _ => None,
    }
}

fn take_params(type_parameters: &mut Node) -> Vec<Node> {
    match type_parameters.take_field("params") {
        Some(Value::List(items)) => items.into_iter().filter_map(Value::into_node).collect(),
        _ => Vec::new(),
    }
}

fn dedup(nodes: Vec<Node>, rules: &UnionRules) -> Vec<Node> {
    let mut queue: VecDeque<Node> = nodes.into();
    let mut types: Vec<Node> = Vec::new();
    let mut bases: FxIndexMap<NodeType, Node> = FxIndexMap::default();
    let mut generics: FxIndexMap<String, Node> = FxIndexMap::default();

    while let Some(node) = queue.pop_front() {
        // The "any" type swallows the whole union.
        if node.kind() == rules.any {
            return vec![node];
        }

        if node.is(rules.base) {
            bases.insert(node.kind(), node);
            continue;
        }

        if node.kind() == rules.union {
            let mut node = node;
            if let Some(Value::List(items)) = node.take_field("types") {
                for item in items {
                    if let Value::Node(child) = item {
                        queue.push_back(*child);
                    }
                }
            }
            continue;
        }

        if node.kind() == rules.generic {
            let name = node.child(rules.name_key).and_then(rules.qualified);
            let name = match name {
                Some(name) => name,
                None => {
                    types.push(node);
                    continue;
                }
            };
            match generics.entry(name) {
                Entry::Occupied(mut entry) => {
                    if entry.get().child("typeParameters").is_some() {
                        let mut node = node;
                        if let Some(mut tp) = node.take_child("typeParameters") {
                            let incoming = take_params(&mut tp);
                            if let Some(existing) = entry.get_mut().child_mut("typeParameters") {
                                let mut params = take_params(existing);
                                params.extend(incoming);
                                let deduped = dedup(params, rules);
                                existing.set_field("params", Value::nodes(deduped));
                            }
                        }
                    } else if node.child("typeParameters").is_some() {
                        *entry.get_mut() = node;
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(node);
                }
            }
            continue;
        }

        types.push(node);
    }

    types.extend(bases.into_values());
    types.extend(generics.into_values());
    types
}

/// Flattens nested Flow unions and drops redundant members: repeated base
/// annotations collapse, same-named generic references merge their type
/// parameter lists, and `any` swallows everything.
pub fn remove_type_duplicates(nodes: Vec<Node>) -> Vec<Node> {
    dedup(nodes, &FLOW_RULES)
}

pub fn remove_ts_type_duplicates(nodes: Vec<Node>) -> Vec<Node> {
    dedup(nodes, &TS_RULES)
}

/// Builds a Flow union over the de-duplicated members; a single survivor
/// is returned bare, without the union wrapper.
pub fn create_flow_union_type(types: Vec<Node>) -> Node {
    let mut flattened = remove_type_duplicates(types);
    if flattened.len() == 1 {
        return flattened.swap_remove(0);
    }
    let mut union = Node::new(NodeType::UnionTypeAnnotation);
    union.set_field("types", Value::nodes(flattened));
    union
}

/// Builds a TS union over the de-duplicated members; `TSTypeAnnotation`
/// wrappers are unwrapped first, and a single survivor is returned bare.
pub fn create_ts_union_type(type_annotations: Vec<Node>) -> Node {
    let types = type_annotations
        .into_iter()
        .map(|node| {
            if node.kind() == NodeType::TSTypeAnnotation {
                let mut node = node;
                match node.take_child("typeAnnotation") {
                    Some(inner) => inner,
                    None => node,
                }
            } else {
                node
            }
        })
        .collect();
    let mut flattened = remove_ts_type_duplicates(types);
    if flattened.len() == 1 {
        return flattened.swap_remove(0);
    }
    let mut union = Node::new(NodeType::TSUnionType);
    union.set_field("types", Value::nodes(flattened));
    union
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Node {
        let mut node = Node::new(NodeType::Identifier);
        node.set_field("name", name);
        node
    }

    fn generic(name: &str, params: Option<Vec<Node>>) -> Node {
        let mut node = Node::new(NodeType::GenericTypeAnnotation);
        node.set_field("id", ident(name));
        if let Some(params) = params {
            let mut tp = Node::new(NodeType::TypeParameterInstantiation);
            tp.set_field("params", Value::nodes(params));
            node.set_field("typeParameters", tp);
        }
        node
    }

    fn flow_union(types: Vec<Node>) -> Node {
        let mut node = Node::new(NodeType::UnionTypeAnnotation);
        node.set_field("types", Value::nodes(types));
        node
    }

    #[test]
    fn any_collapses_the_union() {
        let result = create_flow_union_type(vec![
            Node::new(NodeType::StringTypeAnnotation),
            Node::new(NodeType::AnyTypeAnnotation),
            Node::new(NodeType::NumberTypeAnnotation),
        ]);
        assert_eq!(result.kind(), NodeType::AnyTypeAnnotation);
    }

    #[test]
    fn nested_unions_flatten_and_bases_dedup() {
        let inner = flow_union(vec![
            Node::new(NodeType::StringTypeAnnotation),
            Node::new(NodeType::NumberTypeAnnotation),
        ]);
        let result = create_flow_union_type(vec![
            Node::new(NodeType::StringTypeAnnotation),
            inner,
        ]);
        assert_eq!(result.kind(), NodeType::UnionTypeAnnotation);
        let kinds: Vec<_> = result
            .list("types")
            .unwrap()
            .iter()
            .map(|v| v.as_node().unwrap().kind())
            .collect();
        assert_eq!(
            kinds,
            vec![NodeType::StringTypeAnnotation, NodeType::NumberTypeAnnotation]
        );
    }

    #[test]
    fn single_survivor_is_bare() {
        let result = create_flow_union_type(vec![
            Node::new(NodeType::StringTypeAnnotation),
            Node::new(NodeType::StringTypeAnnotation),
        ]);
        assert_eq!(result.kind(), NodeType::StringTypeAnnotation);
    }

    #[test]
    fn same_named_generics_merge_their_parameters() {
        let a = generic("Box", Some(vec![Node::new(NodeType::StringTypeAnnotation)]));
        let b = generic("Box", Some(vec![Node::new(NodeType::NumberTypeAnnotation)]));
        let result = create_flow_union_type(vec![a, b]);
        assert_eq!(result.kind(), NodeType::GenericTypeAnnotation);
        let params = result
            .child("typeParameters")
            .unwrap()
            .list("params")
            .unwrap();
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn ts_unions_unwrap_annotations() {
        let mut wrapped = Node::new(NodeType::TSTypeAnnotation);
        wrapped.set_field("typeAnnotation", Node::new(NodeType::TSStringKeyword));
        let result = create_ts_union_type(vec![
            wrapped,
            Node::new(NodeType::TSNumberKeyword),
        ]);
        assert_eq!(result.kind(), NodeType::TSUnionType);
        let kinds: Vec<_> = result
            .list("types")
            .unwrap()
            .iter()
            .map(|v| v.as_node().unwrap().kind())
            .collect();
        assert_eq!(kinds, vec![NodeType::TSStringKeyword, NodeType::TSNumberKeyword]);
    }

    #[test]
    fn ts_base_keywords_dedup() {
        let result = create_ts_union_type(vec![
            Node::new(NodeType::TSStringKeyword),
            Node::new(NodeType::TSStringKeyword),
        ]);
        assert_eq!(result.kind(), NodeType::TSStringKeyword);
    }
}
