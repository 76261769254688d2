//! Node cloning.
//!
//! Only the fields the registry declares for a node's type are copied; ad
//! hoc extras a caller attached are dropped. This is a deliberate
//! lossy-clone contract: the schema defines what a node *is*.

use crate::node::{Node, NodeType, Value};
use crate::registry;
use estree_common::{Comment, Span};

pub fn clone_deep(node: &Node) -> Node {
    clone_node(node, true, false)
}

pub fn clone_without_loc(node: &Node) -> Node {
    clone_node(node, false, true)
}

pub fn clone_deep_without_loc(node: &Node) -> Node {
    clone_node(node, true, true)
}

/// Clones `node`. `deep` recurses through node- and list-valued fields;
/// `without_loc` strips spans and locations, recursively only when `deep`.
pub fn clone_node(node: &Node, deep: bool, without_loc: bool) -> Node {
    let mut out = Node::new(node.kind());
    if !without_loc {
        out.span = node.span;
        out.loc = node.loc.clone();
    }

    if node.kind() == NodeType::Identifier {
        // Identifiers are cloned by hand: name, the optional marker when
        // present, and the type annotation.
        if let Some(name) = node.field("name") {
            out.set_field("name", name.clone());
        }
        if let Some(optional) = node.field("optional") {
            if !optional.is_null() {
                out.set_field("optional", optional.clone());
            }
        }
        if let Some(annotation) = node.field("typeAnnotation") {
            if !annotation.is_null() {
                let cloned = if deep {
                    clone_value(annotation, without_loc)
                } else {
                    annotation.clone()
                };
                out.set_field("typeAnnotation", cloned);
            }
        }
    } else {
        for key in registry::node_fields(node.kind()).keys() {
            if let Some(value) = node.field(key) {
                let cloned = if deep {
                    clone_value(value, without_loc)
                } else {
                    value.clone()
                };
                out.set_field(key, cloned);
            }
        }
    }

    out.leading_comments = clone_comments(&node.leading_comments, without_loc);
    out.trailing_comments = clone_comments(&node.trailing_comments, without_loc);
    out.inner_comments = clone_comments(&node.inner_comments, without_loc);
    out.extra = node.extra.clone();
    out
}

fn clone_value(value: &Value, without_loc: bool) -> Value {
    match value {
        Value::Node(node) => Value::node(clone_node(node, true, without_loc)),
        Value::List(items) => Value::List(
            items
                .iter()
                .map(|item| clone_value(item, without_loc))
                .collect(),
        ),
        Value::Obj(entries) => Value::Obj(
            entries
                .iter()
                .map(|(key, item)| (*key, clone_value(item, without_loc)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn clone_comments(comments: &[Comment], without_loc: bool) -> Vec<Comment> {
    comments
        .iter()
        .map(|comment| {
            let mut comment = comment.clone();
            if without_loc {
                comment.span = Span::default();
                comment.loc = None;
            }
            comment
        })
        .collect()
}
