//! Generic tree walks driven by the registered visitor keys.
//!
//! The walks assume the tree is a tree; the schema cannot express cycles
//! (children are owned values), so no visited-set is needed.

use crate::node::{Node, Value};
use crate::registry;

/// One frame of the path from the root to the current node: the parent,
/// the field it was reached through, and the list index if that field is
/// a list.
#[derive(Debug, Clone, Copy)]
pub struct Ancestor<'a> {
    pub node: &'a Node,
    pub key: &'static str,
    pub index: Option<usize>,
}

pub trait Traverser {
    fn enter(&mut self, _node: &Node, _ancestors: &[Ancestor<'_>]) {}
    fn exit(&mut self, _node: &Node, _ancestors: &[Ancestor<'_>]) {}
}

/// Pre-order `enter` and post-order `exit` over the whole tree, threading
/// the ancestor path to each callback.
pub fn traverse<T: Traverser>(node: &Node, visitor: &mut T) {
    let mut ancestors = Vec::new();
    walk(node, visitor, &mut ancestors);
}

fn walk<'a, T: Traverser>(node: &'a Node, visitor: &mut T, ancestors: &mut Vec<Ancestor<'a>>) {
    visitor.enter(node, ancestors);
    for &key in registry::visitor_keys(node.kind()) {
        match node.field(key) {
            Some(Value::Node(child)) => {
                ancestors.push(Ancestor {
                    node,
                    key,
                    index: None,
                });
                walk(child, visitor, ancestors);
                ancestors.pop();
            }
            Some(Value::List(items)) => {
                for (index, item) in items.iter().enumerate() {
                    if let Value::Node(child) = item {
                        ancestors.push(Ancestor {
                            node,
                            key,
                            index: Some(index),
                        });
                        walk(child, visitor, ancestors);
                        ancestors.pop();
                    }
                }
            }
            _ => {}
        }
    }
    visitor.exit(node, ancestors);
}

/// The cheap variant: enter-only, no ancestor tracking. For read-only
/// full-tree scans.
pub fn traverse_fast(node: &Node, f: &mut impl FnMut(&Node)) {
    f(node);
    for &key in registry::visitor_keys(node.kind()) {
        match node.field(key) {
            Some(Value::Node(child)) => traverse_fast(child, f),
            Some(Value::List(items)) => {
                for item in items {
                    if let Value::Node(child) = item {
                        traverse_fast(child, f);
                    }
                }
            }
            _ => {}
        }
    }
}

/// [`traverse_fast`] with mutable access, powering whole-tree rewrites
/// such as `remove_properties_deep`.
pub fn traverse_fast_mut(node: &mut Node, f: &mut impl FnMut(&mut Node)) {
    f(node);
    // Re-read the keys after the callback; it may have re-tagged the node.
    let keys = registry::visitor_keys(node.kind());
    for &key in keys {
        match node.field_mut(key) {
            Some(Value::Node(child)) => traverse_fast_mut(child, f),
            Some(Value::List(items)) => {
                for item in items {
                    if let Value::Node(child) = item {
                        traverse_fast_mut(child, f);
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::builder;
    use crate::node::NodeType;

    fn ident(name: &str) -> Node {
        builder(NodeType::Identifier, vec![Value::str(name)]).unwrap()
    }

    fn sample() -> Node {
        // (a + b) * c as a small three-level tree.
        let sum = builder(
            NodeType::BinaryExpression,
            vec![
                Value::str("+"),
                Value::node(ident("a")),
                Value::node(ident("b")),
            ],
        )
        .unwrap();
        builder(
            NodeType::BinaryExpression,
            vec![Value::str("*"), Value::node(sum), Value::node(ident("c"))],
        )
        .unwrap()
    }

    #[test]
    fn enter_exit_order() {
        struct Recorder {
            events: Vec<(String, &'static str)>,
        }
        impl Traverser for Recorder {
            fn enter(&mut self, node: &Node, _: &[Ancestor<'_>]) {
                self.events.push(("enter".to_string(), node.kind().as_str()));
            }
            fn exit(&mut self, node: &Node, _: &[Ancestor<'_>]) {
                self.events.push(("exit".to_string(), node.kind().as_str()));
            }
        }

        let tree = sample();
        let mut recorder = Recorder { events: Vec::new() };
        traverse(&tree, &mut recorder);
        let names: Vec<_> = recorder
            .events
            .iter()
            .map(|(phase, kind)| format!("{} {}", phase, kind))
            .collect();
        assert_eq!(
            names,
            vec![
                "enter BinaryExpression",
                "enter BinaryExpression",
                "enter Identifier",
                "exit Identifier",
                "enter Identifier",
                "exit Identifier",
                "exit BinaryExpression",
                "enter Identifier",
                "exit Identifier",
                "exit BinaryExpression",
            ]
        );
    }

    #[test]
    fn ancestors_describe_the_path() {
        struct Deepest {
            path: Vec<(&'static str, Option<usize>)>,
        }
        impl Traverser for Deepest {
            fn enter(&mut self, node: &Node, ancestors: &[Ancestor<'_>]) {
                if node.str_field("name").map(|s| &**s) == Some("b") {
                    self.path = ancestors.iter().map(|a| (a.key, a.index)).collect();
                }
            }
        }

        let tree = sample();
        let mut visitor = Deepest { path: Vec::new() };
        traverse(&tree, &mut visitor);
        assert_eq!(visitor.path, vec![("left", None), ("right", None)]);
    }

    #[test]
    fn fast_walk_counts_nodes() {
        let tree = sample();
        let mut count = 0;
        traverse_fast(&tree, &mut |_| count += 1);
        assert_eq!(count, 5);
    }

    #[test]
    fn fast_mut_rewrites_in_place() {
        let mut tree = sample();
        traverse_fast_mut(&mut tree, &mut |node| {
            if node.kind() == NodeType::Identifier {
                node.set_field("name", "z");
            }
        });
        let mut names = Vec::new();
        traverse_fast(&tree, &mut |node| {
            if let Some(name) = node.str_field("name") {
                names.push(name.to_string());
            }
        });
        assert_eq!(names, vec!["z", "z", "z"]);
    }
}
