//! Comment attachment and inheritance, plus the property-scrubbing
//! helpers built on them.

use crate::node::Node;
use crate::traverse::traverse_fast_mut;
use estree_common::{Comment, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSlot {
    Leading,
    Trailing,
    Inner,
}

fn slot(node: &mut Node, which: CommentSlot) -> &mut Vec<Comment> {
    match which {
        CommentSlot::Leading => &mut node.leading_comments,
        CommentSlot::Trailing => &mut node.trailing_comments,
        CommentSlot::Inner => &mut node.inner_comments,
    }
}

pub fn add_comment(node: &mut Node, which: CommentSlot, value: &str, line: bool) {
    let comment = if line {
        Comment::line(value)
    } else {
        Comment::block(value)
    };
    slot(node, which).push(comment);
}

pub fn add_comments(node: &mut Node, which: CommentSlot, comments: Vec<Comment>) {
    slot(node, which).extend(comments);
}

fn inherit(child: &mut Node, which: CommentSlot, parent: &Node) {
    let inherited = match which {
        CommentSlot::Leading => &parent.leading_comments,
        CommentSlot::Trailing => &parent.trailing_comments,
        CommentSlot::Inner => &parent.inner_comments,
    };
    if inherited.is_empty() {
        return;
    }
    // The child's own comments come first; duplicates are dropped.
    let own = slot(child, which);
    for comment in inherited {
        if !own.contains(comment) {
            own.push(comment.clone());
        }
    }
}

pub fn inherit_leading_comments(child: &mut Node, parent: &Node) {
    inherit(child, CommentSlot::Leading, parent);
}

pub fn inherit_trailing_comments(child: &mut Node, parent: &Node) {
    inherit(child, CommentSlot::Trailing, parent);
}

pub fn inherit_inner_comments(child: &mut Node, parent: &Node) {
    inherit(child, CommentSlot::Inner, parent);
}

pub fn inherits_comments(child: &mut Node, parent: &Node) {
    inherit_leading_comments(child, parent);
    inherit_trailing_comments(child, parent);
    inherit_inner_comments(child, parent);
}

pub fn remove_comments(node: &mut Node) {
    node.leading_comments.clear();
    node.trailing_comments.clear();
    node.inner_comments.clear();
}

const INHERIT_OPTIONAL_KEYS: &[&'static str] = &["typeAnnotation", "typeParameters", "returnType"];

/// Makes `child` stand where `parent` stood: the source position is
/// force-copied, absent annotation fields are filled from the parent, and
/// comments are inherited.
pub fn inherits(child: &mut Node, parent: &Node) {
    for &key in INHERIT_OPTIONAL_KEYS {
        let missing = child.field(key).map(|v| v.is_null()).unwrap_or(true);
        if missing {
            if let Some(value) = parent.field(key) {
                if !value.is_null() {
                    child.set_field(key, value.clone());
                }
            }
        }
    }
    child.span = parent.span;
    child.loc = parent.loc.clone();
    inherits_comments(child, parent);
}

/// Scrubs position, extras and (optionally) comments from one node.
pub fn remove_properties(node: &mut Node, preserve_comments: bool) {
    node.span = Span::default();
    node.loc = None;
    node.extra.clear();
    if !preserve_comments {
        remove_comments(node);
    }
}

pub fn remove_properties_deep(tree: &mut Node, preserve_comments: bool) {
    traverse_fast_mut(tree, &mut |node| remove_properties(node, preserve_comments));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::builder;
    use crate::node::{NodeType, Value};
    use estree_common::{BytePos, CommentKind, Position, SourceLocation};

    fn ident(name: &str) -> Node {
        builder(NodeType::Identifier, vec![Value::str(name)]).unwrap()
    }

    #[test]
    fn add_and_remove() {
        let mut node = ident("a");
        add_comment(&mut node, CommentSlot::Leading, " first", true);
        add_comment(&mut node, CommentSlot::Trailing, " after", false);
        assert_eq!(node.leading_comments[0].kind, CommentKind::Line);
        assert_eq!(node.trailing_comments[0].kind, CommentKind::Block);
        remove_comments(&mut node);
        assert!(node.leading_comments.is_empty());
        assert!(node.trailing_comments.is_empty());
    }

    #[test]
    fn own_comments_come_first_without_duplicates() {
        let mut parent = ident("old");
        add_comment(&mut parent, CommentSlot::Leading, " from parent", true);
        let mut child = ident("new");
        add_comment(&mut child, CommentSlot::Leading, " own", true);
        add_comment(&mut child, CommentSlot::Leading, " from parent", true);

        inherit_leading_comments(&mut child, &parent);
        let texts: Vec<_> = child
            .leading_comments
            .iter()
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(texts, vec![" own", " from parent"]);
    }

    #[test]
    fn inherits_copies_position_and_fills_annotations() {
        let mut parent = ident("old");
        parent.span = Span::new(BytePos(5), BytePos(8));
        parent.loc = Some(SourceLocation::new(
            Position { line: 2, column: 0 },
            Position { line: 2, column: 3 },
        ));
        let mut annotation = Node::new(NodeType::TSTypeAnnotation);
        annotation.set_field(
            "typeAnnotation",
            Value::node(Node::new(NodeType::TSStringKeyword)),
        );
        parent.set_field("typeAnnotation", Value::node(annotation));

        let mut child = ident("new");
        inherits(&mut child, &parent);
        assert_eq!(child.span, parent.span);
        assert_eq!(child.loc, parent.loc);
        assert!(child.child("typeAnnotation").is_some());
    }

    #[test]
    fn remove_properties_deep_scrubs_the_whole_tree() {
        let mut inner = ident("a");
        inner.span = Span::new(BytePos(1), BytePos(2));
        add_comment(&mut inner, CommentSlot::Leading, " gone", true);
        let mut tree = builder(
            NodeType::ExpressionStatement,
            vec![Value::node(inner)],
        )
        .unwrap();
        tree.span = Span::new(BytePos(0), BytePos(3));

        remove_properties_deep(&mut tree, false);
        assert!(tree.span.is_dummy());
        let child = tree.child("expression").unwrap();
        assert!(child.span.is_dummy());
        assert!(child.leading_comments.is_empty());
    }
}
