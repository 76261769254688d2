//! Conversions between node shapes.
//!
//! Conversions consume their input and return a re-tagged or re-wrapped
//! node. When no valid target shape exists the original node rides back
//! inside the error ([`ConversionError::into_node`]), so callers can probe
//! convertibility without losing the input.

mod sequence;
mod union;
mod value;

pub use sequence::to_sequence_expression;
pub use union::{
    create_flow_union_type, create_ts_union_type, remove_ts_type_duplicates,
    remove_type_duplicates,
};
pub use value::{value_to_node, JsValue};

use crate::error::ConversionError;
use crate::node::{Alias, Node, NodeType, Value};
use crate::predicates::is_valid_identifier;
use estree_common::{is_ident_part, is_strict_bind_only_reserved_word};

// Internal constructors for shapes this module knows to be valid.

pub(crate) fn make_expression_statement(expression: Node) -> Node {
    let mut node = Node::new(NodeType::ExpressionStatement);
    node.set_field("expression", expression);
    node
}

pub(crate) fn make_block_statement(body: Vec<Node>) -> Node {
    let mut node = Node::new(NodeType::BlockStatement);
    node.set_field("body", Value::nodes(body));
    node.set_field("directives", Value::List(Vec::new()));
    node
}

pub(crate) fn make_return_statement(argument: Node) -> Node {
    let mut node = Node::new(NodeType::ReturnStatement);
    node.set_field("argument", argument);
    node
}

pub(crate) fn make_string_literal(value: &str) -> Node {
    let mut node = Node::new(NodeType::StringLiteral);
    node.set_field("value", value);
    node
}

pub(crate) fn make_numeric_literal(value: f64) -> Node {
    let mut node = Node::new(NodeType::NumericLiteral);
    node.set_field("value", value);
    node
}

pub(crate) fn make_unary_expression(operator: &str, argument: Node, prefix: bool) -> Node {
    let mut node = Node::new(NodeType::UnaryExpression);
    node.set_field("operator", operator);
    node.set_field("argument", argument);
    node.set_field("prefix", prefix);
    node
}

pub(crate) fn make_binary_expression(operator: &str, left: Node, right: Node) -> Node {
    let mut node = Node::new(NodeType::BinaryExpression);
    node.set_field("operator", operator);
    node.set_field("left", left);
    node.set_field("right", right);
    node
}

/// `void 0`, the canonical undefined.
pub(crate) fn make_undefined() -> Node {
    make_unary_expression("void", make_numeric_literal(0.0), true)
}

/// Converts an expression-shaped node into its statement form: statements
/// pass through, class/function expressions with an `id` are re-tagged to
/// declarations, assignments are wrapped in an expression statement.
pub fn to_statement(node: Node) -> Result<Node, ConversionError> {
    if node.is(Alias::Statement) {
        return Ok(node);
    }
    if node.kind() == NodeType::AssignmentExpression {
        return Ok(make_expression_statement(node));
    }

    let new_kind = if node.is(Alias::Class) {
        NodeType::ClassDeclaration
    } else if node.is(Alias::Function) {
        NodeType::FunctionDeclaration
    } else {
        return Err(ConversionError::new(
            node,
            "statement",
            "the node has no corresponding statement form",
        ));
    };

    if node.child("id").is_none() {
        return Err(ConversionError::new(node, "statement", "an id is required"));
    }

    let mut node = node;
    node.set_kind(new_kind);
    Ok(node)
}

/// The inverse of [`to_statement`]: unwraps an expression statement or
/// re-tags a class/function declaration to its expression form.
pub fn to_expression(node: Node) -> Result<Node, ConversionError> {
    let mut node = node;
    if node.kind() == NodeType::ExpressionStatement {
        if let Some(expression) = node.take_child("expression") {
            node = expression;
        }
    }
    if node.is(Alias::Expression) {
        return Ok(node);
    }

    if node.is(Alias::Class) {
        node.set_kind(NodeType::ClassExpression);
    } else if node.is(Alias::Function) {
        node.set_kind(NodeType::FunctionExpression);
    }

    if node.is(Alias::Expression) {
        Ok(node)
    } else {
        Err(ConversionError::new(
            node,
            "expression",
            "the node has no corresponding expression form",
        ))
    }
}

/// Wraps `block` into a `BlockStatement`. A bare expression becomes a
/// return statement when the parent is a function, an expression
/// statement otherwise; an empty statement becomes an empty block.
pub fn to_block(block: Node, parent: Option<&Node>) -> Node {
    if block.kind() == NodeType::BlockStatement {
        return block;
    }
    if block.kind() == NodeType::EmptyStatement {
        return make_block_statement(Vec::new());
    }

    let statement = if block.is(Alias::Statement) {
        block
    } else if parent.map(|p| p.is(Alias::Function)).unwrap_or(false) {
        make_return_statement(block)
    } else {
        make_expression_statement(block)
    };
    make_block_statement(vec![statement])
}

/// Applies [`to_block`] to the named child in place. Nodes without that
/// child are left alone.
pub fn ensure_block(node: &mut Node, key: &'static str) {
    if let Some(child) = node.take_child(key) {
        let block = to_block(child, Some(&*node));
        node.set_field(key, block);
    }
}

/// An identifier key of a non-computed member becomes a string literal,
/// usable as a computed key.
pub fn to_computed_key(node: &Node, key: Node) -> Node {
    if !node.bool_field("computed").unwrap_or(false) && key.kind() == NodeType::Identifier {
        if let Some(name) = key.str_field("name") {
            return make_string_literal(name);
        }
    }
    key
}

/// Coerces an arbitrary string into a usable identifier name: invalid
/// characters turn into word boundaries, leading digits are stripped, and
/// a `_` prefix rescues names that remain invalid (e.g. keywords).
pub fn to_identifier(input: &str) -> String {
    let mut name = String::new();
    let mut upper_next = false;
    for c in input.chars() {
        if !is_ident_part(c) || c == '-' {
            upper_next = !name.is_empty();
            continue;
        }
        if name.is_empty() && c.is_ascii_digit() {
            continue;
        }
        if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }

    if !is_valid_identifier(&name) {
        name.insert(0, '_');
    }
    if name == "_" || name.is_empty() {
        "_".to_string()
    } else {
        name
    }
}

/// [`to_identifier`] for binding positions, where `eval` and `arguments`
/// are also off-limits.
pub fn to_binding_identifier_name(input: &str) -> String {
    let name = to_identifier(input);
    if is_strict_bind_only_reserved_word(&name) {
        format!("_{}", name)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::builder;

    fn ident(name: &str) -> Node {
        builder(NodeType::Identifier, vec![Value::str(name)]).unwrap()
    }

    fn function_expression(id: Option<Node>) -> Node {
        builder(
            NodeType::FunctionExpression,
            vec![
                id.map(Value::node).unwrap_or(Value::Null),
                Value::List(Vec::new()),
                Value::node(make_block_statement(Vec::new())),
            ],
        )
        .unwrap()
    }

    #[test]
    fn statement_and_expression_are_inverses() {
        let expr = function_expression(Some(ident("f")));
        let statement = to_statement(expr).unwrap();
        assert_eq!(statement.kind(), NodeType::FunctionDeclaration);
        let back = to_expression(statement).unwrap();
        assert_eq!(back.kind(), NodeType::FunctionExpression);
    }

    #[test]
    fn statement_conversion_requires_an_id() {
        let anonymous = function_expression(None);
        let err = to_statement(anonymous).unwrap_err();
        // The consumed node comes back unchanged.
        let node = err.into_node();
        assert_eq!(node.kind(), NodeType::FunctionExpression);
    }

    #[test]
    fn assignments_become_expression_statements() {
        let assign = builder(
            NodeType::AssignmentExpression,
            vec![
                Value::str("="),
                Value::node(ident("a")),
                Value::node(ident("b")),
            ],
        )
        .unwrap();
        let statement = to_statement(assign).unwrap();
        assert_eq!(statement.kind(), NodeType::ExpressionStatement);
    }

    #[test]
    fn to_expression_unwraps_expression_statements() {
        let statement = make_expression_statement(ident("a"));
        let expr = to_expression(statement).unwrap();
        assert_eq!(expr.kind(), NodeType::Identifier);

        let empty = Node::new(NodeType::EmptyStatement);
        assert!(to_expression(empty).is_err());
    }

    #[test]
    fn to_block_wraps_by_parent_kind() {
        let in_function = to_block(ident("x"), Some(&function_expression(None)));
        assert_eq!(
            in_function.list("body").unwrap()[0].as_node().unwrap().kind(),
            NodeType::ReturnStatement
        );

        let bare = to_block(ident("x"), None);
        assert_eq!(
            bare.list("body").unwrap()[0].as_node().unwrap().kind(),
            NodeType::ExpressionStatement
        );

        let empty = to_block(Node::new(NodeType::EmptyStatement), None);
        assert!(empty.list("body").unwrap().is_empty());
    }

    #[test]
    fn computed_keys() {
        let property = builder(
            NodeType::ObjectProperty,
            vec![Value::node(ident("k")), Value::node(ident("v"))],
        )
        .unwrap();
        let key = to_computed_key(&property, ident("k"));
        assert_eq!(key.kind(), NodeType::StringLiteral);
        assert_eq!(key.str_field("value").map(|s| &**s), Some("k"));
    }

    #[test]
    fn identifier_coercion() {
        assert_eq!(to_identifier("foo bar"), "fooBar");
        assert_eq!(to_identifier("123abc"), "abc");
        assert_eq!(to_identifier("default"), "_default");
        assert_eq!(to_identifier("***"), "_");
        assert_eq!(to_binding_identifier_name("arguments"), "_arguments");
        assert_eq!(to_binding_identifier_name("ok"), "ok");
    }
}
