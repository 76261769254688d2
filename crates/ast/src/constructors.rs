//! Typed constructors for the frequently-built node types; thin wrappers
//! over [`builder`](crate::builder::builder).

use crate::builder::builder;
use crate::error::Error;
use crate::node::{Node, NodeType, Value};

pub fn identifier(name: &str) -> Result<Node, Error> {
    builder(NodeType::Identifier, vec![Value::str(name)])
}

pub fn string_literal(value: &str) -> Result<Node, Error> {
    builder(NodeType::StringLiteral, vec![Value::str(value)])
}

pub fn numeric_literal(value: f64) -> Result<Node, Error> {
    builder(NodeType::NumericLiteral, vec![Value::Num(value)])
}

pub fn boolean_literal(value: bool) -> Result<Node, Error> {
    builder(NodeType::BooleanLiteral, vec![Value::Bool(value)])
}

pub fn null_literal() -> Result<Node, Error> {
    builder(NodeType::NullLiteral, vec![])
}

pub fn reg_exp_literal(pattern: &str, flags: &str) -> Result<Node, Error> {
    builder(
        NodeType::RegExpLiteral,
        vec![Value::str(pattern), Value::str(flags)],
    )
}

pub fn binary_expression(operator: &str, left: Node, right: Node) -> Result<Node, Error> {
    builder(
        NodeType::BinaryExpression,
        vec![Value::str(operator), Value::node(left), Value::node(right)],
    )
}

pub fn logical_expression(operator: &str, left: Node, right: Node) -> Result<Node, Error> {
    builder(
        NodeType::LogicalExpression,
        vec![Value::str(operator), Value::node(left), Value::node(right)],
    )
}

pub fn unary_expression(operator: &str, argument: Node) -> Result<Node, Error> {
    builder(
        NodeType::UnaryExpression,
        vec![Value::str(operator), Value::node(argument)],
    )
}

pub fn assignment_expression(operator: &str, left: Node, right: Node) -> Result<Node, Error> {
    builder(
        NodeType::AssignmentExpression,
        vec![Value::str(operator), Value::node(left), Value::node(right)],
    )
}

pub fn conditional_expression(test: Node, consequent: Node, alternate: Node) -> Result<Node, Error> {
    builder(
        NodeType::ConditionalExpression,
        vec![
            Value::node(test),
            Value::node(consequent),
            Value::node(alternate),
        ],
    )
}

pub fn sequence_expression(expressions: Vec<Node>) -> Result<Node, Error> {
    builder(NodeType::SequenceExpression, vec![Value::nodes(expressions)])
}

pub fn member_expression(object: Node, property: Node, computed: bool) -> Result<Node, Error> {
    builder(
        NodeType::MemberExpression,
        vec![
            Value::node(object),
            Value::node(property),
            Value::Bool(computed),
        ],
    )
}

pub fn call_expression(callee: Node, arguments: Vec<Node>) -> Result<Node, Error> {
    builder(
        NodeType::CallExpression,
        vec![Value::node(callee), Value::nodes(arguments)],
    )
}

pub fn expression_statement(expression: Node) -> Result<Node, Error> {
    builder(NodeType::ExpressionStatement, vec![Value::node(expression)])
}

pub fn return_statement(argument: Option<Node>) -> Result<Node, Error> {
    let argument = argument.map(Value::node).unwrap_or(Value::Null);
    builder(NodeType::ReturnStatement, vec![argument])
}

pub fn block_statement(body: Vec<Node>) -> Result<Node, Error> {
    builder(NodeType::BlockStatement, vec![Value::nodes(body)])
}

pub fn variable_declaration(kind: &str, declarations: Vec<Node>) -> Result<Node, Error> {
    builder(
        NodeType::VariableDeclaration,
        vec![Value::str(kind), Value::nodes(declarations)],
    )
}

pub fn variable_declarator(id: Node, init: Option<Node>) -> Result<Node, Error> {
    let init = init.map(Value::node).unwrap_or(Value::Null);
    builder(NodeType::VariableDeclarator, vec![Value::node(id), init])
}

pub fn array_expression(elements: Vec<Node>) -> Result<Node, Error> {
    builder(NodeType::ArrayExpression, vec![Value::nodes(elements)])
}

pub fn object_expression(properties: Vec<Node>) -> Result<Node, Error> {
    builder(NodeType::ObjectExpression, vec![Value::nodes(properties)])
}

pub fn object_property(key: Node, value: Node, computed: bool) -> Result<Node, Error> {
    builder(
        NodeType::ObjectProperty,
        vec![Value::node(key), Value::node(value), Value::Bool(computed)],
    )
}

pub fn union_type_annotation(types: Vec<Node>) -> Result<Node, Error> {
    builder(NodeType::UnionTypeAnnotation, vec![Value::nodes(types)])
}

pub fn ts_union_type(types: Vec<Node>) -> Result<Node, Error> {
    builder(NodeType::TSUnionType, vec![Value::nodes(types)])
}
