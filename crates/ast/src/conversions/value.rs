use super::{
    make_binary_expression, make_numeric_literal, make_string_literal, make_unary_expression,
    make_undefined,
};
use crate::node::{Node, NodeType, Value};
use crate::predicates::is_valid_identifier;

/// The closed set of runtime values [`value_to_node`] accepts. Functions,
/// class instances and other host objects have no literal rendering and
/// are unrepresentable here by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    Undefined,
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    Regex { pattern: String, flags: String },
    Array(Vec<JsValue>),
    Object(Vec<(String, JsValue)>),
}

/// Encodes a runtime value as the literal node that evaluates back to it.
///
/// Non-finite numbers have no literal form and are encoded as division
/// expressions (`1/0`, `0/0`); negative numbers, including `-0`, wrap an
/// unsigned literal in a unary minus.
pub fn value_to_node(value: &JsValue) -> Node {
    match value {
        JsValue::Undefined => make_undefined(),
        JsValue::Null => Node::new(NodeType::NullLiteral),
        JsValue::Bool(value) => {
            let mut node = Node::new(NodeType::BooleanLiteral);
            node.set_field("value", *value);
            node
        }
        JsValue::Str(value) => make_string_literal(value),
        JsValue::Num(value) => number_to_node(*value),
        JsValue::Regex { pattern, flags } => {
            let mut node = Node::new(NodeType::RegExpLiteral);
            node.set_field("pattern", pattern.as_str());
            node.set_field("flags", flags.as_str());
            node
        }
        JsValue::Array(items) => {
            let mut node = Node::new(NodeType::ArrayExpression);
            node.set_field(
                "elements",
                Value::nodes(items.iter().map(value_to_node).collect()),
            );
            node
        }
        JsValue::Object(entries) => {
            let properties = entries
                .iter()
                .map(|(key, item)| {
                    let key_node = if is_valid_identifier(key) {
                        let mut id = Node::new(NodeType::Identifier);
                        id.set_field("name", key.as_str());
                        id
                    } else {
                        make_string_literal(key)
                    };
                    let mut property = Node::new(NodeType::ObjectProperty);
                    property.set_field("key", key_node);
                    property.set_field("value", value_to_node(item));
                    property.set_field("computed", false);
                    property.set_field("shorthand", false);
                    property
                })
                .collect();
            let mut node = Node::new(NodeType::ObjectExpression);
            node.set_field("properties", Value::nodes(properties));
            node
        }
    }
}

fn number_to_node(value: f64) -> Node {
    let negative = value < 0.0 || (value == 0.0 && value.is_sign_negative());
    let result = if value.is_finite() {
        make_numeric_literal(value.abs())
    } else {
        let numerator = if value.is_nan() { 0.0 } else { 1.0 };
        make_binary_expression(
            "/",
            make_numeric_literal(numerator),
            make_numeric_literal(0.0),
        )
    };
    if negative {
        make_unary_expression("-", result, true)
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives() {
        assert_eq!(
            value_to_node(&JsValue::Null).kind(),
            NodeType::NullLiteral
        );
        assert_eq!(
            value_to_node(&JsValue::Bool(true)).bool_field("value"),
            Some(true)
        );
        assert_eq!(
            value_to_node(&JsValue::Str("hi".into())).str_field("value").map(|s| &**s),
            Some("hi")
        );
        let undef = value_to_node(&JsValue::Undefined);
        assert_eq!(undef.kind(), NodeType::UnaryExpression);
        assert_eq!(undef.str_field("operator").map(|s| &**s), Some("void"));
    }

    #[test]
    fn nan_is_zero_over_zero() {
        let node = value_to_node(&JsValue::Num(f64::NAN));
        assert_eq!(node.kind(), NodeType::BinaryExpression);
        assert_eq!(node.child("left").unwrap().num_field("value"), Some(0.0));
        assert_eq!(node.child("right").unwrap().num_field("value"), Some(0.0));
    }

    #[test]
    fn negative_infinity_is_negated_one_over_zero() {
        let node = value_to_node(&JsValue::Num(f64::NEG_INFINITY));
        assert_eq!(node.kind(), NodeType::UnaryExpression);
        let inner = node.child("argument").unwrap();
        assert_eq!(inner.kind(), NodeType::BinaryExpression);
        assert_eq!(inner.child("left").unwrap().num_field("value"), Some(1.0));
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        let node = value_to_node(&JsValue::Num(-0.0));
        assert_eq!(node.kind(), NodeType::UnaryExpression);
        assert_eq!(node.str_field("operator").map(|s| &**s), Some("-"));
        assert_eq!(node.child("argument").unwrap().num_field("value"), Some(0.0));

        let zero = value_to_node(&JsValue::Num(0.0));
        assert_eq!(zero.kind(), NodeType::NumericLiteral);
    }

    #[test]
    fn objects_pick_identifier_or_string_keys() {
        let node = value_to_node(&JsValue::Object(vec![
            ("ok".into(), JsValue::Num(1.0)),
            ("not ok".into(), JsValue::Num(2.0)),
        ]));
        let properties = node.list("properties").unwrap();
        let first_key = properties[0].as_node().unwrap().child("key").unwrap();
        let second_key = properties[1].as_node().unwrap().child("key").unwrap();
        assert_eq!(first_key.kind(), NodeType::Identifier);
        assert_eq!(second_key.kind(), NodeType::StringLiteral);
    }

    #[test]
    fn arrays_recurse() {
        let node = value_to_node(&JsValue::Array(vec![
            JsValue::Num(1.0),
            JsValue::Str("two".into()),
        ]));
        assert_eq!(node.kind(), NodeType::ArrayExpression);
        let elements = node.list("elements").unwrap();
        assert_eq!(elements[0].as_node().unwrap().kind(), NodeType::NumericLiteral);
        assert_eq!(elements[1].as_node().unwrap().kind(), NodeType::StringLiteral);
    }
}
