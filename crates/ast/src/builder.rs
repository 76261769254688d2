//! Node construction.
//!
//! [`builder`] maps positional arguments onto the registered builder keys
//! of a type, substitutes defaults, and validates every assigned field
//! before the node is returned. Construction either yields a well-formed
//! node or an error; a half-built node never escapes.

use crate::error::Error;
use crate::node::{Node, NodeType, Value};
use crate::registry;

pub fn builder(kind: NodeType, args: Vec<Value>) -> Result<Node, Error> {
    let keys = registry::builder_keys(kind);
    if args.len() > keys.len() {
        return Err(Error::TooManyArguments {
            node_type: kind.as_str(),
            expected: keys.len(),
            got: args.len(),
        });
    }

    let fields = registry::node_fields(kind);
    let mut node = Node::new(kind);
    let mut args = args.into_iter();
    for &key in keys {
        let value = match args.next() {
            Some(value) => value,
            None => fields
                .get(key)
                .map(|field| field.default_value())
                .unwrap_or(Value::Null),
        };
        node.set_field(key, value);
    }

    for &key in keys {
        if let Some(value) = node.field(key) {
            validate_field(&node, key, value)?;
        }
    }

    Ok(node)
}

/// [`builder`] addressed by type name, resolving deprecated names (with a
/// warning) the way the old string-keyed API did.
pub fn builder_by_name(name: &str, args: Vec<Value>) -> Result<Node, Error> {
    let kind = registry::resolve_type_name(name)?;
    builder(kind, args)
}

/// Validates one field value against its registered shape. Unknown keys
/// pass; the schema only constrains what it declares.
pub fn validate_field(node: &Node, key: &str, value: &Value) -> Result<(), Error> {
    let field = match registry::node_fields(node.kind()).get(key) {
        Some(field) => field,
        None => return Ok(()),
    };
    if field.optional && value.is_null() {
        return Ok(());
    }
    match &field.validate {
        Some(validator) => validator.validate(node, key, value),
        None => Ok(()),
    }
}

/// Validates every declared field of `node`, for nodes that arrived from
/// outside the builders (e.g. straight from a parser).
pub fn validate_node(node: &Node) -> Result<(), Error> {
    for (key, field) in registry::node_fields(node.kind()) {
        let value = node.field(key).unwrap_or(&Value::Null);
        if value.is_null() && (field.optional || field.default.is_some()) {
            continue;
        }
        if let Some(validator) = &field.validate {
            validator.validate(node, key, value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Alias;

    fn ident(name: &str) -> Node {
        builder(NodeType::Identifier, vec![Value::str(name)]).unwrap()
    }

    #[test]
    fn builds_binary_expression() {
        let node = builder(
            NodeType::BinaryExpression,
            vec![
                Value::str("+"),
                Value::node(ident("a")),
                Value::node(builder(NodeType::NumericLiteral, vec![Value::Num(1.0)]).unwrap()),
            ],
        )
        .unwrap();
        assert_eq!(node.kind(), NodeType::BinaryExpression);
        assert_eq!(node.str_field("operator").map(|s| &**s), Some("+"));
        assert_eq!(node.child("left").unwrap().kind(), NodeType::Identifier);
        assert!(node.is(Alias::Expression));
        assert!(!node.is(Alias::Statement));
    }

    #[test]
    fn argument_overflow_precedes_validation() {
        // Four arguments against three builder keys; the fourth being
        // garbage must not matter because validation never runs.
        let err = builder(
            NodeType::BinaryExpression,
            vec![
                Value::str("@"),
                Value::Bool(true),
                Value::Bool(true),
                Value::Bool(true),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, Error::TooManyArguments { got: 4, expected: 3, .. }));
    }

    #[test]
    fn rejects_bad_operator() {
        let err = builder(
            NodeType::BinaryExpression,
            vec![
                Value::str("@"),
                Value::node(ident("a")),
                Value::node(ident("b")),
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("operator"), "{}", err);
    }

    #[test]
    fn defaults_fill_missing_arguments() {
        let node = builder(NodeType::StringLiteral, vec![Value::str("hi")]).unwrap();
        assert_eq!(node.str_field("value").map(|s| &**s), Some("hi"));

        let unary = builder(
            NodeType::UnaryExpression,
            vec![Value::str("!"), Value::node(ident("a"))],
        )
        .unwrap();
        assert_eq!(unary.bool_field("prefix"), Some(true));
    }

    #[test]
    fn list_defaults_are_not_shared() {
        let a = builder(NodeType::ArrayExpression, vec![]).unwrap();
        let mut b = builder(NodeType::ArrayExpression, vec![]).unwrap();
        if let Some(Value::List(items)) = b.field_mut("elements") {
            items.push(Value::node(ident("x")));
        }
        assert_eq!(a.list("elements").unwrap().len(), 0);
        assert_eq!(b.list("elements").unwrap().len(), 1);
    }

    #[test]
    fn deprecated_builder_names_resolve() {
        let node = builder_by_name("NumberLiteral", vec![Value::Num(3.0)]).unwrap();
        assert_eq!(node.kind(), NodeType::NumericLiteral);
        assert!(builder_by_name("NoSuchType", vec![]).is_err());
    }

    #[test]
    fn optional_chain_must_have_a_start() {
        // a?.b.c as OptionalMemberExpression(optional: false) directly on
        // an Identifier: the chain never starts, so it is rejected.
        let err = builder(
            NodeType::OptionalMemberExpression,
            vec![
                Value::node(ident("a")),
                Value::node(ident("b")),
                Value::Bool(false),
                Value::Bool(false),
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("optional"), "{}", err);

        let start = builder(
            NodeType::OptionalMemberExpression,
            vec![
                Value::node(ident("a")),
                Value::node(ident("b")),
                Value::Bool(false),
                Value::Bool(true),
            ],
        )
        .unwrap();
        let link = builder(
            NodeType::OptionalMemberExpression,
            vec![
                Value::node(start),
                Value::node(ident("c")),
                Value::Bool(false),
                Value::Bool(false),
            ],
        )
        .unwrap();
        assert_eq!(link.kind(), NodeType::OptionalMemberExpression);
    }

    #[test]
    fn optional_chain_rejected_as_plain_member_base() {
        let chained = builder(
            NodeType::OptionalMemberExpression,
            vec![
                Value::node(ident("a")),
                Value::node(ident("b")),
                Value::Bool(false),
                Value::Bool(true),
            ],
        )
        .unwrap();
        let err = builder(
            NodeType::MemberExpression,
            vec![Value::node(chained), Value::node(ident("c"))],
        )
        .unwrap_err();
        assert!(err.to_string().contains("object"), "{}", err);
    }

    #[test]
    fn template_literal_counts_must_line_up() {
        let quasi = |tail: bool| {
            builder(
                NodeType::TemplateElement,
                vec![
                    Value::Obj(vec![("raw", Value::str("x"))]),
                    Value::Bool(tail),
                ],
            )
            .unwrap()
        };
        assert!(builder(
            NodeType::TemplateLiteral,
            vec![
                Value::nodes(vec![quasi(false), quasi(true)]),
                Value::nodes(vec![ident("a")]),
            ],
        )
        .is_ok());
        assert!(builder(
            NodeType::TemplateLiteral,
            vec![
                Value::nodes(vec![quasi(false), quasi(true)]),
                Value::nodes(vec![ident("a"), ident("b")]),
            ],
        )
        .is_err());
    }

    #[test]
    fn validate_node_checks_required_fields() {
        let ok = ident("a");
        assert!(validate_node(&ok).is_ok());

        let mut bad = Node::new(NodeType::ExpressionStatement);
        bad.set_field("expression", Value::Bool(true));
        assert!(validate_node(&bad).is_err());

        // A required field that is simply missing is also an error.
        let empty = Node::new(NodeType::ExpressionStatement);
        assert!(validate_node(&empty).is_err());
    }
}
