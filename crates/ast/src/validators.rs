//! Composable field validators.
//!
//! Each validator is a small description of a constraint; the registry
//! stores one per field and runs it at construction and assertion time.
//! Failures are [`Error::FieldValue`] (or [`Error::Shape`] for aggregated
//! sub-field failures) and are never retried or coerced.

use crate::error::Error;
use crate::node::{Node, NodeType, TypeQuery, Value, ValueKind};
use crate::predicates::is_type;
use crate::registry::{self, FieldDef};

pub type CustomValidator = fn(&Node, &str, &Value) -> Result<(), Error>;

/// A validator run against one field value as `(node, key, value)`, where
/// `node` is the node owning the field.
#[derive(Clone)]
pub enum Validator {
    ValueType(ValueKind),
    NodeType(Vec<TypeQuery>),
    NodeOrValueType(Vec<ValueKind>, Vec<TypeQuery>),
    OneOf(&'static [&'static str]),
    Shape(Vec<(&'static str, FieldDef)>),
    Each(Box<Validator>),
    Chain(Vec<Validator>),
    Custom(CustomValidator),
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Validator::ValueType(k) => write!(f, "ValueType({:?})", k),
            Validator::NodeType(t) => write!(f, "NodeType({:?})", t),
            Validator::NodeOrValueType(k, t) => write!(f, "NodeOrValueType({:?}, {:?})", k, t),
            Validator::OneOf(v) => write!(f, "OneOf({:?})", v),
            Validator::Shape(s) => {
                write!(f, "Shape({:?})", s.iter().map(|(k, _)| k).collect::<Vec<_>>())
            }
            Validator::Each(inner) => write!(f, "Each({:?})", inner),
            Validator::Chain(inner) => write!(f, "Chain({:?})", inner),
            Validator::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

pub fn assert_value_type(kind: ValueKind) -> Validator {
    Validator::ValueType(kind)
}

pub fn assert_node_type(types: Vec<TypeQuery>) -> Validator {
    Validator::NodeType(types)
}

pub fn assert_node_or_value_type(kinds: Vec<ValueKind>, types: Vec<TypeQuery>) -> Validator {
    Validator::NodeOrValueType(kinds, types)
}

pub fn assert_one_of(values: &'static [&'static str]) -> Validator {
    Validator::OneOf(values)
}

pub fn assert_shape(fields: Vec<(&'static str, FieldDef)>) -> Validator {
    Validator::Shape(fields)
}

pub fn assert_each(inner: Validator) -> Validator {
    Validator::Each(Box::new(inner))
}

pub fn chain(validators: Vec<Validator>) -> Validator {
    Validator::Chain(validators)
}

/// `array_of(v)` is an array check followed by `v` over every element.
pub fn array_of(inner: Validator) -> Validator {
    chain(vec![assert_value_type(ValueKind::List), assert_each(inner)])
}

pub fn custom(f: CustomValidator) -> Validator {
    Validator::Custom(f)
}

fn describe_types(types: &[TypeQuery]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn matches_query(child: &Node, types: &[TypeQuery]) -> bool {
    types.iter().any(|&t| match t {
        TypeQuery::Kind(kind) => child.kind() == kind,
        TypeQuery::Alias(alias) => is_type(child.kind(), TypeQuery::Alias(alias)),
    })
}

/// Runs the parent-position validator registered for `child`'s type, if
/// any. This is how e.g. optional-chain nodes veto being placed as a plain
/// `MemberExpression.object`.
fn validate_child(parent: &Node, key: &str, child: &Node) -> Result<(), Error> {
    if let Some(validate) = registry::type_def(child.kind()).validate_parent {
        validate(parent, key, child)?;
    }
    Ok(())
}

impl Validator {
    pub fn validate(&self, node: &Node, key: &str, val: &Value) -> Result<(), Error> {
        match self {
            Validator::ValueType(kind) => {
                if val.kind() == *kind {
                    Ok(())
                } else {
                    Err(Error::field_value(
                        node.kind(),
                        key,
                        format!("a value of type {}", kind.as_str()),
                        val.describe(),
                    ))
                }
            }
            Validator::NodeType(types) => match val {
                Value::Node(child) if matches_query(child, types) => {
                    validate_child(node, key, child)
                }
                _ => Err(Error::field_value(
                    node.kind(),
                    key,
                    format!("a node of type {}", describe_types(types)),
                    val.describe(),
                )),
            },
            Validator::NodeOrValueType(kinds, types) => match val {
                Value::Node(child) if matches_query(child, types) => {
                    validate_child(node, key, child)
                }
                _ if kinds.contains(&val.kind()) => Ok(()),
                _ => Err(Error::field_value(
                    node.kind(),
                    key,
                    format!(
                        "{} or a node of type {}",
                        kinds
                            .iter()
                            .map(|k| k.as_str())
                            .collect::<Vec<_>>()
                            .join(" | "),
                        describe_types(types)
                    ),
                    val.describe(),
                )),
            },
            Validator::OneOf(values) => match val {
                Value::Str(s) if values.contains(&&**s) => Ok(()),
                _ => Err(Error::field_value(
                    node.kind(),
                    key,
                    format!("one of {:?}", values),
                    val.describe(),
                )),
            },
            Validator::Shape(fields) => {
                let obj = match val {
                    Value::Obj(entries) => entries,
                    _ => {
                        return Err(Error::field_value(
                            node.kind(),
                            key,
                            "an object".to_string(),
                            val.describe(),
                        ))
                    }
                };
                // Every failing sub-field is collected, so the caller sees
                // the complete list of violations in one error.
                let mut errors = Vec::new();
                for (name, def) in fields {
                    let sub = obj
                        .iter()
                        .find(|(k, _)| k == name)
                        .map(|(_, v)| v)
                        .unwrap_or(&Value::Null);
                    if def.optional && sub.is_null() {
                        continue;
                    }
                    if let Some(validate) = &def.validate {
                        if let Err(err) =
                            validate.validate(node, &format!("{}.{}", key, name), sub)
                        {
                            errors.push(err);
                        }
                    }
                }
                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(Error::Shape {
                        node_type: node.kind().as_str(),
                        key: key.to_string(),
                        errors,
                    })
                }
            }
            Validator::Each(inner) => {
                let items = match val {
                    Value::List(items) => items,
                    _ => {
                        return Err(Error::field_value(
                            node.kind(),
                            key,
                            "an array".to_string(),
                            val.describe(),
                        ))
                    }
                };
                for (i, item) in items.iter().enumerate() {
                    inner.validate(node, &format!("{}[{}]", key, i), item)?;
                }
                Ok(())
            }
            Validator::Chain(validators) => {
                for v in validators {
                    v.validate(node, key, val)?;
                }
                Ok(())
            }
            Validator::Custom(f) => f(node, key, val),
        }
    }

    /// The validator synthesized for a field whose default was given
    /// without an explicit validator.
    pub(crate) fn from_default(default: &Value) -> Validator {
        assert_value_type(default.kind())
    }
}

/// Enforces `expressions.len() == quasis.len() - 1` on template literals.
pub(crate) fn validate_template_expressions(
    node: &Node,
    key: &str,
    val: &Value,
) -> Result<(), Error> {
    assert_value_type(ValueKind::List).validate(node, key, val)?;
    let expressions = val.as_list().map(<[Value]>::len).unwrap_or(0);
    let quasis = node.list("quasis").map(<[Value]>::len).unwrap_or(0);
    if quasis == 0 || expressions + 1 == quasis {
        Ok(())
    } else {
        Err(Error::field_value(
            node.kind(),
            key,
            format!("exactly {} expressions for {} quasis", quasis - 1, quasis),
            format!("{} expressions", expressions),
        ))
    }
}

/// A non-optional link of an optional chain must continue the chain, so
/// every chain has a marked start.
pub(crate) fn validate_optional_chain_link(
    node: &Node,
    key: &str,
    val: &Value,
) -> Result<(), Error> {
    assert_value_type(ValueKind::Bool).validate(node, key, val)?;
    if val.as_bool() == Some(false) {
        let base_key = match node.kind() {
            NodeType::OptionalCallExpression => "callee",
            _ => "object",
        };
        let continues = matches!(
            node.child(base_key).map(Node::kind),
            Some(NodeType::OptionalMemberExpression | NodeType::OptionalCallExpression)
        );
        if !continues {
            return Err(Error::field_value(
                node.kind(),
                key,
                format!(
                    "an optional {} when the link itself is not optional",
                    base_key
                ),
                val.describe(),
            ));
        }
    }
    Ok(())
}

/// Parent-position check registered for `OptionalMemberExpression` and
/// `OptionalCallExpression`: they may not stand as the base of a
/// non-optional member access or call.
pub(crate) fn reject_non_optional_parent(
    parent: &Node,
    key: &str,
    child: &Node,
) -> Result<(), Error> {
    let forbidden = matches!(
        (parent.kind(), key),
        (NodeType::MemberExpression, "object") | (NodeType::CallExpression, "callee")
    );
    if forbidden {
        Err(Error::field_value(
            parent.kind(),
            key,
            "a non-optional-chain node".to_string(),
            format!("a {} node", child.kind().as_str()),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Alias;

    fn ident(name: &str) -> Node {
        let mut node = Node::new(NodeType::Identifier);
        node.set_field("name", name);
        node
    }

    #[test]
    fn value_type_mismatch_names_the_field() {
        let node = ident("a");
        let err = assert_value_type(ValueKind::Str)
            .validate(&node, "name", &Value::Bool(true))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Identifier.name"), "{}", message);
        assert!(message.contains("string"), "{}", message);
    }

    #[test]
    fn node_type_accepts_aliases() {
        let holder = Node::new(NodeType::ExpressionStatement);
        let v = assert_node_type(vec![Alias::Expression.into()]);
        assert!(v
            .validate(&holder, "expression", &Value::node(ident("a")))
            .is_ok());
        assert!(v
            .validate(&holder, "expression", &Value::Bool(true))
            .is_err());
    }

    #[test]
    fn each_tags_the_offending_index() {
        let holder = Node::new(NodeType::ArrayExpression);
        let v = array_of(assert_value_type(ValueKind::Num));
        let val = Value::List(vec![Value::Num(1.0), Value::Bool(false)]);
        let err = v.validate(&holder, "elements", &val).unwrap_err();
        assert!(err.to_string().contains("elements[1]"), "{}", err);
    }

    #[test]
    fn shape_collects_every_failure() {
        let holder = Node::new(NodeType::TemplateElement);
        let v = assert_shape(vec![
            ("raw", FieldDef::new(assert_value_type(ValueKind::Str))),
            ("cooked", FieldDef::new(assert_value_type(ValueKind::Str))),
        ]);
        let val = Value::Obj(vec![("raw", Value::Num(1.0)), ("cooked", Value::Bool(true))]);
        match v.validate(&holder, "value", &val) {
            Err(Error::Shape { errors, .. }) => assert_eq!(errors.len(), 2),
            other => panic!("expected aggregated shape error, got {:?}", other),
        }
    }
}
