use crate::node::{Node, NodeType};
use thiserror::Error;

/// Errors raised while validating node shapes, building nodes or asserting
/// node kinds. Nothing here is retried or degraded; every variant reports
/// exactly what was wrong and leaves the caller to decide.
#[derive(Debug, Error)]
pub enum Error {
    /// A field held a value outside its registered shape.
    #[error("{node_type}.{key}: expected {expected}, but instead got {actual}")]
    FieldValue {
        node_type: &'static str,
        key: String,
        expected: String,
        actual: String,
    },

    /// An `assert_shape` check, with every failing sub-field collected.
    #[error("{node_type}.{key}: {}", format_shape_errors(.errors))]
    Shape {
        node_type: &'static str,
        key: String,
        errors: Vec<Error>,
    },

    /// A builder received more positional arguments than the type accepts.
    #[error("{node_type}: expected at most {expected} arguments, got {got}")]
    TooManyArguments {
        node_type: &'static str,
        expected: usize,
        got: usize,
    },

    /// An `assert_is` check failed.
    #[error("expected type {expected}, but instead got {actual}")]
    Assertion { expected: String, actual: String },

    /// No node type (or deprecated alias) is registered under this name.
    #[error("unknown node type {0:?}")]
    UnknownType(String),
}

fn format_shape_errors(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A conversion had no valid target shape. The consumed node is handed back
/// so callers can probe convertibility without losing the input.
#[derive(Debug, Error)]
#[error("cannot convert {} to {target}: {reason}", .node.kind().as_str())]
pub struct ConversionError {
    pub(crate) node: Node,
    pub(crate) target: &'static str,
    pub(crate) reason: &'static str,
}

impl ConversionError {
    pub(crate) fn new(node: Node, target: &'static str, reason: &'static str) -> Self {
        ConversionError {
            node,
            target,
            reason,
        }
    }

    /// The node the failed conversion consumed, returned unchanged.
    pub fn into_node(self) -> Node {
        self.node
    }

    pub fn node(&self) -> &Node {
        &self.node
    }
}

impl Error {
    pub(crate) fn field_value(
        node_type: NodeType,
        key: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Error {
        Error::FieldValue {
            node_type: node_type.as_str(),
            key: key.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
