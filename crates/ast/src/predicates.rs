//! Type predicates, alias resolution and assertions.

use crate::error::Error;
use crate::node::{Node, NodeType, TypeQuery, Value};
use crate::registry;
use estree_common::{is_identifier_name, is_keyword, is_strict_reserved_word, JsWord};

/// Is the concrete type `kind` of the queried type? Exact match for
/// concrete queries, membership in the flipped alias table for alias
/// queries.
pub fn is_type(kind: NodeType, query: impl Into<TypeQuery>) -> bool {
    match query.into() {
        TypeQuery::Kind(k) => kind == k,
        TypeQuery::Alias(alias) => {
            let members = registry::alias_members(alias);
            // The first registered subtype tends to be the most-queried
            // one; check it before scanning.
            match members.first() {
                Some(&first) if first == kind => true,
                _ => members.contains(&kind),
            }
        }
    }
}

/// The shallow property filter: leaf values compare by value, composite
/// filter values (nodes, arrays, objects) never match. Deep equality here
/// would be an observable behavior change, not an upgrade.
fn shallow_eq(actual: &Value, expected: &Value) -> bool {
    match expected {
        Value::Node(_) | Value::List(_) | Value::Obj(_) => false,
        _ => actual == expected,
    }
}

pub(crate) fn matches_opts(node: &Node, opts: &[(&'static str, Value)]) -> bool {
    opts.iter()
        .all(|(key, expected)| matches!(node.field(key), Some(actual) if shallow_eq(actual, expected)))
}

/// Is `node` of the queried type? `None` never matches. A `Placeholder`
/// node falls back to its `expectedNode` when the query is an alias and no
/// property filter was given.
pub fn is(
    query: impl Into<TypeQuery>,
    node: Option<&Node>,
    opts: Option<&[(&'static str, Value)]>,
) -> bool {
    let node = match node {
        Some(node) => node,
        None => return false,
    };
    let query = query.into();

    if !is_type(node.kind(), query) {
        if opts.is_none() && node.kind() == NodeType::Placeholder {
            if let TypeQuery::Alias(alias) = query {
                if let Some(expected) = node.str_field("expectedNode") {
                    return registry::registry().placeholder_expands_to(expected, alias);
                }
            }
        }
        return false;
    }

    match opts {
        Some(opts) => matches_opts(node, opts),
        None => true,
    }
}

/// Like [`is`], but failing loudly: the error reports the expected kind
/// against the actual one.
pub fn assert_is(
    query: impl Into<TypeQuery>,
    node: Option<&Node>,
    opts: Option<&[(&'static str, Value)]>,
) -> Result<(), Error> {
    let query = query.into();
    if is(query, node, opts) {
        Ok(())
    } else {
        Err(Error::Assertion {
            expected: query.as_str().to_string(),
            actual: node
                .map(|n| n.kind().as_str().to_string())
                .unwrap_or_else(|| "no node".to_string()),
        })
    }
}

impl Node {
    pub fn is(&self, query: impl Into<TypeQuery>) -> bool {
        is(query, Some(self), None)
    }

    pub fn matches(&self, query: impl Into<TypeQuery>, opts: &[(&'static str, Value)]) -> bool {
        is(query, Some(self), Some(opts))
    }

    pub fn assert(&self, query: impl Into<TypeQuery>) -> Result<(), Error> {
        assert_is(query, Some(self), None)
    }
}

// Predicates for node names that no longer exist. They test for the old
// type tag, which no construction path produces anymore; they are kept
// for source compatibility and always come up false on well-formed trees.

pub fn is_number_literal(node: Option<&Node>) -> bool {
    tracing::warn!("is_number_literal is deprecated; use is(NumericLiteral, ..) instead");
    let _ = node;
    false
}

pub fn is_regex_literal(node: Option<&Node>) -> bool {
    tracing::warn!("is_regex_literal is deprecated; use is(RegExpLiteral, ..) instead");
    let _ = node;
    false
}

pub fn is_rest_property(node: Option<&Node>) -> bool {
    tracing::warn!("is_rest_property is deprecated; use is(RestElement, ..) instead");
    let _ = node;
    false
}

pub fn is_spread_property(node: Option<&Node>) -> bool {
    tracing::warn!("is_spread_property is deprecated; use is(SpreadElement, ..) instead");
    let _ = node;
    false
}

/// A name usable as an identifier: lexically well-formed and not a
/// keyword or strict-mode reserved word.
pub fn is_valid_identifier(name: &str) -> bool {
    !is_keyword(name) && !is_strict_reserved_word(name, true) && is_identifier_name(name)
}

/// Structural equality over declared fields only; spans, locations,
/// comments and ad hoc extras are ignored.
pub fn is_nodes_equivalent(a: &Node, b: &Node) -> bool {
    if a.kind() != b.kind() {
        return false;
    }
    registry::node_fields(a.kind()).keys().all(|key| {
        let va = a.field(key).unwrap_or(&Value::Null);
        let vb = b.field(key).unwrap_or(&Value::Null);
        values_equivalent(va, vb)
    })
}

fn values_equivalent(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Node(a), Value::Node(b)) => is_nodes_equivalent(a, b),
        (Value::List(a), Value::List(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| values_equivalent(a, b))
        }
        _ => a == b,
    }
}

/// Does a member-expression chain spell out `pattern` (e.g.
/// `"console.log"`)? `allow_partial` accepts a longer chain whose prefix
/// matches.
pub fn matches_pattern(node: Option<&Node>, pattern: &str, allow_partial: bool) -> bool {
    MemberPattern::new(pattern, allow_partial).matches(node)
}

/// A precompiled [`matches_pattern`] check, for call sites testing many
/// nodes against the same dotted path.
pub struct MemberPattern {
    parts: Vec<JsWord>,
    allow_partial: bool,
}

impl MemberPattern {
    pub fn new(pattern: &str, allow_partial: bool) -> MemberPattern {
        MemberPattern {
            parts: pattern.split('.').map(JsWord::from).collect(),
            allow_partial,
        }
    }

    pub fn matches(&self, node: Option<&Node>) -> bool {
        let node = match node {
            Some(node) => node,
            None => return false,
        };
        if node.kind() != NodeType::MemberExpression {
            return false;
        }

        // Walk object-ward, collecting the chain outermost-first.
        let mut links = Vec::new();
        let mut current = node;
        while current.kind() == NodeType::MemberExpression {
            match current.child("property") {
                Some(property) => links.push(property),
                None => return false,
            }
            match current.child("object") {
                Some(object) => current = object,
                None => return false,
            }
        }
        links.push(current);

        if links.len() < self.parts.len() {
            return false;
        }
        if !self.allow_partial && links.len() > self.parts.len() {
            return false;
        }

        self.parts
            .iter()
            .zip(links.iter().rev())
            .all(|(part, link)| match link.kind() {
                NodeType::Identifier => link.str_field("name") == Some(part),
                NodeType::StringLiteral => link.str_field("value") == Some(part),
                NodeType::ThisExpression => &**part == "this",
                _ => false,
            })
    }
}
