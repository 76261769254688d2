use super::make_undefined;
use crate::bindings::get_binding_identifiers;
use crate::clone::clone_node;
use crate::node::{Alias, Node, NodeType, Value};

/// Turns a run of statements into one sequence expression, or `None` when
/// a statement has no expression rendering.
///
/// Bindings introduced by gathered `var` declarations are pushed onto
/// `declared` (cloned identifiers) so the caller can hoist them; their
/// initializers become assignments inside the sequence.
pub fn to_sequence_expression(nodes: Vec<Node>, declared: &mut Vec<Node>) -> Option<Node> {
    if nodes.is_empty() {
        return None;
    }
    gather(nodes, declared)
}

fn gather(nodes: Vec<Node>, declared: &mut Vec<Node>) -> Option<Node> {
    let mut exprs: Vec<Node> = Vec::new();
    // Dropping a statement whose completion value an `eval` caller could
    // observe changes behavior, so a trailing `void 0` is appended where
    // the last gathered piece is not the statement's own value.
    let mut ensure_last_undefined = true;

    for (index, node) in nodes.into_iter().enumerate() {
        if node.kind() != NodeType::EmptyStatement {
            ensure_last_undefined = false;
        }

        if node.is(Alias::Expression) {
            exprs.push(node);
        } else if node.kind() == NodeType::ExpressionStatement {
            let mut node = node;
            exprs.push(node.take_child("expression")?);
        } else if node.kind() == NodeType::VariableDeclaration {
            if node.str_field("kind").map(|s| &**s) != Some("var") {
                return None;
            }
            let mut node = node;
            let declarations = match node.take_field("declarations") {
                Some(Value::List(items)) => items,
                _ => return None,
            };
            for declaration in declarations {
                let mut declaration = match declaration {
                    Value::Node(node) => *node,
                    _ => continue,
                };
                for (_, bound) in get_binding_identifiers(&declaration, false, false) {
                    for id in bound {
                        declared.push(clone_node(id, true, false));
                    }
                }
                if let Some(init) = declaration.take_child("init") {
                    let id = declaration.take_child("id")?;
                    let mut assign = Node::new(NodeType::AssignmentExpression);
                    assign.set_field("operator", "=");
                    assign.set_field("left", id);
                    assign.set_field("right", init);
                    exprs.push(assign);
                }
            }
            ensure_last_undefined = true;
        } else if node.kind() == NodeType::IfStatement {
            let mut node = node;
            let test = node.take_child("test")?;
            let consequent = match node.take_child("consequent") {
                Some(consequent) => gather(vec![consequent], declared)?,
                None => make_undefined(),
            };
            let alternate = match node.take_child("alternate") {
                Some(alternate) => gather(vec![alternate], declared)?,
                None => make_undefined(),
            };
            let mut conditional = Node::new(NodeType::ConditionalExpression);
            conditional.set_field("test", test);
            conditional.set_field("consequent", consequent);
            conditional.set_field("alternate", alternate);
            exprs.push(conditional);
        } else if node.kind() == NodeType::BlockStatement {
            let mut node = node;
            let body = match node.take_field("body") {
                Some(Value::List(items)) => items
                    .into_iter()
                    .filter_map(Value::into_node)
                    .collect::<Vec<_>>(),
                _ => return None,
            };
            exprs.push(gather(body, declared)?);
        } else if node.kind() == NodeType::EmptyStatement {
            if index == 0 {
                ensure_last_undefined = true;
            }
        } else {
            return None;
        }
    }

    if ensure_last_undefined {
        exprs.push(make_undefined());
    }

    if exprs.len() == 1 {
        exprs.pop()
    } else {
        let mut sequence = Node::new(NodeType::SequenceExpression);
        sequence.set_field("expressions", Value::nodes(exprs));
        Some(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::builder;
    use crate::conversions::make_expression_statement;

    fn ident(name: &str) -> Node {
        builder(NodeType::Identifier, vec![Value::str(name)]).unwrap()
    }

    fn var_decl(name: &str, init: Option<Node>) -> Node {
        let declarator = builder(
            NodeType::VariableDeclarator,
            vec![
                Value::node(ident(name)),
                init.map(Value::node).unwrap_or(Value::Null),
            ],
        )
        .unwrap();
        builder(
            NodeType::VariableDeclaration,
            vec![Value::str("var"), Value::nodes(vec![declarator])],
        )
        .unwrap()
    }

    #[test]
    fn gathers_expression_statements() {
        let mut declared = Vec::new();
        let result = to_sequence_expression(
            vec![
                make_expression_statement(ident("a")),
                make_expression_statement(ident("b")),
            ],
            &mut declared,
        )
        .unwrap();
        assert_eq!(result.kind(), NodeType::SequenceExpression);
        assert_eq!(result.list("expressions").unwrap().len(), 2);
        assert!(declared.is_empty());
    }

    #[test]
    fn single_survivor_is_returned_bare() {
        let mut declared = Vec::new();
        let result =
            to_sequence_expression(vec![make_expression_statement(ident("a"))], &mut declared)
                .unwrap();
        assert_eq!(result.kind(), NodeType::Identifier);
    }

    #[test]
    fn var_declarations_hoist_and_assign() {
        let mut declared = Vec::new();
        let result = to_sequence_expression(
            vec![var_decl("x", Some(ident("y")))],
            &mut declared,
        )
        .unwrap();
        // x = y, then void 0 since a declaration has no completion value.
        assert_eq!(result.kind(), NodeType::SequenceExpression);
        let exprs = result.list("expressions").unwrap();
        assert_eq!(exprs[0].as_node().unwrap().kind(), NodeType::AssignmentExpression);
        assert_eq!(exprs[1].as_node().unwrap().kind(), NodeType::UnaryExpression);
        assert_eq!(declared.len(), 1);
        assert_eq!(declared[0].str_field("name").map(|s| &**s), Some("x"));
    }

    #[test]
    fn let_declarations_bail() {
        let mut declared = Vec::new();
        let declarator = builder(
            NodeType::VariableDeclarator,
            vec![Value::node(ident("x")), Value::Null],
        )
        .unwrap();
        let decl = builder(
            NodeType::VariableDeclaration,
            vec![Value::str("let"), Value::nodes(vec![declarator])],
        )
        .unwrap();
        assert!(to_sequence_expression(vec![decl], &mut declared).is_none());
    }

    #[test]
    fn if_statements_become_conditionals() {
        let mut declared = Vec::new();
        let if_stmt = builder(
            NodeType::IfStatement,
            vec![
                Value::node(ident("t")),
                Value::node(make_expression_statement(ident("a"))),
                Value::Null,
            ],
        )
        .unwrap();
        let result = to_sequence_expression(vec![if_stmt], &mut declared).unwrap();
        assert_eq!(result.kind(), NodeType::ConditionalExpression);
        // The missing alternate is filled with void 0.
        assert_eq!(
            result.child("alternate").unwrap().kind(),
            NodeType::UnaryExpression
        );
    }

    #[test]
    fn unconvertible_statements_bail() {
        let mut declared = Vec::new();
        let debugger = Node::new(NodeType::DebuggerStatement);
        assert!(to_sequence_expression(vec![debugger], &mut declared).is_none());
    }
}
