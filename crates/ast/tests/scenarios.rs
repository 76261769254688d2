//! Cross-module scenarios exercised through the public API.

use estree::*;
use pretty_assertions::assert_eq;

fn ident(name: &str) -> Node {
    identifier(name).unwrap()
}

#[test]
fn build_query_and_walk_a_small_expression() {
    let sum = binary_expression("+", ident("a"), numeric_literal(1.0).unwrap()).unwrap();

    assert!(sum.is(NodeType::BinaryExpression));
    assert!(sum.is(Alias::Expression));
    assert!(sum.is(Alias::Binary));
    assert!(!sum.is(Alias::Statement));
    assert_eq!(sum.str_field("operator").map(|s| s.to_string()), Some("+".to_string()));

    let mut seen = Vec::new();
    traverse_fast(&sum, &mut |node| seen.push(node.kind()));
    assert_eq!(
        seen,
        vec![
            NodeType::BinaryExpression,
            NodeType::Identifier,
            NodeType::NumericLiteral
        ]
    );
}

#[test]
fn builder_arity_and_validation_failures() {
    // One argument too many fails before validation ever runs.
    let overflow = builder(
        NodeType::BinaryExpression,
        vec![Value::str("+"), Value::Null, Value::Null, Value::Null],
    );
    assert!(matches!(overflow, Err(Error::TooManyArguments { .. })));

    // A bad operator is a field-value error naming the field.
    let err = binary_expression("@", ident("a"), ident("b")).unwrap_err();
    assert!(err.to_string().contains("BinaryExpression.operator"), "{}", err);
}

#[test]
fn clone_fidelity_and_shallow_distinction() {
    let mut original = binary_expression("*", ident("a"), ident("b")).unwrap();
    original.set_field("adHoc", Value::Bool(true));

    let deep = clone_deep(&original);
    // Equal on every declared field...
    for key in node_fields(original.kind()).keys() {
        assert_eq!(deep.field(key), original.field(key), "field {}", key);
    }
    // ...but the ad hoc extra is dropped, not copied.
    assert_eq!(deep.field("adHoc"), None);

    // Mutating the clone's subtree leaves the original alone.
    let mut mutated = deep;
    mutated.child_mut("left").unwrap().set_field("name", "zzz");
    assert_eq!(
        original.child("left").unwrap().str_field("name").map(|s| s.to_string()),
        Some("a".to_string())
    );
}

#[test]
fn without_loc_strips_positions() {
    let mut node = ident("a");
    node.span = estree_common::Span::new(estree_common::BytePos(2), estree_common::BytePos(3));
    assert!(clone_deep_without_loc(&node).span.is_dummy());
    assert_eq!(clone_deep(&node).span, node.span);
}

#[test]
fn predicate_opts_filter() {
    let node = ident("a");
    assert!(is(NodeType::Identifier, Some(&node), Some(&[("name", Value::str("a"))])));
    assert!(!is(NodeType::Identifier, Some(&node), Some(&[("name", Value::str("b"))])));
    assert!(!is(
        NodeType::Identifier,
        Some(&node),
        Some(&[("nope", Value::Bool(true))])
    ));
}

#[test]
fn alias_query_on_deep_hierarchy() {
    let method = builder(
        NodeType::ObjectMethod,
        vec![
            Value::str("method"),
            Value::node(ident("m")),
            Value::List(Vec::new()),
            Value::node(block_statement(Vec::new()).unwrap()),
        ],
    )
    .unwrap();
    assert!(is(Alias::Function, Some(&method), None));
    assert!(!is(NodeType::FunctionDeclaration, Some(&method), None));
}

#[test]
fn deprecated_predicates_never_match_modern_trees() {
    let node = numeric_literal(1.0).unwrap();
    assert!(!is_number_literal(Some(&node)));
    assert!(!is_regex_literal(Some(&node)));
}

#[test]
fn statement_expression_round_trip_preserves_shape() {
    let class = builder(
        NodeType::ClassExpression,
        vec![
            Value::node(ident("C")),
            Value::Null,
            Value::node(builder(NodeType::ClassBody, vec![Value::List(Vec::new())]).unwrap()),
        ],
    )
    .unwrap();

    let declaration = to_statement(class).unwrap();
    assert_eq!(declaration.kind(), NodeType::ClassDeclaration);
    let expression = to_expression(declaration).unwrap();
    assert_eq!(expression.kind(), NodeType::ClassExpression);
}

#[test]
fn sequence_gathering_end_to_end() {
    // { var x = a; b } gathers to (x = a, b) with `x` hoisted out.
    let declarator = variable_declarator(ident("x"), Some(ident("a"))).unwrap();
    let var = variable_declaration("var", vec![declarator]).unwrap();
    let block = block_statement(vec![var, expression_statement(ident("b")).unwrap()]).unwrap();

    let mut declared = Vec::new();
    let result = to_sequence_expression(vec![block], &mut declared).unwrap();
    assert_eq!(result.kind(), NodeType::SequenceExpression);
    assert_eq!(declared.len(), 1);
    assert_eq!(
        declared[0].str_field("name").map(|s| s.to_string()),
        Some("x".to_string())
    );
}

#[test]
fn binding_collection_over_patterns() {
    // function f([p, { q }], r) {}
    let object_pattern = builder(
        NodeType::ObjectPattern,
        vec![Value::nodes(vec![object_property(
            ident("q"),
            ident("q"),
            false,
        )
        .unwrap()])],
    )
    .unwrap();
    let array_pattern = builder(
        NodeType::ArrayPattern,
        vec![Value::List(vec![
            Value::node(ident("p")),
            Value::node(object_pattern),
        ])],
    )
    .unwrap();
    let func = builder(
        NodeType::FunctionDeclaration,
        vec![
            Value::node(ident("f")),
            Value::List(vec![Value::node(array_pattern), Value::node(ident("r"))]),
            Value::node(block_statement(Vec::new()).unwrap()),
        ],
    )
    .unwrap();

    let ids = get_binding_identifiers(&func, false, false);
    let mut names: Vec<_> = ids.keys().map(|k| k.to_string()).collect();
    names.sort();
    assert_eq!(names, vec!["f", "p", "q", "r"]);
}

#[test]
fn flow_and_ts_union_helpers() {
    let flow = create_flow_union_type(vec![
        Node::new(NodeType::StringTypeAnnotation),
        Node::new(NodeType::AnyTypeAnnotation),
    ]);
    assert_eq!(flow.kind(), NodeType::AnyTypeAnnotation);

    let ts = create_ts_union_type(vec![
        Node::new(NodeType::TSStringKeyword),
        Node::new(NodeType::TSNumberKeyword),
        Node::new(NodeType::TSStringKeyword),
    ]);
    assert_eq!(ts.kind(), NodeType::TSUnionType);
    assert_eq!(ts.list("types").unwrap().len(), 2);
}

#[test]
fn value_round_trips_observably() {
    // NaN encodes as 0/0, -0 keeps its sign through a unary minus.
    let nan = value_to_node(&JsValue::Num(f64::NAN));
    assert_eq!(nan.kind(), NodeType::BinaryExpression);

    let neg_zero = value_to_node(&JsValue::Num(-0.0));
    assert_eq!(neg_zero.kind(), NodeType::UnaryExpression);

    let arr = value_to_node(&JsValue::Array(vec![JsValue::Bool(true), JsValue::Null]));
    assert!(validate_node(&arr).is_ok());
}

#[test]
fn parser_shaped_nodes_validate() {
    // A node assembled by hand, the way a parser would hand it over.
    let mut node = Node::new(NodeType::IfStatement);
    node.set_field("test", ident("t"));
    node.set_field(
        "consequent",
        expression_statement(ident("a")).unwrap(),
    );
    assert!(validate_node(&node).is_ok());

    node.set_field("test", Value::Num(1.0));
    assert!(validate_node(&node).is_err());
}
