//! Whole-catalog invariants of the type registry.

use estree::*;

#[test]
fn catalog_is_total() {
    for &kind in NodeType::ALL {
        let def = type_def(kind);
        assert_eq!(def.kind, kind);
        // Declared builder/visitor keys always have a field definition.
        for key in def.builder.iter().chain(def.visitor.iter()) {
            assert!(
                def.fields.contains_key(key),
                "{}.{} has no field definition",
                kind.as_str(),
                key
            );
        }
    }
}

#[test]
fn alias_tables_are_exact_inverses() {
    for &kind in NodeType::ALL {
        for &alias in aliases_of(kind) {
            assert!(
                alias_members(alias).contains(&kind),
                "{} missing from {} members",
                kind.as_str(),
                alias.as_str()
            );
        }
    }
    for &alias in Alias::ALL {
        let members = alias_members(alias);
        assert!(!members.is_empty(), "alias {} has no members", alias.as_str());
        for &kind in members {
            assert!(
                aliases_of(kind).contains(&alias),
                "{} not aliased to {}",
                kind.as_str(),
                alias.as_str()
            );
        }
    }
}

#[test]
fn defaults_imply_optional_outside_builder_position() {
    for &kind in NodeType::ALL {
        let def = type_def(kind);
        for (key, field) in &def.fields {
            if field.default.is_some() && !def.builder.contains(key) {
                assert!(field.optional, "{}.{} should be optional", kind.as_str(), key);
            }
        }
    }
}

#[test]
fn nullary_builders_round_trip() {
    // Every type whose builder keys are all defaulted or optional must
    // build from no arguments into a node its own predicate accepts.
    for &kind in NodeType::ALL {
        let def = type_def(kind);
        let nullary = def.builder.iter().all(|key| {
            def.fields
                .get(key)
                .map(|field| field.optional || field.default.is_some())
                .unwrap_or(false)
        });
        if !nullary {
            continue;
        }
        let node = builder(kind, vec![])
            .unwrap_or_else(|err| panic!("{} failed to build: {}", kind.as_str(), err));
        assert!(node.is(kind));
        assert!(assert_is(kind, Some(&node), None).is_ok());
    }
}

#[test]
fn inherits_copies_the_base_shape() {
    let call = type_def(NodeType::CallExpression);
    let new = type_def(NodeType::NewExpression);
    assert_eq!(new.builder, call.builder);
    assert_eq!(new.visitor, call.visitor);
    assert_eq!(
        new.fields.keys().collect::<Vec<_>>(),
        call.fields.keys().collect::<Vec<_>>()
    );

    let class_expr = type_def(NodeType::ClassExpression);
    let class_decl = type_def(NodeType::ClassDeclaration);
    assert_eq!(
        class_decl.fields.keys().collect::<Vec<_>>(),
        class_expr.fields.keys().collect::<Vec<_>>()
    );
    assert!(class_decl.aliases.contains(&Alias::Declaration));
    assert!(!class_expr.aliases.contains(&Alias::Declaration));
}

#[test]
fn deprecated_names_resolve_with_a_warning() {
    assert_eq!(
        resolve_type_name("NumberLiteral").unwrap(),
        NodeType::NumericLiteral
    );
    assert_eq!(
        resolve_type_name("RegexLiteral").unwrap(),
        NodeType::RegExpLiteral
    );
    assert_eq!(
        resolve_type_name("RestProperty").unwrap(),
        NodeType::RestElement
    );
    assert_eq!(
        resolve_type_name("SpreadProperty").unwrap(),
        NodeType::SpreadElement
    );
    assert!(resolve_type_name("TotallyMadeUp").is_err());
}

#[test]
fn visitor_keys_drive_traversal_order() {
    assert_eq!(
        visitor_keys(NodeType::ConditionalExpression),
        ["test", "consequent", "alternate"]
    );
    assert_eq!(builder_keys(NodeType::BinaryExpression).len(), 3);
    assert_eq!(binding_keys(NodeType::VariableDeclarator), ["id"]);
}
