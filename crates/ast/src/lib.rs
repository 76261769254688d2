//! ECMAScript syntax tree schema and manipulation kernel: a
//! self-describing node type registry plus the predicates, builders,
//! assertions, tree walks and conversions derived from it.

#![deny(unreachable_patterns)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

#[macro_use]
mod macros;

mod bindings;
mod builder;
mod clone;
mod comments;
mod constants;
mod constructors;
mod conversions;
mod definitions;
mod error;
mod node;
mod predicates;
mod registry;
mod traverse;
mod validators;

pub use crate::{
    bindings::{get_binding_identifiers, get_outer_binding_identifiers},
    builder::{builder, builder_by_name, validate_field, validate_node},
    clone::{clone_deep, clone_deep_without_loc, clone_node, clone_without_loc},
    comments::{
        add_comment, add_comments, inherit_inner_comments, inherit_leading_comments,
        inherit_trailing_comments, inherits, inherits_comments, remove_comments,
        remove_properties, remove_properties_deep, CommentSlot,
    },
    constants::*,
    constructors::*,
    conversions::{
        create_flow_union_type, create_ts_union_type, ensure_block, remove_ts_type_duplicates,
        remove_type_duplicates, to_binding_identifier_name, to_block, to_computed_key,
        to_expression, to_identifier, to_sequence_expression, to_statement, value_to_node,
        JsValue,
    },
    error::{ConversionError, Error},
    node::{Alias, FxIndexMap, Node, NodeType, TypeQuery, Value, ValueKind},
    predicates::{
        assert_is, is, is_nodes_equivalent, is_number_literal, is_regex_literal,
        is_rest_property, is_spread_property, is_type, is_valid_identifier, matches_pattern,
        MemberPattern,
    },
    registry::{
        alias_members, aliases_of, binding_keys, builder_keys, node_fields, registry,
        resolve_type_name, type_def, visitor_keys, FieldDef, ParentValidator, Registry, TypeDef,
    },
    traverse::{traverse, traverse_fast, traverse_fast_mut, Ancestor, Traverser},
    validators::{
        array_of, assert_each, assert_node_or_value_type, assert_node_type, assert_one_of,
        assert_shape, assert_value_type, chain, custom, CustomValidator, Validator,
    },
};
