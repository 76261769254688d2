//! The node type catalog.
//!
//! One `register` function per language area, run in a fixed order:
//! `inherits` declarations depend on their base type being registered
//! first, and `typescript` borrows shapes from `core`.

use crate::node::{Value, ValueKind};
use crate::registry::{FieldDef, Registry};
use crate::validators::{
    array_of, assert_node_or_value_type, assert_node_type, assert_one_of, assert_value_type,
};

mod core;
mod experimental;
mod flow;
mod jsx;
mod misc;
pub(crate) mod placeholders;
mod typescript;

pub(crate) fn register_all(registry: &mut Registry) {
    self::core::register(registry);
    flow::register(registry);
    jsx::register(registry);
    misc::register(registry);
    experimental::register(registry);
    typescript::register(registry);
}

use crate::node::TypeQuery;

// Field shorthands shared by every definition file.

fn ty(types: Vec<TypeQuery>) -> FieldDef {
    FieldDef::new(assert_node_type(types))
}

fn ty_opt(types: Vec<TypeQuery>) -> FieldDef {
    ty(types).optional()
}

fn arr_ty(types: Vec<TypeQuery>) -> FieldDef {
    FieldDef::new(array_of(assert_node_type(types)))
}

fn arr_ty_opt(types: Vec<TypeQuery>) -> FieldDef {
    arr_ty(types).optional()
}

fn arr_ty_default(types: Vec<TypeQuery>) -> FieldDef {
    arr_ty(types).default(Value::List(Vec::new()))
}

/// An array whose elements are either `null` or one of `types`, e.g.
/// array holes.
fn arr_ty_or_null(types: Vec<TypeQuery>) -> FieldDef {
    FieldDef::new(array_of(assert_node_or_value_type(
        vec![ValueKind::Null],
        types,
    )))
}

fn string() -> FieldDef {
    FieldDef::new(assert_value_type(ValueKind::Str))
}

fn number() -> FieldDef {
    FieldDef::new(assert_value_type(ValueKind::Num))
}

fn boolean() -> FieldDef {
    FieldDef::new(assert_value_type(ValueKind::Bool))
}

fn bool_default(value: bool) -> FieldDef {
    boolean().default(value)
}

fn one_of(values: &'static [&'static str]) -> FieldDef {
    FieldDef::new(assert_one_of(values))
}
