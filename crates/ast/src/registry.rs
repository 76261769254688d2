//! The node type registry.
//!
//! Every node type is declared once, at first use of the registry, through
//! [`define`]. A declaration carries the field shapes, visitor and builder
//! key orders, alias memberships and binding-position keys of one type; the
//! registry normalizes it and serves the derived tables (builder keys,
//! visitor keys, alias membership and its flipped view) to the rest of the
//! crate. Malformed declarations panic during initialization; nothing about
//! the registry can fail once it has been built.

use crate::definitions;
use crate::error::Error;
use crate::node::{Alias, FxIndexMap, Node, NodeType, Value};
use crate::validators::Validator;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

pub type ParentValidator = fn(&Node, &str, &Node) -> Result<(), Error>;

/// The shape constraint of one field.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub validate: Option<Validator>,
    pub optional: bool,
    /// Restricted to primitives and the empty list; compound defaults are
    /// rejected at registration time.
    pub default: Option<Value>,
}

impl FieldDef {
    pub fn new(validate: Validator) -> FieldDef {
        FieldDef {
            validate: Some(validate),
            optional: false,
            default: None,
        }
    }

    pub fn empty() -> FieldDef {
        FieldDef {
            validate: None,
            optional: false,
            default: None,
        }
    }

    pub fn optional(mut self) -> FieldDef {
        self.optional = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> FieldDef {
        self.default = Some(value.into());
        self
    }

    /// The value substituted when a builder argument is absent. List
    /// defaults are cloned fresh, so constructions never share an array.
    pub(crate) fn default_value(&self) -> Value {
        self.default.clone().unwrap_or(Value::Null)
    }
}

/// The normalized, immutable schema of one node type.
#[derive(Debug, Clone)]
pub struct TypeDef {
    pub kind: NodeType,
    pub fields: FxIndexMap<&'static str, FieldDef>,
    pub visitor: Vec<&'static str>,
    pub builder: Vec<&'static str>,
    pub aliases: Vec<Alias>,
    /// Fields holding binding positions, e.g. `id` on a declarator.
    pub bindings: Vec<&'static str>,
    pub validate_parent: Option<ParentValidator>,
    pub deprecated_alias: Option<&'static str>,
}

/// Starts a type declaration. Finish it with
/// [`TypeDefBuilder::register`].
pub(crate) fn define(kind: NodeType) -> TypeDefBuilder {
    TypeDefBuilder {
        kind,
        fields: Vec::new(),
        visitor: None,
        builder: None,
        aliases: None,
        bindings: Vec::new(),
        inherits: None,
        validate_parent: None,
        deprecated_alias: None,
    }
}

pub(crate) struct TypeDefBuilder {
    kind: NodeType,
    fields: Vec<(&'static str, FieldDef)>,
    visitor: Option<Vec<&'static str>>,
    builder: Option<Vec<&'static str>>,
    aliases: Option<Vec<Alias>>,
    bindings: Vec<&'static str>,
    inherits: Option<NodeType>,
    validate_parent: Option<ParentValidator>,
    deprecated_alias: Option<&'static str>,
}

impl TypeDefBuilder {
    pub(crate) fn field(mut self, name: &'static str, def: FieldDef) -> Self {
        self.fields.push((name, def));
        self
    }

    pub(crate) fn visitor<const N: usize>(mut self, keys: [&'static str; N]) -> Self {
        self.visitor = Some(keys.to_vec());
        self
    }

    pub(crate) fn builder<const N: usize>(mut self, keys: [&'static str; N]) -> Self {
        self.builder = Some(keys.to_vec());
        self
    }

    pub(crate) fn aliases<const N: usize>(mut self, aliases: [Alias; N]) -> Self {
        self.aliases = Some(aliases.to_vec());
        self
    }

    pub(crate) fn bindings<const N: usize>(mut self, keys: [&'static str; N]) -> Self {
        self.bindings = keys.to_vec();
        self
    }

    /// Start from another (already registered) type's fields, visitor,
    /// builder and aliases. Explicit options on this declaration override
    /// the inherited ones wholesale.
    pub(crate) fn inherits(mut self, base: NodeType) -> Self {
        self.inherits = Some(base);
        self
    }

    pub(crate) fn validate_parent(mut self, f: ParentValidator) -> Self {
        self.validate_parent = Some(f);
        self
    }

    pub(crate) fn deprecated_alias(mut self, old_name: &'static str) -> Self {
        self.deprecated_alias = Some(old_name);
        self
    }

    pub(crate) fn register(self, registry: &mut Registry) {
        registry.add(self);
    }
}

fn check_default(kind: NodeType, key: &str, default: &Value) {
    let ok = match default {
        Value::Null | Value::Bool(_) | Value::Num(_) | Value::Str(_) => true,
        Value::List(items) => items.is_empty(),
        Value::Node(_) | Value::Obj(_) => false,
    };
    if !ok {
        panic!(
            "{}.{}: field defaults can only be primitives or empty arrays",
            kind.as_str(),
            key
        );
    }
}

#[derive(Default)]
pub struct Registry {
    types: FxHashMap<NodeType, TypeDef>,
    alias_members: FxHashMap<Alias, Vec<NodeType>>,
    deprecated: FxHashMap<&'static str, NodeType>,
    placeholder_alias: FxHashMap<&'static str, Vec<Alias>>,
}

impl Registry {
    fn add(&mut self, decl: TypeDefBuilder) {
        let kind = decl.kind;
        if self.types.contains_key(&kind) {
            panic!("{} is defined twice", kind.as_str());
        }

        let base = decl.inherits.map(|base| {
            self.types
                .get(&base)
                .unwrap_or_else(|| {
                    panic!(
                        "{} inherits from {}, which is not registered yet",
                        kind.as_str(),
                        base.as_str()
                    )
                })
                .clone()
        });

        let mut fields: FxIndexMap<&'static str, FieldDef> = FxIndexMap::default();
        if decl.fields.is_empty() {
            if let Some(base) = &base {
                for (&key, def) in &base.fields {
                    if let Some(default) = &def.default {
                        check_default(kind, key, default);
                    }
                    fields.insert(key, def.clone());
                }
            }
        } else {
            for (key, def) in decl.fields {
                if fields.insert(key, def).is_some() {
                    panic!("{}.{} is declared twice", kind.as_str(), key);
                }
            }
        }

        let visitor = decl
            .visitor
            .clone()
            .or_else(|| base.as_ref().map(|b| b.visitor.clone()))
            .unwrap_or_default();
        let builder = decl
            .builder
            .or_else(|| base.as_ref().map(|b| b.builder.clone()))
            .or(decl.visitor)
            .unwrap_or_default();
        let aliases = decl
            .aliases
            .or_else(|| base.as_ref().map(|b| b.aliases.clone()))
            .unwrap_or_default();

        // Declared visitor/builder keys always resolve, even when the
        // declaration never described their shape.
        for &key in visitor.iter().chain(builder.iter()) {
            fields.entry(key).or_insert_with(FieldDef::empty);
        }

        for (key, field) in fields.iter_mut() {
            if let Some(default) = &field.default {
                check_default(kind, key, default);
                if !builder.contains(key) {
                    field.optional = true;
                }
                if field.validate.is_none() && !default.is_null() {
                    field.validate = Some(Validator::from_default(default));
                }
            }
        }

        if let Some(old_name) = decl.deprecated_alias {
            if self.deprecated.insert(old_name, kind).is_some() {
                panic!("deprecated alias {:?} is registered twice", old_name);
            }
        }

        for &alias in &aliases {
            self.alias_members.entry(alias).or_default().push(kind);
        }

        self.types.insert(
            kind,
            TypeDef {
                kind,
                fields,
                visitor,
                builder,
                aliases,
                bindings: decl.bindings,
                validate_parent: decl.validate_parent,
                deprecated_alias: decl.deprecated_alias,
            },
        );
    }

    /// Finishes construction: fills the placeholder alias table and checks
    /// that the catalog is total over [`NodeType::ALL`] and [`Alias::ALL`].
    fn finish(mut self) -> Registry {
        for &kind in NodeType::ALL {
            if !self.types.contains_key(&kind) {
                panic!("{} was never defined", kind.as_str());
            }
        }
        for &alias in Alias::ALL {
            if !self.alias_members.contains_key(&alias) {
                panic!("alias {} has no member types", alias.as_str());
            }
        }

        self.placeholder_alias
            .insert("Declaration", vec![Alias::Statement]);
        self.placeholder_alias
            .insert("Pattern", vec![Alias::PatternLike, Alias::LVal]);
        for name in definitions::placeholders::PLACEHOLDERS {
            if let Some(kind) = NodeType::from_name(name) {
                let aliases = self.types[&kind].aliases.clone();
                if !aliases.is_empty() {
                    self.placeholder_alias.insert(name, aliases);
                }
            }
        }

        self
    }

    pub fn type_def(&self, kind: NodeType) -> &TypeDef {
        &self.types[&kind]
    }

    pub fn alias_members(&self, alias: Alias) -> &[NodeType] {
        self.alias_members
            .get(&alias)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn deprecated_target(&self, old_name: &str) -> Option<NodeType> {
        self.deprecated.get(old_name).copied()
    }

    /// True iff a placeholder expecting `expected` may stand in for
    /// `alias`.
    pub fn placeholder_expands_to(&self, expected: &str, alias: Alias) -> bool {
        if expected == alias.as_str() {
            return true;
        }
        self.placeholder_alias
            .get(expected)
            .map(|aliases| aliases.contains(&alias))
            .unwrap_or(false)
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::default();
    definitions::register_all(&mut registry);
    registry.finish()
});

pub fn registry() -> &'static Registry {
    &REGISTRY
}

pub fn type_def(kind: NodeType) -> &'static TypeDef {
    REGISTRY.type_def(kind)
}

pub fn node_fields(kind: NodeType) -> &'static FxIndexMap<&'static str, FieldDef> {
    &type_def(kind).fields
}

pub fn visitor_keys(kind: NodeType) -> &'static [&'static str] {
    &type_def(kind).visitor
}

pub fn builder_keys(kind: NodeType) -> &'static [&'static str] {
    &type_def(kind).builder
}

pub fn binding_keys(kind: NodeType) -> &'static [&'static str] {
    &type_def(kind).bindings
}

pub fn aliases_of(kind: NodeType) -> &'static [Alias] {
    &type_def(kind).aliases
}

pub fn alias_members(alias: Alias) -> &'static [NodeType] {
    REGISTRY.alias_members(alias)
}

/// Resolves a type name the way the old string-keyed API did: exact names
/// first, then deprecated ones (with a warning).
pub fn resolve_type_name(name: &str) -> Result<NodeType, Error> {
    if let Some(kind) = NodeType::from_name(name) {
        return Ok(kind);
    }
    if let Some(kind) = REGISTRY.deprecated_target(name) {
        tracing::warn!(
            "the type {:?} has been renamed to {:?}",
            name,
            kind.as_str()
        );
        return Ok(kind);
    }
    Err(Error::UnknownType(name.to_string()))
}
