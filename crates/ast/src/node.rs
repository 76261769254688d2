use estree_common::{Comment, JsWord, SourceLocation, Span};
use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

node_types! {
    // core
    ArrayExpression,
    AssignmentExpression,
    BinaryExpression,
    InterpreterDirective,
    Directive,
    DirectiveLiteral,
    BlockStatement,
    BreakStatement,
    CallExpression,
    CatchClause,
    ConditionalExpression,
    ContinueStatement,
    DebuggerStatement,
    DoWhileStatement,
    EmptyStatement,
    ExpressionStatement,
    File,
    ForInStatement,
    ForStatement,
    FunctionDeclaration,
    FunctionExpression,
    Identifier,
    IfStatement,
    LabeledStatement,
    StringLiteral,
    NumericLiteral,
    NullLiteral,
    BooleanLiteral,
    RegExpLiteral,
    LogicalExpression,
    MemberExpression,
    NewExpression,
    Program,
    ObjectExpression,
    ObjectMethod,
    ObjectProperty,
    RestElement,
    ReturnStatement,
    SequenceExpression,
    ParenthesizedExpression,
    SwitchCase,
    SwitchStatement,
    ThisExpression,
    ThrowStatement,
    TryStatement,
    UnaryExpression,
    UpdateExpression,
    VariableDeclaration,
    VariableDeclarator,
    WhileStatement,
    WithStatement,
    AssignmentPattern,
    ArrayPattern,
    ArrowFunctionExpression,
    ClassBody,
    ClassExpression,
    ClassDeclaration,
    ExportAllDeclaration,
    ExportDefaultDeclaration,
    ExportNamedDeclaration,
    ExportSpecifier,
    ForOfStatement,
    ImportDeclaration,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportSpecifier,
    MetaProperty,
    ClassMethod,
    ObjectPattern,
    SpreadElement,
    Super,
    TaggedTemplateExpression,
    TemplateElement,
    TemplateLiteral,
    YieldExpression,
    AwaitExpression,
    Import,
    BigIntLiteral,
    ExportNamespaceSpecifier,
    OptionalMemberExpression,
    OptionalCallExpression,
    ClassProperty,
    ClassAccessorProperty,
    ClassPrivateProperty,
    ClassPrivateMethod,
    PrivateName,
    StaticBlock,
    // flow
    AnyTypeAnnotation,
    ArrayTypeAnnotation,
    BooleanTypeAnnotation,
    BooleanLiteralTypeAnnotation,
    NullLiteralTypeAnnotation,
    ClassImplements,
    DeclareClass,
    DeclareFunction,
    DeclareInterface,
    DeclareModule,
    DeclareModuleExports,
    DeclareTypeAlias,
    DeclareOpaqueType,
    DeclareVariable,
    DeclareExportDeclaration,
    DeclareExportAllDeclaration,
    DeclaredPredicate,
    ExistsTypeAnnotation,
    FunctionTypeAnnotation,
    FunctionTypeParam,
    GenericTypeAnnotation,
    InferredPredicate,
    InterfaceExtends,
    InterfaceDeclaration,
    InterfaceTypeAnnotation,
    IntersectionTypeAnnotation,
    MixedTypeAnnotation,
    EmptyTypeAnnotation,
    NullableTypeAnnotation,
    NumberLiteralTypeAnnotation,
    NumberTypeAnnotation,
    ObjectTypeAnnotation,
    ObjectTypeInternalSlot,
    ObjectTypeCallProperty,
    ObjectTypeIndexer,
    ObjectTypeProperty,
    ObjectTypeSpreadProperty,
    OpaqueType,
    QualifiedTypeIdentifier,
    StringLiteralTypeAnnotation,
    StringTypeAnnotation,
    SymbolTypeAnnotation,
    ThisTypeAnnotation,
    TupleTypeAnnotation,
    TypeofTypeAnnotation,
    TypeAlias,
    TypeAnnotation,
    TypeCastExpression,
    TypeParameter,
    TypeParameterDeclaration,
    TypeParameterInstantiation,
    UnionTypeAnnotation,
    Variance,
    VoidTypeAnnotation,
    EnumDeclaration,
    EnumBooleanBody,
    EnumNumberBody,
    EnumStringBody,
    EnumSymbolBody,
    EnumBooleanMember,
    EnumNumberMember,
    EnumStringMember,
    EnumDefaultedMember,
    IndexedAccessType,
    OptionalIndexedAccessType,
    // jsx
    JSXAttribute,
    JSXClosingElement,
    JSXElement,
    JSXEmptyExpression,
    JSXExpressionContainer,
    JSXSpreadChild,
    JSXIdentifier,
    JSXMemberExpression,
    JSXNamespacedName,
    JSXOpeningElement,
    JSXSpreadAttribute,
    JSXText,
    JSXFragment,
    JSXOpeningFragment,
    JSXClosingFragment,
    // misc
    Noop,
    Placeholder,
    V8IntrinsicIdentifier,
    // experimental
    ArgumentPlaceholder,
    BindExpression,
    ImportAttribute,
    Decorator,
    DoExpression,
    ExportDefaultSpecifier,
    RecordExpression,
    TupleExpression,
    DecimalLiteral,
    ModuleExpression,
    TopicReference,
    PipelineTopicExpression,
    PipelineBareFunction,
    PipelinePrimaryTopicReference,
    // typescript
    TSParameterProperty,
    TSDeclareFunction,
    TSDeclareMethod,
    TSQualifiedName,
    TSCallSignatureDeclaration,
    TSConstructSignatureDeclaration,
    TSPropertySignature,
    TSMethodSignature,
    TSIndexSignature,
    TSAnyKeyword,
    TSBooleanKeyword,
    TSBigIntKeyword,
    TSIntrinsicKeyword,
    TSNeverKeyword,
    TSNullKeyword,
    TSNumberKeyword,
    TSObjectKeyword,
    TSStringKeyword,
    TSSymbolKeyword,
    TSUndefinedKeyword,
    TSUnknownKeyword,
    TSVoidKeyword,
    TSThisType,
    TSFunctionType,
    TSConstructorType,
    TSTypeReference,
    TSTypePredicate,
    TSTypeQuery,
    TSTypeLiteral,
    TSArrayType,
    TSTupleType,
    TSOptionalType,
    TSRestType,
    TSNamedTupleMember,
    TSUnionType,
    TSIntersectionType,
    TSConditionalType,
    TSInferType,
    TSParenthesizedType,
    TSTypeOperator,
    TSIndexedAccessType,
    TSMappedType,
    TSLiteralType,
    TSExpressionWithTypeArguments,
    TSInterfaceDeclaration,
    TSInterfaceBody,
    TSTypeAliasDeclaration,
    TSInstantiationExpression,
    TSAsExpression,
    TSSatisfiesExpression,
    TSTypeAssertion,
    TSEnumDeclaration,
    TSEnumMember,
    TSModuleDeclaration,
    TSModuleBlock,
    TSImportType,
    TSImportEqualsDeclaration,
    TSExternalModuleReference,
    TSNonNullExpression,
    TSExportAssignment,
    TSNamespaceExportDeclaration,
    TSTypeAnnotation,
    TSTypeParameterInstantiation,
    TSTypeParameterDeclaration,
    TSTypeParameter,
}

aliases! {
    Expression,
    Binary,
    Scopable,
    BlockParent,
    Block,
    Statement,
    Terminatorless,
    CompletionStatement,
    Conditional,
    Loop,
    While,
    ExpressionWrapper,
    For,
    ForXStatement,
    Function,
    FunctionParent,
    Pureish,
    Declaration,
    PatternLike,
    LVal,
    TSEntityName,
    Literal,
    Immutable,
    UserWhitespacable,
    Method,
    ObjectMember,
    Property,
    UnaryLike,
    Pattern,
    Class,
    ModuleDeclaration,
    ExportDeclaration,
    ModuleSpecifier,
    Accessor,
    Private,
    Flow,
    FlowType,
    FlowBaseAnnotation,
    FlowDeclaration,
    FlowPredicate,
    EnumBody,
    EnumMember,
    JSX,
    TSTypeElement,
    TSType,
    TSBaseType,
}

/// Either a concrete node type or an alias. Queries (`is`, `assert_is`,
/// validators) accept both, so call sites pass whichever enum they have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeQuery {
    Kind(NodeType),
    Alias(Alias),
}

impl TypeQuery {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeQuery::Kind(k) => k.as_str(),
            TypeQuery::Alias(a) => a.as_str(),
        }
    }
}

impl From<NodeType> for TypeQuery {
    fn from(kind: NodeType) -> Self {
        TypeQuery::Kind(kind)
    }
}

impl From<Alias> for TypeQuery {
    fn from(alias: Alias) -> Self {
        TypeQuery::Alias(alias)
    }
}

/// A runtime field value. Children are owned, so a well-formed tree cannot
/// be cyclic by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Num(f64),
    Str(JsWord),
    Node(Box<Node>),
    List(Vec<Value>),
    /// A nested plain record, only used for shape-validated fields such as
    /// `TemplateElement.value`.
    Obj(Vec<(&'static str, Value)>),
}

impl Value {
    pub fn str(value: impl AsRef<str>) -> Value {
        Value::Str(JsWord::from(value.as_ref()))
    }

    pub fn node(node: Node) -> Value {
        Value::Node(Box::new(node))
    }

    pub fn nodes(nodes: Vec<Node>) -> Value {
        Value::List(nodes.into_iter().map(Value::node).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Num(_) => ValueKind::Num,
            Value::Str(_) => ValueKind::Str,
            Value::Node(_) => ValueKind::Node,
            Value::List(_) => ValueKind::List,
            Value::Obj(_) => ValueKind::Obj,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Value::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn into_node(self) -> Option<Node> {
        match self {
            Value::Node(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&JsWord> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// A short description of the value for error messages.
    pub fn describe(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Num(n) => n.to_string(),
            Value::Str(s) => format!("{:?}", &**s),
            Value::Node(n) => format!("a {} node", n.kind().as_str()),
            Value::List(items) => format!("an array of {} elements", items.len()),
            Value::Obj(_) => "an object".to_string(),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Num(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::str(v)
    }
}

impl From<JsWord> for Value {
    fn from(v: JsWord) -> Self {
        Value::Str(v)
    }
}

impl From<Node> for Value {
    fn from(v: Node) -> Self {
        Value::node(v)
    }
}

/// The runtime kind of a [`Value`], used by value-type validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Num,
    Str,
    Node,
    List,
    Obj,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Num => "number",
            ValueKind::Str => "string",
            ValueKind::Node => "node",
            ValueKind::List => "array",
            ValueKind::Obj => "object",
        }
    }
}

/// One syntax-tree node: a type tag plus the fields its type declares.
///
/// Callers may attach ad hoc fields through [`Node::set_field`]; the
/// schema-driven operations (validation, cloning, traversal) only ever look
/// at the fields the registry declares for `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeType,
    pub fields: FxIndexMap<&'static str, Value>,
    pub span: Span,
    pub loc: Option<SourceLocation>,
    pub leading_comments: Vec<Comment>,
    pub trailing_comments: Vec<Comment>,
    pub inner_comments: Vec<Comment>,
    pub extra: Vec<(&'static str, Value)>,
}

impl Node {
    pub fn new(kind: NodeType) -> Node {
        Node {
            kind,
            fields: FxIndexMap::default(),
            span: Span::default(),
            loc: None,
            leading_comments: Vec::new(),
            trailing_comments: Vec::new(),
            inner_comments: Vec::new(),
            extra: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeType {
        self.kind
    }

    /// Re-tags this node. The fields are left untouched; this is only
    /// meaningful between types sharing a field layout (e.g.
    /// `FunctionDeclaration` and `FunctionExpression`).
    pub(crate) fn set_kind(&mut self, kind: NodeType) {
        self.kind = kind;
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.fields.get_mut(key)
    }

    pub fn set_field(&mut self, key: &'static str, value: impl Into<Value>) {
        self.fields.insert(key, value.into());
    }

    pub fn take_field(&mut self, key: &str) -> Option<Value> {
        self.fields.swap_remove(key)
    }

    /// The named child node, if the field is present and node-valued.
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.field(key).and_then(Value::as_node)
    }

    pub fn child_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.field_mut(key).and_then(Value::as_node_mut)
    }

    /// Moves the named child out, leaving `Null` behind.
    pub fn take_child(&mut self, key: &str) -> Option<Node> {
        match self.field_mut(key) {
            Some(slot @ Value::Node(_)) => std::mem::replace(slot, Value::Null).into_node(),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> Option<&[Value]> {
        self.field(key).and_then(Value::as_list)
    }

    pub fn str_field(&self, key: &str) -> Option<&JsWord> {
        self.field(key).and_then(Value::as_str)
    }

    pub fn bool_field(&self, key: &str) -> Option<bool> {
        self.field(key).and_then(Value::as_bool)
    }

    pub fn num_field(&self, key: &str) -> Option<f64> {
        self.field(key).and_then(Value::as_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &kind in NodeType::ALL {
            assert_eq!(NodeType::from_name(kind.as_str()), Some(kind));
        }
        for &alias in Alias::ALL {
            assert_eq!(Alias::from_name(alias.as_str()), Some(alias));
        }
    }

    #[test]
    fn alias_names_never_collide_with_type_names() {
        for &alias in Alias::ALL {
            assert_eq!(NodeType::from_name(alias.as_str()), None);
        }
    }

    #[test]
    fn take_child_leaves_null() {
        let mut node = Node::new(NodeType::ExpressionStatement);
        node.set_field("expression", Node::new(NodeType::Identifier));
        let taken = node.take_child("expression").unwrap();
        assert_eq!(taken.kind(), NodeType::Identifier);
        assert_eq!(node.field("expression"), Some(&Value::Null));
    }
}
