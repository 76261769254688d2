use super::*;
use crate::constants::{
    ASSIGNMENT_OPERATORS, BINARY_OPERATORS, LOGICAL_OPERATORS, UNARY_OPERATORS, UPDATE_OPERATORS,
};
use crate::error::Error;
use crate::node::Alias::*;
use crate::node::NodeType::*;
use crate::node::{Node, Value, ValueKind};
use crate::registry::{define, FieldDef, Registry};
use crate::validators::{
    assert_each, assert_node_type, assert_shape, assert_value_type, chain, custom,
    reject_non_optional_parent, validate_optional_chain_link, validate_template_expressions,
};
use estree_common::is_identifier_name;

fn validate_identifier_name(node: &Node, key: &str, val: &Value) -> Result<(), Error> {
    match val {
        Value::Str(name) if is_identifier_name(name) => Ok(()),
        _ => Err(Error::field_value(
            node.kind(),
            key,
            "a valid identifier name".to_string(),
            val.describe(),
        )),
    }
}

fn validate_regex_flags(node: &Node, key: &str, val: &Value) -> Result<(), Error> {
    match val {
        Value::Str(flags) if flags.chars().all(|c| "dgimsuvy".contains(c)) => Ok(()),
        _ => Err(Error::field_value(
            node.kind(),
            key,
            "a valid RegExp flag string".to_string(),
            val.describe(),
        )),
    }
}

/// A member/property key: any expression when the owner is `computed`,
/// otherwise an identifier or literal key.
fn validate_property_key(node: &Node, key: &str, val: &Value) -> Result<(), Error> {
    let types = if node.bool_field("computed").unwrap_or(false) {
        q![Expression]
    } else {
        q![Identifier, StringLiteral, NumericLiteral, BigIntLiteral, PrivateName]
    };
    assert_node_type(types).validate(node, key, val)
}

/// A member access property: any expression when `computed`, otherwise an
/// identifier or private name.
fn validate_member_property(node: &Node, key: &str, val: &Value) -> Result<(), Error> {
    let types = if node.bool_field("computed").unwrap_or(false) {
        q![Expression]
    } else {
        q![Identifier, PrivateName]
    };
    assert_node_type(types).validate(node, key, val)
}

fn function_params() -> FieldDef {
    arr_ty(q![Identifier, Pattern, RestElement])
}

fn type_annotation_opt() -> FieldDef {
    ty_opt(q![TypeAnnotation, TSTypeAnnotation, Noop])
}

fn type_parameters_opt() -> FieldDef {
    ty_opt(q![TypeParameterDeclaration, TSTypeParameterDeclaration, Noop])
}

fn decorators_opt() -> FieldDef {
    arr_ty_opt(q![Decorator])
}

pub(super) fn register(r: &mut Registry) {
    define(ArrayExpression)
        .visitor(["elements"])
        .aliases([Expression])
        .field(
            "elements",
            arr_ty_or_null(q![Expression, SpreadElement]).default(Value::List(Vec::new())),
        )
        .register(r);

    define(AssignmentExpression)
        .builder(["operator", "left", "right"])
        .visitor(["left", "right"])
        .aliases([Expression])
        .field("operator", one_of(ASSIGNMENT_OPERATORS))
        .field("left", ty(q![LVal, OptionalMemberExpression]))
        .field("right", ty(q![Expression]))
        .bindings(["left"])
        .register(r);

    define(BinaryExpression)
        .builder(["operator", "left", "right"])
        .visitor(["left", "right"])
        .aliases([Binary, Expression])
        .field("operator", one_of(BINARY_OPERATORS))
        .field("left", ty(q![Expression, PrivateName]))
        .field("right", ty(q![Expression]))
        .register(r);

    define(InterpreterDirective)
        .builder(["value"])
        .field("value", string())
        .register(r);

    define(Directive)
        .visitor(["value"])
        .field("value", ty(q![DirectiveLiteral]))
        .register(r);

    define(DirectiveLiteral)
        .builder(["value"])
        .field("value", string())
        .register(r);

    define(BlockStatement)
        .builder(["body", "directives"])
        .visitor(["directives", "body"])
        .aliases([Scopable, BlockParent, Block, Statement])
        .field("body", arr_ty(q![Statement]))
        .field("directives", arr_ty_default(q![Directive]))
        .register(r);

    define(BreakStatement)
        .visitor(["label"])
        .aliases([Statement, Terminatorless, CompletionStatement])
        .field("label", ty_opt(q![Identifier]))
        .register(r);

    define(CallExpression)
        .builder(["callee", "arguments"])
        .visitor(["callee", "arguments", "typeParameters", "typeArguments"])
        .aliases([Expression])
        .field("callee", ty(q![Expression, Super, Import, V8IntrinsicIdentifier]))
        .field(
            "arguments",
            arr_ty(q![Expression, SpreadElement, JSXNamespacedName, ArgumentPlaceholder]),
        )
        .field("optional", boolean().optional())
        .field("typeArguments", ty_opt(q![TypeParameterInstantiation]))
        .field("typeParameters", ty_opt(q![TSTypeParameterInstantiation]))
        .register(r);

    define(CatchClause)
        .visitor(["param", "body"])
        .aliases([Scopable, BlockParent])
        .field("param", ty_opt(q![Identifier, ArrayPattern, ObjectPattern]))
        .field("body", ty(q![BlockStatement]))
        .bindings(["param"])
        .register(r);

    define(ConditionalExpression)
        .visitor(["test", "consequent", "alternate"])
        .aliases([Expression, Conditional])
        .field("test", ty(q![Expression]))
        .field("consequent", ty(q![Expression]))
        .field("alternate", ty(q![Expression]))
        .register(r);

    define(ContinueStatement)
        .visitor(["label"])
        .aliases([Statement, Terminatorless, CompletionStatement])
        .field("label", ty_opt(q![Identifier]))
        .register(r);

    define(DebuggerStatement).aliases([Statement]).register(r);

    define(DoWhileStatement)
        .visitor(["body", "test"])
        .aliases([Statement, BlockParent, Loop, While, Scopable])
        .field("body", ty(q![Statement]))
        .field("test", ty(q![Expression]))
        .register(r);

    define(EmptyStatement).aliases([Statement]).register(r);

    define(ExpressionStatement)
        .visitor(["expression"])
        .aliases([Statement, ExpressionWrapper])
        .field("expression", ty(q![Expression]))
        .register(r);

    define(File)
        .builder(["program", "comments", "tokens"])
        .visitor(["program"])
        .field("program", ty(q![Program]))
        .register(r);

    define(ForInStatement)
        .visitor(["left", "right", "body"])
        .aliases([Scopable, Statement, For, BlockParent, Loop, ForXStatement])
        .field("left", ty(q![VariableDeclaration, LVal]))
        .field("right", ty(q![Expression]))
        .field("body", ty(q![Statement]))
        .bindings(["left"])
        .register(r);

    define(ForStatement)
        .visitor(["init", "test", "update", "body"])
        .aliases([Scopable, Statement, For, BlockParent, Loop])
        .field("init", ty_opt(q![VariableDeclaration, Expression]))
        .field("test", ty_opt(q![Expression]))
        .field("update", ty_opt(q![Expression]))
        .field("body", ty(q![Statement]))
        .register(r);

    define(FunctionDeclaration)
        .builder(["id", "params", "body", "generator", "async"])
        .visitor(["id", "params", "body", "returnType", "typeParameters"])
        .aliases([
            Scopable,
            Function,
            BlockParent,
            FunctionParent,
            Statement,
            Pureish,
            Declaration,
        ])
        .field("id", ty_opt(q![Identifier]))
        .field("params", function_params())
        .field("body", ty(q![BlockStatement]))
        .field("generator", bool_default(false))
        .field("async", bool_default(false))
        .field("declare", boolean().optional())
        .field("returnType", type_annotation_opt())
        .field("typeParameters", type_parameters_opt())
        .bindings(["id", "params"])
        .register(r);

    define(FunctionExpression)
        .inherits(FunctionDeclaration)
        .aliases([Scopable, Function, BlockParent, FunctionParent, Expression, Pureish])
        .bindings(["id", "params"])
        .register(r);

    define(Identifier)
        .builder(["name"])
        .visitor(["typeAnnotation", "decorators"])
        .aliases([Expression, PatternLike, LVal, TSEntityName])
        .field("name", FieldDef::new(custom(validate_identifier_name)))
        .field("optional", boolean().optional())
        .field("typeAnnotation", type_annotation_opt())
        .field("decorators", decorators_opt())
        .register(r);

    define(IfStatement)
        .visitor(["test", "consequent", "alternate"])
        .aliases([Statement, Conditional])
        .field("test", ty(q![Expression]))
        .field("consequent", ty(q![Statement]))
        .field("alternate", ty_opt(q![Statement]))
        .register(r);

    define(LabeledStatement)
        .visitor(["label", "body"])
        .aliases([Statement])
        .field("label", ty(q![Identifier]))
        .field("body", ty(q![Statement]))
        .bindings(["label"])
        .register(r);

    define(StringLiteral)
        .builder(["value"])
        .aliases([Expression, Pureish, Literal, Immutable])
        .field("value", string())
        .register(r);

    define(NumericLiteral)
        .builder(["value"])
        .deprecated_alias("NumberLiteral")
        .aliases([Expression, Pureish, Literal, Immutable])
        .field("value", number())
        .register(r);

    define(NullLiteral)
        .aliases([Expression, Pureish, Literal, Immutable])
        .register(r);

    define(BooleanLiteral)
        .builder(["value"])
        .aliases([Expression, Pureish, Literal, Immutable])
        .field("value", boolean())
        .register(r);

    define(RegExpLiteral)
        .builder(["pattern", "flags"])
        .deprecated_alias("RegexLiteral")
        .aliases([Expression, Pureish, Literal])
        .field("pattern", string())
        .field(
            "flags",
            FieldDef::new(custom(validate_regex_flags)).default(""),
        )
        .register(r);

    define(LogicalExpression)
        .builder(["operator", "left", "right"])
        .visitor(["left", "right"])
        .aliases([Binary, Expression])
        .field("operator", one_of(LOGICAL_OPERATORS))
        .field("left", ty(q![Expression]))
        .field("right", ty(q![Expression]))
        .register(r);

    define(MemberExpression)
        .builder(["object", "property", "computed", "optional"])
        .visitor(["object", "property"])
        .aliases([Expression, LVal])
        .field("object", ty(q![Expression, Super]))
        .field("property", FieldDef::new(custom(validate_member_property)))
        .field("computed", bool_default(false))
        .field("optional", boolean().optional())
        .register(r);

    define(NewExpression)
        .inherits(CallExpression)
        .aliases([Expression])
        .register(r);

    define(Program)
        .builder(["body", "directives", "sourceType", "interpreter"])
        .visitor(["directives", "body"])
        .aliases([Scopable, BlockParent, Block])
        .field("body", arr_ty(q![Statement]))
        .field("directives", arr_ty_default(q![Directive]))
        .field("sourceType", one_of(&["script", "module"]).default("script"))
        .field("interpreter", ty_opt(q![InterpreterDirective]))
        .register(r);

    define(ObjectExpression)
        .visitor(["properties"])
        .aliases([Expression])
        .field(
            "properties",
            arr_ty(q![ObjectMethod, ObjectProperty, SpreadElement]),
        )
        .register(r);

    define(ObjectMethod)
        .builder(["kind", "key", "params", "body", "computed", "generator", "async"])
        .visitor(["key", "params", "body", "decorators", "returnType", "typeParameters"])
        .aliases([
            Scopable,
            Function,
            BlockParent,
            FunctionParent,
            Method,
            ObjectMember,
            UserWhitespacable,
        ])
        .field(
            "kind",
            one_of(&["method", "get", "set"]).default("method"),
        )
        .field("key", FieldDef::new(custom(validate_property_key)))
        .field("params", function_params())
        .field("body", ty(q![BlockStatement]))
        .field("computed", bool_default(false))
        .field("generator", bool_default(false))
        .field("async", bool_default(false))
        .field("decorators", decorators_opt())
        .field("returnType", type_annotation_opt())
        .field("typeParameters", type_parameters_opt())
        .bindings(["params"])
        .register(r);

    define(ObjectProperty)
        .builder(["key", "value", "computed", "shorthand", "decorators"])
        .visitor(["key", "value", "decorators"])
        .aliases([UserWhitespacable, Property, ObjectMember])
        .field("key", FieldDef::new(custom(validate_property_key)))
        .field("value", ty(q![Expression, PatternLike]))
        .field("computed", bool_default(false))
        .field("shorthand", bool_default(false))
        .field("decorators", decorators_opt())
        .bindings(["value"])
        .register(r);

    define(RestElement)
        .builder(["argument"])
        .visitor(["argument", "typeAnnotation"])
        .deprecated_alias("RestProperty")
        .aliases([LVal, PatternLike])
        .field("argument", ty(q![LVal]))
        .field("optional", boolean().optional())
        .field("typeAnnotation", type_annotation_opt())
        .field("decorators", decorators_opt())
        .bindings(["argument"])
        .register(r);

    define(ReturnStatement)
        .visitor(["argument"])
        .aliases([Statement, Terminatorless, CompletionStatement])
        .field("argument", ty_opt(q![Expression]))
        .register(r);

    define(SequenceExpression)
        .visitor(["expressions"])
        .aliases([Expression])
        .field("expressions", arr_ty(q![Expression]))
        .register(r);

    define(ParenthesizedExpression)
        .visitor(["expression"])
        .aliases([Expression, ExpressionWrapper])
        .field("expression", ty(q![Expression]))
        .register(r);

    define(SwitchCase)
        .visitor(["test", "consequent"])
        .field("test", ty_opt(q![Expression]))
        .field("consequent", arr_ty(q![Statement]))
        .register(r);

    define(SwitchStatement)
        .visitor(["discriminant", "cases"])
        .aliases([Statement, BlockParent, Scopable])
        .field("discriminant", ty(q![Expression]))
        .field("cases", arr_ty(q![SwitchCase]))
        .register(r);

    define(ThisExpression).aliases([Expression]).register(r);

    define(ThrowStatement)
        .visitor(["argument"])
        .aliases([Statement, Terminatorless, CompletionStatement])
        .field("argument", ty(q![Expression]))
        .register(r);

    define(TryStatement)
        .visitor(["block", "handler", "finalizer"])
        .aliases([Statement])
        .field("block", ty(q![BlockStatement]))
        .field("handler", ty_opt(q![CatchClause]))
        .field("finalizer", ty_opt(q![BlockStatement]))
        .register(r);

    define(UnaryExpression)
        .builder(["operator", "argument", "prefix"])
        .visitor(["argument"])
        .aliases([UnaryLike, Expression])
        .field("operator", one_of(UNARY_OPERATORS))
        .field("argument", ty(q![Expression]))
        .field("prefix", bool_default(true))
        .bindings(["argument"])
        .register(r);

    define(UpdateExpression)
        .builder(["operator", "argument", "prefix"])
        .visitor(["argument"])
        .aliases([Expression])
        .field("operator", one_of(UPDATE_OPERATORS))
        .field("argument", ty(q![Expression]))
        .field("prefix", bool_default(false))
        .bindings(["argument"])
        .register(r);

    define(VariableDeclaration)
        .builder(["kind", "declarations"])
        .visitor(["declarations"])
        .aliases([Statement, Declaration])
        .field("kind", one_of(&["var", "let", "const"]))
        .field("declarations", arr_ty(q![VariableDeclarator]))
        .field("declare", boolean().optional())
        .bindings(["declarations"])
        .register(r);

    define(VariableDeclarator)
        .visitor(["id", "init"])
        .field("id", ty(q![LVal]))
        .field("init", ty_opt(q![Expression]))
        .field("definite", boolean().optional())
        .bindings(["id"])
        .register(r);

    define(WhileStatement)
        .visitor(["test", "body"])
        .aliases([Statement, BlockParent, Loop, While, Scopable])
        .field("test", ty(q![Expression]))
        .field("body", ty(q![Statement]))
        .register(r);

    define(WithStatement)
        .visitor(["object", "body"])
        .aliases([Statement])
        .field("object", ty(q![Expression]))
        .field("body", ty(q![Statement]))
        .register(r);

    define(AssignmentPattern)
        .builder(["left", "right"])
        .visitor(["left", "right", "decorators"])
        .aliases([Pattern, PatternLike, LVal])
        .field(
            "left",
            ty(q![Identifier, ObjectPattern, ArrayPattern, MemberExpression]),
        )
        .field("right", ty(q![Expression]))
        .field("optional", boolean().optional())
        .field("typeAnnotation", type_annotation_opt())
        .field("decorators", decorators_opt())
        .bindings(["left"])
        .register(r);

    define(ArrayPattern)
        .builder(["elements"])
        .visitor(["elements", "typeAnnotation"])
        .aliases([Pattern, PatternLike, LVal])
        .field("elements", arr_ty_or_null(q![PatternLike, LVal]))
        .field("optional", boolean().optional())
        .field("typeAnnotation", type_annotation_opt())
        .field("decorators", decorators_opt())
        .bindings(["elements"])
        .register(r);

    define(ArrowFunctionExpression)
        .builder(["params", "body", "async"])
        .visitor(["params", "body", "returnType", "typeParameters"])
        .aliases([Scopable, Function, BlockParent, FunctionParent, Expression, Pureish])
        .field("params", function_params())
        .field("body", ty(q![BlockStatement, Expression]))
        .field("async", bool_default(false))
        .field("expression", bool_default(false))
        .field("generator", bool_default(false))
        .field("returnType", type_annotation_opt())
        .field("typeParameters", type_parameters_opt())
        .bindings(["params"])
        .register(r);

    define(ClassBody)
        .visitor(["body"])
        .field(
            "body",
            arr_ty(q![
                ClassMethod,
                ClassPrivateMethod,
                ClassProperty,
                ClassPrivateProperty,
                ClassAccessorProperty,
                TSDeclareMethod,
                TSIndexSignature,
                StaticBlock
            ]),
        )
        .register(r);

    define(ClassExpression)
        .builder(["id", "superClass", "body", "decorators"])
        .visitor([
            "id",
            "body",
            "superClass",
            "mixins",
            "typeParameters",
            "superTypeParameters",
            "implements",
            "decorators",
        ])
        .aliases([Scopable, Class, Expression])
        .field("id", ty_opt(q![Identifier]))
        .field("typeParameters", type_parameters_opt())
        .field("body", ty(q![ClassBody]))
        .field("superClass", ty_opt(q![Expression]))
        .field(
            "superTypeParameters",
            ty_opt(q![TypeParameterInstantiation, TSTypeParameterInstantiation]),
        )
        .field(
            "implements",
            arr_ty_opt(q![TSExpressionWithTypeArguments, ClassImplements]),
        )
        .field("mixins", arr_ty_opt(q![InterfaceExtends]))
        .field("decorators", decorators_opt())
        .bindings(["id"])
        .register(r);

    define(ClassDeclaration)
        .inherits(ClassExpression)
        .aliases([Scopable, Class, Statement, Declaration])
        .bindings(["id"])
        .register(r);

    define(ExportAllDeclaration)
        .visitor(["source"])
        .aliases([Statement, Declaration, ModuleDeclaration, ExportDeclaration])
        .field("source", ty(q![StringLiteral]))
        .field("exportKind", one_of(&["type", "value"]).optional())
        .field("attributes", arr_ty_opt(q![ImportAttribute]))
        .register(r);

    define(ExportDefaultDeclaration)
        .visitor(["declaration"])
        .aliases([Statement, Declaration, ModuleDeclaration, ExportDeclaration])
        .field(
            "declaration",
            ty(q![TSDeclareFunction, FunctionDeclaration, ClassDeclaration, Expression]),
        )
        .register(r);

    define(ExportNamedDeclaration)
        .visitor(["declaration", "specifiers", "source"])
        .aliases([Statement, Declaration, ModuleDeclaration, ExportDeclaration])
        .field("declaration", ty_opt(q![Declaration]))
        .field(
            "specifiers",
            arr_ty_default(q![
                ExportSpecifier,
                ExportDefaultSpecifier,
                ExportNamespaceSpecifier
            ]),
        )
        .field("source", ty_opt(q![StringLiteral]))
        .field("exportKind", one_of(&["type", "value"]).optional())
        .field("attributes", arr_ty_opt(q![ImportAttribute]))
        .register(r);

    define(ExportSpecifier)
        .visitor(["local", "exported"])
        .aliases([ModuleSpecifier])
        .field("local", ty(q![Identifier]))
        .field("exported", ty(q![Identifier, StringLiteral]))
        .field("exportKind", one_of(&["type", "value"]).optional())
        .bindings(["exported"])
        .register(r);

    define(ForOfStatement)
        .visitor(["left", "right", "body"])
        .aliases([Scopable, Statement, For, BlockParent, Loop, ForXStatement])
        .field("left", ty(q![VariableDeclaration, LVal]))
        .field("right", ty(q![Expression]))
        .field("body", ty(q![Statement]))
        .field("await", bool_default(false))
        .bindings(["left"])
        .register(r);

    define(ImportDeclaration)
        .visitor(["specifiers", "source"])
        .aliases([Statement, Declaration, ModuleDeclaration])
        .field(
            "specifiers",
            arr_ty(q![ImportSpecifier, ImportDefaultSpecifier, ImportNamespaceSpecifier]),
        )
        .field("source", ty(q![StringLiteral]))
        .field("importKind", one_of(&["type", "typeof", "value"]).optional())
        .field("attributes", arr_ty_opt(q![ImportAttribute]))
        .bindings(["specifiers"])
        .register(r);

    define(ImportDefaultSpecifier)
        .visitor(["local"])
        .aliases([ModuleSpecifier])
        .field("local", ty(q![Identifier]))
        .bindings(["local"])
        .register(r);

    define(ImportNamespaceSpecifier)
        .visitor(["local"])
        .aliases([ModuleSpecifier])
        .field("local", ty(q![Identifier]))
        .bindings(["local"])
        .register(r);

    define(ImportSpecifier)
        .visitor(["local", "imported"])
        .aliases([ModuleSpecifier])
        .field("local", ty(q![Identifier]))
        .field("imported", ty(q![Identifier, StringLiteral]))
        .field("importKind", one_of(&["type", "typeof", "value"]).optional())
        .bindings(["local"])
        .register(r);

    define(MetaProperty)
        .visitor(["meta", "property"])
        .aliases([Expression])
        .field("meta", ty(q![Identifier]))
        .field("property", ty(q![Identifier]))
        .register(r);

    define(ClassMethod)
        .builder([
            "kind", "key", "params", "body", "computed", "static", "generator", "async",
        ])
        .visitor(["key", "params", "body", "decorators", "returnType", "typeParameters"])
        .aliases([Function, Scopable, BlockParent, FunctionParent, Method])
        .field(
            "kind",
            one_of(&["get", "set", "method", "constructor"]).default("method"),
        )
        .field("key", FieldDef::new(custom(validate_property_key)))
        .field(
            "params",
            arr_ty(q![Identifier, Pattern, RestElement, TSParameterProperty]),
        )
        .field("body", ty(q![BlockStatement]))
        .field("computed", bool_default(false))
        .field("static", bool_default(false))
        .field("generator", bool_default(false))
        .field("async", bool_default(false))
        .field("abstract", boolean().optional())
        .field("optional", boolean().optional())
        .field(
            "accessibility",
            one_of(&["public", "private", "protected"]).optional(),
        )
        .field("decorators", decorators_opt())
        .field("returnType", type_annotation_opt())
        .field("typeParameters", type_parameters_opt())
        .bindings(["params"])
        .register(r);

    define(ObjectPattern)
        .builder(["properties"])
        .visitor(["properties", "typeAnnotation", "decorators"])
        .aliases([Pattern, PatternLike, LVal])
        .field("properties", arr_ty(q![RestElement, ObjectProperty]))
        .field("optional", boolean().optional())
        .field("typeAnnotation", type_annotation_opt())
        .field("decorators", decorators_opt())
        .bindings(["properties"])
        .register(r);

    define(SpreadElement)
        .visitor(["argument"])
        .deprecated_alias("SpreadProperty")
        .aliases([UnaryLike])
        .field("argument", ty(q![Expression]))
        .register(r);

    define(Super).aliases([Expression]).register(r);

    define(TaggedTemplateExpression)
        .visitor(["tag", "quasi", "typeParameters"])
        .aliases([Expression])
        .field("tag", ty(q![Expression]))
        .field("quasi", ty(q![TemplateLiteral]))
        .field(
            "typeParameters",
            ty_opt(q![TypeParameterInstantiation, TSTypeParameterInstantiation]),
        )
        .register(r);

    define(TemplateElement)
        .builder(["value", "tail"])
        .field(
            "value",
            FieldDef::new(assert_shape(vec![
                ("raw", string()),
                ("cooked", string().optional()),
            ])),
        )
        .field("tail", bool_default(false))
        .register(r);

    define(TemplateLiteral)
        .visitor(["quasis", "expressions"])
        .aliases([Expression, Literal])
        .field("quasis", arr_ty(q![TemplateElement]))
        .field(
            "expressions",
            FieldDef::new(chain(vec![
                assert_value_type(ValueKind::List),
                assert_each(assert_node_type(q![Expression, TSType])),
                custom(validate_template_expressions),
            ])),
        )
        .register(r);

    define(YieldExpression)
        .builder(["argument", "delegate"])
        .visitor(["argument"])
        .aliases([Expression, Terminatorless])
        .field("argument", ty_opt(q![Expression]))
        .field("delegate", bool_default(false))
        .register(r);

    define(AwaitExpression)
        .visitor(["argument"])
        .aliases([Expression, Terminatorless])
        .field("argument", ty(q![Expression]))
        .register(r);

    define(Import).aliases([Expression]).register(r);

    define(BigIntLiteral)
        .builder(["value"])
        .aliases([Expression, Pureish, Literal, Immutable])
        .field("value", string())
        .register(r);

    define(ExportNamespaceSpecifier)
        .visitor(["exported"])
        .aliases([ModuleSpecifier])
        .field("exported", ty(q![Identifier]))
        .bindings(["exported"])
        .register(r);

    define(OptionalMemberExpression)
        .builder(["object", "property", "computed", "optional"])
        .visitor(["object", "property"])
        .aliases([Expression])
        .validate_parent(reject_non_optional_parent)
        .field("object", ty(q![Expression]))
        .field("property", FieldDef::new(custom(validate_member_property)))
        .field("computed", bool_default(false))
        .field("optional", FieldDef::new(custom(validate_optional_chain_link)))
        .register(r);

    define(OptionalCallExpression)
        .builder(["callee", "arguments", "optional"])
        .visitor(["callee", "arguments", "typeParameters", "typeArguments"])
        .aliases([Expression])
        .validate_parent(reject_non_optional_parent)
        .field("callee", ty(q![Expression]))
        .field(
            "arguments",
            arr_ty(q![Expression, SpreadElement, JSXNamespacedName, ArgumentPlaceholder]),
        )
        .field("optional", FieldDef::new(custom(validate_optional_chain_link)))
        .field("typeArguments", ty_opt(q![TypeParameterInstantiation]))
        .field("typeParameters", ty_opt(q![TSTypeParameterInstantiation]))
        .register(r);

    define(ClassProperty)
        .builder(["key", "value", "typeAnnotation", "decorators", "computed", "static"])
        .visitor(["key", "value", "typeAnnotation", "decorators"])
        .aliases([Property])
        .field("key", FieldDef::new(custom(validate_property_key)))
        .field("value", ty_opt(q![Expression]))
        .field("typeAnnotation", type_annotation_opt())
        .field("decorators", decorators_opt())
        .field("computed", bool_default(false))
        .field("static", bool_default(false))
        .field("abstract", boolean().optional())
        .field("declare", boolean().optional())
        .field("definite", boolean().optional())
        .field("optional", boolean().optional())
        .field("readonly", boolean().optional())
        .field(
            "accessibility",
            one_of(&["public", "private", "protected"]).optional(),
        )
        .register(r);

    define(ClassAccessorProperty)
        .inherits(ClassProperty)
        .aliases([Property, Accessor])
        .register(r);

    define(ClassPrivateProperty)
        .builder(["key", "value", "decorators", "static"])
        .visitor(["key", "value", "decorators", "typeAnnotation"])
        .aliases([Property, Private])
        .field("key", ty(q![PrivateName]))
        .field("value", ty_opt(q![Expression]))
        .field("typeAnnotation", type_annotation_opt())
        .field("decorators", decorators_opt())
        .field("static", bool_default(false))
        .field("definite", boolean().optional())
        .field("readonly", boolean().optional())
        .register(r);

    define(ClassPrivateMethod)
        .builder(["kind", "key", "params", "body", "static"])
        .visitor(["key", "params", "body", "decorators", "returnType", "typeParameters"])
        .aliases([Function, Scopable, BlockParent, FunctionParent, Method, Private])
        .field(
            "kind",
            one_of(&["get", "set", "method"]).default("method"),
        )
        .field("key", ty(q![PrivateName]))
        .field(
            "params",
            arr_ty(q![Identifier, Pattern, RestElement, TSParameterProperty]),
        )
        .field("body", ty(q![BlockStatement]))
        .field("static", bool_default(false))
        .field("computed", bool_default(false))
        .field("generator", bool_default(false))
        .field("async", bool_default(false))
        .field("decorators", decorators_opt())
        .field("returnType", type_annotation_opt())
        .field("typeParameters", type_parameters_opt())
        .bindings(["params"])
        .register(r);

    define(PrivateName)
        .visitor(["id"])
        .aliases([Private])
        .field("id", ty(q![Identifier]))
        .register(r);

    define(StaticBlock)
        .visitor(["body"])
        .aliases([Scopable, BlockParent, FunctionParent])
        .field("body", arr_ty(q![Statement]))
        .register(r);
}
