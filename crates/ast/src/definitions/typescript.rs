use super::*;
use crate::error::Error;
use crate::node::Alias::*;
use crate::node::NodeType::*;
use crate::node::{Node, Value};
use crate::registry::{define, FieldDef, Registry};
use crate::validators::custom;

/// Mapped-type modifiers are either a bare `true` or a `"+"`/`"-"` prefix.
fn validate_mapped_modifier(node: &Node, key: &str, val: &Value) -> Result<(), Error> {
    match val {
        Value::Bool(true) => Ok(()),
        Value::Str(s) if &**s == "+" || &**s == "-" => Ok(()),
        _ => Err(Error::field_value(
            node.kind(),
            key,
            "true, \"+\" or \"-\"".to_string(),
            val.describe(),
        )),
    }
}

fn signature_parameters() -> FieldDef {
    arr_ty(q![ArrayPattern, Identifier, ObjectPattern, RestElement])
}

pub(super) fn register(r: &mut Registry) {
    define(TSParameterProperty)
        .visitor(["parameter"])
        .aliases([LVal])
        .field(
            "accessibility",
            one_of(&["public", "private", "protected"]).optional(),
        )
        .field("readonly", boolean().optional())
        .field("override", boolean().optional())
        .field("parameter", ty(q![Identifier, AssignmentPattern]))
        .field("decorators", arr_ty_opt(q![Decorator]))
        .register(r);

    define(TSDeclareFunction)
        .builder(["id", "typeParameters", "params", "returnType"])
        .visitor(["id", "typeParameters", "params", "returnType"])
        .aliases([Statement, Declaration])
        .field("id", ty_opt(q![Identifier]))
        .field("typeParameters", ty_opt(q![TSTypeParameterDeclaration, Noop]))
        .field("params", arr_ty(q![Identifier, Pattern, RestElement]))
        .field("returnType", ty_opt(q![TSTypeAnnotation, Noop]))
        .field("async", bool_default(false))
        .field("declare", boolean().optional())
        .field("generator", bool_default(false))
        .register(r);

    define(TSDeclareMethod)
        .builder(["decorators", "key", "typeParameters", "params", "returnType"])
        .visitor(["decorators", "key", "typeParameters", "params", "returnType"])
        .field("decorators", arr_ty_opt(q![Decorator]))
        .field("key", ty(q![Identifier, StringLiteral, NumericLiteral, BigIntLiteral, Expression]))
        .field("typeParameters", ty_opt(q![TSTypeParameterDeclaration, Noop]))
        .field(
            "params",
            arr_ty(q![Identifier, Pattern, RestElement, TSParameterProperty]),
        )
        .field("returnType", ty_opt(q![TSTypeAnnotation, Noop]))
        .field("abstract", boolean().optional())
        .field(
            "accessibility",
            one_of(&["public", "private", "protected"]).optional(),
        )
        .field("async", bool_default(false))
        .field("computed", bool_default(false))
        .field("generator", bool_default(false))
        .field(
            "kind",
            one_of(&["get", "set", "method", "constructor"]).default("method"),
        )
        .field("optional", boolean().optional())
        .field("static", bool_default(false))
        .register(r);

    define(TSQualifiedName)
        .visitor(["left", "right"])
        .aliases([TSEntityName])
        .field("left", ty(q![TSEntityName]))
        .field("right", ty(q![Identifier]))
        .register(r);

    define(TSCallSignatureDeclaration)
        .visitor(["typeParameters", "parameters", "typeAnnotation"])
        .aliases([TSTypeElement])
        .field("typeParameters", ty_opt(q![TSTypeParameterDeclaration]))
        .field("parameters", signature_parameters())
        .field("typeAnnotation", ty_opt(q![TSTypeAnnotation]))
        .register(r);

    define(TSConstructSignatureDeclaration)
        .inherits(TSCallSignatureDeclaration)
        .register(r);

    define(TSPropertySignature)
        .visitor(["key", "typeAnnotation"])
        .aliases([TSTypeElement])
        .field("key", ty(q![Expression]))
        .field("typeAnnotation", ty_opt(q![TSTypeAnnotation]))
        .field("computed", boolean().optional())
        .field("optional", boolean().optional())
        .field("readonly", boolean().optional())
        .register(r);

    define(TSMethodSignature)
        .visitor(["key", "typeParameters", "parameters", "typeAnnotation"])
        .aliases([TSTypeElement])
        .field("key", ty(q![Expression]))
        .field("typeParameters", ty_opt(q![TSTypeParameterDeclaration]))
        .field("parameters", signature_parameters())
        .field("typeAnnotation", ty_opt(q![TSTypeAnnotation]))
        .field("computed", boolean().optional())
        .field("optional", boolean().optional())
        .field(
            "kind",
            one_of(&["method", "get", "set"]).default("method"),
        )
        .register(r);

    define(TSIndexSignature)
        .visitor(["parameters", "typeAnnotation"])
        .aliases([TSTypeElement])
        .field("parameters", arr_ty(q![Identifier]))
        .field("typeAnnotation", ty_opt(q![TSTypeAnnotation]))
        .field("readonly", boolean().optional())
        .field("static", boolean().optional())
        .register(r);

    for keyword in [
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
    ] {
        define(keyword).aliases([TSType, TSBaseType]).register(r);
    }

    define(TSFunctionType)
        .visitor(["typeParameters", "parameters", "typeAnnotation"])
        .aliases([TSType])
        .field("typeParameters", ty_opt(q![TSTypeParameterDeclaration]))
        .field("parameters", signature_parameters())
        .field("typeAnnotation", ty_opt(q![TSTypeAnnotation]))
        .register(r);

    define(TSConstructorType)
        .inherits(TSFunctionType)
        .field("typeParameters", ty_opt(q![TSTypeParameterDeclaration]))
        .field("parameters", signature_parameters())
        .field("typeAnnotation", ty_opt(q![TSTypeAnnotation]))
        .field("abstract", boolean().optional())
        .register(r);

    define(TSTypeReference)
        .visitor(["typeName", "typeParameters"])
        .aliases([TSType])
        .field("typeName", ty(q![TSEntityName]))
        .field("typeParameters", ty_opt(q![TSTypeParameterInstantiation]))
        .register(r);

    define(TSTypePredicate)
        .builder(["parameterName", "typeAnnotation", "asserts"])
        .visitor(["parameterName", "typeAnnotation"])
        .aliases([TSType])
        .field("parameterName", ty(q![Identifier, TSThisType]))
        .field("typeAnnotation", ty_opt(q![TSTypeAnnotation]))
        .field("asserts", boolean().optional())
        .register(r);

    define(TSTypeQuery)
        .visitor(["exprName", "typeParameters"])
        .aliases([TSType])
        .field("exprName", ty(q![TSEntityName, TSImportType]))
        .field("typeParameters", ty_opt(q![TSTypeParameterInstantiation]))
        .register(r);

    define(TSTypeLiteral)
        .visitor(["members"])
        .aliases([TSType])
        .field("members", arr_ty(q![TSTypeElement]))
        .register(r);

    define(TSArrayType)
        .visitor(["elementType"])
        .aliases([TSType])
        .field("elementType", ty(q![TSType]))
        .register(r);

    define(TSTupleType)
        .visitor(["elementTypes"])
        .aliases([TSType])
        .field("elementTypes", arr_ty(q![TSType, TSNamedTupleMember]))
        .register(r);

    define(TSOptionalType)
        .visitor(["typeAnnotation"])
        .aliases([TSType])
        .field("typeAnnotation", ty(q![TSType]))
        .register(r);

    define(TSRestType)
        .visitor(["typeAnnotation"])
        .aliases([TSType])
        .field("typeAnnotation", ty(q![TSType]))
        .register(r);

    define(TSNamedTupleMember)
        .builder(["label", "elementType", "optional"])
        .visitor(["label", "elementType"])
        .field("label", ty(q![Identifier]))
        .field("elementType", ty(q![TSType]))
        .field("optional", bool_default(false))
        .register(r);

    define(TSUnionType)
        .visitor(["types"])
        .aliases([TSType])
        .field("types", arr_ty(q![TSType]))
        .register(r);

    define(TSIntersectionType)
        .visitor(["types"])
        .aliases([TSType])
        .field("types", arr_ty(q![TSType]))
        .register(r);

    define(TSConditionalType)
        .visitor(["checkType", "extendsType", "trueType", "falseType"])
        .aliases([TSType])
        .field("checkType", ty(q![TSType]))
        .field("extendsType", ty(q![TSType]))
        .field("trueType", ty(q![TSType]))
        .field("falseType", ty(q![TSType]))
        .register(r);

    define(TSInferType)
        .visitor(["typeParameter"])
        .aliases([TSType])
        .field("typeParameter", ty(q![TSTypeParameter]))
        .register(r);

    define(TSParenthesizedType)
        .visitor(["typeAnnotation"])
        .aliases([TSType])
        .field("typeAnnotation", ty(q![TSType]))
        .register(r);

    define(TSTypeOperator)
        .visitor(["typeAnnotation"])
        .aliases([TSType])
        .field("typeAnnotation", ty(q![TSType]))
        .field("operator", string())
        .register(r);

    define(TSIndexedAccessType)
        .visitor(["objectType", "indexType"])
        .aliases([TSType])
        .field("objectType", ty(q![TSType]))
        .field("indexType", ty(q![TSType]))
        .register(r);

    define(TSMappedType)
        .visitor(["typeParameter", "typeAnnotation", "nameType"])
        .aliases([TSType])
        .field("typeParameter", ty(q![TSTypeParameter]))
        .field("typeAnnotation", ty_opt(q![TSType]))
        .field("nameType", ty_opt(q![TSType]))
        .field(
            "optional",
            FieldDef::new(custom(validate_mapped_modifier)).optional(),
        )
        .field(
            "readonly",
            FieldDef::new(custom(validate_mapped_modifier)).optional(),
        )
        .register(r);

    define(TSLiteralType)
        .visitor(["literal"])
        .aliases([TSType, TSBaseType])
        .field(
            "literal",
            ty(q![
                NumericLiteral,
                StringLiteral,
                BooleanLiteral,
                BigIntLiteral,
                UnaryExpression,
                TemplateLiteral
            ]),
        )
        .register(r);

    define(TSExpressionWithTypeArguments)
        .visitor(["expression", "typeParameters"])
        .aliases([TSType])
        .field("expression", ty(q![TSEntityName]))
        .field("typeParameters", ty_opt(q![TSTypeParameterInstantiation]))
        .register(r);

    define(TSInterfaceDeclaration)
        .visitor(["id", "typeParameters", "extends", "body"])
        .aliases([Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("typeParameters", ty_opt(q![TSTypeParameterDeclaration]))
        .field("extends", arr_ty_opt(q![TSExpressionWithTypeArguments]))
        .field("body", ty(q![TSInterfaceBody]))
        .field("declare", boolean().optional())
        .register(r);

    define(TSInterfaceBody)
        .visitor(["body"])
        .field("body", arr_ty(q![TSTypeElement]))
        .register(r);

    define(TSTypeAliasDeclaration)
        .visitor(["id", "typeParameters", "typeAnnotation"])
        .aliases([Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("typeParameters", ty_opt(q![TSTypeParameterDeclaration]))
        .field("typeAnnotation", ty(q![TSType]))
        .field("declare", boolean().optional())
        .register(r);

    define(TSInstantiationExpression)
        .visitor(["expression", "typeParameters"])
        .aliases([Expression])
        .field("expression", ty(q![Expression]))
        .field("typeParameters", ty_opt(q![TSTypeParameterInstantiation]))
        .register(r);

    define(TSAsExpression)
        .visitor(["expression", "typeAnnotation"])
        .aliases([Expression])
        .field("expression", ty(q![Expression]))
        .field("typeAnnotation", ty(q![TSType]))
        .register(r);

    define(TSSatisfiesExpression)
        .inherits(TSAsExpression)
        .register(r);

    define(TSTypeAssertion)
        .visitor(["typeAnnotation", "expression"])
        .aliases([Expression])
        .field("typeAnnotation", ty(q![TSType]))
        .field("expression", ty(q![Expression]))
        .register(r);

    define(TSEnumDeclaration)
        .visitor(["id", "members"])
        .aliases([Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("members", arr_ty(q![TSEnumMember]))
        .field("const", boolean().optional())
        .field("declare", boolean().optional())
        .field("initializer", ty_opt(q![Expression]))
        .register(r);

    define(TSEnumMember)
        .visitor(["id", "initializer"])
        .field("id", ty(q![Identifier, StringLiteral]))
        .field("initializer", ty_opt(q![Expression]))
        .register(r);

    define(TSModuleDeclaration)
        .visitor(["id", "body"])
        .aliases([Statement, Declaration])
        .field("id", ty(q![Identifier, StringLiteral]))
        .field("body", ty(q![TSModuleBlock, TSModuleDeclaration]))
        .field("declare", boolean().optional())
        .field("global", boolean().optional())
        .register(r);

    define(TSModuleBlock)
        .visitor(["body"])
        .aliases([Scopable, Block, BlockParent, FunctionParent])
        .field("body", arr_ty(q![Statement]))
        .register(r);

    define(TSImportType)
        .visitor(["argument", "qualifier", "typeParameters"])
        .aliases([TSType])
        .field("argument", ty(q![StringLiteral]))
        .field("qualifier", ty_opt(q![TSEntityName]))
        .field("typeParameters", ty_opt(q![TSTypeParameterInstantiation]))
        .register(r);

    define(TSImportEqualsDeclaration)
        .visitor(["id", "moduleReference"])
        .aliases([Statement])
        .field("id", ty(q![Identifier]))
        .field(
            "moduleReference",
            ty(q![TSEntityName, TSExternalModuleReference]),
        )
        .field("isExport", bool_default(false))
        .bindings(["id"])
        .register(r);

    define(TSExternalModuleReference)
        .visitor(["expression"])
        .field("expression", ty(q![StringLiteral]))
        .register(r);

    define(TSNonNullExpression)
        .visitor(["expression"])
        .aliases([Expression])
        .field("expression", ty(q![Expression]))
        .register(r);

    define(TSExportAssignment)
        .visitor(["expression"])
        .aliases([Statement])
        .field("expression", ty(q![Expression]))
        .register(r);

    define(TSNamespaceExportDeclaration)
        .visitor(["id"])
        .aliases([Statement])
        .field("id", ty(q![Identifier]))
        .register(r);

    define(TSTypeAnnotation)
        .visitor(["typeAnnotation"])
        .field("typeAnnotation", ty(q![TSType]))
        .register(r);

    define(TSTypeParameterInstantiation)
        .visitor(["params"])
        .field("params", arr_ty(q![TSType]))
        .register(r);

    define(TSTypeParameterDeclaration)
        .visitor(["params"])
        .field("params", arr_ty(q![TSTypeParameter]))
        .register(r);

    define(TSTypeParameter)
        .builder(["constraint", "default", "name"])
        .visitor(["constraint", "default"])
        .field("name", string())
        .field("constraint", ty_opt(q![TSType]))
        .field("default", ty_opt(q![TSType]))
        .field("in", boolean().optional())
        .field("out", boolean().optional())
        .field("const", boolean().optional())
        .register(r);
}
