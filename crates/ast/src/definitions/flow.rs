use super::*;
use crate::node::Alias::*;
use crate::node::NodeType::*;
use crate::registry::{define, Registry};

pub(super) fn register(r: &mut Registry) {
    define(AnyTypeAnnotation)
        .aliases([Flow, FlowType, FlowBaseAnnotation])
        .register(r);

    define(ArrayTypeAnnotation)
        .visitor(["elementType"])
        .aliases([Flow, FlowType])
        .field("elementType", ty(q![FlowType]))
        .register(r);

    define(BooleanTypeAnnotation)
        .aliases([Flow, FlowType, FlowBaseAnnotation])
        .register(r);

    define(BooleanLiteralTypeAnnotation)
        .builder(["value"])
        .aliases([Flow, FlowType])
        .field("value", boolean())
        .register(r);

    define(NullLiteralTypeAnnotation)
        .aliases([Flow, FlowType, FlowBaseAnnotation])
        .register(r);

    define(ClassImplements)
        .visitor(["id", "typeParameters"])
        .aliases([Flow])
        .field("id", ty(q![Identifier]))
        .field("typeParameters", ty_opt(q![TypeParameterInstantiation]))
        .register(r);

    define(DeclareClass)
        .visitor(["id", "typeParameters", "extends", "body"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("typeParameters", ty_opt(q![TypeParameterDeclaration]))
        .field("extends", arr_ty_opt(q![InterfaceExtends]))
        .field("implements", arr_ty_opt(q![ClassImplements]))
        .field("mixins", arr_ty_opt(q![InterfaceExtends]))
        .field("body", ty(q![ObjectTypeAnnotation]))
        .bindings(["id"])
        .register(r);

    define(DeclareFunction)
        .visitor(["id"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("predicate", ty_opt(q![DeclaredPredicate]))
        .bindings(["id"])
        .register(r);

    define(DeclareInterface)
        .visitor(["id", "typeParameters", "extends", "body"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("typeParameters", ty_opt(q![TypeParameterDeclaration]))
        .field("extends", arr_ty_opt(q![InterfaceExtends]))
        .field("body", ty(q![ObjectTypeAnnotation]))
        .bindings(["id"])
        .register(r);

    define(DeclareModule)
        .builder(["id", "body", "kind"])
        .visitor(["id", "body"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("id", ty(q![Identifier, StringLiteral]))
        .field("body", ty(q![BlockStatement]))
        .field("kind", one_of(&["CommonJS", "ES"]).optional())
        .bindings(["id"])
        .register(r);

    define(DeclareModuleExports)
        .visitor(["typeAnnotation"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("typeAnnotation", ty(q![TypeAnnotation]))
        .register(r);

    define(DeclareTypeAlias)
        .visitor(["id", "typeParameters", "right"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("typeParameters", ty_opt(q![TypeParameterDeclaration]))
        .field("right", ty(q![FlowType]))
        .bindings(["id"])
        .register(r);

    define(DeclareOpaqueType)
        .visitor(["id", "typeParameters", "supertype"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("typeParameters", ty_opt(q![TypeParameterDeclaration]))
        .field("supertype", ty_opt(q![FlowType]))
        .bindings(["id"])
        .register(r);

    define(DeclareVariable)
        .visitor(["id"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .bindings(["id"])
        .register(r);

    define(DeclareExportDeclaration)
        .visitor(["declaration", "specifiers", "source"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("declaration", ty_opt(q![Flow]))
        .field(
            "specifiers",
            arr_ty_opt(q![ExportSpecifier, ExportNamespaceSpecifier]),
        )
        .field("source", ty_opt(q![StringLiteral]))
        .field("default", boolean().optional())
        .register(r);

    define(DeclareExportAllDeclaration)
        .visitor(["source"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("source", ty(q![StringLiteral]))
        .field("exportKind", one_of(&["type", "value"]).optional())
        .register(r);

    define(DeclaredPredicate)
        .visitor(["value"])
        .aliases([Flow, FlowPredicate])
        .field("value", ty(q![Flow]))
        .register(r);

    define(ExistsTypeAnnotation)
        .aliases([Flow, FlowType])
        .register(r);

    define(FunctionTypeAnnotation)
        .visitor(["typeParameters", "params", "rest", "returnType"])
        .aliases([Flow, FlowType])
        .field("typeParameters", ty_opt(q![TypeParameterDeclaration]))
        .field("params", arr_ty(q![FunctionTypeParam]))
        .field("rest", ty_opt(q![FunctionTypeParam]))
        .field("this", ty_opt(q![FunctionTypeParam]))
        .field("returnType", ty(q![FlowType]))
        .register(r);

    define(FunctionTypeParam)
        .visitor(["name", "typeAnnotation"])
        .aliases([Flow])
        .field("name", ty_opt(q![Identifier]))
        .field("typeAnnotation", ty(q![FlowType]))
        .field("optional", boolean().optional())
        .register(r);

    define(GenericTypeAnnotation)
        .visitor(["id", "typeParameters"])
        .aliases([Flow, FlowType])
        .field("id", ty(q![Identifier, QualifiedTypeIdentifier]))
        .field("typeParameters", ty_opt(q![TypeParameterInstantiation]))
        .register(r);

    define(InferredPredicate)
        .aliases([Flow, FlowPredicate])
        .register(r);

    define(InterfaceExtends)
        .visitor(["id", "typeParameters"])
        .aliases([Flow])
        .field("id", ty(q![Identifier, QualifiedTypeIdentifier]))
        .field("typeParameters", ty_opt(q![TypeParameterInstantiation]))
        .register(r);

    define(InterfaceDeclaration)
        .visitor(["id", "typeParameters", "extends", "body"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("typeParameters", ty_opt(q![TypeParameterDeclaration]))
        .field("extends", arr_ty_opt(q![InterfaceExtends]))
        .field("body", ty(q![ObjectTypeAnnotation]))
        .bindings(["id"])
        .register(r);

    define(InterfaceTypeAnnotation)
        .visitor(["extends", "body"])
        .aliases([Flow, FlowType])
        .field("extends", arr_ty_opt(q![InterfaceExtends]))
        .field("body", ty(q![ObjectTypeAnnotation]))
        .register(r);

    define(IntersectionTypeAnnotation)
        .visitor(["types"])
        .aliases([Flow, FlowType])
        .field("types", arr_ty(q![FlowType]))
        .register(r);

    define(MixedTypeAnnotation)
        .aliases([Flow, FlowType, FlowBaseAnnotation])
        .register(r);

    define(EmptyTypeAnnotation)
        .aliases([Flow, FlowType, FlowBaseAnnotation])
        .register(r);

    define(NullableTypeAnnotation)
        .visitor(["typeAnnotation"])
        .aliases([Flow, FlowType])
        .field("typeAnnotation", ty(q![FlowType]))
        .register(r);

    define(NumberLiteralTypeAnnotation)
        .builder(["value"])
        .aliases([Flow, FlowType])
        .field("value", number())
        .register(r);

    define(NumberTypeAnnotation)
        .aliases([Flow, FlowType, FlowBaseAnnotation])
        .register(r);

    define(ObjectTypeAnnotation)
        .builder(["properties", "indexers", "callProperties", "internalSlots", "exact"])
        .visitor(["properties", "indexers", "callProperties", "internalSlots"])
        .aliases([Flow, FlowType])
        .field(
            "properties",
            arr_ty(q![ObjectTypeProperty, ObjectTypeSpreadProperty]),
        )
        .field("indexers", arr_ty_default(q![ObjectTypeIndexer]))
        .field("callProperties", arr_ty_default(q![ObjectTypeCallProperty]))
        .field("internalSlots", arr_ty_default(q![ObjectTypeInternalSlot]))
        .field("exact", bool_default(false))
        .field("inexact", boolean().optional())
        .register(r);

    define(ObjectTypeInternalSlot)
        .builder(["id", "value", "optional", "static", "method"])
        .visitor(["id", "value"])
        .aliases([Flow, UserWhitespacable])
        .field("id", ty(q![Identifier]))
        .field("value", ty(q![FlowType]))
        .field("optional", boolean())
        .field("static", boolean())
        .field("method", boolean())
        .register(r);

    define(ObjectTypeCallProperty)
        .visitor(["value"])
        .aliases([Flow, UserWhitespacable])
        .field("value", ty(q![FlowType]))
        .field("static", bool_default(false))
        .register(r);

    define(ObjectTypeIndexer)
        .visitor(["id", "key", "value", "variance"])
        .aliases([Flow, UserWhitespacable])
        .field("id", ty_opt(q![Identifier]))
        .field("key", ty(q![FlowType]))
        .field("value", ty(q![FlowType]))
        .field("variance", ty_opt(q![Variance]))
        .field("static", bool_default(false))
        .register(r);

    define(ObjectTypeProperty)
        .visitor(["key", "value", "variance"])
        .aliases([Flow, UserWhitespacable])
        .field("key", ty(q![Identifier, StringLiteral]))
        .field("value", ty(q![FlowType]))
        .field("kind", one_of(&["init", "get", "set"]).default("init"))
        .field("static", bool_default(false))
        .field("proto", bool_default(false))
        .field("optional", bool_default(false))
        .field("method", bool_default(false))
        .field("variance", ty_opt(q![Variance]))
        .register(r);

    define(ObjectTypeSpreadProperty)
        .visitor(["argument"])
        .aliases([Flow, UserWhitespacable])
        .field("argument", ty(q![FlowType]))
        .register(r);

    define(OpaqueType)
        .visitor(["id", "typeParameters", "supertype", "impltype"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("typeParameters", ty_opt(q![TypeParameterDeclaration]))
        .field("supertype", ty_opt(q![FlowType]))
        .field("impltype", ty(q![FlowType]))
        .bindings(["id"])
        .register(r);

    define(QualifiedTypeIdentifier)
        .visitor(["id", "qualification"])
        .aliases([Flow])
        .field("id", ty(q![Identifier]))
        .field("qualification", ty(q![Identifier, QualifiedTypeIdentifier]))
        .register(r);

    define(StringLiteralTypeAnnotation)
        .builder(["value"])
        .aliases([Flow, FlowType])
        .field("value", string())
        .register(r);

    define(StringTypeAnnotation)
        .aliases([Flow, FlowType, FlowBaseAnnotation])
        .register(r);

    define(SymbolTypeAnnotation)
        .aliases([Flow, FlowType, FlowBaseAnnotation])
        .register(r);

    define(ThisTypeAnnotation)
        .aliases([Flow, FlowType, FlowBaseAnnotation])
        .register(r);

    define(TupleTypeAnnotation)
        .visitor(["types"])
        .aliases([Flow, FlowType])
        .field("types", arr_ty(q![FlowType]))
        .register(r);

    define(TypeofTypeAnnotation)
        .visitor(["argument"])
        .aliases([Flow, FlowType])
        .field("argument", ty(q![FlowType]))
        .register(r);

    define(TypeAlias)
        .visitor(["id", "typeParameters", "right"])
        .aliases([Flow, FlowDeclaration, Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field("typeParameters", ty_opt(q![TypeParameterDeclaration]))
        .field("right", ty(q![FlowType]))
        .bindings(["id"])
        .register(r);

    define(TypeAnnotation)
        .visitor(["typeAnnotation"])
        .aliases([Flow])
        .field("typeAnnotation", ty(q![FlowType]))
        .register(r);

    define(TypeCastExpression)
        .visitor(["expression", "typeAnnotation"])
        .aliases([Flow, ExpressionWrapper, Expression])
        .field("expression", ty(q![Expression]))
        .field("typeAnnotation", ty(q![TypeAnnotation]))
        .register(r);

    define(TypeParameter)
        .visitor(["bound", "default", "variance"])
        .aliases([Flow])
        .field("bound", ty_opt(q![TypeAnnotation]))
        .field("default", ty_opt(q![FlowType]))
        .field("name", string())
        .field("variance", ty_opt(q![Variance]))
        .register(r);

    define(TypeParameterDeclaration)
        .visitor(["params"])
        .aliases([Flow])
        .field("params", arr_ty(q![TypeParameter]))
        .register(r);

    define(TypeParameterInstantiation)
        .visitor(["params"])
        .aliases([Flow])
        .field("params", arr_ty(q![FlowType]))
        .register(r);

    define(UnionTypeAnnotation)
        .visitor(["types"])
        .aliases([Flow, FlowType])
        .field("types", arr_ty(q![FlowType]))
        .register(r);

    define(Variance)
        .builder(["kind"])
        .aliases([Flow])
        .field("kind", one_of(&["minus", "plus"]))
        .register(r);

    define(VoidTypeAnnotation)
        .aliases([Flow, FlowType, FlowBaseAnnotation])
        .register(r);

    define(EnumDeclaration)
        .visitor(["id", "body"])
        .aliases([Statement, Declaration])
        .field("id", ty(q![Identifier]))
        .field(
            "body",
            ty(q![EnumBooleanBody, EnumNumberBody, EnumStringBody, EnumSymbolBody]),
        )
        .bindings(["id"])
        .register(r);

    define(EnumBooleanBody)
        .builder(["members"])
        .visitor(["members"])
        .aliases([EnumBody])
        .field("members", arr_ty(q![EnumBooleanMember]))
        .field("explicitType", boolean())
        .field("hasUnknownMembers", boolean())
        .register(r);

    define(EnumNumberBody)
        .builder(["members"])
        .visitor(["members"])
        .aliases([EnumBody])
        .field("members", arr_ty(q![EnumNumberMember]))
        .field("explicitType", boolean())
        .field("hasUnknownMembers", boolean())
        .register(r);

    define(EnumStringBody)
        .builder(["members"])
        .visitor(["members"])
        .aliases([EnumBody])
        .field("members", arr_ty(q![EnumStringMember, EnumDefaultedMember]))
        .field("explicitType", boolean())
        .field("hasUnknownMembers", boolean())
        .register(r);

    define(EnumSymbolBody)
        .builder(["members"])
        .visitor(["members"])
        .aliases([EnumBody])
        .field("members", arr_ty(q![EnumDefaultedMember]))
        .field("hasUnknownMembers", boolean())
        .register(r);

    define(EnumBooleanMember)
        .visitor(["id"])
        .aliases([EnumMember])
        .field("id", ty(q![Identifier]))
        .field("init", ty(q![BooleanLiteral]))
        .register(r);

    define(EnumNumberMember)
        .visitor(["id", "init"])
        .aliases([EnumMember])
        .field("id", ty(q![Identifier]))
        .field("init", ty(q![NumericLiteral]))
        .register(r);

    define(EnumStringMember)
        .visitor(["id", "init"])
        .aliases([EnumMember])
        .field("id", ty(q![Identifier]))
        .field("init", ty(q![StringLiteral]))
        .register(r);

    define(EnumDefaultedMember)
        .visitor(["id"])
        .aliases([EnumMember])
        .field("id", ty(q![Identifier]))
        .register(r);

    define(IndexedAccessType)
        .visitor(["objectType", "indexType"])
        .aliases([Flow, FlowType])
        .field("objectType", ty(q![FlowType]))
        .field("indexType", ty(q![FlowType]))
        .register(r);

    define(OptionalIndexedAccessType)
        .visitor(["objectType", "indexType"])
        .aliases([Flow, FlowType])
        .field("objectType", ty(q![FlowType]))
        .field("indexType", ty(q![FlowType]))
        .field("optional", boolean())
        .register(r);
}
