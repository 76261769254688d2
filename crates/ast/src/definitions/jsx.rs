use super::*;
use crate::node::Alias::*;
use crate::node::NodeType::*;
use crate::registry::{define, Registry};

pub(super) fn register(r: &mut Registry) {
    define(JSXAttribute)
        .visitor(["name", "value"])
        .aliases([JSX, Immutable])
        .field("name", ty(q![JSXIdentifier, JSXNamespacedName]))
        .field(
            "value",
            ty_opt(q![JSXElement, JSXFragment, StringLiteral, JSXExpressionContainer]),
        )
        .register(r);

    define(JSXClosingElement)
        .visitor(["name"])
        .aliases([JSX, Immutable])
        .field(
            "name",
            ty(q![JSXIdentifier, JSXMemberExpression, JSXNamespacedName]),
        )
        .register(r);

    define(JSXElement)
        .builder(["openingElement", "closingElement", "children", "selfClosing"])
        .visitor(["openingElement", "children", "closingElement"])
        .aliases([JSX, Immutable, Expression])
        .field("openingElement", ty(q![JSXOpeningElement]))
        .field("closingElement", ty_opt(q![JSXClosingElement]))
        .field(
            "children",
            arr_ty(q![JSXText, JSXExpressionContainer, JSXSpreadChild, JSXElement, JSXFragment]),
        )
        .field("selfClosing", boolean().optional())
        .register(r);

    define(JSXEmptyExpression).aliases([JSX]).register(r);

    define(JSXExpressionContainer)
        .visitor(["expression"])
        .aliases([JSX, Immutable])
        .field("expression", ty(q![Expression, JSXEmptyExpression]))
        .register(r);

    define(JSXSpreadChild)
        .visitor(["expression"])
        .aliases([JSX, Immutable])
        .field("expression", ty(q![Expression]))
        .register(r);

    define(JSXIdentifier)
        .builder(["name"])
        .aliases([JSX])
        .field("name", string())
        .register(r);

    define(JSXMemberExpression)
        .visitor(["object", "property"])
        .aliases([JSX])
        .field("object", ty(q![JSXMemberExpression, JSXIdentifier]))
        .field("property", ty(q![JSXIdentifier]))
        .register(r);

    define(JSXNamespacedName)
        .visitor(["namespace", "name"])
        .aliases([JSX])
        .field("namespace", ty(q![JSXIdentifier]))
        .field("name", ty(q![JSXIdentifier]))
        .register(r);

    define(JSXOpeningElement)
        .builder(["name", "attributes", "selfClosing"])
        .visitor(["name", "attributes"])
        .aliases([JSX, Immutable])
        .field(
            "name",
            ty(q![JSXIdentifier, JSXMemberExpression, JSXNamespacedName]),
        )
        .field("attributes", arr_ty(q![JSXAttribute, JSXSpreadAttribute]))
        .field("selfClosing", bool_default(false))
        .field(
            "typeParameters",
            ty_opt(q![TypeParameterInstantiation, TSTypeParameterInstantiation]),
        )
        .register(r);

    define(JSXSpreadAttribute)
        .visitor(["argument"])
        .aliases([JSX])
        .field("argument", ty(q![Expression]))
        .register(r);

    define(JSXText)
        .builder(["value"])
        .aliases([JSX, Immutable])
        .field("value", string())
        .register(r);

    define(JSXFragment)
        .visitor(["openingFragment", "children", "closingFragment"])
        .aliases([JSX, Immutable, Expression])
        .field("openingFragment", ty(q![JSXOpeningFragment]))
        .field("closingFragment", ty(q![JSXClosingFragment]))
        .field(
            "children",
            arr_ty(q![JSXText, JSXExpressionContainer, JSXSpreadChild, JSXElement, JSXFragment]),
        )
        .register(r);

    define(JSXOpeningFragment)
        .aliases([JSX, Immutable])
        .register(r);

    define(JSXClosingFragment)
        .aliases([JSX, Immutable])
        .register(r);
}
