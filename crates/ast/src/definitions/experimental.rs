use super::*;
use crate::node::Alias::*;
use crate::node::NodeType::*;
use crate::registry::{define, Registry};

pub(super) fn register(r: &mut Registry) {
    define(ArgumentPlaceholder).register(r);

    define(BindExpression)
        .visitor(["object", "callee"])
        .aliases([Expression])
        .field("object", ty(q![Expression]))
        .field("callee", ty(q![Expression]))
        .register(r);

    define(ImportAttribute)
        .visitor(["key", "value"])
        .field("key", ty(q![Identifier, StringLiteral]))
        .field("value", ty(q![StringLiteral]))
        .register(r);

    define(Decorator)
        .visitor(["expression"])
        .field("expression", ty(q![Expression]))
        .register(r);

    define(DoExpression)
        .visitor(["body"])
        .aliases([Expression])
        .field("body", ty(q![BlockStatement]))
        .field("async", bool_default(false))
        .register(r);

    define(ExportDefaultSpecifier)
        .visitor(["exported"])
        .aliases([ModuleSpecifier])
        .field("exported", ty(q![Identifier]))
        .bindings(["exported"])
        .register(r);

    define(RecordExpression)
        .visitor(["properties"])
        .aliases([Expression])
        .field("properties", arr_ty(q![ObjectProperty, SpreadElement]))
        .register(r);

    define(TupleExpression)
        .visitor(["elements"])
        .aliases([Expression])
        .field(
            "elements",
            arr_ty(q![Expression, SpreadElement]).default(crate::node::Value::List(Vec::new())),
        )
        .register(r);

    define(DecimalLiteral)
        .builder(["value"])
        .aliases([Expression, Pureish, Literal, Immutable])
        .field("value", string())
        .register(r);

    define(ModuleExpression)
        .visitor(["body"])
        .aliases([Expression])
        .field("body", ty(q![Program]))
        .register(r);

    define(TopicReference).aliases([Expression]).register(r);

    define(PipelineTopicExpression)
        .visitor(["expression"])
        .aliases([Expression])
        .field("expression", ty(q![Expression]))
        .register(r);

    define(PipelineBareFunction)
        .visitor(["callee"])
        .aliases([Expression])
        .field("callee", ty(q![Expression]))
        .register(r);

    define(PipelinePrimaryTopicReference)
        .aliases([Expression])
        .register(r);
}
