use super::placeholders::PLACEHOLDERS;
use super::*;
use crate::node::NodeType::*;
use crate::registry::{define, Registry};

pub(super) fn register(r: &mut Registry) {
    define(Noop).register(r);

    define(Placeholder)
        .builder(["expectedNode", "name"])
        .field("name", ty(q![Identifier]))
        .field("expectedNode", one_of(PLACEHOLDERS))
        .register(r);

    define(V8IntrinsicIdentifier)
        .builder(["name"])
        .field("name", string())
        .register(r);
}
