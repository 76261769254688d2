/// Declares the closed set of concrete node types. Emits the enum itself
/// plus `ALL`, `as_str` (the estree name, which is exactly the variant
/// name) and `from_name`.
macro_rules! node_types {
    ($($name:ident,)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeType {
            $($name,)*
        }

        impl NodeType {
            /// Every registered node type, in registration order.
            pub const ALL: &'static [NodeType] = &[$(NodeType::$name,)*];

            /// The estree name of this type, e.g. `"BinaryExpression"`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(NodeType::$name => stringify!($name),)*
                }
            }

            /// Looks up a type by its exact estree name. Deprecated names
            /// are resolved by [`crate::registry::resolve_type_name`], not
            /// here.
            pub fn from_name(name: &str) -> Option<NodeType> {
                match name {
                    $(stringify!($name) => Some(NodeType::$name),)*
                    _ => None,
                }
            }
        }
    };
}

/// A list of type queries; accepts concrete types and aliases mixed.
macro_rules! q {
    [$($t:expr),* $(,)?] => {
        vec![$($crate::node::TypeQuery::from($t)),*]
    };
}

/// Declares the closed set of alias (supertype) names.
macro_rules! aliases {
    ($($name:ident,)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Alias {
            $($name,)*
        }

        impl Alias {
            pub const ALL: &'static [Alias] = &[$(Alias::$name,)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Alias::$name => stringify!($name),)*
                }
            }

            pub fn from_name(name: &str) -> Option<Alias> {
                match name {
                    $(stringify!($name) => Some(Alias::$name),)*
                    _ => None,
                }
            }
        }
    };
}
