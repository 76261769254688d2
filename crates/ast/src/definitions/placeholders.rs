/// The names a `Placeholder.expectedNode` may carry. Concrete types here
/// additionally expand to their registered aliases when a placeholder is
/// queried; `Declaration` and `Pattern` carry hand-listed expansions (see
/// `Registry::finish`).
pub(crate) const PLACEHOLDERS: &[&str] = &[
    "Identifier",
    "StringLiteral",
    "Expression",
    "Statement",
    "Declaration",
    "BlockStatement",
    "ClassBody",
    "Pattern",
];
