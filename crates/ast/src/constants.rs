//! Canonical operator and keyword sets referenced by field validators.

pub const COMPARISON_BINARY_OPERATORS: &[&str] =
    &["==", "===", "!=", "!==", "in", "instanceof", ">", "<", ">=", "<="];

pub const BOOLEAN_BINARY_OPERATORS: &[&str] =
    &["==", "===", "!=", "!==", "in", "instanceof", ">", "<", ">=", "<="];

pub const NUMBER_BINARY_OPERATORS: &[&str] = &[
    "-", "/", "%", "*", "**", "&", "|", ">>", ">>>", "<<", "^",
];

pub const BINARY_OPERATORS: &[&str] = &[
    "+", "==", "===", "!=", "!==", "in", "instanceof", ">", "<", ">=", "<=", "-", "/", "%", "*",
    "**", "&", "|", ">>", ">>>", "<<", "^", "|>",
];

pub const LOGICAL_OPERATORS: &[&str] = &["||", "&&", "??"];

pub const ASSIGNMENT_OPERATORS: &[&str] = &[
    "=", "+=", "-=", "/=", "%=", "*=", "**=", "&=", "|=", ">>=", ">>>=", "<<=", "^=", "||=", "&&=",
    "??=",
];

pub const BOOLEAN_UNARY_OPERATORS: &[&str] = &["delete", "!"];

pub const NUMBER_UNARY_OPERATORS: &[&str] = &["+", "-", "~"];

pub const STRING_UNARY_OPERATORS: &[&str] = &["typeof"];

pub const UNARY_OPERATORS: &[&str] = &["void", "throw", "delete", "!", "+", "-", "~", "typeof"];

pub const UPDATE_OPERATORS: &[&str] = &["++", "--"];
