use crate::pos::{SourceLocation, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Line,
    Block,
}

impl CommentKind {
    /// The estree node name for this comment kind.
    pub fn as_str(self) -> &'static str {
        match self {
            CommentKind::Line => "CommentLine",
            CommentKind::Block => "CommentBlock",
        }
    }
}

/// A source comment. `value` is the comment text without delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment {
    pub kind: CommentKind,
    pub value: String,
    pub span: Span,
    pub loc: Option<SourceLocation>,
}

impl Comment {
    pub fn line(value: impl Into<String>) -> Self {
        Comment {
            kind: CommentKind::Line,
            value: value.into(),
            span: Span::default(),
            loc: None,
        }
    }

    pub fn block(value: impl Into<String>) -> Self {
        Comment {
            kind: CommentKind::Block,
            value: value.into(),
            span: Span::default(),
            loc: None,
        }
    }
}
