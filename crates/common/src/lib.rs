#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unreachable_pub)]

pub use self::{
    comments::{Comment, CommentKind},
    ident::{
        is_ident_part, is_ident_start, is_identifier_name, is_keyword, is_reserved_word,
        is_strict_bind_only_reserved_word, is_strict_reserved_word,
    },
    pos::{BytePos, Position, SourceLocation, Span, DUMMY_SP},
};

mod comments;
mod ident;
mod pos;

/// An interned string.
///
/// Identifier names, operator text and string-literal values repeat heavily
/// across a syntax tree, so they are stored as atoms rather than `String`s.
pub type JsWord = string_cache::DefaultAtom;
