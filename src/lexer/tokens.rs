//! Raw token types produced by the logos scanning pass
//!
//! Raw tokens classify character shapes only. Everything context-sensitive
//! (key vs. string value, keyword membership) is decided later by the role
//! classification pass, which maps raw tokens into the final
//! [`Token`](crate::token::Token) vocabulary.

use logos::Logos;

/// A raw lexical unit as recognized by the logos scanner.
///
/// Spaces and newlines separate tokens and are skipped; no other whitespace
/// is. A string literal may not contain a newline, so a quote left open at
/// the end of its line scans as `UnterminatedString` rather than swallowing
/// the rest of the input.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \n]+")]
pub enum RawToken {
    #[token("{")]
    OpenObject,

    #[token("}")]
    CloseObject,

    #[token("[")]
    OpenArray,

    #[token("]")]
    CloseArray,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    /// A quoted string, closing quote included. No escape handling: the
    /// literal ends at the first `"` after the opening one.
    #[regex(r#""[^"\n]*""#, priority = 3)]
    QuotedString,

    /// A quote that never closes before the end of its line
    #[regex(r#""[^"\n]*"#, priority = 1)]
    UnterminatedString,

    /// An unsigned digit run. Signs, decimal points and exponents are not
    /// part of the grammar and scan as separate (stray) input.
    #[regex(r"[0-9]+")]
    Number,

    /// A maximal alphabetic run, checked against the keyword set by the
    /// classification pass
    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_string())]
    Word(String),

    /// Catch-all for input no other pattern recognizes: stray symbols,
    /// tabs, carriage returns. One character at a time, so scanning always
    /// advances.
    #[regex(r".", priority = 0)]
    Stray,
}
