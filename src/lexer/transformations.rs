//! Role classification for raw token streams
//!
//! This module contains the transformation that maps raw scanner output into
//! the final token vocabulary. Two classifications are context-sensitive and
//! cannot be made by the scanner alone:
//!
//! - A quoted string is an object KEY when it follows a `,` or `{` AND the
//!   innermost open bracket is an object; in every other position it is a
//!   plain string value. The innermost bracket is tracked with a stack of
//!   bracket kinds, so the decision stays correct under nesting.
//! - A bare alphabetic word is a KEYWORD only if it is one of `true`,
//!   `false`, `null`; any other word is invalid.
//!
//! Unterminated strings and stray input also collapse to the invalid token
//! here.

use crate::lexer::tokens::RawToken;
use crate::token::{Bracket, Token};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The only acceptable bare-word literals
static KEYWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["true", "false", "null"].into_iter().collect());

/// Map raw tokens into the final vocabulary, preserving source spans.
///
/// The pass walks the stream once, holding the previously emitted token and
/// a stack of open bracket kinds. Popping is lenient: a close token that
/// does not match the innermost open bracket leaves the stack untouched,
/// since balance errors are the validator's concern, not the lexer's.
///
/// # Example
///
/// Input `{"a":"b"}` scans to
/// `[OpenObject, QuotedString, Colon, QuotedString, CloseObject]` and
/// classifies to `[OpenObject, Key, Colon, StringLit, CloseObject]`: the
/// first string follows `{` inside an object, the second follows `:`.
pub fn classify_roles(raw: Vec<(RawToken, logos::Span)>) -> Vec<(Token, logos::Span)> {
    let mut tokens: Vec<(Token, logos::Span)> = Vec::with_capacity(raw.len());
    let mut stack: Vec<Bracket> = Vec::new();

    for (raw_token, span) in raw {
        let previous = tokens.last().map(|(token, _)| *token);
        let token = match raw_token {
            RawToken::OpenObject => Token::OpenObject,
            RawToken::CloseObject => Token::CloseObject,
            RawToken::OpenArray => Token::OpenArray,
            RawToken::CloseArray => Token::CloseArray,
            RawToken::Colon => Token::Colon,
            RawToken::Comma => Token::Comma,
            RawToken::QuotedString => classify_string(previous, stack.last().copied()),
            RawToken::UnterminatedString => Token::Invalid,
            RawToken::Number => Token::NumberLit,
            RawToken::Word(word) => {
                if KEYWORDS.contains(word.as_str()) {
                    Token::Keyword
                } else {
                    Token::Invalid
                }
            }
            RawToken::Stray => Token::Invalid,
        };

        match token {
            Token::OpenObject => stack.push(Bracket::Object),
            Token::OpenArray => stack.push(Bracket::Array),
            Token::CloseObject if stack.last() == Some(&Bracket::Object) => {
                stack.pop();
            }
            Token::CloseArray if stack.last() == Some(&Bracket::Array) => {
                stack.pop();
            }
            _ => {}
        }

        tokens.push((token, span));
    }

    tokens
}

/// Decide the role of a quoted string from its left context.
///
/// `previous` is the token emitted just before the string (None at the very
/// start of the input); `innermost` is the kind of the nearest unclosed
/// bracket (None at top level).
fn classify_string(previous: Option<Token>, innermost: Option<Bracket>) -> Token {
    let at_member_boundary = matches!(previous, Some(Token::Comma) | Some(Token::OpenObject));
    if at_member_boundary && innermost == Some(Bracket::Object) {
        Token::Key
    } else {
        Token::StringLit
    }
}
