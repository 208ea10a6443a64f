//! The transition relation of the JSON grammar
//!
//! The grammar is encoded as an adjacency relation over the token
//! vocabulary: each row maps a previous token to the set of tokens that may
//! legally follow it. A token with no row, or a successor outside the row's
//! set, is a grammar violation.
//!
//! The relation is deliberately small and closed; it admits exactly the
//! documents the checker accepts. Documents start with `{`, object members
//! are `KEY : value` pairs, arrays hold comma-separated scalars.

use crate::token::Token;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Transition rules as (previous, allowed successors) pairs.
/// Order is irrelevant; the rows are compiled into a map below.
const TRANSITION_RULES: &[(Token, &[Token])] = &[
    (Token::Start, &[Token::OpenObject]),
    (Token::OpenObject, &[Token::Key, Token::CloseObject]),
    (Token::Key, &[Token::Colon]),
    (
        Token::Colon,
        &[
            Token::StringLit,
            Token::OpenArray,
            Token::OpenObject,
            Token::Keyword,
            Token::NumberLit,
        ],
    ),
    (
        Token::StringLit,
        &[Token::CloseArray, Token::CloseObject, Token::Comma],
    ),
    (
        Token::OpenArray,
        &[
            Token::CloseArray,
            Token::Keyword,
            Token::NumberLit,
            Token::StringLit,
        ],
    ),
    (
        Token::Keyword,
        &[Token::CloseArray, Token::CloseObject, Token::Comma],
    ),
    (
        Token::NumberLit,
        &[Token::CloseArray, Token::CloseObject, Token::Comma],
    ),
    (
        Token::Comma,
        &[
            Token::Key,
            Token::StringLit,
            Token::NumberLit,
            Token::Keyword,
        ],
    ),
    (
        Token::CloseObject,
        &[Token::End, Token::Comma, Token::CloseObject],
    ),
    (Token::CloseArray, &[Token::Comma, Token::CloseObject]),
];

/// The compiled transition table, built once on first use
static TRANSITIONS: Lazy<HashMap<Token, HashSet<Token>>> = Lazy::new(|| {
    TRANSITION_RULES
        .iter()
        .map(|(previous, successors)| (*previous, successors.iter().copied().collect()))
        .collect()
});

/// Look up the successor set for a token.
///
/// Returns None for tokens that have no outgoing transitions (`End`,
/// `Invalid`, and any state the walk should never reach).
pub fn allowed_after(previous: Token) -> Option<&'static HashSet<Token>> {
    TRANSITIONS.get(&previous)
}
