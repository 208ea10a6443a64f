//! Lexer module for JSON documents
//!
//! This module orchestrates the complete tokenization pipeline:
//! 1. Raw tokenization using the logos lexer
//! 2. Role classification (key vs. string value, keyword membership,
//!    collapsing unrecognizable input into the invalid token)
//! 3. Appending the End sentinel once all input is consumed
//!
//! The whole input is buffered and scanned in one pass. String literals may
//! not contain a newline, so a quote left open still fails at the end of
//! its line; between tokens, newlines separate tokens exactly as reading
//! line by line would.
//!
//! The lexer never fails on malformed input: every lexical problem surfaces
//! as an `Invalid` token in the output sequence, and the validator turns it
//! into a rejection.

pub mod lexer_impl;
pub mod tokens;
pub mod transformations;

pub use lexer_impl::tokenize_with_locations;
pub use transformations::classify_roles;

use crate::token::Token;

/// Tokenize source text into the final vocabulary, with source locations.
///
/// The returned sequence always ends with [`Token::End`], whose span is the
/// empty range at the end of the input.
pub fn lex(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    let raw = tokenize_with_locations(source);
    let mut tokens = classify_roles(raw);

    let end = source.len();
    tokens.push((Token::End, end..end));

    tokens
}

/// Tokenize source text into an ordered token sequence.
///
/// This is the plain-token form of [`lex`] for callers that do not need
/// locations. It never fails: malformed input yields `Invalid` tokens, not
/// errors.
pub fn tokenize(source: &str) -> Vec<Token> {
    lex(source).into_iter().map(|(token, _)| token).collect()
}
