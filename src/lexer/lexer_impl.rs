//! Core tokenization implementation for the jcheck lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! The actual character recognition is handled entirely by logos. The
//! context-sensitive classification into the final token vocabulary is
//! applied by the transformation pass in the transformations module.

use crate::lexer::tokens::RawToken;
use logos::Logos;

/// Tokenize source text into raw tokens with location information.
///
/// Malformed input does not abort the run: the catch-all pattern turns
/// anything unrecognizable into [`RawToken::Stray`] one character at a
/// time, and any residual scan error is substituted the same way, so the
/// pass always consumes the whole input and always makes forward progress.
pub fn tokenize_with_locations(source: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(RawToken::Stray);
        tokens.push((token, lexer.span()));
    }

    tokens
}
