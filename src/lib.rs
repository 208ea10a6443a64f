//! # jcheck
//!
//! A syntax checker for JSON documents.
//!
//! jcheck decides whether a piece of text is a syntactically valid JSON
//! document and answers with a single boolean. It builds no value tree:
//! the pipeline is a lexer that classifies the input into tokens (including
//! the context-sensitive split between object keys and plain strings) and a
//! validator that walks the token sequence against a static transition
//! table while tracking bracket nesting.
//!
//! ```
//! use jcheck::is_valid;
//!
//! assert!(is_valid(r#"{"a":[1,2,3]}"#));
//! assert!(!is_valid(r#"{"a":}"#));
//! ```
//!
//! For diagnostics, [`check`] reports the first rule violation instead of a
//! bare `false`, and [`lex`] pairs every token with its source span.

pub mod error;
pub mod lexer;
pub mod token;
pub mod validator;

pub use error::Rejection;
pub use lexer::{lex, tokenize};
pub use token::Token;
pub use validator::{check, validate};

/// Tokenize and validate source text in one step.
pub fn is_valid(source: &str) -> bool {
    validate(&tokenize(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_composes_the_pipeline() {
        assert!(is_valid(r#"{"a":1}"#));
        assert!(!is_valid(""));
        assert!(!is_valid("{"));
    }
}
