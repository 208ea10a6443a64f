//! Token vocabulary shared by the lexer and the grammar validator
//!
//! This module contains the classified token types that cross the
//! lexer/validator boundary:
//! - Token: the closed set of lexical classifications, including the
//!   Start/End sentinels that frame a token sequence
//! - Bracket: the kind of an open bracketed scope, tracked as a stack to
//!   disambiguate string roles and to check nesting balance

use std::fmt;

/// A classified lexical unit of a JSON document.
///
/// Tokens are produced by the lexer pipeline (raw scan + role
/// classification) and consumed by the grammar validator. Two variants are
/// sentinels that never result from scanning raw characters: `Start` seeds
/// the validator's transition walk, and `End` is appended by the lexer
/// after all input is consumed.
///
/// `Invalid` is the undifferentiated failure token: an unterminated string,
/// a bare word outside the keyword set, or a character the scanner does not
/// recognize all collapse into it. It carries no detail; any occurrence
/// makes the whole document invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Token {
    /// `{`
    OpenObject,
    /// `}`
    CloseObject,
    /// A quoted string naming an object member
    Key,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A lexical unit that could not be classified
    Invalid,
    /// A quoted string in value position
    StringLit,
    /// An unsigned digit run
    NumberLit,
    /// One of the bare-word literals `true`, `false`, `null`
    Keyword,
    /// `[`
    OpenArray,
    /// `]`
    CloseArray,
    /// Sentinel seeding the validator walk; never emitted by the lexer
    Start,
    /// Sentinel terminating every token sequence
    End,
}

impl Token {
    /// Check if this token opens a bracketed scope
    pub fn is_opener(&self) -> bool {
        matches!(self, Token::OpenObject | Token::OpenArray)
    }

    /// Check if this token closes a bracketed scope
    pub fn is_closer(&self) -> bool {
        matches!(self, Token::CloseObject | Token::CloseArray)
    }

    /// Check if this token is a scalar value
    pub fn is_scalar(&self) -> bool {
        matches!(self, Token::StringLit | Token::NumberLit | Token::Keyword)
    }

    /// The bracket kind opened or closed by this token, if any
    pub fn bracket(&self) -> Option<Bracket> {
        match self {
            Token::OpenObject | Token::CloseObject => Some(Bracket::Object),
            Token::OpenArray | Token::CloseArray => Some(Bracket::Array),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::OpenObject => "OPEN_OBJECT",
            Token::CloseObject => "CLOSE_OBJECT",
            Token::Key => "KEY",
            Token::Colon => "COLON",
            Token::Comma => "COMMA",
            Token::Invalid => "INVALID",
            Token::StringLit => "STRING",
            Token::NumberLit => "NUMBER",
            Token::Keyword => "KEYWORD",
            Token::OpenArray => "OPEN_ARRAY",
            Token::CloseArray => "CLOSE_ARRAY",
            Token::Start => "START",
            Token::End => "END",
        };
        write!(f, "{}", name)
    }
}

/// The kind of an open bracketed scope.
///
/// The lexer keeps a stack of these to decide whether a quoted string names
/// an object member (a string after `,` or `{` is a key only when the
/// innermost open bracket is an object). The validator keeps its own stack
/// to check that every close matches its open and that nothing stays open
/// at the end of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Object,
    Array,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_kinds() {
        assert_eq!(Token::OpenObject.bracket(), Some(Bracket::Object));
        assert_eq!(Token::CloseArray.bracket(), Some(Bracket::Array));
        assert_eq!(Token::Colon.bracket(), None);
    }

    #[test]
    fn test_classification_helpers() {
        assert!(Token::OpenArray.is_opener());
        assert!(Token::CloseObject.is_closer());
        assert!(Token::NumberLit.is_scalar());
        assert!(!Token::Key.is_scalar());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Token::OpenObject.to_string(), "OPEN_OBJECT");
        assert_eq!(Token::StringLit.to_string(), "STRING");
        assert_eq!(Token::End.to_string(), "END");
    }
}
