//! Token-sequence tests for whole documents
//!
//! These tests pin down the exact token sequence the lexer produces for
//! representative documents, including the context-sensitive key/string
//! split and the collapse of malformed input into the invalid token.

use jcheck::{lex, tokenize, Token};

/// Helper: strip locations from lexer output
fn strip_loc(pairs: Vec<(Token, std::ops::Range<usize>)>) -> Vec<Token> {
    pairs.into_iter().map(|(t, _)| t).collect()
}

#[test]
fn test_simple_member_tokenization() {
    let tokens = tokenize(r#"{"a":1}"#);

    assert_eq!(
        tokens,
        vec![
            Token::OpenObject, // "{"
            Token::Key,        // "a"
            Token::Colon,      // ":"
            Token::NumberLit,  // 1
            Token::CloseObject, // "}"
            Token::End,        // end of input
        ]
    );
}

#[test]
fn test_mixed_members_tokenization() {
    let tokens = tokenize(r#"{"a":"b","c":true}"#);

    assert_eq!(
        tokens,
        vec![
            Token::OpenObject, // "{"
            Token::Key,        // "a"
            Token::Colon,      // ":"
            Token::StringLit,  // "b"
            Token::Comma,      // ","
            Token::Key,        // "c"
            Token::Colon,      // ":"
            Token::Keyword,    // true
            Token::CloseObject, // "}"
            Token::End,        // end of input
        ]
    );
}

#[test]
fn test_array_member_snapshot() {
    let tokens = tokenize(r#"{"a":[1,2,3]}"#);

    insta::assert_debug_snapshot!(tokens, @r###"
[
    OpenObject,
    Key,
    Colon,
    OpenArray,
    NumberLit,
    Comma,
    NumberLit,
    Comma,
    NumberLit,
    CloseArray,
    CloseObject,
    End,
]
"###);
}

#[test]
fn test_malformed_document_snapshot() {
    // Unterminated string, then a bare word outside the keyword set
    let tokens = tokenize("{\"a\":\"oops\nnope}");

    insta::assert_debug_snapshot!(tokens, @r###"
[
    OpenObject,
    Key,
    Colon,
    Invalid,
    Invalid,
    CloseObject,
    End,
]
"###);
}

#[test]
fn test_multiline_document_tokenization() {
    let source = "{\n    \"a\": 1,\n    \"b\": null\n}\n";
    let tokens = strip_loc(lex(source));

    assert_eq!(
        tokens,
        vec![
            Token::OpenObject,
            Token::Key,
            Token::Colon,
            Token::NumberLit,
            Token::Comma,
            Token::Key,
            Token::Colon,
            Token::Keyword,
            Token::CloseObject,
            Token::End,
        ]
    );
}

#[test]
fn test_spans_cover_their_lexemes() {
    let source = r#"{"key": 42}"#;
    let pairs = lex(source);

    let lexemes: Vec<&str> = pairs
        .iter()
        .map(|(_, span)| &source[span.clone()])
        .collect();
    assert_eq!(lexemes, vec!["{", "\"key\"", ":", "42", "}", ""]);
}

#[test]
fn test_string_with_spaces_is_one_token() {
    let tokens = tokenize(r#"{"a":"hello world, again"}"#);
    assert_eq!(
        tokens,
        vec![
            Token::OpenObject,
            Token::Key,
            Token::Colon,
            Token::StringLit,
            Token::CloseObject,
            Token::End,
        ]
    );
}
