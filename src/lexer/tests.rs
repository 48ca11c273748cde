//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Illegal characters and end of input

use super::{
    lexer::{tokenize, Lexer},
    stream::{TokenSource, TokenStream},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.mk".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("let return"),
        vec![TokenKind::Let, TokenKind::Return, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore letter returned".to_string(), None);

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["foo", "bar", "baz_123", "_underscore", "letter", "returned", ""]
    );
    assert!(tokens[..6].iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 838383".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "838383");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - ! * / < > == != , ; ( ) { }"),
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Not,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    assert_eq!(
        kinds("let x=5;!=!-a==b"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Dash,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_skips_comments() {
    assert_eq!(
        kinds("let x = 1; // the answer is 42\nx"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("a @ é".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].value, "é");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  ab == 10".to_string(), Some("span.mk".to_string()));

    let offsets: Vec<(u32, u32)> = tokens
        .iter()
        .map(|token| (token.span.start.0, token.span.end.0))
        .collect();
    assert_eq!(offsets, vec![(0, 3), (5, 7), (8, 10), (11, 13), (13, 13)]);
    assert_eq!(tokens[0].span.start.1.as_str(), "span.mk");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None);

    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_lexer_eof_is_idempotent() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_eof_is_idempotent() {
    let mut tokens = tokenize("a b".to_string(), None);
    let trailing = tokens[0].clone();
    // Tokens after the first EOF are never handed out.
    tokens.push(trailing);

    let mut stream = TokenStream::new(tokens);
    assert_eq!(stream.next_token().kind, TokenKind::Identifier);
    assert_eq!(stream.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(stream.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_kind_names() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Number.to_string(), "INT");
    assert_eq!(TokenKind::Assignment.to_string(), "=");
    assert_eq!(TokenKind::NotEquals.to_string(), "!=");
    assert_eq!(TokenKind::Let.to_string(), "LET");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
    assert!(TokenKind::Return.starts_statement());
    assert!(!TokenKind::Identifier.starts_statement());
}
