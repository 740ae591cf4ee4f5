//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals with type suffixes
//! - Operators and punctuation
//! - Comments and whitespace
//! - Line/column tracking
//! - Error cases

use std::path::Path;

use super::{
    lexer::{tokenize, TokenStream},
    tokens::{Token, TokenKind, TokenSource},
};

#[test]
fn test_tokenize_keywords() {
    let source = "package fn return true false void".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Package);
    assert_eq!(tokens[1].kind, TokenKind::Fn);
    assert_eq!(tokens[2].kind, TokenKind::Return);
    assert_eq!(tokens[3].kind, TokenKind::True);
    assert_eq!(tokens[4].kind, TokenKind::False);
    assert_eq!(tokens[5].kind, TokenKind::Void);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_type_keywords() {
    let source = "int uint float double char u8 s64 f128 uintptr".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::Uint);
    assert_eq!(tokens[2].kind, TokenKind::Float);
    assert_eq!(tokens[3].kind, TokenKind::Double);
    assert_eq!(tokens[4].kind, TokenKind::CharType);
    assert_eq!(tokens[5].kind, TokenKind::U8);
    assert_eq!(tokens[6].kind, TokenKind::S64);
    assert_eq!(tokens[7].kind, TokenKind::F128);
    assert_eq!(tokens[8].kind, TokenKind::UintPtr);

    for token in &tokens[..9] {
        assert!(token.kind.is_type_keyword());
    }
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_baz _leading CamelCase s32x".to_string();
    let tokens = tokenize(source).unwrap();

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[4].lexeme, "s32x");
}

#[test]
fn test_tokenize_operators() {
    let source = "= == ! != < <= > >= || && + - * / % ^".to_string();
    let tokens = tokenize(source).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Or,
            TokenKind::And,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Caret,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_colon_equals_before_colon() {
    let source = "a := 5".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::ColonEquals);
    assert_eq!(tokens[1].lexeme, ":=");
}

#[test]
fn test_tokenize_increment_decrement() {
    let source = "++x y-- + -".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::PlusPlus);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::MinusMinus);
    assert_eq!(tokens[4].kind, TokenKind::Plus);
    assert_eq!(tokens[5].kind, TokenKind::Dash);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } [ ] ; : ,".to_string();
    let tokens = tokenize(source).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_suffixed_numbers_are_single_lexemes() {
    let source = "42 3.14 10d 5u 2f".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 6); // Five numbers plus EOF.
    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Number);
    }
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].lexeme, "3.14");
    assert_eq!(tokens[2].lexeme, "10d");
    assert_eq!(tokens[3].lexeme, "5u");
    assert_eq!(tokens[4].lexeme, "2f");
}

#[test]
fn test_tokenize_skips_comments() {
    let source = "foo // the rest of this line vanishes\nbar".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[1].lexeme, "bar");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_tracks_lines_and_columns() {
    let source = "fn main\n  x".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (1, 4));
    assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new()).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize("foo @".to_string());

    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unrecognised character '@' at L1,C5."
    );
}

#[test]
fn test_token_stream_yields_eof_forever() {
    let tokens = tokenize("x".to_string()).unwrap();
    let mut stream = TokenStream::new(tokens, Some("test.nifty".to_string()));

    assert_eq!(stream.next_token().kind, TokenKind::Identifier);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_defaults_to_shell() {
    let stream = TokenStream::new(vec![Token::eof(1, 1)], None);

    assert_eq!(stream.filename(), "shell");
    assert_eq!(stream.path(), Path::new("shell"));
}
