//! Type grammar parsing.
//!
//! Dispatches on the current token to a type production. None of these
//! consume the type's final token; the caller advances past it. Pointer,
//! array, function and named types are recognised openers whose productions
//! are unfinished: they return the absent marker without reporting, and the
//! caller decides whether absence is an error there.

use crate::{
    ast::types::{NiftyType, NumberKind},
    lexer::tokens::{TokenKind, TokenSource},
};

use super::parser::Parser;

/// Parses a type with `current` positioned at its first token.
pub fn parse_type<S: TokenSource>(parser: &mut Parser<S>) -> Option<NiftyType> {
    match parser.current_token_kind() {
        TokenKind::Void => Some(NiftyType::Void),
        TokenKind::Caret => parse_ptr_type(parser),
        TokenKind::Fn => parse_fn_type(parser),
        TokenKind::OpenBracket => parse_array_type(parser),
        TokenKind::Identifier => parse_ident_type(parser),
        kind => number_type_for(kind).map(|kind| NiftyType::Number { kind }),
    }
}

// ^type
pub fn parse_ptr_type<S: TokenSource>(_parser: &mut Parser<S>) -> Option<NiftyType> {
    None
}

// fn(type, type, ...): type
pub fn parse_fn_type<S: TokenSource>(_parser: &mut Parser<S>) -> Option<NiftyType> {
    None
}

// []type
pub fn parse_array_type<S: TokenSource>(_parser: &mut Parser<S>) -> Option<NiftyType> {
    None
}

// Can be struct, enum, custom type, union type
pub fn parse_ident_type<S: TokenSource>(_parser: &mut Parser<S>) -> Option<NiftyType> {
    None
}

/// The numeric keyword table. Total over the recognised keyword set, exact,
/// no coercion or defaulting.
pub fn number_type_for(kind: TokenKind) -> Option<NumberKind> {
    match kind {
        TokenKind::Int => Some(NumberKind::S32),
        TokenKind::Uint => Some(NumberKind::U32),
        TokenKind::Float => Some(NumberKind::F32),
        TokenKind::Double => Some(NumberKind::F64),
        TokenKind::CharType => Some(NumberKind::U32),
        TokenKind::U8 => Some(NumberKind::U8),
        TokenKind::U16 => Some(NumberKind::U16),
        TokenKind::U32 => Some(NumberKind::U32),
        TokenKind::U64 => Some(NumberKind::U64),
        TokenKind::U128 => Some(NumberKind::U128),
        TokenKind::S8 => Some(NumberKind::S8),
        TokenKind::S16 => Some(NumberKind::S16),
        TokenKind::S32 => Some(NumberKind::S32),
        TokenKind::S64 => Some(NumberKind::S64),
        TokenKind::S128 => Some(NumberKind::S128),
        TokenKind::F16 => Some(NumberKind::F16),
        TokenKind::F32 => Some(NumberKind::F32),
        TokenKind::F64 => Some(NumberKind::F64),
        TokenKind::F128 => Some(NumberKind::F128),
        TokenKind::UintPtr => Some(NumberKind::U64),
        _ => None,
    }
}
