//! Lexical analysis module for the front-end.
//!
//! This module contains the lexer (tokenizer) that converts Nifty source
//! code into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling
//!
//! The parser itself only depends on the `TokenSource` contract defined in
//! `tokens`, so any token producer honoring it can drive a parse session.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
