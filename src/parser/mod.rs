//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens into
//! an AST while reporting source-located diagnostics. It handles:
//!
//! - Top-level dispatch (packages, functions, literals, bare type refs)
//! - Expression parsing via precedence climbing with a recursive
//!   right-hand-side climb
//! - The standalone type grammar (numeric keywords, void, placeholders)
//! - Error recovery: a failed production returns the absent marker and the
//!   driver keeps whatever parsed before it
//!
//! The driver keeps one token of lookahead (previous/current/lookahead) and
//! owns the diagnostic reporter for the session.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
