//! Error types and diagnostics for the front-end.
//!
//! This module defines:
//!
//! - Syntax and lexical error variants with their exact user-facing messages
//! - The diagnostic reporter: source-line-and-caret rendering to stderr and
//!   the per-session sticky "finished with errors" flag

pub mod errors;
pub mod reporter;

#[cfg(test)]
mod tests;
