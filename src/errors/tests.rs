//! Unit tests for the errors module.
//!
//! This module contains tests for diagnostic messages and rendering:
//! - Syntax error message shapes
//! - Severity labels
//! - Context line and caret gutter rendering
//! - Reporter error counting

use std::{env, fs, path::PathBuf};

use crate::lexer::tokens::Token;

use super::{
    errors::{LexError, Severity, SyntaxError},
    reporter::{context_lines, source_line, Reporter},
};

#[test]
fn test_expected_after_message() {
    let error = SyntaxError::ExpectedAfter {
        expected: String::from(";"),
        after: String::from("a"),
    };

    assert_eq!(error.to_string(), "Expected ';' after 'a'.");
}

#[test]
fn test_expected_message() {
    let error = SyntaxError::Expected {
        expected: String::from("identifier"),
    };

    assert_eq!(error.to_string(), "Expected 'identifier'.");
}

#[test]
fn test_fixed_messages() {
    assert_eq!(
        SyntaxError::ArgumentRedefinition {
            name: String::from("a")
        }
        .to_string(),
        "Redefinition of argument 'a'."
    );
    assert_eq!(
        SyntaxError::TooManyArguments.to_string(),
        "A function can't have more than 16 arguments."
    );
    assert_eq!(
        SyntaxError::ReturnOutsideFunction.to_string(),
        "A return statement must be within a function."
    );
}

#[test]
fn test_free_form_message() {
    let error = SyntaxError::Message {
        message: String::from("Unexpected token in argument type."),
    };

    assert_eq!(error.to_string(), "Unexpected token in argument type.");
}

#[test]
fn test_lex_error_message() {
    let error = LexError::UnrecognisedCharacter {
        character: '@',
        line: 3,
        column: 7,
    };

    assert_eq!(error.to_string(), "Unrecognised character '@' at L3,C7.");
}

#[test]
fn test_severity_labels() {
    assert_eq!(Severity::Error.label(), "Parse error");
    assert_eq!(Severity::Warning.label(), "Warning");
}

#[test]
fn test_context_lines_caret_position() {
    let (source, gutter) = context_lines("return a", 3, 12);

    assert_eq!(source, "3 | return a");
    assert_eq!(gutter, "  | ~~~~~~~~~~~^");
    // The caret sits under the 1-based column, offset by the gutter prefix.
    assert_eq!(gutter.chars().filter(|c| *c == '~').count(), 11);
    assert!(gutter.ends_with('^'));
}

#[test]
fn test_context_lines_column_one() {
    let (_, gutter) = context_lines("fn", 1, 1);

    assert_eq!(gutter, "  | ^");
}

#[test]
fn test_context_lines_wide_line_number() {
    let (source, gutter) = context_lines("x", 120, 1);

    assert_eq!(source, "120 | x");
    assert_eq!(gutter, "    | ^");
}

#[test]
fn test_source_line_reads_requested_line() {
    let path = env::temp_dir().join("nifty_reporter_source_line_test.nifty");
    fs::write(&path, "package main;\nfn main() {\n}\n").unwrap();

    assert_eq!(source_line(&path, 1).unwrap(), "package main;");
    assert_eq!(source_line(&path, 2).unwrap(), "fn main() {");
    assert_eq!(source_line(&path, 99).unwrap(), "");

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_source_line_missing_file() {
    let path = PathBuf::from("definitely_not_a_real_file.nifty");

    assert!(source_line(&path, 1).is_err());
}

#[test]
fn test_reporter_counts_errors_not_warnings() {
    let mut reporter = Reporter::new(
        String::from("test.nifty"),
        PathBuf::from("definitely_not_a_real_file.nifty"),
    );
    let token = Token::eof(1, 1);

    assert!(!reporter.had_error());

    reporter.warning(&token, "Default argument values are not implemented yet.");
    assert!(!reporter.had_error());
    assert_eq!(reporter.error_count(), 0);

    reporter.error(&token, &SyntaxError::TooManyArguments);
    reporter.error(
        &token,
        &SyntaxError::Expected {
            expected: String::from(")"),
        },
    );
    assert!(reporter.had_error());
    assert_eq!(reporter.error_count(), 2);
}
