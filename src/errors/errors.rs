use thiserror::Error;

/// A syntax-level diagnostic message.
///
/// Messages come in three shapes: expected-after, expected, and free-form.
/// The fixed prototype/return errors keep the exact wording of the language
/// reference so tooling can match on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Expected '{expected}' after '{after}'.")]
    ExpectedAfter { expected: String, after: String },
    #[error("Expected '{expected}'.")]
    Expected { expected: String },
    #[error("Redefinition of argument '{name}'.")]
    ArgumentRedefinition { name: String },
    #[error("A function can't have more than 16 arguments.")]
    TooManyArguments,
    #[error("A return statement must be within a function.")]
    ReturnOutsideFunction,
    #[error("{message}")]
    Message { message: String },
}

/// Tokenization failure. The lexer stops at the first character no pattern
/// accepts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unrecognised character '{character}' at L{line},C{column}.")]
    UnrecognisedCharacter {
        character: char,
        line: u32,
        column: u32,
    },
}

/// Diagnostic severity. Errors set the session's sticky flag; warnings are
/// rendered identically but never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Parse error",
            Severity::Warning => "Warning",
        }
    }
}
