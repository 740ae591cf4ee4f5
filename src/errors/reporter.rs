use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::lexer::tokens::Token;

use super::errors::{Severity, SyntaxError};

/// Formats and emits parse diagnostics for one parse session.
///
/// Each diagnostic is a block on stderr:
///
/// ```text
/// main.nifty L3,C12: Parse error: Expected ';' after 'a'.
/// 3 | return a
///   | ~~~~~~~~~~~^
/// ```
///
/// The source file is re-opened per diagnostic purely for display; if that
/// fails the snippet is replaced by a named I/O error and parsing carries on.
pub struct Reporter {
    filename: String,
    path: PathBuf,
    errors: u32,
}

impl Reporter {
    pub fn new(filename: String, path: PathBuf) -> Reporter {
        Reporter {
            filename,
            path,
            errors: 0,
        }
    }

    /// Reports an error at `token` and sets the sticky session flag.
    pub fn error(&mut self, token: &Token, error: &SyntaxError) {
        self.errors += 1;
        self.report(Severity::Error, token, &error.to_string());
    }

    /// Reports a warning at `token`. Never touches the error flag.
    pub fn warning(&mut self, token: &Token, message: &str) {
        self.report(Severity::Warning, token, message);
    }

    /// Whether any error was reported this session. Monotone: once set it
    /// stays set until the session ends.
    pub fn had_error(&self) -> bool {
        self.errors > 0
    }

    pub fn error_count(&self) -> u32 {
        self.errors
    }

    fn report(&self, severity: Severity, token: &Token, message: &str) {
        eprintln!(
            "{} L{},C{}: {}: {}",
            self.filename,
            token.line,
            token.column,
            severity.label(),
            message
        );
        self.print_context(token);
    }

    fn print_context(&self, token: &Token) {
        match source_line(&self.path, token.line) {
            Ok(text) => {
                let (line, gutter) = context_lines(&text, token.line, token.column);
                eprintln!("{}", line);
                eprintln!("{}", gutter);
            }
            Err(err) => {
                eprintln!("Error: unable to open \"{}\": {}.", self.path.display(), err);
            }
        }
    }
}

/// Reads the 1-based `line` of the file at `path` for diagnostic display.
pub fn source_line(path: &Path, line: u32) -> std::io::Result<String> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .nth(line.saturating_sub(1) as usize)
        .unwrap_or("")
        .to_string())
}

/// Renders the two context lines for a diagnostic: the numbered source line
/// and a gutter of `~` running up to a `^` under the 1-based `column`.
pub fn context_lines(text: &str, line: u32, column: u32) -> (String, String) {
    let number = line.to_string();

    let source = format!("{} | {}", number, text);

    let mut gutter = " ".repeat(number.len());
    gutter.push_str(" | ");
    gutter.push_str(&"~".repeat(column.saturating_sub(1) as usize));
    gutter.push('^');

    (source, gutter)
}
