//! Parser driver: lookahead management and session state.
//!
//! The driver keeps three live token copies (previous/current/lookahead),
//! pulls fresh tokens from the `TokenSource`, and owns the diagnostic
//! reporter plus the package registry for the session. Productions live in
//! `stmt`, `expr` and `types` and drive the buffer through the methods here.
//!
//! Failure propagates as `Option::None` (the absent marker): a production
//! that reports a fatal error returns `None`, every caller forwards it with
//! `?` without re-reporting, and the top-level loop treats `None` as "stop
//! and return what parsed so far".

use crate::{
    ast::nodes::Node,
    errors::{errors::SyntaxError, reporter::Reporter},
    lexer::tokens::{Token, TokenKind, TokenSource},
    packages::Packages,
};

use super::stmt::parse_primary;

/// Per-session parser state.
///
/// One parse session exclusively owns its token source, reporter and node
/// accumulator; nothing is shared between sessions.
pub struct Parser<S: TokenSource> {
    source: S,
    previous: Token,
    current: Token,
    lookahead: Token,
    /// Set by `first_advance`; productions must not run before priming.
    primed: bool,
    nodes: Vec<Node>,
    in_function: bool,
    current_fn_name: String,
    current_package: String,
    packages: Packages,
    reporter: Reporter,
}

impl<S: TokenSource> Parser<S> {
    pub fn new(source: S) -> Self {
        let reporter = Reporter::new(
            source.filename().to_string(),
            source.path().to_path_buf(),
        );
        let eof = Token::eof(0, 0);

        Parser {
            previous: eof.clone(),
            current: eof.clone(),
            lookahead: eof,
            primed: false,
            nodes: vec![],
            in_function: false,
            current_fn_name: String::new(),
            current_package: String::new(),
            packages: Packages::new(),
            reporter,
            source,
        }
    }

    /// Primes `current` and `lookahead` from the empty buffer. Must be
    /// called exactly once before any production runs.
    pub fn first_advance(&mut self) {
        assert!(!self.primed, "parser already primed");
        self.primed = true;

        self.lookahead = self.source.next_token();
        self.advance();
    }

    /// Shifts current -> previous, lookahead -> current, and pulls one fresh
    /// token into lookahead.
    pub fn advance(&mut self) {
        debug_assert!(self.primed, "parser used before first_advance");

        self.previous = std::mem::replace(
            &mut self.current,
            std::mem::replace(&mut self.lookahead, self.source.next_token()),
        );
    }

    pub fn current_token(&self) -> &Token {
        debug_assert!(self.primed, "parser used before first_advance");
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn previous_token(&self) -> &Token {
        &self.previous
    }

    /// Whether `current` is of the given kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Whether `lookahead` is of the given kind.
    pub fn lookahead_is(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    /// Non-erroring sibling of `expect`: consumes `current` if it matches.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if !self.check(kind) {
            return false;
        }

        self.advance();
        true
    }

    /// Advances if `lookahead` matches `kind`, otherwise reports
    /// "Expected '<expected>'." and leaves the buffer untouched.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> bool {
        if !self.lookahead_is(kind) {
            self.parse_error(expected);
            return false;
        }

        self.advance();
        true
    }

    /// Advances if `lookahead` matches `kind`, otherwise reports
    /// "Expected '<expected>' after '<after>'." and leaves the buffer
    /// untouched.
    pub fn expect_after(&mut self, kind: TokenKind, expected: &str, after: &str) -> bool {
        if !self.lookahead_is(kind) {
            self.parse_error_after(expected, after);
            return false;
        }

        self.advance();
        true
    }

    /// Consumes a statement terminator, or reports the terminator expected
    /// after the previous token's lexeme. The caret points at the previous
    /// token.
    pub fn expect_semicolon(&mut self) {
        if self.check(TokenKind::Semicolon) {
            self.advance();
            return;
        }

        let previous = self.previous.clone();
        self.reporter.error(
            &previous,
            &SyntaxError::ExpectedAfter {
                expected: String::from(";"),
                after: previous.lexeme.clone(),
            },
        );
    }

    /// Consumes a statement terminator if present; silent otherwise.
    pub fn maybe_semicolon(&mut self) {
        if self.check(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Reports "Expected '<expected>'." at the current token and yields the
    /// absent marker for the caller to return.
    pub fn parse_error(&mut self, expected: &str) -> Option<Node> {
        self.error(SyntaxError::Expected {
            expected: expected.to_string(),
        })
    }

    /// Reports "Expected '<expected>' after '<after>'." at the current token.
    pub fn parse_error_after(&mut self, expected: &str, after: &str) -> Option<Node> {
        self.error(SyntaxError::ExpectedAfter {
            expected: expected.to_string(),
            after: after.to_string(),
        })
    }

    /// Reports `error` at the current token, sets the sticky session flag,
    /// and yields the absent marker.
    pub fn error(&mut self, error: SyntaxError) -> Option<Node> {
        let token = self.current.clone();
        self.reporter.error(&token, &error);
        None
    }

    /// Non-fatal duplicate-argument report; the prototype keeps parsing.
    pub fn redefinition_error_arg(&mut self, name: &str) {
        self.error(SyntaxError::ArgumentRedefinition {
            name: name.to_string(),
        });
    }

    /// Reports a warning at the current token. Never sets the error flag and
    /// never aborts a production.
    pub fn warning(&mut self, message: &str) {
        let token = self.current.clone();
        self.reporter.warning(&token, message);
    }

    pub fn in_function(&self) -> bool {
        self.in_function
    }

    pub fn set_in_function(&mut self, in_function: bool) {
        self.in_function = in_function;
    }

    pub fn current_fn_name(&self) -> &str {
        &self.current_fn_name
    }

    pub fn set_current_fn_name(&mut self, name: String) {
        self.current_fn_name = name;
    }

    pub fn current_package(&self) -> &str {
        &self.current_package
    }

    pub fn set_current_package(&mut self, name: String) {
        self.current_package = name;
    }

    /// Registers a fresh symbol table scope for `name`. Returns false if the
    /// package already exists (the existing scope is kept).
    pub fn register_package(&mut self, name: &str) -> bool {
        self.packages.add(name)
    }

    pub fn packages(&self) -> &Packages {
        &self.packages
    }

    /// Sticky session flag: true once any error was reported.
    pub fn finished_with_errors(&self) -> bool {
        self.reporter.had_error()
    }

    pub fn error_count(&self) -> u32 {
        self.reporter.error_count()
    }

    pub(crate) fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn take_nodes(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.nodes)
    }
}

/// Parses a token source to completion.
///
/// Returns the parser (for the "finished with errors" flag and session
/// state) together with the ordered top-level nodes accumulated before the
/// first absent production, which is a best-effort partial AST when errors
/// occurred.
pub fn parse<S: TokenSource>(source: S) -> (Parser<S>, Vec<Node>) {
    let mut parser = Parser::new(source);

    parser.first_advance();

    while !parser.check(TokenKind::EOF) {
        match parse_primary(&mut parser) {
            Some(node) => parser.push_node(node),
            None => break,
        }
    }

    let nodes = parser.take_nodes();
    (parser, nodes)
}
