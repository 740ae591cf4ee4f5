use std::path::{Path, PathBuf};

use regex::Regex;

use crate::{errors::errors::LexError, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenSource, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            pos: 0,
            line: 1,
            column: 1,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?[a-zA-Z]*").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
                RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                RegexPattern { regex: Regex::new(":=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ColonEquals, ":=") },
                RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
                RegexPattern { regex: Regex::new("\\+\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++") },
                RegexPattern { regex: Regex::new("--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
            ],
            source,
        }
    }

    /// Advances past `n` bytes of source, keeping line/column in sync.
    pub fn advance_n(&mut self, n: usize) {
        for ch in self.source[self.pos..self.pos + n].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source.as_bytes()[self.pos] as char
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        matched.clone(),
        lexer.line(),
        lexer.column()
    ));
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let kind = match RESERVED_LOOKUP.get(value.as_str()) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    };

    lexer.push(MK_TOKEN!(kind, value.clone(), lexer.line(), lexer.column()));
    lexer.advance_n(value.len());
}

/// Tokenizes a full source buffer into a vector of tokens ending in EOF.
pub fn tokenize(source: String) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in lex.clone().patterns.iter() {
            let match_start = pattern.regex.find(lex.remainder()).map(|m| m.start());

            if match_start == Some(0) {
                (pattern.handler)(&mut lex, pattern.regex.clone());
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(LexError::UnrecognisedCharacter {
                character: lex.at(),
                line: lex.line(),
                column: lex.column(),
            });
        }
    }

    let (line, column) = (lex.line(), lex.column());
    lex.push(Token::eof(line, column));
    Ok(lex.tokens)
}

/// A `TokenSource` over a pre-tokenized buffer.
///
/// Keeps producing the trailing EOF token once the buffer is exhausted, so
/// the parser's lookahead can always be filled.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    filename: String,
    path: PathBuf,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, file: Option<String>) -> TokenStream {
        let filename = file.unwrap_or_else(|| String::from("shell"));

        TokenStream {
            tokens,
            pos: 0,
            path: PathBuf::from(&filename),
            filename,
        }
    }

    /// Overrides the path used to re-open the source for diagnostics, for
    /// when the display name and the on-disk location differ.
    pub fn with_path(mut self, path: PathBuf) -> TokenStream {
        self.path = path;
        self
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => match self.tokens.last() {
                Some(last) => Token::eof(last.line, last.column),
                None => Token::eof(1, 1),
            },
        }
    }

    fn filename(&self) -> &str {
        &self.filename
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
