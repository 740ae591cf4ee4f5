use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, path::Path};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("package", TokenKind::Package);
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("void", TokenKind::Void);
        map.insert("int", TokenKind::Int);
        map.insert("uint", TokenKind::Uint);
        map.insert("float", TokenKind::Float);
        map.insert("double", TokenKind::Double);
        map.insert("char", TokenKind::CharType);
        map.insert("u8", TokenKind::U8);
        map.insert("u16", TokenKind::U16);
        map.insert("u32", TokenKind::U32);
        map.insert("u64", TokenKind::U64);
        map.insert("u128", TokenKind::U128);
        map.insert("s8", TokenKind::S8);
        map.insert("s16", TokenKind::S16);
        map.insert("s32", TokenKind::S32);
        map.insert("s64", TokenKind::S64);
        map.insert("s128", TokenKind::S128);
        map.insert("f16", TokenKind::F16);
        map.insert("f32", TokenKind::F32);
        map.insert("f64", TokenKind::F64);
        map.insert("f128", TokenKind::F128);
        map.insert("uintptr", TokenKind::UintPtr);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,
    Colon,
    ColonEquals, // := (default argument values, recognised but unimplemented)
    Comma,
    Caret, // ^ (pointer sigil)

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Package,
    Fn,
    Return,
    True,
    False,

    // Type keywords
    Void,
    Int,
    Uint,
    Float,
    Double,
    CharType,
    U8,
    U16,
    U32,
    U64,
    U128,
    S8,
    S16,
    S32,
    S64,
    S128,
    F16,
    F32,
    F64,
    F128,
    UintPtr,
}

impl TokenKind {
    /// Whether this kind starts a type in the type grammar: `void`, the
    /// fixed numeric keywords, or one of the placeholder openers.
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Void
                | TokenKind::Int
                | TokenKind::Uint
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::CharType
                | TokenKind::U8
                | TokenKind::U16
                | TokenKind::U32
                | TokenKind::U64
                | TokenKind::U128
                | TokenKind::S8
                | TokenKind::S16
                | TokenKind::S32
                | TokenKind::S64
                | TokenKind::S128
                | TokenKind::F16
                | TokenKind::F32
                | TokenKind::F64
                | TokenKind::F128
                | TokenKind::UintPtr
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column.
    pub column: u32,
}

impl Token {
    /// Synthetic end-of-stream token. A `TokenSource` keeps producing these
    /// forever once the underlying stream is exhausted.
    pub fn eof(line: u32, column: u32) -> Token {
        Token {
            kind: TokenKind::EOF,
            lexeme: String::from("EOF"),
            line,
            column,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{ kind: {}, lexeme: {}, L{},C{} }}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

/// Pull-based token producer consumed by the parser.
///
/// `next_token` must be infinite-safe: after the stream is exhausted it keeps
/// returning an EOF token and never fails. `filename`/`path` are only used
/// for diagnostics.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
    fn filename(&self) -> &str;
    fn path(&self) -> &Path;
}
