use crate::lexer::tokens::Token;

use super::types::NiftyType;

/// Maximum number of arguments a function prototype may declare. Crossing it
/// is reported once and parsing of the remaining arguments continues.
pub const MAX_ARITY: usize = 16;

/// One declared function argument, owned by its prototype.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub ty: NiftyType,
}

/// A function's parsed signature prior to body parsing. `return_types` is
/// never empty: a missing return list defaults to a single `void`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub args: Vec<Argument>,
    pub return_types: Vec<NiftyType>,
}

/// The AST node sum type. Every node owns its children exclusively; the tree
/// is acyclic and immutable once a production returns it.
///
/// The absent marker of a failed production is `Option<Node>::None` at the
/// call boundary, not a variant of this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    NumberLiteral {
        width: u8,
        text: String,
        signed: bool,
    },
    FloatLiteral {
        width: u8,
        text: String,
    },
    BoolLiteral {
        width: u8,
        value: bool,
    },
    Unary {
        op: Token,
        operand: Box<Node>,
    },
    Binary {
        op: Token,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    IncDec {
        is_increment: bool,
        is_prefix: bool,
        operand: Box<Node>,
    },
    Block {
        statements: Vec<Node>,
    },
    Function {
        prototype: Prototype,
        body: Box<Node>,
    },
    Return {
        values: Vec<Node>,
    },
    TypeRef {
        ty: NiftyType,
    },
}
