//! Expression parsing: precedence climbing with a recursive right-hand-side
//! climb, prefix/postfix increment handling, and literal classification.

use crate::{
    ast::nodes::Node,
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{
    lookups::{is_unary_operator, token_precedence},
    parser::Parser,
    stmt::parse_primary,
};

pub fn parse_expression<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    let lhs = parse_unary(parser)?;

    parse_bin_op_rhs(parser, 0, lhs)
}

/// Parses a prefix operator in front of a primary. `++`/`--` build IncDec
/// nodes; other recognised operators wrap the primary in a Unary node. With
/// no operator present this is just the primary itself.
///
/// An absent operand is propagated as-is: the inner primary parse already
/// reported anything it had to.
pub fn parse_unary<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    let kind = parser.current_token_kind();

    if kind == TokenKind::PlusPlus || kind == TokenKind::MinusMinus {
        parser.advance();
        let operand = parse_primary(parser)?;

        return Some(Node::IncDec {
            is_increment: kind == TokenKind::PlusPlus,
            is_prefix: true,
            operand: Box::new(operand),
        });
    }

    if !is_unary_operator(kind) {
        return parse_primary(parser);
    }

    let op = parser.current_token().clone();
    parser.advance();

    let operand = parse_primary(parser)?;

    Some(Node::Unary {
        op,
        operand: Box::new(operand),
    })
}

/// The climb: folds operators of at least `precedence` into `lhs`. After
/// consuming an operator, the right-hand side is climbed recursively at
/// `consumed + 1` whenever the next operator binds tighter, giving correct
/// associativity without a grammar level per operator.
///
/// A consumed `++`/`--` here is a postfix operation on the already-parsed
/// left-hand side.
pub fn parse_bin_op_rhs<S: TokenSource>(
    parser: &mut Parser<S>,
    precedence: i32,
    mut lhs: Node,
) -> Option<Node> {
    loop {
        let token_prec = token_precedence(parser.current_token_kind());

        if token_prec < precedence {
            return Some(lhs);
        }

        let op = parser.current_token().clone();
        parser.advance();

        if op.kind == TokenKind::PlusPlus || op.kind == TokenKind::MinusMinus {
            return Some(Node::IncDec {
                is_increment: op.kind == TokenKind::PlusPlus,
                is_prefix: false,
                operand: Box::new(lhs),
            });
        }

        let mut rhs = parse_unary(parser)?;

        let next_prec = token_precedence(parser.current_token_kind());
        if token_prec < next_prec {
            rhs = parse_bin_op_rhs(parser, token_prec + 1, rhs)?;
        }

        lhs = Node::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        };
    }
}

/// Classifies a number literal by a textual suffix scan, checked in order:
/// `d`/`D` makes it a 64-bit float, then `f`/`F`/`.` a 32-bit float,
/// otherwise a signed 32-bit integer, unsigned when `u`/`U` is present.
/// Malformed suffix combinations take the first matching branch.
pub fn parse_number<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    let text = parser.current_token().lexeme.clone();
    parser.advance();

    // TODO: Hex, Oct, Bin.
    if text.contains(|c| c == 'd' || c == 'D') {
        return Some(Node::FloatLiteral { width: 64, text });
    }
    if text.contains(|c| c == 'f' || c == 'F' || c == '.') {
        return Some(Node::FloatLiteral { width: 32, text });
    }

    let signed = !text.contains(|c| c == 'u' || c == 'U');

    Some(Node::NumberLiteral {
        width: 32,
        text,
        signed,
    })
}

pub fn parse_bool<S: TokenSource>(parser: &mut Parser<S>, value: bool) -> Option<Node> {
    parser.advance();

    Some(Node::BoolLiteral { width: 32, value })
}
