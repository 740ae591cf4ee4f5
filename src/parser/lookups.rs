use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::lexer::tokens::TokenKind;

lazy_static! {
    /// Binary operator precedence. Higher binds tighter. Levels are integers
    /// because the right-hand climb recurses at `consumed + 1`.
    pub static ref PRECEDENCE_LOOKUP: HashMap<TokenKind, i32> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Or, 5);
        map.insert(TokenKind::And, 6);
        map.insert(TokenKind::Equals, 9);
        map.insert(TokenKind::NotEquals, 9);
        map.insert(TokenKind::Less, 10);
        map.insert(TokenKind::LessEquals, 10);
        map.insert(TokenKind::Greater, 10);
        map.insert(TokenKind::GreaterEquals, 10);
        map.insert(TokenKind::Plus, 12);
        map.insert(TokenKind::Dash, 12);
        map.insert(TokenKind::Star, 13);
        map.insert(TokenKind::Slash, 13);
        map.insert(TokenKind::Percent, 13);
        // Postfix ++/-- are folded by the climb like operators, then
        // special-cased into IncDec nodes.
        map.insert(TokenKind::PlusPlus, 15);
        map.insert(TokenKind::MinusMinus, 15);
        map
    };
}

/// Precedence of `kind` as a binary/postfix operator, or -1 if it is not
/// one. -1 terminates the climb against any minimum precedence.
pub fn token_precedence(kind: TokenKind) -> i32 {
    *PRECEDENCE_LOOKUP.get(&kind).unwrap_or(&-1)
}

/// Operators accepted in prefix position (besides `++`/`--`, which build
/// IncDec nodes instead of Unary).
pub fn is_unary_operator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Dash | TokenKind::Not)
}
