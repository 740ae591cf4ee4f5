//! Declaration and statement parsing: the top-level dispatch plus packages,
//! functions, prototypes, blocks and return statements.
//!
//! Every production returns `Option`: `None` is the absent marker of a
//! production that already reported its error (or, for the dispatch
//! fallthrough, of a token no production claims). Callers forward `None`
//! without reporting again.

use crate::{
    ast::{
        nodes::{Argument, Node, Prototype, MAX_ARITY},
        types::NiftyType,
    },
    errors::errors::SyntaxError,
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{
    expr::{parse_bool, parse_expression, parse_number},
    parser::Parser,
    types::parse_type,
};

/// Top-level dispatch, also used for the statements of a block body.
///
/// Order: end-of-stream terminates; a bare terminator is consumed and the
/// dispatch retried; a type keyword becomes a bare type reference; `package`
/// is handled and the dispatch continues with what follows it; then the
/// keyword table. Anything else is absent with no error, which halts the
/// enclosing loop.
pub fn parse_primary<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    if parser.check(TokenKind::EOF) {
        return None;
    }

    if parser.check(TokenKind::Semicolon) {
        parser.advance();
        return parse_primary(parser);
    }

    if parser.current_token_kind().is_type_keyword() {
        return parse_type_ref(parser);
    }

    if parser.check(TokenKind::Package) {
        parse_package(parser)?;
        return parse_primary(parser);
    }

    match parser.current_token_kind() {
        TokenKind::Number => parse_number(parser),
        TokenKind::Fn => parse_function(parser),
        TokenKind::True => parse_bool(parser, true),
        TokenKind::False => parse_bool(parser, false),
        TokenKind::Return => parse_return(parser),
        TokenKind::Identifier => parse_symbol_ref(parser),
        _ => None,
    }
}

/// A bare type keyword at statement level becomes a TypeRef node and nothing
/// more; no declaration is parsed around it.
fn parse_type_ref<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    let ty = parse_type(parser)?;
    parser.advance();

    Some(Node::TypeRef { ty })
}

/// An identifier in primary position is an unresolved named reference. The
/// type grammar's own identifier production stays absent until user types
/// are resolvable.
fn parse_symbol_ref<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    let name = parser.current_token().lexeme.clone();
    parser.advance();

    Some(Node::TypeRef {
        ty: NiftyType::Named { name },
    })
}

/// `package <identifier> [;]` — records the current package and opens a
/// fresh symbol table scope for it.
fn parse_package<S: TokenSource>(parser: &mut Parser<S>) -> Option<()> {
    if !parser.expect_after(TokenKind::Identifier, "identifier", "package") {
        return None;
    }

    let name = parser.current_token().lexeme.clone();
    parser.set_current_package(name.clone());

    if !parser.register_package(&name) {
        parser.warning(&format!("Package '{}' was already declared.", name));
    }

    parser.advance(); // Eat the package name.
    parser.maybe_semicolon();

    Some(())
}

/// `fn <name>(<prototype>) [: types] { body }`
pub fn parse_function<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    parser.advance(); // Eat the fn.
    parser.set_in_function(true);

    if !parser.check(TokenKind::Identifier) {
        return parser.parse_error_after("name", "fn");
    }

    let name = parser.current_token().lexeme.clone();
    parser.set_current_fn_name(name.clone());

    if !parser.expect_after(TokenKind::OpenParen, "(", "name") {
        return None;
    }
    parser.advance(); // Eat the (.

    let prototype = parse_prototype(parser, name)?;
    let body = parse_block(parser)?;
    parser.set_in_function(false);

    Some(Node::Function {
        prototype,
        body: Box::new(body),
    })
}

/// Argument list and return types, with `current` just past the `(`.
///
/// Duplicate names and the arity cap are reported but never abort the
/// prototype; a missing name, `:`, separator or return type does.
fn parse_prototype<S: TokenSource>(parser: &mut Parser<S>, name: String) -> Option<Prototype> {
    let mut arity = 0;
    let mut args = Vec::new();
    let mut arg_names: Vec<String> = Vec::new();
    let mut return_types = Vec::new();

    while !parser.check(TokenKind::CloseParen) {
        if parser.check(TokenKind::EOF) {
            parser.parse_error(")");
            return None;
        }

        if !parser.check(TokenKind::Identifier) {
            parser.parse_error("identifier");
            return None;
        }

        let arg_name = parser.current_token().lexeme.clone();
        if arg_names.contains(&arg_name) {
            parser.redefinition_error_arg(&arg_name);
        } else {
            arg_names.push(arg_name);
        }

        arity += 1;
        if arity == MAX_ARITY + 1 {
            parser.error(SyntaxError::TooManyArguments);
        }

        if parser.lookahead_is(TokenKind::ColonEquals) {
            // name := value
            parser.warning("Default argument values are not implemented yet.");
            while !parser.check(TokenKind::Comma)
                && !parser.check(TokenKind::CloseParen)
                && !parser.check(TokenKind::EOF)
            {
                parser.advance();
            }
            if parser.check(TokenKind::Comma) {
                parser.advance();
            }
            continue;
        }

        let arg = parse_arg(parser)?;
        args.push(arg);

        if parser.check(TokenKind::Comma) {
            parser.advance();
        } else if !parser.check(TokenKind::CloseParen) {
            parser.parse_error_after("':', or ':=', or ','", "identifier");
            return None;
        }
    }

    parser.advance(); // Eat the ).

    if parser.check(TokenKind::OpenCurly) {
        return_types.push(NiftyType::Void);
    } else if parser.match_token(TokenKind::Colon) {
        loop {
            let ty = match parse_type(parser) {
                Some(ty) => ty,
                None => {
                    parser.parse_error("type");
                    return None;
                }
            };
            parser.advance(); // Past the type.
            return_types.push(ty);

            if !parser.match_token(TokenKind::Comma) {
                break;
            }
        }
    } else {
        parser.parse_error_after(":", ")");
        return None;
    }

    Some(Prototype {
        name,
        args,
        return_types,
    })
}

/// One `name: type` argument, leaving `current` on the token after the type.
fn parse_arg<S: TokenSource>(parser: &mut Parser<S>) -> Option<Argument> {
    if !parser.check(TokenKind::Identifier) {
        parser.parse_error("identifier");
        return None;
    }

    let name = parser.current_token().lexeme.clone();
    parser.advance();

    if !parser.check(TokenKind::Colon) {
        parser.parse_error_after(":", "identifier");
        return None;
    }
    parser.advance();

    let ty = match parse_type(parser) {
        Some(ty) => ty,
        None => {
            parser.error(SyntaxError::Message {
                message: String::from("Unexpected token in argument type."),
            });
            return None;
        }
    };
    parser.advance(); // Past the type.

    Some(Argument { name, ty })
}

/// `{ statements }` using the primary dispatch for each statement.
pub fn parse_block<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    if !parser.check(TokenKind::OpenCurly) {
        return parser.parse_error("{");
    }
    parser.advance(); // Eat the '{'.

    let mut statements = Vec::new();
    while !parser.check(TokenKind::CloseCurly) {
        if parser.check(TokenKind::EOF) {
            return parser.parse_error("}");
        }

        // A stray terminator before the '}' is not a statement.
        if parser.match_token(TokenKind::Semicolon) {
            continue;
        }

        let statement = parse_primary(parser)?;
        statements.push(statement);
    }

    parser.advance(); // Eat the '}'.

    Some(Node::Block { statements })
}

/// `return [expr, expr, ...] [;]` — only valid inside a function body.
pub fn parse_return<S: TokenSource>(parser: &mut Parser<S>) -> Option<Node> {
    parser.advance(); // Eat the return.

    if !parser.in_function() {
        return parser.error(SyntaxError::ReturnOutsideFunction);
    }

    let mut values = Vec::new();
    while !parser.check(TokenKind::Semicolon)
        && !parser.check(TokenKind::CloseCurly)
        && !parser.check(TokenKind::EOF)
    {
        let value = parse_expression(parser)?;
        values.push(value);

        if !parser.check(TokenKind::Comma) {
            break;
        }
        parser.advance(); // Eat the ','.
    }

    parser.maybe_semicolon();

    Some(Node::Return { values })
}
