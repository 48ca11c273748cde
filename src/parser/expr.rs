use crate::{
    ast::{
        ast::Expr,
        expressions::{IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// On entry the current token is the first token of the expression; on
/// return it is the last one. Handlers for an operator are handed that
/// operator's own binding power, so a run of equal-precedence operators
/// stops climbing and associates to the left.
///
/// Input nested deeper than [`MAX_NESTING`](super::parser::MAX_NESTING) is
/// rejected with a diagnostic instead of exhausting the stack.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let depth = parser.nesting();
    let result = parse_nested_expr(parser, bp);
    parser.restore_nesting(depth);

    result
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than bp, it takes `left` as its lhs
    while parser.peek_token_kind() != TokenKind::Semicolon && parser.peek_binding_power() > bp {
        let token_kind = parser.peek_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Ok(left);
        };
        let operator_bp = parser.peek_binding_power();

        parser.advance();
        // Each chained operator deepens the tree on its left side
        parser.enter_nesting()?;
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Identifier(IdentifierExpr {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerExpr { value, token })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        right_expr: Box::new(rhs),
        token: operator_token,
    }))
}

/// `( <expr> )` yields the inner expression; grouping leaves no node behind.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        left: Box::new(left),
        operator: operator_token.value.clone(),
        right: Box::new(right),
        token: operator_token,
    }))
}
