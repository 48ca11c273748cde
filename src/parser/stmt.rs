use log::debug;

use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    debug!("parsing statement starting with {}", kind);

    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&kind).copied() {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.skip_semicolon();

    Ok(Stmt::Expression(ExpressionStmt { expression, token }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    parser.skip_semicolon();

    Ok(Stmt::Let(LetStmt { name, value, token }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    parser.skip_semicolon();

    Ok(Stmt::Return(ReturnStmt { value, token }))
}
