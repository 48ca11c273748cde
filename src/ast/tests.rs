//! Unit tests for AST rendering and token accessors.
//!
//! Trees here are built by hand, so rendering is checked independently of
//! the parser.

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span, MK_TOKEN,
};

use super::{
    ast::{Expr, Node, Program, Stmt},
    expressions::{IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

fn token(kind: TokenKind, value: &str) -> Token {
    MK_TOKEN!(kind, value.to_string(), Span::null())
}

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        value: name.to_string(),
        token: token(TokenKind::Identifier, name),
    }
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerExpr {
        value,
        token: token(TokenKind::Number, &value.to_string()),
    })
}

fn infix(left: Expr, operator: &str, kind: TokenKind, right: Expr) -> Expr {
    Expr::Infix(InfixExpr {
        left: Box::new(left),
        operator: operator.to_string(),
        right: Box::new(right),
        token: token(kind, operator),
    })
}

#[test]
fn test_render_let_statement() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
            token: token(TokenKind::Let, "let"),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_render_return_statement() {
    let stmt = Stmt::Return(ReturnStmt {
        value: int(5),
        token: token(TokenKind::Return, "return"),
    });

    assert_eq!(stmt.to_string(), "return 5;");
    assert_eq!(stmt.token_literal(), "return");
}

#[test]
fn test_render_nested_expressions() {
    let product = infix(
        Expr::Identifier(ident("a")),
        "*",
        TokenKind::Star,
        Expr::Identifier(ident("b")),
    );
    let negated = Expr::Prefix(PrefixExpr {
        operator: "-".to_string(),
        right_expr: Box::new(int(3)),
        token: token(TokenKind::Dash, "-"),
    });
    let sum = infix(product, "+", TokenKind::Plus, negated);

    assert_eq!(sum.to_string(), "((a * b) + (-3))");
    assert_eq!(sum.token_literal(), "+");

    let stmt = Stmt::Expression(ExpressionStmt {
        expression: sum,
        token: token(TokenKind::Identifier, "a"),
    });
    assert_eq!(stmt.to_string(), "((a * b) + (-3))");
    assert_eq!(stmt.token_literal(), "a");
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program {
        statements: vec![
            Stmt::Expression(ExpressionStmt {
                expression: int(1),
                token: token(TokenKind::Number, "1"),
            }),
            Stmt::Return(ReturnStmt {
                value: Expr::Identifier(ident("x")),
                token: token(TokenKind::Return, "return"),
            }),
        ],
    };

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "1return x;");
    assert_eq!((&program).into_iter().count(), 2);
}

#[test]
fn test_integer_literal_renders_source_text() {
    let literal = int(838383);

    assert_eq!(literal.to_string(), "838383");
    assert_eq!(literal.token_literal(), "838383");
}
