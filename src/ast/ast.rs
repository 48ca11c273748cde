use std::fmt::{Debug, Display};

use crate::{lexer::tokens::Token, Span};

use super::{
    expressions::{IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Every AST node remembers the token it started at. `Display` gives the
/// canonical, fully parenthesized rendering of the node.
pub trait Node: Debug + Display {
    /// Returns the first token of the construct.
    fn get_token(&self) -> &Token;
    /// Returns the literal text of the first token.
    fn token_literal(&self) -> &str {
        &self.get_token().value
    }
    /// Returns the span of the first token.
    fn get_span(&self) -> &Span {
        &self.get_token().span
    }
}

/// Statement
///
/// The closed set of statement kinds of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Node for Stmt {
    fn get_token(&self) -> &Token {
        match self {
            Stmt::Let(stmt) => stmt.get_token(),
            Stmt::Return(stmt) => stmt.get_token(),
            Stmt::Expression(stmt) => stmt.get_token(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
///
/// The closed set of expression kinds of the language. Operands are boxed
/// and always present: a subtree is only built once all of its parts parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Node for Expr {
    fn get_token(&self) -> &Token {
        match self {
            Expr::Identifier(expr) => expr.get_token(),
            Expr::Integer(expr) => expr.get_token(),
            Expr::Prefix(expr) => expr.get_token(),
            Expr::Infix(expr) => expr.get_token(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => write!(f, "{}", expr),
            Expr::Integer(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Infix(expr) => write!(f, "{}", expr),
        }
    }
}

/// Program
///
/// The root of the tree: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Literal text of the first statement's token, or `""` when empty.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |stmt| stmt.token_literal())
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
