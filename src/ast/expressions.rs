use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::ast::{Expr, Node};

// LITERALS

/// Identifier Expression
/// A bare name, e.g. `foobar`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub value: String,
    pub token: Token,
}

impl Node for IdentifierExpr {
    fn get_token(&self) -> &Token {
        &self.token
    }
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// A 64-bit signed integer literal.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub token: Token,
}

impl Node for IntegerExpr {
    fn get_token(&self) -> &Token {
        &self.token
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

// COMPLEX

/// Prefix Expression
/// A unary operator applied to one operand, rendered as `(<op><operand>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: String,
    pub right_expr: Box<Expr>,
    pub token: Token,
}

impl Node for PrefixExpr {
    fn get_token(&self) -> &Token {
        &self.token
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right_expr)
    }
}

/// Infix Expression
/// A binary operation, rendered as `(<left> <op> <right>)`.
///
/// The originating token is the operator itself.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub token: Token,
}

impl Node for InfixExpr {
    fn get_token(&self) -> &Token {
        &self.token
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}
