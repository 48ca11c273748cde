//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser keeps a two-token
//! window (current and peek) over a [`TokenSource`] and uses a Pratt parser
//! with NUD/LED handlers for expressions.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Parse failures never abort the whole parse. Each failed statement is
//! recorded as a diagnostic and the parser skips ahead to the next statement
//! boundary before continuing.

use std::{collections::HashMap, mem};

use log::{debug, info, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        stream::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted before the parse gives up on a
/// statement. Every nested operand and every operator chained onto a left
/// operand counts one level, which also bounds the depth of the tree.
pub const MAX_NESTING: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Where tokens come from
    source: Box<dyn TokenSource>,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Number of advances so far; identifies the current token
    consumed: usize,
    /// Expression nesting of the expression being parsed
    depth: usize,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `source` and fills the two-token window.
    pub fn new<S: TokenSource + 'static>(source: S) -> Self {
        let mut source: Box<dyn TokenSource> = Box::new(source);
        let current = source.next_token();
        let peek = source.next_token();

        let mut parser = Parser {
            source,
            current,
            peek,
            consumed: 0,
            depth: 0,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        info!("parser created, first token {}", parser.current.kind);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the window one token forward and returns the token that was current.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let previous = mem::replace(&mut self.current, mem::replace(&mut self.peek, next));
        self.consumed += 1;

        trace!("advanced to {} {:?}", self.current.kind, self.current.value);
        previous
    }

    /// Advances onto the peek token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// The matched token (now current), or an `UnexpectedToken` error
    /// positioned at the peek token. The window does not move on error.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ));
        }

        self.advance();
        Ok(self.current.clone())
    }

    /// Consumes an optional `;` following a statement.
    pub fn skip_semicolon(&mut self) {
        if self.peek.kind == TokenKind::Semicolon {
            self.advance();
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Binding power of the lookahead token, `Default` if it has no infix meaning.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// A kind may have both a NUD and a LED handler (`-`); its binding power
    /// only ever comes from the LED registration.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Current expression nesting.
    pub fn nesting(&self) -> usize {
        self.depth
    }

    /// Enters one more level of expression nesting.
    ///
    /// Fails at the current token once the nesting passes [`MAX_NESTING`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        self.depth += 1;

        if self.depth > MAX_NESTING {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING },
                self.get_position(),
            ));
        }
        Ok(())
    }

    /// Returns to a nesting level saved with [`Parser::nesting`].
    pub fn restore_nesting(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses statements until `EOF`.
    ///
    /// Always returns a program; statements that failed to parse are left out
    /// and described in [`Parser::errors`]. Callers should check the
    /// diagnostics before trusting the result.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.has_tokens() {
            let start = self.consumed;

            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    debug!("parse error at {}: {}", error.get_position().0, error);
                    self.errors.push(error);

                    if self.synchronize(start) {
                        continue;
                    }
                }
            }

            self.advance();
        }

        info!(
            "parsed {} statements with {} diagnostics",
            program.len(),
            self.errors.len()
        );
        program
    }

    /// Skips the rest of a broken statement.
    ///
    /// Stops on a `;` or `EOF` (left for the main loop to step over), before a
    /// statement keyword in the peek slot, or on a statement keyword that is
    /// not the token the failed statement started at. Returns `true` in the
    /// last case, meaning the current token already begins the next statement.
    fn synchronize(&mut self, start: usize) -> bool {
        loop {
            let kind = self.current.kind;
            if self.current.is_one_of_many(&[TokenKind::EOF, TokenKind::Semicolon]) {
                return false;
            }
            if kind.starts_statement() && self.consumed != start {
                trace!("resynchronized on {}", kind);
                return true;
            }
            if self.peek.kind.starts_statement() {
                return false;
            }

            self.advance();
        }
    }

    /// Diagnostic messages in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Diagnostics with their source positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }
}

/// Parses a complete source text.
///
/// This is the main entry point for parsing. It lexes `source` lazily,
/// parses all statements until EOF and hands back both the parser (holding
/// the diagnostics) and the program.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Name used in positions, `shell` when `None`
pub fn parse(source: String, file: Option<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (parser, program)
}
