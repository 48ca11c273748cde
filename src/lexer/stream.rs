use std::vec::IntoIter;

use crate::{Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Anything the parser can pull tokens from.
///
/// `next_token` is called exactly once per parser advance. Implementations
/// must eventually return an `EOF` token and keep returning one on every
/// call after that.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A token source over an already-lexed list of tokens.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            eof: MK_TOKEN!(TokenKind::EOF, String::new(), Span::null()),
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) if token.kind == TokenKind::EOF => {
                // Anything after the first EOF is ignored.
                self.eof = token.clone();
                self.tokens = Vec::new().into_iter();
                token
            }
            Some(token) => token,
            None => self.eof.clone(),
        }
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}
