//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into tokens
//! for the parser. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! The parser never sees raw text: it only consumes the [`stream::TokenSource`]
//! contract, which both the streaming [`lexer::Lexer`] and the list-backed
//! [`stream::TokenStream`] implement.

pub mod lexer;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
