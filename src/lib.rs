#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. An offset at the very end of the source
/// (where `EOF` tokens sit) maps onto the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), pos - start));
        start = end;
        line_number += 1;
    }

    // Offset one past the last character.
    last.or(Some((1, String::new(), 0)))
}

/// Renders a diagnostic with an excerpt of the offending source line.
///
/// ```text
/// Error: UnexpectedToken (insert `=` here)
/// -> main.mk
///   |
/// 1 | let x 5;
///   | ------^
/// expected next token to be =, got INT instead
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();

    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };
    out.push_str(&format!("-> {}\n", position.1));

    if let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) {
        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        out.push_str(&format!("{:>padding$}\n", "|"));

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    }

    out.push_str(&error.to_string());
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        assert!(super::get_line_at_position("let x", 6).is_none());
    }

    #[test]
    fn test_format_error_points_at_token() {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Assignment,
                received: TokenKind::Number,
            },
            Position(6, Rc::new(String::from("main.mk"))),
        );

        let rendered = super::format_error(&error, "let x 5;");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (insert `=` here)");
        assert_eq!(lines[1], "-> main.mk");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | let x 5;");
        assert_eq!(lines[4], "  | ------^");
        assert_eq!(lines[5], "expected next token to be =, got INT instead");
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: TokenKind::Semicolon,
            },
            Position(2, Rc::new(String::from("shell"))),
        );

        assert_eq!(
            super::format_error(&error, "  ;"),
            "Error: NoPrefixParseFn\n-> shell\n  |\n1 | ;\n  | ^\nno prefix parse function for ; found"
        );
    }
}
