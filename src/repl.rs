//! Line-oriented front ends over the lexer and parser.
//!
//! Evaluation is not part of this crate, so where an interpreter shell would
//! print a value these print the canonical rendering of the parsed program.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::{
    format_error,
    lexer::{lexer::Lexer, stream::TokenSource, tokens::TokenKind},
    parser::parser::parse,
};

/// Reads lines from `input` until it is exhausted, parsing each one.
///
/// A line with diagnostics prints each of them on its own tab-indented line
/// and nothing else; otherwise the program's rendering is printed.
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W, prompt: &str) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let (parser, program) = parse(line, None);
        let errors = parser.errors();
        if !errors.is_empty() {
            debug!("line rejected with {} diagnostics", errors.len());
            print_parser_errors(output, &errors)?;
            continue;
        }

        writeln!(output, "{}", program)?;
    }
}

/// Same loop as [`start`], but prints the raw tokens of every line.
pub fn start_token_dump<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    prompt: &str,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };

        dump_tokens(line?, None, output)?;
    }
}

/// Prints one `KIND literal` line per token, ending with the `EOF` token.
pub fn dump_tokens<W: Write>(source: String, file: Option<String>, output: &mut W) -> io::Result<()> {
    let mut lexer = Lexer::new(source, file);

    loop {
        let token = lexer.next_token();
        writeln!(output, "{}", token)?;

        if token.kind == TokenKind::EOF {
            return Ok(());
        }
    }
}

/// Parses a whole source file.
///
/// # Returns
///
/// `Ok(true)` when the source parsed cleanly and its statements were
/// printed one per line, `Ok(false)` when diagnostics were printed instead.
pub fn parse_source<W: Write>(source: String, file: String, output: &mut W) -> io::Result<bool> {
    let (parser, program) = parse(source.clone(), Some(file));

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            writeln!(output, "{}", format_error(error, &source))?;
        }
        return Ok(false);
    }

    for stmt in &program {
        writeln!(output, "{}", stmt)?;
    }
    Ok(true)
}

pub fn print_parser_errors<W: Write>(output: &mut W, errors: &[String]) -> io::Result<()> {
    for msg in errors {
        writeln!(output, "\t{}", msg)?;
    }
    Ok(())
}
