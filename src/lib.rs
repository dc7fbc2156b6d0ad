//! # ddexpr
//!
//! ddexpr is the front end of a small arithmetic expression interpreter.
//! It turns source text into typed tokens and assembles them into an
//! abstract syntax tree for `+`, `-`, `*`, `/` and `%` over integer and
//! floating-point literals, tracking source positions for diagnostics.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Expr,
    error::Diagnostic,
    interpreter::{
        lexer::{Token, Tokenizer},
        parser::Parser,
        position::Span,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and `BinaryOperator`, which together
/// represent an arithmetic expression as a strict binary tree. The AST is
/// built by the parser and handed to whichever component evaluates it.
pub mod ast;
/// Provides the diagnostic type shared by every phase.
///
/// A diagnostic carries the span that failed, an error category and a
/// detail message, and renders in a fixed two-line format naming the file and
/// line.
pub mod error;
/// Tokenizer, parser and source positions.
///
/// # Responsibilities
/// - Converts source text into spanned tokens.
/// - Parses tokens into an `Expr` tree.
/// - Tracks positions for error reporting.
pub mod interpreter;

/// Tokenizes `source`, returning every token with its span.
///
/// # Errors
/// Returns a diagnostic for the first illegal character or oversized integer
/// literal.
///
/// # Examples
/// ```
/// use ddexpr::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("test.dd", "3 % 2").unwrap();
/// assert_eq!(tokens[1].0, Token::Mod);
///
/// let err = tokenize("test.dd", "3 ^ 2").unwrap_err();
/// assert_eq!(err.to_string(), "Illegal Character:'^' \nFiletest.dd,line1");
/// ```
pub fn tokenize(filename: &str, source: &str) -> Result<Vec<(Token, Span)>, Diagnostic> {
    Tokenizer::new(filename, source).tokenize()
}

/// Runs the tokenizer and then the parser over one named source text.
///
/// On success the expression tree is returned; any tokenizer or parser
/// failure is returned as a [`Diagnostic`] and the later phase never runs.
///
/// # Errors
/// Returns the first diagnostic produced by either phase.
///
/// # Examples
/// ```
/// use ddexpr::run;
///
/// let ast = run("test.dd", "4 + 5 * 2").unwrap();
/// assert_eq!(ast.to_string(), "(INT:4,PLUS,(INT:5,MUL,INT:2))");
///
/// let err = run("test.dd", "1+@").unwrap_err();
/// assert!(err.details().contains('@'));
/// ```
pub fn run(filename: &str, source: &str) -> Result<Expr, Diagnostic> {
    let mut tokenizer = Tokenizer::new(filename, source);
    let tokens = tokenizer.tokenize()?;

    let ast = Parser::new(&tokens, tokenizer.position().clone()).parse()?;
    debug!(filename, nodes = ast.node_count(), "parsed expression");

    Ok(ast)
}
