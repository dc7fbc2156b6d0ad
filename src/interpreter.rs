/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a sequence of tokens, each
/// paired with the span it came from. It is the first stage of the pipeline.
///
/// # Responsibilities
/// - Recognizes integer and float literals, arithmetic operators and
///   parentheses.
/// - Skips spaces and tabs.
/// - Reports the first illegal character with its exact location.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence produced by the lexer with a
/// three-tier recursive-descent grammar and returns a single expression tree.
///
/// # Responsibilities
/// - Encodes operator precedence through grammar layering.
/// - Builds left-associative binary operation trees.
/// - Reports unexpected tokens and premature end of input.
pub mod parser;
/// Source positions and spans.
///
/// Tracks index, line and column inside a named source text. Shared by the
/// lexer, the parser and diagnostics.
pub mod position;
