use std::{fmt, sync::Arc};

use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::{Diagnostic, ErrorKind},
    interpreter::position::{Position, Span},
};

/// Represents a lexical token in the source input.
///
/// Only numbers, the five arithmetic operators and parentheses exist. Spaces
/// and tabs separate tokens; every other character is illegal.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// Literals are held as `i64`; digits that overflow it fail with a
    /// `LiteralTooLarge` diagnostic instead of growing without bound.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// Numeric literal tokens with a decimal point, such as `3.14` or `2.`.
    ///
    /// At most one `.` belongs to a literal, so `1.2.3` stops before the
    /// second dot.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `%`
    #[token("%")]
    Mod,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// The upper-case type tag, e.g. `INT` or `PLUS`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int(_) => "INT",
            Self::Float(_) => "FLOAT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
        }
    }

    /// Returns `true` for `INT` and `FLOAT`.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}:{v}", self.name()),
            Self::Float(v) => write!(f, "{}:{v:?}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Failure raised by the generated lexer.
///
/// Converted into a [`Diagnostic`] by [`Tokenizer`]; never seen outside this
/// module.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// No rule matched the input at this point.
    #[default]
    IllegalCharacter,
    /// A run of digits too large for `i64`.
    IntegerTooLarge,
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns `LexError::IntegerTooLarge` when the digits overflow `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::IntegerTooLarge)
}

/// Parses a floating-point literal from the current token slice.
///
/// The slice is digits with a single `.`, which always parses; an absurdly
/// long literal saturates to infinity rather than failing.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts one named source text into a sequence of spanned tokens.
///
/// The tokenizer keeps a single live [`Position`] and walks it over every
/// character it consumes, including skipped whitespace, so each token's span
/// has exact line and column information.
pub struct Tokenizer {
    source:   Arc<str>,
    cursor:   Position,
    consumed: usize,
}

impl Tokenizer {
    /// Creates a tokenizer positioned on the first character of `source`.
    #[must_use]
    pub fn new(filename: impl Into<Arc<str>>, source: impl Into<Arc<str>>) -> Self {
        let source = source.into();
        Self { cursor: Position::new(filename, Arc::clone(&source)),
               source,
               consumed: 0 }
    }

    /// The live cursor; after a successful [`Tokenizer::tokenize`] it sits at
    /// the end of the input.
    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.cursor
    }

    /// Scans the whole input left to right.
    ///
    /// Fails on the first character no rule accepts. No partial token list is
    /// returned and scanning does not resume after the failure. Every call
    /// rescans from the first character.
    ///
    /// # Errors
    /// - `IllegalCharacter` for an unrecognized character, spanning exactly
    ///   that character.
    /// - `LiteralTooLarge` for an integer literal that overflows `i64`.
    ///
    /// # Example
    /// ```
    /// use ddexpr::interpreter::lexer::{Token, Tokenizer};
    ///
    /// let tokens = Tokenizer::new("test.dd", "1 + 2.5").tokenize().unwrap();
    /// let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
    /// assert_eq!(kinds, vec![Token::Int(1), Token::Plus, Token::Float(2.5)]);
    /// ```
    pub fn tokenize(&mut self) -> Result<Vec<(Token, Span)>, Diagnostic> {
        let source = Arc::clone(&self.source);
        self.cursor = Position::new(Arc::clone(&self.cursor.filename), Arc::clone(&source));
        self.consumed = 0;

        let mut lexer = Token::lexer(&source);
        let mut tokens = Vec::new();

        while let Some(result) = lexer.next() {
            let range = lexer.span();
            self.advance_to(range.start);
            let start = self.cursor.clone();

            match result {
                Ok(token) => {
                    self.advance_to(range.end);
                    trace!(%token, index = start.index, "token");
                    tokens.push((token, Span::new(start, self.cursor.clone())));
                },
                Err(LexError::IllegalCharacter) => {
                    let Some(ch) = self.cursor.current_char() else {
                        break;
                    };
                    self.cursor.advance(ch);
                    debug!(%ch, index = start.index, "illegal character");
                    return Err(Diagnostic::illegal_character(start, self.cursor.clone(), ch));
                },
                Err(LexError::IntegerTooLarge) => {
                    self.advance_to(range.end);
                    return Err(Diagnostic::new(start,
                                               self.cursor.clone(),
                                               ErrorKind::LiteralTooLarge,
                                               format!("'{}'", lexer.slice())));
                },
            }
        }

        self.advance_to(source.len());
        debug!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    /// Walks the cursor over every character up to byte offset `target`.
    fn advance_to(&mut self, target: usize) {
        if target <= self.consumed {
            return;
        }
        for ch in self.source[self.consumed..target].chars() {
            self.cursor.advance(ch);
        }
        self.consumed = target;
    }
}
