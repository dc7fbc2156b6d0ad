use std::fmt;

use thiserror::Error;

use crate::interpreter::position::{Position, Span};

/// The category of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character matching no lexical rule.
    IllegalCharacter,
    /// An integer literal that does not fit in an `i64`.
    LiteralTooLarge,
    /// A token the grammar does not allow at this point.
    UnexpectedToken,
    /// The token stream ended in the middle of an expression.
    UnexpectedEndOfInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter => f.write_str("Illegal Character"),
            Self::LiteralTooLarge => f.write_str("Literal Too Large"),
            Self::UnexpectedToken => f.write_str("Unexpected Token"),
            Self::UnexpectedEndOfInput => f.write_str("Unexpected End Of Input"),
        }
    }
}

/// An immutable error record pairing a source span with a category and a
/// detail message.
///
/// Renders as:
///
/// ```text
/// <category>:<details> 
/// File<filename>,line<line + 1>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}:{details} \nFile{filename},line{line}",
        filename = .start.filename,
        line = .start.line + 1)]
pub struct Diagnostic {
    start:   Position,
    end:     Position,
    kind:    ErrorKind,
    details: String,
}

impl Diagnostic {
    /// Creates a diagnostic covering `[start, end)`.
    #[must_use]
    pub fn new(start: Position, end: Position, kind: ErrorKind, details: impl Into<String>) -> Self {
        Self { start,
               end,
               kind,
               details: details.into() }
    }

    /// Creates a diagnostic covering `span`.
    #[must_use]
    pub fn at(span: &Span, kind: ErrorKind, details: impl Into<String>) -> Self {
        Self::new(span.start.clone(), span.end.clone(), kind, details)
    }

    /// An unrecognized character, quoted in the details.
    #[must_use]
    pub fn illegal_character(start: Position, end: Position, ch: char) -> Self {
        Self::new(start, end, ErrorKind::IllegalCharacter, format!("'{ch}'"))
    }

    /// First position covered by the diagnostic.
    #[must_use]
    pub const fn start(&self) -> &Position {
        &self.start
    }

    /// Position just past the covered range.
    #[must_use]
    pub const fn end(&self) -> &Position {
        &self.end
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }
}
