use std::sync::Arc;

/// A location inside a named source text.
///
/// The tokenizer owns exactly one live `Position` and moves it forward one
/// character at a time. Tokens, AST nodes and diagnostics hold clones taken at
/// the moment they were created, so later movement of the cursor never leaks
/// into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Character offset of the current character.
    pub index:    usize,
    /// Zero-based line number.
    pub line:     usize,
    /// Zero-based column, reset after every newline.
    pub col:      usize,
    /// Name of the source, used when rendering diagnostics.
    pub filename: Arc<str>,
    /// The complete source text the position points into.
    pub source:   Arc<str>,
}

impl Position {
    /// Creates a cursor sitting on the first character of `source`.
    #[must_use]
    pub fn new(filename: impl Into<Arc<str>>, source: impl Into<Arc<str>>) -> Self {
        Self { index:    0,
               line:     0,
               col:      0,
               filename: filename.into(),
               source:   source.into(), }
    }

    /// Moves past `current`, the character the cursor was sitting on.
    ///
    /// Stepping over `'\n'` starts a new line at column 0; any other
    /// character only bumps the column.
    ///
    /// # Example
    /// ```
    /// use ddexpr::interpreter::position::Position;
    ///
    /// let mut pos = Position::new("test.dd", "1\n2");
    /// pos.advance('1').advance('\n');
    /// assert_eq!((pos.index, pos.line, pos.col), (2, 1, 0));
    /// ```
    pub fn advance(&mut self, current: char) -> &mut Self {
        self.index += 1;
        self.col += 1;

        if current == '\n' {
            self.line += 1;
            self.col = 0;
        }

        self
    }

    /// The character under the cursor, if any remain.
    #[must_use]
    pub fn current_char(&self) -> Option<char> {
        self.source.chars().nth(self.index)
    }
}

/// Half-open source range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// First position covered by the span.
    pub start: Position,
    /// Position just past the last covered character.
    pub end:   Position,
}

impl Span {
    /// Builds a span from two snapshots of the same cursor.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span from the start of `self` to the end of `other`.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        Self { start: self.start.clone(),
               end:   other.end.clone(), }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_bumps_column_on_the_same_line() {
        let mut pos = Position::new("test.dd", "12");
        pos.advance('1');
        assert_eq!(pos.index, 1);
        assert_eq!(pos.line, 0);
        assert_eq!(pos.col, 1);
    }

    #[test]
    fn advance_over_newline_resets_column() {
        let mut pos = Position::new("test.dd", "ab\ncd");
        pos.advance('a').advance('b');
        assert_eq!(pos.col, 2);

        pos.advance('\n');
        assert_eq!(pos.index, 3);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.col, 0);
        assert_eq!(pos.current_char(), Some('c'));
    }

    #[test]
    fn clone_is_independent_of_the_live_cursor() {
        let mut cursor = Position::new("test.dd", "1+2");
        let snapshot = cursor.clone();

        cursor.advance('1').advance('+');

        assert_eq!(snapshot.index, 0);
        assert_eq!(snapshot.col, 0);
        assert_eq!(cursor.index, 2);
    }

    #[test]
    fn current_char_is_none_past_the_end() {
        let mut pos = Position::new("test.dd", "7");
        assert_eq!(pos.current_char(), Some('7'));
        pos.advance('7');
        assert_eq!(pos.current_char(), None);
    }

    #[test]
    fn span_to_joins_two_spans() {
        let mut cursor = Position::new("test.dd", "1+2");
        let first = Span::new(cursor.clone(), cursor.advance('1').clone());
        cursor.advance('+');
        let second = Span::new(cursor.clone(), cursor.advance('2').clone());

        let joined = first.to(&second);
        assert_eq!(joined.start.index, 0);
        assert_eq!(joined.end.index, 3);
    }
}
