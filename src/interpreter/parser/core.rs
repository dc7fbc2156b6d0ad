use tracing::debug;

use crate::{
    ast::Expr,
    error::{Diagnostic, ErrorKind},
    interpreter::{
        lexer::Token,
        parser::binary::{ADDITIVE, MULTIPLICATIVE, parse_binary_op},
        position::{Position, Span},
    },
};

pub type ParseResult<T> = Result<T, Diagnostic>;

/// Recursive-descent parser over a tokenized source.
///
/// Grammar, lowest precedence first:
///
/// ```text
/// expr   := term   (("+" | "-") term)*
/// term   := factor (("*" | "/" | "%") factor)*
/// factor := INT | FLOAT
/// ```
///
/// Parsing starts at the first token. Running out of tokens is reported at
/// the end-of-input position handed to [`Parser::new`].
pub struct Parser<'a> {
    tokens:       &'a [(Token, Span)],
    index:        usize,
    end_of_input: Span,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned on the first token.
    ///
    /// `end_of_input` is where the source ends; it locates diagnostics raised
    /// when the tokens run out.
    #[must_use]
    pub fn new(tokens: &'a [(Token, Span)], end_of_input: Position) -> Self {
        Self { tokens,
               index: 0,
               end_of_input: Span::new(end_of_input.clone(), end_of_input) }
    }

    /// The token under the cursor, or `None` once every token is consumed.
    #[must_use]
    pub fn current(&self) -> Option<&'a (Token, Span)> {
        self.tokens.get(self.index)
    }

    /// Moves to the next token and returns it.
    ///
    /// Past the last token the cursor stays at the end and `None` is
    /// returned.
    pub fn advance(&mut self) -> Option<&'a (Token, Span)> {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
        self.current()
    }

    /// Parses the whole token sequence as one expression.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the sequence is empty or ends where an
    ///   operand is required.
    /// - `UnexpectedToken` if an operand position holds an operator or a
    ///   parenthesis, or if tokens remain after a complete expression.
    ///
    /// # Example
    /// ```
    /// use ddexpr::interpreter::{lexer::Tokenizer, parser::Parser};
    ///
    /// let mut tokenizer = Tokenizer::new("test.dd", "1 - 2 - 3");
    /// let tokens = tokenizer.tokenize().unwrap();
    /// let expr = Parser::new(&tokens, tokenizer.position().clone()).parse()
    ///                                                              .unwrap();
    /// assert_eq!(expr.to_string(), "((INT:1,MINUS,INT:2),MINUS,INT:3)");
    /// ```
    pub fn parse(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expr()?;

        if let Some((token, span)) = self.current() {
            debug!(%token, index = span.start.index, "tokens left after expression");
            return Err(Diagnostic::at(span,
                                      ErrorKind::UnexpectedToken,
                                      format!("expected an operator, found {token}")));
        }

        Ok(expr)
    }

    /// `expr := term (("+" | "-") term)*`
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        parse_binary_op(self, Self::parse_term, ADDITIVE)
    }

    /// `term := factor (("*" | "/" | "%") factor)*`
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        parse_binary_op(self, Self::parse_factor, MULTIPLICATIVE)
    }

    /// `factor := INT | FLOAT`
    ///
    /// There is no rule for parentheses or unary signs, so those tokens are
    /// rejected here like any other non-number.
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current() {
            Some((token, span)) if token.is_number() => {
                self.advance();
                Ok(Expr::Number { token: *token,
                                  span:  span.clone(), })
            },
            Some((token, span)) => {
                Err(Diagnostic::at(span,
                                   ErrorKind::UnexpectedToken,
                                   format!("expected a number, found {token}")))
            },
            None => Err(Diagnostic::at(&self.end_of_input,
                                       ErrorKind::UnexpectedEndOfInput,
                                       "expected a number")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::BinaryOperator, interpreter::lexer::Tokenizer};

    fn parse(src: &str) -> ParseResult<Expr> {
        let mut tokenizer = Tokenizer::new("test.dd", src);
        let tokens = tokenizer.tokenize()?;
        Parser::new(&tokens, tokenizer.position().clone()).parse()
    }

    #[test]
    fn first_token_is_not_skipped() {
        let expr = parse("42").unwrap();
        assert_eq!(expr.to_string(), "INT:42");
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expr = parse("1-2-3").unwrap();
        let Expr::BinaryOp { left, op, right, .. } = &expr else {
            panic!("expected a binary operation, got {expr}");
        };
        assert_eq!(*op, BinaryOperator::Sub);
        assert_eq!(left.to_string(), "(INT:1,MINUS,INT:2)");
        assert_eq!(right.to_string(), "INT:3");
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse("2+3*4").unwrap();
        let Expr::BinaryOp { op, right, .. } = &expr else {
            panic!("expected a binary operation, got {expr}");
        };
        assert_eq!(*op, BinaryOperator::Add);
        assert_eq!(right.to_string(), "(INT:3,MUL,INT:4)");
    }

    #[test]
    fn modulo_shares_the_term_tier() {
        let expr = parse("7 % 4 * 2 - 1").unwrap();
        assert_eq!(expr.to_string(), "(((INT:7,MOD,INT:4),MUL,INT:2),MINUS,INT:1)");
    }

    #[test]
    fn mixed_int_and_float_operands() {
        let expr = parse("1.5 / 3").unwrap();
        assert_eq!(expr.to_string(), "(FLOAT:1.5,DIV,INT:3)");
    }

    #[test]
    fn root_span_covers_the_expression() {
        let expr = parse(" 10 + 2 ").unwrap();
        assert_eq!(expr.span().start.index, 1);
        assert_eq!(expr.span().end.index, 7);
    }

    #[test]
    fn empty_input_is_unexpected_end() {
        let err = parse("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.start().index, 0);
    }

    #[test]
    fn dangling_operator_is_unexpected_end() {
        let err = parse("4 *").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.start().index, 3);
    }

    #[test]
    fn leading_operator_is_unexpected_token() {
        let err = parse("-3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.details(), "expected a number, found MINUS");
        assert_eq!(err.start().index, 0);
    }

    #[test]
    fn parentheses_are_not_part_of_the_grammar() {
        let err = parse("(1 + 2)").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.details(), "expected a number, found LPAREN");
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = parse("1 + 2 3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.details(), "expected an operator, found INT:3");
        assert_eq!(err.start().index, 6);

        let err = parse("5 )").unwrap_err();
        assert_eq!(err.details(), "expected an operator, found RPAREN");
    }

    #[test]
    fn advance_stops_at_the_end() {
        let tokens = Tokenizer::new("test.dd", "1 +").tokenize().unwrap();
        let mut parser = Parser::new(&tokens, tokens[1].1.end.clone());

        assert_eq!(parser.advance().map(|(tok, _)| *tok), Some(Token::Plus));
        assert!(parser.advance().is_none());
        assert!(parser.advance().is_none());
        assert!(parser.current().is_none());
    }
}
