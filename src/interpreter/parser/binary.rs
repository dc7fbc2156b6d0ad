use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Operators of the `expr` tier, lowest precedence.
pub const ADDITIVE: &[BinaryOperator] = &[BinaryOperator::Add, BinaryOperator::Sub];

/// Operators of the `term` tier.
pub const MULTIPLICATIVE: &[BinaryOperator] =
    &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod];

/// Parses a left-associative chain `operand (op operand)*`.
///
/// Parses one node with `operand`, then, while the current token maps to an
/// operator in `operators`, consumes it, parses the right-hand side with
/// `operand` again and folds both into a new left node. `1 - 2 - 3` therefore
/// becomes `(1 - 2) - 3`.
///
/// Precedence comes only from which rule is passed as `operand`: the `expr`
/// tier folds over `term`, which folds over `factor`.
///
/// # Errors
/// Propagates any error from `operand`.
pub fn parse_binary_op<'a, F>(parser: &mut Parser<'a>,
                              mut operand: F,
                              operators: &[BinaryOperator])
                              -> ParseResult<Expr>
    where F: FnMut(&mut Parser<'a>) -> ParseResult<Expr>
{
    let mut left = operand(parser)?;

    while let Some((token, _)) = parser.current()
          && let Some(op) = token_to_binary_operator(token)
          && operators.contains(&op)
    {
        parser.advance();
        let right = operand(parser)?;
        trace!(op = op.symbol(), "folding binary operation");
        left = Expr::binary(left, op, right);
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and parentheses.
///
/// # Example
/// ```
/// use ddexpr::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Mul => Some(BinaryOperator::Mul),
        Token::Div => Some(BinaryOperator::Div),
        Token::Mod => Some(BinaryOperator::Mod),
        Token::Int(_) | Token::Float(_) | Token::LParen | Token::RParen => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::Tokenizer;

    fn fold(src: &str, operators: &[BinaryOperator]) -> ParseResult<Expr> {
        let mut tokenizer = Tokenizer::new("test.dd", src);
        let tokens = tokenizer.tokenize()?;
        let mut parser = Parser::new(&tokens, tokenizer.position().clone());
        parse_binary_op(&mut parser, Parser::parse_factor, operators)
    }

    #[test]
    fn folds_to_the_left() {
        let expr = fold("8 / 4 / 2", MULTIPLICATIVE).unwrap();
        assert_eq!(expr.to_string(), "((INT:8,DIV,INT:4),DIV,INT:2)");
    }

    #[test]
    fn stops_at_operators_outside_the_set() {
        let tokens = Tokenizer::new("test.dd", "2 * 3 + 4").tokenize().unwrap();
        let end = tokens.last().unwrap().1.end.clone();
        let mut parser = Parser::new(&tokens, end);

        let expr = parse_binary_op(&mut parser, Parser::parse_factor, MULTIPLICATIVE).unwrap();

        assert_eq!(expr.to_string(), "(INT:2,MUL,INT:3)");
        assert_eq!(parser.current().map(|(tok, _)| *tok), Some(Token::Plus));
    }

    #[test]
    fn single_operand_is_returned_unchanged() {
        let expr = fold("7", ADDITIVE).unwrap();
        assert_eq!(expr.to_string(), "INT:7");
    }

    #[test]
    fn missing_right_operand_is_an_error() {
        assert!(fold("1 +", ADDITIVE).is_err());
    }

    #[test]
    fn operator_sets_are_disjoint() {
        assert!(ADDITIVE.iter().all(|op| !MULTIPLICATIVE.contains(op)));
    }
}
