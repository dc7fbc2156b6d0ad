use std::{fmt, mem};

use crate::interpreter::{lexer::Token, position::Span};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl BinaryOperator {
    /// The token this operator was parsed from.
    #[must_use]
    pub const fn token(self) -> Token {
        match self {
            Self::Add => Token::Plus,
            Self::Sub => Token::Minus,
            Self::Mul => Token::Mul,
            Self::Div => Token::Div,
            Self::Mod => Token::Mod,
        }
    }

    /// The source symbol, e.g. `+`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

/// An abstract syntax tree node representing an arithmetic expression.
///
/// Leaves are numbers and every internal node is a binary operation whose
/// operands it owns outright, so a tree can neither share subtrees nor contain
/// cycles. Each node remembers the span of source it was parsed from.
///
/// A chain like `1 + 1 + ... + 1` is as deep as it is long, so dropping,
/// counting and displaying walk the tree with an explicit stack. The derived
/// `Debug`, `Clone` and `PartialEq` still recurse once per level.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal; `token` is always `Token::Int` or `Token::Float`.
    Number {
        /// The literal token.
        token: Token,
        /// Where the literal appeared.
        span:  Span,
    },
    /// A binary operation such as `1 + 2`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// From the start of `left` to the end of `right`.
        span:  Span,
    },
}

impl Expr {
    /// The source range covered by this node.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::Number { span, .. } | Self::BinaryOp { span, .. } => span,
        }
    }

    /// Folds `left op right` into a new node spanning both operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        let span = left.span().to(right.span());
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         span }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            count += 1;
            if let Self::BinaryOp { left, right, .. } = node {
                pending.push(right);
                pending.push(left);
            }
        }

        count
    }

    /// Moves any operation children into `pending`, leaving number leaves in
    /// their place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        if let Self::BinaryOp { left, right, span, .. } = self {
            for child in [left, right] {
                if matches!(**child, Self::BinaryOp { .. }) {
                    let leaf = Self::Number { token: Token::Int(0),
                                              span:  span.clone(), };
                    pending.push(mem::replace(&mut **child, leaf));
                }
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        // Each popped node only has leaves left when it goes out of scope.
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

enum Piece<'a> {
    Node(&'a Expr),
    Text(&'static str),
}

/// Writes numbers as their token and operations as
/// `(left,OPERATOR,right)`, e.g. `(INT:4,PLUS,(INT:5,MUL,INT:2))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Self::Number { token, .. }) => write!(f, "{token}")?,
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    pending.extend([Piece::Text(")"),
                                    Piece::Node(right),
                                    Piece::Text(","),
                                    Piece::Text(op.token().name()),
                                    Piece::Text(","),
                                    Piece::Node(left)]);
                    f.write_str("(")?;
                },
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::position::Position;

    fn number(token: Token, from: usize, to: usize) -> Expr {
        let mut start = Position::new("test.dd", "1+2*3");
        for _ in 0..from {
            start.advance(' ');
        }
        let mut end = start.clone();
        for _ in from..to {
            end.advance(' ');
        }
        Expr::Number { token,
                       span: Span::new(start, end) }
    }

    #[test]
    fn binary_spans_both_operands() {
        let expr = Expr::binary(number(Token::Int(1), 0, 1),
                                BinaryOperator::Add,
                                number(Token::Int(2), 2, 3));
        assert_eq!(expr.span().start.index, 0);
        assert_eq!(expr.span().end.index, 3);
    }

    #[test]
    fn display_nests_parenthesised_operations() {
        let product = Expr::binary(number(Token::Int(2), 2, 3),
                                   BinaryOperator::Mul,
                                   number(Token::Float(3.5), 4, 7));
        let sum = Expr::binary(number(Token::Int(1), 0, 1), BinaryOperator::Add, product);

        assert_eq!(sum.to_string(), "(INT:1,PLUS,(INT:2,MUL,FLOAT:3.5))");
        assert_eq!(sum.node_count(), 5);
    }

    fn chain(length: usize) -> Expr {
        let mut expr = number(Token::Int(1), 0, 1);
        for _ in 1..length {
            expr = Expr::binary(expr, BinaryOperator::Add, number(Token::Int(1), 0, 1));
        }
        expr
    }

    #[test]
    fn deep_left_chain_counts_and_drops_without_recursion() {
        let expr = chain(200_000);
        assert_eq!(expr.node_count(), 399_999);
        drop(expr);
    }

    #[test]
    fn deep_left_chain_displays() {
        let text = chain(50_000).to_string();
        assert_eq!(text.matches('(').count(), 49_999);
        assert!(text.trim_start_matches('(')
                    .starts_with("INT:1,PLUS,INT:1),PLUS,INT:1)"));
        assert!(text.ends_with(",PLUS,INT:1)"));
        assert_eq!(text.matches("PLUS").count(), 49_999);
    }

    #[test]
    fn operators_map_back_to_tokens() {
        assert_eq!(BinaryOperator::Mod.token(), Token::Mod);
        assert_eq!(BinaryOperator::Sub.symbol(), "-");
    }
}
