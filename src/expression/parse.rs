//! Expression parser
//!
//! This module provides the [`Parser`] struct and its error type. The grammar
//! is flat:
//!
//! ```text
//! expression := number (operator number)*
//! operator   := token whose first character is '+' or '-'
//! ```
//!
//! Each (operator, number) pair wraps everything parsed so far as its left
//! operand, so `5 + 2 - 3` becomes `((5 + 2) - 3)`.

use crate::expression::ast::{BinOp, Expr};
use crate::expression::lexer::{tokenize, Token};
use std::num::ParseIntError;
use thiserror::Error;
use tracing::{debug, trace};

/// Broad classification of a [`ParseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: bad number, empty operator, dangling operator
    Format,
    /// Operator character outside `+` and `-`
    UnsupportedOperator,
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty or only spaces
    #[error("Parse error: empty expression")]
    EmptyInput,

    /// A token in number position is not a valid 32-bit integer
    #[error("Parse error at token {position}: expected integer, found '{token}'")]
    InvalidNumber {
        token: String,
        position: usize,
        #[source]
        source: ParseIntError,
    },

    /// Empty token in operator position (doubled space)
    #[error("Parse error at token {position}: expected operator, found empty token")]
    EmptyOperator { position: usize },

    /// Operator at the end of the input with nothing to its right
    #[error("Parse error at token {position}: operator '{operator}' has no right operand")]
    MissingOperand { operator: char, position: usize },

    #[error("Parse error at token {position}: unsupported operator '{operator}'")]
    UnsupportedOperator { operator: char, position: usize },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            ParseError::EmptyInput
            | ParseError::InvalidNumber { .. }
            | ParseError::EmptyOperator { .. }
            | ParseError::MissingOperand { .. } => ErrorKind::Format,
        }
    }

    /// Index of the offending token, if the error points at one
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::InvalidNumber { position, .. }
            | ParseError::EmptyOperator { position }
            | ParseError::MissingOperand { position, .. }
            | ParseError::UnsupportedOperator { position, .. } => Some(*position),
        }
    }
}

/// Parse `input` into a left-associative expression tree.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::new(input).parse_expression()
}

/// Parser over a pre-split token stream
pub struct Parser<'a> {
    pub(crate) tokens: Vec<Token<'a>>,
    pub(crate) position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        let tokens = tokenize(source);
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole token stream as one expression
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        debug!(tokens = self.tokens.len(), "parsing expression");

        if self.is_at_end() {
            return Err(ParseError::EmptyInput);
        }

        let mut expr = Expr::literal(self.expect_number()?);

        while !self.is_at_end() {
            let (op, op_position) = self.expect_operator()?;
            if self.is_at_end() {
                return Err(ParseError::MissingOperand {
                    operator: op.symbol(),
                    position: op_position,
                });
            }
            let right = self.expect_number()?;
            trace!(%op, right, "folding operand");
            expr = Expr::binary(expr, op, Expr::literal(right));
        }

        Ok(expr)
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.peek().copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn expect_number(&mut self) -> Result<i32, ParseError> {
        let token = self.advance().ok_or(ParseError::EmptyInput)?;
        token
            .text
            .parse::<i32>()
            .map_err(|source| ParseError::InvalidNumber {
                token: token.text.to_string(),
                position: token.index,
                source,
            })
    }

    /// Only the first character of an operator token is significant.
    pub(crate) fn expect_operator(&mut self) -> Result<(BinOp, usize), ParseError> {
        let token = self.advance().ok_or(ParseError::EmptyInput)?;
        let c = token.first_char().ok_or(ParseError::EmptyOperator {
            position: token.index,
        })?;
        BinOp::from_char(c)
            .map(|op| (op, token.index))
            .ok_or(ParseError::UnsupportedOperator {
                operator: c,
                position: token.index,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("5 + 2 - 3", 4)]
    #[case("5", 5)]
    #[case("-5", -5)]
    #[case("+5 + +5", 10)]
    #[case("10 - 3 - 2", 5)]
    #[case("1 + 2 + 3 + 4", 10)]
    #[case("0 - 7", -7)]
    #[case("5 + 2 ", 7)]
    fn test_parse_and_evaluate(#[case] input: &str, #[case] expected: i32) {
        let expr = parse(input).unwrap();
        assert_eq!(expr.evaluate(), expected);
    }

    #[rstest]
    #[case("5 * 2", ErrorKind::UnsupportedOperator, Some(1))]
    #[case("5 / 2", ErrorKind::UnsupportedOperator, Some(1))]
    #[case("x", ErrorKind::Format, Some(0))]
    #[case("5 + y", ErrorKind::Format, Some(2))]
    #[case("5 +", ErrorKind::Format, Some(1))]
    #[case("5  + 2", ErrorKind::Format, Some(1))]
    #[case(" 5", ErrorKind::Format, Some(0))]
    #[case("", ErrorKind::Format, None)]
    #[case("99999999999", ErrorKind::Format, Some(0))]
    fn test_parse_errors(
        #[case] input: &str,
        #[case] kind: ErrorKind,
        #[case] position: Option<usize>,
    ) {
        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), kind, "{input:?} gave {err}");
        assert_eq!(err.position(), position);
    }

    #[test]
    fn test_tree_is_left_associative() {
        let expr = parse("5 + 2 - 3").unwrap();
        match &expr {
            Expr::Binary { left, op, right } => {
                assert_eq!(*op, BinOp::Sub);
                assert_eq!(**right, Expr::Literal(3));
                assert_eq!(
                    **left,
                    Expr::binary(Expr::literal(5), BinOp::Add, Expr::literal(2))
                );
            }
            _ => panic!("Expected binary expression"),
        }
    }

    #[test]
    fn test_operator_uses_first_character() {
        let expr = parse("5 +plus 2").unwrap();
        assert_eq!(expr.evaluate(), 7);
    }

    #[test]
    fn test_dangling_operator_is_reported() {
        match parse("1 - 2 +") {
            Err(ParseError::MissingOperand { operator, position }) => {
                assert_eq!(operator, '+');
                assert_eq!(position, 3);
            }
            other => panic!("Expected missing operand, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_operator_checked_before_operand() {
        match parse("5 * x") {
            Err(ParseError::UnsupportedOperator { operator, .. }) => assert_eq!(operator, '*'),
            other => panic!("Expected unsupported operator, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let err = parse("5 % 2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error at token 1: unsupported operator '%'"
        );
    }
}
