//! Arithmetic expression interpreter
//!
//! This module turns a whitespace-delimited arithmetic string into an
//! evaluable tree:
//! - [`lexer`]: Tokenization (source text → tokens, split on single spaces)
//! - [`parse`]: Parsing (tokens → left-associative [`Expr`] tree)
//! - [`ast`]: Tree definitions and evaluation
//!
//! # Supported Input
//!
//! `n0 op1 n1 op2 n2 ...` where every `n` is a 32-bit signed integer and every
//! `op` is `+` or `-`. There is no precedence and no grouping: operators are
//! applied strictly left to right.

pub mod ast;
pub mod lexer;
pub mod parse;

pub use ast::{BinOp, EvalError, Expr};
pub use parse::{parse, ErrorKind, ParseError, Parser};

/// Evaluate an expression tree, wrapping on overflow.
pub fn evaluate(expr: &Expr) -> i32 {
    expr.evaluate()
}

/// Parse and evaluate `input` in one step.
pub fn eval_str(input: &str) -> Result<i32, ParseError> {
    Ok(parse(input)?.evaluate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_str() {
        assert_eq!(eval_str("5 + 2 - 3").unwrap(), 4);
        assert_eq!(eval_str("-10 - -10").unwrap(), 0);
    }

    #[test]
    fn test_eval_str_propagates_parse_errors() {
        let err = eval_str("5 * 2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperator);
    }

    #[test]
    fn test_evaluate_free_function() {
        let expr = parse("1 + 1").unwrap();
        assert_eq!(evaluate(&expr), expr.evaluate());
    }
}
