// Expression tree definitions for the arithmetic interpreter

use std::convert::Infallible;
use std::fmt;
use thiserror::Error;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
}

impl BinOp {
    /// Map an operator character to its operator, if supported.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
        }
    }

    /// Apply with two's complement wrapping.
    #[inline]
    pub fn apply(self, left: i32, right: i32) -> i32 {
        match self {
            BinOp::Add => left.wrapping_add(right),
            BinOp::Sub => left.wrapping_sub(right),
        }
    }

    #[inline]
    pub fn checked_apply(self, left: i32, right: i32) -> Option<i32> {
        match self {
            BinOp::Add => left.checked_add(right),
            BinOp::Sub => left.checked_sub(right),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors raised by [`Expr::checked_evaluate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Integer overflow in arithmetic operation
    #[error("Integer overflow in operation: {operation}")]
    Overflow { operation: String },
}

/// Expression tree nodes.
///
/// Operands are boxed and exclusively owned by their parent, so a tree is
/// acyclic and, having no mutators, immutable once built.
///
/// Parsed trees lean left with one level per term, so every walk over a tree
/// (evaluation, formatting, cloning, comparison, drop) keeps its own work
/// stack on the heap instead of recursing.
#[derive(Debug)]
pub enum Expr {
    /// Constant leaf
    Literal(i32),
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
}

/// Pending work for [`Expr::fold`]
enum Step<'a> {
    Visit(&'a Expr),
    Combine(BinOp),
}

impl Expr {
    pub fn literal(value: i32) -> Self {
        Expr::Literal(value)
    }

    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Post-order fold over the tree: `leaf` maps literals, `combine` merges
    /// the results of a node's left and right operands.
    fn fold<T, E>(
        &self,
        mut leaf: impl FnMut(i32) -> Result<T, E>,
        mut combine: impl FnMut(T, BinOp, T) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut steps = vec![Step::Visit(self)];
        let mut results: Vec<T> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Literal(n)) => results.push(leaf(*n)?),
                Step::Visit(Expr::Binary { left, op, right }) => {
                    steps.push(Step::Combine(*op));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Combine(op) => {
                    let (Some(b), Some(a)) = (results.pop(), results.pop()) else {
                        unreachable!("both operands are folded before their node");
                    };
                    results.push(combine(a, op, b)?);
                }
            }
        }

        match results.pop() {
            Some(result) => Ok(result),
            None => unreachable!("a tree always has at least one leaf"),
        }
    }

    /// Evaluate the tree. Arithmetic is 32-bit signed and wraps on overflow,
    /// so this never fails.
    pub fn evaluate(&self) -> i32 {
        let result: Result<i32, Infallible> =
            self.fold(Ok, |a, op, b| Ok(op.apply(a, b)));
        match result {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Evaluate the tree, reporting overflow instead of wrapping.
    pub fn checked_evaluate(&self) -> Result<i32, EvalError> {
        self.fold(Ok, |a, op, b| {
            op.checked_apply(a, b).ok_or_else(|| EvalError::Overflow {
                operation: format!("{} {} {}", a, op, b),
            })
        })
    }

    /// Number of literal leaves in the tree
    pub fn operand_count(&self) -> usize {
        let result: Result<usize, Infallible> = self.fold(|_| Ok(1), |a, _, b| Ok(a + b));
        match result {
            Ok(count) => count,
            Err(never) => match never {},
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        let result: Result<Expr, Infallible> = self.fold(
            |n| Ok(Expr::Literal(n)),
            |a, op, b| Ok(Expr::binary(a, op, b)),
        );
        match result {
            Ok(expr) => expr,
            Err(never) => match never {},
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some(pair) = pairs.pop() {
            match pair {
                (Expr::Literal(a), Expr::Literal(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (
                    Expr::Binary { left, op, right },
                    Expr::Binary {
                        left: other_left,
                        op: other_op,
                        right: other_right,
                    },
                ) => {
                    if op != other_op {
                        return false;
                    }
                    pairs.push((&**right, &**other_right));
                    pairs.push((&**left, &**other_left));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expr {}

impl Drop for Expr {
    fn drop(&mut self) {
        // Detach children onto a flat list so each node drops with literal
        // operands only.
        let mut detached = Vec::new();
        if let Expr::Binary { left, right, .. } = self {
            detached.push(std::mem::replace(&mut **left, Expr::Literal(0)));
            detached.push(std::mem::replace(&mut **right, Expr::Literal(0)));
        }
        while let Some(mut node) = detached.pop() {
            if let Expr::Binary { left, right, .. } = &mut node {
                detached.push(std::mem::replace(&mut **left, Expr::Literal(0)));
                detached.push(std::mem::replace(&mut **right, Expr::Literal(0)));
            }
        }
    }
}

/// Pending output for [`Expr`]'s `Display`
enum Piece<'a> {
    Node(&'a Expr),
    Operator(BinOp),
    Close,
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Expr::Literal(n)) => write!(f, "{}", n)?,
                Piece::Node(Expr::Binary { left, op, right }) => {
                    f.write_str("(")?;
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(right));
                    pieces.push(Piece::Operator(*op));
                    pieces.push(Piece::Node(left));
                }
                Piece::Operator(op) => write!(f, " {} ", op)?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}
