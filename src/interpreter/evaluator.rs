use tracing::{trace, warn};

use crate::{
    error::{ExpressionError, StackError},
    interpreter::lexer::{Operator, Token},
    util::stack::Stack,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, ExpressionError>;

/// An entry on the operator stack.
///
/// Closing parentheses are never stored: they drain the stack down to their
/// matching `(` as soon as they are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A pending binary operator.
    Operator(Operator),
    /// An open group.
    LeftParen,
}

/// The two-stack precedence engine.
///
/// Operands wait on one stack and operators on the other. An incoming
/// operator that outranks the operator on top is pushed; otherwise the stack
/// is drained until it does outrank the top, which yields the usual
/// precedence rules with left associativity. Every evaluator owns its stacks,
/// so separate evaluations never share state.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{evaluator::Evaluator, lexer::tokenize};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// assert_eq!(Evaluator::new().run(&tokens), Ok(14.0));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Values waiting for an operator.
    operands:  Stack<f64>,
    /// Operators and open groups waiting for their right-hand operand.
    operators: Stack<Symbol>,
}

impl Evaluator {
    /// Creates an evaluator with two empty stacks.
    #[must_use]
    pub const fn new() -> Self {
        Self { operands:  Stack::new(),
               operators: Stack::new(), }
    }

    /// Creates an evaluator whose stacks can hold `capacity` entries each
    /// without reallocating. The token count of an expression is a safe bound.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { operands:  Stack::with_capacity(capacity),
               operators: Stack::with_capacity(capacity), }
    }

    /// Evaluates a token sequence and returns its value.
    ///
    /// Consumes the evaluator; its stacks are dropped on return whether or not
    /// evaluation succeeds.
    ///
    /// # Errors
    /// - [`ExpressionError::DivisionByZero`] if a divisor is exactly zero.
    /// - [`ExpressionError::Op`] if an operator is missing an operand.
    /// - [`ExpressionError::Paren`] if a group is left open.
    pub fn run(mut self, tokens: &[Token]) -> EvalResult<f64> {
        for &token in tokens {
            match token {
                Token::Number(value) => self.operands.push(value),
                Token::LeftParen => self.operators.push(Symbol::LeftParen),
                Token::Operator(op) => self.push_operator(op)?,
                Token::RightParen => self.close_group()?,
            }
            trace!(%token, operands = %self.operands, "consumed token");
        }

        while let Ok(&symbol) = self.operators.peek() {
            if symbol == Symbol::LeftParen {
                return Err(ExpressionError::Paren);
            }
            self.reduce()?;
        }

        let result = self.operands.pop().map_err(underflow)?;

        if !self.operands.is_empty() {
            warn!(leftover = %self.operands, "operands left after evaluation");
            return Err(ExpressionError::Data);
        }

        Ok(result)
    }

    /// Pushes `op`, first draining every pending operator it does not
    /// outrank.
    fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        while let Ok(&Symbol::Operator(top)) = self.operators.peek() {
            if op.outranks(top) {
                break;
            }
            self.reduce()?;
        }

        self.operators.push(Symbol::Operator(op));
        Ok(())
    }

    /// Drains the operator stack down to the nearest `(` and discards it.
    fn close_group(&mut self) -> EvalResult<()> {
        loop {
            match *self.operators.peek().map_err(underflow)? {
                Symbol::LeftParen => {
                    self.operators.pop().map_err(underflow)?;
                    return Ok(());
                },
                Symbol::Operator(_) => self.reduce()?,
            }
        }
    }

    /// Pops two operands and one operator, applies it, and pushes the result.
    fn reduce(&mut self) -> EvalResult<()> {
        let right = self.operands.pop().map_err(underflow)?;
        let left = self.operands.pop().map_err(underflow)?;

        let op = match self.operators.pop().map_err(underflow)? {
            Symbol::Operator(op) => op,
            Symbol::LeftParen => return Err(ExpressionError::Paren),
        };

        self.operands.push(apply(op, left, right)?);
        Ok(())
    }
}

/// Computes `left op right`.
///
/// # Errors
/// [`ExpressionError::DivisionByZero`] if `op` is `/` and `right` is zero.
///
/// # Example
/// ```
/// use stackcalc::{
///     error::ExpressionError,
///     interpreter::{evaluator::apply, lexer::Operator},
/// };
///
/// assert_eq!(apply(Operator::Sub, 7.0, 2.0), Ok(5.0));
/// assert_eq!(apply(Operator::Div, 1.0, 0.0), Err(ExpressionError::DivisionByZero));
/// ```
pub fn apply(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0.0 {
                return Err(ExpressionError::DivisionByZero);
            }
            Ok(left / right)
        },
    }
}

/// Maps a stack underflow to the error reported to the caller.
///
/// Reached only when validation let through an operator without operands,
/// as in `(+2)`.
fn underflow(error: StackError) -> ExpressionError {
    warn!(%error, "operator without operands reached the evaluator");
    ExpressionError::Op
}
