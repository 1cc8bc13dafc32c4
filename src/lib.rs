//! # stackcalc
//!
//! stackcalc evaluates single-line arithmetic expressions written in infix
//! notation. It understands numbers, `+ - * /`, parentheses, implicit
//! multiplication such as `2(3)` or `(2)(3)`, and unary minus.
//!
//! An expression goes through four stages: static validation of the raw
//! text, normalization into explicit tokens, tokenization, and a two-stack
//! precedence evaluation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::ExpressionError,
    interpreter::{evaluator::Evaluator, lexer::tokenize, normalizer::normalize, validator::validate},
};

/// Provides the error types for expressions and the stack container.
///
/// # Responsibilities
/// - Defines the closed set of expression errors, each with its fixed label.
/// - Defines the error raised when reading from an empty stack.
pub mod error;
/// Orchestrates validation, normalization, tokenization and evaluation.
///
/// # Responsibilities
/// - Rejects malformed input before any evaluation state exists.
/// - Rewrites implicit operations into explicit tokens.
/// - Evaluates tokens with operator precedence.
pub mod interpreter;
/// General utilities shared by the interpreter stages.
///
/// # Responsibilities
/// - Provide the generic stack used by the evaluator.
/// - Provide depth-tracked parenthesis scanning.
pub mod util;

/// Evaluates an expression and formats the outcome.
///
/// On success the result is the input exactly as given, followed by `=` and
/// the value. The value uses Rust's default `f64` formatting, so integral
/// results carry no trailing `.0`. On failure the result is the label of the
/// error, one of `"Paren Error: "`, `"Op Error: "`, `"Data Error: "` or
/// `"Div0 Error: "`.
///
/// # Examples
/// ```
/// use stackcalc::evaluate;
///
/// assert_eq!(evaluate("2+3*4"), "2+3*4=14");
/// assert_eq!(evaluate("(2)(3)"), "(2)(3)=6");
/// assert_eq!(evaluate("7/2"), "7/2=3.5");
/// assert_eq!(evaluate("(2+3"), "Paren Error: ");
/// assert_eq!(evaluate("5/(2-2)"), "Div0 Error: ");
/// ```
#[must_use]
pub fn evaluate(expression: &str) -> String {
    match evaluate_value(expression) {
        Ok(value) => format!("{expression}={value}"),
        Err(error) => {
            debug!(expression, %error, runtime = !error.is_static(), "evaluation failed");
            error.label().to_string()
        },
    }
}

/// Evaluates an expression and returns its numeric value.
///
/// Runs the same pipeline as [`evaluate`] without formatting the outcome.
/// Each call builds its own evaluation stacks, so calls never affect each
/// other and may run on several threads at once.
///
/// # Errors
/// Returns the [`ExpressionError`] describing why the expression could not
/// be evaluated.
///
/// # Examples
/// ```
/// use stackcalc::{error::ExpressionError, evaluate_value};
///
/// assert_eq!(evaluate_value("-5+3"), Ok(-2.0));
/// assert_eq!(evaluate_value("3-(2)"), Ok(1.0));
/// assert_eq!(evaluate_value("2 3"), Err(ExpressionError::Data));
/// ```
pub fn evaluate_value(expression: &str) -> Result<f64, ExpressionError> {
    validate(expression)?;

    let normalized = normalize(expression);
    let tokens = tokenize(&normalized)?;

    Evaluator::with_capacity(tokens.len()).run(&tokens)
}
