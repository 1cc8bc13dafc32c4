/// The evaluator module reduces a token sequence to a single value.
///
/// Implements the two-stack precedence engine: one stack of operands, one of
/// pending operators and open groups. Division by zero is detected here.
///
/// # Responsibilities
/// - Applies `+ - * /` with the usual precedence and left associativity.
/// - Evaluates parenthesized groups first.
/// - Reports division by zero without returning a partial result.
pub mod evaluator;
/// The lexer module turns normalized text into tokens.
///
/// Splits on whitespace and classifies every piece as a number, an operator
/// or a parenthesis.
pub mod lexer;
/// The normalizer module makes implicit operations explicit.
///
/// A fixed sequence of text rewrites spaces out every symbol, inserts the
/// `*` implied by juxtaposition, and turns unary minus into negative literals
/// or `-1 *` groups.
///
/// # Responsibilities
/// - Produces text that can be split on whitespace into tokens.
/// - Keeps each rewrite a separate, testable pass.
pub mod normalizer;
/// The validator module rejects malformed input before evaluation.
///
/// Checks parentheses, the character set and operator placement on the raw
/// text, in that order, and reports the first failure.
pub mod validator;
