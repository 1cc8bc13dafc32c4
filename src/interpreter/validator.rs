use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{error::ExpressionError, util::parens::is_balanced};

// `(?-u)` keeps `\s` to ASCII whitespace, vertical tab included.

static EMPTY_GROUP: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?-u)\(\s*\)"));
static ALPHABET: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?-u)^[0-9+\-*/().\s]+$"));
static ADJACENT_NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?-u)[0-9]+(\.[0-9]+)?\s+[0-9]+(\.[0-9]+)?"));
static DOUBLED_OPERATOR: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?-u)[+*/]\s*[+*/]"));
static TRAILING_OPERATOR: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?-u)[+\-*/]\s*$"));
static LEADING_OPERATOR: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?-u)^\s*[+*/]"));
static CHAINED_MINUS: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?-u)-\s*[+\-*/]"));
static DANGLING_OPERATOR: LazyLock<Regex> = LazyLock::new(|| pattern(r"[+\-*/]\)[+\-*/]"));

/// Checks a raw expression for static errors before anything is evaluated.
///
/// The checks run in a fixed order and the first failure decides the error:
///
/// 1. [`check_parentheses`] reports [`ExpressionError::Paren`].
/// 2. [`check_data`] reports [`ExpressionError::Data`].
/// 3. [`check_operators`] reports [`ExpressionError::Op`].
///
/// Validation looks at the text exactly as the caller wrote it. The
/// normalizer later synthesizes operators (implicit `*`, the `+` before a
/// negated group) that these checks must never see.
///
/// # Errors
/// Returns the error of the first check that fails.
///
/// # Example
/// ```
/// use stackcalc::{error::ExpressionError, interpreter::validator::validate};
///
/// assert_eq!(validate("2(3+4)"), Ok(()));
/// assert_eq!(validate("(2+3"), Err(ExpressionError::Paren));
/// assert_eq!(validate("2 3"), Err(ExpressionError::Data));
/// assert_eq!(validate("2++3"), Err(ExpressionError::Op));
/// ```
pub fn validate(raw: &str) -> Result<(), ExpressionError> {
    let result = check_parentheses(raw).and_then(|()| check_data(raw))
                                       .and_then(|()| check_operators(raw));

    if let Err(error) = result {
        debug!(raw, %error, "rejected expression");
    }

    result
}

/// Fails if the parentheses are unbalanced or enclose nothing.
///
/// # Errors
/// [`ExpressionError::Paren`] if the depth ever drops below zero, does not end
/// at zero, or a `(` is followed by only whitespace and then `)`.
pub fn check_parentheses(raw: &str) -> Result<(), ExpressionError> {
    if !is_balanced(raw) || EMPTY_GROUP.is_match(raw) {
        return Err(ExpressionError::Paren);
    }

    Ok(())
}

/// Fails on characters outside the expression alphabet and on missing
/// operators between numbers.
///
/// # Errors
/// [`ExpressionError::Data`] if the text is blank, holds a character other
/// than a digit, `.`, whitespace or one of `+ - * / ( )`, or places two numbers
/// next to each other with only whitespace between them.
pub fn check_data(raw: &str) -> Result<(), ExpressionError> {
    if raw.trim().is_empty() || !ALPHABET.is_match(raw) || ADJACENT_NUMBERS.is_match(raw) {
        return Err(ExpressionError::Data);
    }

    Ok(())
}

/// Fails on operators that cannot take two operands where they stand.
///
/// # Errors
/// [`ExpressionError::Op`] if any of these hold:
/// - two of `+ * /` are separated by nothing but whitespace;
/// - the text ends with any operator;
/// - the text starts with one of `+ * /`;
/// - a `-` is followed, across whitespace only, by any operator;
/// - an operator, `)` and another operator appear with no space at all.
pub fn check_operators(raw: &str) -> Result<(), ExpressionError> {
    let misplaced = [&DOUBLED_OPERATOR,
                     &TRAILING_OPERATOR,
                     &LEADING_OPERATOR,
                     &CHAINED_MINUS,
                     &DANGLING_OPERATOR].into_iter()
                                        .any(|re| re.is_match(raw));

    if misplaced {
        return Err(ExpressionError::Op);
    }

    Ok(())
}

/// Compiles one of the fixed validation patterns.
fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("validation patterns are valid regular expressions")
}
