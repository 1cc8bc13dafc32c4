use std::fmt;

use logos::Logos;

use crate::error::ExpressionError;

/// The four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns `true` if `self` binds strictly tighter than `other`.
    ///
    /// Only `*` and `/` outrank `+` and `-`. Operators of equal rank never
    /// outrank each other, which is what makes evaluation left-associative.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::lexer::Operator;
    ///
    /// assert!(Operator::Mul.outranks(Operator::Sub));
    /// assert!(!Operator::Mul.outranks(Operator::Div));
    /// assert!(!Operator::Add.outranks(Operator::Mul));
    /// ```
    #[must_use]
    pub const fn outranks(self, other: Self) -> bool {
        matches!((self, other), (Self::Mul | Self::Div, Self::Add | Self::Sub))
    }

    /// The source character for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single unit of a normalized expression.
///
/// Numbers may carry a leading minus: the normalizer fuses a unary minus onto
/// the literal that follows it, so `-5` arrives here as one token.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-3` or `2.75`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// One of `+`, `-`, `*` or `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl Token {
    /// Classifies one raw, whitespace-free token string.
    ///
    /// The whole string must lex as exactly one token; anything else, such as
    /// `1.2.3`, `.5` or `7.`, yields `None`.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::lexer::{Operator, Token};
    ///
    /// assert_eq!(Token::classify("-2.5"), Some(Token::Number(-2.5)));
    /// assert_eq!(Token::classify("*"), Some(Token::Operator(Operator::Mul)));
    /// assert_eq!(Token::classify("1.2.3"), None);
    /// ```
    #[must_use]
    pub fn classify(raw: &str) -> Option<Self> {
        let mut lexer = Self::lexer(raw);
        let token = lexer.next()?.ok()?;

        if lexer.span() != (0..raw.len()) || lexer.next().is_some() {
            return None;
        }

        Some(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Splits a normalized expression on whitespace and classifies every piece.
///
/// # Errors
/// Returns [`ExpressionError::Data`] for the first piece that is not a valid
/// number, operator or parenthesis.
///
/// # Example
/// ```
/// use stackcalc::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("( -1 * 4 )").unwrap();
/// assert_eq!(tokens,
///            [Token::LeftParen,
///             Token::Number(-1.0),
///             Token::Operator(Operator::Mul),
///             Token::Number(4.0),
///             Token::RightParen]);
/// ```
pub fn tokenize(normalized: &str) -> Result<Vec<Token>, ExpressionError> {
    normalized.split_whitespace()
              .map(|raw| Token::classify(raw).ok_or(ExpressionError::Data))
              .collect()
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
