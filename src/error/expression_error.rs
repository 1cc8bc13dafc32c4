use thiserror::Error;

/// Represents every way an expression can fail to evaluate.
///
/// Each variant carries a fixed label. The labels are part of the output
/// contract of [`crate::evaluate`] and must not change: callers match on the
/// exact text, trailing space included.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionError {
    /// Unbalanced parentheses or an empty `()` group.
    #[error("Paren Error: ")]
    Paren,
    /// A misplaced operator: doubled, leading, trailing, or dangling next to
    /// a closing parenthesis.
    #[error("Op Error: ")]
    Op,
    /// Invalid characters, two numbers with no operator between them, a
    /// malformed number, or nothing to evaluate.
    #[error("Data Error: ")]
    Data,
    /// A division whose right-hand side evaluated to exactly zero.
    #[error("Div0 Error: ")]
    DivisionByZero,
}

impl ExpressionError {
    /// Returns the fixed label reported for this error.
    ///
    /// # Example
    /// ```
    /// use stackcalc::error::ExpressionError;
    ///
    /// assert_eq!(ExpressionError::DivisionByZero.label(), "Div0 Error: ");
    /// assert_eq!(ExpressionError::Paren.to_string(), "Paren Error: ");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paren => "Paren Error: ",
            Self::Op => "Op Error: ",
            Self::Data => "Data Error: ",
            Self::DivisionByZero => "Div0 Error: ",
        }
    }

    /// Returns `true` for errors detected before evaluation starts.
    #[must_use]
    pub const fn is_static(self) -> bool {
        !matches!(self, Self::DivisionByZero)
    }
}
