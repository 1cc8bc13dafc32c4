use thiserror::Error;

/// Errors raised by the stack container.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `pop` or `peek` was called on a stack with no elements.
    #[error("Attempted to access the top of an empty stack.")]
    Empty,
}
