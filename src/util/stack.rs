use std::fmt;

use crate::error::StackError;

/// A last-in, first-out stack backed by a `Vec`.
///
/// Only the stack operations are exposed: `push`, `pop`, `peek`, `is_empty`
/// and `len`. The top of the stack is the most recently pushed element.
///
/// # Example
/// ```
/// use stackcalc::{error::StackError, util::stack::Stack};
///
/// let mut stack = Stack::new();
/// stack.push(1.0);
/// stack.push(2.5);
///
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.peek(), Ok(&2.5));
/// assert_eq!(stack.pop(), Ok(2.5));
/// assert_eq!(stack.pop(), Ok(1.0));
/// assert_eq!(stack.pop(), Err(StackError::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack that can hold `capacity` elements without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Places `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// Returns [`StackError::Empty`] if the stack has no elements.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    /// Returns [`StackError::Empty`] if the stack has no elements.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    /// Returns `true` if the stack holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the stack bottom to top, e.g. `stack: [1, 2, 3]`.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack: [")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
