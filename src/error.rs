/// Expression errors.
///
/// Defines the four error categories an expression can fail with. Three are
/// static and detected from the shape of the input alone (parentheses, data,
/// operator placement); division by zero is the only error raised while the
/// expression is being evaluated.
pub mod expression_error;
/// Stack container errors.
///
/// Raised by [`crate::util::stack::Stack`] when an element is requested from
/// an empty stack.
pub mod stack_error;

pub use expression_error::ExpressionError;
pub use stack_error::StackError;
