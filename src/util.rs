/// Generic LIFO container.
///
/// The evaluator keeps its operands and pending operators in two instances of
/// this stack. Reading the top of an empty stack is reported as a
/// [`crate::error::StackError`] instead of panicking.
pub mod stack;
/// Depth-tracked parenthesis scanning.
///
/// Shared by the validator, which needs to know whether a text is balanced,
/// and by the normalizer, which needs the extent of a parenthesized group.
pub mod parens;
