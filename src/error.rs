/// Errors triggered by tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error when asking an empty tree for its data or children.
    #[error("operation not supported on an empty tree")]
    EmptyTree,
    /// Error when pulling from an iterator that has no elements left.
    #[error("no elements left in the traversal")]
    Exhausted,
    /// Error when a weight range starts below zero or ends before it starts.
    #[error("invalid weight range [{min}, {max})")]
    InvalidRange {
        /// Inclusive lower bound.
        min: i32,
        /// Exclusive upper bound.
        max: i32,
    },
}
