//! Error types for the state crate.

use tft_tree::TreeError;

/// Errors reported by [`try_reduce`](crate::try_reduce).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StateError {
    /// Content was edited while no file is open.
    #[error("no file is open")]
    NoOpenFile,

    /// The tree engine refused the request.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Convenience alias for state results.
pub type StateResult<T> = Result<T, StateError>;
