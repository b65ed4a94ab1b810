use std::fmt;

/// Unified error type for the sandworm crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Invalid input provided by the caller.
    InvalidInput(String),
    /// A referenced repository, file, or collaborator does not exist.
    NotFound(String),
    /// The operation requires a logged-in user.
    NotAuthenticated,
    /// A workspace invariant was violated.
    InvariantViolation(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            StoreError::NotFound(what) => write!(f, "not found: {what}"),
            StoreError::NotAuthenticated => write!(f, "no user is logged in"),
            StoreError::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Result type alias using [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;
