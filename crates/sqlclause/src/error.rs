//! Error types for sqlclause

use thiserror::Error;

/// Result type alias for statement generation
pub type ClauseResult<T> = Result<T, ClauseError>;

/// Errors raised while composing a statement from clauses.
///
/// Individual clauses never fail: accumulation always appends and generation
/// always succeeds. Only the statement builders validate that the clauses
/// they were handed add up to a statement worth sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClauseError {
    /// A required clause is missing or a statement is unsafe to build
    #[error("Validation error: {0}")]
    Validation(String),

    /// A VALUES row does not line up with the first row's columns
    #[error("Row {row} has columns {found:?}, expected {expected:?}")]
    RowShape {
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl ClauseError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a row shape error
    pub fn is_row_shape(&self) -> bool {
        matches!(self, Self::RowShape { .. })
    }
}
