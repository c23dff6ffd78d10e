//! Table error types.

use thiserror::Error;

/// Errors raised while building a table's column set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A column was declared with an empty key.
    #[error("Column key must not be empty")]
    EmptyColumnKey,

    /// Two columns share the same key.
    #[error("Duplicate column key '{0}'")]
    DuplicateColumnKey(String),
}
