//! Error types for the sequence crate.

use thiserror::Error;

/// Errors raised by sequence construction and terminal operators.
///
/// Every variant is a local, synchronous failure of the call that broke the
/// operator's contract. The `*_or_none` operators are the only place where
/// [`SequenceError::NoMatch`] is turned into an absent value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Construction was given no source at all.
    #[error("sequence source is missing")]
    EmptySource,

    /// Indexed access went past the end of the sequence.
    #[error("index {index} is out of range ({count} elements)")]
    IndexOutOfRange { index: usize, count: usize },

    /// No element qualified for `first` or `last`.
    #[error("{operator}: no matching items")]
    NoMatch { operator: &'static str },

    /// A mapping with unique keys saw the same key twice.
    #[error("key '{key}' is used more than once")]
    DuplicateKey { key: String },
}

impl SequenceError {
    /// Returns `true` if this is a [`SequenceError::NoMatch`].
    pub fn is_no_match(&self) -> bool {
        matches!(self, SequenceError::NoMatch { .. })
    }
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
