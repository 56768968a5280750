//! Error types for Sundry.
//!
//! The value functions themselves are total; these errors come from the
//! fallible edges around them (typed extraction, path and pattern parsing,
//! calling non-functions). Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::types::Tag;

/// The main error type for Sundry operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Tag, actual: Tag) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an invalid path error.
    #[must_use]
    pub fn invalid_path(path: impl Into<String>, position: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPath {
            path: path.into(),
            position,
            message: message.into(),
        })
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern(message.into()))
    }

    /// Creates a not-callable error.
    #[must_use]
    pub fn not_callable(actual: Tag) -> Self {
        Self::new(ErrorKind::NotCallable(actual))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value had a different kind than the caller required.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected kind.
        expected: Tag,
        /// The kind encountered.
        actual: Tag,
    },

    /// A property path could not be parsed.
    #[error("invalid path {path:?} at {position}: {message}")]
    InvalidPath {
        /// The path text.
        path: String,
        /// Byte offset of the problem.
        position: usize,
        /// Description of the problem.
        message: String,
    },

    /// A word pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// Attempted to call a value that is not a function.
    #[error("not callable: {0}")]
    NotCallable(Tag),
}
