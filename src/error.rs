use thiserror::Error;

/// Error type for library system operations
///
/// Only conditions the caller cannot anticipate end up here. Business rule
/// rejections (book already out, quota reached, wrong borrower) are reported
/// through the outcome types in [`crate::outcome`] instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LibraryError {
    /// No book, user or catalog entry matched the lookup
    #[error("{0}")]
    NotFound(String),
    /// A role selector, menu choice or other input could not be understood
    #[error("{0}")]
    InvalidInput(String),
    /// The configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for library system operations
pub type Result<T> = std::result::Result<T, LibraryError>;
