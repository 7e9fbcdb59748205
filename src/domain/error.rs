//! Error types for the content browser.
//!
//! The browsing logic itself never fails: missing data degrades to empty
//! collections and an empty result set is an ordinary state. Errors only come
//! from the edges, namely reading a content snapshot, parsing configuration,
//! and rejecting events that would break a filter invariant.

use thiserror::Error;

/// The main error type for brandfolio operations.
///
/// # Examples
///
/// ```
/// use brandfolio::BrowserError;
///
/// fn validate_page_size(size: usize) -> Result<usize, BrowserError> {
///     if size == 0 {
///         return Err(BrowserError::Config("page size must be positive".to_string()));
///     }
///     Ok(size)
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors raised while reading content snapshots or config files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A content snapshot or config file could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A category was selected that the current content does not offer.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// A specialized `Result` type for brandfolio operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
