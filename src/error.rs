//! Error types for the listing extractor.

use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while configuring or running the extractor
///
/// A selector that matches nothing is never an error; only text that is
/// present but cannot be read, or bad configuration, ends up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A configured CSS selector failed to compile
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The configured site origin is not an absolute http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Timestamp text matched neither `Mon D 'YY` nor `Mon D`
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// A counter's leading token is not a non-negative integer
    #[error("Invalid number in {field}: {text:?}")]
    InvalidNumber { field: &'static str, text: String },
}
