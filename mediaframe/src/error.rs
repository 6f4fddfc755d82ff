//! Error types for embed operations

use thiserror::Error;

/// Errors that can occur while creating, updating or rendering an embed.
///
/// Malformed markup and out-of-range numbers are not errors: the parse side
/// reports "no match" with `None` and numeric input is silently replaced by
/// defaults. What remains here is what a caller has to surface to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// Source is empty or does not look like a URL
    #[error("Invalid source URL: {0:?}")]
    InvalidSource(String),

    /// Structure has no frame element to write to
    #[error("Embed structure has no frame element")]
    MissingFrame,

    /// Error while serializing markup
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;
