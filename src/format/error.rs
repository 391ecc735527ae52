//! Error types for exchange conversions.

use thiserror::Error;

/// Errors that can occur while exporting or importing annotation JSON.
///
/// Two kinds exist: file access failures and malformed documents. Nothing
/// propagates past the conversion routines as a panic; callers receive one
/// of these.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// I/O failure while reading or writing the annotation file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialize failure, including missing document keys.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A dictionary entry that cannot be reconstructed.
    #[error("Malformed entry '{uid}': {message}")]
    MalformedEntry {
        /// Identifier of the offending entry.
        uid: String,
        /// Description of what was wrong.
        message: String,
    },
}

impl ExchangeError {
    /// Create a malformed entry error.
    pub fn malformed_entry(uid: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedEntry {
            uid: uid.into(),
            message: message.into(),
        }
    }

    /// Whether this is a file access failure.
    pub fn is_file_access(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Whether this is a malformed document or entry.
    pub fn is_malformed(&self) -> bool {
        !self.is_file_access()
    }
}
