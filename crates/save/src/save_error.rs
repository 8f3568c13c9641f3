// ---------------------------------------------------------------------------
// SaveError: typed errors for layout save/load
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while persisting or restoring a layout.
///
/// A missing stored layout is not an error: loaders return `Ok(None)`.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error from the native file backend.
    Io(std::io::Error),
    /// JSON encoding failed.
    Encode(String),
    /// Stored JSON could not be decoded into a layout.
    Decode(String),
    /// The backing store refused the operation (browser storage missing,
    /// quota exceeded, unusable key).
    Storage(String),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::Encode(msg) => write!(f, "Encoding error: {msg}"),
            SaveError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            SaveError::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

/// JSON errors surface on the read path; the encode path maps explicitly.
impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Decode(e.to_string())
    }
}
