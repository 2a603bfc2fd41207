//! Error types for export operations
//!
//! The HTML → WML conversion itself cannot fail; these errors come from the
//! surrounding export flow.

use std::fmt;

/// Errors that can occur while assembling or rendering an export
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Template file does not exist
    TemplateNotFound(String),
    /// Template exists but cannot be used
    TemplateError(String),
    /// Commitment input could not be read or decoded
    InvalidInput(String),
    /// Reading or writing a file failed
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::TemplateNotFound(path) => write!(f, "Template '{path}' not found"),
            ExportError::TemplateError(msg) => write!(f, "Template error: {msg}"),
            ExportError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            ExportError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::InvalidInput(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}
