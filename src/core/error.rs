//! Error types for the logger system

use super::field_type::FieldType;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A field emitted a kind the plain-string renderer cannot express
    #[error("Unsupported field type {field_type} for field '{name}'")]
    UnsupportedFieldType { name: String, field_type: FieldType },

    /// Unrecognised level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create an unsupported field type error
    pub fn unsupported(name: impl Into<String>, field_type: FieldType) -> Self {
        LoggerError::UnsupportedFieldType {
            name: name.into(),
            field_type,
        }
    }
}
