//! Error types for the syslog logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A value could not be represented as JSON
    #[error("JSON encoding error: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Input was not valid JSON for the requested type
    #[error("JSON decoding error: {0}")]
    Decoding(#[source] serde_json::Error),

    /// Facility code outside 0..=23
    #[error("Invalid facility code: {0}")]
    InvalidFacility(u8),

    /// Severity code outside 0..=7
    #[error("Invalid severity code: {0}")]
    InvalidSeverity(u8),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}
