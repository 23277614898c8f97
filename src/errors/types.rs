//! Error type definitions for the guide generator

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Record store errors
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Prepared programmes file errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Record store specific errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The store could not be opened or read
    #[error("Record store unavailable: {message}")]
    ConnectionFailed { message: String },

    /// A query returned rows that could not be understood
    #[error("Query failed: {query} - {message}")]
    QueryFailed { query: String, message: String },

    /// Row deserialization failures
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Prepared programmes file errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// File does not exist
    #[error("Source file not found: {path}")]
    NotFound { path: String },

    /// Parsing errors for source data
    #[error("Parse error: {source_type} - {message}")]
    ParseError { source_type: String, message: String },

    /// Any other read failure
    #[error("Source I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl RepositoryError {
    /// Create a connection failed error
    pub fn connection_failed<M: Into<String>>(message: M) -> Self {
        Self::ConnectionFailed {
            message: message.into(),
        }
    }

    /// Create a query failed error
    pub fn query_failed<Q: Into<String>, M: Into<String>>(query: Q, message: M) -> Self {
        Self::QueryFailed {
            query: query.into(),
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Create a parse error
    pub fn parse_error<S: Into<String>, M: Into<String>>(source_type: S, message: M) -> Self {
        Self::ParseError {
            source_type: source_type.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::configuration("channel 'a.us' has no site association");
        assert_eq!(
            err.to_string(),
            "Configuration error: channel 'a.us' has no site association"
        );

        let err: AppError = RepositoryError::query_failed("xmltv_id in [..]", "line 3").into();
        assert_eq!(
            err.to_string(),
            "Repository error: Query failed: xmltv_id in [..] - line 3"
        );

        let err: AppError = SourceError::NotFound {
            path: "programs.json".to_string(),
        }
        .into();
        assert!(err.to_string().contains("programs.json"));
    }
}
