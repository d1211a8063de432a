//! Error types for the directive runner
//!
//! Every failure aborts the run; the variants only differ in the message
//! they carry.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for decoding, parsing and executing copy directives
#[derive(Error, Debug)]
pub enum CopierError {
    /// Wrong number of command-line arguments
    #[error("Invocation error: {message}")]
    Invocation { message: String },

    /// Invalid base64 or invalid UTF-8 in the payload
    #[error("Decoding error: {message}")]
    Decoding {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Malformed XML or a `Copy` element missing a required attribute
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Origin directory of a directive does not exist
    #[error("Source directory does not exist or could not be found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// Destination file already exists (copies never overwrite)
    #[error("Destination file already exists: {}", .path.display())]
    CopyConflict { path: PathBuf },

    /// File system operation errors
    #[error("File system error: {operation} failed on {}", .path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CopierError {
    /// Create a new invocation error
    pub fn invocation(message: impl Into<String>) -> Self {
        Self::Invocation {
            message: message.into(),
        }
    }

    /// Create a new decoding error
    pub fn decoding<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decoding {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new parse error without an underlying cause
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new parse error wrapping the XML parser's error
    pub fn parse_with<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new source-not-found error
    pub fn source_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a new copy conflict error
    pub fn copy_conflict<P: Into<PathBuf>>(path: P) -> Self {
        Self::CopyConflict { path: path.into() }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CopierError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_source_not_found_message_contains_path() {
        let err = CopierError::source_not_found("/missing/templates");
        assert_eq!(
            err.to_string(),
            "Source directory does not exist or could not be found: /missing/templates"
        );
    }

    #[test]
    fn test_file_system_error_keeps_source() {
        let err = CopierError::file_system(
            "create directory",
            "/target",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("create directory failed on /target"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
