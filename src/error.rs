//! Error types for import extraction and generation
//!
//! This module provides structured error types using thiserror for better
//! error handling and actionable error messages.
//!
//! Unsupported import shapes are deliberately absent here: the extractor
//! reports them as [`ParseOutcome::Skipped`](crate::parsing::ParseOutcome)
//! and carries on with the rest of the file.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for extraction and CLI operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parser setup errors
    #[error("Failed to initialize {language} parser: {reason}")]
    ParserInit { language: String, reason: String },

    /// tree-sitter gave up without producing a tree
    #[error("Failed to parse '{path}': parser produced no syntax tree")]
    ParseFailed { path: PathBuf },

    /// Input documents handed to the CLI (group JSON and friends)
    #[error("Invalid input in '{path}': {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    /// General errors for cases where we need to preserve existing behavior
    #[error("{0}")]
    General(String),
}

impl ImportError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::ParserInit { .. } => "PARSER_INIT_ERROR",
            Self::ParseFailed { .. } => "PARSE_ERROR",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Pass the source text directly to skip the file read",
            ],
            Self::FileWrite { .. } => vec![
                "Check that the target directory exists and is writable",
            ],
            Self::ParserInit { .. } => vec![
                "The bundled tree-sitter grammar does not match the tree-sitter runtime version",
            ],
            Self::InvalidInput { .. } => vec![
                "Group input must be a JSON array of import element groups",
                "Run 'tidyimports extract <file>' to see the expected element shape",
            ],
            Self::ConfigError { .. } => vec![
                "Run 'tidyimports config' to inspect the effective settings",
                "Run 'tidyimports init --force' to regenerate the settings file",
            ],
            _ => vec![],
        }
    }
}

/// Result type alias for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context(self, msg: &str) -> Result<T, ImportError>;

    /// Add context with a path
    fn with_path(self, path: &std::path::Path) -> Result<T, ImportError>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: &str) -> Result<T, ImportError> {
        self.map_err(|e| ImportError::General(format!("{msg}: {e}")))
    }

    fn with_path(self, path: &std::path::Path) -> Result<T, ImportError> {
        self.map_err(|e| ImportError::InvalidInput {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_status_codes_are_stable() {
        let err = ImportError::ParseFailed {
            path: PathBuf::from("a.ts"),
        };
        assert_eq!(err.status_code(), "PARSE_ERROR");

        let err = ImportError::ConfigError {
            reason: "bad".to_string(),
        };
        assert_eq!(err.status_code(), "CONFIG_ERROR");
        assert!(!err.recovery_suggestions().is_empty());
    }

    #[test]
    fn test_with_path_wraps_foreign_errors() {
        let parsed: Result<Vec<u32>, _> = serde_json::from_str::<Vec<u32>>("not json");
        let err = parsed.with_path(Path::new("groups.json")).unwrap_err();

        match err {
            ImportError::InvalidInput { path, .. } => {
                assert_eq!(path, PathBuf::from("groups.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_context_prefixes_message() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = io.context("reading stdin").unwrap_err();
        assert_eq!(err.to_string(), "reading stdin: boom");
    }
}
