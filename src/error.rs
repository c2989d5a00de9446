//! Error types and exit codes for packsmith

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for packsmith operations
#[derive(Error, Debug)]
pub enum PackError {
    #[error("Path not found: {path}")]
    NotFound { path: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Failed to parse {path}: {message}")]
    ParseFailure { path: String, message: String },

    #[error("Archive error: {message}")]
    ArchiveError { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: Path not found / IO error
    /// - 2: Invalid input
    /// - 3: Parse failure
    /// - 4: Archive failure
    /// - 5: Config error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::NotFound { .. } => ExitCode::from(1),
            Self::InvalidInput { .. } => ExitCode::from(2),
            Self::ParseFailure { .. } => ExitCode::from(3),
            Self::ArchiveError { .. } => ExitCode::from(4),
            Self::ConfigError { .. } => ExitCode::from(5),
            Self::Json(_) => ExitCode::from(3),
            Self::Io(_) => ExitCode::from(1),
        }
    }

    /// Shorthand for an invalid-input error from anything printable.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Shorthand for a parse error tagged with the offending path.
    pub fn parse(path: impl AsRef<std::path::Path>, message: impl std::fmt::Display) -> Self {
        Self::ParseFailure {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Shorthand for an archive construction error.
    pub fn archive(message: impl std::fmt::Display) -> Self {
        Self::ArchiveError {
            message: message.to_string(),
        }
    }
}

/// Result type alias for packsmith operations
pub type Result<T> = std::result::Result<T, PackError>;
