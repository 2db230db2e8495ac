use std::io;

use thiserror::Error;

use super::answers::AnswerKey;

/// Library-wide error type for fragment-gen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A value required at generation time was never answered.
    #[error("Missing required answer '{key}'")]
    MissingAnswer { key: AnswerKey },

    /// The user aborted an interactive prompt.
    #[error("Cancelled")]
    Cancelled,

    /// Reading an answer from the user failed.
    #[error("Failed to read '{key}': {details}")]
    Prompt { key: AnswerKey, details: String },

    /// Template lookup or rendering failed.
    #[error("Template '{name}' failed: {details}")]
    Template { name: String, details: String },

    /// A name normalized to an empty identifier, or a slug that is not a
    /// single directory name.
    #[error("Invalid slug '{0}'")]
    InvalidSlug(String),

    /// A collection marker already exists at the target location.
    #[error("Collection '{0}' already exists")]
    CollectionExists(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn template_error(name: &str, details: impl std::fmt::Display) -> Self {
        AppError::Template { name: name.to_string(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MissingAnswer { .. }
            | AppError::InvalidSlug(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Cancelled => io::ErrorKind::Interrupted,
            AppError::CollectionExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Prompt { .. } | AppError::Template { .. } => io::ErrorKind::Other,
        }
    }
}
