use std::io;

use thiserror::Error;

/// Library-wide error type for aoc-scaffold operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file is present but unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Directory to copy from does not exist.
    #[error("Source directory '{0}/' not found")]
    SourceNotFound(String),

    /// Directory to copy into is already present.
    #[error("Destination directory '{0}/' already exists")]
    DestinationExists(String),

    /// Manifest file is missing from the copied tree.
    #[error("Manifest file '{0}' not found")]
    ManifestNotFound(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Config(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Config(_) | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::SourceNotFound(_) | AppError::ManifestNotFound(_) => io::ErrorKind::NotFound,
            AppError::DestinationExists(_) => io::ErrorKind::AlreadyExists,
        }
    }
}
