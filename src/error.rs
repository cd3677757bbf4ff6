//! Error types for signup-api

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Database not found at {}. Run `signup-api init` first.", .0.display())]
    NotInitialized(std::path::PathBuf),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Background task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Task(err.to_string())
    }
}

impl Error {
    /// Stable machine-readable kind, used as the `error` field of API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::EmailTaken(_) => "EMAIL_TAKEN",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Io(_)
            | Self::Toml(_)
            | Self::NotInitialized(_)
            | Self::Config(_)
            | Self::Task(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the error was caused by the caller's input rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::EmailTaken(_))
    }
}
