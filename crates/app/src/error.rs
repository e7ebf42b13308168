//! Application-level errors.

use domain::DomainError;
use persistence::PersistenceError;
use thiserror::Error;

/// Errors that can stop the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable holds an unusable value.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    /// The tracing filter directive could not be parsed.
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global tracing subscriber was already installed.
    #[error("Failed to initialize tracing: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),

    /// Connecting to or migrating the database failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// A domain operation failed.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
