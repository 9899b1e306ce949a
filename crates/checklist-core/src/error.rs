use thiserror::Error;

/// Application-wide error types for the checklist service.
#[derive(Error, Debug)]
pub enum AppError {
    /// No item with the requested id exists.
    #[error("Item {0} not found.")]
    NotFound(i32),

    /// Request payload, path or query failed type/shape checks.
    #[error("{0}")]
    InvalidInput(String),

    /// A pooled connection could not be acquired.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
