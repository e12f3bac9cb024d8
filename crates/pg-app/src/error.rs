//! Error types for the pg-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid prime: {0} (p must be a prime number >= 2)")]
    InvalidPrime(u64),

    #[error("Invalid exponent: k = {k} (must be between 1 and {k_max})")]
    InvalidExponent { k: u32, k_max: u32 },

    #[error("No index selected")]
    EmptySelection,

    #[error("Unknown index: {0} (expected zagreb, wiener or gutman)")]
    UnknownIndex(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Computation failed: {0}")]
    Computation(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pg-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pg_core::PgError> for AppError {
    fn from(err: pg_core::PgError) -> Self {
        AppError::Computation(err.to_string())
    }
}

impl From<pg_graph::GraphError> for AppError {
    fn from(err: pg_graph::GraphError) -> Self {
        match err {
            pg_graph::GraphError::UnknownElement { .. } => AppError::InvalidInput(err.to_string()),
            other => AppError::Computation(other.to_string()),
        }
    }
}

impl From<pg_indices::IndexError> for AppError {
    fn from(err: pg_indices::IndexError) -> Self {
        match err {
            pg_indices::IndexError::EmptySelection => AppError::EmptySelection,
            pg_indices::IndexError::UnknownIndex(name) => AppError::UnknownIndex(name),
        }
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_graph::GraphError;

    #[test]
    fn unknown_element_is_user_input() {
        let err = AppError::from(GraphError::UnknownElement {
            label: 4,
            modulus: 8,
        });
        assert!(matches!(&err, AppError::InvalidInput(msg) if msg.contains("4 is not a unit mod 8")));

        let err = AppError::from(GraphError::SelfLoop { node: 0 });
        assert!(matches!(err, AppError::Computation(_)));
    }

    #[test]
    fn io_errors_convert() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
