use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::errors::DomainError;

/// Errors surfaced by the console application.
///
/// `Input`, `Lookup` and `Unexpected` are per-request and their `Display`
/// is the line shown to the user. The remaining variants abort startup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Error: {0}")]
    Lookup(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Failed to run database migrations: {0}")]
    Migration(String),

    #[error("Failed to seed database: {0}")]
    Seed(#[from] diesel::result::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(msg) => AppError::Input(msg),
            DomainError::Lookup(msg) => AppError::Lookup(msg),
            DomainError::Internal(msg) => AppError::Unexpected(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_input_line() {
        let err: AppError = DomainError::InvalidInput("Customer ID must be greater than 0.".into()).into();
        assert!(matches!(err, AppError::Input(_)));
        assert_eq!(err.to_string(), "Input error: Customer ID must be greater than 0.");
    }

    #[test]
    fn lookup_failure_maps_to_error_line() {
        let err: AppError = DomainError::Lookup("connection refused".into()).into();
        assert_eq!(err.to_string(), "Error: connection refused");
    }

    #[test]
    fn internal_maps_to_unexpected_line() {
        let err: AppError = DomainError::Internal("oops".into()).into();
        assert_eq!(err.to_string(), "Unexpected error: oops");
    }

    #[test]
    fn config_error_is_transparent() {
        let err: AppError = ConfigError::MissingEnvVar("DATABASE_URL".into()).into();
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: DATABASE_URL"
        );
    }
}
