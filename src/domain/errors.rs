use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Lookup failed: {0}")]
    Lookup(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
