//! Process configuration read from environment variables (and `.env`).

use std::env;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

/// Deployment environment, selecting the connection string and whether the
/// schema is prepared at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Prod,
    #[default]
    Test,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Some(Environment::Prod),
            "test" => Some(Environment::Test),
            _ => None,
        }
    }

    /// Only production applies migrations and seeds; test databases are
    /// prepared by their harness.
    pub fn prepares_database(self) -> bool {
        matches!(self, Environment::Prod)
    }

    fn database_url_var(self) -> &'static str {
        match self {
            Environment::Prod => "DATABASE_URL_PROD",
            Environment::Test => "DATABASE_URL_TEST",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Prod => f.write_str("prod"),
            Environment::Test => f.write_str("test"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `APP_ENV` picks the environment (default `test`). The connection string
    /// comes from `DATABASE_URL_PROD` or `DATABASE_URL_TEST`, falling back to
    /// `DATABASE_URL`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw).ok_or_else(|| ConfigError::InvalidEnvValue {
                var: "APP_ENV".to_string(),
                reason: format!("expected 'prod' or 'test', got '{raw}'"),
            })?,
            None => Environment::default(),
        };

        let specific = environment.database_url_var();
        let database_url = lookup(specific)
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(format!("{specific} or DATABASE_URL")))?;

        Ok(Self {
            environment,
            database_url,
        })
    }
}
