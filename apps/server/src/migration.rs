//! Migration tool configuration
//!
//! The schema migration tool is driven by a small JSON config document.
//! This module builds that document from the process environment, failing
//! fast when `DATABASE_URL` is absent so a misconfigured deployment never
//! reaches the migration step with a half-formed config.

use serde::Serialize;
use thiserror::Error;

/// Read access to environment variables.
///
/// The process environment implements this via [`SystemEnv`]; tests
/// substitute an in-memory map.
pub trait EnvSource {
    /// Value of `key`, or `None` when the variable is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the process environment.
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MigrationConfigError {
    #[error("DATABASE_URL is not defined")]
    MissingDatabaseUrl,
}

/// Database driver the migration tool targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    Pg,
}

/// Credentials block of the migration config document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbCredentials {
    pub connection_string: String,
}

/// Configuration document consumed by the schema migration tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationConfig {
    pub schema: String,
    pub out: String,
    pub breakpoints: bool,
    pub driver: Driver,
    pub verbose: bool,
    pub db_credentials: DbCredentials,
}

impl MigrationConfig {
    /// Build the migration config from `env`.
    ///
    /// Fails when `DATABASE_URL` is unset or empty; every other field is
    /// fixed by convention.
    pub fn load(env: &dyn EnvSource) -> Result<Self, MigrationConfigError> {
        let connection_string = env
            .var("DATABASE_URL")
            .filter(|value| !value.is_empty())
            .ok_or(MigrationConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            schema: "./db/schema/*".to_string(),
            out: "./db/migrations".to_string(),
            breakpoints: true,
            driver: Driver::Pg,
            verbose: true,
            db_credentials: DbCredentials { connection_string },
        })
    }
}
