use std::env;

use thiserror::Error;

/// Environment variable naming the todos table.
pub const TODOS_TABLE_VAR: &str = "TODOS_TABLE";

/// Environment variable naming the creation-time index.
pub const TODOS_INDEX_CREATED_AT_VAR: &str = "TODOS_INDEX_CREATED_AT";

/// Errors that can occur when loading storage configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Storage configuration, resolved once and held for the adapter's lifetime.
///
/// Constructed explicitly so tests and embedders can point a repository at
/// any table without mutating the process environment.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Name of the todos table.
    pub table_name: String,
    /// Name of the secondary index ordered by creation time.
    pub created_at_index_name: String,
}

impl StorageConfig {
    /// Creates a configuration from explicit table and index names.
    pub fn new(table_name: impl Into<String>, created_at_index_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            created_at_index_name: created_at_index_name.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODOS_TABLE` - name of the todos table (required)
    /// - `TODOS_INDEX_CREATED_AT` - name of the creation-time index (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        let table_name =
            env::var(TODOS_TABLE_VAR).map_err(|_| ConfigError::MissingVar(TODOS_TABLE_VAR))?;
        let created_at_index_name = env::var(TODOS_INDEX_CREATED_AT_VAR)
            .map_err(|_| ConfigError::MissingVar(TODOS_INDEX_CREATED_AT_VAR))?;

        Ok(Self {
            table_name,
            created_at_index_name,
        })
    }
}
