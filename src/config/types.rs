//! Configuration types for the record store.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from YAML configuration files.

use std::time::Duration;

use serde::Deserialize;

/// Database file used when no configuration says otherwise.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://payroll.db";

const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

fn default_max_connections() -> u32 {
    1
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

fn default_create_if_missing() -> bool {
    true
}

/// Settings for connecting a [`SqliteRecordStore`](crate::store::SqliteRecordStore).
///
/// Only `database_url` is required in YAML; the rest fall back to defaults.
///
/// # Example
///
/// ```
/// use payroll_engine::config::StoreConfig;
///
/// let config: StoreConfig = serde_yaml::from_str("database_url: sqlite://test.db").unwrap();
/// assert_eq!(config.max_connections, 1);
/// assert!(config.create_if_missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// SQLite connection URL, e.g. `sqlite://payroll.db` or `sqlite::memory:`.
    pub database_url: String,
    /// Maximum pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before failing the operation.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    /// Create the database file if it does not exist.
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,
}

impl StoreConfig {
    /// Configuration for a private in-process database.
    pub fn in_memory() -> Self {
        Self {
            database_url: IN_MEMORY_DATABASE_URL.to_string(),
            ..Self::default()
        }
    }

    /// Returns true if the URL names an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }

    /// The connection acquire timeout as a [`Duration`].
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            create_if_missing: default_create_if_missing(),
        }
    }
}
