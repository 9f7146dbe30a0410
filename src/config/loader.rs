//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading store
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::StoreConfig;

/// Loads and provides access to store configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Connecting to {}", loader.config().database_url);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StoreConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or lacks `database_url` (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the loaded store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Consumes the loader, returning the store configuration.
    pub fn into_config(self) -> StoreConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/payroll.yaml"
    }

    fn write_temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "payroll-engine-{}-{}.yaml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.database_url, "sqlite://payroll.db");
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.acquire_timeout_secs, 10);
        assert!(config.create_if_missing);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/payroll.yaml");

        match result {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let path = write_temp_config("malformed", "database_url: [unclosed");

        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(PayrollError::ConfigParseError { path, message }) => {
                assert!(path.contains("malformed"));
                assert!(!message.is_empty());
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_load_applies_defaults() {
        let path = write_temp_config("minimal", "database_url: \"sqlite::memory:\"\n");

        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        let loader = result.unwrap();
        assert!(loader.config().is_in_memory());
        assert_eq!(loader.config().acquire_timeout_secs, 30);
    }
}
