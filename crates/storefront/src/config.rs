//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `QUITANDA_DATA_DIR` - Directory for persisted cart state (default: `.quitanda`)
//! - `QUITANDA_CONTENT_DIR` - Directory holding catalog content
//!   (default: `crates/storefront/content`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory where cart state is persisted
    pub data_dir: PathBuf,
    /// Directory holding catalog content files
    pub content_dir: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable is unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            data_dir: get_dir_or_default("QUITANDA_DATA_DIR", ".quitanda")?,
            content_dir: get_dir_or_default("QUITANDA_CONTENT_DIR", "crates/storefront/content")?,
        })
    }
}

/// Get a directory path from the environment, falling back to a default.
fn get_dir_or_default(key: &str, default: &str) -> Result<PathBuf, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
// Tests mutate process environment via std::env::set_var (unsafe in
// edition 2024); variable names are unique per test.
#[allow(unsafe_code)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_uses_default() {
        let dir = get_dir_or_default("QUITANDA_TEST_UNSET_VAR", ".quitanda").unwrap();
        assert_eq!(dir, PathBuf::from(".quitanda"));
    }

    #[test]
    fn test_set_variable_wins() {
        // SAFETY: test-only env mutation with a variable name unique to
        // this test.
        unsafe { std::env::set_var("QUITANDA_TEST_SET_VAR", "/tmp/quitanda-test") };
        let dir = get_dir_or_default("QUITANDA_TEST_SET_VAR", ".quitanda").unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/quitanda-test"));
    }

    #[test]
    fn test_empty_variable_rejected() {
        // SAFETY: test-only env mutation with a variable name unique to
        // this test.
        unsafe { std::env::set_var("QUITANDA_TEST_EMPTY_VAR", "  ") };
        let result = get_dir_or_default("QUITANDA_TEST_EMPTY_VAR", ".quitanda");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
