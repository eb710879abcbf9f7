//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATA_DIR="/var/lib/link-analytics"
//! export LISTEN="0.0.0.0:8080"
//! export BASE_URL="https://l.example.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATA_DIR` - Directory holding one file per link (default: `./data`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Public URL used in short links (default: `http://localhost:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CACHE_CAPACITY` - Cached destinations, `0` disables the cache (default: 10000)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of identifier → destination entries kept in memory.
    pub cache_capacity: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default; unparsable numbers fall back to it.
    pub fn from_env() -> Result<Self> {
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cache_capacity = env::var("CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        Ok(Self {
            data_dir,
            listen_addr,
            base_url,
            log_level,
            log_format,
            cache_capacity,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `data_dir` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `base_url` is not an absolute http(s) URL
    /// - `cache_capacity` exceeds 10 000 000
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            anyhow::bail!("DATA_DIR must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        match url::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => anyhow::bail!(
                "BASE_URL must be an absolute http(s) URL, got '{}'",
                self.base_url
            ),
        }

        if self.cache_capacity > 10_000_000 {
            anyhow::bail!(
                "CACHE_CAPACITY is too large (max: 10000000), got {}",
                self.cache_capacity
            );
        }

        Ok(())
    }

    /// Returns whether the destination cache is enabled.
    pub fn is_cache_enabled(&self) -> bool {
        self.cache_capacity > 0
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Data directory: {}", self.data_dir);

        if self.is_cache_enabled() {
            tracing::info!("  Cache: {} entries (enabled)", self.cache_capacity);
        } else {
            tracing::info!("  Cache: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            data_dir: "./data".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cache_capacity: 10_000,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://l.example.com".to_string();
        config.data_dir = "  ".to_string();
        assert!(config.validate().is_err());

        config.data_dir = "/tmp/links".to_string();
        config.cache_capacity = 10_000_001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cache_disabled_at_zero() {
        let mut config = valid_config();
        assert!(config.is_cache_enabled());

        config.cache_capacity = 0;
        assert!(!config.is_cache_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATA_DIR");
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("LOG_FORMAT");
            env::remove_var("CACHE_CAPACITY");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.cache_capacity, 10_000);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATA_DIR", "/srv/links");
            env::set_var("CACHE_CAPACITY", "0");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.data_dir, "/srv/links");
        assert_eq!(config.cache_capacity, 0);
        assert_eq!(config.log_format, "json");

        // Cleanup
        unsafe {
            env::remove_var("DATA_DIR");
            env::remove_var("CACHE_CAPACITY");
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    #[serial]
    fn test_unparsable_capacity_falls_back_to_default() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CACHE_CAPACITY", "lots");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.cache_capacity, 10_000);

        unsafe {
            env::remove_var("CACHE_CAPACITY");
        }
    }
}
