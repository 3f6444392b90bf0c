//! Configuration settings
//!
//! Provides configuration loading from environment variables, configuration
//! files, and command-line overrides.
//!
//! The only value the page itself depends on is the author credit
//! (`APP_AUTHOR`); the rest of the settings cover the server bind and
//! logging behavior.

use serde::{Deserialize, Serialize};

/// Default author credit when `APP_AUTHOR` is absent or empty
pub const DEFAULT_AUTHOR: &str = "Anonymous Developer";

// Helper functions for serde defaults
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// Main configuration settings for the teleporter
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerSettings,
    /// Page configuration
    #[serde(default)]
    pub page: PageSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Page content configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSettings {
    /// Author credit shown in the page footer
    #[serde(default = "default_author")]
    pub author: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
    /// Enable request/response logging
    #[serde(default = "default_true")]
    pub log_requests: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            author: default_author(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
            log_requests: default_true(),
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut settings = Self::default();

        // Load server settings
        if let Ok(host) = std::env::var("APP_HOST") {
            settings.server.host = host;
        }

        if let Ok(port) = std::env::var("APP_PORT") {
            settings.server.port = port
                .parse()
                .map_err(|e| crate::Error::config("port", &format!("Invalid port: {}", e)))?;
        }

        // Load the author credit. An empty value counts as unset so the page
        // never renders a blank credit.
        if let Ok(author) = std::env::var("APP_AUTHOR")
            && !author.is_empty()
        {
            settings.page.author = author;
        }

        // Load logging settings
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            settings.logging.level = level;
        }

        if let Ok(verbose) = std::env::var("VERBOSE") {
            settings.logging.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(settings)
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", &format!("Failed to read config file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", &format!("Failed to parse config file: {}", e))
        })?;

        Ok(settings)
    }

    /// Merge settings with environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        let env_settings = Self::from_env()?;

        // Merge only non-default values from environment
        if env_settings.server.host != Self::default().server.host {
            self.server.host = env_settings.server.host;
        }

        if env_settings.server.port != Self::default().server.port {
            self.server.port = env_settings.server.port;
        }

        if env_settings.page.author != Self::default().page.author {
            self.page.author = env_settings.page.author;
        }

        if env_settings.logging.level != Self::default().logging.level {
            self.logging.level = env_settings.logging.level;
        }

        Ok(self)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        // Validate server settings
        if self.server.port == 0 {
            return Err(crate::Error::config(
                "port",
                "Invalid server port: cannot be 0",
            ));
        }

        // The author credit must be a non-empty string by the time it
        // reaches the view
        if self.page.author.is_empty() {
            return Err(crate::Error::config(
                "author",
                "Author credit cannot be empty",
            ));
        }

        // Validate log level
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_env::ENV_TEST_MUTEX;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.page.author, "Anonymous Developer");
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.log_requests);
    }

    #[test]
    fn test_settings_creation() {
        let settings = Settings::new();
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.page.author, DEFAULT_AUTHOR);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[server]
host = "127.0.0.1"
port = 8080

[page]
author = "Jane Doe"
        "#
        )
        .unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.page.author, "Jane Doe");
    }

    /// Clear the config-related environment variables for the current process
    fn clear_config_env() {
        unsafe {
            std::env::remove_var("APP_AUTHOR");
            std::env::remove_var("APP_HOST");
            std::env::remove_var("APP_PORT");
            std::env::remove_var("LOG_LEVEL");
        }
    }

    #[test]
    fn test_env_var_override() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        clear_config_env();

        unsafe {
            std::env::set_var("APP_AUTHOR", "Jane Doe");
            std::env::set_var("APP_PORT", "9000");
        }

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.page.author, "Jane Doe");
        assert_eq!(settings.server.port, 9000);

        unsafe {
            std::env::remove_var("APP_AUTHOR");
            std::env::remove_var("APP_PORT");
        }
    }

    #[test]
    fn test_empty_author_env_falls_back_to_default() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        clear_config_env();

        unsafe {
            std::env::set_var("APP_AUTHOR", "");
        }

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.page.author, DEFAULT_AUTHOR);

        unsafe {
            std::env::remove_var("APP_AUTHOR");
        }
    }

    #[test]
    fn test_invalid_port_env() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        clear_config_env();

        unsafe {
            std::env::set_var("APP_PORT", "not-a-port");
        }

        let result = Settings::from_env();
        assert!(result.is_err());

        unsafe {
            std::env::remove_var("APP_PORT");
        }
    }

    #[test]
    fn test_validation_success() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_port() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_empty_author() {
        let mut settings = Settings::default();
        settings.page.author = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "chatty".to_string();
        assert!(settings.validate().is_err());
    }
}
