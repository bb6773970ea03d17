//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export BASE_URL="http://short.yerva"
//! export DEFAULT_VALIDITY_MINUTES="30"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Public origin used in generated short URLs (default: `http://short.yerva`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity applied when a create request has none (default: 30)
//! - `CODE_LENGTH` - Characters per generated code (default: 6, range: 4-32)
//! - `CODE_MAX_ATTEMPTS` - Code generation attempts per create (default: 10, range: 1-100)

use anyhow::Result;
use std::env;

use crate::domain::registry::DEFAULT_MAX_ATTEMPTS;
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;
use crate::utils::validity::DEFAULT_VALIDITY_MINUTES;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public origin prepended to `/redirect?code=...` in create responses.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Validity in minutes used when the create request omits one.
    pub default_validity_minutes: u32,
    pub code_length: usize,
    /// Upper bound on generator calls when codes keep colliding.
    pub code_max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            base_url: "http://short.yerva".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            code_length: DEFAULT_CODE_LENGTH,
            code_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let base_url = env::var("BASE_URL").unwrap_or(defaults.base_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let default_validity_minutes = env::var("DEFAULT_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.default_validity_minutes);

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.code_length);

        let code_max_attempts = env::var("CODE_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.code_max_attempts);

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            default_validity_minutes,
            code_length,
            code_max_attempts,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an http(s) origin
    /// - `code_length` is outside 4-32
    /// - `code_max_attempts` is outside 1-100
    pub fn validate(&self) -> Result<()> {
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

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if !(1..=100).contains(&self.code_max_attempts) {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
        tracing::info!(
            "  Codes: {} chars, {} attempts",
            self.code_length,
            self.code_max_attempts
        );
    }
}

/// Loads configuration from environment variables, applies command-line
/// overrides and validates the result.
///
/// `listen` and `base_url` take precedence over `LISTEN` and `BASE_URL`.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env(listen: Option<String>, base_url: Option<String>) -> Result<Config> {
    let mut config = Config::from_env();
    if let Some(listen) = listen {
        config.listen_addr = listen;
    }
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    config.validate()?;
    Ok(config)
}
