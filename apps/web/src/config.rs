use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Hardcoded fallback used when `SECRET_KEY` is unset. Insecure by
/// definition; production deployments must set their own key.
pub const FALLBACK_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Runtime profile selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Testing,
    Production,
}

impl FromStr for RuntimeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(RuntimeMode::Development),
            "testing" => Ok(RuntimeMode::Testing),
            "production" => Ok(RuntimeMode::Production),
            other => {
                bail!("Unknown APP_ENV '{other}' (expected development, testing or production)")
            }
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: RuntimeMode,
    pub debug: bool,
    pub testing: bool,
    pub secret_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mode: RuntimeMode = std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()?;

        let mut config = Self::for_mode(mode);
        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse::<u16>()
                .context("PORT must be a valid port number")?;
        }
        if let Ok(filter) = std::env::var("RUST_LOG") {
            config.rust_log = filter;
        }
        Ok(config)
    }

    /// Builds the profile for a mode directly, bypassing `APP_ENV`.
    /// Tests construct their app state through this.
    pub fn for_mode(mode: RuntimeMode) -> Self {
        let (debug, testing) = match mode {
            RuntimeMode::Development => (true, false),
            RuntimeMode::Testing => (false, true),
            RuntimeMode::Production => (false, false),
        };

        Config {
            mode,
            debug,
            testing,
            secret_key: std::env::var("SECRET_KEY")
                .ok()
                .filter(|key| !key.is_empty())
                .unwrap_or_else(|| FALLBACK_SECRET_KEY.to_string()),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_is_not_testing() {
        let config = Config::for_mode(RuntimeMode::Development);
        assert!(config.debug);
        assert!(!config.testing);
    }

    #[test]
    fn test_testing_mode_sets_testing_flag() {
        let config = Config::for_mode(RuntimeMode::Testing);
        assert!(config.testing);
        assert!(!config.debug);
    }

    #[test]
    fn test_production_disables_both_flags() {
        let config = Config::for_mode(RuntimeMode::Production);
        assert!(!config.debug);
        assert!(!config.testing);
    }

    #[test]
    fn test_secret_key_always_set() {
        let config = Config::for_mode(RuntimeMode::Testing);
        assert!(!config.secret_key.is_empty());
    }

    #[test]
    fn test_secret_key_falls_back_to_insecure_default() {
        std::env::remove_var("SECRET_KEY");
        let config = Config::for_mode(RuntimeMode::Testing);
        assert_eq!(config.secret_key, FALLBACK_SECRET_KEY);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            "production".parse::<RuntimeMode>().unwrap(),
            RuntimeMode::Production
        );
        assert!("staging".parse::<RuntimeMode>().is_err());
    }
}
