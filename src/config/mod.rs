//! Configuration management

use anyhow::Result;
use event_wizard::ValidationPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable prefix (TICKET_PORT, TICKET_VALIDATION__TICKET_PRICE, etc.)
const ENV_PREFIX: &str = "TICKET";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Rules applied when the server re-checks wizard snapshots
    #[serde(default)]
    pub validation: ValidationPolicy,
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            validation: ValidationPolicy::default(),
        }
    }
}

/// Platform config directory, falling back to the working directory.
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "ticketend", "ticket-frontend")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_dir())
}

/// Load `config.{toml,yaml,json}` from `dir` (optional), then apply env overrides.
pub fn load_config_from(dir: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_wizard::{CoordinatePolicy, TicketPricePolicy};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.validation, ValidationPolicy::default());
    }

    #[test]
    #[serial]
    fn test_file_overrides_policy() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "port = 8080\n\n[validation]\ncoordinates = \"numeric_range\"\nticket_price = \"allow_free\"\n",
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.validation.coordinates, CoordinatePolicy::NumericRange);
        assert_eq!(config.validation.ticket_price, TicketPricePolicy::AllowFree);
    }

    #[test]
    #[serial]
    fn test_env_overrides_port() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("TICKET_PORT", "4321");
        let config = load_config_from(dir.path());
        std::env::remove_var("TICKET_PORT");

        assert_eq!(config.unwrap().port, 4321);
    }

    #[test]
    #[serial]
    fn test_env_overrides_nested_policy() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("TICKET_VALIDATION__TICKET_PRICE", "allow_free");
        std::env::set_var("TICKET_VALIDATION__COORDINATES", "numeric_range");
        let config = load_config_from(dir.path());
        std::env::remove_var("TICKET_VALIDATION__TICKET_PRICE");
        std::env::remove_var("TICKET_VALIDATION__COORDINATES");

        let validation = config.unwrap().validation;
        assert_eq!(validation.ticket_price, TicketPricePolicy::AllowFree);
        assert_eq!(validation.coordinates, CoordinatePolicy::NumericRange);
    }
}
