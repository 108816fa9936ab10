//! CalDAV access configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PageError, PageResult};

/// Template echoed to the operator when the config file is missing or
/// malformed.
pub const CONFIG_TEMPLATE: &str = r#"url = "https://caldav.example.net"
calendar = "Évènements publics"
username = "someone"
password = "secret"
"#;

/// Connection parameters for the remote calendar, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Base URL of the CalDAV server.
    pub url: String,
    /// Display name of the calendar to read.
    pub calendar: String,
    pub username: String,
    pub password: String,
}

impl AccessConfig {
    /// Default config location: `~/.config/evlpage/config.toml`.
    pub fn default_path() -> PageResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PageError::Config("Could not determine config directory".into()))?
            .join("evlpage");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config from a TOML file.
    pub fn load(path: &Path) -> PageResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PageError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| PageError::Config(e.to_string()))
    }
}
