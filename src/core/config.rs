//! User configuration.
//!
//! Handles reading and validating `~/.hatch.toml`. Every field has a
//! default, so the file is optional.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::types::PropertyName;
use crate::error::{ConfigError, Result};

/// Settings for the encryption stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// CI tool program and leading arguments (e.g. `["bundle", "exec", "travis"]`).
    pub tool: Vec<String>,
    /// Credentials properties file. Relative paths resolve against HOME.
    pub properties: PathBuf,
    /// Signing keystore. Relative paths resolve against HOME.
    pub keystore: PathBuf,
    /// Property names encrypted into the pipeline, in output order.
    pub secure: Vec<PropertyName>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: vec![constants::DEFAULT_TOOL.to_string()],
            properties: PathBuf::from(constants::DEFAULT_PROPERTIES),
            keystore: PathBuf::from(constants::DEFAULT_KEYSTORE),
            secure: constants::DEFAULT_SECURE
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Path to the configuration file under a home directory.
    pub fn config_path(home: &Path) -> PathBuf {
        home.join(constants::CONFIG_FILE)
    }

    /// Load configuration for the current user.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if HOME cannot be determined.
    pub fn load() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Self::load_from(&home)
    }

    /// Load configuration from a home directory.
    ///
    /// A missing file yields the defaults. Relative paths in the result
    /// are resolved against `home`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load_from(home: &Path) -> Result<Self> {
        let path = Self::config_path(home);
        debug!(path = %path.display(), "loading config");

        let config = if path.exists() {
            let contents =
                std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
            toml::from_str(&contents).map_err(ConfigError::Parse)?
        } else {
            debug!("no config file, using defaults");
            Self::default()
        };

        config.validate()?;
        Ok(config.resolve(home))
    }

    /// Make relative paths absolute against `home`.
    pub fn resolve(mut self, home: &Path) -> Self {
        if self.properties.is_relative() {
            self.properties = home.join(&self.properties);
        }
        if self.keystore.is_relative() {
            self.keystore = home.join(&self.keystore);
        }
        self
    }

    /// Validate the configuration.
    ///
    /// Checks:
    /// - `tool` names a program
    /// - `secure` is non-empty and has no duplicates or blank names
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on validation failure.
    pub fn validate(&self) -> Result<()> {
        match self.tool.first() {
            Some(program) if !program.trim().is_empty() => {}
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: "tool",
                    reason: "must name a program".to_string(),
                }
                .into())
            }
        }

        if self.secure.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "secure",
                reason: "at least one property is required".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for name in &self.secure {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "secure",
                    reason: "empty property name".to_string(),
                }
                .into());
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "secure",
                    reason: format!("duplicate property '{}'", name),
                }
                .into());
            }
        }

        Ok(())
    }
}
