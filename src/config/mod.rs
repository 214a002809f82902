//! Configuration system for navreplay.
//!
//! This module provides the configuration structure for navreplay with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and overridden by command-line
//! arguments.
//!
//! # Example
//!
//! ```
//! use navreplay::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.empty_domain, "");
//! assert!(!config.create_backup);
//!
//! // Create custom configuration
//! let custom = Config {
//!     empty_domain: "about:blank".to_string(),
//!     ..Config::default()
//! };
//! assert!(!custom.compress_output);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the navreplay application.
///
/// # Fields
///
/// * `empty_domain` - Rendered in place of the domain for pages visited before any domain (default: "")
/// * `create_backup` - Create .bak files before overwriting an output file (default: false)
/// * `compress_output` - Gzip the output file regardless of its extension (default: false)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Marker used as the domain of routes that have none
    #[serde(default)]
    pub empty_domain: String,

    /// Create .bak files before overwriting
    #[serde(default)]
    pub create_backup: bool,

    /// Always gzip the output file
    #[serde(default)]
    pub compress_output: bool,
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/navreplay/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("navreplay");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from<P: AsRef<std::path::Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(config_path)
    }

    /// Saves configuration to `path`.
    pub fn save_to<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
