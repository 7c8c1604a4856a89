//! Storefront configuration.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags.
//!
//! ```toml
//! [catalog]
//! source = "csv"
//! location = "catalog.csv"
//!
//! [logging]
//! level = "debug"
//! file = "storefront.log"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use shop_core::catalog::CatalogConfig;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSection {
    pub source: String,
    pub location: Option<String>,
}

impl Default for CatalogSection {
    fn default() -> Self {
        let defaults = CatalogConfig::default();
        Self {
            source: defaults.source,
            location: defaults.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShopConfig {
    pub catalog: CatalogSection,
    pub logging: LoggingSection,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub catalog_source: Option<String>,
    pub catalog_location: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ShopConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "read config file");
        Self::from_toml_str(&contents)
    }

    pub fn with_overrides(
        mut self,
        overrides: ConfigOverrides,
    ) -> Self {
        if let Some(source) = overrides.catalog_source {
            self.catalog.source = source;
        }
        if let Some(location) = overrides.catalog_location {
            self.catalog.location = Some(location);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        self
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            source: self.catalog.source.to_lowercase(),
            location: self.catalog.location.clone(),
        }
    }
}
