use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::{Catalog, CatalogError};

/// Source-agnostic catalog configuration.
///
/// `source` must match the [`CatalogSourceFactory::source_name`] of a
/// registered factory. `location` is passed through to that factory
/// unchanged; its meaning is entirely source-specific.
///
/// | source    | location examples             |
/// |-----------|-------------------------------|
/// | `builtin` | (unused)                      |
/// | `csv`     | `catalog.csv`, `/srv/shop.csv`|
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"csv"`).
    pub source: String,
    /// Opaque value forwarded to the factory's `load` method.
    pub location: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: "builtin".to_string(),
            location: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogSourceError {
    #[error("unknown catalog source '{requested}'; available: {available:?}")]
    UnknownSource {
        requested: String,
        available: Vec<&'static str>,
    },

    #[error("catalog source '{0}' requires a location")]
    MissingLocation(&'static str),

    #[error("failed to read catalog: {0}")]
    Load(String),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// One implementation per way of obtaining a catalog. Each is registered
/// with a [`CatalogRegistry`] at startup.
pub trait CatalogSourceFactory: Send + Sync {
    /// Unique, lowercase identifier for this source.
    fn source_name(&self) -> &'static str;

    fn load(
        &self,
        config: &CatalogConfig,
    ) -> Result<Catalog, CatalogSourceError>;
}

/// Registry of [`CatalogSourceFactory`] instances, keyed by source name.
pub struct CatalogRegistry {
    factories: HashMap<&'static str, Box<dyn CatalogSourceFactory>>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a source factory, replacing any factory with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn CatalogSourceFactory>,
    ) {
        self.factories.insert(factory.source_name(), factory);
    }

    /// Names of every registered source, sorted alphabetically.
    pub fn available_sources(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.source`.
    ///
    /// # Errors
    /// * [`CatalogSourceError::UnknownSource`] when nothing is registered
    ///   under the requested name.
    /// * Any error the chosen factory itself returns.
    pub fn load(
        &self,
        config: &CatalogConfig,
    ) -> Result<Catalog, CatalogSourceError> {
        let factory = self.factories.get(config.source.as_str()).ok_or_else(|| {
            CatalogSourceError::UnknownSource {
                requested: config.source.clone(),
                available: self.available_sources(),
            }
        })?;

        debug!(source = %config.source, location = ?config.location, "loading catalog");
        factory.load(config)
    }
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::new()
    }
}
