use std::path::Path;

use shop_core::Catalog;
use shop_core::catalog::{
    CatalogConfig, CatalogRegistry, CatalogSourceError, CatalogSourceFactory,
};

use crate::loader::{CatalogLoader, CatalogLoaderError, builtin_catalog};

/// Serves the catalog compiled into the binary. Ignores `location`.
pub struct BuiltinCatalogFactory;

impl CatalogSourceFactory for BuiltinCatalogFactory {
    fn source_name(&self) -> &'static str {
        "builtin"
    }

    fn load(
        &self,
        _config: &CatalogConfig,
    ) -> Result<Catalog, CatalogSourceError> {
        builtin_catalog().map_err(into_source_error)
    }
}

/// Reads a CSV file; `location` is the file path.
pub struct CsvCatalogFactory;

impl CatalogSourceFactory for CsvCatalogFactory {
    fn source_name(&self) -> &'static str {
        "csv"
    }

    fn load(
        &self,
        config: &CatalogConfig,
    ) -> Result<Catalog, CatalogSourceError> {
        let location = config
            .location
            .as_deref()
            .ok_or(CatalogSourceError::MissingLocation("csv"))?;

        CatalogLoader::load_from_file(Path::new(location)).map_err(into_source_error)
    }
}

/// A registry with every catalog source this crate provides.
pub fn build_registry() -> CatalogRegistry {
    let mut registry = CatalogRegistry::new();
    registry.register(Box::new(BuiltinCatalogFactory));
    registry.register(Box::new(CsvCatalogFactory));
    registry
}

fn into_source_error(err: CatalogLoaderError) -> CatalogSourceError {
    match err {
        CatalogLoaderError::InvalidRow { source, .. } => CatalogSourceError::Invalid(source),
        other => CatalogSourceError::Load(other.to_string()),
    }
}
