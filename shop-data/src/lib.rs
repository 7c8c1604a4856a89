mod loader;
mod sources;

pub use loader::{CatalogLoader, CatalogLoaderError, ProductRecord, builtin_catalog};
pub use sources::{BuiltinCatalogFactory, CsvCatalogFactory, build_registry};
