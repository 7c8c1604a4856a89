//! CSV loader for product catalogs.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive. Whitespace around values is trimmed.
//!
//! | Column         | Type    | Notes                                 |
//! |----------------|---------|---------------------------------------|
//! | `id`           | integer | Unique within the file                |
//! | `name`         | string  | Non-empty                             |
//! | `unit_price`   | decimal | Price per kilogram, greater than zero |
//! | `weight_grams` | integer | Default sale weight, greater than zero|
//! | `category`     | string  | Non-empty, e.g. `Овощи`               |
//! | `image`        | string  | Image reference, may be empty         |
//!
//! ```csv
//! id,name,unit_price,weight_grams,category,image
//! 1,Огурцы,59,1000,Овощи,image/1.jpg
//! 18,Манго,390,500,Фрукты,image/18.jpg
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use shop_core::{Catalog, CatalogError, Product, ProductId};
use thiserror::Error;
use tracing::info;

const BUILTIN_CATALOG_CSV: &str = include_str!("../data/catalog.csv");

/// Errors that can occur when loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("empty category on row {row}")]
    EmptyCategory { row: usize },

    /// `row` is 1-based; the header is row 0.
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: CatalogError,
    },

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for CatalogLoaderError {
    fn from(err: csv::Error) -> Self {
        CatalogLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a catalog CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub weight_grams: u32,
    pub category: String,
    pub image: String,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            id: record.id,
            name: record.name,
            unit_price: record.unit_price,
            weight_grams: record.weight_grams,
            category: record.category,
            image: record.image,
        }
    }
}

/// Loader for catalog data in CSV form.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse product records from a CSV reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ProductRecord>, CatalogLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let mut records = Vec::new();
        for (idx, result) in csv_reader.deserialize().enumerate() {
            let record: ProductRecord = result?;
            if record.category.is_empty() {
                return Err(CatalogLoaderError::EmptyCategory { row: idx + 1 });
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Turn parsed records into a validated [`Catalog`].
    ///
    /// Validation failures name the 1-based row of the offending record;
    /// for a duplicate id that is the second occurrence.
    pub fn into_catalog(records: Vec<ProductRecord>) -> Result<Catalog, CatalogLoaderError> {
        let products: Vec<Product> = records.into_iter().map(Product::from).collect();

        Catalog::new(products.clone()).map_err(|source| CatalogLoaderError::InvalidRow {
            row: error_row(&products, &source),
            source,
        })
    }

    /// Parse and validate in one step.
    pub fn load<R: Read>(reader: R) -> Result<Catalog, CatalogLoaderError> {
        Self::into_catalog(Self::parse(reader)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogLoaderError> {
        let file = std::fs::File::open(path).map_err(|source| CatalogLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::load(file)?;

        info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

/// The catalog the shop opens with: 15 vegetables followed by 14 fruits.
pub fn builtin_catalog() -> Result<Catalog, CatalogLoaderError> {
    CatalogLoader::load(BUILTIN_CATALOG_CSV.as_bytes())
}

fn error_row(
    products: &[Product],
    err: &CatalogError,
) -> usize {
    let id = err.product_id();
    let mut positions = products
        .iter()
        .enumerate()
        .filter(|(_, product)| product.id == id)
        .map(|(position, _)| position);

    let position = match err {
        CatalogError::DuplicateId(_) => positions.nth(1),
        _ => positions.next(),
    };
    position.map_or(0, |position| position + 1)
}
