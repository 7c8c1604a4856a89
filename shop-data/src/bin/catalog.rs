use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shop_core::CategoryFilter;
use shop_core::pricing::round_half_up;
use shop_data::{CatalogLoader, builtin_catalog};

/// Validate a catalog CSV file and print its products.
///
/// The CSV file should have the following columns:
/// - id: Unique product id
/// - name: Product name
/// - unit_price: Price per kilogram
/// - weight_grams: Default sale weight in grams
/// - category: Category name (e.g. Овощи, Фрукты)
/// - image: Image reference
#[derive(Parser, Debug)]
#[command(name = "shop-catalog")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the catalog CSV file; the built-in catalog when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Only print products of this category
    #[arg(short, long)]
    category: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let catalog = match &args.file {
        Some(path) => {
            println!("Loading catalog from: {}", path.display());
            CatalogLoader::load_from_file(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?
        }
        None => builtin_catalog().context("Built-in catalog is invalid")?,
    };

    let filter = args
        .category
        .as_deref()
        .map_or(CategoryFilter::All, CategoryFilter::parse);

    let products = catalog.filter_by_category(&filter);
    for product in &products {
        println!(
            "{:>4}  {:<20} {:>10.2} Руб./кг  {:>5} г  {}",
            product.id,
            product.name,
            round_half_up(product.unit_price),
            product.weight_grams,
            product.category
        );
    }

    println!(
        "Catalog is valid: {} products, {} shown ({}).",
        catalog.len(),
        products.len(),
        filter
    );

    Ok(())
}
