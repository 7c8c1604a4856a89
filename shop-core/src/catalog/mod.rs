//! The read-only product catalog and category filtering.

pub mod source;

use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{CategoryFilter, Product, ProductId};

pub use source::{CatalogConfig, CatalogRegistry, CatalogSourceError, CatalogSourceFactory};

/// Reasons a product list is refused as a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("product {0} has an empty name")]
    EmptyName(ProductId),

    #[error("product {id} has non-positive unit price {price}")]
    NonPositivePrice { id: ProductId, price: Decimal },

    #[error("product {0} has zero weight")]
    ZeroWeight(ProductId),
}

impl CatalogError {
    /// The offending product.
    pub fn product_id(&self) -> ProductId {
        match self {
            Self::DuplicateId(id) | Self::EmptyName(id) | Self::ZeroWeight(id) => *id,
            Self::NonPositivePrice { id, .. } => *id,
        }
    }
}

/// An immutable, validated list of products in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on the first product that has a duplicate id,
    /// an empty name, a unit price of zero or less, or a zero weight.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
            if product.unit_price <= Decimal::ZERO {
                return Err(CatalogError::NonPositivePrice {
                    id: product.id,
                    price: product.unit_price,
                });
            }
            if product.weight_grams == 0 {
                return Err(CatalogError::ZeroWeight(product.id));
            }
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self { products, index })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(
        &self,
        id: ProductId,
    ) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Products shown under `filter`, in catalog order.
    pub fn filter_by_category(
        &self,
        filter: &CategoryFilter,
    ) -> Vec<&Product> {
        filter_by_category(&self.products, filter)
    }

    /// Distinct category names in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }
}

/// Returns the whole list for [`CategoryFilter::All`], otherwise the ordered
/// subsequence whose category equals the filter's name. No match yields an
/// empty vector.
pub fn filter_by_category<'a>(
    products: &'a [Product],
    filter: &CategoryFilter,
) -> Vec<&'a Product> {
    products.iter().filter(|product| filter.matches(product)).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{ALL_PRODUCTS, FRUITS, VEGETABLES};

    fn product(
        id: ProductId,
        category: &str,
    ) -> Product {
        Product {
            id,
            name: format!("product {id}"),
            unit_price: dec!(100),
            weight_grams: 1000,
            category: category.to_string(),
            image: format!("image/{id}.jpg"),
        }
    }

    fn mixed_catalog() -> Catalog {
        Catalog::new(vec![
            product(1, VEGETABLES),
            product(16, FRUITS),
            product(2, VEGETABLES),
            product(17, FRUITS),
        ])
        .expect("valid catalog")
    }

    fn ids(products: &[&Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id).collect()
    }

    // =========================================================================
    // construction tests
    // =========================================================================

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![product(1, VEGETABLES), product(1, FRUITS)]);

        assert_eq!(result, Err(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn new_rejects_zero_price() {
        let mut free = product(3, VEGETABLES);
        free.unit_price = dec!(0);

        let result = Catalog::new(vec![free]);

        assert_eq!(
            result,
            Err(CatalogError::NonPositivePrice {
                id: 3,
                price: dec!(0)
            })
        );
    }

    #[test]
    fn new_rejects_zero_weight() {
        let mut weightless = product(4, FRUITS);
        weightless.weight_grams = 0;

        assert_eq!(
            Catalog::new(vec![weightless]),
            Err(CatalogError::ZeroWeight(4))
        );
    }

    #[test]
    fn new_rejects_blank_name() {
        let mut nameless = product(5, FRUITS);
        nameless.name = "  ".to_string();

        assert_eq!(Catalog::new(vec![nameless]), Err(CatalogError::EmptyName(5)));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).expect("empty catalog");

        assert!(catalog.is_empty());
        assert_eq!(catalog.find(1), None);
    }

    #[test]
    fn find_locates_product_by_id() {
        let catalog = mixed_catalog();

        assert_eq!(catalog.find(17).map(|p| p.id), Some(17));
        assert_eq!(catalog.find(99), None);
    }

    #[test]
    fn categories_are_listed_in_first_appearance_order() {
        assert_eq!(mixed_catalog().categories(), vec![VEGETABLES, FRUITS]);
    }

    // =========================================================================
    // filter_by_category tests
    // =========================================================================

    #[test]
    fn filter_all_returns_catalog_unchanged() {
        let catalog = mixed_catalog();

        let result = catalog.filter_by_category(&CategoryFilter::parse(ALL_PRODUCTS));

        assert_eq!(result.len(), catalog.len());
        assert_eq!(ids(&result), vec![1, 16, 2, 17]);
    }

    #[test]
    fn filter_keeps_catalog_order_within_category() {
        let catalog = mixed_catalog();

        let result = catalog.filter_by_category(&CategoryFilter::parse(FRUITS));

        assert_eq!(ids(&result), vec![16, 17]);
    }

    #[test]
    fn filter_with_unknown_category_is_empty() {
        let catalog = mixed_catalog();

        let result = catalog.filter_by_category(&CategoryFilter::parse("Молоко"));

        assert!(result.is_empty());
    }

    #[test]
    fn filter_matches_exact_name_only() {
        let catalog = mixed_catalog();

        let result = catalog.filter_by_category(&CategoryFilter::Only("овощи".to_string()));

        assert!(result.is_empty());
    }
}
