use std::fmt;

use serde::{Deserialize, Serialize};

use super::Product;

/// Sentinel label that selects the whole catalog.
pub const ALL_PRODUCTS: &str = "Все товары";
pub const VEGETABLES: &str = "Овощи";
pub const FRUITS: &str = "Фрукты";

/// Category choices offered to the customer, in display order.
pub const CATEGORIES: [&str; 3] = [ALL_PRODUCTS, VEGETABLES, FRUITS];

/// The category the catalog view is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Maps the [`ALL_PRODUCTS`] label to [`CategoryFilter::All`]; any other
    /// label narrows to that exact category name.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label == ALL_PRODUCTS {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_PRODUCTS,
            Self::Only(name) => name,
        }
    }

    pub fn matches(
        &self,
        product: &Product,
    ) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => product.category == *name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
