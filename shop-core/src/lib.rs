pub mod cart;
pub mod catalog;
pub mod models;
pub mod pricing;

pub use cart::{CartIntent, CartLine, CartState, CartTotals};
pub use catalog::{Catalog, CatalogError};
pub use models::*;
