mod category;
mod product;
mod weight_option;

pub use category::{ALL_PRODUCTS, CATEGORIES, CategoryFilter, FRUITS, VEGETABLES};
pub use product::{Product, ProductId};
pub use weight_option::WeightOption;
