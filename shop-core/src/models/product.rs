use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type ProductId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,

    /// Price per kilogram.
    pub unit_price: Decimal,

    /// Weight a single unit is sold at unless a weight option is selected.
    pub weight_grams: u32,

    pub category: String,
    pub image: String,
}
