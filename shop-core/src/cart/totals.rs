use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CartState;
use crate::catalog::Catalog;
use crate::models::Product;
use crate::pricing::line_price;

/// Totals derived from a cart. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub total_items: u64,

    /// Exact sum of line prices; round with
    /// [`round_half_up`](crate::pricing::round_half_up) for display.
    pub total_price: Decimal,
}

/// One priced cart entry, as listed in the cart panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub weight_grams: u32,
    pub line_price: Decimal,
}

impl CartState {
    /// Priced entries for every cart product found in `catalog`, in cart
    /// order. Entries whose id is missing from the catalog are skipped.
    pub fn lines<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Vec<CartLine<'a>> {
        self.entries()
            .filter_map(|(id, quantity)| {
                let product = catalog.find(id)?;
                let weight_grams = self.weight_for(product);
                Some(CartLine {
                    product,
                    quantity,
                    weight_grams,
                    line_price: line_price(product.unit_price, quantity, weight_grams),
                })
            })
            .collect()
    }

    /// Item count and total price over the entries `catalog` knows about.
    ///
    /// An entry with an unknown product id is ignored entirely, so the result
    /// equals that of the same cart without the stale entry.
    pub fn compute_totals(
        &self,
        catalog: &Catalog,
    ) -> CartTotals {
        self.lines(catalog)
            .iter()
            .fold(CartTotals::default(), |totals, line| CartTotals {
                total_items: totals.total_items.saturating_add(u64::from(line.quantity)),
                total_price: totals.total_price.saturating_add(line.line_price),
            })
    }
}
