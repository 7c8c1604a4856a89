use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CategoryFilter, Product, ProductId, WeightOption};

/// Everything the storefront remembers between user actions.
///
/// Invariant: a product id maps either to nothing or to a strictly positive
/// quantity. Reducers delete entries instead of storing zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    /// Ordered by product id, which is also the display order of the cart.
    items: BTreeMap<ProductId, u32>,

    /// Weight options the customer picked, kept apart from the quantities.
    weights: BTreeMap<ProductId, WeightOption>,

    category: CategoryFilter,
    cart_visible: bool,
}

impl CartState {
    /// An empty cart showing the whole catalog with the cart panel hidden.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── queries ─────────────────────────────────────────────────────────

    /// Selected quantity, 0 when the product is not in the cart.
    pub fn quantity(
        &self,
        id: ProductId,
    ) -> u32 {
        self.items.get(&id).copied().unwrap_or(0)
    }

    /// Cart entries in product id order.
    pub fn entries(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.items.iter().map(|(&id, &quantity)| (id, quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn distinct_items(&self) -> usize {
        self.items.len()
    }

    /// Sum of every quantity in the cart, without consulting a catalog.
    pub fn item_count(&self) -> u64 {
        self.items.values().map(|&quantity| u64::from(quantity)).sum()
    }

    pub fn weight_override(
        &self,
        id: ProductId,
    ) -> Option<WeightOption> {
        self.weights.get(&id).copied()
    }

    /// The weight a unit of `product` is priced at: the selected option if
    /// any, otherwise the product's own weight.
    pub fn weight_for(
        &self,
        product: &Product,
    ) -> u32 {
        self.weight_override(product.id)
            .map_or(product.weight_grams, WeightOption::grams)
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn is_cart_visible(&self) -> bool {
        self.cart_visible
    }

    // ─── reducers ────────────────────────────────────────────────────────

    /// Adds one unit, inserting the product at 1 if it is not in the cart.
    #[must_use]
    pub fn add_to_cart(
        &self,
        id: ProductId,
    ) -> Self {
        let mut next = self.clone();
        let quantity = next.items.entry(id).or_insert(0);
        *quantity = quantity.saturating_add(1);
        next
    }

    /// Removes one unit. The entry disappears when it would drop to zero;
    /// an absent product is left alone.
    #[must_use]
    pub fn remove_from_cart(
        &self,
        id: ProductId,
    ) -> Self {
        let mut next = self.clone();
        match next.quantity(id) {
            0 => {}
            1 => {
                next.items.remove(&id);
            }
            quantity => {
                next.items.insert(id, quantity - 1);
            }
        }
        next
    }

    /// Sets an absolute quantity. Zero deletes the entry; a negative value,
    /// or one too large to hold, leaves the state unchanged.
    #[must_use]
    pub fn set_quantity(
        &self,
        id: ProductId,
        new_quantity: i64,
    ) -> Self {
        let Ok(quantity) = u32::try_from(new_quantity) else {
            debug!(product_id = id, new_quantity, "quantity rejected");
            return self.clone();
        };

        let mut next = self.clone();
        if quantity == 0 {
            next.items.remove(&id);
        } else {
            next.items.insert(id, quantity);
        }
        next
    }

    /// Same as `set_quantity(id, 0)`.
    #[must_use]
    pub fn remove_item(
        &self,
        id: ProductId,
    ) -> Self {
        self.set_quantity(id, 0)
    }

    /// Clears the cart and the selected weights and hides the cart panel.
    /// The category filter belongs to the catalog view and is kept.
    #[must_use]
    pub fn checkout(&self) -> Self {
        Self {
            category: self.category.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn select_weight(
        &self,
        id: ProductId,
        weight: WeightOption,
    ) -> Self {
        let mut next = self.clone();
        next.weights.insert(id, weight);
        next
    }

    #[must_use]
    pub fn clear_weight(
        &self,
        id: ProductId,
    ) -> Self {
        let mut next = self.clone();
        next.weights.remove(&id);
        next
    }

    #[must_use]
    pub fn select_category(
        &self,
        category: CategoryFilter,
    ) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn show_cart(&self) -> Self {
        Self {
            cart_visible: true,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn hide_cart(&self) -> Self {
        Self {
            cart_visible: false,
            ..self.clone()
        }
    }
}
