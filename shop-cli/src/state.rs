//! Session state for the storefront shell.
//!
//! Pairs the loaded catalog with the current cart and routes user intents
//! through the cart reducers.

use shop_core::{CartIntent, CartState, CartTotals, Catalog, Product, ProductId};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no product with id {0}")]
    UnknownProduct(ProductId),
}

#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Catalog,
    cart: CartState,
}

impl AppState {
    /// Starts a session with an empty cart over `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: CartState::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.compute_totals(&self.catalog)
    }

    /// Products shown under the currently selected category.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter_by_category(self.cart.category())
    }

    /// Applies `intent` to the cart.
    ///
    /// Intents that would put a product into the cart are checked against
    /// the catalog first; on error the cart is left untouched. Removals,
    /// including setting a quantity of zero or less, are not checked so
    /// stale entries can always be taken out.
    pub fn dispatch(
        &mut self,
        intent: &CartIntent,
    ) -> Result<(), SessionError> {
        let stocked_id = match intent {
            CartIntent::Add(id) | CartIntent::SelectWeight { product_id: id, .. } => Some(*id),
            CartIntent::SetQuantity {
                product_id,
                quantity,
            } if *quantity > 0 => Some(*product_id),
            _ => None,
        };
        if let Some(id) = stocked_id
            && self.catalog.find(id).is_none()
        {
            return Err(SessionError::UnknownProduct(id));
        }

        debug!(?intent, "dispatch");
        self.cart = self.cart.apply(intent);
        Ok(())
    }

    /// Places the order: clears the cart and returns the totals it had.
    pub fn checkout(&mut self) -> CartTotals {
        let totals = self.totals();
        self.cart = self.cart.checkout();
        totals
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use shop_core::{CategoryFilter, WeightOption};

    use super::*;

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

    fn session() -> AppState {
        let catalog = Catalog::new(vec![product(1, "Овощи"), product(2, "Фрукты")])
            .expect("valid catalog");
        AppState::new(catalog)
    }

    #[test]
    fn dispatch_updates_cart_and_totals() {
        let mut app = session();

        app.dispatch(&CartIntent::Add(1)).expect("known id");
        app.dispatch(&CartIntent::Add(1)).expect("known id");
        app.dispatch(&CartIntent::SelectWeight {
            product_id: 2,
            weight: WeightOption::Grams500,
        })
        .expect("known id");
        app.dispatch(&CartIntent::Add(2)).expect("known id");

        assert_eq!(
            app.totals(),
            CartTotals {
                total_items: 3,
                total_price: dec!(250),
            }
        );
    }

    #[test]
    fn unknown_product_is_rejected_without_change() {
        let mut app = session();
        app.dispatch(&CartIntent::Add(1)).expect("known id");
        let before = app.cart().clone();

        for intent in [
            CartIntent::Add(99),
            CartIntent::SetQuantity {
                product_id: 99,
                quantity: 2,
            },
            CartIntent::SelectWeight {
                product_id: 99,
                weight: WeightOption::Kilogram,
            },
        ] {
            assert_eq!(app.dispatch(&intent), Err(SessionError::UnknownProduct(99)));
        }

        assert_eq!(app.cart(), &before);
    }

    #[test]
    fn removal_of_unknown_id_is_a_no_op() {
        let mut app = session();

        assert_eq!(app.dispatch(&CartIntent::Remove(99)), Ok(()));
        assert_eq!(app.dispatch(&CartIntent::RemoveItem(99)), Ok(()));
        assert!(app.cart().is_empty());
    }

    #[test]
    fn zero_quantity_for_stale_entry_is_accepted() {
        let mut app = AppState {
            catalog: session().catalog,
            cart: CartState::new().set_quantity(99, 2),
        };

        assert_eq!(
            app.dispatch(&CartIntent::SetQuantity {
                product_id: 99,
                quantity: 0,
            }),
            Ok(())
        );
        assert_eq!(app.cart().quantity(99), 0);
        assert_eq!(
            app.dispatch(&CartIntent::SetQuantity {
                product_id: 99,
                quantity: 1,
            }),
            Err(SessionError::UnknownProduct(99))
        );
    }

    #[test]
    fn checkout_returns_placed_totals_and_clears() {
        let mut app = session();
        app.dispatch(&CartIntent::Add(2)).expect("known id");

        let placed = app.checkout();

        assert_eq!(placed.total_price, dec!(100));
        assert!(app.cart().is_empty());
        assert_eq!(app.totals(), CartTotals::default());
    }

    #[test]
    fn visible_products_follow_category() {
        let mut app = session();
        assert_eq!(app.visible_products().len(), 2);

        app.dispatch(&CartIntent::SelectCategory(CategoryFilter::Only(
            "Фрукты".to_string(),
        )))
        .expect("category");

        let ids: Vec<ProductId> = app.visible_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
