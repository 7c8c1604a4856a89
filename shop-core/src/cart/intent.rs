use serde::{Deserialize, Serialize};

use super::CartState;
use crate::models::{CategoryFilter, ProductId, WeightOption};

/// A user action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartIntent {
    Add(ProductId),
    Remove(ProductId),
    SetQuantity { product_id: ProductId, quantity: i64 },
    RemoveItem(ProductId),
    SelectWeight { product_id: ProductId, weight: WeightOption },
    ClearWeight(ProductId),
    SelectCategory(CategoryFilter),
    ShowCart,
    HideCart,
    Checkout,
}

impl CartState {
    /// Runs the reducer matching `intent`.
    #[must_use]
    pub fn apply(
        &self,
        intent: &CartIntent,
    ) -> Self {
        match intent {
            CartIntent::Add(id) => self.add_to_cart(*id),
            CartIntent::Remove(id) => self.remove_from_cart(*id),
            CartIntent::SetQuantity {
                product_id,
                quantity,
            } => self.set_quantity(*product_id, *quantity),
            CartIntent::RemoveItem(id) => self.remove_item(*id),
            CartIntent::SelectWeight { product_id, weight } => {
                self.select_weight(*product_id, *weight)
            }
            CartIntent::ClearWeight(id) => self.clear_weight(*id),
            CartIntent::SelectCategory(filter) => self.select_category(filter.clone()),
            CartIntent::ShowCart => self.show_cart(),
            CartIntent::HideCart => self.hide_cart(),
            CartIntent::Checkout => self.checkout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_state() -> CartState {
        CartState::new()
            .set_quantity(1, 3)
            .set_quantity(16, 1)
            .select_weight(16, WeightOption::Grams250)
            .show_cart()
    }

    #[test]
    fn apply_matches_direct_reducer_calls() {
        let state = sample_state();
        let fruits = CategoryFilter::Only("Фрукты".to_string());

        let cases = [
            (CartIntent::Add(1), state.add_to_cart(1)),
            (CartIntent::Remove(16), state.remove_from_cart(16)),
            (
                CartIntent::SetQuantity {
                    product_id: 1,
                    quantity: 7,
                },
                state.set_quantity(1, 7),
            ),
            (
                CartIntent::SetQuantity {
                    product_id: 1,
                    quantity: -1,
                },
                state.clone(),
            ),
            (CartIntent::RemoveItem(1), state.remove_item(1)),
            (
                CartIntent::SelectWeight {
                    product_id: 1,
                    weight: WeightOption::TwoKilograms,
                },
                state.select_weight(1, WeightOption::TwoKilograms),
            ),
            (CartIntent::ClearWeight(16), state.clear_weight(16)),
            (
                CartIntent::SelectCategory(fruits.clone()),
                state.select_category(fruits),
            ),
            (CartIntent::ShowCart, state.show_cart()),
            (CartIntent::HideCart, state.hide_cart()),
            (CartIntent::Checkout, state.checkout()),
        ];

        for (intent, expected) in cases {
            assert_eq!(state.apply(&intent), expected, "intent {intent:?}");
        }
    }

    #[test]
    fn intents_replay_in_order() {
        let intents = [
            CartIntent::Add(1),
            CartIntent::Add(1),
            CartIntent::Add(2),
            CartIntent::Remove(1),
            CartIntent::RemoveItem(2),
        ];

        let state = intents
            .iter()
            .fold(CartState::new(), |state, intent| state.apply(intent));

        assert_eq!(state.entries().collect::<Vec<_>>(), vec![(1, 1)]);
    }
}
