//! The cart model: an immutable [`CartState`] value threaded through pure
//! reducers, plus the totals derived from it.
//!
//! Every reducer takes `&self` and returns the next state; the caller owns
//! the single current value and replaces it after each user action.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use shop_core::{CartState, Catalog, Product};
//!
//! let product = |id, unit_price| Product {
//!     id,
//!     name: format!("product {id}"),
//!     unit_price,
//!     weight_grams: 1000,
//!     category: "Овощи".to_string(),
//!     image: String::new(),
//! };
//! let catalog = Catalog::new(vec![product(1, dec!(59)), product(2, dec!(119))]).unwrap();
//!
//! let cart = CartState::new().add_to_cart(1).add_to_cart(1).add_to_cart(2);
//! let totals = cart.compute_totals(&catalog);
//!
//! assert_eq!(totals.total_items, 3);
//! assert_eq!(totals.total_price, dec!(237));
//! ```

mod intent;
mod state;
mod totals;

pub use intent::CartIntent;
pub use state::CartState;
pub use totals::{CartLine, CartTotals};
