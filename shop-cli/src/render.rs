//! Text rendering of the storefront views.

use std::fmt::Write;

use shop_core::CartTotals;

use crate::state::AppState;
use crate::utils::{format_price, weight_label};

pub const EMPTY_CART: &str = "Пустенько";
pub const CHECKOUT_ACK: &str = "Заказ оформлен! Спасибо за покупку в Магните!";

/// The always-visible header: item count and total price.
pub fn header(totals: &CartTotals) -> String {
    format!(
        "{} шт. | {} Руб.",
        totals.total_items,
        format_price(totals.total_price)
    )
}

/// Product cards for the selected category, with the chosen weight and the
/// quantity already in the cart.
pub fn catalog_view(app: &AppState) -> String {
    let cart = app.cart();
    let mut out = String::new();

    let _ = writeln!(out, "== {} ==", cart.category());
    for product in app.visible_products() {
        let _ = write!(
            out,
            "{:>4}  {:<20} {:>10} Руб./кг  {:>7}",
            product.id,
            product.name,
            format_price(product.unit_price),
            weight_label(cart.weight_for(product)),
        );
        let quantity = cart.quantity(product.id);
        if quantity > 0 {
            let _ = write!(out, "  [в корзине: {quantity}]");
        }
        out.push('\n');
    }
    out
}

/// The cart panel: one line per product with its price, then the totals.
pub fn cart_view(app: &AppState) -> String {
    let lines = app.cart().lines(app.catalog());
    if lines.is_empty() {
        return format!("{EMPTY_CART}\n");
    }

    let mut out = String::new();
    for line in &lines {
        let _ = writeln!(
            out,
            "{:>4}  {:<20} {} Руб./кг * {} шт. ({})  {:>10} Руб.",
            line.product.id,
            line.product.name,
            format_price(line.product.unit_price),
            line.quantity,
            weight_label(line.weight_grams),
            format_price(line.line_price),
        );
    }

    let totals = app.totals();
    let _ = writeln!(out, "Товаров: {} шт.", totals.total_items);
    let _ = writeln!(out, "Итого: {} Руб.", format_price(totals.total_price));
    out
}

/// Banner shown under the catalog while the cart panel is closed and the
/// cart holds something.
pub fn summary(app: &AppState) -> Option<String> {
    let totals = app.totals();
    if app.cart().is_cart_visible() || totals.total_items == 0 {
        return None;
    }
    Some(format!(
        "В корзине: {} товаров на сумму {} Руб.",
        totals.total_items,
        format_price(totals.total_price)
    ))
}
