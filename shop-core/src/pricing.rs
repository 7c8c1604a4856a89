//! Price arithmetic shared by the cart and the presentation layer.
//!
//! Unit prices are quoted per kilogram. A cart line is priced as
//! `unit_price × quantity × (weight_grams / 1000)`.

use rust_decimal::Decimal;

/// Converts a weight in grams to a fraction of a kilogram.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use shop_core::pricing::weight_fraction;
///
/// assert_eq!(weight_fraction(1000), dec!(1));
/// assert_eq!(weight_fraction(250), dec!(0.25));
/// assert_eq!(weight_fraction(1500), dec!(1.5));
/// ```
pub fn weight_fraction(weight_grams: u32) -> Decimal {
    Decimal::new(i64::from(weight_grams), 3)
}

/// Price of `quantity` units of a product sold at `weight_grams` each.
///
/// Saturates at [`Decimal::MAX`] instead of overflowing.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use shop_core::pricing::line_price;
///
/// assert_eq!(line_price(dec!(59), 2, 1000), dec!(118));
/// assert_eq!(line_price(dec!(390), 1, 500), dec!(195));
/// ```
pub fn line_price(
    unit_price: Decimal,
    quantity: u32,
    weight_grams: u32,
) -> Decimal {
    unit_price.saturating_mul(Decimal::from(quantity) * weight_fraction(weight_grams))
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use shop_core::pricing::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
