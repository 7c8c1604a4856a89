use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use shop_core::pricing::round_half_up;
use shop_core::{ProductId, WeightOption};
use thiserror::Error;

static WEIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<value>\d+(?:[.,]\d+)?)\s*(?P<unit>г|гр|g|кг|kg)?$")
        .expect("weight pattern is a valid regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseInputError {
    #[error("invalid product id '{0}'")]
    ProductId(String),

    #[error("invalid quantity '{0}'")]
    Quantity(String),

    #[error("unsupported weight '{0}'; choose one of 250 г, 500 г, 1 кг, 1.5 кг, 2 кг")]
    Weight(String),
}

/// Formats a money amount with exactly two decimals, rounding half-up.
pub fn format_price(amount: Decimal) -> String {
    format!("{:.2}", round_half_up(amount))
}

/// Human label for a weight: the option label when it is one of the
/// offered weights, otherwise plain grams.
pub fn weight_label(grams: u32) -> String {
    WeightOption::from_grams(grams)
        .map(|option| option.label().to_string())
        .unwrap_or_else(|| format!("{grams} г"))
}

pub fn parse_product_id(s: &str) -> Result<ProductId, ParseInputError> {
    s.trim()
        .parse()
        .map_err(|_| ParseInputError::ProductId(s.to_string()))
}

/// Parses a signed quantity. Negative values are passed through; the cart
/// decides what to do with them.
pub fn parse_quantity(s: &str) -> Result<i64, ParseInputError> {
    s.trim().parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid quantity: {}", e);
        ParseInputError::Quantity(s.to_string())
    })
}

/// Parses a weight such as `500`, `500г`, `1.5 кг` or `1,5kg` into one of
/// the offered weight options. A bare number is grams.
pub fn parse_weight(s: &str) -> Result<WeightOption, ParseInputError> {
    let invalid = || ParseInputError::Weight(s.to_string());

    let normalized = s.trim().to_lowercase();
    let captures = WEIGHT_PATTERN.captures(&normalized).ok_or_else(invalid)?;

    let value: Decimal = captures["value"].replace(',', ".").parse().map_err(|_| invalid())?;
    let grams = match captures.name("unit").map(|unit| unit.as_str()) {
        Some("кг" | "kg") => value * Decimal::ONE_THOUSAND,
        _ => value,
    };

    if !grams.fract().is_zero() {
        return Err(invalid());
    }
    grams
        .to_u32()
        .and_then(WeightOption::from_grams)
        .ok_or_else(invalid)
}
