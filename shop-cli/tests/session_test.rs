//! End-to-end storefront sessions: config file, catalog source and shell
//! script driven together.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use shop_cli::{AppState, ConfigOverrides, ShopConfig, render, shell};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Loads the fixture config with the catalog location resolved against the
/// fixtures directory.
fn fixture_session() -> AppState {
    let config = ShopConfig::load(Some(&fixture("storefront.toml")))
        .expect("fixture config")
        .with_overrides(ConfigOverrides {
            catalog_location: Some(fixture("catalog.csv").display().to_string()),
            ..ConfigOverrides::default()
        });

    let catalog = shop_data::build_registry()
        .load(&config.catalog_config())
        .expect("fixture catalog");
    AppState::new(catalog)
}

fn run_script(
    app: &mut AppState,
    script: &str,
) -> String {
    let mut output = Vec::new();
    shell::run(app, script.as_bytes(), &mut output).expect("in-memory io");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn test_fixture_config_selects_csv_source() {
    let config = ShopConfig::load(Some(&fixture("storefront.toml"))).expect("fixture config");

    assert_eq!(config.catalog_config().source, "csv");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_full_session_with_weight_override() {
    let mut app = fixture_session();
    assert_eq!(app.catalog().len(), 4);

    let output = run_script(
        &mut app,
        "add 1\nadd 1\nset 18 2\nweight 18 1кг\ncart\n",
    );

    let totals = app.totals();
    assert_eq!(totals.total_items, 4);
    assert_eq!(totals.total_price, dec!(898));
    assert!(output.contains("4 шт. | 898.00 Руб."));
    assert!(output.contains("Итого: 898.00 Руб."));
    assert!(app.cart().is_cart_visible());
}

#[test]
fn test_checkout_keeps_category_and_clears_cart() {
    let mut app = fixture_session();

    let output = run_script(&mut app, "category Фрукты\nadd 16\ncheckout\nlist\n");

    assert!(output.contains(render::CHECKOUT_ACK));
    assert!(app.cart().is_empty());
    assert_eq!(app.cart().category().as_str(), "Фрукты");
    let visible: Vec<_> = app.visible_products().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![16, 18]);
}

#[test]
fn test_negative_quantity_leaves_cart_unchanged() {
    let mut app = fixture_session();

    run_script(&mut app, "set 2 3\nset 2 -1\n");

    assert_eq!(app.cart().quantity(2), 3);
    assert_eq!(app.totals().total_price, dec!(357));
}

#[test]
fn test_remove_and_drop() {
    let mut app = fixture_session();

    let output = run_script(&mut app, "set 1 3\nremove 1\nadd 2\ndrop 1\ncart\n");

    assert_eq!(app.cart().quantity(1), 0);
    assert_eq!(app.cart().quantity(2), 1);
    assert!(output.contains("1 шт. | 119.00 Руб."));
}
