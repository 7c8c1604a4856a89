use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use shop_cli::{AppState, ConfigOverrides, ShopConfig, logging, render, shell};
use shop_core::{CartIntent, CategoryFilter};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Grocery storefront: browse the catalog, fill a cart, check out.
///
/// Settings come from an optional TOML config file; the flags below
/// override it.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog source to load from (`builtin` or `csv`).
    #[arg(long)]
    catalog_source: Option<String>,

    /// Catalog location for sources that need one, e.g. a CSV path.
    #[arg(long)]
    catalog: Option<String>,

    /// Log level or filter directive. `RUST_LOG` takes precedence.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Print the catalog and exit.
    Catalog {
        /// Show only this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Interactive session on stdin/stdout (default).
    Shell,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ShopConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(ConfigOverrides {
            catalog_source: cli.catalog_source,
            catalog_location: cli.catalog,
            log_level: cli.log_level,
            log_file: cli.log_file,
        });

    logging::init_logging(&config.logging.level);
    if let Some(path) = &config.logging.file {
        logging::enable_file_logging(path)?;
    }

    let catalog_config = config.catalog_config();
    debug!("loading catalog from {} source", catalog_config.source);
    let catalog = shop_data::build_registry()
        .load(&catalog_config)
        .with_context(|| format!("failed to load '{}' catalog", catalog_config.source))?;
    info!(products = catalog.len(), "catalog ready");

    let mut app = AppState::new(catalog);

    match cli.command.unwrap_or(Mode::Shell) {
        Mode::Catalog { category } => {
            if let Some(category) = category {
                app.dispatch(&CartIntent::SelectCategory(CategoryFilter::parse(&category)))?;
            }
            print!("{}", render::catalog_view(&app));
        }
        Mode::Shell => {
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            shell::run(&mut app, stdin, &mut stdout).context("session I/O failed")?;
        }
    }

    Ok(())
}
