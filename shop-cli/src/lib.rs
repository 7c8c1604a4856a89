pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod shell;
pub mod state;
pub mod utils;

pub use config::{ConfigOverrides, ShopConfig};
pub use state::{AppState, SessionError};
