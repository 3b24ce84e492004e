//! Stagehand Application
//!
//! The application shell: configuration, startup loading, windowing and
//! the redraw loop that drives the scene runtime.

mod app;
mod config;
mod keys;

pub use app::{App, AppError};
pub use config::{AppConfig, CONFIG_FILE, ConfigError};

/// Resolve the configuration from `args`, load everything and run until the
/// window closes or a frame fails.
pub fn run(args: impl IntoIterator<Item = String>) -> Result<(), AppError> {
    let config = AppConfig::resolve(args)?;
    App::from_config(config)?.run()
}
