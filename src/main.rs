use std::sync::Arc;

use anyhow::{Context, Result};

use consolelog::app::App;
use consolelog::config::{self, Config};
use consolelog::console::LogStore;
use consolelog::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure config directory exists (creates logs dir too)
    config::ensure_directories()?;

    // Initialize file logging BEFORE any tracing calls
    let (log_file_info, _guard) = logging::init_file_logging(config::logs_dir())?;

    let config = Config::load().context("Failed to load configuration")?;

    match logging::cleanup_old_logs(&config::logs_dir(), config.log_retention_days) {
        Ok(count) if count > 0 => tracing::info!("Cleaned up {} old log files", count),
        Ok(_) => {}
        Err(e) => tracing::warn!("Log cleanup failed: {:#}", e),
    }

    tracing::info!("Logging to: {}", log_file_info.path.display());

    let console = Arc::new(LogStore::new(config.log_capacity));

    // Run the application
    let mut app = App::new(config, console, log_file_info);
    app.run().await
}
